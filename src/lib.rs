pub mod config;
pub mod convert;
pub mod extract;
pub mod frontmatter;
pub mod import;
pub mod logger;
pub mod post;
mod test_data;
pub mod text_utils;
