use fmt::Display;
use std::fmt;
use std::fmt::Formatter;

/// One `<item>` from the export, fields as found in the document.
/// Missing fields stay empty, the extractor never drops an item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawPost {
    pub title: String,
    pub link: String,
    pub pub_date: String,
    pub content: String,
    pub excerpt: String,
    pub post_date: String,
    pub post_name: String,
    pub status: String,
    pub post_type: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
}

impl RawPost {
    /// Only published blog posts are imported. Pages, drafts and
    /// attachments all fail this check, as does an item where either
    /// field was absent in the export.
    pub fn is_published_post(&self) -> bool {
        self.post_type == "post" && self.status == "publish"
    }
}

impl Display for RawPost {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "title={}, slug={}, type={}, status={}, date={}",
               self.title,
               self.post_name,
               self.post_type,
               self.status,
               self.post_date,
        )
    }
}
