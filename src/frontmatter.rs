use std::fmt::Write;

use crate::post::RawPost;
use crate::text_utils::format_date;

const LANG: &str = "zh_CN";

/// Renders the frontmatter block for a post, delimiters included.
///
/// ```text
/// ---
/// title: Hello World
/// published: 2026-01-20
/// description: "An excerpt"
/// image: ''
/// tags: ["first","notes"]
/// category: "Life"
/// draft: false
/// lang: 'zh_CN'
/// ---
/// ```
pub fn generate_frontmatter(post: &RawPost) -> String {
    let title = if post.title.is_empty() {
        "Untitled"
    } else {
        post.title.as_str()
    };

    // wp:post_date is local time and preferred; pubDate is the RFC-2822
    // publication timestamp and only a fallback
    let published = if !post.post_date.is_empty() {
        format_date(&post.post_date)
    } else {
        format_date(&post.pub_date)
    };

    let tags = serde_json::to_string(&post.tags).unwrap_or_else(|_| "[]".to_string());
    let category = post.categories.first().map(String::as_str).unwrap_or("");

    let mut buf = String::new();
    let _ = writeln!(&mut buf, "---");
    let _ = writeln!(&mut buf, "title: {}", title);
    let _ = writeln!(&mut buf, "published: {}", published);
    let _ = writeln!(&mut buf, "description: \"{}\"", post.excerpt);
    let _ = writeln!(&mut buf, "image: ''");
    let _ = writeln!(&mut buf, "tags: {}", tags);
    let _ = writeln!(&mut buf, "category: \"{}\"", category);
    let _ = writeln!(&mut buf, "draft: false");
    let _ = writeln!(&mut buf, "lang: '{}'", LANG);
    let _ = writeln!(&mut buf, "---");
    buf
}

#[cfg(test)]
mod tests {
    use crate::text_utils::MALFORMED_DATE;

    use super::*;

    fn sample_post() -> RawPost {
        RawPost {
            title: "Hello World".to_string(),
            pub_date: "Tue, 20 Jan 2026 03:25:10 +0000".to_string(),
            excerpt: "An excerpt".to_string(),
            post_date: "2026-01-20 11:25:10".to_string(),
            status: "publish".to_string(),
            post_type: "post".to_string(),
            categories: vec!["Life".to_string(), "Misc".to_string()],
            tags: vec!["first".to_string(), "notes".to_string()],
            ..RawPost::default()
        }
    }

    #[test]
    fn test_full_header() {
        let header = generate_frontmatter(&sample_post());
        assert_eq!(
            header,
            r#"---
title: Hello World
published: 2026-01-20
description: "An excerpt"
image: ''
tags: ["first","notes"]
category: "Life"
draft: false
lang: 'zh_CN'
---
"#
        );
    }

    #[test]
    fn test_empty_title_falls_back() {
        let mut post = sample_post();
        post.title = "".to_string();
        let header = generate_frontmatter(&post);
        assert!(header.contains("title: Untitled\n"));
    }

    #[test]
    fn test_pub_date_fallback() {
        let mut post = sample_post();
        post.post_date = "".to_string();
        let header = generate_frontmatter(&post);
        assert!(header.contains("published: 2026-01-20\n"));
    }

    #[test]
    fn test_malformed_date_is_visible() {
        let mut post = sample_post();
        post.post_date = "someday".to_string();
        let header = generate_frontmatter(&post);
        assert!(header.contains(&format!("published: {}\n", MALFORMED_DATE)));
    }

    #[test]
    fn test_empty_collections() {
        let mut post = sample_post();
        post.tags.clear();
        post.categories.clear();
        post.excerpt = "".to_string();
        let header = generate_frontmatter(&post);
        assert!(header.contains("tags: []\n"));
        assert!(header.contains("category: \"\"\n"));
        assert!(header.contains("description: \"\"\n"));
    }
}
