use std::fs;
use std::io;
use std::path::Path;

use crate::convert::wordpress_to_markdown;
use crate::extract::extract_posts;
use crate::frontmatter::generate_frontmatter;
use crate::post::RawPost;
use crate::text_utils::sanitize_filename;

pub struct ImportReport {
    pub found: usize,
    pub imported: usize,
    pub skipped: usize,
}

/// Runs the whole pipeline over an export document, writing one Markdown
/// file per published post into `out_dir`.
///
/// Posts are processed strictly in document order. A post without a title
/// or content is skipped, as is a post whose target file already exists;
/// both count towards `skipped`. A write error aborts the remaining run,
/// files written so far stay on disk.
pub fn import_posts(xml: &str, out_dir: &Path) -> io::Result<ImportReport> {
    let posts: Vec<RawPost> = extract_posts(xml)
        .filter(|post| post.is_published_post())
        .collect();

    println!("Found {} published posts", posts.len());

    let mut imported = 0;
    let mut skipped = 0;

    for (index, post) in posts.iter().enumerate() {
        if post.title.is_empty() || post.content.is_empty() {
            println!("Skipping post {}: Missing title or content", index + 1);
            skipped += 1;
            continue;
        }

        let markdown = wordpress_to_markdown(&post.content);
        let frontmatter = generate_frontmatter(post);

        let mut filename = sanitize_filename(&post.title);
        if !filename.ends_with(".md") {
            filename.push_str(".md");
        }

        let file_path = out_dir.join(&filename);
        if file_path.exists() {
            println!("Skipping existing file: {}", filename);
            skipped += 1;
            continue;
        }

        fs::write(&file_path, format!("{}\n{}", frontmatter, markdown))?;
        println!("Imported: {} ({})", filename, post.title);
        imported += 1;
    }

    Ok(ImportReport {
        found: posts.len(),
        imported,
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::path::PathBuf;

    use crate::test_data::WXR_MIXED_EXPORT;

    use super::*;

    fn temp_out_dir(tag: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("wxr-import-{}-{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_mixed_export_end_to_end() {
        let out_dir = temp_out_dir("mixed");

        let report = import_posts(WXR_MIXED_EXPORT, &out_dir).unwrap();
        assert_eq!(report.found, 3);
        assert_eq!(report.imported, 3);
        assert_eq!(report.skipped, 0);
        assert_eq!(report.skipped, report.found - report.imported);

        let mut files: Vec<String> = fs::read_dir(&out_dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        files.sort();
        assert_eq!(files, ["First-Post.md", "Second-Post.md", "Third-Post.md"]);

        let first = fs::read_to_string(out_dir.join("First-Post.md")).unwrap();
        assert_eq!(
            first,
            r#"---
title: First Post
published: 2026-01-05
description: ""
image: ''
tags: []
category: "Life"
draft: false
lang: 'zh_CN'
---

Hello"#
        );

        let second = fs::read_to_string(out_dir.join("Second-Post.md")).unwrap();
        assert!(second.contains("## Notes\n\n- one\n- two"));
        assert!(second.contains("tags: [\"notes\"]\n"));

        let _ = fs::remove_dir_all(&out_dir);
    }

    #[test]
    fn test_existing_target_is_skipped() {
        let out_dir = temp_out_dir("dup");

        // Two published posts whose titles sanitize to the same filename
        let xml = r#"
            <item>
                <title><![CDATA[Same Name]]></title>
                <content:encoded><![CDATA[<p>one</p>]]></content:encoded>
                <wp:post_date><![CDATA[2026-01-05 16:00:00]]></wp:post_date>
                <wp:status><![CDATA[publish]]></wp:status>
                <wp:post_type><![CDATA[post]]></wp:post_type>
            </item>
            <item>
                <title><![CDATA[Same: Name]]></title>
                <content:encoded><![CDATA[<p>two</p>]]></content:encoded>
                <wp:post_date><![CDATA[2026-01-06 16:00:00]]></wp:post_date>
                <wp:status><![CDATA[publish]]></wp:status>
                <wp:post_type><![CDATA[post]]></wp:post_type>
            </item>
        "#;

        let report = import_posts(xml, &out_dir).unwrap();
        assert_eq!(report.found, 2);
        assert_eq!(report.imported, 1);
        assert_eq!(report.skipped, 1);

        // The first post won the name
        let body = fs::read_to_string(out_dir.join("Same-Name.md")).unwrap();
        assert!(body.ends_with("one"));

        let _ = fs::remove_dir_all(&out_dir);
    }

    #[test]
    fn test_missing_title_or_content_is_skipped() {
        let out_dir = temp_out_dir("missing");

        let xml = r#"
            <item>
                <title><![CDATA[No Body]]></title>
                <wp:status><![CDATA[publish]]></wp:status>
                <wp:post_type><![CDATA[post]]></wp:post_type>
            </item>
            <item>
                <content:encoded><![CDATA[<p>no title</p>]]></content:encoded>
                <wp:status><![CDATA[publish]]></wp:status>
                <wp:post_type><![CDATA[post]]></wp:post_type>
            </item>
        "#;

        let report = import_posts(xml, &out_dir).unwrap();
        assert_eq!(report.found, 2);
        assert_eq!(report.imported, 0);
        assert_eq!(report.skipped, 2);
        assert_eq!(fs::read_dir(&out_dir).unwrap().count(), 0);

        let _ = fs::remove_dir_all(&out_dir);
    }
}
