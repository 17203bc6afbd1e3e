use lazy_static::lazy_static;
use regex::Regex;

use crate::post::RawPost;

// The export is scanned textually, field by field. A field that does not
// match simply stays empty; a document with no <item> elements yields
// nothing. This keeps the extractor tolerant of the half-broken markup
// WordPress exports tend to contain.
lazy_static! {
    static ref ITEM_REGEX: Regex = Regex::new(r"(?s)<item>(.*?)</item>").unwrap();
    static ref TITLE_REGEX: Regex =
        Regex::new(r"(?s)<title><!\[CDATA\[(.*?)\]\]></title>").unwrap();
    static ref LINK_REGEX: Regex = Regex::new(r"<link>([^<]+)</link>").unwrap();
    static ref PUB_DATE_REGEX: Regex = Regex::new(r"<pubDate>([^<]+)</pubDate>").unwrap();
    static ref CONTENT_REGEX: Regex =
        Regex::new(r"(?s)<content:encoded><!\[CDATA\[(.*?)\]\]></content:encoded>").unwrap();
    static ref EXCERPT_REGEX: Regex =
        Regex::new(r"(?s)<excerpt:encoded><!\[CDATA\[(.*?)\]\]></excerpt:encoded>").unwrap();
    static ref POST_DATE_REGEX: Regex =
        Regex::new(r"(?s)<wp:post_date><!\[CDATA\[(.*?)\]\]></wp:post_date>").unwrap();
    static ref POST_NAME_REGEX: Regex =
        Regex::new(r"(?s)<wp:post_name><!\[CDATA\[(.*?)\]\]></wp:post_name>").unwrap();
    static ref STATUS_REGEX: Regex =
        Regex::new(r"(?s)<wp:status><!\[CDATA\[(.*?)\]\]></wp:status>").unwrap();
    static ref POST_TYPE_REGEX: Regex =
        Regex::new(r"(?s)<wp:post_type><!\[CDATA\[(.*?)\]\]></wp:post_type>").unwrap();
    static ref CATEGORY_REGEX: Regex =
        Regex::new(r#"(?s)<category domain="category"[^>]*><!\[CDATA\[(.*?)\]\]></category>"#)
            .unwrap();
    static ref TAG_REGEX: Regex =
        Regex::new(r#"(?s)<category domain="post_tag"[^>]*><!\[CDATA\[(.*?)\]\]></category>"#)
            .unwrap();
}

fn capture_text(regex: &Regex, item: &str) -> String {
    regex
        .captures(item)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

fn capture_all(regex: &Regex, item: &str) -> Vec<String> {
    regex
        .captures_iter(item)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

fn extract_item(item: &str) -> RawPost {
    RawPost {
        title: capture_text(&TITLE_REGEX, item),
        link: capture_text(&LINK_REGEX, item),
        pub_date: capture_text(&PUB_DATE_REGEX, item),
        content: capture_text(&CONTENT_REGEX, item),
        excerpt: capture_text(&EXCERPT_REGEX, item),
        post_date: capture_text(&POST_DATE_REGEX, item),
        post_name: capture_text(&POST_NAME_REGEX, item),
        status: capture_text(&STATUS_REGEX, item),
        post_type: capture_text(&POST_TYPE_REGEX, item),
        categories: capture_all(&CATEGORY_REGEX, item),
        tags: capture_all(&TAG_REGEX, item),
    }
}

/// Yields one [RawPost] per `<item>` element, lazily, in document order.
pub fn extract_posts(xml: &str) -> impl Iterator<Item = RawPost> + '_ {
    ITEM_REGEX.captures_iter(xml).map(|cap| {
        let item = cap.get(1).map(|m| m.as_str()).unwrap_or("");
        extract_item(item)
    })
}
