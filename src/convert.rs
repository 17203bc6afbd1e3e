use lazy_static::lazy_static;
use regex::{Captures, Regex};

// Purely textual rewriting, no HTML parser. Anything that does not match
// one of these patterns passes through verbatim. The substitution order
// below is part of the contract: block comments are stripped before the
// structural tags are rewritten, inline markup before paragraph and
// heading structure is finalized.
lazy_static! {
    static ref BLOCK_COMMENT_REGEX: Regex = Regex::new(
        r"<!-- /?wp:(?:paragraph|heading|image|list-item|list|quote|code|preformatted)[^>]*-->"
    )
    .unwrap();
    static ref P_OPEN_REGEX: Regex = Regex::new(r"<p(?: [^>]*)?>").unwrap();
    static ref P_CLOSE_REGEX: Regex = Regex::new(r"</p>").unwrap();
    static ref HEADING_OPEN_REGEX: Regex = Regex::new(r"<h([1-6])(?: [^>]*)?>").unwrap();
    static ref HEADING_CLOSE_REGEX: Regex = Regex::new(r"</h[1-6]>").unwrap();
    static ref BOLD_REGEX: Regex = Regex::new(r"</?(?:strong|b)(?: [^>]*)?>").unwrap();
    static ref ITALIC_REGEX: Regex = Regex::new(r"</?(?:em|i)(?: [^>]*)?>").unwrap();
    static ref ANCHOR_REGEX: Regex =
        Regex::new(r#"<a href="([^"]*)"[^>]*>([^<]*)</a>"#).unwrap();
    static ref FIGURE_IMG_REGEX: Regex = Regex::new(
        r#"(?s)<figure class="wp-block-image">.*?<img src="([^"]*)"[^>]*>.*?</figure>"#
    )
    .unwrap();
    static ref IMG_REGEX: Regex = Regex::new(r#"<img src="([^"]*)"[^>]*>"#).unwrap();
    static ref QUOTE_OPEN_REGEX: Regex = Regex::new(r"<blockquote(?: [^>]*)?>").unwrap();
    static ref QUOTE_CLOSE_REGEX: Regex = Regex::new(r"</blockquote>").unwrap();
    static ref LIST_OPEN_REGEX: Regex = Regex::new(r"<[uo]l(?: [^>]*)?>").unwrap();
    static ref LIST_CLOSE_REGEX: Regex = Regex::new(r"</[uo]l>").unwrap();
    static ref LIST_ITEM_OPEN_REGEX: Regex = Regex::new(r"<li(?: [^>]*)?>").unwrap();
    static ref LIST_ITEM_CLOSE_REGEX: Regex = Regex::new(r"</li>").unwrap();
    static ref CODE_REGEX: Regex = Regex::new(r"</?code(?: [^>]*)?>").unwrap();
    static ref PRE_OPEN_REGEX: Regex = Regex::new(r"<pre(?: [^>]*)?>").unwrap();
    static ref PRE_CLOSE_REGEX: Regex = Regex::new(r"</pre>").unwrap();
    static ref BR_REGEX: Regex = Regex::new(r"<br\s*/?>").unwrap();
    static ref HR_REGEX: Regex = Regex::new(r"<hr\s*/?>").unwrap();
    static ref EXTRA_NEWLINES_REGEX: Regex = Regex::new(r"\n{3,}").unwrap();
}

fn replace(buf: &mut String, regex: &Regex, with: &str) {
    *buf = regex.replace_all(buf, with).into_owned();
}

/// Rewrites WordPress block-editor markup into Markdown.
///
/// Runs already-converted plain text through unchanged, so applying it
/// twice is harmless. Anchors with nested markup and nested lists are
/// left as-is.
pub fn wordpress_to_markdown(content: &str) -> String {
    let mut md = content.to_string();

    // Block comment markers first, the content they wrap stays
    replace(&mut md, &BLOCK_COMMENT_REGEX, "");

    replace(&mut md, &P_OPEN_REGEX, "\n\n");
    replace(&mut md, &P_CLOSE_REGEX, "\n\n");

    md = HEADING_OPEN_REGEX
        .replace_all(&md, |caps: &Captures| {
            let level: usize = caps[1].parse().unwrap_or(1);
            format!("\n\n{} ", "#".repeat(level))
        })
        .into_owned();
    replace(&mut md, &HEADING_CLOSE_REGEX, "\n\n");

    replace(&mut md, &BOLD_REGEX, "**");
    replace(&mut md, &ITALIC_REGEX, "*");

    replace(&mut md, &ANCHOR_REGEX, "[$2]($1)");

    // Figures before bare images, so a figure-wrapped image still has an
    // <img> inside it to match against. The caption is dropped.
    replace(&mut md, &FIGURE_IMG_REGEX, "\n\n![]($1)\n\n");
    replace(&mut md, &IMG_REGEX, "\n\n![]($1)\n\n");

    replace(&mut md, &QUOTE_OPEN_REGEX, "\n\n> ");
    replace(&mut md, &QUOTE_CLOSE_REGEX, "\n\n");

    replace(&mut md, &LIST_OPEN_REGEX, "\n\n");
    replace(&mut md, &LIST_CLOSE_REGEX, "\n\n");
    replace(&mut md, &LIST_ITEM_OPEN_REGEX, "\n- ");
    replace(&mut md, &LIST_ITEM_CLOSE_REGEX, "");

    replace(&mut md, &CODE_REGEX, "`");
    replace(&mut md, &PRE_OPEN_REGEX, "\n\n```\n");
    replace(&mut md, &PRE_CLOSE_REGEX, "\n```\n\n");

    replace(&mut md, &BR_REGEX, "\n");
    replace(&mut md, &HR_REGEX, "\n\n---\n\n");

    // Entities last, so a literal &lt;p&gt; in the text never becomes a tag
    md = md
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
        .replace("&quot;", "\"");

    replace(&mut md, &EXTRA_NEWLINES_REGEX, "\n\n");
    md.trim().to_string()
}
