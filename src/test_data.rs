#[cfg(test)]
pub const WXR_SINGLE_ITEM: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<rss version="2.0"
    xmlns:excerpt="http://wordpress.org/export/1.2/excerpt/"
    xmlns:content="http://purl.org/rss/1.0/modules/content/"
    xmlns:wp="http://wordpress.org/export/1.2/">
<channel>
    <title>Example blog</title>
    <item>
        <title><![CDATA[Hello World]]></title>
        <link>https://blog.example.com/?p=10</link>
        <pubDate>Tue, 20 Jan 2026 03:25:10 +0000</pubDate>
        <content:encoded><![CDATA[<p>First post.</p>]]></content:encoded>
        <excerpt:encoded><![CDATA[An excerpt]]></excerpt:encoded>
        <wp:post_date><![CDATA[2026-01-20 11:25:10]]></wp:post_date>
        <wp:post_name><![CDATA[hello-world]]></wp:post_name>
        <wp:status><![CDATA[publish]]></wp:status>
        <wp:post_type><![CDATA[post]]></wp:post_type>
        <category domain="category" nicename="life"><![CDATA[Life]]></category>
        <category domain="post_tag" nicename="first"><![CDATA[first]]></category>
        <category domain="post_tag" nicename="notes"><![CDATA[notes]]></category>
    </item>
</channel>
</rss>
"#;

#[cfg(test)]
pub const WXR_MIXED_EXPORT: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<rss version="2.0"
    xmlns:excerpt="http://wordpress.org/export/1.2/excerpt/"
    xmlns:content="http://purl.org/rss/1.0/modules/content/"
    xmlns:wp="http://wordpress.org/export/1.2/">
<channel>
    <title>Example blog</title>
    <item>
        <title><![CDATA[First Post]]></title>
        <pubDate>Mon, 05 Jan 2026 08:00:00 +0000</pubDate>
        <content:encoded><![CDATA[<!-- wp:paragraph --><p>Hello</p><!-- /wp:paragraph -->]]></content:encoded>
        <wp:post_date><![CDATA[2026-01-05 16:00:00]]></wp:post_date>
        <wp:status><![CDATA[publish]]></wp:status>
        <wp:post_type><![CDATA[post]]></wp:post_type>
        <category domain="category"><![CDATA[Life]]></category>
    </item>
    <item>
        <title><![CDATA[Second Post]]></title>
        <pubDate>Tue, 06 Jan 2026 08:00:00 +0000</pubDate>
        <content:encoded><![CDATA[<h2>Notes</h2><ul><li>one</li><li>two</li></ul>]]></content:encoded>
        <wp:post_date><![CDATA[2026-01-06 16:00:00]]></wp:post_date>
        <wp:status><![CDATA[publish]]></wp:status>
        <wp:post_type><![CDATA[post]]></wp:post_type>
        <category domain="post_tag"><![CDATA[notes]]></category>
    </item>
    <item>
        <title><![CDATA[Third Post]]></title>
        <pubDate>Wed, 07 Jan 2026 08:00:00 +0000</pubDate>
        <content:encoded><![CDATA[<p>Last one.</p>]]></content:encoded>
        <wp:post_date><![CDATA[2026-01-07 16:00:00]]></wp:post_date>
        <wp:status><![CDATA[publish]]></wp:status>
        <wp:post_type><![CDATA[post]]></wp:post_type>
    </item>
    <item>
        <title><![CDATA[About]]></title>
        <content:encoded><![CDATA[<p>About this blog.</p>]]></content:encoded>
        <wp:post_date><![CDATA[2026-01-01 09:00:00]]></wp:post_date>
        <wp:status><![CDATA[publish]]></wp:status>
        <wp:post_type><![CDATA[page]]></wp:post_type>
    </item>
</channel>
</rss>
"#;
