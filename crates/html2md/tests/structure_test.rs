//! The Markdown we emit must parse back into the structure of the HTML we read.

use html2md::{ConversionOptions, convert_html};
use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag, TagEnd};

/// Block and inline structure of a Markdown document as a flat outline.
fn outline(markdown: &str) -> Vec<String> {
    Parser::new(markdown)
        .filter_map(|event| match event {
            Event::Start(tag) => Some(match tag {
                Tag::Heading { level, .. } => format!("{level:?}"),
                Tag::Paragraph => "p".to_string(),
                Tag::BlockQuote(_) => "quote".to_string(),
                Tag::List(Some(start)) => format!("ol({start})"),
                Tag::List(None) => "ul".to_string(),
                Tag::Item => "li".to_string(),
                Tag::Emphasis => "em".to_string(),
                Tag::Strong => "strong".to_string(),
                Tag::Link { dest_url, .. } => format!("a({dest_url})"),
                Tag::Image { dest_url, .. } => format!("img({dest_url})"),
                Tag::CodeBlock(CodeBlockKind::Fenced(lang)) => format!("fence({lang})"),
                other => format!("{other:?}"),
            }),
            Event::Code(code) => Some(format!("code({code})")),
            Event::Rule => Some("hr".to_string()),
            Event::HardBreak => Some("br".to_string()),
            _ => None,
        })
        .collect()
}

/// Container nesting as open and close markers around the text they hold.
fn nesting(markdown: &str) -> Vec<String> {
    Parser::new(markdown)
        .filter_map(|event| match event {
            Event::Start(Tag::BlockQuote(_)) => Some("quote".to_string()),
            Event::Start(Tag::List(_)) => Some("list".to_string()),
            Event::Start(Tag::Item) => Some("li".to_string()),
            Event::End(TagEnd::BlockQuote(_)) => Some("/quote".to_string()),
            Event::End(TagEnd::List(_)) => Some("/list".to_string()),
            Event::End(TagEnd::Item) => Some("/li".to_string()),
            Event::Text(text) => Some(text.into_string()),
            _ => None,
        })
        .collect()
}

/// All text of a Markdown document, escapes resolved.
fn plain_text(markdown: &str) -> String {
    Parser::new(markdown)
        .filter_map(|event| match event {
            Event::Text(text) => Some(text.into_string()),
            _ => None,
        })
        .collect()
}

fn convert(html: &str) -> String {
    convert_html(html, &ConversionOptions::default()).unwrap()
}

#[test]
fn headings_and_paragraphs() {
    let markdown = convert("<h1>Top</h1><p>Body</p><h3>Sub</h3>");
    assert_eq!(outline(&markdown), ["H1", "p", "H3"]);
}

#[test]
fn inline_styles() {
    let markdown = convert(
        r#"<p><strong>bold <em>both</em></strong> <a href="/x"><em>link</em></a> <img src="i.png" alt="i"> <code>c</code></p>"#,
    );
    assert_eq!(
        outline(&markdown),
        ["p", "strong", "em", "a(/x)", "em", "img(i.png)", "code(c)"]
    );
}

#[test]
fn nested_lists() {
    let markdown = convert("<ul><li>a<ol><li>b</li><li>c</li></ol></li><li>d</li></ul>");
    assert_eq!(outline(&markdown), ["ul", "li", "ol(1)", "li", "li", "li"]);
}

#[test]
fn nested_list_with_start_is_not_swallowed_by_the_paragraph() {
    let markdown = convert(r#"<ul><li>a<ol start="4"><li>b</li><li>c</li></ol></li><li>d</li></ul>"#);
    let outline = outline(&markdown);
    assert!(outline.contains(&"ol(4)".to_string()), "{markdown}");
    assert_eq!(outline.iter().filter(|entry| *entry == "li").count(), 4);
}

#[test]
fn nested_lists_with_narrow_indent() {
    let options = ConversionOptions {
        list_indent_width: 2,
        ..ConversionOptions::default()
    };
    let markdown = convert_html("<ol><li>a<ul><li>b</li></ul></li></ol>", &options).unwrap();
    assert_eq!(outline(&markdown), ["ol(1)", "li", "ul", "li"]);
}

#[test]
fn quotes_code_and_rules() {
    let markdown = convert(
        r#"<blockquote><p>q</p><blockquote><p>deeper</p></blockquote></blockquote><hr><pre><code class="language-rust">fn x() {}</code></pre>"#,
    );
    assert_eq!(outline(&markdown), ["quote", "p", "quote", "p", "hr", "fence(rust)"]);
}

#[test]
fn code_inside_list_item_stays_in_the_item() {
    let markdown = convert("<ul><li>run<pre><code>make all</code></pre></li><li>done</li></ul>");
    assert_eq!(outline(&markdown), ["ul", "li", "fence()", "li"]);
}

#[test]
fn hard_breaks() {
    let markdown = convert("<p>one<br>two</p>");
    assert_eq!(outline(&markdown), ["p", "br"]);
}

#[test]
fn escaped_text_reads_back_literally() {
    let text = r"2*3 = [6] and a_b \ `tick`";
    let markdown = convert(&format!("<p>{text}</p>"));
    assert_eq!(outline(&markdown), ["p"]);
    assert_eq!(plain_text(&markdown), text);
}

#[test]
fn code_block_content_is_literal() {
    let code = "if a < b && *p {\n    return [x];\n}";
    let markdown = convert(&format!(
        "<pre><code>{}</code></pre>",
        code.replace('&', "&amp;").replace('<', "&lt;")
    ));
    assert_eq!(plain_text(&markdown), format!("{code}\n"));
}

#[test]
fn paragraph_after_quote_in_item_leaves_the_quote() {
    let markdown = convert("<ul><li><blockquote>q</blockquote><p>after</p></li></ul>");
    assert_eq!(
        nesting(&markdown),
        ["list", "li", "quote", "q", "/quote", "after", "/li", "/list"],
        "{markdown}"
    );
}

#[test]
fn text_after_nested_list_stays_in_outer_item() {
    let markdown = convert("<ul><li><ul><li>x</li></ul>after</li></ul>");
    assert_eq!(
        nesting(&markdown),
        ["list", "li", "list", "li", "x", "/li", "/list", "after", "/li", "/list"],
        "{markdown}"
    );
}

#[test]
fn text_after_nested_list_following_text() {
    let markdown = convert("<ol><li>intro<ul><li>x</li></ul>after</li><li>next</li></ol>");
    assert_eq!(
        nesting(&markdown),
        ["list", "li", "intro", "list", "li", "x", "/li", "/list", "after", "/li", "li", "next", "/li", "/list"],
        "{markdown}"
    );
}
