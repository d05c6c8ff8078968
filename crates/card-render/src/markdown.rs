//! Markdown headline conversion.

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd, html};

use crate::escape::escape_html;

/// Converts markdown headline text to HTML.
pub trait MarkdownConverter: Send + Sync {
    /// Convert `markdown` to an HTML fragment.
    ///
    /// Must never fail; malformed input degrades to text.
    fn to_html(&self, markdown: &str) -> String;
}

/// [`MarkdownConverter`] backed by pulldown-cmark.
///
/// Raw HTML in the input is emitted as escaped text and headings are
/// flattened to paragraphs, so the card keeps a single heading element.
#[derive(Debug, Clone, Copy)]
pub struct PulldownConverter {
    gfm: bool,
}

impl PulldownConverter {
    /// Create a converter with GFM extensions enabled.
    #[must_use]
    pub fn new() -> Self {
        Self { gfm: true }
    }

    /// Create a converter that only understands `CommonMark`.
    #[must_use]
    pub fn commonmark() -> Self {
        Self { gfm: false }
    }

    fn parser_options(self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_SMART_PUNCTUATION
        } else {
            Options::empty()
        }
    }
}

impl Default for PulldownConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownConverter for PulldownConverter {
    fn to_html(&self, markdown: &str) -> String {
        let mut image_depth = 0usize;
        let parser = Parser::new_ext(markdown, self.parser_options())
            .map(|event| neutralize(event, &mut image_depth));
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}

/// Rewrite events that would break the card structure or inject markup.
///
/// Text is escaped here rather than by the HTML writer so quotes are escaped
/// in text positions too. Image alt text is left to the writer, which escapes
/// it as an attribute.
fn neutralize<'a>(event: Event<'a>, image_depth: &mut usize) -> Event<'a> {
    match event {
        Event::Start(Tag::Image { .. }) => {
            *image_depth += 1;
            event
        }
        Event::End(TagEnd::Image) => {
            *image_depth = image_depth.saturating_sub(1);
            event
        }
        Event::Text(text) | Event::Html(text) | Event::InlineHtml(text) | Event::Code(text)
            if *image_depth > 0 =>
        {
            Event::Text(text)
        }
        Event::Text(text) | Event::Html(text) | Event::InlineHtml(text) => {
            Event::InlineHtml(CowStr::from(escape_html(&text)))
        }
        Event::Code(code) => {
            Event::InlineHtml(CowStr::from(format!("<code>{}</code>", escape_html(&code))))
        }
        Event::Start(Tag::Heading { .. }) => Event::Start(Tag::Paragraph),
        Event::End(TagEnd::Heading(_)) => Event::End(TagEnd::Paragraph),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_bold_becomes_strong() {
        let html = PulldownConverter::new().to_html("**bold**");
        assert_eq!(html, "<p><strong>bold</strong></p>\n");
    }

    #[test]
    fn test_inline_code() {
        let html = PulldownConverter::new().to_html("use `cargo`");
        assert!(html.contains("<code>cargo</code>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = PulldownConverter::new().to_html("hi <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_html_block_is_escaped() {
        let html = PulldownConverter::new().to_html("<div onclick=\"x\">\nhello\n</div>");
        assert!(!html.contains("<div"));
        assert!(html.contains("&lt;div onclick=&quot;x&quot;&gt;"));
    }

    #[test]
    fn test_headings_are_flattened() {
        let html = PulldownConverter::new().to_html("# Title\n\nbody");
        assert!(!html.contains("<h1"));
        assert_eq!(html, "<p>Title</p>\n<p>body</p>\n");
    }

    #[test]
    fn test_strikethrough_depends_on_gfm() {
        assert!(PulldownConverter::new().to_html("~~old~~").contains("<del>"));
        assert!(!PulldownConverter::commonmark().to_html("~~old~~").contains("<del>"));
    }

    #[test]
    fn test_unbalanced_markup_degrades_to_text() {
        let html = PulldownConverter::new().to_html("**unclosed [link](");
        assert!(html.contains("**unclosed"));
    }

    #[test]
    fn test_image_alt_is_escaped_once() {
        let html = PulldownConverter::commonmark().to_html("![a&b \"q\" <i>](x.png)");
        assert!(html.contains(r#"alt="a&amp;b &quot;q&quot; &lt;i&gt;""#), "{html}");
        assert!(!html.contains("&amp;amp;"));
    }

    #[test]
    fn test_quotes_in_text_are_escaped() {
        let html = PulldownConverter::commonmark().to_html("say \"hi\"");
        assert_eq!(html, "<p>say &quot;hi&quot;</p>\n");
    }
}
