//! Emoji glyph substitution.
//!
//! Replaces emoji in rendered HTML with `<img class="emoji">` tags pointing at
//! an externally hosted SVG glyph set (Twemoji naming), so the rasterizer
//! doesn't depend on a system emoji font.

use emojis::Emoji;

use crate::escape::escape_html;

const VS15: char = '\u{FE0E}';
const VS16: char = '\u{FE0F}';
const ZWJ: char = '\u{200D}';
const KEYCAP: char = '\u{20E3}';

/// Longest RGI sequence (kiss with two skin tones) in code points.
const MAX_SEQUENCE_CHARS: usize = 10;

/// Replaces emoji in an HTML fragment with inline glyph images.
pub trait EmojiSubstituter: Send + Sync {
    /// Substitute emoji in the text positions of `html`.
    fn substitute(&self, html: &str) -> String;
}

/// Leaves input untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEmoji;

impl EmojiSubstituter for NoopEmoji {
    fn substitute(&self, html: &str) -> String {
        html.to_owned()
    }
}

/// [`EmojiSubstituter`] producing Twemoji-style `<img>` tags.
///
/// Handles `:shortcode:` names as well as Unicode emoji sequences. Markup
/// inside `<...>` is copied verbatim.
#[derive(Debug, Clone)]
pub struct TwemojiSubstituter {
    base_url: String,
}

impl TwemojiSubstituter {
    /// Create a substituter serving glyphs from `base_url/<code>.svg`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Base URL of the glyph set, without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn substitute_text(&self, text: &str, out: &mut String) {
        let expanded = expand_shortcodes(text);
        let mut rest = expanded.as_str();
        while let Some(c) = rest.chars().next() {
            let len = match match_sequence(rest) {
                Some((len, emoji)) => {
                    self.push_glyph(&rest[..len], emoji, out);
                    len
                }
                None => {
                    out.push(c);
                    c.len_utf8()
                }
            };
            rest = &rest[len..];
        }
    }

    fn push_glyph(&self, sequence: &str, emoji: &Emoji, out: &mut String) {
        out.push_str(r#"<img class="emoji" draggable="false" alt=""#);
        out.push_str(sequence);
        out.push_str(r#"" src=""#);
        out.push_str(&escape_html(&self.base_url));
        out.push('/');
        out.push_str(&glyph_code(emoji.as_str()));
        out.push_str(r#".svg">"#);
    }
}

impl Default for TwemojiSubstituter {
    fn default() -> Self {
        Self::new(card_config::DEFAULT_EMOJI_BASE_URL)
    }
}

impl EmojiSubstituter for TwemojiSubstituter {
    fn substitute(&self, html: &str) -> String {
        let mut out = String::with_capacity(html.len() + 64);
        let mut rest = html;
        while let Some(open) = rest.find('<') {
            let (text, tail) = rest.split_at(open);
            self.substitute_text(text, &mut out);
            let Some(close) = tail.find('>') else {
                out.push_str(tail);
                return out;
            };
            out.push_str(&tail[..=close]);
            rest = &tail[close + 1..];
        }
        self.substitute_text(rest, &mut out);
        out
    }
}

/// Replace known `:shortcode:` names with their emoji.
fn expand_shortcodes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find(':') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(len) = after.find(':') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let name = &after[..len];
        match lookup_shortcode(name) {
            Some(emoji) => {
                out.push_str(emoji);
                rest = &after[len + 1..];
            }
            None => {
                // The closing colon may open the next shortcode
                out.push(':');
                out.push_str(name);
                rest = &after[len..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn lookup_shortcode(name: &str) -> Option<&'static str> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-'));
    if !valid {
        return None;
    }
    emojis::get_by_shortcode(name).map(emojis::Emoji::as_str)
}

/// Byte length and emoji of the sequence at the start of `text`, if any.
///
/// The longest run of up to [`MAX_SEQUENCE_CHARS`] code points that names an
/// emoji wins. ASCII only starts a keycap sequence; VS15 forces text
/// presentation.
fn match_sequence(text: &str) -> Option<(usize, &'static Emoji)> {
    let mut chars = text.chars();
    let first = chars.next()?;
    let second = chars.next();
    if second == Some(VS15) {
        return None;
    }
    if first.is_ascii() {
        let keycap =
            matches!(first, '#' | '*' | '0'..='9') && matches!(second, Some(VS16 | KEYCAP));
        if !keycap {
            return None;
        }
    }

    let limit = text
        .char_indices()
        .nth(MAX_SEQUENCE_CHARS)
        .map_or(text.len(), |(i, _)| i);
    text[..limit]
        .char_indices()
        .rev()
        .map(|(i, c)| i + c.len_utf8())
        .find_map(|end| glyph(&text[..end]).map(|emoji| (end, emoji)))
}

/// The emoji `candidate` names, if it is drawn as a glyph.
///
/// Text-default emoji (such as U+00A9) only count when followed by VS16.
fn glyph(candidate: &str) -> Option<&'static Emoji> {
    let emoji = emojis::get(candidate)?;
    let single = candidate.chars().nth(1).is_none();
    let text_default = single && emoji.as_str().strip_prefix(candidate) == Some("\u{FE0F}");
    (!text_default).then_some(emoji)
}

/// Twemoji file name of a fully-qualified sequence: hex code points joined
/// by `-`, without VS16 unless the sequence contains a ZWJ.
fn glyph_code(sequence: &str) -> String {
    let keep_vs16 = sequence.contains(ZWJ);
    sequence
        .chars()
        .filter(|&c| keep_vs16 || c != VS16)
        .map(|c| format!("{:x}", u32::from(c)))
        .collect::<Vec<_>>()
        .join("-")
}
