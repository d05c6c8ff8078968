//! HTML document template shared by every skin.

use std::fmt::Write;

use card_config::BrandingConfig;

use crate::escape::escape_html;
use crate::request::RenderRequest;
use crate::skin::{AvatarPlacement, Skin};

/// Inputs of the document template. Only `heading_html` and `css` are
/// trusted markup; every other field is escaped here.
pub(crate) struct DocumentParts<'a> {
    pub css: &'a str,
    pub heading_html: &'a str,
    pub request: &'a RenderRequest,
    pub skin: &'a Skin,
    pub branding: &'a BrandingConfig,
}

/// Render the complete card document.
pub(crate) fn render_document(parts: &DocumentParts<'_>) -> String {
    let mut html = String::with_capacity(parts.css.len() + parts.heading_html.len() + 2048);

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<title>Generated Image</title>\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<style>\n");
    html.push_str(parts.css);
    html.push_str("</style>\n</head>\n");
    html.push_str("<body style=\"display:flex; flex-direction: column;\">\n");

    // Header row: headline | images
    html.push_str("<div style=\"display:flex; flex:1; align-items:center; width: 100%;\">\n");
    html.push_str("<div style=\"width: 50%;\">\n<h1 class=\"heading\">\n");
    html.push_str(parts.heading_html);
    html.push_str("\n</h1>\n</div>\n");
    html.push_str("<div style=\"display:flex; width: 50%;\">\n");
    for image in parts.request.images(parts.skin) {
        writeln!(
            html,
            "<img class=\"logo\" alt=\"Generated Image\" src=\"{}\" width=\"{}\" height=\"{}\">",
            escape_html(image.src),
            escape_html(image.width),
            escape_html(image.height),
        )
        .unwrap();
    }
    html.push_str("</div>\n</div>\n");

    render_attribution(&mut html, parts);

    html.push_str("</body>\n</html>\n");
    html
}

/// Render the attribution row (avatar, name, link caption).
fn render_attribution(html: &mut String, parts: &DocumentParts<'_>) {
    writeln!(
        html,
        "<div style=\"display: flex;align-items: center;padding-bottom: {}px;\">",
        parts.skin.attribution_padding_bottom
    )
    .unwrap();

    let avatar = parts.branding.avatar_url.as_deref();
    if let (AvatarPlacement::Leading { .. }, Some(url)) = (parts.skin.avatar, avatar) {
        render_avatar(html, url);
    }

    html.push_str("<div>\n");
    writeln!(
        html,
        "<p class=\"sub-heading\">{}</p>",
        escape_html(&parts.branding.name)
    )
    .unwrap();
    writeln!(
        html,
        "<p class=\"current-link\">{}{}</p>",
        escape_html(&parts.branding.domain),
        escape_html(&parts.request.path)
    )
    .unwrap();
    html.push_str("</div>\n");

    if let (AvatarPlacement::Trailing { .. }, Some(url)) = (parts.skin.avatar, avatar) {
        render_avatar(html, url);
    }

    html.push_str("</div>\n");
}

fn render_avatar(html: &mut String, url: &str) {
    writeln!(
        html,
        "<img class=\"avatar\" alt=\"\" src=\"{}\">",
        escape_html(url)
    )
    .unwrap();
}
