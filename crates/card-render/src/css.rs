//! Inline stylesheet for a card.

use std::fmt::Write;

use card_assets::{AssetBundle, FontAsset};

use crate::request::Theme;
use crate::skin::Skin;

/// Build the stylesheet for one card.
pub(crate) fn build_css(
    theme: Theme,
    font_size: &str,
    skin: &Skin,
    assets: &AssetBundle,
) -> String {
    let background = theme.background();
    let foreground = theme.foreground();
    let font_size = sanitize_font_size(font_size, skin);

    let mut css = String::with_capacity(
        assets.regular.data_uri().len()
            + assets.bold.data_uri().len()
            + assets.mono.data_uri().len()
            + 4096,
    );

    font_face(&mut css, "Inter", "normal", &assets.regular);
    font_face(&mut css, "Inter", "bold", &assets.bold);
    font_face(&mut css, "Vera", "normal", &assets.mono);

    css.push_str("body {\n");
    writeln!(css, "    background: {background};").unwrap();
    if skin.pattern {
        let pattern = match theme {
            Theme::Light => &assets.patterns.light,
            Theme::Dark => &assets.patterns.dark,
        };
        writeln!(css, "    background-image: url(\"{pattern}\");").unwrap();
        css.push_str("    background-repeat: repeat;\n");
    }
    css.push_str("    height: 100vh;\n    width: 100vw;\n    display: flex;\n    margin: 0;\n}\n\n");

    css.push_str(
        "code {\n    color: #D400FF;\n    font-family: 'Vera';\n    white-space: pre-wrap;\n    letter-spacing: -5px;\n}\n\n",
    );
    css.push_str("code:before, code:after {\n    content: '`';\n}\n\n");

    css.push_str(
        ".logo-wrapper {\n    display: flex;\n    align-items: center;\n    align-content: center;\n    justify-content: center;\n    justify-items: center;\n}\n\n",
    );
    css.push_str(".logo {\n    margin: 0 auto;\n}\n\n");
    css.push_str(
        ".emoji {\n    height: 1em;\n    width: 1em;\n    margin: 0 .05em 0 .1em;\n    vertical-align: -0.1em;\n}\n\n",
    );

    write!(
        css,
        ".heading {{\n    font-family: 'Inter', sans-serif;\n    font-size: {font_size};\n    \
         font-style: normal;\n    color: {foreground};\n    line-height: 1.2;\n    \
         font-weight: {};\n    margin-left: {}px;\n}}\n\n",
        skin.heading_weight, skin.heading_margin_left,
    )
    .unwrap();
    write!(
        css,
        ".sub-heading {{\n    font-family: 'Inter', sans-serif;\n    font-size: 80px;\n    \
         font-weight: {};\n    margin-bottom: 0px;\n    color: {foreground};\n}}\n\n",
        skin.sub_heading_weight,
    )
    .unwrap();
    write!(
        css,
        ".current-link {{\n    font-family: 'Open Sans', sans-serif;\n    font-size: 50px;\n    \
         font-weight: 100;\n    margin-top: 0px;\n    margin-left: 10px;\n    \
         color: {foreground};\n    opacity: 0.5;\n}}\n\n",
    )
    .unwrap();
    if let Some(size) = skin.avatar.size() {
        write!(
            css,
            ".avatar {{\n    height: {size}px;\n    border-radius: 100%;\n    \
             margin-right: 50px;\n    margin-left: {}px;\n    margin-top: 40px;\n}}\n",
            skin.heading_margin_left,
        )
        .unwrap();
    }

    css
}

fn font_face(css: &mut String, family: &str, weight: &str, font: &FontAsset) {
    write!(
        css,
        "@font-face {{\n    font-family: '{family}';\n    font-style: normal;\n    \
         font-weight: {weight};\n    src: url({}) format('{}');\n}}\n\n",
        font.data_uri(),
        font.format(),
    )
    .unwrap();
}

/// Validate a caller-supplied font size for interpolation into CSS.
///
/// Accepts lengths and math functions: ASCII letters and digits, `. % , + - * /`,
/// spaces and balanced parentheses, with no comment markers. Anything else is
/// replaced with the skin default.
pub(crate) fn sanitize_font_size(raw: &str, skin: &Skin) -> String {
    let trimmed = raw.trim();
    if is_css_length(trimmed) {
        return trimmed.to_owned();
    }
    tracing::warn!(
        font_size = raw,
        fallback = skin.default_font_size,
        "Rejected font size"
    );
    skin.default_font_size.to_owned()
}

fn is_css_length(value: &str) -> bool {
    if value.is_empty() || value.contains("/*") || value.contains("*/") {
        return false;
    }
    let mut depth = 0usize;
    for c in value.chars() {
        match c {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            c if c.is_ascii_alphanumeric()
                || matches!(c, '.' | '%' | ',' | '+' | '-' | '*' | '/' | ' ') => {}
            _ => return false,
        }
    }
    depth == 0
}
