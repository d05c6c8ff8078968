//! End-to-end checks on rendered card documents.

use std::sync::Arc;

use card_assets::{AssetBundle, FontAsset};

use crate::{BrandingConfig, CardRenderer, RenderRequest, SkinKind, Theme};

const PAYLOAD: &str = "\"><script>alert(1)</script><\"";

fn renderer() -> CardRenderer {
    let assets = AssetBundle::from_fonts(
        FontAsset::from_bytes("Inter-Regular.woff2", b"regular").unwrap(),
        FontAsset::from_bytes("CamptonBold.otf", b"bold").unwrap(),
        FontAsset::from_bytes("Vera-Mono.woff2", b"mono").unwrap(),
    );
    CardRenderer::new(Arc::new(assets), BrandingConfig::default())
}

fn all_skins() -> [SkinKind; 4] {
    [
        SkinKind::Classic,
        SkinKind::Grid,
        SkinKind::Spotlight,
        SkinKind::Minimal,
    ]
}

#[test]
fn test_one_style_block_and_one_heading_for_every_skin_and_mode() {
    let renderer = renderer();
    for skin in all_skins() {
        for markdown in [false, true] {
            let html = renderer.render(&RenderRequest {
                text: "# Title\n\n## Sub\n\n<h2>raw</h2>".to_owned(),
                markdown,
                skin: Some(skin),
                ..Default::default()
            });
            assert_eq!(html.matches("<style>").count(), 1, "{skin:?} md={markdown}");
            assert_eq!(html.matches("</style>").count(), 1, "{skin:?} md={markdown}");
            assert_eq!(html.matches("<h1").count(), 1, "{skin:?} md={markdown}");
            assert_eq!(html.matches("<h2").count(), 0, "{skin:?} md={markdown}");
            assert!(html.trim_end().ends_with("</html>"));
        }
    }
}

#[test]
fn test_rendering_is_deterministic() {
    let renderer = renderer();
    let request = RenderRequest {
        text: "Ship it :rocket: **now**".to_owned(),
        theme: Theme::Dark,
        markdown: true,
        font_size: "120px".to_owned(),
        images: vec!["https://x/a.png".to_owned(), "https://x/b.png".to_owned()],
        widths: vec!["300".to_owned()],
        heights: vec![],
        path: "/post/1".to_owned(),
        skin: Some(SkinKind::Spotlight),
    };

    assert_eq!(renderer.render(&request), renderer.render(&request));
}

#[test]
fn test_attacker_fields_are_escaped_in_literal_mode() {
    let html = renderer().render(&RenderRequest {
        text: PAYLOAD.to_owned(),
        images: vec![PAYLOAD.to_owned()],
        widths: vec![PAYLOAD.to_owned()],
        heights: vec![PAYLOAD.to_owned()],
        path: PAYLOAD.to_owned(),
        ..Default::default()
    });

    assert!(!html.contains("<script>"));
    assert!(!html.contains("\"><"));
    // text, src, width, height, path
    assert_eq!(
        html.matches("&quot;&gt;&lt;script&gt;alert(1)&lt;/script&gt;&lt;&quot;")
            .count(),
        5
    );
}

#[test]
fn test_attacker_fields_are_escaped_in_markdown_mode() {
    let html = renderer().render(&RenderRequest {
        text: PAYLOAD.to_owned(),
        markdown: true,
        ..Default::default()
    });

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn test_markdown_flag_selects_transform() {
    let renderer = renderer();
    let markdown = renderer.render(&RenderRequest {
        text: "**bold**".to_owned(),
        markdown: true,
        ..Default::default()
    });
    let literal = renderer.render(&RenderRequest {
        text: "**bold**".to_owned(),
        markdown: false,
        ..Default::default()
    });

    assert!(markdown.contains("<strong>bold</strong>"));
    assert!(!literal.contains("<strong>"));
    assert!(literal.contains("**bold**"));
}

#[test]
fn test_dark_theme_selects_dark_palette_and_pattern() {
    let renderer = renderer();
    let dark = renderer.render(&RenderRequest {
        theme: Theme::from_name("dark"),
        skin: Some(SkinKind::Grid),
        ..Default::default()
    });
    let other = renderer.render(&RenderRequest {
        theme: Theme::from_name("sepia"),
        skin: Some(SkinKind::Grid),
        ..Default::default()
    });

    assert!(dark.contains("background: #1B1D30;"));
    assert!(other.contains("background: white;"));
    assert_ne!(
        dark.split("background-image").nth(1),
        other.split("background-image").nth(1)
    );
}

#[test]
fn test_short_dimension_lists_fall_back_to_defaults() {
    let renderer = renderer();
    for (skin, height) in [(SkinKind::Classic, "500"), (SkinKind::Grid, "600")] {
        let html = renderer.render(&RenderRequest {
            images: vec!["a".to_owned(), "b".to_owned()],
            widths: vec!["10".to_owned()],
            heights: vec![],
            skin: Some(skin),
            ..Default::default()
        });

        assert!(html.contains(&format!("src=\"a\" width=\"10\" height=\"{height}\"")));
        assert!(html.contains(&format!("src=\"b\" width=\"auto\" height=\"{height}\"")));
    }
}

#[test]
fn test_hello_smile_scenario() {
    let html = renderer().render(&RenderRequest {
        text: "Hello :smile:".to_owned(),
        theme: Theme::Light,
        markdown: false,
        font_size: "120px".to_owned(),
        images: vec!["https://x/img.png".to_owned()],
        widths: vec!["300".to_owned()],
        heights: vec!["300".to_owned()],
        path: "/post/1".to_owned(),
        skin: None,
    });

    assert!(html.contains("Hello <img class=\"emoji\""));
    assert!(html.contains("/1f604.svg\">"));
    assert!(!html.contains(":smile:"));
    assert_eq!(html.matches("class=\"logo\"").count(), 1);
    assert!(html.contains("src=\"https://x/img.png\" width=\"300\" height=\"300\""));
    assert!(html.contains("heyjordn.com/post/1</p>"));
    assert!(html.contains("font-size: 120px;"));
}
