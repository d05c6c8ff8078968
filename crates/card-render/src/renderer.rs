//! Card renderer.

use std::sync::Arc;

use card_assets::{AssetBundle, AssetError};
use card_config::{BrandingConfig, Config};

use crate::css::build_css;
use crate::emoji::{EmojiSubstituter, NoopEmoji, TwemojiSubstituter};
use crate::escape::escape_html;
use crate::markdown::{MarkdownConverter, PulldownConverter};
use crate::request::RenderRequest;
use crate::skin::SkinKind;
use crate::template::{DocumentParts, render_document};

/// Renders [`RenderRequest`]s into self-contained HTML documents.
///
/// Cheap to share: assets are behind an `Arc` and rendering only needs
/// `&self`, so one renderer can serve concurrent requests.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use card_assets::{AssetBundle, FontAsset};
/// use card_config::BrandingConfig;
/// use card_render::{CardRenderer, RenderRequest};
///
/// # fn main() -> Result<(), card_assets::AssetError> {
/// let font = FontAsset::from_bytes("Inter.woff2", b"font bytes")?;
/// let assets = Arc::new(AssetBundle::from_fonts(font.clone(), font.clone(), font));
/// let renderer = CardRenderer::new(assets, BrandingConfig::default());
///
/// let html = renderer.render(&RenderRequest {
///     text: "Hello".to_owned(),
///     ..Default::default()
/// });
/// assert!(html.contains("Hello"));
/// # Ok(())
/// # }
/// ```
pub struct CardRenderer {
    assets: Arc<AssetBundle>,
    branding: BrandingConfig,
    skin: SkinKind,
    markdown: Box<dyn MarkdownConverter>,
    emoji: Box<dyn EmojiSubstituter>,
}

impl CardRenderer {
    /// Create a renderer with pulldown-cmark markdown, Twemoji glyphs from the
    /// default CDN and the classic skin.
    #[must_use]
    pub fn new(assets: Arc<AssetBundle>, branding: BrandingConfig) -> Self {
        Self {
            assets,
            branding,
            skin: SkinKind::default(),
            markdown: Box::new(PulldownConverter::new()),
            emoji: Box::new(TwemojiSubstituter::default()),
        }
    }

    /// Load assets and wire branding, emoji and skin from configuration.
    ///
    /// # Errors
    ///
    /// Returns `AssetError` if any configured asset cannot be loaded.
    pub fn from_config(config: &Config) -> Result<Self, AssetError> {
        let assets = Arc::new(AssetBundle::load(&config.assets_resolved)?);
        let emoji: Box<dyn EmojiSubstituter> = if config.emoji.enabled {
            Box::new(TwemojiSubstituter::new(config.emoji.base_url.clone()))
        } else {
            Box::new(NoopEmoji)
        };
        Ok(Self::new(assets, config.branding.clone())
            .with_skin(SkinKind::from_name(&config.render.skin))
            .with_emoji(emoji))
    }

    /// Use a different markdown converter.
    #[must_use]
    pub fn with_markdown(mut self, markdown: Box<dyn MarkdownConverter>) -> Self {
        self.markdown = markdown;
        self
    }

    /// Use a different emoji substituter.
    #[must_use]
    pub fn with_emoji(mut self, emoji: Box<dyn EmojiSubstituter>) -> Self {
        self.emoji = emoji;
        self
    }

    /// Set the skin used when a request does not select one.
    #[must_use]
    pub fn with_skin(mut self, skin: SkinKind) -> Self {
        self.skin = skin;
        self
    }

    /// Default skin.
    #[must_use]
    pub fn skin(&self) -> SkinKind {
        self.skin
    }

    /// Render a request into a complete HTML document.
    ///
    /// Total and deterministic: the same request always yields the same
    /// bytes, and no input makes it fail.
    #[must_use]
    pub fn render(&self, request: &RenderRequest) -> String {
        let skin = request.skin.unwrap_or(self.skin).skin();

        let heading = if request.markdown {
            self.markdown.to_html(&request.text)
        } else {
            escape_html(&request.text)
        };
        let heading_html = self.emoji.substitute(&heading);

        let css = build_css(request.theme, &request.font_size, &skin, &self.assets);

        tracing::debug!(
            skin = skin.kind.name(),
            theme = ?request.theme,
            markdown = request.markdown,
            images = request.images.len(),
            text_len = request.text.len(),
            "Rendering card"
        );

        render_document(&DocumentParts {
            css: &css,
            heading_html: &heading_html,
            request,
            skin: &skin,
            branding: &self.branding,
        })
    }
}
