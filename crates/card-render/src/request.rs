//! Render request model.

use crate::skin::{DEFAULT_IMAGE_WIDTH, Skin, SkinKind};

/// Color theme of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String"))]
pub enum Theme {
    /// White background, black text.
    #[default]
    Light,
    /// Navy background, white text.
    Dark,
}

impl Theme {
    /// Parse a theme name. Only `dark` selects [`Theme::Dark`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("dark") {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Page background color.
    #[must_use]
    pub fn background(self) -> &'static str {
        match self {
            Self::Light => "white",
            Self::Dark => "#1B1D30",
        }
    }

    /// Text color.
    #[must_use]
    pub fn foreground(self) -> &'static str {
        match self {
            Self::Light => "black",
            Self::Dark => "white",
        }
    }
}

impl From<String> for Theme {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

/// A validated request to render one card.
///
/// `images`, `widths` and `heights` are index-aligned. The dimension lists
/// may be shorter than `images`; see [`RenderRequest::images`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct RenderRequest {
    /// Headline, markdown or literal text.
    pub text: String,
    /// Color theme.
    pub theme: Theme,
    /// Render `text` as markdown instead of literal text.
    #[cfg_attr(feature = "serde", serde(alias = "md"))]
    pub markdown: bool,
    /// CSS length for the headline, e.g. `150px`.
    pub font_size: String,
    /// Image URLs shown beside the headline.
    pub images: Vec<String>,
    /// Image widths, index-aligned with `images`.
    pub widths: Vec<String>,
    /// Image heights, index-aligned with `images`.
    pub heights: Vec<String>,
    /// Path appended to the branding domain in the link caption.
    pub path: String,
    /// Skin override. `None` uses the renderer default.
    pub skin: Option<SkinKind>,
}

impl Default for RenderRequest {
    fn default() -> Self {
        Self {
            text: String::new(),
            theme: Theme::Light,
            markdown: false,
            font_size: "150px".to_owned(),
            images: Vec::new(),
            widths: Vec::new(),
            heights: Vec::new(),
            path: String::new(),
            skin: None,
        }
    }
}

/// One image with its resolved (unescaped) dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSpec<'a> {
    /// Image URL.
    pub src: &'a str,
    /// Width attribute value.
    pub width: &'a str,
    /// Height attribute value.
    pub height: &'a str,
}

impl RenderRequest {
    /// Pair each image with its dimensions.
    ///
    /// A missing `widths[i]` becomes `auto`; a missing `heights[i]` becomes the
    /// skin's default height. Surplus dimension entries are ignored.
    pub fn images<'a>(&'a self, skin: &Skin) -> impl Iterator<Item = ImageSpec<'a>> {
        let default_height = skin.default_image_height;
        self.images.iter().enumerate().map(move |(i, src)| {
            let width = self.widths.get(i).map_or(DEFAULT_IMAGE_WIDTH, String::as_str);
            let height = self.heights.get(i).map_or(default_height, String::as_str);
            if i >= self.widths.len() || i >= self.heights.len() {
                tracing::debug!(index = i, width, height, "Image dimension fallback");
            }
            ImageSpec {
                src: src.as_str(),
                width,
                height,
            }
        })
    }
}
