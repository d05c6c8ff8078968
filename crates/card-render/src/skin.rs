//! Cosmetic variants of the card layout.
//!
//! Every skin shares the same document structure (headline | images, then
//! the attribution row). A [`Skin`] only carries the values that differ.

/// Named skin preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String"))]
pub enum SkinKind {
    /// Plain background, large leading avatar.
    #[default]
    Classic,
    /// Grid background pattern, tall images.
    Grid,
    /// Pattern background, wide margins, trailing avatar.
    Spotlight,
    /// Plain background, light weights, no avatar.
    Minimal,
}

impl SkinKind {
    /// Parse a skin name. Unknown names fall back to [`SkinKind::Classic`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "grid" => Self::Grid,
            "spotlight" => Self::Spotlight,
            "minimal" => Self::Minimal,
            _ => Self::Classic,
        }
    }

    /// Lowercase skin name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Grid => "grid",
            Self::Spotlight => "spotlight",
            Self::Minimal => "minimal",
        }
    }

    /// Layout values for this preset.
    #[must_use]
    pub fn skin(self) -> Skin {
        match self {
            Self::Classic => Skin {
                kind: self,
                heading_margin_left: 80,
                heading_weight: 900,
                sub_heading_weight: 400,
                attribution_padding_bottom: 50,
                pattern: false,
                avatar: AvatarPlacement::Leading { size: 220 },
                default_image_height: "500",
                default_font_size: "150px",
            },
            Self::Grid => Skin {
                kind: self,
                heading_margin_left: 80,
                heading_weight: 800,
                sub_heading_weight: 400,
                attribution_padding_bottom: 50,
                pattern: true,
                avatar: AvatarPlacement::Leading { size: 180 },
                default_image_height: "600",
                default_font_size: "150px",
            },
            Self::Spotlight => Skin {
                kind: self,
                heading_margin_left: 120,
                heading_weight: 900,
                sub_heading_weight: 700,
                attribution_padding_bottom: 80,
                pattern: true,
                avatar: AvatarPlacement::Trailing { size: 260 },
                default_image_height: "600",
                default_font_size: "160px",
            },
            Self::Minimal => Skin {
                kind: self,
                heading_margin_left: 60,
                heading_weight: 700,
                sub_heading_weight: 300,
                attribution_padding_bottom: 40,
                pattern: false,
                avatar: AvatarPlacement::Hidden,
                default_image_height: "500",
                default_font_size: "120px",
            },
        }
    }
}

impl From<String> for SkinKind {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

/// Where the avatar sits in the attribution row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarPlacement {
    /// No avatar.
    Hidden,
    /// Before the name and link, `size` px tall.
    Leading { size: u32 },
    /// After the name and link, `size` px tall.
    Trailing { size: u32 },
}

impl AvatarPlacement {
    /// Avatar height in px, if shown.
    #[must_use]
    pub fn size(self) -> Option<u32> {
        match self {
            Self::Hidden => None,
            Self::Leading { size } | Self::Trailing { size } => Some(size),
        }
    }
}

/// Layout values that vary between skins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skin {
    /// Preset this skin was built from.
    pub kind: SkinKind,
    /// Left margin of the headline in px.
    pub heading_margin_left: u32,
    /// Font weight of the headline.
    pub heading_weight: u16,
    /// Font weight of the attribution name.
    pub sub_heading_weight: u16,
    /// Bottom padding of the attribution row in px.
    pub attribution_padding_bottom: u32,
    /// Whether the background tiling pattern is drawn.
    pub pattern: bool,
    /// Avatar treatment.
    pub avatar: AvatarPlacement,
    /// Image height used when the request has no entry for an image.
    pub default_image_height: &'static str,
    /// Headline font size used when the requested one is rejected.
    pub default_font_size: &'static str,
}

/// Image width used when the request has no entry for an image.
pub const DEFAULT_IMAGE_WIDTH: &str = "auto";
