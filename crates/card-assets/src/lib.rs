//! Font and pattern assets embedded into rendered social cards.
//!
//! Every card inlines the same three fonts and background pattern, so they
//! are read and encoded once into an immutable [`AssetBundle`] which is then
//! shared by reference (`Arc<AssetBundle>`) across renders.
//!
//! A missing or unreadable asset is fatal: hosts should build the bundle at
//! startup and refuse to serve if [`AssetBundle::load`] fails.

mod font;
mod pattern;

use std::path::PathBuf;

use card_config::AssetsConfig;

pub use font::FontAsset;
pub use pattern::{PatternSet, STROKE_DARK, STROKE_LIGHT, STROKE_PLACEHOLDER};

/// Error returned when assets cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// Asset file does not exist.
    #[error("Asset not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Asset file could not be read.
    #[error("Failed to read asset {}: {source}", path.display())]
    Io {
        /// Path of the asset.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Asset file has no content.
    #[error("Asset is empty: {}", .0.display())]
    Empty(PathBuf),
    /// Pattern template is unusable.
    #[error("Invalid pattern {}: {message}", path.display())]
    InvalidPattern {
        /// Path of the pattern template.
        path: PathBuf,
        /// What is wrong with it.
        message: String,
    },
}

/// Immutable set of encoded assets shared by all renders.
#[derive(Debug, Clone)]
pub struct AssetBundle {
    /// Regular weight heading font.
    pub regular: FontAsset,
    /// Bold weight heading font.
    pub bold: FontAsset,
    /// Monospace font for inline code.
    pub mono: FontAsset,
    /// Background pattern per theme.
    pub patterns: PatternSet,
}

impl AssetBundle {
    /// Load all assets named by the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`AssetError`] encountered.
    pub fn load(config: &AssetsConfig) -> Result<Self, AssetError> {
        let patterns = match &config.pattern {
            Some(path) => PatternSet::load(path)?,
            None => PatternSet::builtin(),
        };
        Ok(Self {
            regular: FontAsset::load(&config.regular_font)?,
            bold: FontAsset::load(&config.bold_font)?,
            mono: FontAsset::load(&config.mono_font)?,
            patterns,
        })
    }

    /// Assemble a bundle from already-encoded fonts and the built-in pattern.
    #[must_use]
    pub fn from_fonts(regular: FontAsset, bold: FontAsset, mono: FontAsset) -> Self {
        Self {
            regular,
            bold,
            mono,
            patterns: PatternSet::builtin(),
        }
    }
}
