//! Background tiling pattern rendered once per theme.

use std::path::Path;

use base64::Engine;

use crate::AssetError;

/// Placeholder replaced with the theme stroke color.
pub const STROKE_PLACEHOLDER: &str = "{stroke}";

/// Stroke color of the pattern on light backgrounds.
pub const STROKE_LIGHT: &str = "#E6E6EF";

/// Stroke color of the pattern on dark backgrounds.
pub const STROKE_DARK: &str = "#2A2D48";

/// Built-in 80px grid tile.
const GRID_PATTERN: &str = "<svg xmlns='http://www.w3.org/2000/svg' width='80' height='80' \
     viewBox='0 0 80 80'><path d='M80 0H0V80' fill='none' stroke='{stroke}' \
     stroke-width='2'/></svg>";

/// Pattern data URIs for both themes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSet {
    /// Pattern for light backgrounds.
    pub light: String,
    /// Pattern for dark backgrounds.
    pub dark: String,
}

impl PatternSet {
    /// Build from the built-in grid tile.
    pub fn builtin() -> Self {
        Self::from_template(GRID_PATTERN)
    }

    /// Read an SVG template containing [`STROKE_PLACEHOLDER`].
    ///
    /// # Errors
    ///
    /// Returns `AssetError::NotFound`/`AssetError::Io` for unreadable files and
    /// `AssetError::InvalidPattern` if the file is not UTF-8 or has no
    /// placeholder.
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        if !path.exists() {
            return Err(AssetError::NotFound(path.to_path_buf()));
        }
        let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let template = String::from_utf8(bytes).map_err(|e| AssetError::InvalidPattern {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        if !template.contains(STROKE_PLACEHOLDER) {
            return Err(AssetError::InvalidPattern {
                path: path.to_path_buf(),
                message: format!("missing {STROKE_PLACEHOLDER} placeholder"),
            });
        }
        tracing::info!(path = %path.display(), "Loaded background pattern");
        Ok(Self::from_template(&template))
    }

    fn from_template(template: &str) -> Self {
        Self {
            light: encode(&template.replace(STROKE_PLACEHOLDER, STROKE_LIGHT)),
            dark: encode(&template.replace(STROKE_PLACEHOLDER, STROKE_DARK)),
        }
    }
}

fn encode(svg: &str) -> String {
    format!(
        "data:image/svg+xml;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(svg)
    )
}
