//! Font files encoded as `@font-face` data URIs.

use std::path::Path;

use base64::Engine;

use crate::AssetError;

/// A font file encoded for inline embedding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontAsset {
    data_uri: String,
    format: &'static str,
}

impl FontAsset {
    /// Read a font file and encode it.
    ///
    /// # Errors
    ///
    /// Returns `AssetError::NotFound` if the file is missing, `AssetError::Io`
    /// if it cannot be read and `AssetError::Empty` if it has no content.
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        if !path.exists() {
            return Err(AssetError::NotFound(path.to_path_buf()));
        }
        let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let font = Self::from_bytes(path, &bytes)?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "Loaded font asset");
        Ok(font)
    }

    /// Encode in-memory font bytes.
    ///
    /// `name` is only used to pick the MIME type and `format()` hint from its
    /// extension.
    ///
    /// # Errors
    ///
    /// Returns `AssetError::Empty` if `bytes` is empty.
    pub fn from_bytes(name: impl AsRef<Path>, bytes: &[u8]) -> Result<Self, AssetError> {
        let name = name.as_ref();
        if bytes.is_empty() {
            return Err(AssetError::Empty(name.to_path_buf()));
        }
        let mime = font_mime(name);
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        Ok(Self {
            data_uri: format!("data:{mime};charset=utf-8;base64,{encoded}"),
            format: font_format(name),
        })
    }

    /// The `data:` URI holding the encoded font.
    pub fn data_uri(&self) -> &str {
        &self.data_uri
    }

    /// The CSS `format()` hint (`woff2`, `woff`, `opentype`, `truetype`).
    pub fn format(&self) -> &'static str {
        self.format
    }
}

fn extension(name: &Path) -> String {
    name.extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default()
}

/// MIME type for a font file, falling back to `font/woff2`.
fn font_mime(name: &Path) -> String {
    match mime_guess::from_path(name).first() {
        Some(mime) if mime.type_() == "font" => mime.essence_str().to_owned(),
        _ => match extension(name).as_str() {
            "otf" => "font/otf".to_owned(),
            "ttf" => "font/ttf".to_owned(),
            "woff" => "font/woff".to_owned(),
            _ => "font/woff2".to_owned(),
        },
    }
}

fn font_format(name: &Path) -> &'static str {
    match extension(name).as_str() {
        "woff" => "woff",
        "otf" => "opentype",
        "ttf" => "truetype",
        _ => "woff2",
    }
}
