//! Configuration management for the social card renderer.
//!
//! Parses `card.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! Host-provided settings can be applied during load via [`ConfigOverrides`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `assets.dir`
//! - `branding.name`
//! - `branding.domain`
//! - `branding.avatar_url`
//! - `emoji.base_url`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "card.toml";

/// Skin names accepted by `render.skin`, compared case-insensitively.
pub const SKIN_NAMES: [&str; 4] = ["classic", "grid", "spotlight", "minimal"];

/// Default Twemoji SVG location.
pub const DEFAULT_EMOJI_BASE_URL: &str =
    "https://cdn.jsdelivr.net/gh/twitter/twemoji@14.0.2/assets/svg";

/// Settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct ConfigOverrides {
    /// Override the asset base directory.
    pub assets_dir: Option<PathBuf>,
    /// Override the default skin.
    pub skin: Option<String>,
    /// Override the emoji enabled flag.
    pub emoji_enabled: Option<bool>,
    /// Override the avatar URL.
    pub avatar_url: Option<String>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Asset configuration (paths are relative strings from TOML).
    assets: AssetsConfigRaw,
    /// Attribution row configuration.
    pub branding: BrandingConfig,
    /// Emoji substitution configuration.
    pub emoji: EmojiConfig,
    /// Rendering defaults.
    pub render: RenderConfig,

    /// Resolved asset paths (set after loading).
    #[serde(skip)]
    pub assets_resolved: AssetsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw asset configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct AssetsConfigRaw {
    dir: Option<String>,
    regular: Option<String>,
    bold: Option<String>,
    mono: Option<String>,
    pattern: Option<String>,
}

/// Resolved asset configuration with absolute paths.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AssetsConfig {
    /// Regular weight heading font.
    pub regular_font: PathBuf,
    /// Bold weight heading font.
    pub bold_font: PathBuf,
    /// Monospace font for inline code.
    pub mono_font: PathBuf,
    /// Optional SVG background pattern template.
    ///
    /// If `None`, the built-in grid pattern is used.
    pub pattern: Option<PathBuf>,
}

impl AssetsConfig {
    /// Resolve raw asset names against the asset directory.
    fn resolve(dir: &Path, raw: &AssetsConfigRaw) -> Self {
        let file = |name: Option<&str>, default: &str| dir.join(name.unwrap_or(default));
        Self {
            regular_font: file(raw.regular.as_deref(), "fonts/Inter-Regular.woff2"),
            bold_font: file(raw.bold.as_deref(), "fonts/CamptonBold.otf"),
            mono_font: file(raw.mono.as_deref(), "fonts/Vera-Mono.woff2"),
            pattern: raw.pattern.as_deref().map(|p| dir.join(p)),
        }
    }
}

/// Attribution row configuration.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BrandingConfig {
    /// Name shown in the sub-heading.
    pub name: String,
    /// Domain prefixed to the request path in the link caption.
    pub domain: String,
    /// Avatar image URL (absolute URL or data URI).
    pub avatar_url: Option<String>,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            name: "Jordan Jones".to_owned(),
            domain: "heyjordn.com".to_owned(),
            avatar_url: None,
        }
    }
}

/// Emoji substitution configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct EmojiConfig {
    /// Whether emoji are replaced with glyph images.
    pub enabled: bool,
    /// Base URL of the SVG glyph set.
    pub base_url: String,
}

impl Default for EmojiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: DEFAULT_EMOJI_BASE_URL.to_owned(),
        }
    }
}

/// Rendering defaults.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Skin used when a request does not select one.
    pub skin: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            skin: "classic".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`emoji.base_url`").
        field: String,
        /// Error message (e.g., "${`CDN_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional overrides.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `card.toml` in current directory and parents.
    ///
    /// Overrides are applied after loading and path resolution.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        overrides: Option<&ConfigOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(overrides) = overrides {
            config.apply_overrides(overrides);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply overrides to the configuration.
    fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(dir) = &overrides.assets_dir {
            self.assets_resolved = AssetsConfig::resolve(dir, &self.assets);
        }
        if let Some(skin) = &overrides.skin {
            self.render.skin.clone_from(skin);
        }
        if let Some(enabled) = overrides.emoji_enabled {
            self.emoji.enabled = enabled;
        }
        if let Some(avatar_url) = &overrides.avatar_url {
            self.branding.avatar_url = Some(avatar_url.clone());
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        let assets = AssetsConfigRaw::default();
        let assets_resolved = AssetsConfig::resolve(&base.join("assets"), &assets);
        Self {
            assets,
            branding: BrandingConfig::default(),
            emoji: EmojiConfig::default(),
            render: RenderConfig::default(),
            assets_resolved,
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_branding()?;
        self.validate_emoji()?;
        self.validate_render()?;
        Ok(())
    }

    fn validate_branding(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.branding.name, "branding.name")?;
        require_non_empty(&self.branding.domain, "branding.domain")?;

        if let Some(ref url) = self.branding.avatar_url
            && !url.starts_with("data:")
        {
            require_http_url(url, "branding.avatar_url")?;
        }

        Ok(())
    }

    fn validate_emoji(&self) -> Result<(), ConfigError> {
        // Base URL only matters when substitution is on
        if self.emoji.enabled {
            require_non_empty(&self.emoji.base_url, "emoji.base_url")?;
            require_http_url(&self.emoji.base_url, "emoji.base_url")?;
        }
        Ok(())
    }

    fn validate_render(&self) -> Result<(), ConfigError> {
        let known = SKIN_NAMES
            .iter()
            .any(|name| name.eq_ignore_ascii_case(self.render.skin.trim()));
        if !known {
            return Err(ConfigError::Validation(format!(
                "render.skin must be one of {}, got {:?}",
                SKIN_NAMES.join(", "),
                self.render.skin
            )));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        expand::expand_opt(&mut self.assets.dir, "assets.dir")?;

        self.branding.name = expand::expand_env(&self.branding.name, "branding.name")?;
        self.branding.domain = expand::expand_env(&self.branding.domain, "branding.domain")?;
        expand::expand_opt(&mut self.branding.avatar_url, "branding.avatar_url")?;

        self.emoji.base_url = expand::expand_env(&self.emoji.base_url, "emoji.base_url")?;

        Ok(())
    }

    /// Resolve relative asset paths against the config file directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let dir = config_dir.join(self.assets.dir.as_deref().unwrap_or("assets"));
        self.assets_resolved = AssetsConfig::resolve(&dir, &self.assets);
    }
}
