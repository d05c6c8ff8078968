//! HTML document renderer for social card preview images.
//!
//! [`CardRenderer`] turns a [`RenderRequest`] (headline, theme, font size,
//! images, path) into a self-contained HTML document that a headless browser
//! can screenshot. Fonts and the background pattern come from a shared
//! [`card_assets::AssetBundle`] loaded once at startup.
//!
//! # Architecture
//!
//! One template serves every cosmetic variant; a [`Skin`] carries the values
//! that differ (margins, weights, avatar placement, background pattern,
//! default image height).
//!
//! Text transforms sit behind narrow traits so they can be replaced:
//! - [`MarkdownConverter`]: [`PulldownConverter`] for markdown headlines
//! - [`EmojiSubstituter`]: [`TwemojiSubstituter`] or [`NoopEmoji`]
//!
//! Literal headlines, image attributes, branding and the path are always
//! escaped with [`escape_html`].

mod css;
mod emoji;
mod escape;
mod markdown;
#[cfg(test)]
mod properties;
mod renderer;
mod request;
mod skin;
mod template;

pub use emoji::{EmojiSubstituter, NoopEmoji, TwemojiSubstituter};
pub use escape::escape_html;
pub use markdown::{MarkdownConverter, PulldownConverter};
pub use renderer::CardRenderer;
pub use request::{ImageSpec, RenderRequest, Theme};
pub use skin::{AvatarPlacement, DEFAULT_IMAGE_WIDTH, Skin, SkinKind};

// Re-exported for convenience
pub use card_config::BrandingConfig;
