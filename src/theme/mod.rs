//! App theme selection domain.
//!
//! This module defines the closed set of appearance modes, their stable
//! storage keys, and the platform capability check that decides whether the
//! "follow system" or the "battery saver" variant is offered and used as the
//! default.

pub mod model;
pub mod platform;

#[cfg(test)]
mod tests;

pub use model::{Theme, UnknownThemeKey};
pub use platform::{available_themes, default_theme, Platform, SYSTEM_THEME_MIN_VERSION};
