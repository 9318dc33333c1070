//! Observable preference storage with a theme selection workflow.
//!
//! Two collaborating pieces:
//!
//! - [`prefs::PreferencesStorage`] persists a single named setting (the
//!   selected theme key) in a JSON namespace on disk and broadcasts every
//!   committed write on a shared, conflated `watch` stream.
//! - [`settings::SettingsViewModel`] sits between the UI and the store: it
//!   computes the themes valid for the current platform, exposes the
//!   selected theme as a continuously updated value and persists a new
//!   choice off the caller's thread.
//!
//! The hosting UI renders the state and calls back into the view model; how
//! it does that is its own business.

pub mod event;
pub mod prefs;
pub mod settings;
pub mod theme;

pub use event::Event;
pub use prefs::PreferencesStorage;
pub use settings::SettingsViewModel;
pub use theme::{available_themes, default_theme, Platform, Theme, UnknownThemeKey};
