//! Theme data model

use enum_iterator::{all, Sequence};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

const KEY_LIGHT: &str = "light";
const KEY_DARK: &str = "dark";
const KEY_SYSTEM: &str = "system";
const KEY_BATTERY: &str = "battery";

/// App appearance mode.
///
/// Each variant carries a stable storage key used to serialize the selection
/// into the preference store. Keys are persisted externally and must never
/// change between versions.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Sequence, Serialize, Deserialize)]
pub enum Theme {
    /// Always use the light theme.
    #[serde(rename = "light")]
    Light,
    /// Always use the dark theme.
    #[serde(rename = "dark")]
    Dark,
    /// Follow the host's system-wide dark mode setting.
    #[serde(rename = "system")]
    FollowSystem,
    /// Dark when the host's battery saver is enabled, light otherwise.
    #[serde(rename = "battery")]
    AutoBattery,
}

/// Error type for reverse lookup of an unrecognized storage key
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme storage key: {0:?}")]
pub struct UnknownThemeKey(pub String);

impl Theme {
    /// Key under which this theme is serialized into the preference store.
    pub fn storage_key(&self) -> &'static str {
        match self {
            Theme::Light => KEY_LIGHT,
            Theme::Dark => KEY_DARK,
            Theme::FollowSystem => KEY_SYSTEM,
            Theme::AutoBattery => KEY_BATTERY,
        }
    }

    /// Find the [`Theme`] for the given storage key.
    pub fn from_storage_key(storage_key: &str) -> Result<Theme, UnknownThemeKey> {
        all::<Theme>()
            .find(|theme| theme.storage_key() == storage_key)
            .ok_or_else(|| UnknownThemeKey(storage_key.to_owned()))
    }
}

/// User friendly name of the theme
impl Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let str = match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::FollowSystem => "Follow system",
            Theme::AutoBattery => "Set by Battery Saver",
        };
        write!(f, "{}", str)
    }
}
