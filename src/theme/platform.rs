//! Host platform capabilities that affect which themes are offered.

use super::model::Theme;

/// Minimum platform version that exposes a system-wide dark mode setting.
pub const SYSTEM_THEME_MIN_VERSION: u32 = 29;

/// Capabilities of the platform this process runs on.
///
/// Capability is fixed for the lifetime of the process, so callers usually
/// probe once with [`Platform::current`] and pass the value around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    version: u32,
}

impl Platform {
    /// Platform with the given version, mainly useful in tests and for hosts
    /// that know their version from elsewhere.
    pub fn new(version: u32) -> Self {
        Self { version }
    }

    /// Capability of the running host.
    ///
    /// Current desktop hosts all expose a system-wide dark mode setting.
    pub fn current() -> Self {
        Self::new(SYSTEM_THEME_MIN_VERSION)
    }

    /// Whether the host lets applications follow its dark mode setting.
    pub fn supports_system_theme(&self) -> bool {
        self.version >= SYSTEM_THEME_MIN_VERSION
    }
}

/// Theme assumed when the user has never made an explicit selection.
pub fn default_theme(platform: Platform) -> Theme {
    if platform.supports_system_theme() {
        Theme::FollowSystem
    } else {
        Theme::AutoBattery
    }
}

/// All themes the user can choose from on this platform, in display order.
///
/// Recomputed on demand; the third entry depends on the same capability
/// check as [`default_theme`].
pub fn available_themes(platform: Platform) -> Vec<Theme> {
    vec![
        Theme::Light,
        Theme::Dark,
        if platform.supports_system_theme() {
            Theme::FollowSystem
        } else {
            Theme::AutoBattery
        },
    ]
}
