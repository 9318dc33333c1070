//! Tests for the theme domain

#[cfg(test)]
mod tests {
    use crate::theme::model::UnknownThemeKey;
    use crate::theme::{available_themes, default_theme, Platform, Theme, SYSTEM_THEME_MIN_VERSION};
    use enum_iterator::all;
    use rstest::rstest;

    #[rstest]
    #[case(Theme::Light, "light")]
    #[case(Theme::Dark, "dark")]
    #[case(Theme::FollowSystem, "system")]
    #[case(Theme::AutoBattery, "battery")]
    fn storage_keys_are_stable(#[case] theme: Theme, #[case] key: &str) {
        assert_eq!(theme.storage_key(), key);
    }

    #[test]
    fn storage_key_round_trips_for_every_theme() {
        for theme in all::<Theme>() {
            assert_eq!(Theme::from_storage_key(theme.storage_key()), Ok(theme));
        }
    }

    #[rstest]
    #[case("")]
    #[case("sepia")]
    #[case("LIGHT")]
    #[case("dark ")]
    fn unrecognized_storage_key_is_an_error(#[case] key: &str) {
        assert_eq!(
            Theme::from_storage_key(key),
            Err(UnknownThemeKey(key.to_owned()))
        );
    }

    #[test]
    fn serde_representation_matches_storage_keys() {
        for theme in all::<Theme>() {
            assert_eq!(serde_json::to_value(theme).unwrap(), theme.storage_key());
            let parsed: Theme =
                serde_json::from_value(serde_json::to_value(theme).unwrap()).unwrap();
            assert_eq!(parsed, theme);
        }
    }

    #[test]
    fn storage_keys_are_unique() {
        let keys: Vec<_> = all::<Theme>().map(|t| t.storage_key()).collect();
        let mut deduped = keys.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), keys.len());
    }

    #[test]
    fn default_theme_follows_system_on_capable_platforms() {
        assert_eq!(
            default_theme(Platform::new(SYSTEM_THEME_MIN_VERSION)),
            Theme::FollowSystem
        );
        assert_eq!(
            default_theme(Platform::new(SYSTEM_THEME_MIN_VERSION + 4)),
            Theme::FollowSystem
        );
    }

    #[test]
    fn default_theme_uses_battery_saver_below_threshold() {
        assert_eq!(
            default_theme(Platform::new(SYSTEM_THEME_MIN_VERSION - 1)),
            Theme::AutoBattery
        );
    }

    #[test]
    fn available_themes_on_capable_platform() {
        assert_eq!(
            available_themes(Platform::new(SYSTEM_THEME_MIN_VERSION)),
            vec![Theme::Light, Theme::Dark, Theme::FollowSystem]
        );
    }

    #[test]
    fn available_themes_below_threshold() {
        assert_eq!(
            available_themes(Platform::new(SYSTEM_THEME_MIN_VERSION - 1)),
            vec![Theme::Light, Theme::Dark, Theme::AutoBattery]
        );
    }

    #[test]
    fn current_platform_supports_system_theme() {
        assert!(Platform::current().supports_system_theme());
    }

    #[test]
    fn themes_have_user_friendly_names() {
        assert_eq!(Theme::FollowSystem.to_string(), "Follow system");
        assert_eq!(Theme::AutoBattery.to_string(), "Set by Battery Saver");
    }
}
