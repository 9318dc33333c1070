//! Settings view state: the theme selection workflow.
//!
//! A thin orchestration layer between the UI and the preference store. It
//! knows which themes the current platform offers, exposes the selected
//! theme as a continuously updated value, and persists a new choice without
//! blocking the caller.
//!
//! Data flow: UI action -> [`SettingsViewModel::set_selected_theme`] ->
//! store write off-thread -> store change stream -> mapped theme stream ->
//! UI re-render.

use crate::event::Event;
use crate::prefs::PreferencesStorage;
use crate::theme::{available_themes, default_theme, Platform, Theme};
use color_eyre::eyre::Result;
use log::{error, warn};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task;

/// View-state holder for the settings screen.
pub struct SettingsViewModel {
    storage: Arc<PreferencesStorage>,
    platform: Platform,
    available_themes: Vec<Theme>,
    theme_dialog_tx: watch::Sender<Option<Arc<Event<()>>>>,
}

impl SettingsViewModel {
    pub fn new(storage: Arc<PreferencesStorage>, platform: Platform) -> Self {
        let (theme_dialog_tx, _) = watch::channel(None);
        Self {
            available_themes: available_themes(platform),
            storage,
            platform,
            theme_dialog_tx,
        }
    }

    /// All themes the user can choose from, computed once at construction.
    pub fn available_themes(&self) -> &[Theme] {
        &self.available_themes
    }

    /// Currently selected theme as a continuously updated value.
    ///
    /// Subscribes to the store off-thread (the first access may open the
    /// backing file), then keeps a mapped stream current: an absent value
    /// maps to the platform default, and an unrecognized stored key is
    /// recovered by falling back to the default with a warning instead of
    /// tearing the stream down.
    pub async fn selected_theme(&self) -> Result<watch::Receiver<Theme>> {
        let storage = Arc::clone(&self.storage);
        let platform = self.platform;

        let mut raw = task::spawn_blocking(move || storage.observe_selected_theme()).await??;
        let initial = map_stored_key(raw.borrow_and_update().as_deref(), platform);
        let (tx, rx) = watch::channel(initial);

        tokio::spawn(async move {
            while raw.changed().await.is_ok() {
                let theme = map_stored_key(raw.borrow_and_update().as_deref(), platform);
                if tx.send(theme).is_err() {
                    // All observers are gone.
                    break;
                }
            }
        });

        Ok(rx)
    }

    /// Persist the given theme as the app's theme.
    ///
    /// Fire-and-forget: the write is scheduled on a background context and
    /// the caller returns immediately. A failed write is logged, never
    /// surfaced; observers simply won't see the expected value. Must be
    /// called from within a Tokio runtime.
    pub fn set_selected_theme(&self, theme: Theme) {
        let storage = Arc::clone(&self.storage);
        tokio::spawn(async move {
            let result = task::spawn_blocking(move || {
                storage.set_selected_theme(Some(theme.storage_key().to_owned()))
            })
            .await;
            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => error!("Failed to persist selected theme: {:#}", e),
                Err(e) => error!("Theme persistence task failed: {}", e),
            }
        });
    }

    /// Called when the user clicks the "Choose theme" setting.
    pub fn on_theme_setting_clicked(&self) {
        self.theme_dialog_tx
            .send_replace(Some(Arc::new(Event::new(()))));
    }

    /// Tells the UI when to show the theme chooser dialog.
    ///
    /// Each click publishes a fresh one-shot [`Event`]; whichever observer
    /// consumes it first wins, and re-reading the channel state afterwards
    /// delivers nothing.
    pub fn show_theme_dialog(&self) -> watch::Receiver<Option<Arc<Event<()>>>> {
        self.theme_dialog_tx.subscribe()
    }
}

fn map_stored_key(key: Option<&str>, platform: Platform) -> Theme {
    match key {
        None => default_theme(platform),
        Some(key) => Theme::from_storage_key(key).unwrap_or_else(|e| {
            warn!("{}, falling back to default theme", e);
            default_theme(platform)
        }),
    }
}
