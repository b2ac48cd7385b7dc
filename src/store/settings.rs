//! Site settings: a single record merged against the defaults

use tracing::{debug, warn};

use crate::database::Storage;
use crate::model::{SettingsPatch, SiteSettings};
use crate::store::collection::merge;

pub const SLOT_SETTINGS: &str = "admin-settings";

#[derive(Clone)]
pub struct Settings {
    storage: Storage,
}

impl Settings {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Current settings
    ///
    /// Fields absent from the stored document take default values. The
    /// defaults are persisted on first access; an unreadable document yields
    /// the defaults without being overwritten.
    pub fn get(&self) -> SiteSettings {
        match self.storage.load_json::<SiteSettings>(SLOT_SETTINGS) {
            Ok(Some(settings)) => settings,
            Ok(None) => {
                let defaults = SiteSettings::default();
                self.write(&defaults);
                defaults
            }
            Err(e) => {
                warn!(slot = SLOT_SETTINGS, error = %e, "unreadable settings, using defaults");
                SiteSettings::default()
            }
        }
    }

    /// Merges `patch` into the current settings and stores the result
    pub fn save(&self, patch: &SettingsPatch) -> SiteSettings {
        let current = self.get();
        match merge(&current, patch) {
            Ok(updated) => {
                self.write(&updated);
                updated
            }
            Err(e) => {
                warn!(error = %e, "settings patch rejected");
                current
            }
        }
    }

    /// Restores the defaults
    pub fn reset(&self) -> SiteSettings {
        let defaults = SiteSettings::default();
        self.write(&defaults);
        defaults
    }

    fn write(&self, settings: &SiteSettings) {
        match self.storage.save_json(SLOT_SETTINGS, settings) {
            Ok(()) => debug!(slot = SLOT_SETTINGS, "settings saved"),
            Err(e) => warn!(slot = SLOT_SETTINGS, error = %e, "failed to save settings"),
        }
    }
}
