use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::classification::infrastructure::classifier_factory::ClassifierKind;
use crate::shared::constants::{APP_DIR_NAME, ARTIFACT_NAME, SETTINGS_FILE_NAME};

/// Persisted deployment settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub classifier: ClassifierKind,
    #[serde(default = "default_artifact_name")]
    pub artifact_name: String,
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

fn default_artifact_name() -> String {
    ARTIFACT_NAME.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            classifier: ClassifierKind::default(),
            artifact_name: default_artifact_name(),
            catalog_path: None,
        }
    }
}

impl Settings {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
    }

    /// Loads from the platform config directory, falling back to defaults.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        let Ok(json) = fs::read_to_string(path) else {
            return Self::default();
        };
        match serde_json::from_str(&json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring malformed settings at {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Best-effort save to the platform config directory.
    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            if let Err(e) = self.save_to(&path) {
                log::warn!("Failed to save settings to {}: {e}", path.display());
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
    }
}
