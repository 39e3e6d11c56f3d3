//! Configuration management
//!
//! Reads settings.json from the bitefeed directory:
//! ```json
//! {
//!   "app": { "sandboxMode": true, ... },
//!   "defaultUser": { "id": "...", "email": "...", "name": "..." }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::result::Result;

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
    #[serde(default)]
    default_user: Option<UserSettings>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default)]
    sandbox_mode: bool,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// The locally remembered default user for CLI commands
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

/// Bitefeed configuration (simplified view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    pub sandbox_mode: bool,
    pub default_user: Option<UserSettings>,
    // Keep the raw settings for preservation when saving
    _raw_settings: SettingsFile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sandbox_mode: false,
            default_user: None,
            _raw_settings: SettingsFile::default(),
        }
    }
}

impl Config {
    /// Load config from the bitefeed directory
    ///
    /// Sandbox mode can be enabled via:
    /// 1. Settings file
    /// 2. Environment variable BITEFEED_SANDBOX_MODE (for CI/testing)
    pub fn load(bitefeed_dir: &Path) -> Result<Self> {
        let settings_path = bitefeed_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        let sandbox_mode = match std::env::var("BITEFEED_SANDBOX_MODE").ok().as_deref() {
            Some("true" | "1" | "yes" | "TRUE" | "YES") => true,
            Some("false" | "0" | "no" | "FALSE" | "NO") => false,
            _ => raw.app.sandbox_mode,
        };

        Ok(Self {
            sandbox_mode,
            default_user: raw.default_user.clone(),
            _raw_settings: raw,
        })
    }

    /// Save config to the bitefeed directory
    /// Preserves settings that this crate doesn't manage
    pub fn save(&self, bitefeed_dir: &Path) -> Result<()> {
        let settings_path = bitefeed_dir.join("settings.json");

        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<SettingsFile>(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        settings.app.sandbox_mode = self.sandbox_mode;
        settings.default_user = self.default_user.clone();

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }
}
