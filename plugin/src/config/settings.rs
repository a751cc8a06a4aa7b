//! Plugin settings as supplied by the host configuration.

use std::path::{Path, PathBuf};

use image_engine::FontLoader;
use serde::Deserialize;

use super::ConfigError;
use super::defaults::{DEFAULT_FONT_DIR, DEFAULT_PAGES, strings};
use super::options::{QrOptions, QrOptionsOverride};
use crate::kind::ObjectKind;

/// Top-level plugin settings.
///
/// Default options sit at the top level; each object kind may carry an
/// override table under its own key:
///
/// ```json
/// {
///   "pages": ["device", "cable"],
///   "data_fields": ["name", "url"],
///   "cable": { "text_fields": ["label", "termination_a", "termination_b"] }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PluginSettings {
    /// Kinds that get a QR panel.
    pub pages: Vec<String>,
    /// Directory holding `<font>.ttf` files.
    pub font_dir: Option<PathBuf>,
    #[serde(flatten)]
    pub defaults: QrOptions,
    pub device: Option<QrOptionsOverride>,
    pub rack: Option<QrOptionsOverride>,
    pub cable: Option<QrOptionsOverride>,
    pub location: Option<QrOptionsOverride>,
    pub powerpanel: Option<QrOptionsOverride>,
    pub powerfeed: Option<QrOptionsOverride>,
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            pages: strings(DEFAULT_PAGES),
            font_dir: None,
            defaults: QrOptions::default(),
            device: None,
            rack: None,
            cable: None,
            location: None,
            powerpanel: None,
            powerfeed: None,
        }
    }
}

impl PluginSettings {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&raw)?;
        tracing::info!(path = %path.display(), pages = ?settings.pages, "Loaded QR plugin settings");
        Ok(settings)
    }

    /// Whether `kind` is listed in `pages`.
    pub fn is_enabled(&self, kind: ObjectKind) -> bool {
        self.pages.iter().any(|p| p == kind.key())
    }

    pub fn override_for(&self, kind: ObjectKind) -> Option<&QrOptionsOverride> {
        match kind {
            ObjectKind::Device => self.device.as_ref(),
            ObjectKind::Rack => self.rack.as_ref(),
            ObjectKind::Cable => self.cable.as_ref(),
            ObjectKind::Location => self.location.as_ref(),
            ObjectKind::PowerPanel => self.powerpanel.as_ref(),
            ObjectKind::PowerFeed => self.powerfeed.as_ref(),
        }
    }

    /// Effective options for `kind`: defaults with its override applied.
    pub fn options_for(&self, kind: ObjectKind) -> QrOptions {
        match self.override_for(kind) {
            Some(over) => self.defaults.merged(over),
            None => self.defaults.clone(),
        }
    }

    /// Font loader for the configured directory (environment takes precedence).
    pub fn font_loader(&self) -> FontLoader {
        let dir = self
            .font_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FONT_DIR));
        FontLoader::from_env(dir)
    }
}
