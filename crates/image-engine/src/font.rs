//! Font loading with a built-in fallback.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use ab_glyph::FontArc;

use crate::error::EngineError;

/// Name of the font compiled into the binary.
pub const BUILTIN_FONT_NAME: &str = "DejaVuSans";

/// Environment variable overriding the font directory.
pub const FONT_DIR_ENV: &str = "NETBOX_QR_FONT_DIR";

const BUILTIN_FONT_DATA: &[u8] = include_bytes!("../fonts/DejaVuSans.ttf");

static BUILTIN_FONT: LazyLock<FontArc> = LazyLock::new(|| {
    FontArc::try_from_slice(BUILTIN_FONT_DATA).expect("bundled DejaVuSans.ttf is a valid font")
});

/// The font used whenever a configured font cannot be loaded.
pub fn builtin_font() -> FontArc {
    BUILTIN_FONT.clone()
}

/// Resolves font names to `<dir>/<name>.ttf`.
#[derive(Debug, Clone)]
pub struct FontLoader {
    dir: PathBuf,
}

impl FontLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Use `NETBOX_QR_FONT_DIR` if set, else `default_dir`.
    pub fn from_env(default_dir: impl Into<PathBuf>) -> Self {
        match std::env::var(FONT_DIR_ENV) {
            Ok(dir) if !dir.is_empty() => Self::new(dir),
            _ => Self::new(default_dir),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn font_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.ttf"))
    }

    /// Load a font by name.
    pub fn try_load(&self, name: &str) -> Result<FontArc, EngineError> {
        let path = self.font_path(name);
        let data = std::fs::read(&path)
            .map_err(|e| EngineError::Font(format!("{}: {e}", path.display())))?;
        FontArc::try_from_vec(data)
            .map_err(|_| EngineError::Font(format!("{}: not a TrueType/OpenType font", path.display())))
    }

    /// Load a font by name, falling back to the built-in font.
    ///
    /// The built-in font is returned directly for its own name or when no
    /// name is configured.
    pub fn load(&self, name: Option<&str>) -> FontArc {
        let Some(name) = name.filter(|n| !n.is_empty() && *n != BUILTIN_FONT_NAME) else {
            return builtin_font();
        };
        match self.try_load(name) {
            Ok(font) => {
                tracing::debug!(font = name, "Loaded font");
                font
            }
            Err(e) => {
                tracing::warn!(font = name, error = %e, "Falling back to built-in font");
                builtin_font()
            }
        }
    }
}
