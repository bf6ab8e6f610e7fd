use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{MenuError, Result};
use crate::loader::LoaderSettings;
pub use crate::loader::DEFAULT_RESTAURANT;

pub const DEFAULT_CONFIG_FILE: &str = "fastfood.toml";
pub const DEFAULT_MENU_PATH: &str = "menu.csv";

/// Runtime settings, read from `fastfood.toml` when present.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// CSV nutrition source.
    pub menu_path: PathBuf,

    /// Fallback brand for sources without a restaurant column.
    pub default_restaurant: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            menu_path: PathBuf::from(DEFAULT_MENU_PATH),
            default_restaurant: DEFAULT_RESTAURANT.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file. A missing file yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(MenuError::Config(format!(
                    "Failed to read config file '{}': {}",
                    path.display(),
                    e
                )));
            }
        };

        let settings: Settings = toml::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Apply command-line overrides on top of file settings.
    pub fn with_overrides(
        mut self,
        menu_path: Option<PathBuf>,
        default_restaurant: Option<String>,
    ) -> Result<Self> {
        if let Some(path) = menu_path {
            self.menu_path = path;
        }
        if let Some(name) = default_restaurant {
            self.default_restaurant = name;
        }
        self.validate()?;
        Ok(self)
    }

    /// The part of the settings the CSV loader needs.
    pub fn loader(&self) -> LoaderSettings {
        LoaderSettings {
            default_restaurant: self.default_restaurant.clone(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.default_restaurant.trim().is_empty() {
            return Err(MenuError::Config(
                "default_restaurant must not be blank".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"menu_path = "data/cfa.csv""#).unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.menu_path, PathBuf::from("data/cfa.csv"));
        assert_eq!(settings.default_restaurant, DEFAULT_RESTAURANT);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "menu_path = [").unwrap();
        assert!(matches!(
            Settings::load(file.path()),
            Err(MenuError::Toml(_))
        ));
    }

    #[test]
    fn test_overrides_win() {
        let settings = Settings::default()
            .with_overrides(Some(PathBuf::from("other.csv")), Some("Acme".to_string()))
            .unwrap();
        assert_eq!(settings.menu_path, PathBuf::from("other.csv"));
        assert_eq!(settings.default_restaurant, "Acme");
    }

    #[test]
    fn test_loader_settings_carry_brand() {
        let settings = Settings::default()
            .with_overrides(None, Some("Acme".to_string()))
            .unwrap();
        assert_eq!(settings.loader().default_restaurant, "Acme");
        assert_eq!(Settings::default().loader(), LoaderSettings::default());
    }

    #[test]
    fn test_blank_restaurant_rejected() {
        let result = Settings::default().with_overrides(None, Some("  ".to_string()));
        assert!(matches!(result, Err(MenuError::Config(_))));
    }
}
