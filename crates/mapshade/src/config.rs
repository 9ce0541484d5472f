//! Configuration storage, as seen from theme switching.
//!
//! The resolver needs three things from storage: the stored theme
//! preference, the last concrete theme that was applied (the fallback for
//! the automatic theme), and the last known position. [`ConfigStore`] is
//! that read model; [`FileConfigStore`] is a YAML-file-backed
//! implementation of it. Writing configuration is someone else's job.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::context::Position;
use crate::error::ConfigError;
use crate::setting::{ConcreteTheme, ThemeSetting};

/// A position as persisted: coordinates plus the time they were recorded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoredPosition {
    pub lat: f64,
    pub lon: f64,
    /// Unix seconds at which the position was recorded.
    pub timestamp: i64,
}

impl StoredPosition {
    /// The coordinate part, for the resolver.
    pub fn position(&self) -> Position {
        Position::new(self.lat, self.lon)
    }
}

/// Read-only view of the stored configuration.
pub trait ConfigStore {
    /// The user's stored theme preference.
    fn theme_setting(&self) -> ThemeSetting;

    /// The concrete theme most recently applied to the UI. Used as the
    /// fallback when the automatic theme cannot decide.
    fn current_ui_theme(&self) -> ConcreteTheme;

    /// The last known position, if one was ever recorded.
    fn last_known_position(&self) -> Option<StoredPosition>;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    theme: ThemeSetting,

    #[serde(default)]
    ui_theme: ConcreteTheme,

    #[serde(default)]
    last_position: Option<StoredPosition>,
}

/// YAML-file-backed [`ConfigStore`].
///
/// # Example
///
/// ```rust
/// use mapshade::{ConfigStore, FileConfigStore, ThemeSetting};
///
/// let store = FileConfigStore::from_yaml(r#"
/// theme: nav-auto
/// ui_theme: dark
/// last_position:
///   lat: 52.52
///   lon: 13.40
///   timestamp: 1718971200
/// "#).unwrap();
///
/// assert_eq!(store.theme_setting(), ThemeSetting::NavAuto);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FileConfigStore {
    inner: ConfigFile,
    source_path: Option<PathBuf>,
}

impl FileConfigStore {
    /// Creates a store with defaults: follow-system preference, light UI
    /// theme, no position.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a store from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Load {
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;

        let inner: ConfigFile = serde_yaml::from_str(&content)?;
        Ok(Self {
            inner,
            source_path: Some(path.to_path_buf()),
        })
    }

    /// Creates a store from YAML content.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if parsing fails.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let inner: ConfigFile = serde_yaml::from_str(yaml)?;
        Ok(Self {
            inner,
            source_path: None,
        })
    }

    /// Returns the source file path, if this store was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Sets the stored preference, returning `self` for chaining. Meant
    /// for embedders that manage configuration elsewhere.
    pub fn with_theme(mut self, theme: ThemeSetting) -> Self {
        self.inner.theme = theme;
        self
    }

    /// Sets the last applied concrete theme, returning `self` for
    /// chaining.
    pub fn with_ui_theme(mut self, theme: ConcreteTheme) -> Self {
        self.inner.ui_theme = theme;
        self
    }

    /// Sets the last known position, returning `self` for chaining.
    pub fn with_position(mut self, position: StoredPosition) -> Self {
        self.inner.last_position = Some(position);
        self
    }
}

impl ConfigStore for FileConfigStore {
    fn theme_setting(&self) -> ThemeSetting {
        self.inner.theme
    }

    fn current_ui_theme(&self) -> ConcreteTheme {
        self.inner.ui_theme
    }

    fn last_known_position(&self) -> Option<StoredPosition> {
        self.inner.last_position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_follow_system_and_light() {
        let store = FileConfigStore::new();
        assert_eq!(store.theme_setting(), ThemeSetting::FollowSystem);
        assert_eq!(store.current_ui_theme(), ConcreteTheme::Light);
        assert_eq!(store.last_known_position(), None);
    }

    #[test]
    fn parses_a_full_config() {
        let store = FileConfigStore::from_yaml(
            "theme: auto\nui_theme: dark\nlast_position:\n  lat: -33.87\n  lon: 151.21\n  timestamp: 1700000000\n",
        )
        .unwrap();

        assert_eq!(store.theme_setting(), ThemeSetting::Auto);
        assert_eq!(store.current_ui_theme(), ConcreteTheme::Dark);
        let pos = store.last_known_position().unwrap();
        assert_eq!(pos.position(), Position::new(-33.87, 151.21));
        assert_eq!(pos.timestamp, 1_700_000_000);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let store = FileConfigStore::from_yaml("theme: dark\n").unwrap();
        assert_eq!(store.theme_setting(), ThemeSetting::Dark);
        assert_eq!(store.current_ui_theme(), ConcreteTheme::Light);
        assert_eq!(store.last_known_position(), None);
    }

    #[test]
    fn unknown_theme_name_is_a_parse_error() {
        let err = FileConfigStore::from_yaml("theme: sepia\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn loads_from_a_file_and_remembers_the_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "theme: nav-auto").unwrap();

        let store = FileConfigStore::from_file(file.path()).unwrap();
        assert_eq!(store.theme_setting(), ThemeSetting::NavAuto);
        assert_eq!(store.source_path(), Some(file.path()));
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = FileConfigStore::from_file("/nonexistent/mapshade.yaml").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("/nonexistent/mapshade.yaml"), "{message}");
    }
}
