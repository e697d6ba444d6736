use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Defaults remembered between sessions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Size used for the last generated maze
    pub last_size: Option<usize>,
    /// File the last maze was saved to or loaded from
    pub last_file: Option<PathBuf>,
    /// Where these settings are persisted; `None` keeps them in memory only
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Settings {
    /// Get the settings file path
    fn save_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("maze_settings.json")
    }

    /// Load settings from the user's data directory
    pub fn load() -> Self {
        Self::load_from(&Self::save_path())
    }

    /// Load settings from `path`, falling back to defaults when missing or corrupt
    pub fn load_from(path: &Path) -> Self {
        let mut settings: Self = match fs::read_to_string(path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                log::warn!("ignoring corrupt settings file {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        };
        settings.path = Some(path.to_path_buf());
        settings
    }

    /// Save settings to their file, if any
    pub fn save(&self) -> io::Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
    }

    pub fn remember_size(&mut self, size: usize) {
        self.last_size = Some(size);
        self.persist();
    }

    pub fn remember_file(&mut self, file: &Path) {
        self.last_file = Some(file.to_path_buf());
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = self.save() {
            log::warn!("failed to save settings: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("maze-tui-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_default_is_in_memory() {
        let mut settings = Settings::default();
        settings.remember_size(11);
        assert_eq!(settings.last_size, Some(11));
        assert!(settings.save().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("settings.json");
        let mut settings = Settings::load_from(&path);
        assert_eq!(settings.last_size, None);

        settings.remember_size(21);
        settings.remember_file(Path::new("maze.txt"));

        let loaded = Settings::load_from(&path);
        assert_eq!(loaded.last_size, Some(21));
        assert_eq!(loaded.last_file, Some(PathBuf::from("maze.txt")));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_falls_back() {
        let path = temp_path("corrupt.json");
        fs::write(&path, "{ not json").unwrap();
        let settings = Settings::load_from(&path);
        assert_eq!(settings.last_size, None);
        assert_eq!(settings.last_file, None);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_path_not_serialized() {
        let settings = Settings {
            last_size: Some(5),
            last_file: None,
            path: Some(PathBuf::from("/somewhere")),
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(json, r#"{"last_size":5,"last_file":null}"#);
    }
}
