//! Glyph table loaded from a JSON file.

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Display strings for each kind of cell.
///
/// Missing fields fall back to plain ASCII. `pill` is accepted for
/// compatibility with existing glyph files but mazes have no pill marker.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub player: String,
    pub ghost: String,
    pub wall: String,
    pub dot: String,
    pub pill: String,
    pub death: String,
    pub space: String,
    /// Glyphs are two columns wide; cursor columns are doubled.
    pub use_emoji: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            player: "P".into(),
            ghost: "G".into(),
            wall: "#".into(),
            dot: ".".into(),
            pill: "o".into(),
            death: "X".into(),
            space: " ".into(),
            use_emoji: false,
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_json::from_str(&text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            "loaded config {} (use_emoji: {})",
            path.display(),
            config.use_emoji
        );
        Ok(config)
    }

    /// Terminal columns taken by one maze cell.
    pub fn cell_width(&self) -> usize {
        if self.use_emoji {
            2
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_full_config() {
        let (_dir, path) = write(
            r#"{
                "player": "😃", "ghost": "👻", "wall": "\u001b[44m  \u001b[0m",
                "dot": "•", "pill": "💊", "death": "💀", "space": "  ",
                "use_emoji": true
            }"#,
        );
        let config = Config::load(&path).unwrap();
        assert_eq!(config.player, "😃");
        assert_eq!(config.death, "💀");
        assert!(config.use_emoji);
        assert_eq!(config.cell_width(), 2);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let (_dir, path) = write(r#"{"ghost": "@", "extra": 1}"#);
        let config = Config::load(&path).unwrap();
        assert_eq!(config.ghost, "@");
        assert_eq!(config.player, "P");
        assert!(!config.use_emoji);
        assert_eq!(config.cell_width(), 1);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let (_dir, path) = write("{ player: ");
        assert!(matches!(Config::load(&path).unwrap_err(), Error::Config { .. }));
    }

    #[test]
    fn wrong_field_type_is_a_config_error() {
        let (_dir, path) = write(r#"{"use_emoji": "yes"}"#);
        assert!(matches!(Config::load(&path).unwrap_err(), Error::Config { .. }));
    }

    #[test]
    fn unreadable_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
