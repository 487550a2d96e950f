//! Loading and saving generator configuration files.
//!
//! Files ending in `.toml` are read and written as TOML; every other
//! extension is treated as JSON.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::GeneratorConfig;

fn is_toml(path: &Path) -> bool {
    path.extension().and_then(|extension| extension.to_str()) == Some("toml")
}

/// `dungeon.json` writes through `dungeon.json.tmp`, so sibling files never share one.
fn temp_path(path: &Path) -> PathBuf {
    match path.extension().and_then(|extension| extension.to_str()) {
        Some(extension) => path.with_extension(format!("{extension}.tmp")),
        None => path.with_extension("tmp"),
    }
}

impl GeneratorConfig {
    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = if is_toml(path) {
            toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?
        } else {
            serde_json::from_str(&content)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?
        };
        config.validate().map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let encoded = if is_toml(path) {
            toml::to_string_pretty(self).map_err(io::Error::other)?
        } else {
            serde_json::to_string_pretty(self).map_err(io::Error::other)?
        };

        let tmp_path = temp_path(path);
        fs::write(&tmp_path, encoded)?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}
