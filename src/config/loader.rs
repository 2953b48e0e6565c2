use super::RegionSettings;
use crate::errors::{TerrainError, TerrainResult};
use bevy::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

pub fn get_settings_path() -> Option<PathBuf> {
    dirs::config_dir().and_then(|mut path| {
        path.push("hexterrain");
        fs::create_dir_all(&path).ok()?;
        path.push("region.toml");
        Some(path)
    })
}

/// Load settings from the user config directory, falling back to defaults
pub fn load_settings() -> RegionSettings {
    let Some(path) = get_settings_path() else {
        return RegionSettings::default();
    };
    if !path.exists() {
        return RegionSettings::default();
    }
    match load_settings_from(&path) {
        Ok(settings) => settings,
        Err(err) => {
            warn!("Ignoring settings at {}: {err}", path.display());
            RegionSettings::default()
        }
    }
}

pub fn load_settings_from<P: AsRef<Path>>(path: P) -> TerrainResult<RegionSettings> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(TerrainError::ConfigFileNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = fs::read_to_string(path)?;
    RegionSettings::from_toml_str(&contents)
}

pub fn save_settings_to<P: AsRef<Path>>(settings: &RegionSettings, path: P) -> TerrainResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, settings.to_toml_string()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("hexterrain-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path("saved.toml");
        let mut settings = RegionSettings::default();
        settings.seed = Some(1234);
        settings.region.number_of_tiles = 91;

        save_settings_to(&settings, &path).unwrap();
        let loaded = load_settings_from(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_reported() {
        let path = scratch_path("does-not-exist.toml");
        match load_settings_from(&path) {
            Err(TerrainError::ConfigFileNotFound { path: reported }) => assert_eq!(reported, path),
            other => panic!("expected ConfigFileNotFound, got {other:?}"),
        }
    }
}
