// src/config/config_load.rs
//
// loading of config.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::config_types::{PathConfig, StyleConfig, TrailConfig, WindowConfig};
use crate::errors::TrailError;

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub paths: PathConfig,
    #[serde(default)]
    pub style: StyleConfig,
    #[serde(default)]
    pub trail: TrailConfig,
}

impl Config {
    /// Loads config.toml from the executable's directory, then the working
    /// directory. Falls back to built-in defaults when neither exists.
    pub fn load() -> Result<Self, TrailError> {
        let candidates = [
            Self::exe_dir().map(|dir| dir.join(CONFIG_FILE)),
            Some(PathBuf::from(CONFIG_FILE)),
        ];

        for path in candidates.into_iter().flatten() {
            if path.exists() {
                tracing::info!("Loading config from {}", path.display());
                return Self::load_from_path(&path);
            }
        }

        tracing::warn!("No {} found, using built-in defaults", CONFIG_FILE);
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self, TrailError> {
        let content = fs::read_to_string(path).map_err(|source| TrailError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, TrailError> {
        toml::from_str(content).map_err(|source| TrailError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn exe_dir() -> Option<PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn resolve_asset_dir(&self) -> PathBuf {
        let asset_dir = Path::new(&self.paths.asset_directory);
        if asset_dir.is_absolute() {
            return asset_dir.to_path_buf();
        }

        // prefer assets next to the executable, then the working directory
        match Self::exe_dir().map(|dir| dir.join(asset_dir)) {
            Some(path) if path.exists() => path,
            _ => asset_dir.to_path_buf(),
        }
    }

    /// Paths of the pool images, numbered from 1 as the asset set is.
    pub fn image_paths(&self) -> Vec<PathBuf> {
        let dir = self.resolve_asset_dir();
        (1..=self.trail.image_count)
            .map(|n| dir.join(format!("{}.{}", n, self.paths.image_extension)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_trail_section_keeps_defaults() {
        let content = r#"
            [trail]
            image_lifespan = 1500.0
            slide_easing = [0.0, 0.0, 1.0, 1.0]
        "#;
        let config = Config::parse(content, Path::new("inline.toml")).unwrap();

        assert_eq!(config.trail.image_lifespan, 1500.0);
        assert_eq!(config.trail.slide_easing.x2, 1.0);
        assert_eq!(config.trail.mouse_threshold, 150.0);
        assert_eq!(config.trail.layer_count, 10);
        assert_eq!(config.window.width, 1440);
    }

    #[test]
    fn test_partial_window_and_paths_sections_keep_defaults() {
        let content = r#"
            [window]
            title = "portfolio"

            [paths]
            image_extension = "png"
        "#;
        let config = Config::parse(content, Path::new("inline.toml")).unwrap();

        assert_eq!(config.window.title, "portfolio");
        assert_eq!(config.window.width, 1440);
        assert_eq!(config.window.height, 900);
        assert_eq!(config.paths.asset_directory, "assets/tail-images");
        assert_eq!(config.paths.image_extension, "png");
    }

    #[test]
    fn test_empty_file_is_all_defaults() {
        let config = Config::parse("", Path::new("empty.toml")).unwrap();
        assert_eq!(config.trail.image_count, 20);
        assert_eq!(config.trail.removal_delay(), 1100.0);
        assert_eq!(config.paths.image_extension, "jpeg");
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let result = Config::parse("[trail]\nimage_lifespan = \"soon\"", Path::new("bad.toml"));
        assert!(matches!(result, Err(TrailError::ConfigParse { .. })));
    }

    #[test]
    fn test_image_paths_are_numbered_from_one() {
        let mut config = Config::default();
        config.paths.asset_directory = String::from("/srv/tail-images");
        let paths = config.image_paths();

        assert_eq!(paths.len(), 20);
        assert_eq!(paths[0], PathBuf::from("/srv/tail-images/1.jpeg"));
        assert_eq!(paths[19], PathBuf::from("/srv/tail-images/20.jpeg"));
    }
}
