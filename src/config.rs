use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Portfolio data file (YAML or JSON). Bundled sample when unset.
    #[serde(default)]
    pub data_path: Option<PathBuf>,
    #[serde(default)]
    pub vim_mode: bool,
    #[serde(default = "default_image_preview_enabled")]
    pub image_preview_enabled: bool,
    #[serde(default = "default_image_protocol")]
    pub image_protocol: String,
    #[serde(default)]
    pub open_command: Option<String>,
    #[serde(default)]
    pub clipboard_command: Option<String>,
    /// Geometry units per row; overrides the font height reported by the terminal
    #[serde(default)]
    pub cell_height_px: Option<u16>,
}

fn default_image_preview_enabled() -> bool {
    true
}

fn default_image_protocol() -> String {
    "auto".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: None,
            vim_mode: false,
            image_preview_enabled: default_image_preview_enabled(),
            image_protocol: default_image_protocol(),
            open_command: None,
            clipboard_command: None,
            cell_height_px: None,
        }
    }
}

impl Config {
    /// Read and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}

/// Determine the config file path with fallback logic
///
/// An explicit `--config` path must exist. Otherwise the platform config
/// directory and then `./config.yaml` are tried; `None` means run on defaults.
pub fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, use it
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        } else {
            anyhow::bail!("Config file not found at specified path: {}", path);
        }
    }

    // Try ~/.config/folio/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("folio").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_from_empty_mapping() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert!(config.data_path.is_none());
        assert!(!config.vim_mode);
        assert!(config.image_preview_enabled);
        assert_eq!(config.image_protocol, "auto");
        assert!(config.cell_height_px.is_none());
    }

    #[test]
    fn test_default_matches_empty_file() {
        let from_yaml: Config = serde_yaml::from_str("{}").unwrap();
        let default = Config::default();
        assert_eq!(from_yaml.image_preview_enabled, default.image_preview_enabled);
        assert_eq!(from_yaml.image_protocol, default.image_protocol);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "data_path: /srv/me.yaml\nvim_mode: true\nimage_protocol: kitty\nopen_command: xdg-open\ncell_height_px: 20"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.data_path, Some(PathBuf::from("/srv/me.yaml")));
        assert!(config.vim_mode);
        assert_eq!(config.image_protocol, "kitty");
        assert_eq!(config.open_command.as_deref(), Some("xdg-open"));
        assert_eq!(config.cell_height_px, Some(20));
    }

    #[test]
    fn test_load_invalid_yaml_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "vim_mode: [unterminated").unwrap();
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        let result = get_config_path(Some(missing.display().to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_explicit_existing_path_used() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let found = get_config_path(Some(file.path().display().to_string())).unwrap();
        assert_eq!(found, Some(file.path().to_path_buf()));
    }
}
