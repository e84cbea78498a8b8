use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

/// Optional overrides for the built-in link and logging defaults
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) port: Option<String>,
    #[serde(default)]
    pub(crate) baud: Option<u32>,
    #[serde(default)]
    pub(crate) timeout_ms: Option<u64>,
    #[serde(default)]
    pub(crate) interval_ms: Option<u64>,
    #[serde(default)]
    pub(crate) output_dir: Option<PathBuf>,
    #[serde(default)]
    pub(crate) prefix: Option<String>,
    #[serde(default)]
    pub(crate) plot: Option<PathBuf>,
    #[serde(default)]
    pub(crate) no_plot: bool,
}

impl Config {
    pub(crate) fn load() -> Self {
        // Try config locations in order of priority
        for path in Self::get_config_paths() {
            if let Some(config) = Self::load_from(&path) {
                return config;
            }
        }

        Self::default()
    }

    /// Read one candidate file; missing or unparseable files yield `None`
    pub(crate) fn load_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                return None;
            }
        };
        match toml::from_str::<Config>(&content) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                Some(config)
            }
            Err(e) => {
                warn!("Failed to parse {}: {}", path.display(), e);
                None
            }
        }
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/scalelog/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("scalelog").join("config.toml"));
        }

        // 2. Platform config dir (Application Support on macOS, AppData on Windows)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("scalelog").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.scalelog.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".scalelog.toml"));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paths() {
        let paths = Config::get_config_paths();
        assert!(paths.iter().all(|p| p.to_string_lossy().contains("scalelog")));
    }

    #[test]
    fn parses_all_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
port = "COM3"
baud = 4800
timeout_ms = 500
interval_ms = 250
output_dir = "logs"
prefix = "bench_"
plot = "weights.svg"
no_plot = true
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.port.as_deref(), Some("COM3"));
        assert_eq!(config.baud, Some(4800));
        assert_eq!(config.timeout_ms, Some(500));
        assert_eq!(config.interval_ms, Some(250));
        assert_eq!(config.output_dir, Some(PathBuf::from("logs")));
        assert_eq!(config.prefix.as_deref(), Some("bench_"));
        assert_eq!(config.plot, Some(PathBuf::from("weights.svg")));
        assert!(config.no_plot);
    }

    #[test]
    fn missing_keys_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "baud = 2400\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.baud, Some(2400));
        assert!(config.port.is_none());
        assert!(!config.no_plot);
    }

    #[test]
    fn invalid_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "baud = \"fast\"\n").unwrap();
        assert!(Config::load_from(&path).is_none());
    }

    #[test]
    fn missing_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from(&dir.path().join("nope.toml")).is_none());
    }
}
