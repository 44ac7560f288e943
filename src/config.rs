// =============== Imports ================
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// Player started when none is listening on the socket
    #[serde(default = "default_player")]
    pub player: String,
    /// Search/extraction program (yt-dlp compatible)
    #[serde(default = "default_extractor")]
    pub extractor: String,
    /// Bias searches toward "Auto-generated by YouTube" uploads
    #[serde(default = "default_autogenerated")]
    pub autogenerated: bool,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_player() -> String {
    "mpv".to_string()
}

fn default_extractor() -> String {
    "yt-dlp".to_string()
}

fn default_autogenerated() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            player: default_player(),
            extractor: default_extractor(),
            autogenerated: default_autogenerated(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        log::LevelFilter::from_str(&self.log_level)
            .map_err(|_| anyhow::anyhow!("Invalid log_level in config: {}", self.log_level))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("Could not determine the config directory")?;
    Ok(config_dir.join("canito/config.yaml"))
}

// * Loads the config, falls back to the defaults if anything goes wrong
pub fn load_config() -> Config {
    let path = match config_path() {
        Ok(path) => path,
        Err(e) => {
            log::warn!("{}, using default config", e);
            return Config::default();
        }
    };

    match load_from(&path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Failed to load config from {}: {:#}", path.display(), e);
            eprintln!("Couldn't read config file, using defaults.");
            Config::default()
        }
    }
}

// Creates the file with the defaults if it doesn't exist
pub fn load_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        let config = Config::default();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        let yaml = serde_yaml::to_string(&config).context("Failed to serialize default config")?;
        fs::write(path, yaml)
            .with_context(|| format!("Failed to write default config to {}", path.display()))?;
        log::info!("Created default config at {}", path.display());
        return Ok(config);
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    if contents.trim().is_empty() {
        return Ok(Config::default());
    }
    let config: Config = serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse YAML from config file: {}", path.display()))?;
    Ok(config)
}

// Testing if the config is usable
pub fn test(config: &Config) -> Result<()> {
    if config.player.trim().is_empty() {
        return Err(anyhow::anyhow!("player cannot be empty"));
    }
    if config.extractor.trim().is_empty() {
        return Err(anyhow::anyhow!("extractor cannot be empty"));
    }
    config.level_filter()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(test(&config).is_ok());
        assert_eq!(config.player, "mpv");
        assert_eq!(config.extractor, "yt-dlp");
        assert!(config.autogenerated);
        assert_eq!(config.level_filter().unwrap(), log::LevelFilter::Info);
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("canito/config.yaml");

        let config = load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());
        assert_eq!(load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn partial_yaml_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "player: celluloid\nautogenerated: false\n").unwrap();

        let config = load_from(&path).unwrap();
        assert_eq!(config.player, "celluloid");
        assert!(!config.autogenerated);
        assert_eq!(config.extractor, "yt-dlp");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "autogenerated: [not, a, bool]\n").unwrap();
        assert!(load_from(&path).is_err());
    }

    #[test]
    fn validation_rejects_bad_values() {
        let config = Config {
            player: " ".to_string(),
            ..Config::default()
        };
        assert!(test(&config).is_err());

        let config = Config {
            log_level: "loud".to_string(),
            ..Config::default()
        };
        assert!(test(&config).is_err());
    }
}
