//! User configuration management

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub list: ListConfig,

    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConfig {
    /// Default list file, resolved against the working directory.
    #[serde(default = "default_list_path")]
    pub path: String,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            path: default_list_path(),
        }
    }
}

fn default_list_path() -> String {
    "list.txt".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub name: String,
}

fn config_path() -> Result<PathBuf> {
    let dir = dirs::config_dir().ok_or_else(|| anyhow!("Could not determine config directory"))?;
    Ok(dir.join("punchlist").join("config.toml"))
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = config_path()?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn set_temp_config_home() -> tempfile::TempDir {
        let temp = tempdir().unwrap();
        std::env::set_var("XDG_CONFIG_HOME", temp.path());
        temp
    }

    #[test]
    #[serial]
    fn test_load_without_file_returns_defaults() {
        let _temp = set_temp_config_home();

        let config = Config::load().unwrap();
        assert_eq!(config.list.path, "list.txt");
        assert_eq!(config.theme.name, "");
    }

    #[test]
    #[serial]
    fn test_load_reads_both_sections() {
        let temp = set_temp_config_home();

        let dir = temp.path().join("punchlist");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("config.toml"),
            "[list]\npath = \"todo/list.txt\"\n\n[theme]\nname = \"paper\"\n",
        )
        .unwrap();

        let loaded = Config::load().unwrap();
        assert_eq!(loaded.list.path, "todo/list.txt");
        assert_eq!(loaded.theme.name, "paper");
    }

    #[test]
    #[serial]
    fn test_partial_file_uses_field_defaults() {
        let temp = set_temp_config_home();

        let dir = temp.path().join("punchlist");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), "[theme]\nname = \"paper\"\n").unwrap();

        let config = Config::load().unwrap();
        assert_eq!(config.list.path, "list.txt");
        assert_eq!(config.theme.name, "paper");
    }
}
