use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_app_title")]
    pub app_title: String,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_ad_chance")]
    pub ad_chance: f64,
    #[serde(default = "default_starting_coins")]
    pub starting_coins: u32,
    #[serde(default = "default_lesson_reward")]
    pub lesson_reward: u32,
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
    #[serde(default = "default_lesson_count")]
    pub lesson_count: u8,
}

fn default_app_title() -> String {
    "TuneQuest".to_string()
}
fn default_theme() -> String {
    "default".to_string()
}
fn default_ad_chance() -> f64 {
    0.75
}
fn default_starting_coins() -> u32 {
    250
}
fn default_lesson_reward() -> u32 {
    15
}
fn default_toast_duration_ms() -> u64 {
    1400
}
fn default_lesson_count() -> u8 {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_title: default_app_title(),
            theme: default_theme(),
            ad_chance: default_ad_chance(),
            starting_coins: default_starting_coins(),
            lesson_reward: default_lesson_reward(),
            toast_duration_ms: default_toast_duration_ms(),
            lesson_count: default_lesson_count(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path)?;
            toml::from_str::<Config>(&content)?
        } else {
            Config::default()
        };
        config.normalize();
        Ok(config)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tunequest")
            .join("config.toml")
    }

    /// Pull out-of-range values back to something the session can run with.
    pub fn normalize(&mut self) {
        if !(0.0..=1.0).contains(&self.ad_chance) {
            let clamped = if self.ad_chance.is_nan() {
                default_ad_chance()
            } else {
                self.ad_chance.clamp(0.0, 1.0)
            };
            tracing::warn!(from = self.ad_chance, to = clamped, "ad_chance out of range");
            self.ad_chance = clamped;
        }
        if !(1..=99).contains(&self.lesson_count) {
            let clamped = self.lesson_count.clamp(1, 99);
            tracing::warn!(from = self.lesson_count, to = clamped, "lesson_count out of range");
            self.lesson_count = clamped;
        }
        if self.app_title.trim().is_empty() {
            self.app_title = default_app_title();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serde_defaults_from_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.app_title, "TuneQuest");
        assert_eq!(config.ad_chance, 0.75);
        assert_eq!(config.starting_coins, 250);
        assert_eq!(config.lesson_reward, 15);
        assert_eq!(config.toast_duration_ms, 1400);
    }

    #[test]
    fn test_config_partial_file() {
        let toml_str = r#"
ad_chance = 0.1
starting_coins = 10
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ad_chance, 0.1);
        assert_eq!(config.starting_coins, 10);
        assert_eq!(config.lesson_reward, 15);
        assert_eq!(config.theme, "default");
    }

    #[test]
    fn test_normalize_clamps_ad_chance() {
        let mut config = Config {
            ad_chance: 1.5,
            ..Config::default()
        };
        config.normalize();
        assert_eq!(config.ad_chance, 1.0);

        config.ad_chance = f64::NAN;
        config.normalize();
        assert_eq!(config.ad_chance, 0.75);
    }

    #[test]
    fn test_normalize_lesson_count_and_title() {
        let mut config = Config {
            lesson_count: 0,
            app_title: "  ".to_string(),
            ..Config::default()
        };
        config.normalize();
        assert_eq!(config.lesson_count, 1);
        assert_eq!(config.app_title, "TuneQuest");
    }

    #[test]
    fn test_load_from_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.lesson_count, 3);
    }

    #[test]
    fn test_load_from_file_normalizes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "ad_chance = -2.0\napp_title = \"StrumLab\"\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.ad_chance, 0.0);
        assert_eq!(config.app_title, "StrumLab");
    }

    #[test]
    fn test_load_from_malformed_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "ad_chance = \"lots\"").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
