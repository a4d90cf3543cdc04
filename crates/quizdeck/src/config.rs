use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::audio::AudioPolicy;
use crate::state::{JumpPolicy, StartMode};

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "quizdeck";

pub const VALID_KEYS: &str = "defaults.theme, defaults.audio_policy, defaults.invalid_jump_alarm, defaults.alarm_cue, defaults.start_mode";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_policy: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid_jump_alarm: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alarm_cue: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_mode: Option<String>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `quizdeck config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                log::debug!("Using default config: {e}");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# quizdeck configuration\n{yaml}");
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let defaults = self.defaults.get_or_insert_with(DefaultsConfig::default);
        match key {
            "defaults.theme" => {
                match value {
                    "light" | "dark" => {}
                    _ => anyhow::bail!("Invalid theme: {value}. Must be 'light' or 'dark'."),
                }
                defaults.theme = Some(value.to_string());
            }
            "defaults.audio_policy" => {
                if AudioPolicy::from_name(value).is_none() {
                    anyhow::bail!("Invalid audio_policy: {value}. Must be 'overlap' or 'restart'.");
                }
                defaults.audio_policy = Some(value.to_string());
            }
            "defaults.invalid_jump_alarm" => {
                let flag = value.parse::<bool>().map_err(|_| {
                    anyhow::anyhow!(
                        "Invalid invalid_jump_alarm: {value}. Must be 'true' or 'false'."
                    )
                })?;
                defaults.invalid_jump_alarm = Some(flag);
            }
            "defaults.alarm_cue" => {
                if value.trim().is_empty() {
                    anyhow::bail!("alarm_cue must not be empty.");
                }
                defaults.alarm_cue = Some(value.to_string());
            }
            "defaults.start_mode" => {
                if StartMode::from_name(value).is_none() {
                    anyhow::bail!("Invalid start_mode: {value}. Must be 'splash' or 'first'.");
                }
                defaults.start_mode = Some(value.to_string());
            }
            _ => anyhow::bail!("Unknown config key: {key}. Valid keys: {VALID_KEYS}"),
        }
        Ok(())
    }

    fn defaults(&self) -> DefaultsConfig {
        self.defaults.clone().unwrap_or_default()
    }

    pub fn theme_name(&self) -> String {
        self.defaults().theme.unwrap_or_else(|| "light".to_string())
    }

    pub fn audio_policy(&self) -> AudioPolicy {
        self.defaults()
            .audio_policy
            .as_deref()
            .and_then(AudioPolicy::from_name)
            .unwrap_or_default()
    }

    pub fn start_mode(&self) -> StartMode {
        self.defaults()
            .start_mode
            .as_deref()
            .and_then(StartMode::from_name)
            .unwrap_or_default()
    }

    pub fn jump_policy(&self) -> JumpPolicy {
        let defaults = self.defaults();
        let fallback = JumpPolicy::default();
        JumpPolicy {
            alarm_cue: defaults.alarm_cue.unwrap_or(fallback.alarm_cue),
            alarm_on_invalid: defaults
                .invalid_jump_alarm
                .unwrap_or(fallback.alarm_on_invalid),
        }
    }
}
