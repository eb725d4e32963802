use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::controller::visibility::IdleDurations;

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "pitchdeck";

pub const VALID_KEYS: &str = "defaults.theme, defaults.render, defaults.start_mode, idle.initial_ms, idle.activity_ms, idle.state_change_ms";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idle: Option<IdleConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_mode: Option<String>,
}

/// Overlay auto-hide delays in milliseconds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdleConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_change_ms: Option<u64>,
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
                anyhow::anyhow!("No config found. Run `pitchdeck config show` to see defaults.")
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
                tracing::debug!("using default config: {e}");
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
        let contents = format!("# pitchdeck configuration\n{yaml}");
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.theme" => {
                match value {
                    "light" | "dark" => {}
                    _ => anyhow::bail!("Invalid theme: {value}. Must be 'light' or 'dark'."),
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .theme = Some(value.to_string());
            }
            "defaults.render" => {
                match value {
                    "all" | "active" => {}
                    _ => anyhow::bail!("Invalid render policy: {value}. Must be 'all' or 'active'."),
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .render = Some(value.to_string());
            }
            "defaults.start_mode" => {
                if value != "first"
                    && value != "last"
                    && !value.parse::<usize>().is_ok_and(|n| n >= 1)
                {
                    anyhow::bail!(
                        "Invalid start_mode: {value}. Must be 'first', 'last', or a slide number."
                    );
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .start_mode = Some(value.to_string());
            }
            "idle.initial_ms" | "idle.activity_ms" | "idle.state_change_ms" => {
                let ms = match value.parse::<u64>() {
                    Ok(ms) if ms > 0 => ms,
                    _ => anyhow::bail!(
                        "Invalid duration: {value}. Must be a positive number of milliseconds."
                    ),
                };
                let idle = self.idle.get_or_insert_with(IdleConfig::default);
                match key {
                    "idle.initial_ms" => idle.initial_ms = Some(ms),
                    "idle.activity_ms" => idle.activity_ms = Some(ms),
                    _ => idle.state_change_ms = Some(ms),
                }
            }
            _ => anyhow::bail!("Unknown config key: {key}. Valid keys: {VALID_KEYS}"),
        }
        Ok(())
    }

    pub fn idle_durations(&self) -> IdleDurations {
        let defaults = IdleDurations::default();
        let Some(idle) = &self.idle else {
            return defaults;
        };
        let pick = |ms: Option<u64>, fallback: Duration| ms.map(Duration::from_millis).unwrap_or(fallback);
        IdleDurations {
            initial: pick(idle.initial_ms, defaults.initial),
            activity: pick(idle.activity_ms, defaults.activity),
            state_change: pick(idle.state_change_ms, defaults.state_change),
        }
    }

    pub fn theme(&self) -> Option<&str> {
        self.defaults.as_ref().and_then(|d| d.theme.as_deref())
    }

    pub fn render(&self) -> Option<&str> {
        self.defaults.as_ref().and_then(|d| d.render.as_deref())
    }

    pub fn start_mode(&self) -> Option<&str> {
        self.defaults.as_ref().and_then(|d| d.start_mode.as_deref())
    }
}
