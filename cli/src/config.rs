use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use minefield_core::{GameSettings, SettingsPreset, find_preset};
use serde::{Deserialize, Serialize};

/// Contents of a settings file: the settings a new game starts with and the
/// presets offered to the player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub settings: GameSettings,
    pub presets: Vec<SettingsPreset>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings: GameSettings::default(),
            presets: SettingsPreset::builtin(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => bail!(
                "unsupported settings file {}, expected a .toml or .json extension",
                path.display()
            ),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let format = Format::from_path(path)?;
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = Self::parse(&text, format)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        log::debug!(
            "loaded {} with {} presets",
            path.display(),
            config.presets.len()
        );
        Ok(config)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                log::debug!("no settings file given, using built-in defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn parse(text: &str, format: Format) -> Result<Self> {
        Ok(match format {
            Format::Toml => toml::from_str(text)?,
            Format::Json => serde_json::from_str(text)?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.settings.validate().context("invalid settings")?;
        for (index, preset) in self.presets.iter().enumerate() {
            preset
                .validate()
                .with_context(|| format!("invalid preset #{} ({:?})", index + 1, preset.display))?;
        }
        Ok(())
    }

    /// Settings for a new game, taken from the named preset when one is given.
    pub fn resolve(&self, preset: Option<&str>, closed_start: bool) -> Result<GameSettings> {
        let first_reveal_open = self.settings.first_reveal_open && !closed_start;

        let settings = match preset {
            Some(name) => {
                let Some(preset) = find_preset(&self.presets, name) else {
                    let known: Vec<_> = self.presets.iter().map(|p| p.display.as_str()).collect();
                    bail!("no preset named {name:?}, available: {}", known.join(", "));
                };
                log::debug!("using preset {:?}", preset.display);
                preset.settings(first_reveal_open)
            }
            None => GameSettings {
                first_reveal_open,
                ..self.settings
            },
        };

        settings.validate()?;
        Ok(settings)
    }
}
