use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{dsp::compressor::CompressorParams, fx::scheduler::DEFAULT_CAPACITY, synth::BusSettings};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioConfig {
    #[serde(default = "AudioConfig::default_enabled")]
    pub enabled: bool,
    #[serde(default = "AudioConfig::default_master_gain")]
    pub master_gain: f32,
    #[serde(default = "AudioConfig::default_max_voices")]
    pub max_voices: usize,
    #[serde(default)]
    pub compressor: CompressorParams,
}

impl AudioConfig {
    fn default_enabled() -> bool {
        true
    }
    fn default_master_gain() -> f32 {
        BusSettings::default().master_gain
    }
    fn default_max_voices() -> usize {
        BusSettings::default().max_voices
    }

    /// Master bus settings for the voice pool.
    pub fn bus(&self) -> BusSettings {
        BusSettings {
            master_gain: self.master_gain.clamp(0.0, 1.0),
            max_voices: self.max_voices.max(1),
            compressor: self.compressor,
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
            master_gain: Self::default_master_gain(),
            max_voices: Self::default_max_voices(),
            compressor: CompressorParams::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualConfig {
    #[serde(default)]
    pub reduced_motion: bool,
    #[serde(default = "VisualConfig::default_effect_capacity")]
    pub effect_capacity: usize,
    #[serde(default = "VisualConfig::default_viewport_width")]
    pub viewport_width: f32,
    #[serde(default = "VisualConfig::default_viewport_height")]
    pub viewport_height: f32,
    #[serde(default = "VisualConfig::default_frame_interval_ms")]
    pub frame_interval_ms: u64,
}

impl VisualConfig {
    fn default_effect_capacity() -> usize {
        DEFAULT_CAPACITY
    }
    fn default_viewport_width() -> f32 {
        960.0
    }
    fn default_viewport_height() -> f32 {
        600.0
    }
    fn default_frame_interval_ms() -> u64 {
        16
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            effect_capacity: Self::default_effect_capacity(),
            viewport_width: Self::default_viewport_width(),
            viewport_height: Self::default_viewport_height(),
            frame_interval_ms: Self::default_frame_interval_ms(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub audio: AudioConfig,
    #[serde(default)]
    pub visual: VisualConfig,
}

impl Config {
    /// Read `path`, falling back to defaults when it is missing or invalid.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(cfg) => {
                    log::info!("Loaded config from {}", path.display());
                    cfg
                }
                Err(err) => {
                    log::warn!("Failed to parse config {}: {}. Using defaults.", path.display(), err);
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("Failed to read config {}: {}. Using defaults.", path.display(), err);
                Self::default()
            }
        }
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
