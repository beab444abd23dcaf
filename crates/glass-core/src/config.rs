//! Tunable knobs for the glass effects.
//!
//! Two tunings were shipped over the life of the theme and neither is
//! canonical, so both are exposed as presets and every value can be
//! overridden individually from string key/value pairs (the web front end
//! reads them from `data-glass-*` attributes on the document root).

use crate::constants::*;
use crate::error::ConfigError;
use std::str::FromStr;

/// Velocity-to-volume mapping for strikes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrikeTuning {
    /// Gain per px/ms of pointer velocity.
    pub scale_factor: f64,
    pub min_volume: f32,
    pub max_volume: f32,
    /// Fixed gain of the press "tink".
    pub tink_volume: f32,
}

impl Default for StrikeTuning {
    fn default() -> Self {
        TuningPreset::Calibrated.tuning()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TuningPreset {
    Gentle,
    Calibrated,
}

impl TuningPreset {
    pub fn tuning(self) -> StrikeTuning {
        match self {
            TuningPreset::Gentle => StrikeTuning {
                scale_factor: GENTLE_SCALE,
                min_volume: GENTLE_MIN_VOLUME,
                max_volume: GENTLE_MAX_VOLUME,
                tink_volume: TINK_VOLUME,
            },
            TuningPreset::Calibrated => StrikeTuning {
                scale_factor: CALIBRATED_SCALE,
                min_volume: CALIBRATED_MIN_VOLUME,
                max_volume: CALIBRATED_MAX_VOLUME,
                tink_volume: TINK_VOLUME,
            },
        }
    }

    pub fn min_sample_interval_ms(self) -> f64 {
        match self {
            TuningPreset::Gentle => GENTLE_MIN_INTERVAL_MS,
            TuningPreset::Calibrated => CALIBRATED_MIN_INTERVAL_MS,
        }
    }
}

impl FromStr for TuningPreset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gentle" => Ok(TuningPreset::Gentle),
            "calibrated" => Ok(TuningPreset::Calibrated),
            other => Err(ConfigError::UnknownPreset(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GlassConfig {
    pub tuning: StrikeTuning,
    /// Pointer moves closer together than this keep the previous velocity.
    pub min_sample_interval_ms: f64,
    pub firm_source: String,
    pub soft_source: String,
    /// Unlock audio on a press anywhere, not only on a watched surface.
    pub unlock_on_any_press: bool,
    /// Publish pointer coordinates as CSS custom properties.
    pub glint: bool,
    /// Show the on-page velocity readout.
    pub calibration: bool,
}

impl Default for GlassConfig {
    fn default() -> Self {
        Self::from_preset(TuningPreset::Calibrated)
    }
}

// Override keys, also used as the `data-glass-<key>` attribute suffixes.
pub const KEY_TUNING: &str = "tuning";
pub const KEY_SCALE: &str = "scale";
pub const KEY_MIN_VOLUME: &str = "min-volume";
pub const KEY_MAX_VOLUME: &str = "max-volume";
pub const KEY_TINK_VOLUME: &str = "tink-volume";
pub const KEY_MIN_INTERVAL: &str = "min-interval-ms";
pub const KEY_FIRM_SRC: &str = "firm-src";
pub const KEY_SOFT_SRC: &str = "soft-src";
pub const KEY_UNLOCK_ANY: &str = "unlock-any";
pub const KEY_GLINT: &str = "glint";
pub const KEY_CALIBRATION: &str = "calibration";

pub const OVERRIDE_KEYS: [&str; 11] = [
    KEY_TUNING,
    KEY_SCALE,
    KEY_MIN_VOLUME,
    KEY_MAX_VOLUME,
    KEY_TINK_VOLUME,
    KEY_MIN_INTERVAL,
    KEY_FIRM_SRC,
    KEY_SOFT_SRC,
    KEY_UNLOCK_ANY,
    KEY_GLINT,
    KEY_CALIBRATION,
];

impl GlassConfig {
    pub fn from_preset(preset: TuningPreset) -> Self {
        Self {
            tuning: preset.tuning(),
            min_sample_interval_ms: preset.min_sample_interval_ms(),
            firm_source: FIRM_SAMPLE_URL.to_string(),
            soft_source: SOFT_SAMPLE_URL.to_string(),
            unlock_on_any_press: false,
            glint: true,
            calibration: false,
        }
    }

    /// Build a config from string overrides. The preset (if any) is applied
    /// first so individual keys refine it regardless of lookup order.
    pub fn from_overrides<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(KEY_TUNING) {
            Some(name) => Self::from_preset(name.parse()?),
            None => Self::default(),
        };

        if let Some(v) = lookup(KEY_SCALE) {
            config.tuning.scale_factor = parse(KEY_SCALE, &v)?;
        }
        if let Some(v) = lookup(KEY_MIN_VOLUME) {
            config.tuning.min_volume = parse(KEY_MIN_VOLUME, &v)?;
        }
        if let Some(v) = lookup(KEY_MAX_VOLUME) {
            config.tuning.max_volume = parse(KEY_MAX_VOLUME, &v)?;
        }
        if let Some(v) = lookup(KEY_TINK_VOLUME) {
            config.tuning.tink_volume = parse(KEY_TINK_VOLUME, &v)?;
        }
        if let Some(v) = lookup(KEY_MIN_INTERVAL) {
            config.min_sample_interval_ms = parse(KEY_MIN_INTERVAL, &v)?;
        }
        if let Some(v) = lookup(KEY_FIRM_SRC) {
            config.firm_source = v;
        }
        if let Some(v) = lookup(KEY_SOFT_SRC) {
            config.soft_source = v;
        }
        if let Some(v) = lookup(KEY_UNLOCK_ANY) {
            config.unlock_on_any_press = parse_flag(KEY_UNLOCK_ANY, &v)?;
        }
        if let Some(v) = lookup(KEY_GLINT) {
            config.glint = parse_flag(KEY_GLINT, &v)?;
        }
        if let Some(v) = lookup(KEY_CALIBRATION) {
            config.calibration = parse_flag(KEY_CALIBRATION, &v)?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.tuning;
        if !t.scale_factor.is_finite() || t.scale_factor < 0.0 {
            return Err(ConfigError::InvalidScale(t.scale_factor));
        }
        for (name, value) in [
            ("min volume", t.min_volume),
            ("max volume", t.max_volume),
            ("tink volume", t.tink_volume),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::VolumeOutOfRange { name, value });
            }
        }
        if t.min_volume > t.max_volume {
            return Err(ConfigError::InvertedVolumeBounds {
                min: t.min_volume,
                max: t.max_volume,
            });
        }
        if !self.min_sample_interval_ms.is_finite() || self.min_sample_interval_ms < 0.0 {
            return Err(ConfigError::InvalidInterval(self.min_sample_interval_ms));
        }
        Ok(())
    }
}

fn parse<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Unparseable {
        key,
        value: value.to_string(),
    })
}

// An attribute present with an empty value (`data-glass-calibration`) reads as on.
fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(ConfigError::Unparseable {
            key,
            value: value.to_string(),
        }),
    }
}
