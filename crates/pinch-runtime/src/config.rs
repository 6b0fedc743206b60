//! Engine configuration
//!
//! Defaults are tuned for a 640x480 capture. Values can come from code,
//! from a JSON document, or from `PINCH_*` environment variables layered over
//! the defaults.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use pinch_core::PinchError;
use pinch_gesture::{GestureConfig, PinchRange};
use pinch_hand::DepthGate;

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid value for {var}: {value:?}")]
    Env { var: &'static str, value: String },

    #[error(transparent)]
    Invalid(#[from] PinchError),
}

/// Gesture engine configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Cursor machine thresholds and pinch landmarks
    pub gesture: GestureConfig,
    /// Area band for the depth gate
    pub depth: DepthGate,
    /// When false every hand is admitted
    pub depth_gate_enabled: bool,
    /// Hands considered per frame, in provider order
    pub max_hands: usize,
    /// Distance range mapped onto the 0..=100 pinch level
    pub pinch_range: PinchRange,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            gesture: GestureConfig::default(),
            depth: DepthGate::default(),
            depth_gate_enabled: true,
            max_hands: 2,
            pinch_range: PinchRange::default(),
        }
    }
}

impl EngineConfig {
    /// Reference configuration (8 000..40 000 px² band)
    pub fn reference() -> Self {
        Self::default()
    }

    /// Narrower depth band (10 000..40 000 px²)
    pub fn strict_band() -> Self {
        EngineConfig {
            depth: DepthGate::strict(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), PinchError> {
        self.gesture.validate()?;
        self.depth.validate()?;
        self.pinch_range.validate()?;
        if self.max_hands == 0 {
            return Err(PinchError::InvalidConfig(
                "max_hands must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON document. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Defaults overridden by `PINCH_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Defaults overridden through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = parse_var(&lookup, "PINCH_ENTER_THRESHOLD")? {
            config.gesture.enter_threshold = v;
        }
        if let Some(v) = parse_var(&lookup, "PINCH_SWIPE_THRESHOLD")? {
            config.gesture.swipe_threshold = v;
        }
        if let Some(v) = parse_var(&lookup, "PINCH_ZONE_MAX_Y")? {
            config.gesture.zone_max_y = v;
        }
        if let Some(v) = parse_var(&lookup, "PINCH_MIN_AREA")? {
            config.depth.min_area = v;
        }
        if let Some(v) = parse_var(&lookup, "PINCH_MAX_AREA")? {
            config.depth.max_area = v;
        }
        if let Some(v) = parse_var(&lookup, "PINCH_DEPTH_GATE")? {
            config.depth_gate_enabled = v;
        }
        if let Some(v) = parse_var(&lookup, "PINCH_MAX_HANDS")? {
            config.max_hands = v;
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Env { var, value: raw }),
    }
}
