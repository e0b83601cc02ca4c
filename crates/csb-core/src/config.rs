use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::fader::FaderGeometry;
use crate::wheel::WheelGeometry;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub wheel: WheelGeometry,
    pub fader: FaderGeometry,
    pub soundboard: SoundboardConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SoundboardConfig {
    pub capacity: usize,
}

impl Default for SoundboardConfig {
    fn default() -> Self {
        Self { capacity: 5 }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for persisted state. Falls back to the platform data dir.
    pub dir: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("wheel.slots must be at least 1")]
    NoSlots,
    #[error("wheel radii must satisfy 0 <= r_inner < r_outer <= size/2 (got inner {r_inner}, outer {r_outer}, size {size})")]
    WheelRadii { r_inner: f64, r_outer: f64, size: f64 },
    #[error("fader.handle_height ({handle}) must be below fader.track_height ({track})")]
    FaderTravel { handle: f64, track: f64 },
    #[error("fader.step must be positive")]
    FaderStep,
    #[error("soundboard.capacity must be between 1 and {max}")]
    Capacity { max: usize },
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let wheel = &self.wheel;
        if wheel.slots == 0 {
            return Err(ConfigError::NoSlots);
        }
        if !(wheel.r_inner >= 0.0 && wheel.r_inner < wheel.r_outer && wheel.r_outer <= wheel.size / 2.0)
        {
            return Err(ConfigError::WheelRadii {
                r_inner: wheel.r_inner,
                r_outer: wheel.r_outer,
                size: wheel.size,
            });
        }
        if !(self.fader.handle_height >= 0.0 && self.fader.handle_height < self.fader.track_height)
        {
            return Err(ConfigError::FaderTravel {
                handle: self.fader.handle_height,
                track: self.fader.track_height,
            });
        }
        if !(self.fader.step > 0.0) {
            return Err(ConfigError::FaderStep);
        }
        let max = crate::catalog::THEME_COUNT;
        if self.soundboard.capacity == 0 || self.soundboard.capacity > max {
            return Err(ConfigError::Capacity { max });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_match_reference_dimensions() {
        let config = Config::default();
        assert_eq!(config.wheel.size, 420.0);
        assert_eq!(config.wheel.r_outer, 190.0);
        assert_eq!(config.wheel.r_inner, 120.0);
        assert_eq!(config.wheel.slots, 10);
        assert_eq!(config.fader.track_height, 320.0);
        assert_eq!(config.fader.handle_height, 88.0);
        assert_eq!(config.fader.step, 2.0);
        assert_eq!(config.soundboard.capacity, 5);
        assert_eq!(config.storage.dir, None);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"wheel":{"slots":8},"soundboard":{}}"#).expect("parse");
        assert_eq!(config.wheel.slots, 8);
        assert_eq!(config.wheel.r_outer, 190.0);
        assert_eq!(config.soundboard.capacity, 5);
    }

    #[test]
    fn validation_rejects_inverted_radii_and_zero_capacity() {
        let mut config = Config::default();
        config.wheel.r_inner = 200.0;
        assert!(matches!(config.validate(), Err(ConfigError::WheelRadii { .. })));

        let mut config = Config::default();
        config.soundboard.capacity = 0;
        assert_eq!(config.validate(), Err(ConfigError::Capacity { max: 34 }));

        let mut config = Config::default();
        config.fader.handle_height = 400.0;
        assert!(matches!(config.validate(), Err(ConfigError::FaderTravel { .. })));
    }
}
