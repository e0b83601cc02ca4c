//! Vertical fader mapping between a 0..=100 level and a handle offset.
//!
//! Offsets are measured from the top of the track, so level 100 sits at
//! offset 0 and level 0 at the bottom of the travel.

use serde::Deserialize;
use serde::Serialize;

use crate::catalog::ThemeKey;
use crate::guides;

pub const LEVEL_MIN: f64 = 0.0;
pub const LEVEL_MAX: f64 = 100.0;
pub const DEFAULT_LEVEL: f64 = 50.0;
/// Levels at or above this read as overused.
pub const OVERUSED_THRESHOLD: f64 = 95.0;

pub fn clamp_level(value: f64) -> f64 {
    if value.is_nan() {
        return DEFAULT_LEVEL;
    }
    value.clamp(LEVEL_MIN, LEVEL_MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaderGeometry {
    pub track_height: f64,
    pub handle_height: f64,
    /// Arrow-key increment.
    pub step: f64,
}

impl Default for FaderGeometry {
    fn default() -> Self {
        Self {
            track_height: 320.0,
            handle_height: 88.0,
            step: 2.0,
        }
    }
}

impl FaderGeometry {
    /// Distance the handle can travel.
    pub fn range(&self) -> f64 {
        (self.track_height - self.handle_height).max(0.0)
    }

    pub fn value_to_position(&self, value: f64) -> f64 {
        let range = self.range();
        range - (clamp_level(value) / LEVEL_MAX) * range
    }

    pub fn position_to_value(&self, position: f64) -> f64 {
        let range = self.range();
        if range <= 0.0 {
            return DEFAULT_LEVEL;
        }
        clamp_level(LEVEL_MAX - (position / range) * LEVEL_MAX)
    }

    /// Level for a pointer at absolute `pointer_y` over a track whose top
    /// edge is at `track_top`. The pointer grabs the handle by its centre.
    pub fn pointer_to_value(&self, pointer_y: f64, track_top: f64) -> f64 {
        let y = (pointer_y - track_top - self.handle_height / 2.0).clamp(0.0, self.range());
        self.position_to_value(y)
    }

    pub fn apply_key(&self, value: f64, key: FaderKey) -> f64 {
        match key {
            FaderKey::Up => clamp_level(value + self.step),
            FaderKey::Down => clamp_level(value - self.step),
            FaderKey::Home => LEVEL_MIN,
            FaderKey::End => LEVEL_MAX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaderKey {
    Up,
    Down,
    Home,
    End,
}

/// Fader currently following the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaderDrag {
    pub key: ThemeKey,
    pub track_top: f64,
}

pub fn is_overused(value: f64) -> bool {
    value >= OVERUSED_THRESHOLD
}

/// Warning shown under an overused fader: the theme's basement text, or a
/// generic line when none is recorded.
pub fn overused_warning(key: ThemeKey) -> &'static str {
    guides::blind_spot(key)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn round_trip_is_exact_on_quarter_marks() {
        let fader = FaderGeometry::default();
        for value in [0.0, 25.0, 50.0, 75.0, 100.0] {
            let back = fader.position_to_value(fader.value_to_position(value));
            assert!((back - value).abs() < 0.001, "{value} -> {back}");
        }
    }

    #[test]
    fn positions_match_track_geometry() {
        let fader = FaderGeometry::default();
        assert_eq!(fader.range(), 232.0);
        assert_eq!(fader.value_to_position(100.0), 0.0);
        assert_eq!(fader.value_to_position(0.0), 232.0);
        assert_eq!(fader.value_to_position(50.0), 116.0);
    }

    #[test]
    fn out_of_track_positions_clamp() {
        let fader = FaderGeometry::default();
        assert_eq!(fader.position_to_value(-40.0), 100.0);
        assert_eq!(fader.position_to_value(999.0), 0.0);
    }

    #[test]
    fn pointer_grabs_handle_centre() {
        let fader = FaderGeometry::default();
        assert_eq!(fader.pointer_to_value(100.0 + 44.0, 100.0), 100.0);
        assert_eq!(fader.pointer_to_value(100.0 + 44.0 + 116.0, 100.0), 50.0);
        assert_eq!(fader.pointer_to_value(10.0, 100.0), 100.0);
        assert_eq!(fader.pointer_to_value(2_000.0, 100.0), 0.0);
    }

    #[test]
    fn keyboard_steps_and_clamps() {
        let fader = FaderGeometry::default();
        assert_eq!(fader.apply_key(50.0, FaderKey::Up), 52.0);
        assert_eq!(fader.apply_key(50.0, FaderKey::Down), 48.0);
        assert_eq!(fader.apply_key(99.0, FaderKey::Up), 100.0);
        assert_eq!(fader.apply_key(1.0, FaderKey::Down), 0.0);
        assert_eq!(fader.apply_key(37.0, FaderKey::Home), 0.0);
        assert_eq!(fader.apply_key(37.0, FaderKey::End), 100.0);
    }

    #[test]
    fn overused_threshold() {
        assert!(!is_overused(94.9));
        assert!(is_overused(95.0));
        assert!(!overused_warning(ThemeKey::Achiever).is_empty());
    }

    #[test]
    fn nan_levels_fall_back_to_default() {
        assert_eq!(clamp_level(f64::NAN), DEFAULT_LEVEL);
        assert_eq!(clamp_level(120.0), 100.0);
    }
}
