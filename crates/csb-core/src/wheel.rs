//! Radial layout for the dominant-themes wheel.
//!
//! A ranked list of slots is laid out as a ring of equal donut wedges. Angles
//! are in degrees, measured clockwise from 12 o'clock; coordinates use a
//! y-down screen convention. Every function here is pure, so the same slots
//! and geometry always produce the same output, down to the formatted path
//! strings.

use std::fmt::Write as _;

use serde::Deserialize;
use serde::Serialize;

use crate::catalog::ThemeKey;

/// Labels longer than this (in characters) are considered for wrapping.
pub const LABEL_WRAP_CHARS: usize = 14;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Fixed dimensions of a wheel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelGeometry {
    /// Width and height of the square canvas.
    pub size: f64,
    pub r_outer: f64,
    pub r_inner: f64,
    pub slots: usize,
}

impl Default for WheelGeometry {
    fn default() -> Self {
        Self {
            size: 420.0,
            r_outer: 190.0,
            r_inner: 120.0,
            slots: 10,
        }
    }
}

impl WheelGeometry {
    pub fn center(&self) -> Point {
        Point::new(self.size / 2.0, self.size / 2.0)
    }

    pub fn segment_angle(&self) -> f64 {
        360.0 / self.slots.max(1) as f64
    }

    /// Angular span `[start, end)` of slot `index`.
    pub fn slot_angles(&self, index: usize) -> (f64, f64) {
        let span = self.segment_angle();
        let start = index as f64 * span;
        (start, start + span)
    }

    pub fn label_radius(&self) -> f64 {
        (self.r_outer + self.r_inner) / 2.0
    }

    /// Radius of the disc drawn over the ring's hole.
    pub fn hub_radius(&self) -> f64 {
        (self.r_inner - 18.0).max(0.0)
    }
}

/// Converts polar coordinates to screen coordinates, 0° up, clockwise.
pub fn polar_to_cartesian(center: Point, radius: f64, angle_deg: f64) -> Point {
    let rad = (angle_deg - 90.0).to_radians();
    Point::new(center.x + radius * rad.cos(), center.y + radius * rad.sin())
}

/// Boundary of one donut wedge.
///
/// The contour runs outer arc (from the end angle back to the start angle),
/// radial line inwards, inner arc (start back to end), then closes with the
/// radial line at the end angle. Two wedges that share an angle therefore
/// share the exact same edge points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WedgeContour {
    pub r_outer: f64,
    pub r_inner: f64,
    /// Outer point at the end angle, where the path starts.
    pub start_outer: Point,
    /// Outer point at the start angle.
    pub end_outer: Point,
    /// Inner point at the start angle.
    pub start_inner: Point,
    /// Inner point at the end angle.
    pub end_inner: Point,
    /// Set when the wedge spans more than half a turn.
    pub large_arc: bool,
}

impl WedgeContour {
    /// SVG path data with fixed three-decimal coordinates.
    pub fn to_svg_path(&self) -> String {
        let flag = u8::from(self.large_arc);
        let mut out = String::new();
        let _ = write!(
            out,
            "M {} {} A {} {} 0 {flag} 0 {} {} L {} {} A {} {} 0 {flag} 1 {} {} Z",
            fmt_coord(self.start_outer.x),
            fmt_coord(self.start_outer.y),
            fmt_coord(self.r_outer),
            fmt_coord(self.r_outer),
            fmt_coord(self.end_outer.x),
            fmt_coord(self.end_outer.y),
            fmt_coord(self.start_inner.x),
            fmt_coord(self.start_inner.y),
            fmt_coord(self.r_inner),
            fmt_coord(self.r_inner),
            fmt_coord(self.end_inner.x),
            fmt_coord(self.end_inner.y),
        );
        out
    }
}

pub fn wedge_contour(
    center: Point,
    r_outer: f64,
    r_inner: f64,
    start_angle: f64,
    end_angle: f64,
) -> WedgeContour {
    WedgeContour {
        r_outer,
        r_inner,
        start_outer: polar_to_cartesian(center, r_outer, end_angle),
        end_outer: polar_to_cartesian(center, r_outer, start_angle),
        start_inner: polar_to_cartesian(center, r_inner, start_angle),
        end_inner: polar_to_cartesian(center, r_inner, end_angle),
        large_arc: end_angle - start_angle > 180.0,
    }
}

/// Point at the angular middle of a wedge, used to anchor its label.
pub fn wedge_midpoint(center: Point, radius: f64, start_angle: f64, end_angle: f64) -> Point {
    polar_to_cartesian(center, radius, (start_angle + end_angle) / 2.0)
}

/// Splits a label into at most two lines.
///
/// Short labels and single words stay whole; two words go one per line;
/// longer phrases split at the word-count midpoint, first line rounded up.
pub fn wrap_label(text: &str) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if text.chars().count() <= LABEL_WRAP_CHARS || words.len() <= 1 {
        return vec![text.to_string()];
    }
    if words.len() == 2 {
        return vec![words[0].to_string(), words[1].to_string()];
    }
    let split = words.len().div_ceil(2);
    vec![words[..split].join(" "), words[split..].join(" ")]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WedgeLayout {
    pub slot: usize,
    pub key: ThemeKey,
    pub start_deg: f64,
    pub end_deg: f64,
    pub contour: WedgeContour,
    pub label_anchor: Point,
    pub label_lines: Vec<String>,
    /// `#1` for the first slot.
    pub rank_label: String,
}

/// Lays out every occupied slot. Empty slots produce no wedge.
pub fn layout(geometry: &WheelGeometry, slots: &[Option<ThemeKey>]) -> Vec<WedgeLayout> {
    let center = geometry.center();
    slots
        .iter()
        .take(geometry.slots)
        .enumerate()
        .filter_map(|(slot, key)| key.map(|key| (slot, key)))
        .map(|(slot, key)| {
            let (start_deg, end_deg) = geometry.slot_angles(slot);
            WedgeLayout {
                slot,
                key,
                start_deg,
                end_deg,
                contour: wedge_contour(
                    center,
                    geometry.r_outer,
                    geometry.r_inner,
                    start_deg,
                    end_deg,
                ),
                label_anchor: wedge_midpoint(
                    center,
                    geometry.label_radius(),
                    start_deg,
                    end_deg,
                ),
                label_lines: wrap_label(&key.trademarked_name()),
                rank_label: format!("#{}", slot + 1),
            }
        })
        .collect()
}

/// Inverse of [`polar_to_cartesian`]: clockwise degrees from 12 o'clock in `[0, 360)`.
pub fn angle_of(center: Point, point: Point) -> f64 {
    let deg = (point.y - center.y).atan2(point.x - center.x).to_degrees() + 90.0;
    deg.rem_euclid(360.0)
}

/// Slot under `point` anywhere on the ring, occupied or not.
pub fn ring_slot_at(geometry: &WheelGeometry, point: Point) -> Option<usize> {
    let center = geometry.center();
    let distance = (point.x - center.x).hypot(point.y - center.y);
    if distance < geometry.r_inner || distance > geometry.r_outer {
        return None;
    }
    let index = (angle_of(center, point) / geometry.segment_angle()).floor() as usize;
    Some(index.min(geometry.slots.saturating_sub(1)))
}

/// Occupied slot under `point`, if the point falls inside the ring.
pub fn slot_at(
    geometry: &WheelGeometry,
    slots: &[Option<ThemeKey>],
    point: Point,
) -> Option<usize> {
    let index = ring_slot_at(geometry, point)?;
    slots.get(index).copied().flatten().map(|_| index)
}

fn fmt_coord(value: f64) -> String {
    let formatted = format!("{value:.3}");
    if formatted == "-0.000" {
        "0.000".to_string()
    } else {
        formatted
    }
}
