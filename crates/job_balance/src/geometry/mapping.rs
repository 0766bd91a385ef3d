use super::types::{Point, TrackGeometry};

/// Fraction of the way `value` sits between `min` and `max`.
///
/// Requires `max > min`; ranges are validated before they reach here.
#[inline]
pub fn normalized_position(value: f64, min: f64, max: f64) -> f64 {
    (value - min) / (max - min)
}

/// Thumb center of a slider showing `value` over `[min, max]` on `track`.
pub fn thumb_center(value: i32, (min, max): (i32, i32), track: &TrackGeometry) -> Point {
    let t = normalized_position(value as f64, min as f64, max as f64);
    Point {
        x: track.left + t * track.width,
        y: track.center_y(),
    }
}
