use crate::constants::{SCALE_MAX, SCALE_MIN};

/// Which of the two compared values is larger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapDirection {
    ControlAhead,
    AccountabilityAhead,
    Even,
}

/// Horizontal gap arrow between Control and Accountability.
///
/// `left` and `right` are fractions of the container width on the fixed
/// 0-10 scale, independent of any band locking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapArrow {
    pub left: f64,
    pub right: f64,
    pub direction: GapDirection,
}

impl GapArrow {
    /// Build the arrow from already-clamped values.
    pub fn between(control: i32, accountability: i32) -> Self {
        let start = control.min(accountability);
        let end = control.max(accountability);
        let direction = match control.cmp(&accountability) {
            std::cmp::Ordering::Greater => GapDirection::ControlAhead,
            std::cmp::Ordering::Less => GapDirection::AccountabilityAhead,
            std::cmp::Ordering::Equal => GapDirection::Even,
        };
        Self {
            left: scale_fraction(start),
            right: scale_fraction(end),
            direction,
        }
    }

    pub fn width(&self) -> f64 {
        (self.right - self.left).max(0.0)
    }

    /// Arrowheads are hidden when both values coincide
    pub fn heads_visible(&self) -> bool {
        self.left < self.right
    }

    /// Accountability minus Control, in scale steps
    pub fn signed_steps(&self) -> i32 {
        let steps = ((self.right - self.left) * (SCALE_MAX - SCALE_MIN) as f64).round() as i32;
        match self.direction {
            GapDirection::ControlAhead => -steps,
            _ => steps,
        }
    }
}

fn scale_fraction(value: i32) -> f64 {
    (value - SCALE_MIN) as f64 / (SCALE_MAX - SCALE_MIN) as f64
}
