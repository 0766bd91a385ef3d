use log::debug;

use crate::constants::{BALANCED_TEXT, IMBALANCED_TEXT};
use crate::dimension::{Dimension, PerDimension};
use crate::gap::GapArrow;
use crate::geometry::{Point, Segment, TrackGeometry, segments_intersect, thumb_center};

/// Plain-data view of the four dimensions at one moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    /// Band-clamped values
    pub values: PerDimension<i32>,
    /// Slider `[min, max]` used for positioning
    pub effective_ranges: PerDimension<(i32, i32)>,
    pub tracks: PerDimension<TrackGeometry>,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub values: PerDimension<i32>,
    pub points: PerDimension<Point>,
    pub control_support: Segment,
    pub accountability_influence: Segment,
    pub balanced: bool,
    pub gap: GapArrow,
}

impl Evaluation {
    pub fn status_text(&self) -> &'static str {
        if self.balanced {
            BALANCED_TEXT
        } else {
            IMBALANCED_TEXT
        }
    }

    pub fn status_icon(&self) -> &'static str {
        if self.balanced { "✓" } else { "✕" }
    }
}

/// Map values to points and run the X-test on
/// Control→Support against Accountability→Influence.
pub fn evaluate(snapshot: &Snapshot) -> Evaluation {
    let points = PerDimension::from_fn(|dim| {
        thumb_center(
            snapshot.values[dim],
            snapshot.effective_ranges[dim],
            &snapshot.tracks[dim],
        )
    });

    let control_support = Segment::new(points[Dimension::Control], points[Dimension::Support]);
    let accountability_influence = Segment::new(
        points[Dimension::Accountability],
        points[Dimension::Influence],
    );
    let balanced = segments_intersect(control_support, accountability_influence);

    let gap = GapArrow::between(
        snapshot.values[Dimension::Control],
        snapshot.values[Dimension::Accountability],
    );

    debug!(
        "evaluate values={:?} balanced={} gap=[{:.2}, {:.2}]",
        snapshot.values, balanced, gap.left, gap.right
    );

    Evaluation {
        values: snapshot.values,
        points,
        control_support,
        accountability_influence,
        balanced,
        gap,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::Ranges;
    use crate::layout::Layout;
    use crate::view::ViewState;

    fn eval(c: i32, a: i32, i: i32, s: i32) -> Evaluation {
        let values = PerDimension::from_fn(|dim| match dim {
            Dimension::Control => c,
            Dimension::Accountability => a,
            Dimension::Influence => i,
            Dimension::Support => s,
        });
        ViewState::new(Ranges::default(), Layout::default())
            .with_values(values)
            .evaluate()
    }

    #[test]
    fn test_x_pattern_is_balanced() {
        // Control and Support lean one way, Accountability and Influence the other
        let e = eval(3, 7, 3, 7);
        assert!(e.balanced);
        assert_eq!(e.status_text(), BALANCED_TEXT);
        assert_eq!(e.status_icon(), "✓");
    }

    #[test]
    fn test_same_slant_is_imbalanced() {
        // both lines shifted right; no crossing
        let e = eval(2, 6, 9, 5);
        assert!(!e.balanced);
        assert_eq!(e.status_text(), IMBALANCED_TEXT);
        assert_eq!(e.status_icon(), "✕");
    }

    #[test]
    fn test_all_equal_is_balanced() {
        // four points on one vertical line: collinear overlap
        let e = eval(5, 5, 5, 5);
        assert!(e.balanced);
        assert_eq!(e.gap.width(), 0.0);
        assert!(!e.gap.heads_visible());
    }

    #[test]
    fn test_point_on_other_line_is_balanced() {
        // rows are evenly spaced, so Accountability (row 1) lies on the
        // Control->Support line when 3a == 2c + s, Influence (row 2) when 3i == c + 2s
        assert!(eval(1, 3, 5, 7).balanced);
        assert!(eval(1, 5, 7, 10).balanced);

        for width in [640.0, 1000.0, 333.0] {
            for c in 0..=10 {
                for s in 0..=10 {
                    for a in 0..=10 {
                        for i in 0..=10 {
                            if 3 * a != 2 * c + s && 3 * i != c + 2 * s {
                                continue;
                            }
                            let values = PerDimension::from_fn(|dim| match dim {
                                Dimension::Control => c,
                                Dimension::Accountability => a,
                                Dimension::Influence => i,
                                Dimension::Support => s,
                            });
                            let mut view = ViewState::new(Ranges::default(), Layout::default())
                                .with_values(values);
                            view.resize(width);
                            assert!(
                                view.evaluate().balanced,
                                "touching ({c}, {a}, {i}, {s}) at width {width}"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_segment_pairing() {
        let e = eval(1, 2, 3, 4);
        assert_eq!(e.control_support.start, e.points[Dimension::Control]);
        assert_eq!(e.control_support.end, e.points[Dimension::Support]);
        assert_eq!(e.accountability_influence.start, e.points[Dimension::Accountability]);
        assert_eq!(e.accountability_influence.end, e.points[Dimension::Influence]);
    }

    #[test]
    fn test_gap_from_control_and_accountability() {
        let e = eval(2, 8, 5, 5);
        assert!(e.gap.left < e.gap.right);
        assert!((e.gap.left - 0.2).abs() < 1e-12);
        assert!((e.gap.right - 0.8).abs() < 1e-12);
    }
}
