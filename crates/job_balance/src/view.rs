use log::{debug, warn};

use crate::dimension::{Dimension, PerDimension, Ranges};
use crate::evaluate::{Evaluation, Snapshot, evaluate};
use crate::geometry::{Point, TrackGeometry, thumb_center};
use crate::layout::Layout;

/// Current slider values plus the live geometry of their tracks.
///
/// Values are stored as given and clamped to the active band on every read.
/// A dimension locked to its band clamps on write as well.
#[derive(Debug, Clone)]
pub struct ViewState {
    ranges: Ranges,
    layout: Layout,
    values: PerDimension<i32>,
    tracks: PerDimension<TrackGeometry>,
}

impl ViewState {
    pub fn new(ranges: Ranges, layout: Layout) -> Self {
        let values = ranges.map(|_, r| r.band.min + (r.band.max - r.band.min) / 2);
        let tracks = layout.tracks();
        Self {
            ranges,
            layout,
            values,
            tracks,
        }
    }

    pub fn with_values(mut self, values: PerDimension<i32>) -> Self {
        for (dim, &v) in values.iter() {
            self.set_value(dim, v);
        }
        self
    }

    pub fn ranges(&self) -> &Ranges {
        &self.ranges
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn set_value(&mut self, dim: Dimension, value: i32) {
        let range = &self.ranges[dim];
        let stored = if range.lock_to_band {
            range.clamp(value)
        } else {
            value
        };
        if !range.band.contains(value) {
            warn!(
                "{dim} value {value} is outside band [{}, {}], reading as {}",
                range.band.min,
                range.band.max,
                range.clamp(value)
            );
        }
        debug!("set {dim} = {stored}");
        self.values[dim] = stored;
    }

    /// Value clamped to the active band
    pub fn value(&self, dim: Dimension) -> i32 {
        self.ranges[dim].clamp(self.values[dim])
    }

    /// Value as last set, before clamping
    pub fn raw_value(&self, dim: Dimension) -> i32 {
        self.values[dim]
    }

    pub fn values(&self) -> PerDimension<i32> {
        PerDimension::from_fn(|dim| self.value(dim))
    }

    /// Recompute track geometry for a new container width
    pub fn resize(&mut self, width: f64) {
        debug!("resize container {} -> {}", self.layout.width, width);
        self.layout = self.layout.resized(width);
        self.tracks = self.layout.tracks();
    }

    pub fn track(&self, dim: Dimension) -> TrackGeometry {
        self.tracks[dim]
    }

    pub fn point(&self, dim: Dimension) -> Point {
        thumb_center(self.value(dim), self.ranges[dim].effective(), &self.tracks[dim])
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            values: self.values(),
            effective_ranges: self.ranges.map(|_, r| r.effective()),
            tracks: self.tracks,
        }
    }

    pub fn evaluate(&self) -> Evaluation {
        evaluate(&self.snapshot())
    }
}
