use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MARGIN_PX, DEFAULT_ROW_GAP_PX, DEFAULT_ROW_HEIGHT_PX, DEFAULT_TRACK_HEIGHT_PX,
    DEFAULT_WIDTH_PX,
};
use crate::dimension::{Dimension, PerDimension};
use crate::error::{BalanceError, Result};
use crate::geometry::TrackGeometry;

/// Container layout. Tracks are stacked one row per dimension, top to bottom
/// in `Dimension` order, and share the same horizontal extent.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Layout {
    pub width: f64,
    pub row_height: f64,
    pub row_gap: f64,
    pub margin: f64,
    pub track_height: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH_PX,
            row_height: DEFAULT_ROW_HEIGHT_PX,
            row_gap: DEFAULT_ROW_GAP_PX,
            margin: DEFAULT_MARGIN_PX,
            track_height: DEFAULT_TRACK_HEIGHT_PX,
        }
    }
}

impl Layout {
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("width", self.width),
            ("row_height", self.row_height),
            ("row_gap", self.row_gap),
            ("margin", self.margin),
            ("track_height", self.track_height),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(BalanceError::Config(format!(
                "layout {name} must be a finite number, got {value}"
            )));
        }
        if self.track_width() <= 0.0 {
            return Err(BalanceError::Config(format!(
                "layout width {} leaves no room for tracks with margin {}",
                self.width, self.margin
            )));
        }
        if self.row_height <= 0.0 || self.track_height <= 0.0 || self.track_height > self.row_height
        {
            return Err(BalanceError::Config(format!(
                "track_height ({}) must be positive and fit in row_height ({})",
                self.track_height, self.row_height
            )));
        }
        if self.row_gap < 0.0 || self.margin < 0.0 {
            return Err(BalanceError::Config(
                "row_gap and margin must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Same layout in a container of a different width (viewport resize)
    pub fn resized(&self, width: f64) -> Self {
        Self { width, ..*self }
    }

    pub fn track_width(&self) -> f64 {
        self.width - 2.0 * self.margin
    }

    /// Total container height
    pub fn height(&self) -> f64 {
        let rows = Dimension::all().count() as f64;
        2.0 * self.margin + rows * self.row_height + (rows - 1.0) * self.row_gap
    }

    /// Top of the row holding `dim`
    pub fn row_top(&self, dim: Dimension) -> f64 {
        self.margin + dim.index() as f64 * (self.row_height + self.row_gap)
    }

    pub fn track(&self, dim: Dimension) -> TrackGeometry {
        let row_top = self.row_top(dim);
        TrackGeometry {
            left: self.margin,
            top: row_top + (self.row_height - self.track_height) / 2.0,
            width: self.track_width(),
            height: self.track_height,
        }
    }

    pub fn tracks(&self) -> PerDimension<TrackGeometry> {
        PerDimension::from_fn(|dim| self.track(dim))
    }
}
