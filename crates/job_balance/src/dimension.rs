use std::ops::{Index, IndexMut};

use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::constants::{SCALE_MAX, SCALE_MIN};
use crate::error::{BalanceError, Result};

/// One of the four sliders of the diagram, in top-to-bottom row order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString, AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Dimension {
    Control,
    Accountability,
    Influence,
    Support,
}

impl Dimension {
    /// Row index on the diagram (0 = top)
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn all() -> impl Iterator<Item = Dimension> {
        Dimension::iter()
    }
}

/// A value of type `T` for each dimension.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PerDimension<T>([T; 4]);

impl<T> PerDimension<T> {
    pub fn from_fn(mut f: impl FnMut(Dimension) -> T) -> Self {
        Self([
            f(Dimension::Control),
            f(Dimension::Accountability),
            f(Dimension::Influence),
            f(Dimension::Support),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &T)> {
        Dimension::iter().zip(self.0.iter())
    }

    pub fn map<U>(&self, mut f: impl FnMut(Dimension, &T) -> U) -> PerDimension<U> {
        PerDimension::from_fn(|dim| f(dim, &self[dim]))
    }
}

impl<T> Index<Dimension> for PerDimension<T> {
    type Output = T;

    fn index(&self, dim: Dimension) -> &T {
        &self.0[dim.index()]
    }
}

impl<T> IndexMut<Dimension> for PerDimension<T> {
    fn index_mut(&mut self, dim: Dimension) -> &mut T {
        &mut self.0[dim.index()]
    }
}

/// Active band: the realistic sub-range of the 0-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub min: i32,
    pub max: i32,
}

impl Band {
    pub const FULL: Band = Band {
        min: SCALE_MIN,
        max: SCALE_MAX,
    };

    pub fn new(min: i32, max: i32) -> Result<Self> {
        if min < SCALE_MIN || max > SCALE_MAX || min > max {
            return Err(BalanceError::InvalidBand {
                min,
                max,
                scale_min: SCALE_MIN,
                scale_max: SCALE_MAX,
            });
        }
        Ok(Self { min, max })
    }

    /// Snap `value` to the nearest band boundary. Idempotent.
    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Default for Band {
    fn default() -> Self {
        Band::FULL
    }
}

/// Tick label under a track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub value: i32,
    pub active: bool,
}

/// Per-dimension slider configuration: scale range, active band and whether
/// the slider itself is locked to the band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionRange {
    pub min: i32,
    pub max: i32,
    pub band: Band,
    pub lock_to_band: bool,
}

impl DimensionRange {
    pub fn new(dimension: Dimension, band: Band, lock_to_band: bool) -> Result<Self> {
        let range = Self {
            min: SCALE_MIN,
            max: SCALE_MAX,
            band,
            lock_to_band,
        };
        let (min, max) = range.effective();
        // normalization divides by (max - min)
        if max <= min {
            return Err(BalanceError::InvalidRange {
                dimension,
                min,
                max,
            });
        }
        Ok(range)
    }

    /// Slider range actually used for positioning the thumb
    pub fn effective(&self) -> (i32, i32) {
        if self.lock_to_band {
            (self.band.min, self.band.max)
        } else {
            (self.min, self.max)
        }
    }

    pub fn clamp(&self, value: i32) -> i32 {
        self.band.clamp(value)
    }

    /// Tick labels 0..=10, dimmed outside the band
    pub fn ticks(&self) -> Vec<Tick> {
        (SCALE_MIN..=SCALE_MAX)
            .map(|value| Tick {
                value,
                active: self.band.contains(value),
            })
            .collect()
    }
}

impl Default for DimensionRange {
    fn default() -> Self {
        Self {
            min: SCALE_MIN,
            max: SCALE_MAX,
            band: Band::FULL,
            lock_to_band: false,
        }
    }
}

pub type Ranges = PerDimension<DimensionRange>;
