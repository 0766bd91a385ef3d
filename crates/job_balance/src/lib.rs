pub mod batch;
pub mod config;
pub mod constants;
pub mod dimension;
pub mod error;
pub mod evaluate;
pub mod export;
pub mod gap;
pub mod geometry;
pub mod layout;
pub mod render;
pub mod view;

pub use config::Config;
pub use constants::{SCALE_MAX, SCALE_MIN};
pub use dimension::{Band, Dimension, DimensionRange, PerDimension, Ranges};
pub use error::{BalanceError, Result};
pub use evaluate::{Evaluation, Snapshot, evaluate};
pub use gap::{GapArrow, GapDirection};
pub use geometry::{Point, Segment, TrackGeometry, segments_intersect};
pub use layout::Layout;
pub use render::{RenderOptions, render_svg, save_svg, save_svg_to_dir};
pub use view::ViewState;
