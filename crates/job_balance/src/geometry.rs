pub mod intersect;
pub mod mapping;
pub mod types;

pub use intersect::{on_segment, orient, segments_intersect};
pub use mapping::{normalized_position, thumb_center};
pub use types::{Point, Segment, TrackGeometry};
