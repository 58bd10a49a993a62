mod polyline;

pub use polyline::{emit_path, parse_points, Polyline, POINTS_ATTR};
