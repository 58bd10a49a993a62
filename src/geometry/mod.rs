mod length;
mod point;

pub use length::{AbsoluteLength, LengthParser};
pub use point::{Point, PointList};
