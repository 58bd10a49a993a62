use itertools::Itertools;
use log::{debug, trace, warn};

use crate::errors::{Error, Result};
use crate::geometry::{LengthParser, Point, PointList};
use crate::surface::DrawingSurface;
use crate::types::{attr_split, AttrMap};

pub const POINTS_ATTR: &str = "points";

/// Parse a `points` attribute value into a fresh `PointList`.
///
/// An absent attribute gives an empty list. The value must split into an
/// even number of tokens; each consecutive pair becomes one (x, y) point.
/// Token parse failures from `lengths` are returned unchanged.
pub fn parse_points(points: Option<&str>, lengths: &dyn LengthParser) -> Result<PointList> {
    let Some(points) = points else {
        return Ok(PointList::new());
    };
    let tokens: Vec<String> = attr_split(points).collect();
    if tokens.len() % 2 != 0 {
        warn!("odd number of values ({}) in points list", tokens.len());
        return Err(Error::InvalidPointList(points.to_string()));
    }

    let mut result = PointList::with_capacity(tokens.len() / 2);
    for (x, y) in tokens.iter().tuples() {
        let x = lengths.parse_absolute_length(x)?;
        let y = lengths.parse_absolute_length(y)?;
        result.push(Point::new(x, y));
    }
    trace!("parsed {} points from '{points}'", result.len());
    Ok(result)
}

/// Drive `surface` with a move-to the first point and a line-to each
/// following point. Fewer than two points draws nothing.
///
/// The path is left open.
pub fn emit_path(points: &PointList, surface: &mut dyn DrawingSurface) {
    if points.len() < 2 {
        return;
    }
    let mut points = points.iter();
    if let Some(start) = points.next() {
        surface.move_to(start.x, start.y);
    }
    for p in points {
        surface.line_to(p.x, p.y);
    }
}

/// Renderer for a `<polyline>` element.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    attrs: AttrMap,
}

impl Polyline {
    pub fn new(attrs: AttrMap) -> Self {
        Self { attrs }
    }

    pub fn attrs(&self) -> &AttrMap {
        &self.attrs
    }

    pub fn points(&self, lengths: &dyn LengthParser) -> Result<PointList> {
        parse_points(self.attrs.get(POINTS_ATTR), lengths)
    }

    /// Draw this element to `surface`.
    ///
    /// Points are parsed afresh on every call, and nothing is drawn if
    /// parsing fails.
    pub fn draw(&self, surface: &mut dyn DrawingSurface, lengths: &dyn LengthParser) -> Result<()> {
        let points = self.points(lengths)?;
        debug!("drawing polyline with {} points", points.len());
        emit_path(&points, surface);
        Ok(())
    }
}

impl From<AttrMap> for Polyline {
    fn from(attrs: AttrMap) -> Self {
        Self::new(attrs)
    }
}
