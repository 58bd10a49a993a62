//! ## svgpoly - render SVG polyline point lists
//!
//! `svgpoly` parses the `points` attribute of an SVG `<polyline>` element into
//! an ordered list of coordinates, and draws that list as an open path: one
//! 'move to' the first point, followed by a 'line to' each subsequent point.
//!
//! ## Library use
//!
//! The core operations are [`parse_points`] and [`emit_path`], which work
//! against the narrow [`LengthParser`] and [`DrawingSurface`] traits so any
//! numeric parser or drawing back-end can be plugged in.
//!
//! For whole documents, a `RenderConfig` should be created as appropriate and
//! the `transform_*` functions used to replace each `<polyline>` with an
//! equivalent `<path>` element.
//!
//! ## Example
//!
//! ```
//! let data = svgpoly::polyline_path_data("0,0 10,0 10,10").unwrap();
//! assert_eq!(data, "M 0 0 L 10 0 L 10 10");
//!
//! let cfg = svgpoly::RenderConfig::default();
//! let output = svgpoly::transform_str(r#"<polyline points="0 0 5 5"/>"#, &cfg).unwrap();
//! assert_eq!(output, r#"<path d="M 0 0 L 5 5"/>"#);
//! ```

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Write};

#[cfg(feature = "cli")]
pub mod cli;
mod elements;
pub mod errors;
mod geometry;
pub mod surface;
mod transform;
mod types;

pub use elements::{emit_path, parse_points, Polyline, POINTS_ATTR};
pub use errors::{Error, Result};
pub use geometry::{AbsoluteLength, LengthParser, Point, PointList};
pub use surface::{CommandRecorder, DrawingSurface, PathCommand, PathDataWriter};
pub use transform::Transformer;
pub use types::AttrMap;

// Allow users of this as a library to easily retrieve the version of svgpoly being used
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Settings to configure a single document transformation.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    /// Emit `<path d="">` for polylines with fewer than two points (default true)
    pub keep_degenerate: bool,
    /// Add the original points list as a `data-src-points` attribute
    pub debug: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            keep_degenerate: true,
            debug: false,
        }
    }
}

/// Convert a raw `points` value to SVG path data using default length parsing.
pub fn polyline_path_data(points: &str) -> Result<String> {
    let points = parse_points(Some(points), &AbsoluteLength)?;
    let mut pdw = PathDataWriter::new();
    emit_path(&points, &mut pdw);
    Ok(pdw.finish())
}

/// Convert a raw `points` value, returning the list of drawing commands.
pub fn polyline_commands(points: &str) -> Result<Vec<PathCommand>> {
    let points = parse_points(Some(points), &AbsoluteLength)?;
    let mut rec = CommandRecorder::new();
    emit_path(&points, &mut rec);
    Ok(rec.into_commands())
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn points_to_path_data(points: String) -> core::result::Result<String, String> {
    polyline_path_data(&points).map_err(|e| e.to_string())
}

/// Reads from the `reader` stream, converts polylines, and writes to `writer`.
///
/// The entire stream is read before any converted data is written to `writer`.
pub fn transform_stream(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> Result<()> {
    Transformer::from_config(config).transform(reader, writer)
}

/// Transform `input` provided as a string, returning the result as a string.
pub fn transform_str<T: Into<String>>(input: T, config: &RenderConfig) -> Result<String> {
    let mut input = Cursor::new(input.into());
    let mut output: Vec<u8> = vec![];

    transform_stream(&mut input, &mut output, config)?;

    Ok(String::from_utf8(output)?)
}

/// Transform `input` using default `RenderConfig` settings.
pub fn transform_str_default<T: Into<String>>(input: T) -> Result<String> {
    transform_str(input, &RenderConfig::default())
}

/// Transform a file, where `input` / `output` may be '-' for stdin / stdout.
pub fn transform_file(input: &str, output: &str, config: &RenderConfig) -> Result<()> {
    let mut in_reader: Box<dyn BufRead> = if input == "-" {
        Box::new(BufReader::new(std::io::stdin()))
    } else {
        Box::new(BufReader::new(File::open(input)?))
    };

    if output == "-" {
        transform_stream(&mut in_reader, &mut std::io::stdout(), config)?;
    } else {
        // Convert into memory first so a failed conversion leaves any
        // existing output file untouched.
        let mut out = Vec::new();
        transform_stream(&mut in_reader, &mut out, config)?;
        File::create(output)?.write_all(&out)?;
    }
    Ok(())
}
