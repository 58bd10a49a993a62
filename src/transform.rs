use std::io::{BufRead, Write};

use log::{debug, warn};
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::elements::{Polyline, POINTS_ATTR};
use crate::errors::{Error, Result};
use crate::geometry::{AbsoluteLength, LengthParser};
use crate::surface::PathDataWriter;
use crate::types::AttrMap;
use crate::RenderConfig;

const POLYLINE: &[u8] = b"polyline";
const DEBUG_SRC_ATTR: &str = "data-src-points";

/// What happened to an element opened by a `Start` event, so the
/// matching `End` can be handled the same way.
#[derive(Debug, Clone, Copy, PartialEq)]
enum OpenElement {
    Unchanged,
    Renamed,
}

/// Converts `<polyline>` elements in a document into `<path>` elements.
pub struct Transformer {
    config: RenderConfig,
    lengths: Box<dyn LengthParser>,
}

impl Default for Transformer {
    fn default() -> Self {
        Self::from_config(&RenderConfig::default())
    }
}

impl Transformer {
    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            config: config.clone(),
            lengths: Box::new(AbsoluteLength),
        }
    }

    /// Use an alternative parser for individual point coordinates.
    pub fn with_length_parser(mut self, lengths: impl LengthParser + 'static) -> Self {
        self.lengths = Box::new(lengths);
        self
    }

    /// Read a whole document from `reader`, writing the converted result to
    /// `writer`. Nothing is written if any element fails to convert.
    pub fn transform(&self, reader: &mut dyn BufRead, writer: &mut dyn Write) -> Result<()> {
        let mut reader = Reader::from_reader(reader);
        let mut out = Writer::new(Vec::new());
        let mut buf = Vec::new();
        let mut open_stack = Vec::new();
        // depth inside a dropped element's content
        let mut skip_depth = 0;
        let mut count = 0;

        loop {
            let pos = reader.buffer_position();
            let ev = reader
                .read_event_into(&mut buf)
                .map_err(|e| Error::Document(format!("XML error at position {pos}: {e}")))?;

            if skip_depth > 0 {
                match ev {
                    Event::Start(_) => skip_depth += 1,
                    Event::End(_) => skip_depth -= 1,
                    Event::Eof => return Err(unclosed_error()),
                    _ => (),
                }
                buf.clear();
                continue;
            }

            match ev {
                Event::Eof if !open_stack.is_empty() => return Err(unclosed_error()),
                Event::Eof => break,
                Event::Empty(e) if e.name().as_ref() == POLYLINE => {
                    count += 1;
                    if let Some(path) = self.convert(&e, pos)? {
                        write_event(&mut out, Event::Empty(path))?;
                    }
                }
                Event::Start(e) if e.name().as_ref() == POLYLINE => {
                    count += 1;
                    if let Some(path) = self.convert(&e, pos)? {
                        write_event(&mut out, Event::Start(path))?;
                        open_stack.push(OpenElement::Renamed);
                    } else {
                        skip_depth = 1;
                    }
                }
                Event::Start(e) => {
                    open_stack.push(OpenElement::Unchanged);
                    write_event(&mut out, Event::Start(e))?;
                }
                Event::End(e) => match open_stack.pop() {
                    Some(OpenElement::Renamed) => {
                        write_event(&mut out, Event::End(BytesEnd::new("path")))?
                    }
                    _ => write_event(&mut out, Event::End(e))?,
                },
                other => write_event(&mut out, other)?,
            }
            buf.clear();
        }

        debug!("converted {count} polyline elements");
        writer.write_all(&out.into_inner())?;
        Ok(())
    }

    /// Build the `<path>` replacement for a polyline, or `None` if it has
    /// nothing to draw and degenerate elements are not kept.
    fn convert(&self, element: &BytesStart, pos: u64) -> Result<Option<BytesStart<'static>>> {
        let attrs = read_attrs(element)?;
        let polyline = Polyline::new(attrs);
        let mut pdw = PathDataWriter::new();
        if let Err(err) = polyline.draw(&mut pdw, self.lengths.as_ref()) {
            warn!("polyline at position {pos} not converted: {err}");
            return Err(err);
        }
        if pdw.is_empty() && !self.config.keep_degenerate {
            debug!("dropping degenerate polyline at position {pos}");
            return Ok(None);
        }
        Ok(Some(self.path_element(polyline.attrs(), pdw.finish())))
    }

    fn path_element(&self, attrs: &AttrMap, data: String) -> BytesStart<'static> {
        let mut path = BytesStart::new("path");
        let mut have_data = false;
        for (key, value) in attrs.iter() {
            if key == POINTS_ATTR {
                // path data takes the place of the points attribute
                path.push_attribute(("d", data.as_str()));
                have_data = true;
                if self.config.debug {
                    path.push_attribute((DEBUG_SRC_ATTR, value));
                }
            } else {
                path.push_attribute((key, value));
            }
        }
        if !have_data {
            path.push_attribute(("d", data.as_str()));
        }
        path
    }
}

fn read_attrs(element: &BytesStart) -> Result<AttrMap> {
    element
        .attributes()
        .map(|a| {
            let a = a.map_err(Error::from_err)?;
            let key = String::from_utf8(a.key.as_ref().to_vec())?;
            let value = a.unescape_value().map_err(Error::from_err)?.into_owned();
            Ok((key, value))
        })
        .collect::<Result<Vec<_>>>()
        .map(AttrMap::from)
}

fn unclosed_error() -> Error {
    Error::Document("unclosed element at end of input".to_string())
}

fn write_event(out: &mut Writer<Vec<u8>>, ev: Event) -> Result<()> {
    out.write_event(ev).map_err(Error::from_err)
}
