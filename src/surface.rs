//! Drawing surfaces which accept the move-to / line-to protocol.

#[cfg(feature = "json")]
use serde_derive::Serialize;

use crate::geometry::Point;
use crate::types::fstr;

/// Sink for path drawing commands, in the current coordinate space.
pub trait DrawingSurface {
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize))]
#[cfg_attr(feature = "json", serde(tag = "cmd"))]
pub enum PathCommand {
    #[cfg_attr(feature = "json", serde(rename = "M"))]
    MoveTo(Point),
    #[cfg_attr(feature = "json", serde(rename = "L"))]
    LineTo(Point),
}

impl PathCommand {
    pub fn point(&self) -> Point {
        match self {
            Self::MoveTo(p) | Self::LineTo(p) => *p,
        }
    }

    pub fn to_path_data(&self) -> String {
        match self {
            Self::MoveTo(p) => format!("M {} {}", fstr(p.x), fstr(p.y)),
            Self::LineTo(p) => format!("L {} {}", fstr(p.x), fstr(p.y)),
        }
    }
}

/// Surface which keeps every command issued to it, in order.
#[derive(Debug, Clone, Default)]
pub struct CommandRecorder {
    commands: Vec<PathCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<PathCommand> {
        self.commands
    }

    #[cfg(feature = "json")]
    pub fn to_json(&self) -> crate::Result<String> {
        serde_json::to_string(&self.commands).map_err(crate::Error::from_err)
    }
}

impl DrawingSurface for CommandRecorder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
    }
}

/// Surface which renders commands as SVG path data, e.g. `M 0 0 L 10 0`.
#[derive(Debug, Clone, Default)]
pub struct PathDataWriter {
    parts: Vec<String>,
}

impl PathDataWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn finish(self) -> String {
        self.parts.join(" ")
    }
}

impl DrawingSurface for PathDataWriter {
    fn move_to(&mut self, x: f32, y: f32) {
        self.parts.push(PathCommand::MoveTo(Point::new(x, y)).to_path_data());
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.parts.push(PathCommand::LineTo(Point::new(x, y)).to_path_data());
    }
}
