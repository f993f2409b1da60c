//! Draw commands emitted by element renderers.
//!
//! Painting happens elsewhere; the list is the boundary between geometry and
//! pixels.

use glam::DVec2;
use nodeflex_core::Rect;

/// Horizontal anchor of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Something to draw.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled rectangle
    Rect { rect: Rect, color: String },
    /// Rotary knob showing a normalized value
    Knob {
        center: DVec2,
        radius: f64,
        value: f64,
        color: String,
    },
    /// Parameter input port
    Port {
        center: DVec2,
        radius: f64,
        connected: bool,
        color: String,
    },
    /// Single-line text anchored vertically on its center
    Text {
        position: DVec2,
        text: String,
        align: TextAlign,
        color: String,
    },
    /// Open stroked path
    Polyline { points: Vec<DVec2>, color: String },
    /// Separator line
    Divider { from: DVec2, to: DVec2, color: String },
}

/// An ordered list of draw commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn rect(&mut self, rect: Rect, color: &str) {
        self.push(DrawCommand::Rect {
            rect,
            color: color.to_string(),
        });
    }

    pub fn knob(&mut self, center: DVec2, radius: f64, value: f64, color: &str) {
        self.push(DrawCommand::Knob {
            center,
            radius,
            value,
            color: color.to_string(),
        });
    }

    pub fn port(&mut self, center: DVec2, radius: f64, connected: bool, color: &str) {
        self.push(DrawCommand::Port {
            center,
            radius,
            connected,
            color: color.to_string(),
        });
    }

    pub fn text(&mut self, position: DVec2, text: impl Into<String>, align: TextAlign, color: &str) {
        self.push(DrawCommand::Text {
            position,
            text: text.into(),
            align,
            color: color.to_string(),
        });
    }

    pub fn polyline(&mut self, points: Vec<DVec2>, color: &str) {
        self.push(DrawCommand::Polyline {
            points,
            color: color.to_string(),
        });
    }

    pub fn divider(&mut self, from: DVec2, to: DVec2, color: &str) {
        self.push(DrawCommand::Divider {
            from,
            to,
            color: color.to_string(),
        });
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter()
    }

    /// Text runs in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}
