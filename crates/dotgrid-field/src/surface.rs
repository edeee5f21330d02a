//! Drawing targets for the dot field.

use dotgrid_core::Viewport;
use ratatui::style::Color;

/// A 2D surface the field draws onto, in logical pixels.
pub trait Surface {
    /// Drawable area, or `None` while nothing is mounted.
    fn size(&self) -> Option<Viewport>;
    /// Erase everything drawn so far.
    fn clear(&mut self);
    /// Fill a `width × height` rectangle whose top-left corner is `(x, y)`.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color);
}

/// A filled rectangle recorded by a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilledRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Color,
}

/// One call made against a [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    Clear,
    Fill(FilledRect),
}

/// Surface that remembers every call, for tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    size: Option<Viewport>,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(size: Option<Viewport>) -> Self {
        Self {
            size,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Rectangles filled since the last clear.
    pub fn visible(&self) -> Vec<FilledRect> {
        let start = self
            .ops
            .iter()
            .rposition(|op| *op == DrawOp::Clear)
            .map_or(0, |idx| idx + 1);
        self.ops[start..]
            .iter()
            .filter_map(|op| match op {
                DrawOp::Fill(rect) => Some(*rect),
                DrawOp::Clear => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Option<Viewport> {
        self.size
    }

    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        self.ops.push(DrawOp::Fill(FilledRect {
            x,
            y,
            width,
            height,
            color,
        }));
    }
}
