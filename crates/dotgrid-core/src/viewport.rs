//! Drawable area measured in logical pixels.

/// Width and height of the drawable area, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Convert a terminal size to logical pixels.
    ///
    /// Returns `None` while the terminal reports no usable area.
    pub fn from_cells(cols: u16, rows: u16, scale: (f64, f64)) -> Option<Self> {
        let viewport = Self::new(cols as f64 * scale.0, rows as f64 * scale.1);
        viewport.is_measurable().then_some(viewport)
    }

    /// Both dimensions are finite and positive.
    pub fn is_measurable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}
