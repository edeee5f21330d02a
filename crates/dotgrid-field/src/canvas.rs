//! Terminal surface backed by a ratatui braille canvas.

use dotgrid_core::Viewport;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        Widget,
        canvas::{Canvas, Points},
    },
};

use crate::surface::{FilledRect, Surface};

/// Braille dots per terminal cell, horizontally and vertically.
const BRAILLE_DOTS: (f64, f64) = (2.0, 4.0);

/// Collects filled rectangles and paints them as braille points.
///
/// Logical pixels map onto the terminal through the pixel scale, so a
/// terminal cell covers `scale.0 × scale.1` pixels.
#[derive(Debug, Clone)]
pub struct CanvasSurface {
    scale: (f64, f64),
    viewport: Option<Viewport>,
    rects: Vec<FilledRect>,
}

impl CanvasSurface {
    pub fn new(scale: (f64, f64)) -> Self {
        Self {
            scale,
            viewport: None,
            rects: Vec::new(),
        }
    }

    pub fn scale(&self) -> (f64, f64) {
        self.scale
    }

    /// Measure the surface from a terminal area given in cells.
    pub fn resize(&mut self, cols: u16, rows: u16) -> Option<Viewport> {
        self.viewport = Viewport::from_cells(cols, rows, self.scale);
        self.viewport
    }

    /// Widget painting the rectangles collected since the last clear.
    pub fn widget(&self) -> CanvasWidget<'_> {
        CanvasWidget { surface: self }
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Option<Viewport> {
        self.viewport
    }

    fn clear(&mut self) {
        self.rects.clear();
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        self.rects.push(FilledRect {
            x,
            y,
            width,
            height,
            color,
        });
    }
}

/// Renders a [`CanvasSurface`] into a terminal buffer.
#[derive(Debug, Clone, Copy)]
pub struct CanvasWidget<'a> {
    surface: &'a CanvasSurface,
}

impl Widget for CanvasWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(viewport) = self.surface.viewport else {
            return;
        };
        if area.is_empty() {
            return;
        }

        // One braille dot, in logical pixels.
        let step = (
            viewport.width / (area.width as f64 * BRAILLE_DOTS.0),
            viewport.height / (area.height as f64 * BRAILLE_DOTS.1),
        );
        let rects = &self.surface.rects;

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, viewport.width])
            .y_bounds([0.0, viewport.height])
            .paint(|ctx| {
                for rect in rects {
                    let coords = rasterize(rect, step, viewport);
                    ctx.draw(&Points {
                        coords: &coords,
                        color: rect.color,
                    });
                }
            })
            .render(area, buf);
    }
}

/// Sample `rect` at braille resolution, flipping y for the canvas.
///
/// Only the part of `rect` inside `viewport` is sampled. Rectangles smaller
/// than one braille dot still produce their center point.
fn rasterize(rect: &FilledRect, step: (f64, f64), viewport: Viewport) -> Vec<(f64, f64)> {
    let (left, right) = (rect.x.max(0.0), (rect.x + rect.width).min(viewport.width));
    let (top, bottom) = (rect.y.max(0.0), (rect.y + rect.height).min(viewport.height));
    if right < left || bottom < top {
        return Vec::new();
    }

    let mut coords = Vec::new();
    let mut y = top + step.1 / 2.0;
    while y < bottom {
        let mut x = left + step.0 / 2.0;
        while x < right {
            coords.push((x, viewport.height - y));
            x += step.0;
        }
        y += step.1;
    }

    if coords.is_empty() {
        coords.push(((left + right) / 2.0, viewport.height - (top + bottom) / 2.0));
    }
    coords
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f64, y: f64, size: f64) -> FilledRect {
        FilledRect {
            x,
            y,
            width: size,
            height: size,
            color: Color::White,
        }
    }

    #[test]
    fn test_tiny_rect_keeps_center() {
        let coords = rasterize(&rect(10.0, 20.0, 0.4), (4.0, 4.0), Viewport::new(100.0, 100.0));
        assert_eq!(coords.len(), 1);
        let (x, y) = coords[0];
        assert!((x - 10.2).abs() < 1e-9);
        assert!((y - 79.8).abs() < 1e-9);
    }

    #[test]
    fn test_large_rect_samples_grid() {
        let coords = rasterize(&rect(0.0, 0.0, 8.0), (4.0, 4.0), Viewport::new(100.0, 100.0));
        assert_eq!(coords.len(), 4);
        assert!(coords.contains(&(2.0, 98.0)));
        assert!(coords.contains(&(6.0, 94.0)));
    }

    #[test]
    fn test_huge_rect_sampled_within_viewport() {
        let viewport = Viewport::new(100.0, 100.0);
        let coords = rasterize(&rect(-1e6, -1e6, 1e9), (4.0, 4.0), viewport);
        assert_eq!(coords.len(), 25 * 25);
        assert!(
            coords
                .iter()
                .all(|&(x, y)| (0.0..=100.0).contains(&x) && (0.0..=100.0).contains(&y))
        );
    }

    #[test]
    fn test_rect_outside_viewport_skipped() {
        let coords = rasterize(&rect(200.0, 10.0, 4.0), (4.0, 4.0), Viewport::new(100.0, 100.0));
        assert!(coords.is_empty());
    }

    #[test]
    fn test_unmeasured_surface_renders_nothing() {
        let mut surface = CanvasSurface::new((8.0, 16.0));
        surface.fill_rect(1.0, 1.0, 1.0, 1.0, Color::White);

        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        surface.widget().render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }

    #[test]
    fn test_dot_lands_in_expected_cell() {
        let mut surface = CanvasSurface::new((8.0, 16.0));
        let viewport = surface.resize(4, 2).unwrap();
        assert_eq!(viewport, Viewport::new(32.0, 32.0));

        // center of the bottom-right terminal cell
        surface.fill_rect(27.0, 23.0, 2.0, 2.0, Color::White);

        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        surface.widget().render(area, &mut buf);

        assert_ne!(buf[(3, 1)].symbol(), " ");
        assert_eq!(buf[(0, 0)].symbol(), " ");
    }

    #[test]
    fn test_clear_forgets_rects() {
        let mut surface = CanvasSurface::new((8.0, 16.0));
        surface.resize(4, 2);
        surface.fill_rect(27.0, 23.0, 2.0, 2.0, Color::White);
        surface.clear();

        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        surface.widget().render(area, &mut buf);
        assert!((0..4).all(|x| (0..2).all(|y| buf[(x, y)].symbol() == " ")));
    }
}
