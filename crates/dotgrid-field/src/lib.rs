//! Dot grid generation, tweening and rendering.
//!
//! [`grid::generate`] lays out the dots, [`Timeline`] interpolates the
//! animated ones and [`DotField`] ties the two together, repainting every
//! dot onto a [`Surface`] on each tick.

mod canvas;
mod color;
mod easing;
mod field;
pub mod grid;
mod surface;
mod timeline;

pub use canvas::{CanvasSurface, CanvasWidget};
pub use color::{dot_color, hsl_to_rgb};
pub use easing::Easing;
pub use field::DotField;
pub use surface::{DrawOp, FilledRect, RecordingSurface, Surface};
pub use timeline::{
    Animatable, Direction, Offset, PlayState, PropertyValue, Timeline, TimelineBuilder, TweenSpec,
};
