//! Core types shared by the dotgrid crates.
//!
//! Holds the dot descriptors produced by the grid generator, the seven
//! tunable scalars that drive generation, the viewport measured in logical
//! pixels and the injectable random source.

mod config;
mod dot;
mod random;
mod viewport;

pub use config::{ConfigField, DotGridConfig};
pub use dot::{AnimationProfile, Axis, Dot};
pub use random::{RandomSource, ScriptedSource, random_int};
pub use viewport::Viewport;
