//! Command line arguments.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use dotgrid_config::AppConfig;

/// An animated field of drifting dots.
#[derive(Debug, Parser)]
#[command(name = "dotgrid", version, about)]
pub struct Cli {
    /// Config file to load and save (defaults to the platform config dir).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed the generator for a reproducible grid.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Logical pixels per terminal cell, e.g. `8x16`.
    #[arg(long, value_name = "XxY")]
    pub pixel_scale: Option<PixelScale>,

    /// Target frames per second.
    #[arg(long)]
    pub fps: Option<u32>,

    /// Show the tuning panel on startup.
    #[arg(long)]
    pub panel: bool,

    /// Write logs to this file (filter with `DOTGRID_LOG`).
    #[arg(long, value_name = "PATH")]
    pub log: Option<PathBuf>,
}

impl Cli {
    /// Apply command line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(scale) = self.pixel_scale {
            config.display.pixel_scale_x = scale.x;
            config.display.pixel_scale_y = scale.y;
        }
        if let Some(fps) = self.fps {
            config.display.fps = fps;
        }
        if self.panel {
            config.display.show_panel = true;
        }
    }
}

/// Largest accepted pixels-per-cell on either axis.
const MAX_PIXEL_SCALE: f64 = 1024.0;

/// Pixel scale given as `<x>x<y>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelScale {
    pub x: f64,
    pub y: f64,
}

impl FromStr for PixelScale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected <x>x<y>, got `{s}`"))?;
        let parse = |part: &str| -> Result<f64, String> {
            let value: f64 = part
                .trim()
                .parse()
                .map_err(|_| format!("`{part}` is not a number"))?;
            if !value.is_finite() || value <= 0.0 {
                Err(format!("`{part}` must be positive"))
            } else if value > MAX_PIXEL_SCALE {
                Err(format!("`{part}` exceeds {MAX_PIXEL_SCALE}"))
            } else {
                Ok(value)
            }
        };
        Ok(Self {
            x: parse(x)?,
            y: parse(y)?,
        })
    }
}
