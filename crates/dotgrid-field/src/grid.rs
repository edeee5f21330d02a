//! Grid generation.

use dotgrid_core::{AnimationProfile, Axis, Dot, DotGridConfig, RandomSource, Viewport, random_int};

/// Probability threshold a draw must exceed for a dot to be large.
const LARGE_THRESHOLD: f64 = 0.99;
/// Threshold a draw must exceed for a small dot to animate.
const ANIMATED_THRESHOLD: f64 = 0.75;
/// Delay range for a tween, in milliseconds.
const DELAY_RANGE_MS: (f64, f64) = (0.0, 15_000.0);
/// Duration range for a tween, in milliseconds.
const DURATION_RANGE_MS: (f64, f64) = (2_000.0, 7_000.0);
/// Largest grid generated; anything bigger comes from a degenerate cell size
/// or pixel scale and yields no dots.
pub const MAX_DOTS: usize = 1 << 20;

/// Number of columns and rows that fit in `area`.
pub fn grid_dimensions(cell_size: f64, area: Viewport) -> (usize, usize) {
    if !cell_size.is_finite() || cell_size <= 0.0 || !area.is_measurable() {
        return (0, 0);
    }
    let cols = (area.width / cell_size).floor() as usize;
    let rows = (area.height / cell_size).floor() as usize;
    (cols, rows)
}

/// Produce the dot list for `area`, iterating column by column.
///
/// An unmeasured area yields no dots. Draw order is fixed so a seeded or
/// scripted source reproduces the same grid.
pub fn generate<R: RandomSource + ?Sized>(
    config: &DotGridConfig,
    area: Option<Viewport>,
    rng: &mut R,
) -> Vec<Dot> {
    let Some(area) = area else {
        return Vec::new();
    };
    let (cols, rows) = grid_dimensions(config.cell_size, area);
    if cols == 0 || rows == 0 {
        return Vec::new();
    }
    let count = match cols.checked_mul(rows) {
        Some(count) if count <= MAX_DOTS => count,
        _ => {
            tracing::warn!(
                cols,
                rows,
                cell_size = config.cell_size,
                "grid exceeds {MAX_DOTS} dots, skipping generation"
            );
            return Vec::new();
        }
    };

    let cell = config.cell_size;
    let col_width = area.width / cols as f64;
    let row_height = area.height / rows as f64;

    let mut dots = Vec::with_capacity(count);
    for i in 0..cols {
        for j in 0..rows {
            let is_large = rng.uniform() > LARGE_THRESHOLD;
            let is_animated = is_large || rng.uniform() > ANIMATED_THRESHOLD;

            let motion = is_animated.then(|| {
                let axis = if rng.uniform() > 0.5 {
                    Axis::Vertical
                } else {
                    Axis::Horizontal
                };
                let speed = random_int(rng, config.min_speed, config.max_speed);
                let reverse = rng.uniform() > 0.5;
                let oscillation =
                    random_int(rng, config.min_oscillation, config.max_oscillation).round() as i64;
                (axis, speed, reverse, oscillation)
            });

            let max_size = if is_large {
                config.large_dot_max_size
            } else {
                config.small_dot_max_size
            };
            let size = rng.uniform() * max_size;

            let animation = motion.map(|(axis, speed, reverse, oscillation)| {
                let offset_min = cell - cell / 2.0 + size / 2.0;
                let offset_max = cell * 10.0 - cell / 2.0 + size / 2.0;
                let target_offset = (
                    random_int(rng, offset_min, offset_max).round(),
                    random_int(rng, offset_min, offset_max).round(),
                );
                let delay_ms = random_int(rng, DELAY_RANGE_MS.0, DELAY_RANGE_MS.1);
                let duration_ms = random_int(rng, DURATION_RANGE_MS.0, DURATION_RANGE_MS.1);
                AnimationProfile {
                    axis,
                    speed,
                    reverse,
                    oscillation,
                    target_offset,
                    delay_ms,
                    duration_ms,
                }
            });

            let x = col_width * i as f64 + cell / 2.0 - size / 2.0;
            let y = row_height * j as f64 + cell / 2.0 - size / 2.0;
            dots.push(Dot::new((x, y), size, is_large, animation));
        }
    }

    tracing::debug!(cols, rows, dots = dots.len(), "generated dot grid");
    dots
}
