//! Tunable scalars that drive grid generation.

use serde::{Deserialize, Serialize};

/// The seven scalars exposed in the tuning panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotGridConfig {
    /// Edge length of one grid cell, in logical pixels.
    pub cell_size: f64,
    /// Upper bound for the size of large dots.
    pub large_dot_max_size: f64,
    /// Upper bound for the size of small dots.
    pub small_dot_max_size: f64,
    /// Lower bound of the per-dot speed draw.
    pub min_speed: f64,
    /// Upper bound of the per-dot speed draw.
    pub max_speed: f64,
    /// Fewest cells an animated dot travels.
    pub min_oscillation: f64,
    /// Most cells an animated dot travels.
    pub max_oscillation: f64,
}

impl Default for DotGridConfig {
    fn default() -> Self {
        Self {
            cell_size: 15.0,
            large_dot_max_size: 4.0,
            small_dot_max_size: 0.7,
            min_speed: 1.0,
            max_speed: 4.0,
            min_oscillation: 1.0,
            max_oscillation: 10.0,
        }
    }
}

impl DotGridConfig {
    /// Move `field` by `steps` increments and return the new value.
    pub fn adjust(&mut self, field: ConfigField, steps: i32) -> f64 {
        let raw = field.get(self) + field.step() * steps as f64;
        // Keep two decimals so repeated 0.1 steps don't drift.
        let value = ((raw * 100.0).round() / 100.0).max(field.min_value());
        field.set(self, value);
        value
    }
}

/// Identifies one scalar of [`DotGridConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigField {
    #[default]
    CellSize,
    LargeDotMaxSize,
    SmallDotMaxSize,
    MinSpeed,
    MaxSpeed,
    MinOscillation,
    MaxOscillation,
}

impl ConfigField {
    /// Every field in panel order.
    pub const ALL: [ConfigField; 7] = [
        ConfigField::CellSize,
        ConfigField::LargeDotMaxSize,
        ConfigField::SmallDotMaxSize,
        ConfigField::MinSpeed,
        ConfigField::MaxSpeed,
        ConfigField::MinOscillation,
        ConfigField::MaxOscillation,
    ];

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            ConfigField::CellSize => "Dot area",
            ConfigField::LargeDotMaxSize => "Large Dots size",
            ConfigField::SmallDotMaxSize => "Small Dots size",
            ConfigField::MinSpeed => "Min Speed",
            ConfigField::MaxSpeed => "Max Speed",
            ConfigField::MinOscillation => "Min Oscillation",
            ConfigField::MaxOscillation => "Max Oscillation",
        }
    }

    /// Increment applied per key press.
    pub fn step(self) -> f64 {
        match self {
            ConfigField::LargeDotMaxSize => 0.5,
            ConfigField::SmallDotMaxSize => 0.1,
            _ => 1.0,
        }
    }

    /// Lowest value the panel will set.
    pub fn min_value(self) -> f64 {
        match self {
            ConfigField::CellSize => 1.0,
            _ => 0.0,
        }
    }

    pub fn get(self, config: &DotGridConfig) -> f64 {
        match self {
            ConfigField::CellSize => config.cell_size,
            ConfigField::LargeDotMaxSize => config.large_dot_max_size,
            ConfigField::SmallDotMaxSize => config.small_dot_max_size,
            ConfigField::MinSpeed => config.min_speed,
            ConfigField::MaxSpeed => config.max_speed,
            ConfigField::MinOscillation => config.min_oscillation,
            ConfigField::MaxOscillation => config.max_oscillation,
        }
    }

    pub fn set(self, config: &mut DotGridConfig, value: f64) {
        let slot = match self {
            ConfigField::CellSize => &mut config.cell_size,
            ConfigField::LargeDotMaxSize => &mut config.large_dot_max_size,
            ConfigField::SmallDotMaxSize => &mut config.small_dot_max_size,
            ConfigField::MinSpeed => &mut config.min_speed,
            ConfigField::MaxSpeed => &mut config.max_speed,
            ConfigField::MinOscillation => &mut config.min_oscillation,
            ConfigField::MaxOscillation => &mut config.max_oscillation,
        };
        *slot = value;
    }

    /// Cycle to the next field, wrapping at the end.
    pub fn next(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Cycle to the previous field, wrapping at the start.
    pub fn prev(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }
}
