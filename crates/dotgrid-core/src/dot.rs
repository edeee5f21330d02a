//! Dot descriptors produced by the grid generator.

/// Axis a dot oscillates along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    /// Whether the dot moves up and down.
    pub fn is_vertical(self) -> bool {
        matches!(self, Axis::Vertical)
    }
}

/// Motion parameters for an animated dot.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationProfile {
    /// The single axis the dot moves along.
    pub axis: Axis,
    /// Integer-valued speed drawn from the configured range.
    pub speed: f64,
    /// Move towards positive coordinates instead of negative ones.
    pub reverse: bool,
    /// Multiplier applied to the cell size to get the displacement.
    pub oscillation: i64,
    /// Endpoint drawn at generation time. Not read by the animation path.
    pub target_offset: (f64, f64),
    /// Delay before the tween starts, in milliseconds.
    pub delay_ms: f64,
    /// Tween duration, in milliseconds.
    pub duration_ms: f64,
}

impl AnimationProfile {
    /// Signed displacement along the moving axis for the given cell size.
    pub fn displacement(&self, cell_size: f64) -> f64 {
        let magnitude = cell_size * self.oscillation as f64;
        if self.reverse { magnitude } else { -magnitude }
    }
}

/// One grid cell's visual element.
///
/// `position` and `size` are fixed at creation. Only the current draw
/// coordinate changes afterwards, written by the timeline, so a redraw is the
/// same operation for animated and static dots.
#[derive(Debug, Clone, PartialEq)]
pub struct Dot {
    position: (f64, f64),
    size: f64,
    current: (f64, f64),
    is_large: bool,
    animation: Option<AnimationProfile>,
}

impl Dot {
    /// Create a dot whose current coordinate starts at `position`.
    pub fn new(
        position: (f64, f64),
        size: f64,
        is_large: bool,
        animation: Option<AnimationProfile>,
    ) -> Self {
        Self {
            position,
            size,
            current: position,
            is_large,
            animation,
        }
    }

    /// Top-left coordinate assigned at generation.
    pub fn position(&self) -> (f64, f64) {
        self.position
    }

    /// Width and height (always equal).
    pub fn size(&self) -> (f64, f64) {
        (self.size, self.size)
    }

    /// Coordinate the dot is drawn at right now.
    pub fn current(&self) -> (f64, f64) {
        self.current
    }

    /// Store a new draw coordinate.
    pub fn set_current(&mut self, current: (f64, f64)) {
        self.current = current;
    }

    pub fn is_large(&self) -> bool {
        self.is_large
    }

    pub fn is_animated(&self) -> bool {
        self.animation.is_some()
    }

    pub fn animation(&self) -> Option<&AnimationProfile> {
        self.animation.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(reverse: bool) -> AnimationProfile {
        AnimationProfile {
            axis: Axis::Horizontal,
            speed: 2.0,
            reverse,
            oscillation: 3,
            target_offset: (30.0, 45.0),
            delay_ms: 500.0,
            duration_ms: 2500.0,
        }
    }

    #[test]
    fn test_new_dot_starts_at_position() {
        let dot = Dot::new((4.0, 9.0), 0.5, false, None);
        assert_eq!(dot.current(), (4.0, 9.0));
        assert_eq!(dot.size(), (0.5, 0.5));
        assert!(!dot.is_animated());
    }

    #[test]
    fn test_set_current_keeps_position() {
        let mut dot = Dot::new((4.0, 9.0), 0.5, false, Some(profile(false)));
        dot.set_current((10.0, 9.0));
        assert_eq!(dot.position(), (4.0, 9.0));
        assert_eq!(dot.current(), (10.0, 9.0));
    }

    #[test]
    fn test_displacement_sign_follows_reverse() {
        assert_eq!(profile(true).displacement(15.0), 45.0);
        assert_eq!(profile(false).displacement(15.0), -45.0);
    }
}
