//! Dot field state: the dot list plus the timeline animating it.

use dotgrid_core::{Dot, DotGridConfig, RandomSource, Viewport};

use crate::color::dot_color;
use crate::easing::Easing;
use crate::grid;
use crate::surface::Surface;
use crate::timeline::{Direction, Offset, PlayState, PropertyValue, Timeline, TweenSpec};

/// Shift applied to the animated segment and to every per-dot delay.
const STAGGER_MS: f64 = 1000.0;

/// Owns the dots and the timeline animating them.
///
/// The dot list is replaced wholesale on every regeneration and the previous
/// timeline is stopped before a new one is built, so no tween ever points at
/// a dot from an older grid.
#[derive(Debug, Default)]
pub struct DotField {
    /// Current dot list.
    dots: Vec<Dot>,
    /// Timeline animating the animated subset of `dots`.
    timeline: Option<Timeline>,
    /// Config the current grid was generated with.
    config: DotGridConfig,
    /// Area the current grid covers.
    viewport: Option<Viewport>,
    /// Incremented on every regeneration.
    generation: u64,
    /// Targets in progress at the last tick.
    active: usize,
}

impl DotField {
    /// Create an empty field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the grid for `area` and restart the animation.
    pub fn regenerate<R: RandomSource + ?Sized>(
        &mut self,
        config: &DotGridConfig,
        area: Option<Viewport>,
        rng: &mut R,
    ) {
        self.config = *config;
        self.viewport = area;
        self.dots = grid::generate(config, area, rng);
        self.generation += 1;
        tracing::info!(
            generation = self.generation,
            dots = self.dots.len(),
            animated = self.animated_count(),
            "regenerated dot field"
        );
        self.restart();
    }

    /// Stop the running timeline and start a fresh one over the animated dots.
    pub fn restart(&mut self) {
        self.teardown();
        for dot in &mut self.dots {
            dot.set_current(dot.position());
        }

        let cell_size = self.config.cell_size;
        let animated = self
            .dots
            .iter()
            .enumerate()
            .filter(|(_, dot)| dot.is_animated())
            .map(|(idx, _)| idx);

        let timeline = Timeline::builder()
            .looping(true)
            .direction(Direction::Alternate)
            .autoplay(true)
            .add(&self.dots, animated, Offset::Relative(-STAGGER_MS), |dot| {
                let Some(profile) = dot.animation() else {
                    return TweenSpec::hold();
                };
                let shift = PropertyValue::Relative(profile.displacement(cell_size));
                let (x, y) = if profile.axis.is_vertical() {
                    (PropertyValue::Hold, shift)
                } else {
                    (shift, PropertyValue::Hold)
                };
                TweenSpec {
                    x,
                    y,
                    duration_ms: profile.duration_ms,
                    delay_ms: profile.delay_ms - STAGGER_MS,
                    easing: Easing::EaseInOutExpo,
                }
            })
            .build();

        tracing::debug!(
            targets = timeline.len(),
            pass_ms = timeline.pass_ms(),
            "started timeline"
        );
        self.timeline = Some(timeline);
    }

    /// Advance the animation to `now_ms` and repaint every dot.
    ///
    /// Returns the number of dots currently mid-tween.
    pub fn tick<S: Surface + ?Sized>(&mut self, now_ms: f64, surface: &mut S) -> usize {
        self.active = match self.timeline.as_mut() {
            Some(timeline) => timeline.tick(now_ms, &mut self.dots).len(),
            None => 0,
        };
        self.redraw(surface);
        self.active
    }

    /// Clear `surface` and draw every dot at its current coordinate.
    ///
    /// Does nothing while the surface cannot be measured.
    pub fn redraw<S: Surface + ?Sized>(&self, surface: &mut S) {
        if surface.size().is_none() {
            return;
        }
        surface.clear();
        for dot in &self.dots {
            let (x, y) = dot.current();
            let (w, h) = dot.size();
            surface.fill_rect(x, y, w, h, dot_color(dot, &self.config));
        }
    }

    /// Pause a playing timeline or resume a paused one.
    pub fn toggle_pause(&mut self, now_ms: f64) {
        if let Some(timeline) = self.timeline.as_mut() {
            match timeline.state() {
                PlayState::Playing => timeline.pause(now_ms),
                PlayState::Paused => timeline.play(now_ms),
                PlayState::Stopped => {}
            }
        }
    }

    /// Stop and drop the timeline.
    pub fn teardown(&mut self) {
        if let Some(mut timeline) = self.timeline.take() {
            timeline.stop();
        }
        self.active = 0;
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn animated_count(&self) -> usize {
        self.dots.iter().filter(|dot| dot.is_animated()).count()
    }

    /// Dots mid-tween at the last tick.
    pub fn active_count(&self) -> usize {
        self.active
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    pub fn play_state(&self) -> Option<PlayState> {
        self.timeline.as_ref().map(Timeline::state)
    }
}
