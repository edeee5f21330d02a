//! A small tweening timeline.
//!
//! Targets are plain slices owned by the caller. The timeline keeps only
//! indices into that slice plus the start and end values resolved when a
//! segment is added, so the same slice must be handed back on every tick.
//! Replacing the slice means building a new timeline.

use dotgrid_core::Dot;

use crate::easing::Easing;

/// Something a timeline can move around.
pub trait Animatable {
    fn position(&self) -> (f64, f64);
    fn set_position(&mut self, position: (f64, f64));
}

impl Animatable for Dot {
    fn position(&self) -> (f64, f64) {
        self.current()
    }

    fn set_position(&mut self, position: (f64, f64)) {
        self.set_current(position);
    }
}

/// How a single property of a target changes over a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue {
    /// Keep the value the target had when the segment was added.
    Hold,
    /// Move by this much from the starting value.
    Relative(f64),
    /// Move to this value.
    Absolute(f64),
}

impl PropertyValue {
    fn resolve(self, from: f64) -> f64 {
        match self {
            PropertyValue::Hold => from,
            PropertyValue::Relative(delta) => from + delta,
            PropertyValue::Absolute(to) => to,
        }
    }
}

/// Per-target tween parameters, resolved once when a segment is added.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    pub x: PropertyValue,
    pub y: PropertyValue,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub easing: Easing,
}

impl TweenSpec {
    /// A tween that leaves the target where it is.
    pub fn hold() -> Self {
        Self {
            x: PropertyValue::Hold,
            y: PropertyValue::Hold,
            duration_ms: 0.0,
            delay_ms: 0.0,
            easing: Easing::Linear,
        }
    }
}

/// Where a segment starts on the timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Offset {
    /// At this absolute time.
    At(f64),
    /// Relative to the end of everything added so far; negative values
    /// overlap the previous segment.
    Relative(f64),
}

/// Playback direction of each pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Normal,
    Reverse,
    /// Forward on even passes, backward on odd ones.
    Alternate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Playing,
    Paused,
    /// Terminal; a stopped timeline never writes to its targets again.
    Stopped,
}

#[derive(Debug, Clone)]
struct Track {
    target: usize,
    from: (f64, f64),
    to: (f64, f64),
    start_ms: f64,
    duration_ms: f64,
    easing: Easing,
}

impl Track {
    /// Linear progress at `cursor_ms`, clamped to `[0, 1]`.
    fn progress(&self, cursor_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return if cursor_ms >= self.start_ms { 1.0 } else { 0.0 };
        }
        ((cursor_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    fn value_at(&self, progress: f64) -> (f64, f64) {
        let eased = self.easing.apply(progress);
        (
            self.from.0 + (self.to.0 - self.from.0) * eased,
            self.from.1 + (self.to.1 - self.from.1) * eased,
        )
    }
}

/// Collects segments before playback starts.
#[derive(Debug, Clone)]
pub struct TimelineBuilder {
    looping: bool,
    direction: Direction,
    autoplay: bool,
    tracks: Vec<Track>,
    end_ms: f64,
}

impl Default for TimelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TimelineBuilder {
    pub fn new() -> Self {
        Self {
            looping: false,
            direction: Direction::Normal,
            autoplay: true,
            tracks: Vec::new(),
            end_ms: 0.0,
        }
    }

    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    /// Add a segment animating `targets[i]` for every `i` in `selection`.
    ///
    /// `resolve` runs once per selected target, right now, against the
    /// target's current position. Indices outside `targets` are skipped.
    pub fn add<T, I, F>(
        mut self,
        targets: &[T],
        selection: I,
        offset: Offset,
        mut resolve: F,
    ) -> Self
    where
        T: Animatable,
        I: IntoIterator<Item = usize>,
        F: FnMut(&T) -> TweenSpec,
    {
        let segment_start = match offset {
            Offset::At(at) => at,
            Offset::Relative(delta) => self.end_ms + delta,
        };

        let mut segment_end = self.end_ms;
        for index in selection {
            let Some(target) = targets.get(index) else {
                continue;
            };
            let spec = resolve(target);
            let from = target.position();
            let track = Track {
                target: index,
                from,
                to: (spec.x.resolve(from.0), spec.y.resolve(from.1)),
                start_ms: segment_start + spec.delay_ms,
                duration_ms: spec.duration_ms.max(0.0),
                easing: spec.easing,
            };
            segment_end = segment_end.max(track.start_ms + track.duration_ms);
            self.tracks.push(track);
        }
        self.end_ms = segment_end;
        self
    }

    pub fn build(self) -> Timeline {
        Timeline {
            tracks: self.tracks,
            looping: self.looping,
            direction: self.direction,
            pass_ms: self.end_ms.max(1.0),
            state: if self.autoplay {
                PlayState::Playing
            } else {
                PlayState::Paused
            },
            origin_ms: None,
            paused_at_ms: None,
        }
    }
}

/// A running set of tweens.
#[derive(Debug, Clone)]
pub struct Timeline {
    tracks: Vec<Track>,
    looping: bool,
    direction: Direction,
    pass_ms: f64,
    state: PlayState,
    origin_ms: Option<f64>,
    paused_at_ms: Option<f64>,
}

impl Timeline {
    pub fn builder() -> TimelineBuilder {
        TimelineBuilder::new()
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    /// Length of one pass in milliseconds.
    pub fn pass_ms(&self) -> f64 {
        self.pass_ms
    }

    /// Number of animated targets.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Resume playback, or start a timeline built without autoplay.
    pub fn play(&mut self, now_ms: f64) {
        if self.state != PlayState::Paused {
            return;
        }
        if let (Some(origin), Some(paused_at)) = (self.origin_ms, self.paused_at_ms.take()) {
            self.origin_ms = Some(origin + (now_ms - paused_at).max(0.0));
        }
        self.state = PlayState::Playing;
    }

    /// Freeze targets where they are.
    pub fn pause(&mut self, now_ms: f64) {
        if self.state != PlayState::Playing {
            return;
        }
        if self.origin_ms.is_some() {
            self.paused_at_ms = Some(now_ms);
        }
        self.state = PlayState::Paused;
    }

    pub fn stop(&mut self) {
        self.state = PlayState::Stopped;
    }

    /// Advance to `now_ms`, write interpolated positions into `targets` and
    /// return the indices of targets whose tween is in progress.
    ///
    /// The first tick of a playing timeline defines its time zero.
    pub fn tick<T: Animatable>(&mut self, now_ms: f64, targets: &mut [T]) -> Vec<usize> {
        if self.state != PlayState::Playing {
            return Vec::new();
        }
        let origin = *self.origin_ms.get_or_insert(now_ms);
        let cursor = self.cursor((now_ms - origin).max(0.0));

        let mut active = Vec::new();
        for track in &self.tracks {
            let Some(target) = targets.get_mut(track.target) else {
                continue;
            };
            let progress = track.progress(cursor);
            target.set_position(track.value_at(progress));
            if progress > 0.0 && progress < 1.0 {
                active.push(track.target);
            }
        }
        active
    }

    /// Timeline cursor for the time elapsed since the origin.
    fn cursor(&self, elapsed_ms: f64) -> f64 {
        let (pass, local) = if !self.looping && elapsed_ms >= self.pass_ms {
            (0, self.pass_ms)
        } else {
            (
                (elapsed_ms / self.pass_ms).floor() as u64,
                elapsed_ms % self.pass_ms,
            )
        };

        let forward = match self.direction {
            Direction::Normal => true,
            Direction::Reverse => false,
            Direction::Alternate => pass % 2 == 0,
        };
        if forward { local } else { self.pass_ms - local }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Point(f64, f64);

    impl Animatable for Point {
        fn position(&self) -> (f64, f64) {
            (self.0, self.1)
        }

        fn set_position(&mut self, position: (f64, f64)) {
            self.0 = position.0;
            self.1 = position.1;
        }
    }

    fn slide(dx: f64, duration_ms: f64, delay_ms: f64) -> TweenSpec {
        TweenSpec {
            x: PropertyValue::Relative(dx),
            y: PropertyValue::Hold,
            duration_ms,
            delay_ms,
            easing: Easing::Linear,
        }
    }

    #[test]
    fn test_linear_tween_midpoint() {
        let mut points = vec![Point(10.0, 5.0)];
        let mut timeline = Timeline::builder()
            .add(&points, [0], Offset::At(0.0), |_| slide(100.0, 1000.0, 0.0))
            .build();

        assert!(timeline.tick(0.0, &mut points).is_empty());
        assert_eq!(points[0], Point(10.0, 5.0));

        assert_eq!(timeline.tick(500.0, &mut points), vec![0]);
        assert_eq!(points[0], Point(60.0, 5.0));

        assert!(timeline.tick(1500.0, &mut points).is_empty());
        assert_eq!(points[0], Point(110.0, 5.0));
    }

    #[test]
    fn test_alternate_loop_returns_to_start() {
        let mut points = vec![Point(0.0, 0.0)];
        let mut timeline = Timeline::builder()
            .looping(true)
            .direction(Direction::Alternate)
            .add(&points, [0], Offset::At(0.0), |_| TweenSpec {
                x: PropertyValue::Hold,
                y: PropertyValue::Relative(-30.0),
                ..slide(0.0, 1000.0, 0.0)
            })
            .build();

        timeline.tick(0.0, &mut points);
        timeline.tick(999.0, &mut points);
        assert!((points[0].1 + 29.97).abs() < 1e-9);

        // Second pass plays backwards.
        timeline.tick(1250.0, &mut points);
        assert!((points[0].1 + 22.5).abs() < 1e-9);
        timeline.tick(2000.0, &mut points);
        assert_eq!(points[0], Point(0.0, 0.0));

        // Third pass is forward again.
        timeline.tick(2500.0, &mut points);
        assert!((points[0].1 + 15.0).abs() < 1e-9);
        assert_eq!(points[0].0, 0.0);
    }

    #[test]
    fn test_non_looping_holds_end() {
        let mut points = vec![Point(0.0, 0.0)];
        let mut timeline = Timeline::builder()
            .add(&points, [0], Offset::At(0.0), |_| slide(10.0, 100.0, 0.0))
            .build();
        timeline.tick(0.0, &mut points);
        timeline.tick(10_000.0, &mut points);
        assert_eq!(points[0], Point(10.0, 0.0));
    }

    #[test]
    fn test_relative_offset_and_delay() {
        let mut points = vec![Point(0.0, 0.0), Point(0.0, 0.0)];
        let timeline = Timeline::builder()
            .add(&points, [0], Offset::At(0.0), |_| slide(1.0, 2000.0, 0.0))
            .add(&points, [1], Offset::Relative(-1000.0), |_| slide(1.0, 500.0, 200.0))
            .build();
        // second segment starts at 2000 - 1000 + 200 = 1200 and ends at 1700
        assert_eq!(timeline.pass_ms(), 2000.0);

        let mut timeline = timeline;
        timeline.tick(0.0, &mut points);
        timeline.tick(1450.0, &mut points);
        assert!((points[1].0 - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_negative_start_is_under_way() {
        let mut points = vec![Point(0.0, 0.0)];
        let mut timeline = Timeline::builder()
            .add(&points, [0], Offset::Relative(-1000.0), |_| slide(100.0, 4000.0, -1000.0))
            .build();
        // starts at -2000, so half done at time zero
        assert_eq!(timeline.pass_ms(), 2000.0);
        assert_eq!(timeline.tick(0.0, &mut points), vec![0]);
        assert!((points[0].0 - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_pause_and_resume() {
        let mut points = vec![Point(0.0, 0.0)];
        let mut timeline = Timeline::builder()
            .add(&points, [0], Offset::At(0.0), |_| slide(100.0, 1000.0, 0.0))
            .build();

        timeline.tick(0.0, &mut points);
        timeline.tick(400.0, &mut points);
        timeline.pause(400.0);
        assert!(timeline.tick(900.0, &mut points).is_empty());
        assert_eq!(points[0].0, 40.0);

        timeline.play(1400.0);
        timeline.tick(1500.0, &mut points);
        assert!((points[0].0 - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_stopped_timeline_writes_nothing() {
        let mut points = vec![Point(0.0, 0.0)];
        let mut timeline = Timeline::builder()
            .add(&points, [0], Offset::At(0.0), |_| slide(100.0, 1000.0, 0.0))
            .build();
        timeline.tick(0.0, &mut points);
        timeline.stop();
        timeline.play(100.0);

        assert!(timeline.tick(500.0, &mut points).is_empty());
        assert_eq!(points[0], Point(0.0, 0.0));
        assert_eq!(timeline.state(), PlayState::Stopped);
    }

    #[test]
    fn test_without_autoplay_waits_for_play() {
        let mut points = vec![Point(0.0, 0.0)];
        let mut timeline = Timeline::builder()
            .autoplay(false)
            .add(&points, [0], Offset::At(0.0), |_| slide(100.0, 1000.0, 0.0))
            .build();

        timeline.tick(500.0, &mut points);
        assert_eq!(points[0].0, 0.0);

        timeline.play(600.0);
        timeline.tick(600.0, &mut points);
        timeline.tick(1100.0, &mut points);
        assert!((points[0].0 - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_range_selection_skipped() {
        let points = vec![Point(0.0, 0.0)];
        let timeline = Timeline::builder()
            .add(&points, [0, 7], Offset::At(0.0), |_| slide(1.0, 10.0, 0.0))
            .build();
        assert_eq!(timeline.len(), 1);
    }
}
