//! Application state and event loop.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use dotgrid_config::AppConfig;
use dotgrid_field::{CanvasSurface, DotField, PlayState};
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{DefaultTerminal, Frame};

use crate::panel::{PanelStats, TuningPanel};
use crate::resize::{Debouncer, RESIZE_QUIET};

/// How long a status message stays in the panel.
const STATUS_TTL: Duration = Duration::from_secs(3);

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Settings, edited live through the panel.
    config: AppConfig,
    /// Where `s` saves the config.
    config_path: Option<PathBuf>,
    /// Dots and their timeline.
    field: DotField,
    /// Terminal drawing surface.
    surface: CanvasSurface,
    /// Tuning overlay.
    panel: TuningPanel,
    /// Pending terminal size from resize events.
    resize: Debouncer<(u16, u16)>,
    /// Random source for grid generation.
    rng: StdRng,
    /// Time zero for the animation clock.
    started: Instant,
    /// Transient message shown in the panel.
    status: Option<(String, Instant)>,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: AppConfig, config_path: Option<PathBuf>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            running: false,
            surface: CanvasSurface::new(config.display.pixel_scale()),
            panel: TuningPanel::new(config.display.show_panel),
            config,
            config_path,
            field: DotField::new(),
            resize: Debouncer::new(RESIZE_QUIET),
            rng,
            started: Instant::now(),
            status: None,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let size = terminal.size()?;
        self.mount(size.width, size.height);

        self.running = true;
        while self.running {
            let now_ms = self.elapsed_ms();
            self.field.tick(now_ms, &mut self.surface);
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
            if let Some((cols, rows)) = self.resize.poll(Instant::now()) {
                self.regenerate(cols, rows);
            }
        }

        self.field.teardown();
        Ok(())
    }

    /// Initial sizing and grid generation.
    pub fn mount(&mut self, cols: u16, rows: u16) {
        tracing::info!(cols, rows, "mounting");
        self.regenerate(cols, rows);
    }

    /// Measure the surface for `cols × rows` cells and rebuild the grid.
    pub fn regenerate(&mut self, cols: u16, rows: u16) {
        let viewport = self.surface.resize(cols, rows);
        self.field
            .regenerate(&self.config.grid, viewport, &mut self.rng);
    }

    /// Renders the user interface.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(self.surface.widget(), area);

        let status = self
            .status
            .as_ref()
            .filter(|(_, at)| at.elapsed() < STATUS_TTL)
            .map(|(message, _)| message.as_str());
        self.panel
            .render(frame, area, &self.config.grid, self.stats(), status);
    }

    fn stats(&self) -> PanelStats {
        PanelStats {
            dots: self.field.dots().len(),
            animated: self.field.animated_count(),
            active: self.field.active_count(),
            paused: self.field.play_state() == Some(PlayState::Paused),
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits at most one frame, or less when a resize is about to fire.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let frame = self.config.display.frame_interval();
        let timeout = self
            .resize
            .remaining(Instant::now())
            .map_or(frame, |left| left.min(frame));

        if event::poll(timeout)? {
            self.on_event(event::read()?);
            while event::poll(Duration::ZERO)? {
                self.on_event(event::read()?);
            }
        }
        Ok(())
    }

    fn on_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
            Event::Resize(cols, rows) => self.resize.push((cols, rows), Instant::now()),
            _ => {}
        }
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('d')) => self.panel.toggle(),
            (_, KeyCode::Char('p')) => self.field.toggle_pause(self.elapsed_ms()),
            (_, KeyCode::Char('r')) => self.regenerate_current(),
            (_, KeyCode::Char('s')) => self.save_config(),
            (_, KeyCode::Up | KeyCode::Char('k')) if self.panel.is_visible() => {
                self.panel.select_prev()
            }
            (_, KeyCode::Down | KeyCode::Char('j')) if self.panel.is_visible() => {
                self.panel.select_next()
            }
            (_, KeyCode::Left | KeyCode::Char('h')) if self.panel.is_visible() => {
                self.panel.adjust(&mut self.config.grid, -1);
            }
            (_, KeyCode::Right | KeyCode::Char('l')) if self.panel.is_visible() => {
                self.panel.adjust(&mut self.config.grid, 1);
            }
            _ => {}
        }
    }

    /// Rebuild the grid at the current size with the edited config.
    fn regenerate_current(&mut self) {
        let mut surface_size = None;
        if let Some(viewport) = self.field.viewport() {
            let (sx, sy) = self.surface.scale();
            surface_size = Some((
                (viewport.width / sx).round() as u16,
                (viewport.height / sy).round() as u16,
            ));
        }
        match surface_size {
            Some((cols, rows)) => self.regenerate(cols, rows),
            None => self.set_status("nothing to regenerate"),
        }
    }

    fn save_config(&mut self) {
        let Some(path) = self.config_path.clone() else {
            self.set_status("no config path");
            return;
        };
        match self.config.save_to(&path) {
            Ok(()) => self.set_status("config saved"),
            Err(err) => {
                tracing::warn!(error = %err, "saving config failed");
                self.set_status("save failed, see log");
            }
        }
    }

    fn set_status(&mut self, message: &str) {
        self.status = Some((message.to_string(), Instant::now()));
    }

    fn elapsed_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
