//! Tuning panel for the generation scalars.

use dotgrid_core::{ConfigField, DotGridConfig};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Width of the panel in terminal cells.
const PANEL_WIDTH: u16 = 34;

/// Counters shown under the scalars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelStats {
    pub dots: usize,
    pub animated: usize,
    pub active: usize,
    pub paused: bool,
}

/// Overlay listing the seven scalars with one of them selected.
///
/// Editing a value only changes the config; the grid is rebuilt on the next
/// resize or explicit regenerate.
#[derive(Debug, Default)]
pub struct TuningPanel {
    /// Whether the panel is drawn.
    visible: bool,
    /// Field the arrow keys edit.
    selected: ConfigField,
}

impl TuningPanel {
    pub fn new(visible: bool) -> Self {
        Self {
            visible,
            selected: ConfigField::default(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn selected(&self) -> ConfigField {
        self.selected
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn select_next(&mut self) {
        self.selected = self.selected.next();
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.prev();
    }

    /// Step the selected field and return its new value.
    pub fn adjust(&self, config: &mut DotGridConfig, steps: i32) -> f64 {
        let value = config.adjust(self.selected, steps);
        tracing::debug!(field = self.selected.label(), value, "config changed");
        value
    }

    /// Draw the panel in the top-right corner of `area`.
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        config: &DotGridConfig,
        stats: PanelStats,
        status: Option<&str>,
    ) {
        if !self.visible {
            return;
        }

        let height = ConfigField::ALL.len() as u16 + 6;
        let [_, column] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(PANEL_WIDTH)]).areas(area);
        let [panel, _] =
            Layout::vertical([Constraint::Length(height), Constraint::Fill(1)]).areas(column);

        let mut lines: Vec<Line> = ConfigField::ALL
            .iter()
            .map(|&field| self.field_line(field, config))
            .collect();

        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::raw(format!("dots {}", stats.dots)).dark_gray(),
            Span::raw(format!("  moving {}", stats.animated)).dark_gray(),
            Span::raw(format!("  active {}", stats.active)).dark_gray(),
        ]));
        lines.push(match status {
            Some(message) => Line::from(message.to_string()).yellow(),
            None if stats.paused => Line::from("paused").yellow(),
            None => Line::from("r regenerate  s save").dark_gray(),
        });

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" tuning ")
            .border_style(Style::new().fg(Color::DarkGray));

        frame.render_widget(Clear, panel);
        frame.render_widget(Paragraph::new(lines).block(block), panel);
    }

    fn field_line(&self, field: ConfigField, config: &DotGridConfig) -> Line<'static> {
        let text = format!("{:<18}{:>10}", field.label(), format_value(field.get(config)));
        if field == self.selected {
            Line::from(format!("> {text}")).bold().fg(Color::Green)
        } else {
            Line::from(format!("  {text}"))
        }
    }
}

/// Integers print without decimals, everything else with two.
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}
