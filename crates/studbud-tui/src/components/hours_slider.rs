use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use studbud_core::{DEFAULT_HOURS, MAX_HOURS, MIN_HOURS};

/// Daily study hours, stepped one hour at a time and kept within
/// `MIN_HOURS..=MAX_HOURS`.
pub struct HoursSlider {
    value: u8,
}

impl Default for HoursSlider {
    fn default() -> Self {
        Self {
            value: DEFAULT_HOURS,
        }
    }
}

impl HoursSlider {
    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn increment(&mut self) {
        self.value = (self.value + 1).min(MAX_HOURS);
    }

    pub fn decrement(&mut self) {
        self.value = self.value.saturating_sub(1).max(MIN_HOURS);
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, title: &str, focused: bool) {
        let filled = usize::from(self.value);
        let empty = usize::from(MAX_HOURS) - filled;
        let line = Line::from(vec![
            Span::raw(format!("{MIN_HOURS} ")),
            Span::styled("█".repeat(filled * 3), Style::default().fg(Color::Cyan)),
            Span::styled("░".repeat(empty * 3), Style::default().fg(Color::DarkGray)),
            Span::raw(format!(" {MAX_HOURS}   ")),
            Span::styled(
                format!("{} h/day", self.value),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]);

        let border = if focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        frame.render_widget(Paragraph::new(line).block(block), area);
    }
}
