use std::fmt::Display;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// A horizontal list of toggleable options with a cursor.
pub struct MultiSelect<T: 'static> {
    options: &'static [T],
    selected: Vec<bool>,
    cursor: usize,
}

impl<T: Copy + PartialEq + Display + 'static> MultiSelect<T> {
    pub fn new(options: &'static [T]) -> Self {
        Self {
            options,
            selected: vec![false; options.len()],
            cursor: 0,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor + 1 < self.options.len() {
            self.cursor += 1;
        }
    }

    /// Toggle the option under the cursor.
    pub fn toggle(&mut self) {
        if let Some(flag) = self.selected.get_mut(self.cursor) {
            *flag = !*flag;
        }
    }

    pub fn is_selected(&self, option: T) -> bool {
        self.options
            .iter()
            .zip(&self.selected)
            .any(|(o, &on)| on && *o == option)
    }

    /// Selected options in catalogue order.
    pub fn selected(&self) -> Vec<T> {
        self.options
            .iter()
            .zip(&self.selected)
            .filter(|&(_, &on)| on)
            .map(|(o, _)| *o)
            .collect()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, title: &str, focused: bool) {
        let mut spans = Vec::new();
        for (i, (option, &on)) in self.options.iter().zip(&self.selected).enumerate() {
            let mark = if on { "[x]" } else { "[ ]" };
            let mut style = Style::default();
            if on {
                style = style.fg(Color::Green);
            }
            if focused && i == self.cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(format!("{mark} {option}"), style));
            spans.push(Span::raw("  "));
        }

        let border = if focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }
}
