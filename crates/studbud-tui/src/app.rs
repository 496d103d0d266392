use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use studbud_core::{GeneratedPlan, LearningStyle, StudyInputs, Subject, PLAN_FILENAME};
use studbud_service::BlockingPlanRequester;
use tracing::{info, warn};

use crate::components::{HoursSlider, MultiSelect};

/// Form widgets in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Subjects,
    Hours,
    Goals,
    Strengths,
    Weaknesses,
    Preferences,
    Submit,
}

impl Field {
    pub const ALL: &'static [Field] = &[
        Field::Name,
        Field::Subjects,
        Field::Hours,
        Field::Goals,
        Field::Strengths,
        Field::Weaknesses,
        Field::Preferences,
        Field::Submit,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Field {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Field {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn title(self) -> &'static str {
        match self {
            Field::Name => "Student Name",
            Field::Subjects => "Subjects",
            Field::Hours => "Daily Study Hours",
            Field::Goals => "Learning Objectives",
            Field::Strengths => "Strong Areas",
            Field::Weaknesses => "Weak Areas",
            Field::Preferences => "Learning Styles",
            Field::Submit => "Generate Plan",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Form,
    /// Submitted; the event loop calls `finish_generation` after drawing.
    Generating,
    Output {
        plan: GeneratedPlan,
        scroll: u16,
    },
    Failed {
        message: String,
    },
}

pub struct App {
    requester: BlockingPlanRequester,
    output_dir: PathBuf,
    pub mode: Mode,
    pub focus: Field,
    pub name: String,
    pub goals: String,
    pub strengths: String,
    pub weaknesses: String,
    pub subjects: MultiSelect<Subject>,
    pub preferences: MultiSelect<LearningStyle>,
    pub hours: HoursSlider,
    pub status_message: Option<String>,
    /// Draw `status_message` as an error.
    pub status_is_error: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(requester: BlockingPlanRequester, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            requester,
            output_dir: output_dir.into(),
            mode: Mode::Form,
            focus: Field::Name,
            name: String::new(),
            goals: String::new(),
            strengths: String::new(),
            weaknesses: String::new(),
            subjects: MultiSelect::new(Subject::ALL),
            preferences: MultiSelect::new(LearningStyle::ALL),
            hours: HoursSlider::default(),
            status_message: None,
            status_is_error: false,
            should_quit: false,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn is_generating(&self) -> bool {
        self.mode == Mode::Generating
    }

    /// The request record built from the current widget values.
    pub fn inputs(&self) -> StudyInputs {
        StudyInputs::from_selections(
            self.name.clone(),
            &self.subjects.selected(),
            self.hours.value(),
            self.goals.clone(),
            self.strengths.clone(),
            self.weaknesses.clone(),
            &self.preferences.selected(),
        )
    }

    /// Run the pending generation call. Blocks until the model answers.
    pub fn finish_generation(&mut self) {
        if !self.is_generating() {
            return;
        }
        let inputs = self.inputs();
        self.mode = match self.requester.generate_plan(&inputs) {
            Ok(plan) => {
                info!(chars = plan.as_str().len(), "plan ready");
                Mode::Output { plan, scroll: 0 }
            }
            Err(e) => {
                warn!("plan generation failed: {e}");
                Mode::Failed {
                    message: e.user_message(),
                }
            }
        };
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        self.status_message = None;
        self.status_is_error = false;

        match &self.mode.clone() {
            Mode::Form => self.handle_form(key),
            Mode::Generating => {}
            Mode::Output { plan, scroll } => self.handle_output(key, plan.clone(), *scroll),
            // Any key dismisses the error; the form keeps its values.
            Mode::Failed { .. } => self.mode = Mode::Form,
        }
    }

    fn handle_form(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            _ => match self.focus {
                Field::Name => edit_text(&mut self.name, key),
                Field::Goals => edit_text(&mut self.goals, key),
                Field::Strengths => edit_text(&mut self.strengths, key),
                Field::Weaknesses => edit_text(&mut self.weaknesses, key),
                Field::Subjects => match key.code {
                    KeyCode::Left => self.subjects.move_left(),
                    KeyCode::Right => self.subjects.move_right(),
                    KeyCode::Char(' ') | KeyCode::Enter => self.subjects.toggle(),
                    _ => {}
                },
                Field::Preferences => match key.code {
                    KeyCode::Left => self.preferences.move_left(),
                    KeyCode::Right => self.preferences.move_right(),
                    KeyCode::Char(' ') | KeyCode::Enter => self.preferences.toggle(),
                    _ => {}
                },
                Field::Hours => match key.code {
                    KeyCode::Left => self.hours.decrement(),
                    KeyCode::Right => self.hours.increment(),
                    _ => {}
                },
                Field::Submit => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                        info!(model = self.requester.model(), "generating plan");
                        self.mode = Mode::Generating;
                    }
                }
            },
        }
    }

    fn handle_output(&mut self, key: KeyEvent, plan: GeneratedPlan, mut scroll: u16) {
        match key.code {
            KeyCode::Esc => self.mode = Mode::Form,
            KeyCode::Char('s') => {
                self.save_plan(&plan);
                self.mode = Mode::Output { plan, scroll };
            }
            KeyCode::Char('j') | KeyCode::Down => {
                scroll = scroll.saturating_add(1);
                self.mode = Mode::Output { plan, scroll };
            }
            KeyCode::Char('k') | KeyCode::Up => {
                scroll = scroll.saturating_sub(1);
                self.mode = Mode::Output { plan, scroll };
            }
            KeyCode::PageDown => {
                scroll = scroll.saturating_add(10);
                self.mode = Mode::Output { plan, scroll };
            }
            KeyCode::PageUp => {
                scroll = scroll.saturating_sub(10);
                self.mode = Mode::Output { plan, scroll };
            }
            _ => {}
        }
    }

    fn save_plan(&mut self, plan: &GeneratedPlan) {
        let path = self.output_dir.join(PLAN_FILENAME);
        match std::fs::write(&path, plan.as_str()) {
            Ok(()) => {
                info!(path = %path.display(), "plan saved");
                self.status_message = Some(format!("Saved to {}", path.display()));
            }
            Err(e) => {
                warn!(path = %path.display(), "could not save plan: {e}");
                self.status_message = Some(format!("Error: {e}"));
                self.status_is_error = true;
            }
        }
    }

    // -- Rendering --

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_title_bar(frame, layout[0]);
        self.render_form(frame, layout[1]);
        self.render_status_bar(frame, layout[2]);

        match &self.mode {
            Mode::Form => {}
            Mode::Generating => self.render_generating(frame, area),
            Mode::Output { plan, scroll } => self.render_scrollable_text(
                frame,
                " Your Study Plan ",
                plan.as_str(),
                *scroll,
                area,
            ),
            Mode::Failed { message } => self.render_error(frame, message, area),
        }
    }

    fn render_title_bar(&self, frame: &mut Frame, area: Rect) {
        let title = Line::from(vec![
            Span::styled(" Studbud ", Style::default().bold().fg(Color::Cyan)),
            Span::raw("| "),
            Span::styled("AI Study Planner", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!(" ({})", self.requester.model()),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(title, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        if let Some(ref msg) = self.status_message {
            let color = if self.status_is_error {
                Color::Red
            } else {
                Color::Green
            };
            let line = Line::from(Span::styled(format!(" {msg}"), Style::default().fg(color)));
            frame.render_widget(line, area);
            return;
        }

        let hints = match &self.mode {
            Mode::Form => match self.focus {
                Field::Subjects | Field::Preferences => vec![
                    ("Tab/Shift-Tab", "field"),
                    ("←/→", "option"),
                    ("Space", "toggle"),
                    ("Ctrl-C", "quit"),
                ],
                Field::Hours => vec![
                    ("Tab/Shift-Tab", "field"),
                    ("←/→", "hours"),
                    ("Ctrl-C", "quit"),
                ],
                Field::Submit => vec![
                    ("Tab/Shift-Tab", "field"),
                    ("Enter", "generate"),
                    ("Ctrl-C", "quit"),
                ],
                _ => vec![("Tab/Shift-Tab", "field"), ("Ctrl-C", "quit")],
            },
            Mode::Generating => vec![],
            Mode::Output { .. } => vec![
                ("j/k", "scroll"),
                ("s", "save"),
                ("Esc", "back"),
                ("Ctrl-C", "quit"),
            ],
            Mode::Failed { .. } => vec![("any key", "dismiss")],
        };

        let spans: Vec<Span> = hints
            .into_iter()
            .flat_map(|(k, desc)| {
                vec![
                    Span::styled(format!(" {k}"), Style::default().bold().fg(Color::Yellow)),
                    Span::styled(format!(":{desc}"), Style::default().fg(Color::DarkGray)),
                ]
            })
            .collect();
        frame.render_widget(Line::from(spans), area);
    }

    fn render_form(&self, frame: &mut Frame, area: Rect) {
        let mut constraints = vec![Constraint::Length(3); Field::ALL.len()];
        constraints.push(Constraint::Min(0));
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (i, &field) in Field::ALL.iter().enumerate() {
            let focused = self.mode == Mode::Form && self.focus == field;
            let row = rows[i];
            match field {
                Field::Name => self.render_text_input(frame, field, &self.name, focused, row),
                Field::Goals => self.render_text_input(frame, field, &self.goals, focused, row),
                Field::Strengths => {
                    self.render_text_input(frame, field, &self.strengths, focused, row)
                }
                Field::Weaknesses => {
                    self.render_text_input(frame, field, &self.weaknesses, focused, row)
                }
                Field::Subjects => self.subjects.render(frame, row, field.title(), focused),
                Field::Preferences => self.preferences.render(frame, row, field.title(), focused),
                Field::Hours => self.hours.render(frame, row, field.title(), focused),
                Field::Submit => self.render_button(frame, focused, row),
            }
        }
    }

    fn render_text_input(
        &self,
        frame: &mut Frame,
        field: Field,
        value: &str,
        focused: bool,
        area: Rect,
    ) {
        let border = if focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .title(format!(" {} ", field.title()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let text = if focused {
            format!("{value}_")
        } else {
            value.to_string()
        };
        frame.render_widget(Paragraph::new(text).block(block), area);
    }

    fn render_button(&self, frame: &mut Frame, focused: bool, area: Rect) {
        let button = centered_rect(30, 100, area);
        let style = if focused {
            Style::default().bold().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(" Generate Plan ", style)))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(paragraph, button);
    }

    fn render_generating(&self, frame: &mut Frame, area: Rect) {
        let popup = centered_rect(40, 20, area);
        frame.render_widget(Clear, popup);
        let block = Block::default()
            .title(" Generating ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        let paragraph = Paragraph::new("Creating your study plan...")
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, popup);
    }

    fn render_error(&self, frame: &mut Frame, message: &str, area: Rect) {
        let popup = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup);
        let block = Block::default()
            .title(" Error ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red));
        let lines = vec![
            Line::from(Span::styled(message, Style::default().fg(Color::Red))),
            Line::from(""),
            Line::from(Span::styled(
                "Press any key to return to the form",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, popup);
    }

    fn render_scrollable_text(
        &self,
        frame: &mut Frame,
        title: &str,
        content: &str,
        scroll: u16,
        area: Rect,
    ) {
        let popup = centered_rect(80, 80, area);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let paragraph = Paragraph::new(content)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));
        frame.render_widget(paragraph, popup);
    }
}

fn edit_text(value: &mut String, key: KeyEvent) {
    match key.code {
        KeyCode::Backspace => {
            value.pop();
        }
        KeyCode::Char(c) => value.push(c),
        _ => {}
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
