//! Sleep assessment form.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::application::AssessmentController;
use crate::domain::{Field, FieldKind, SurveyRecord};
use crate::tui::styles::SleepTheme;

use super::result::render_result_panel;

const SECTIONS: [(&str, &[Field]); 3] = [
    (
        "Personal Information",
        &[Field::Gender, Field::Age, Field::Occupation],
    ),
    (
        "Sleep & Lifestyle",
        &[
            Field::SleepDuration,
            Field::QualityOfSleep,
            Field::ActivityLevel,
            Field::StressLevel,
        ],
    ),
    (
        "Health Metrics",
        &[
            Field::BmiCategory,
            Field::BloodPressure,
            Field::HeartRate,
            Field::DailySteps,
        ],
    ),
];

/// Cursor over the form; values live in the controller.
#[derive(Debug, Default)]
pub struct AssessmentFormState {
    pub selected_field: usize,
}

impl AssessmentFormState {
    #[must_use]
    pub fn selected(&self) -> Field {
        Field::ALL[self.selected_field % Field::ALL.len()]
    }

    pub fn next_field(&mut self) {
        self.selected_field = (self.selected_field + 1) % Field::ALL.len();
    }

    pub fn prev_field(&mut self) {
        if self.selected_field == 0 {
            self.selected_field = Field::ALL.len() - 1;
        } else {
            self.selected_field -= 1;
        }
    }

    /// New text after typing `c` into the selected field, if accepted.
    #[must_use]
    pub fn input_char(&self, record: &SurveyRecord, c: char) -> Option<String> {
        let field = self.selected();
        if field.kind() != FieldKind::Text {
            return None;
        }
        if !(c.is_ascii_digit() || matches!(c, '.' | '/' | '-')) {
            return None;
        }
        let mut value = record.value(field);
        value.push(c);
        Some(value)
    }

    /// New text after deleting the last character.
    #[must_use]
    pub fn delete_char(&self, record: &SurveyRecord) -> Option<String> {
        let field = self.selected();
        if field.kind() != FieldKind::Text {
            return None;
        }
        let mut value = record.value(field);
        value.pop()?;
        Some(value)
    }

    /// Value that clears the selected field; scales keep their value.
    #[must_use]
    pub fn clear_field(&self) -> Option<String> {
        match self.selected().kind() {
            FieldKind::Text | FieldKind::Choice(_) => Some(String::new()),
            FieldKind::Scale { .. } => None,
        }
    }

    /// Cycle a choice or step a scale.
    #[must_use]
    pub fn step(&self, record: &SurveyRecord, forward: bool) -> Option<String> {
        let field = self.selected();
        match field.kind() {
            FieldKind::Choice(options) => {
                // Position 0 is "no selection".
                let current = record.value(field);
                let pos = options
                    .iter()
                    .position(|o| *o == current)
                    .map_or(0, |i| i + 1);
                let len = options.len() + 1;
                let next = if forward {
                    (pos + 1) % len
                } else {
                    (pos + len - 1) % len
                };
                Some(if next == 0 {
                    String::new()
                } else {
                    options[next - 1].to_string()
                })
            }
            FieldKind::Scale { .. }
                if field == Field::QualityOfSleep && record.sleep_quality_locked() =>
            {
                None
            }
            FieldKind::Scale { min, max } => {
                let current: u16 = record.value(field).parse().ok()?;
                let next = if forward {
                    current.saturating_add(1).min(max)
                } else {
                    current.saturating_sub(1).max(min)
                };
                (next != current).then(|| next.to_string())
            }
            FieldKind::Text => None,
        }
    }
}

/// Render the assessment screen.
pub fn render_assessment(
    f: &mut Frame,
    area: Rect,
    state: &AssessmentFormState,
    controller: &AssessmentController,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Form + result
            Constraint::Length(3), // Submit + key hints
        ])
        .split(area);

    render_form_header(f, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_form_fields(f, body[0], state, controller);
    render_result_panel(f, body[1], controller);
    render_form_footer(f, chunks[2], controller);
}

fn render_form_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", SleepTheme::text()),
        Span::styled("Sleep Assessment Form", SleepTheme::title()),
        Span::styled(" │ Lifestyle & Health Survey", SleepTheme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(SleepTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_form_fields(
    f: &mut Frame,
    area: Rect,
    state: &AssessmentFormState,
    controller: &AssessmentController,
) {
    let record = controller.record();
    let errors = controller.errors();
    let selected = state.selected();

    let mut lines = Vec::new();
    for (section, fields) in SECTIONS {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(section, SleepTheme::subtitle())));

        for &field in fields {
            lines.push(field_line(field, record, field == selected));
            if let Some(message) = errors.get(field) {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(format!("! {message}"), SleepTheme::danger()),
                ]));
            }
        }
    }

    let form = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(SleepTheme::border()),
    );

    f.render_widget(form, area);
}

fn field_line(field: Field, record: &SurveyRecord, is_selected: bool) -> Line<'static> {
    let marker = if is_selected {
        Span::styled(" ▸ ", SleepTheme::focused())
    } else {
        Span::raw("   ")
    };
    let label_style = if is_selected {
        SleepTheme::focused()
    } else {
        SleepTheme::text_secondary()
    };
    let label = Span::styled(format!("{:<24}", format!("{}:", field.label())), label_style);

    let value = record.value(field);
    let mut spans = vec![marker, label];
    match field.kind() {
        FieldKind::Scale { .. }
            if field == Field::QualityOfSleep && record.sleep_quality_locked() =>
        {
            spans.push(Span::styled(format!("  {value}  "), SleepTheme::text_muted()));
            spans.push(Span::styled(
                "  (enter sleep duration first)",
                SleepTheme::text_muted(),
            ));
        }
        FieldKind::Scale { .. } => {
            spans.push(Span::styled(format!("◂ {value} ▸"), SleepTheme::text()));
            spans.push(Span::styled(
                format!("  ({})", field.hint()),
                SleepTheme::text_muted(),
            ));
        }
        FieldKind::Choice(_) if value.is_empty() => {
            spans.push(Span::styled("Select", SleepTheme::text_muted()));
            if is_selected {
                spans.push(Span::styled(
                    format!("  ({})", field.hint()),
                    SleepTheme::text_muted(),
                ));
            }
        }
        FieldKind::Choice(_) => {
            spans.push(Span::styled(value, SleepTheme::text()));
        }
        FieldKind::Text if value.is_empty() => {
            spans.push(Span::styled(field.hint(), SleepTheme::text_muted()));
        }
        FieldKind::Text => {
            spans.push(Span::styled(value, SleepTheme::text()));
        }
    }
    if is_selected && field.kind() == FieldKind::Text {
        spans.push(Span::styled("▌", SleepTheme::cursor()));
    }

    Line::from(spans)
}

fn render_form_footer(f: &mut Frame, area: Rect, controller: &AssessmentController) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(18), Constraint::Min(0)])
        .split(area);

    let label = if controller.is_loading() {
        "Predicting..."
    } else {
        "Predict"
    };
    let button = Paragraph::new(Line::from(Span::styled(
        format!(" {label} "),
        SleepTheme::button(controller.can_submit()),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(SleepTheme::border()),
    );
    f.render_widget(button, columns[0]);

    let hints = Paragraph::new(Line::from(vec![
        Span::styled("[↑↓] ", SleepTheme::key_hint()),
        Span::styled("Navigate ", SleepTheme::key_desc()),
        Span::styled("[◂▸] ", SleepTheme::key_hint()),
        Span::styled("Adjust ", SleepTheme::key_desc()),
        Span::styled("[Enter] ", SleepTheme::key_hint()),
        Span::styled("Predict ", SleepTheme::key_desc()),
        Span::styled("[S] ", SleepTheme::key_hint()),
        Span::styled("Sample Data ", SleepTheme::key_desc()),
        Span::styled("[Esc] ", SleepTheme::key_hint()),
        Span::styled("Home", SleepTheme::key_desc()),
    ]))
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(SleepTheme::border()),
    );
    f.render_widget(hints, columns[1]);
}
