//! Prediction result and sleep comparison chart.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::application::AssessmentController;
use crate::domain::{Prediction, SleepComparison};
use crate::tui::styles::SleepTheme;

/// Render the right-hand result panel.
pub fn render_result_panel(f: &mut Frame, area: Rect, controller: &AssessmentController) {
    let block = Block::default()
        .title(Span::styled(" Prediction Result ", SleepTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(if controller.displayed_result().is_some() {
            SleepTheme::border_focused()
        } else {
            SleepTheme::border()
        });
    let inner = block.inner(area);
    f.render_widget(block, area);

    if controller.is_loading() {
        render_placeholder(f, inner, "Predicting...");
        return;
    }
    let Some(prediction) = controller.displayed_result() else {
        render_placeholder(f, inner, "Complete the form and press Enter to predict.");
        return;
    };

    match controller.comparison() {
        Some(comparison) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(9)])
                .split(inner);
            render_prediction(f, chunks[0], prediction);
            render_comparison(f, chunks[1], &comparison);
        }
        None => render_prediction(f, inner, prediction),
    }
}

fn render_placeholder(f: &mut Frame, area: Rect, message: &str) {
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), SleepTheme::text_muted())),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(content, area);
}

/// Lines for a prediction: the label, then its guidance block if known.
#[must_use]
pub fn prediction_lines(prediction: &Prediction) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("You are likely to have: ", SleepTheme::text()),
            Span::styled(prediction.label().to_string(), SleepTheme::focused()),
        ]),
    ];

    if let Some(guidance) = prediction.guidance() {
        let style = SleepTheme::guidance(guidance.tone);
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            guidance.heading,
            style.add_modifier(Modifier::BOLD),
        )));
        if let Some(summary) = guidance.summary {
            lines.push(Line::from(Span::styled(summary, style)));
        }
        for tip in guidance.tips {
            lines.push(Line::from(Span::styled(format!("• {tip}"), style)));
        }
    }

    lines
}

fn render_prediction(f: &mut Frame, area: Rect, prediction: &Prediction) {
    let content = Paragraph::new(prediction_lines(prediction))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(content, area);
}

fn render_comparison(f: &mut Frame, area: Rect, comparison: &SleepComparison) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Recommendation text
            Constraint::Length(3), // Your sleep
            Constraint::Length(3), // Recommended
            Constraint::Min(0),
        ])
        .split(area);

    let band = comparison.band;
    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            "Comparison: Your Sleep vs. Recommended",
            SleepTheme::subtitle(),
        )),
        Line::from(vec![
            Span::styled(
                format!("Recommended sleep duration (age {}): ", band.age_label()),
                SleepTheme::text_secondary(),
            ),
            Span::styled(band.recommended_range(), SleepTheme::title()),
        ]),
    ]);
    f.render_widget(heading, chunks[0]);

    let yours = Gauge::default()
        .block(
            Block::default()
                .title(Span::styled(" Your Sleep ", SleepTheme::text_secondary()))
                .borders(Borders::ALL)
                .border_style(SleepTheme::border()),
        )
        .gauge_style(Style::default().fg(SleepTheme::SLEEP_BAR))
        .percent(comparison.sleep_percent)
        .label(format!("{} hrs", comparison.sleep_hours));
    f.render_widget(yours, chunks[1]);

    let recommended = Gauge::default()
        .block(
            Block::default()
                .title(Span::styled(" Recommended ", SleepTheme::text_secondary()))
                .borders(Borders::ALL)
                .border_style(SleepTheme::border()),
        )
        .gauge_style(Style::default().fg(SleepTheme::RECOMMENDED_BAR))
        .percent(comparison.recommended_percent)
        .label(band.recommended_range());
    f.render_widget(recommended, chunks[2]);
}
