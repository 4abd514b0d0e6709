//! UI module: View components for the TUI.

pub mod assessment;
pub mod home;
pub mod result;

use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::styles::SleepTheme;

/// Top bar: app name and navigation.
pub fn render_header(f: &mut Frame, area: Rect, on_assessment: bool) {
    let nav = |label: &'static str, active: bool| {
        if active {
            Span::styled(label, SleepTheme::focused())
        } else {
            Span::styled(label, SleepTheme::text_muted())
        }
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(" Sleep Health Analyzer", SleepTheme::title()),
        Span::styled("  │  ", SleepTheme::text_muted()),
        nav("Home", !on_assessment),
        Span::raw("  "),
        nav("Predict", on_assessment),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(SleepTheme::border()),
    );

    f.render_widget(header, area);
}

pub fn render_disclaimer(f: &mut Frame, area: Rect) {
    let text = vec![Line::from(Span::styled(
        "DISCLAIMER: This tool provides a preliminary analysis and does not replace professional medical evaluation.",
        SleepTheme::text_muted(),
    ))];

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(SleepTheme::border());

    let p = Paragraph::new(text).block(block).wrap(Wrap { trim: true });

    f.render_widget(p, area);
}

/// Blocking notice drawn over the current screen.
pub fn render_alert(f: &mut Frame, area: Rect, message: &str) {
    let [row] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60)])
        .flex(Flex::Center)
        .areas(row);

    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(message, SleepTheme::text())),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter] ", SleepTheme::key_hint()),
            Span::styled("OK", SleepTheme::key_desc()),
        ]),
    ])
    .alignment(ratatui::layout::Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(Span::styled(" ! Error ", SleepTheme::danger()))
            .borders(Borders::ALL)
            .border_style(SleepTheme::danger()),
    );

    f.render_widget(Clear, popup);
    f.render_widget(content, popup);
}
