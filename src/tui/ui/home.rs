//! Home view: Introduction and entry point to the assessment.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::styles::SleepTheme;

pub fn render_home(f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Intro
            Constraint::Length(3), // Footer
        ])
        .split(area);

    let intro = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("Sleep Health Analyzer", SleepTheme::title())),
        Line::from(""),
        Line::from(Span::styled("Sleep better. Live better.", SleepTheme::tagline())),
        Line::from(""),
        Line::from(Span::styled(
            "An AI-based assistant for predicting sleep disorders based on lifestyle data.",
            SleepTheme::text(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Discover insights into your sleep patterns and identify potential disorders. \
             This tool provides a preliminary analysis to support your sleep health and \
             assist medical professionals.",
            SleepTheme::text_secondary(),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(SleepTheme::border()),
    );
    f.render_widget(intro, chunks[0]);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("[Enter] ", SleepTheme::key_hint()),
        Span::styled("Start Sleep Assessment ", SleepTheme::key_desc()),
        Span::styled("[Q] ", SleepTheme::key_hint()),
        Span::styled("Quit", SleepTheme::key_desc()),
    ]))
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(SleepTheme::border()),
    );
    f.render_widget(footer, chunks[1]);
}
