//! Main TUI application.
//!
//! Handles:
//! - Screen navigation
//! - Input event handling
//! - Feeding edits and submits into the assessment controller
//! - Async prediction via background worker

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tokio::runtime::Runtime;

use crate::adapters::HttpPredictionService;
use crate::application::AssessmentController;
use crate::config::Settings;
use crate::domain::{Field, SurveyRecord};
use crate::ports::PredictionService;

use super::ui::{
    assessment::{render_assessment, AssessmentFormState},
    home::render_home,
    render_alert, render_disclaimer, render_header,
};
use super::worker::{PredictionWorker, PredictionWorkerHandle};

/// Current screen/view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Assessment,
}

/// Main application state
pub struct App {
    screen: Screen,
    should_quit: bool,

    /// Runtime hosting prediction requests
    runtime: Runtime,
    service: Arc<dyn PredictionService>,
    timeout: Duration,

    controller: AssessmentController,
    form_state: AssessmentFormState,

    /// In-flight prediction (if any)
    pending_worker: Option<PredictionWorkerHandle>,
}

impl App {
    /// Create an application talking to the configured HTTP endpoint.
    ///
    /// # Errors
    /// Returns error if the async runtime cannot be started.
    pub fn new(settings: &Settings) -> Result<Self> {
        let service = Arc::new(HttpPredictionService::new(settings.endpoint.clone()));
        Self::with_service(service, settings.timeout())
    }

    /// Create application with an injected prediction service.
    ///
    /// # Errors
    /// Returns error if the async runtime cannot be started.
    pub fn with_service(service: Arc<dyn PredictionService>, timeout: Duration) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("sleepwise-predict")
            .enable_all()
            .build()?;

        Ok(Self {
            screen: Screen::Home,
            should_quit: false,
            runtime,
            service,
            timeout,
            controller: AssessmentController::default(),
            form_state: AssessmentFormState::default(),
            pending_worker: None,
        })
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn controller(&self) -> &AssessmentController {
        &self.controller
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        // Teardown cancels any request still in flight.
        self.pending_worker = None;

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            self.poll_worker();

            terminal.draw(|f| {
                let area = f.area();
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(2),
                        Constraint::Min(0),
                        Constraint::Length(2),
                    ])
                    .split(area);

                render_header(f, chunks[0], self.screen == Screen::Assessment);
                match self.screen {
                    Screen::Home => render_home(f, chunks[1]),
                    Screen::Assessment => {
                        render_assessment(f, chunks[1], &self.form_state, &self.controller)
                    }
                }
                render_disclaimer(f, chunks[2]);

                if let Some(message) = self.controller.alert() {
                    render_alert(f, area, message);
                }
            })?;

            // Short poll keeps the worker check responsive.
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code, key.modifiers);
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Settle the in-flight prediction once the worker reports.
    pub fn poll_worker(&mut self) {
        let Some(worker) = self.pending_worker.as_mut() else {
            return;
        };
        if let Some(outcome) = worker.try_recv() {
            self.pending_worker = None;
            self.controller.on_settled(outcome);
        }
    }

    pub fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // The failure notice blocks input until acknowledged.
        if self.controller.alert().is_some() {
            if matches!(key, KeyCode::Enter | KeyCode::Esc) {
                self.controller.dismiss_alert();
            }
            return;
        }

        match self.screen {
            Screen::Home => self.handle_home_key(key),
            Screen::Assessment => self.handle_assessment_key(key),
        }
    }

    fn handle_home_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char('p') | KeyCode::Char('P') => {
                self.screen = Screen::Assessment;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn handle_assessment_key(&mut self, key: KeyCode) {
        let field = self.form_state.selected();

        let edit = match key {
            KeyCode::Esc => {
                self.screen = Screen::Home;
                None
            }
            KeyCode::Up | KeyCode::BackTab => {
                self.form_state.prev_field();
                None
            }
            KeyCode::Down | KeyCode::Tab => {
                self.form_state.next_field();
                None
            }
            KeyCode::Left => self.form_state.step(self.controller.record(), false),
            KeyCode::Right => self.form_state.step(self.controller.record(), true),
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.controller.replace_record(SurveyRecord::sample());
                None
            }
            KeyCode::Char(c) => self.form_state.input_char(self.controller.record(), c),
            KeyCode::Backspace => self.form_state.delete_char(self.controller.record()),
            KeyCode::Delete => self.form_state.clear_field(),
            KeyCode::Enter => {
                self.submit();
                None
            }
            _ => None,
        };

        if let Some(value) = edit {
            self.apply_edit(field, &value);
        }
    }

    fn apply_edit(&mut self, field: Field, value: &str) {
        self.controller.on_field_change(field, value);
    }

    /// Submit the form; discarded unless the controller issues a request.
    pub fn submit(&mut self) {
        let Some(request) = self.controller.on_submit() else {
            return;
        };
        let worker = PredictionWorker::spawn(
            self.runtime.handle(),
            Arc::clone(&self.service),
            request,
            self.timeout,
        );
        self.pending_worker = Some(worker);
    }

    /// Whether a prediction request is outstanding.
    #[must_use]
    pub fn has_pending_request(&self) -> bool {
        self.pending_worker.is_some()
    }
}
