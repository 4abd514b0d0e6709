//! TUI module: Terminal User Interface using Ratatui.
//!
//! Provides:
//! - Home screen
//! - Sleep assessment form with live validation
//! - Prediction result, guidance, and sleep comparison chart

mod app;
mod styles;
mod ui;
mod worker;

pub use app::{App, Screen};
pub use styles::SleepTheme;
pub use worker::{PredictionWorker, PredictionWorkerHandle};
