//! Core library surface for the Guitar Fret Trainer TUI.
//!
//! The quiz core (generator, history, session) has no terminal dependencies
//! and can be driven directly; the `ui` module wraps it in a crossterm and
//! Ratatui shell for the `bin` target.
pub mod config;
pub mod generator;
pub mod history;
pub mod logging;
pub mod models;
pub mod session;
pub mod ui;

pub use config::{Args, Config, ConfigError};
pub use generator::{ExerciseGenerator, Fretboard, STANDARD_FRETBOARD};
pub use history::{Direction, History, HISTORY_CAPACITY};
pub use models::{Exercise, ExerciseKind, FretPosition, GuitarString, Note};
pub use session::{Command, Outcome, Session, SessionView};
pub use ui::{run_app, App};
