//! Ratatui front-end: key bindings, drawing, and the terminal event loop.
//! None of it owns quiz state; every key press is handed to the session and
//! the screen is redrawn only when the session reports a change.

mod app;
mod helpers;
mod keymap;
mod terminal;

pub use app::App;
pub use terminal::run_app;
