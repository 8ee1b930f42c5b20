//! Binary entry point: parse options, set up file logging, and drive the
//! Ratatui event loop until the user exits.
use clap::Parser;
use fret_trainer::{logging, run_app, App, Args, Config, ExerciseGenerator, Session};
use tracing::info;

/// Returning a `Result` bubbles fatal startup problems (a bad option, a
/// terminal without raw mode) up to the shell instead of leaving the terminal
/// in a broken state. Logging problems only cost the log file.
fn main() -> anyhow::Result<()> {
    let config = Config::from_args(Args::parse())?;
    if let Some(reason) = &config.log_fallback {
        eprintln!("warning: logging disabled: {reason}");
    }
    if let Err(err) = logging::init(config.log.as_ref()) {
        eprintln!("warning: logging disabled: {err:#}");
    }

    let generator = match config.seed {
        Some(seed) => {
            info!(seed, "using fixed seed");
            ExerciseGenerator::seeded(seed)
        }
        None => ExerciseGenerator::new(),
    };

    let mut app = App::new(Session::new(generator));
    run_app(&mut app)?;

    println!("Thanks for using Guitar Fret Trainer! Keep practicing!");
    Ok(())
}
