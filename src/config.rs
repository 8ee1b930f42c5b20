//! Command-line options and the validated runtime configuration built from
//! them.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use directories::BaseDirs;
use thiserror::Error;
use tracing::Level;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".fret-trainer";
/// Log file name stored inside the application data directory.
const LOG_FILE_NAME: &str = "fret-trainer.log";

#[derive(Parser, Debug)]
#[command(name = "fret-trainer")]
#[command(about = "Randomized note and fretboard drills for guitar practice")]
pub struct Args {
    /// Seed for the random source, to replay the same sequence of exercises
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Log verbosity (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Write logs here instead of ~/.fret-trainer/fret-trainer.log
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Disable logging entirely
    #[arg(long)]
    pub no_log: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid log level '{0}', expected one of trace, debug, info, warn, error")]
    InvalidLogLevel(String),
    #[error("could not locate home directory for the default log file")]
    NoHomeDirectory,
}

/// Where diagnostics go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: Level,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: Option<u64>,
    /// `None` when logging is disabled.
    pub log: Option<LogConfig>,
    /// Why logging was switched off even though it was requested. The app
    /// still starts; the caller decides how to surface this.
    pub log_fallback: Option<ConfigError>,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let home = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
        Self::from_args_with_home(args, home)
    }

    /// Like [`Config::from_args`] with the home directory supplied by the
    /// caller. A missing home only disables the default log file.
    pub fn from_args_with_home(args: Args, home: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut log_fallback = None;
        let log = if args.no_log {
            None
        } else {
            let level = Level::from_str(args.log_level.trim())
                .map_err(|_| ConfigError::InvalidLogLevel(args.log_level.clone()))?;
            match args.log_file.map_or_else(|| default_log_path(home), Ok) {
                Ok(path) => Some(LogConfig { level, path }),
                Err(err) => {
                    log_fallback = Some(err);
                    None
                }
            }
        };

        Ok(Self {
            seed: args.seed,
            log,
            log_fallback,
        })
    }
}

/// Resolve the default log file inside the user's home.
fn default_log_path(home: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    let home = home.ok_or(ConfigError::NoHomeDirectory)?;
    Ok(home.join(DATA_DIR_NAME).join(LOG_FILE_NAME))
}
