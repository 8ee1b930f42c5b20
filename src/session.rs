//! Session controller: turns discrete commands into generator calls and
//! history mutations, and tells the caller whether the screen needs redrawing.

use tracing::{debug, info};

use crate::generator::{ExerciseGenerator, Fretboard};
use crate::history::{Direction, History};
use crate::models::{Exercise, ExerciseKind};

/// Everything the user can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    NewNoteSequence,
    NewFretPositions,
    /// Another exercise of the same kind as the one on screen.
    RepeatSameType,
    NavigateBack,
    NavigateForward,
    Quit,
    /// Input with no binding. Ignored.
    Unrecognized,
}

/// Result of applying a [`Command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Render,
    Unchanged,
    Quit,
}

/// Snapshot of what the renderer needs.
#[derive(Debug, Clone, Copy)]
pub struct SessionView<'a> {
    pub current: Option<&'a Exercise>,
    /// 1-based position of the current exercise, 0 when nothing was generated.
    pub position: usize,
    pub total: usize,
    pub back_count: usize,
    pub forward_count: usize,
}

pub struct Session {
    history: History,
    generator: ExerciseGenerator,
}

impl Session {
    pub fn new(generator: ExerciseGenerator) -> Self {
        Self::with_history(generator, History::new())
    }

    pub fn with_history(generator: ExerciseGenerator, history: History) -> Self {
        Self { history, generator }
    }

    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::NewNoteSequence => self.push_new(ExerciseKind::NoteSequence),
            Command::NewFretPositions => self.push_new(ExerciseKind::FretPositions),
            Command::RepeatSameType => match self.history.current().map(Exercise::kind) {
                Some(kind) => self.push_new(kind),
                None => {
                    debug!("repeat requested with empty history");
                    Outcome::Unchanged
                }
            },
            Command::NavigateBack => self.step(Direction::Back),
            Command::NavigateForward => self.step(Direction::Forward),
            Command::Quit => {
                info!(exercises = self.history.len(), "session finished");
                Outcome::Quit
            }
            Command::Unrecognized => Outcome::Unchanged,
        }
    }

    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            current: self.history.current(),
            position: self.history.cursor().map_or(0, |cursor| cursor + 1),
            total: self.history.len(),
            back_count: self.history.back_count(),
            forward_count: self.history.forward_count(),
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn fretboard(&self) -> &Fretboard {
        self.generator.fretboard()
    }

    fn push_new(&mut self, kind: ExerciseKind) -> Outcome {
        let discarded = self.history.forward_count();
        let exercise = self.generator.generate(kind);
        debug!(%kind, exercise = %exercise.summary(), discarded, "new exercise");
        self.history.append(exercise);
        Outcome::Render
    }

    fn step(&mut self, direction: Direction) -> Outcome {
        if self.history.navigate(direction) {
            debug!(?direction, cursor = ?self.history.cursor(), "moved through history");
            Outcome::Render
        } else {
            Outcome::Unchanged
        }
    }
}
