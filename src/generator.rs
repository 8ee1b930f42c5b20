//! Random exercise generation.
//!
//! The note alphabet, the string order and the playable fret range live in a
//! frozen [`Fretboard`] owned by the generator, so tests can build one with a
//! seeded random source and check every guarantee in isolation.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::models::{
    Exercise, ExerciseKind, FretPosition, GuitarString, Note, NOTE_COUNT, STRING_COUNT,
};

/// Fixed instrument layout the exercises are drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fretboard {
    pub notes: [Note; NOTE_COUNT],
    /// Strings in the order they are drawn, top row first.
    pub strings: [GuitarString; STRING_COUNT],
    pub frets: RangeInclusive<u8>,
}

/// Six-string guitar in standard tuning, strings listed high to low, frets
/// one through twelve.
pub const STANDARD_FRETBOARD: Fretboard = Fretboard {
    notes: [Note::C, Note::D, Note::E, Note::F, Note::G, Note::A, Note::B],
    strings: [
        GuitarString::HighE,
        GuitarString::B,
        GuitarString::G,
        GuitarString::D,
        GuitarString::A,
        GuitarString::LowE,
    ],
    frets: 1..=12,
};

/// Produces exercises from a [`Fretboard`] and an owned random source.
pub struct ExerciseGenerator {
    fretboard: Fretboard,
    rng: StdRng,
}

impl ExerciseGenerator {
    /// Generator over the standard fretboard, seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(STANDARD_FRETBOARD, StdRng::from_entropy())
    }

    /// Generator over the standard fretboard with a reproducible sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(STANDARD_FRETBOARD, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(fretboard: Fretboard, rng: StdRng) -> Self {
        Self { fretboard, rng }
    }

    pub fn fretboard(&self) -> &Fretboard {
        &self.fretboard
    }

    pub fn generate(&mut self, kind: ExerciseKind) -> Exercise {
        match kind {
            ExerciseKind::NoteSequence => self.generate_note_sequence(),
            ExerciseKind::FretPositions => self.generate_fret_positions(),
        }
    }

    /// Shuffle the whole alphabet: every note appears exactly once.
    pub fn generate_note_sequence(&mut self) -> Exercise {
        let mut notes = self.fretboard.notes;
        notes.shuffle(&mut self.rng);
        Exercise::NoteSequence { notes }
    }

    /// Draw one fret per string, independently. Repeats across strings are
    /// allowed.
    pub fn generate_fret_positions(&mut self) -> Exercise {
        let frets = self.fretboard.frets.clone();
        let positions = self.fretboard.strings.map(|string| FretPosition {
            string,
            fret: self.rng.gen_range(frets.clone()),
        });
        Exercise::FretPositions { positions }
    }
}

impl Default for ExerciseGenerator {
    fn default() -> Self {
        Self::new()
    }
}
