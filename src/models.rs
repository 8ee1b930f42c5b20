//! Domain models for the quiz: notes, guitar strings, and the two exercise
//! variants that flow from the generator through the history log into the
//! renderer. These types stay light-weight data holders so other layers can
//! focus on state transitions and presentation.

use std::fmt;

/// Number of natural notes in one octave.
pub const NOTE_COUNT: usize = 7;
/// Number of strings on a standard guitar.
pub const STRING_COUNT: usize = 6;

/// One of the seven natural note letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Note {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Note {
    pub fn letter(self) -> char {
        match self {
            Note::A => 'A',
            Note::B => 'B',
            Note::C => 'C',
            Note::D => 'D',
            Note::E => 'E',
            Note::F => 'F',
            Note::G => 'G',
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A string of a guitar in standard tuning. The two E strings are kept apart
/// so a fret position always names exactly one physical string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuitarString {
    HighE,
    B,
    G,
    D,
    A,
    LowE,
}

impl GuitarString {
    /// Label printed at the head of a fretboard row. Both E strings read "E",
    /// matching how the strings are named on the instrument.
    pub fn label(self) -> &'static str {
        match self {
            GuitarString::HighE | GuitarString::LowE => "E",
            GuitarString::B => "B",
            GuitarString::G => "G",
            GuitarString::D => "D",
            GuitarString::A => "A",
        }
    }
}

impl fmt::Display for GuitarString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single highlighted fret on one string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FretPosition {
    pub string: GuitarString,
    /// Fret number counted from the nut. Open strings are never asked for.
    pub fret: u8,
}

/// Variant tag of an [`Exercise`], used to regenerate "more of the same".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseKind {
    NoteSequence,
    FretPositions,
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExerciseKind::NoteSequence => write!(f, "note sequence"),
            ExerciseKind::FretPositions => write!(f, "fret positions"),
        }
    }
}

/// One generated quiz item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exercise {
    /// Find each note on the fretboard, in order.
    NoteSequence { notes: [Note; NOTE_COUNT] },
    /// Name the note under each highlighted fret, one per string.
    FretPositions {
        positions: [FretPosition; STRING_COUNT],
    },
}

impl Exercise {
    pub fn kind(&self) -> ExerciseKind {
        match self {
            Exercise::NoteSequence { .. } => ExerciseKind::NoteSequence,
            Exercise::FretPositions { .. } => ExerciseKind::FretPositions,
        }
    }

    /// Compact single-line form used in log output.
    pub fn summary(&self) -> String {
        match self {
            Exercise::NoteSequence { notes } => notes.iter().map(|note| note.letter()).collect(),
            Exercise::FretPositions { positions } => positions
                .iter()
                .map(|pos| format!("{}{}", pos.string, pos.fret))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        let notes = Exercise::NoteSequence {
            notes: [Note::C, Note::D, Note::E, Note::F, Note::G, Note::A, Note::B],
        };
        assert_eq!(notes.kind(), ExerciseKind::NoteSequence);

        let frets = Exercise::FretPositions {
            positions: [FretPosition {
                string: GuitarString::HighE,
                fret: 1,
            }; STRING_COUNT],
        };
        assert_eq!(frets.kind(), ExerciseKind::FretPositions);
    }

    #[test]
    fn summary_joins_letters_without_separator() {
        let notes = Exercise::NoteSequence {
            notes: [Note::G, Note::A, Note::B, Note::C, Note::D, Note::E, Note::F],
        };
        assert_eq!(notes.summary(), "GABCDEF");
    }

    #[test]
    fn both_e_strings_share_a_label() {
        assert_eq!(GuitarString::HighE.label(), GuitarString::LowE.label());
        assert_ne!(GuitarString::HighE, GuitarString::LowE);
    }
}
