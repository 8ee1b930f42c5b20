//! Bounded log of generated exercises with a navigation cursor.
//!
//! The log behaves like an editor's undo history: stepping back keeps the
//! newer entries available for stepping forward again, but appending from a
//! non-tail position throws those newer entries away first.

use crate::models::Exercise;

/// Maximum number of exercises kept in a session.
pub const HISTORY_CAPACITY: usize = 1024;

/// Direction of a cursor move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Back,
    Forward,
}

#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Exercise>,
    /// `None` only while `entries` is empty.
    cursor: Option<usize>,
    capacity: usize,
}

impl History {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    /// Log that keeps at most `capacity` entries. A zero capacity is raised
    /// to one so an appended exercise is always retrievable.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Vec::with_capacity(capacity.min(HISTORY_CAPACITY)),
            cursor: None,
            capacity,
        }
    }

    /// Drop everything after the cursor, push `exercise`, evict from the head
    /// when over capacity, and leave the cursor on the new entry.
    pub fn append(&mut self, exercise: Exercise) {
        if let Some(cursor) = self.cursor {
            self.entries.truncate(cursor + 1);
        }
        self.entries.push(exercise);
        if self.entries.len() > self.capacity {
            let excess = self.entries.len() - self.capacity;
            self.entries.drain(..excess);
        }
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Move the cursor one step. Returns `false` when already at that end or
    /// when the log is empty.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        let Some(cursor) = self.cursor else {
            return false;
        };
        let target = match direction {
            Direction::Back if cursor > 0 => cursor - 1,
            Direction::Forward if cursor + 1 < self.entries.len() => cursor + 1,
            _ => return false,
        };
        self.cursor = Some(target);
        true
    }

    pub fn current(&self) -> Option<&Exercise> {
        self.cursor.and_then(|cursor| self.entries.get(cursor))
    }

    /// Entries strictly before the cursor.
    pub fn back_count(&self) -> usize {
        self.cursor.unwrap_or(0)
    }

    /// Entries strictly after the cursor.
    pub fn forward_count(&self) -> usize {
        match self.cursor {
            Some(cursor) => self.entries.len() - 1 - cursor,
            None => 0,
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &Exercise> {
        self.entries.iter()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FretPosition, GuitarString, Note, STRING_COUNT};

    /// Distinct exercises keyed by `n`, cheap to compare.
    fn exercise(n: u8) -> Exercise {
        Exercise::FretPositions {
            positions: [FretPosition {
                string: GuitarString::LowE,
                fret: n,
            }; STRING_COUNT],
        }
    }

    fn notes() -> Exercise {
        Exercise::NoteSequence {
            notes: [Note::A, Note::B, Note::C, Note::D, Note::E, Note::F, Note::G],
        }
    }

    #[test]
    fn empty_history_has_no_current_and_zero_counts() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.cursor(), None);
        assert!(history.current().is_none());
        assert_eq!(history.back_count(), 0);
        assert_eq!(history.forward_count(), 0);
        assert_eq!(history.capacity(), HISTORY_CAPACITY);
    }

    #[test]
    fn navigation_on_empty_history_does_not_move() {
        let mut history = History::new();
        assert!(!history.navigate(Direction::Back));
        assert!(!history.navigate(Direction::Forward));
        assert_eq!(history.cursor(), None);
    }

    #[test]
    fn append_points_cursor_at_new_tail() {
        let mut history = History::new();
        for n in 1..=3 {
            history.append(exercise(n));
            assert_eq!(history.cursor(), Some(history.len() - 1));
            assert_eq!(history.current(), Some(&exercise(n)));
        }
        assert_eq!(history.back_count(), 2);
        assert_eq!(history.forward_count(), 0);
    }

    #[test]
    fn append_after_going_back_discards_forward_entries() {
        let mut history = History::new();
        history.append(exercise(1));
        history.append(exercise(2));
        history.append(exercise(3));
        assert!(history.navigate(Direction::Back));
        assert!(history.navigate(Direction::Back));
        assert_eq!(history.cursor(), Some(0));

        history.append(notes());

        let entries: Vec<&Exercise> = history.iter().collect();
        assert_eq!(entries, vec![&exercise(1), &notes()]);
        assert_eq!(history.cursor(), Some(1));
        assert_eq!(history.forward_count(), 0);
    }

    #[test]
    fn navigation_stops_at_both_ends() {
        let mut history = History::new();
        history.append(exercise(1));
        history.append(exercise(2));

        assert!(!history.navigate(Direction::Forward));
        assert!(history.navigate(Direction::Back));
        assert!(!history.navigate(Direction::Back));
        assert_eq!(history.cursor(), Some(0));
        assert_eq!(history.back_count(), 0);
        assert_eq!(history.forward_count(), 1);

        assert!(history.navigate(Direction::Forward));
        assert_eq!(history.current(), Some(&exercise(2)));
    }

    #[test]
    fn navigation_keeps_entries_intact() {
        let mut history = History::new();
        history.append(exercise(1));
        history.append(exercise(2));
        history.navigate(Direction::Back);
        history.navigate(Direction::Forward);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn overflow_evicts_the_oldest_entry() {
        let mut history = History::new();
        history.append(notes());
        for n in 0..HISTORY_CAPACITY {
            history.append(exercise((n % 250) as u8));
        }

        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.cursor(), Some(HISTORY_CAPACITY - 1));
        assert!(history.iter().all(|entry| *entry != notes()));
        assert_eq!(
            history.current(),
            Some(&exercise(((HISTORY_CAPACITY - 1) % 250) as u8))
        );
    }

    #[test]
    fn eviction_drops_first_appended() {
        let mut history = History::with_capacity(3);
        history.append(notes());
        for n in 1..=3 {
            history.append(exercise(n));
        }
        assert_eq!(history.len(), 3);
        assert!(history.iter().all(|entry| *entry != notes()));
        assert_eq!(history.back_count(), 2);
    }

    #[test]
    fn truncation_then_push_does_not_evict() {
        let mut history = History::with_capacity(3);
        for n in 1..=3 {
            history.append(exercise(n));
        }
        history.navigate(Direction::Back);
        history.append(exercise(9));

        let entries: Vec<&Exercise> = history.iter().collect();
        assert_eq!(entries, vec![&exercise(1), &exercise(2), &exercise(9)]);
        assert_eq!(history.cursor(), Some(2));
    }

    #[test]
    fn zero_capacity_still_holds_latest() {
        let mut history = History::with_capacity(0);
        history.append(exercise(1));
        history.append(exercise(2));
        assert_eq!(history.len(), 1);
        assert_eq!(history.current(), Some(&exercise(2)));
    }
}
