use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::session::Command;

/// Translate a raw key event into a session command. Only presses count; key
/// release and auto-repeat reports map to [`Command::Unrecognized`].
pub(crate) fn command_for(key: KeyEvent) -> Command {
    if key.kind != KeyEventKind::Press {
        return Command::Unrecognized;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Command::Quit,
            _ => Command::Unrecognized,
        };
    }

    match key.code {
        KeyCode::Char('z') | KeyCode::Char('Z') => Command::NewNoteSequence,
        KeyCode::Char('x') | KeyCode::Char('X') => Command::NewFretPositions,
        KeyCode::Char(' ') | KeyCode::Enter => Command::RepeatSameType,
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('b') => Command::NavigateBack,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => Command::NavigateForward,
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        _ => Command::Unrecognized,
    }
}
