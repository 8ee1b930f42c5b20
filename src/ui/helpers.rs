use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::models::{FretPosition, Note};

/// Frets carrying a single inlay dot.
const SINGLE_DOT_FRETS: [u8; 4] = [3, 5, 7, 9];
/// Octave fret, drawn with a double-dot inlay.
const OCTAVE_FRET: u8 = 12;

/// Body of one fret cell. Every body is three columns wide so rows line up.
pub(crate) fn fret_cell(fret: u8, target: u8) -> &'static str {
    if fret == target {
        " ● "
    } else if SINGLE_DOT_FRETS.contains(&fret) {
        " • "
    } else if fret == OCTAVE_FRET {
        " : "
    } else {
        "   "
    }
}

/// Draw one string of the fretboard with the target fret highlighted, e.g.
/// `E |   |   | • |...| : |`.
pub(crate) fn fretboard_row(position: &FretPosition, last_fret: u8) -> Line<'static> {
    let plain = Style::default().fg(Color::White);
    let target = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut spans = Vec::with_capacity(2 * usize::from(last_fret) + 2);
    spans.push(Span::raw(format!("{} ", position.string.label())));
    for fret in 1..=last_fret {
        spans.push(Span::styled("|", plain));
        let style = if fret == position.fret { target } else { plain };
        spans.push(Span::styled(fret_cell(fret, position.fret), style));
    }
    spans.push(Span::styled("|", plain));
    Line::from(spans)
}

/// The seven notes run together as one word, the way they are called out.
pub(crate) fn note_sequence_line(notes: &[Note]) -> Line<'static> {
    let text: String = notes.iter().map(|note| note.letter()).collect();
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Interleave highlighted key labels with their descriptions.
pub(crate) fn key_hints(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (idx, (key, label)) in hints.iter().enumerate() {
        spans.push(Span::styled(*key, key_style));
        if idx + 1 == hints.len() {
            spans.push(Span::raw(format!(" {label}")));
        } else {
            spans.push(Span::raw(format!(" {label}   ")));
        }
    }
    Line::from(spans)
}

/// Sub-rectangle of `area` sized as a percentage of it and centered on both
/// axes. Used for the welcome panel.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [panel] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    panel
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GuitarString;

    fn row_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn row_marks_target_and_inlays() {
        let line = fretboard_row(
            &FretPosition {
                string: GuitarString::G,
                fret: 4,
            },
            12,
        );
        assert_eq!(
            row_text(&line),
            "G |   |   | • | ● | • |   | • |   | • |   |   | : |"
        );
    }

    #[test]
    fn target_replaces_inlay() {
        let line = fretboard_row(
            &FretPosition {
                string: GuitarString::HighE,
                fret: 12,
            },
            12,
        );
        let text = row_text(&line);
        assert!(text.ends_with("| ● |"));
        assert!(!text.contains(':'));
    }

    #[test]
    fn target_span_is_highlighted() {
        let line = fretboard_row(
            &FretPosition {
                string: GuitarString::A,
                fret: 1,
            },
            12,
        );
        let highlighted: Vec<&str> = line
            .spans
            .iter()
            .filter(|span| span.style.fg == Some(Color::Cyan))
            .map(|span| span.content.as_ref())
            .collect();
        assert_eq!(highlighted, vec![" ● "]);
    }

    #[test]
    fn note_line_joins_letters() {
        let line = note_sequence_line(&[Note::E, Note::A, Note::D]);
        assert_eq!(row_text(&line), "EAD");
    }

    #[test]
    fn key_hints_have_no_trailing_gap() {
        let line = key_hints(&[("[z]", "Notes"), ("[q]", "Quit")]);
        assert_eq!(row_text(&line), "[z] Notes   [q] Quit");
    }

    #[test]
    fn centered_rect_is_centered() {
        let area = Rect::new(0, 0, 80, 20);
        assert_eq!(centered_rect(50, 50, area), Rect::new(20, 5, 40, 10));
        assert_eq!(centered_rect(100, 100, area), area);
    }
}
