use crossterm::event::KeyEvent;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use tracing::debug;

use crate::models::Exercise;
use crate::session::{Outcome, Session, SessionView};

use super::helpers::{centered_rect, fretboard_row, key_hints, note_sequence_line};
use super::keymap::command_for;

/// Footer space reserved for the history counters and key hints.
const FOOTER_HEIGHT: u16 = 3;
/// Application title shown on the welcome panel and the exercise frame.
const TITLE: &str = "Guitar Fret Trainer";
/// Key hints shown in the footer once an exercise is on screen.
const FOOTER_HINTS: &[(&str, &str)] = &[
    ("[z]", "Notes"),
    ("[x]", "Frets"),
    ("[Space]", "Again"),
    ("[←→]", "History"),
    ("[q]", "Quit"),
];

/// Central application state: the quiz session plus the redraw flag the
/// terminal loop polls.
pub struct App {
    session: Session,
    dirty: bool,
}

impl App {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            dirty: true,
        }
    }

    /// Feed one key event to the session. Returns `true` when the user asked
    /// to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let command = command_for(key);
        match self.session.apply(command) {
            Outcome::Render => {
                self.dirty = true;
                false
            }
            Outcome::Unchanged => {
                debug!(?command, "no state change");
                false
            }
            Outcome::Quit => true,
        }
    }

    /// Force a redraw on the next loop iteration, e.g. after a resize.
    pub(crate) fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Report whether a redraw is pending and clear the flag.
    pub(crate) fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let view = self.session.view();

        let Some(exercise) = view.current else {
            self.draw_welcome(frame, area);
            return;
        };

        let footer_height = FOOTER_HEIGHT.min(area.height);
        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        self.draw_exercise(frame, content_area, exercise);
        if area.height > footer_height {
            self.draw_footer(frame, footer_area, &view);
        }
    }

    fn draw_welcome(&self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let instruction = |key: &'static str, text: &'static str| {
            Line::from(vec![
                Span::raw("• Press "),
                Span::styled(key, key_style),
                Span::raw(text),
            ])
        };

        let lines = vec![
            Line::from("Learn where every note lives on the fretboard."),
            Line::from(""),
            instruction("z", " for a location exercise (find the notes)"),
            instruction("x", " for an inverse-location exercise (name the frets)"),
            instruction("Space", " for another exercise of the same kind"),
            instruction("← / →", " to step through earlier exercises"),
            instruction("q", " to exit"),
            Line::from(""),
            Line::from("Ready to start? Press z or x..."),
        ];

        let popup = centered_rect(80, 70, area);
        frame.render_widget(Clear, popup);
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(TITLE));
        frame.render_widget(paragraph, popup);
    }

    fn draw_exercise(&self, frame: &mut Frame, area: Rect, exercise: &Exercise) {
        let (subtitle, lines) = match exercise {
            Exercise::NoteSequence { notes } => (
                "Location: find these notes",
                vec![note_sequence_line(notes)],
            ),
            Exercise::FretPositions { positions } => {
                let last_fret = *self.session.fretboard().frets.end();
                (
                    "Inverse location: name the marked notes",
                    positions
                        .iter()
                        .map(|pos| fretboard_row(pos, last_fret))
                        .collect(),
                )
            }
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("{TITLE} - {subtitle}"));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let height = (lines.len() as u16).min(inner.height);
        let top = inner.y + inner.height.saturating_sub(height) / 2;
        let body = Rect {
            x: inner.x,
            y: top,
            width: inner.width,
            height,
        };
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect, view: &SessionView<'_>) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let counters = Line::from(vec![
            Span::styled(
                format!("Exercise {}/{}", view.position, view.total),
                Style::default().fg(Color::Green),
            ),
            Span::raw(format!(
                "   {} back   {} forward",
                view.back_count, view.forward_count
            )),
        ]);

        let paragraph =
            Paragraph::new(vec![counters, key_hints(FOOTER_HINTS)]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }
}
