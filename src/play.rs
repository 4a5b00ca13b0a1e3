//! Interactive line-based game loop.
//!
//! One pass per turn: draw the state, read a cell, derive the next state.
//! The loop owns the current [`GameState`]; the engine only ever sees a value
//! and hands back a new one.

use crate::config::DisplayConfig;
use crate::games::tictactoe::{GameState, Move, Position, status_line};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The game reached a win or a draw.
    Decided(GameState),
    /// The player quit or input ran out first.
    Abandoned(GameState),
}

impl SessionEnd {
    /// The last state of the session.
    pub fn state(&self) -> &GameState {
        match self {
            SessionEnd::Decided(state) | SessionEnd::Abandoned(state) => state,
        }
    }
}

/// Runs a game reading moves from `input` and drawing to `output`.
///
/// Each line is a cell number 0-8 or a position label; `q` or `quit` ends
/// the session early. Rejected moves are reported and leave the state as is.
#[instrument(skip_all)]
pub fn run_session<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    display: &DisplayConfig,
) -> std::io::Result<SessionEnd> {
    let show_indices = *display.show_indices();
    let mut state = GameState::new();
    let mut line = String::new();

    info!("Session started");
    loop {
        writeln!(output, "{}\n{}", state.board().render(show_indices), status_line(&state))?;

        if state.outcome().is_terminal() {
            info!(outcome = %state.outcome(), "Session decided");
            return Ok(SessionEnd::Decided(state));
        }

        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("Input closed");
            writeln!(output)?;
            return Ok(SessionEnd::Abandoned(state));
        }

        let entry = line.trim();
        if entry.is_empty() {
            continue;
        }
        if entry.eq_ignore_ascii_case("q") || entry.eq_ignore_ascii_case("quit") {
            info!("Player quit");
            return Ok(SessionEnd::Abandoned(state));
        }

        let Some(position) = Position::from_label_or_number(entry) else {
            writeln!(output, "Unrecognized cell {:?}: enter 0-8 or a position name", entry)?;
            continue;
        };

        match state.apply_position(position) {
            Ok(next) => {
                writeln!(output, "{}", Move::new(state.turn(), position))?;
                state = next;
            }
            Err(e) => writeln!(output, "{}", e)?,
        }
    }
}
