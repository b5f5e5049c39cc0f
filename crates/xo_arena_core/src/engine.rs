//! Board engine: applies moves and detects terminal states.

use super::action::Rejection;
use super::contracts::{Contract, LegalMove, MoveContract};
use super::rules::{find_winning_line, is_full};
use super::{Board, Terminal};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// What a move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Accepted, and this move ended the board.
    Finished(Terminal),
    /// Accepted, and the board is still in progress.
    Continued,
    /// Not applied; the state is unchanged.
    Rejected(Rejection),
}

impl Verdict {
    /// Returns true unless the move was rejected.
    pub fn accepted(&self) -> bool {
        !matches!(self, Verdict::Rejected(_))
    }

    /// Returns the terminal status this move produced, if it ended a board.
    pub fn finished(&self) -> Option<&Terminal> {
        match self {
            Verdict::Finished(terminal) => Some(terminal),
            _ => None,
        }
    }

    /// Returns the rejection reason, if any.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Verdict::Rejected(reason) => Some(*reason),
            _ => None,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Finished(terminal) => write!(f, "{}", terminal),
            Verdict::Continued => write!(f, "Continued"),
            Verdict::Rejected(reason) => write!(f, "Rejected: {}", reason),
        }
    }
}

/// The state after a command, together with what the command did.
///
/// On rejection `state` is the input state, untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Step<T> {
    state: T,
    verdict: Verdict,
}

impl<T> Step<T> {
    pub(crate) fn new(state: T, verdict: Verdict) -> Self {
        Self { state, verdict }
    }

    /// Returns the resulting state.
    pub fn state(&self) -> &T {
        &self.state
    }

    /// Returns the verdict.
    pub fn verdict(&self) -> &Verdict {
        &self.verdict
    }

    /// Returns true unless the move was rejected.
    pub fn accepted(&self) -> bool {
        self.verdict.accepted()
    }

    /// Consumes the step, returning the resulting state.
    pub fn into_state(self) -> T {
        self.state
    }

    /// Consumes the step, returning state and verdict.
    pub fn into_parts(self) -> (T, Verdict) {
        (self.state, self.verdict)
    }
}

impl Board {
    /// Places the next mark at `index` (0-8).
    ///
    /// Rejected, with the board returned unchanged, if the index is out of
    /// range, the cell is occupied or the board is already finished.
    /// Otherwise the mark is placed, the turn passes, and the first
    /// completed line (rows, columns, main then anti diagonal) ends the
    /// board as won; a full board without a line ends as a draw.
    #[instrument(skip(self), fields(next_mark = %self.next_mark))]
    pub fn apply_move(self, index: usize) -> Step<Board> {
        let position = match LegalMove::check(&self, index) {
            Ok(position) => position,
            Err(reason) => {
                debug!(%reason, "Move rejected");
                return Step::new(self, Verdict::Rejected(reason));
            }
        };

        let before = cfg!(debug_assertions).then(|| self.clone());
        let mut board = self;
        let mark = board.next_mark;
        board.cells[position.to_index()].occupy(mark);
        board.next_mark = mark.opponent();

        let verdict = if let Some((winner, line)) = find_winning_line(&board) {
            for pos in line.positions() {
                board.cells[pos.to_index()].flag_winning();
            }
            board.terminal = Terminal::Won { mark: winner, line };
            info!(%winner, %line, "Board won");
            Verdict::Finished(board.terminal)
        } else if is_full(&board) {
            board.terminal = Terminal::Draw;
            info!("Board drawn");
            Verdict::Finished(board.terminal)
        } else {
            Verdict::Continued
        };

        if let Some(before) = before {
            let post = MoveContract::post(&before, &board);
            debug_assert!(post.is_ok(), "Postcondition failed: {:?}", post);
        }

        Step::new(board, verdict)
    }

    /// Returns a fresh board, discarding this one.
    #[instrument(skip(self))]
    pub fn reset(self) -> Board {
        Board::new()
    }
}
