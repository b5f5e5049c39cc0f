//! Arena manager: N independent boards sharing one score.

use super::action::{Move, Rejection};
use super::engine::{Step, Verdict};
use super::{Board, Score, Terminal};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// An ordered set of independent boards plus the score across all of them.
///
/// Commands consume the arena and return the next one. A move touches
/// only the addressed board; every other board is left exactly as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arena {
    boards: Vec<Board>,
    score: Score,
}

impl Arena {
    /// Creates `board_count` fresh boards and a zeroed score.
    #[instrument]
    pub fn new(board_count: usize) -> Self {
        Self {
            boards: (0..board_count).map(|_| Board::new()).collect(),
            score: Score::default(),
        }
    }

    /// Returns all boards in order.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Returns the board at `index`.
    pub fn board(&self, index: usize) -> Option<&Board> {
        self.boards.get(index)
    }

    /// Number of boards.
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Returns true if the arena has no boards.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Returns the score.
    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Number of boards currently won or drawn.
    pub fn finished_count(&self) -> usize {
        self.boards.iter().filter(|b| b.is_finished()).count()
    }

    /// Places the next mark of board `board` at cell `cell`.
    ///
    /// The score changes only when this move moves the board from
    /// in-progress to won or drawn, so a board is counted exactly once.
    #[instrument(skip(self), fields(boards = self.boards.len()))]
    pub fn play(mut self, board: usize, cell: usize) -> Step<Arena> {
        let count = self.boards.len();
        if board >= count {
            let reason = Rejection::NoSuchBoard { board, count };
            debug!(%reason, "Move rejected");
            return Step::new(self, Verdict::Rejected(reason));
        }

        let slot = &mut self.boards[board];
        let before: Terminal = *slot.terminal();
        let (updated, verdict) = std::mem::take(slot).apply_move(cell).into_parts();

        if verdict.accepted() && updated.terminal() != &before {
            self.score.record(updated.terminal());
            info!(board, terminal = %updated.terminal(), score = %self.score, "Score updated");
        }

        *slot = updated;
        Step::new(self, verdict)
    }

    /// Plays a parsed [`Move`].
    pub fn play_move(self, mv: Move) -> Step<Arena> {
        self.play(mv.board, mv.position.to_index())
    }

    /// Replaces every board with a fresh one. The score is kept.
    #[instrument(skip(self), fields(boards = self.boards.len()))]
    pub fn reset_boards(mut self) -> Self {
        for slot in &mut self.boards {
            *slot = std::mem::take(slot).reset();
        }
        info!("Boards reset");
        self
    }

    /// Zeroes the score. Boards are kept.
    #[instrument(skip(self), fields(score = %self.score))]
    pub fn reset_score(mut self) -> Self {
        self.score = Score::default();
        info!("Score reset");
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};

    fn play_all(arena: Arena, moves: &[(usize, usize)]) -> Arena {
        moves
            .iter()
            .fold(arena, |arena, (b, c)| arena.play(*b, *c).into_state())
    }

    #[test]
    fn test_new_builds_independent_fresh_boards() {
        let arena = Arena::new(8);
        assert_eq!(arena.len(), 8);
        assert!(arena.boards().iter().all(|b| *b == Board::new()));
        assert_eq!(arena.score(), &Score::default());
    }

    #[test]
    fn test_move_only_touches_addressed_board() {
        let arena = play_all(Arena::new(3), &[(1, 4)]);
        assert_eq!(arena.board(1).unwrap().square(Position::Center).mark(), Some(Mark::X));
        assert_eq!(arena.board(0).unwrap(), &Board::new());
        assert_eq!(arena.board(2).unwrap(), &Board::new());
    }

    #[test]
    fn test_unknown_board_rejected() {
        let arena = Arena::new(2);
        let step = arena.clone().play(2, 0);
        assert_eq!(
            step.verdict().rejection(),
            Some(Rejection::NoSuchBoard { board: 2, count: 2 })
        );
        assert_eq!(step.state(), &arena);
    }

    #[test]
    fn test_win_counted_once() {
        let arena = play_all(Arena::new(2), &[(0, 0), (0, 1), (0, 3), (0, 4), (0, 6)]);
        assert_eq!(arena.score().wins(Mark::X), 1);

        // Further moves on the finished board change nothing.
        let again = play_all(arena.clone(), &[(0, 8), (0, 2), (0, 6)]);
        assert_eq!(again, arena);
    }

    #[test]
    fn test_draw_counted() {
        let moves: Vec<(usize, usize)> = [0, 1, 2, 3, 5, 4, 6, 8, 7]
            .iter()
            .map(|c| (1, *c))
            .collect();
        let arena = play_all(Arena::new(2), &moves);
        assert_eq!(arena.score().draws(), 1);
        assert_eq!(arena.finished_count(), 1);
    }

    #[test]
    fn test_reset_boards_keeps_score() {
        let arena = play_all(Arena::new(2), &[(0, 0), (0, 1), (0, 3), (0, 4), (0, 6), (1, 4)]);
        let arena = arena.reset_boards();
        assert!(arena.boards().iter().all(|b| *b == Board::new()));
        assert_eq!(arena.score().wins(Mark::X), 1);
    }

    #[test]
    fn test_reset_score_keeps_boards() {
        let arena = play_all(Arena::new(2), &[(0, 0), (0, 1), (0, 3), (0, 4), (0, 6)]);
        let boards = arena.boards().to_vec();
        let arena = arena.reset_score();
        assert_eq!(arena.score(), &Score::default());
        assert_eq!(arena.boards(), boards.as_slice());
    }

    #[test]
    fn test_play_move_notation() {
        let mv: Move = "2:center".parse().unwrap();
        let arena = Arena::new(2).play_move(mv).into_state();
        assert_eq!(arena.board(1).unwrap().occupied_count(), 1);
    }
}
