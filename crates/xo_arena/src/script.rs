//! Scripted play: apply a list of moves to a fresh arena.

use derive_getters::Getters;
use tracing::{info, instrument, warn};
use xo_arena_core::{Arena, Move, Verdict};

/// Final arena plus the verdict of every move, in order.
#[derive(Debug, Clone, Getters)]
pub struct ReplayReport {
    arena: Arena,
    verdicts: Vec<(Move, Verdict)>,
}

impl ReplayReport {
    /// Number of moves that were rejected.
    pub fn rejected(&self) -> usize {
        self.verdicts.iter().filter(|(_, v)| !v.accepted()).count()
    }
}

/// Plays `moves` on a fresh arena of `board_count` boards.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn replay(board_count: usize, moves: &[Move]) -> ReplayReport {
    let mut arena = Arena::new(board_count);
    let mut verdicts = Vec::with_capacity(moves.len());

    for mv in moves {
        let (next, verdict) = arena.play_move(*mv).into_parts();
        match &verdict {
            Verdict::Rejected(reason) => warn!(%mv, %reason, "Move rejected"),
            _ => info!(%mv, %verdict, "Move applied"),
        }
        verdicts.push((*mv, verdict));
        arena = next;
    }

    info!(score = %arena.score(), "Replay finished");
    ReplayReport { arena, verdicts }
}
