//! End-to-end tests for scripted play and its text output.

use xo_arena::{ArenaConfig, arena_text, replay};
use xo_arena_core::{Mark, Move};

fn moves(notation: &[&str]) -> Vec<Move> {
    notation
        .iter()
        .map(|s| s.parse().expect("Valid notation"))
        .collect()
}

#[test]
fn test_two_boards_win_and_draw() {
    let mut script = moves(&["1:0", "1:1", "1:3", "1:4", "1:6"]);
    script.extend(moves(&["2:0", "2:1", "2:2", "2:3", "2:5", "2:4", "2:6", "2:8", "2:7"]));

    let report = replay(2, &script);
    assert_eq!(report.rejected(), 0);
    assert_eq!(report.arena().score().wins(Mark::X), 1);
    assert_eq!(report.arena().score().draws(), 1);

    let text = arena_text(report.arena(), &ArenaConfig::default());
    assert!(text.contains("Board 1 - X wins!"));
    assert!(text.contains("Board 2 - Draw!"));
    assert!(text.contains("Score: X 1 · O 0 · Draw 1"));
}

#[test]
fn test_repeated_cell_is_ignored() {
    let report = replay(1, &moves(&["1:center", "1:center", "1:0"]));
    assert_eq!(report.rejected(), 1);

    let board = report.arena().board(0).expect("Board 1");
    assert_eq!(board.occupied_count(), 2);
    assert_eq!(board.next_mark(), Mark::X);
}

#[test]
fn test_printed_cell_number_is_the_cell_played() {
    let before = arena_text(replay(1, &[]).arena(), &ArenaConfig::default());
    assert!(before.contains("0|1|2\n-+-+-\n3|4|5"));

    let report = replay(1, &moves(&["1:2"]));
    let after = arena_text(report.arena(), &ArenaConfig::default());
    assert!(after.contains("0|1|X\n-+-+-\n3|4|5"));
}
