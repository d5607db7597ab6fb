//! Tests for the minimax search.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tictactoe_core::{GameState, MinimaxPlayer, choose_move, evaluate};

#[test]
fn test_win_in_one_is_found() {
    // X: 0, 1  O: 3, 4  X to move; only 2 wins immediately.
    let mut game = GameState::from_moves(&[0, 3, 1, 4]).unwrap();
    let evaluation = evaluate(&mut game);
    assert_eq!(evaluation.value, 9);
    assert_eq!(evaluation.moves, vec![2]);
}

#[test]
fn test_all_winning_moves_are_candidates() {
    // X: 0, 4  O: 1, 5  X to move; only 8 completes a line.
    let mut game = GameState::from_moves(&[0, 1, 4, 5]).unwrap();
    let evaluation = evaluate(&mut game);
    assert_eq!(evaluation.value, 9);
    assert_eq!(evaluation.moves, vec![8]);

    // X: 0, 2, 4  O: 1, 5, 7  X to move; 6 and 8 both win at once.
    let mut game = GameState::from_moves(&[0, 1, 2, 5, 4, 7]).unwrap();
    let evaluation = evaluate(&mut game);
    assert_eq!(evaluation.value, 9);
    assert_eq!(evaluation.moves, vec![6, 8]);
}

#[test]
fn test_forced_block() {
    // X threatens the top row; O must take 2.
    let mut game = GameState::from_moves(&[0, 4, 1]).unwrap();
    let evaluation = evaluate(&mut game);
    assert_eq!(evaluation.moves, vec![2]);
    assert!(evaluation.value > -8);
}

#[test]
fn test_fork_loses_for_every_reply() {
    // X: 0, 4, 6  O: 1, 8  X threatens both 2 and 3; every O reply loses next ply.
    let mut game = GameState::from_moves(&[0, 1, 4, 8, 6]).unwrap();
    let evaluation = evaluate(&mut game);
    assert_eq!(evaluation.value, -8);
    assert_eq!(evaluation.moves, vec![2, 3, 5, 7]);
}

#[test]
fn test_search_restores_state() {
    for moves in [&[][..], &[4][..], &[0, 4, 8][..], &[0, 3, 1, 4][..]] {
        let mut game = GameState::from_moves(moves).unwrap();
        let before = game.clone();
        evaluate(&mut game);
        assert_eq!(game, before);
    }
}

#[test]
fn test_terminal_state_has_no_move() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let mut won = GameState::from_moves(&[0, 1, 3, 4, 6]).unwrap();
    assert_eq!(choose_move(&mut won, &mut rng), None);

    let mut drawn = GameState::from_moves(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap();
    assert_eq!(choose_move(&mut drawn, &mut rng), None);
}

#[test]
fn test_empty_board_every_opening_draws() {
    let mut game = GameState::new();
    let evaluation = evaluate(&mut game);
    assert_eq!(evaluation.value, 0);
    assert_eq!(evaluation.moves, (0..9).collect::<Vec<_>>());
}

#[test]
fn test_opening_choice_is_optimal_and_varies() {
    let mut game = GameState::new();
    let optimal = evaluate(&mut game).moves;

    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut seen = Vec::new();
    for _ in 0..6 {
        let cell = choose_move(&mut game, &mut rng).unwrap();
        assert!(optimal.contains(&cell));
        assert!(game.history().is_empty());
        if !seen.contains(&cell) {
            seen.push(cell);
        }
    }
    assert!(seen.len() > 1, "tie-break never varied: {:?}", seen);
}

#[test]
fn test_chosen_moves_are_always_legal() {
    let mut cpu = MinimaxPlayer::with_seed(5);
    for opening in 0..9 {
        let mut game = GameState::from_moves(&[opening]).unwrap();
        while let Some(cell) = cpu.best_move(&mut game) {
            assert!(cell < 9);
            assert!(game.valid_moves().contains(&cell));
            game.play(cell).unwrap();
        }
        assert!(game.is_over());
    }
}

#[test]
fn test_self_play_always_draws() {
    let mut cpu = MinimaxPlayer::with_seed(9);
    for _ in 0..3 {
        let game = cpu.play_game(GameState::new());
        assert!(game.is_draw());
    }
}
