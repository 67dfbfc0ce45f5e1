//! Tests of MCTS playing full tic-tac-toe decisions.
//!
//! Checks the behaviour a caller relies on:
//! - A position one move from a win yields that move
//! - Identical seeds play identical games
//! - MCTS beats a random opponent

use playout_core::{Game, PlayoutError};
use playout_mcts::{
    choose_action,
    games::{Player, TicTacToe, TicTacToeAction, TicTacToeState},
    GreedyRollout, Mcts, MctsConfig,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Create an MCTS instance with the given seed.
fn create_mcts(seed: u64, iterations: usize) -> Mcts<TicTacToe, GreedyRollout<ChaCha8Rng>> {
    Mcts::new(
        MctsConfig::with_iterations(iterations),
        GreedyRollout::seeded(seed),
    )
}

/// X to move:
/// ```text
/// X | X | .
/// O | O | .
/// . | . | .
/// ```
/// Cell 2 wins on the spot.
#[test]
fn test_mcts_finds_winning_move() {
    let game = TicTacToe;
    let state = TicTacToeState::from_layout("XX. OO. ...").unwrap();

    for seed in 0..10 {
        let action = create_mcts(seed, 50).choose_action(&game, &state).unwrap();
        assert_eq!(
            action,
            TicTacToeAction(2),
            "MCTS should find winning move at cell 2 (seed {seed})"
        );
    }
}

/// Same position for O, who wins by completing the middle row.
#[test]
fn test_mcts_finds_winning_move_as_second_player() {
    let game = TicTacToe;
    let state = TicTacToeState::from_layout("XX. OO. X..").unwrap();
    assert_eq!(state.current_player(), Player::O);

    let action = choose_action(
        &game,
        &state,
        MctsConfig::with_iterations(50),
        ChaCha8Rng::seed_from_u64(7),
    )
    .unwrap();
    assert_eq!(action, TicTacToeAction(5));
}

#[test]
fn test_winning_child_collects_most_visits() {
    let game = TicTacToe;
    let state = TicTacToeState::from_layout("XX. OO. ...").unwrap();

    let result = create_mcts(3, 200).search(&game, &state).unwrap();
    let best = result.best().unwrap();

    assert_eq!(best.action, TicTacToeAction(2));
    // Every simulation through the winning move is a win.
    assert_eq!(best.wins, best.visits);
    assert_eq!(result.root_visits, 200);
}

#[test]
fn test_finished_game_has_no_answer() {
    let game = TicTacToe;
    let state = TicTacToeState::from_layout("XOX XOO OXX").unwrap();
    assert!(game.is_terminal(&state));

    let result = create_mcts(0, 50).choose_action(&game, &state);
    assert_eq!(result, Err(PlayoutError::NoLegalActions));
}

/// Same seed produces identical games.
#[test]
fn test_mcts_deterministic() {
    let game = TicTacToe;

    let play_game = |seed: u64| -> Vec<TicTacToeAction> {
        let mut mcts = create_mcts(seed, 100);
        let mut state = game.initial_state();
        let mut moves = Vec::new();

        while !game.is_terminal(&state) {
            let action = mcts.choose_action(&game, &state).unwrap();
            moves.push(action);
            state = game.apply(&state, action);
        }
        moves
    };

    let game1 = play_game(12345);
    let game2 = play_game(12345);

    assert_eq!(
        game1, game2,
        "Same seed should produce identical game sequences"
    );
}

/// MCTS as X should win most games against a uniformly random O.
#[test]
fn test_mcts_beats_random_opponent() {
    let game = TicTacToe;
    let mut wins = 0;
    let mut losses = 0;

    for seed in 0..20 {
        let mut mcts = create_mcts(seed, 300);
        let mut rng = ChaCha8Rng::seed_from_u64(seed + 1000);
        let mut state = game.initial_state();

        while !game.is_terminal(&state) {
            let action = if game.current_player(&state) == Player::X {
                mcts.choose_action(&game, &state).unwrap()
            } else {
                let actions = game.legal_actions(&state);
                actions[rng.gen_range(0..actions.len())]
            };
            state = game.apply(&state, action);
        }

        match game.outcome(&state).unwrap().winner() {
            Some(Player::X) => wins += 1,
            Some(Player::O) => losses += 1,
            None => {}
        }
    }

    assert!(
        wins >= 12 && wins > losses,
        "MCTS (X) won only {wins} of 20 games against random play ({losses} losses)"
    );
}
