//! Tic-tac-toe implementation for MCTS validation.
//!
//! Tic-tac-toe is small enough to reason about by hand, which makes it a
//! good fixture for the search:
//! - MCTS should take an immediate win when one exists
//! - MCTS should never lose against a random opponent
//!
//! The score footprint is the winner, so a greedy rollout takes a
//! completing move as soon as one is available.

use playout_core::{Game, Outcome};
use std::fmt;

/// Tic-tac-toe player.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opposing player.
    pub fn opposite(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Tic-tac-toe board state.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct TicTacToeState {
    /// Board: 9 cells, indexed 0-8 (row-major).
    /// ```text
    /// 0 | 1 | 2
    /// ---------
    /// 3 | 4 | 5
    /// ---------
    /// 6 | 7 | 8
    /// ```
    board: [Option<Player>; 9],

    /// Current player to move.
    current: Player,

    /// Cached winner (if any).
    winner: Option<Player>,
}

impl TicTacToeState {
    /// Create a new empty board with X to move.
    pub fn new() -> Self {
        Self {
            board: [None; 9],
            current: Player::X,
            winner: None,
        }
    }

    /// Parse a board from 9 cells in row-major order, `X`, `O` or `.`.
    /// Whitespace is ignored. X moves first, so X is to move when both
    /// sides have the same number of marks.
    ///
    /// Returns `None` for a malformed layout.
    ///
    /// ```
    /// use playout_mcts::games::{Player, TicTacToeState};
    ///
    /// let state = TicTacToeState::from_layout("XX. OO. ...").unwrap();
    /// assert_eq!(state.current_player(), Player::X);
    /// ```
    pub fn from_layout(layout: &str) -> Option<Self> {
        let cells: Vec<char> = layout.chars().filter(|c| !c.is_whitespace()).collect();
        if cells.len() != 9 {
            return None;
        }

        let mut board = [None; 9];
        for (cell, c) in board.iter_mut().zip(cells) {
            *cell = match c {
                'X' | 'x' => Some(Player::X),
                'O' | 'o' => Some(Player::O),
                '.' => None,
                _ => return None,
            };
        }

        let count = |p: Player| board.iter().filter(|c| **c == Some(p)).count();
        let current = match count(Player::X).checked_sub(count(Player::O)) {
            Some(0) => Player::X,
            Some(1) => Player::O,
            _ => return None,
        };

        let mut state = Self {
            board,
            current,
            winner: None,
        };
        state.winner = state.check_winner();
        Some(state)
    }

    /// Get the current player to move.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Get the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Get the piece at a cell, if any.
    pub fn get(&self, cell: usize) -> Option<Player> {
        self.board.get(cell).copied().flatten()
    }

    /// Check for a winner on the current board.
    fn check_winner(&self) -> Option<Player> {
        const LINES: [[usize; 3]; 8] = [
            [0, 1, 2], // top row
            [3, 4, 5], // middle row
            [6, 7, 8], // bottom row
            [0, 3, 6], // left column
            [1, 4, 7], // center column
            [2, 5, 8], // right column
            [0, 4, 8], // main diagonal
            [2, 4, 6], // anti-diagonal
        ];

        for line in LINES {
            if let Some(player) = self.board[line[0]] {
                if self.board[line[1]] == Some(player) && self.board[line[2]] == Some(player) {
                    return Some(player);
                }
            }
        }
        None
    }

    /// Check if the board is full (draw if no winner).
    fn is_full(&self) -> bool {
        self.board.iter().all(|c| c.is_some())
    }
}

impl Default for TicTacToeState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TicTacToeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f, "-----------")?;
            }
            for col in 0..3 {
                if col > 0 {
                    write!(f, " | ")?;
                }
                let cell = row * 3 + col;
                match self.board[cell] {
                    Some(Player::X) => write!(f, " X ")?,
                    Some(Player::O) => write!(f, " O ")?,
                    None => write!(f, "   ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Tic-tac-toe action (cell index 0-8).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TicTacToeAction(pub u8);

impl TicTacToeAction {
    /// Get the row (0-2).
    pub fn row(self) -> u8 {
        self.0 / 3
    }

    /// Get the column (0-2).
    pub fn col(self) -> u8 {
        self.0 % 3
    }
}

impl fmt::Display for TicTacToeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

/// Tic-tac-toe game implementation.
#[derive(Clone, Copy, Debug, Default)]
pub struct TicTacToe;

impl Game for TicTacToe {
    type State = TicTacToeState;
    type Action = TicTacToeAction;
    type Player = Player;
    type Footprint = Option<Player>;

    fn initial_state(&self) -> Self::State {
        TicTacToeState::new()
    }

    fn is_terminal(&self, state: &Self::State) -> bool {
        state.winner.is_some() || state.is_full()
    }

    fn current_player(&self, state: &Self::State) -> Self::Player {
        state.current
    }

    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action> {
        if state.winner.is_some() {
            return Vec::new();
        }

        state
            .board
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| TicTacToeAction(i as u8))
            .collect()
    }

    fn apply(&self, state: &Self::State, action: Self::Action) -> Self::State {
        let mut new_state = state.clone();
        new_state.board[action.0 as usize] = Some(state.current);
        new_state.current = state.current.opposite();
        new_state.winner = new_state.check_winner();
        new_state
    }

    fn score_footprint(&self, state: &Self::State) -> Self::Footprint {
        state.winner
    }

    fn outcome(&self, state: &Self::State) -> Option<Outcome<Self::Player>> {
        if let Some(winner) = state.winner {
            Some(Outcome::win(winner, winner.opposite()))
        } else if state.is_full() {
            Some(Outcome::draw(Player::X, Player::O))
        } else {
            None // Game not over
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use playout_core::GameResult;

    #[test]
    fn test_initial_state() {
        let game = TicTacToe;
        let state = game.initial_state();

        assert_eq!(game.current_player(&state), Player::X);
        assert!(state.winner().is_none());
        assert!(!game.is_terminal(&state));
        assert_eq!(game.outcome(&state), None);
    }

    #[test]
    fn test_legal_moves_partial_board() {
        let game = TicTacToe;
        let state = game.apply(&game.initial_state(), TicTacToeAction(4));
        let actions = game.legal_actions(&state);

        assert_eq!(actions.len(), 8);
        assert!(!actions.contains(&TicTacToeAction(4)));
        // Generated in cell order
        assert_eq!(actions[0], TicTacToeAction(0));
        assert_eq!(actions[7], TicTacToeAction(8));
    }

    #[test]
    fn test_x_wins_top_row() {
        let game = TicTacToe;
        let mut state = game.initial_state();

        for cell in [0, 3, 1, 4, 2] {
            state = game.apply(&state, TicTacToeAction(cell));
        }

        assert!(game.is_terminal(&state));
        assert_eq!(state.winner(), Some(Player::X));
        assert!(game.legal_actions(&state).is_empty());

        let outcome = game.outcome(&state).unwrap();
        assert_eq!(outcome.result_for(Player::X), Some(GameResult::Win));
        assert_eq!(outcome.result_for(Player::O), Some(GameResult::Loss));
    }

    #[test]
    fn test_draw() {
        let game = TicTacToe;
        let mut state = game.initial_state();

        // X O X
        // X O O
        // O X X
        for cell in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            state = game.apply(&state, TicTacToeAction(cell));
        }

        assert!(game.is_terminal(&state));
        assert!(state.winner().is_none());
        let outcome = game.outcome(&state).unwrap();
        assert!(!outcome.is_win_for(Player::X));
        assert_eq!(outcome.result_for(Player::O), Some(GameResult::Draw));
    }

    #[test]
    fn test_footprint_changes_on_win_only() {
        let game = TicTacToe;
        let state = TicTacToeState::from_layout("XX. OO. ...").unwrap();

        assert_eq!(game.score_footprint(&state), None);
        let quiet = game.apply(&state, TicTacToeAction(8));
        assert_eq!(game.score_footprint(&quiet), None);
        let winning = game.apply(&state, TicTacToeAction(2));
        assert_eq!(game.score_footprint(&winning), Some(Player::X));
    }

    #[test]
    fn test_from_layout() {
        let state = TicTacToeState::from_layout("X.. .O. ..X").unwrap();
        assert_eq!(state.current_player(), Player::O);
        assert_eq!(state.get(0), Some(Player::X));
        assert_eq!(state.get(4), Some(Player::O));
        assert_eq!(state.get(1), None);
    }

    #[test]
    fn test_from_layout_detects_winner() {
        let state = TicTacToeState::from_layout("OOO XX. X..").unwrap();
        assert_eq!(state.winner(), Some(Player::O));
        assert!(TicTacToe.is_terminal(&state));
    }

    #[test]
    fn test_from_layout_rejects_malformed() {
        assert!(TicTacToeState::from_layout("XX").is_none());
        assert!(TicTacToeState::from_layout("XXX ... ...").is_none());
        assert!(TicTacToeState::from_layout("O.. ... ...").is_none());
        assert!(TicTacToeState::from_layout("X?. ... ...").is_none());
    }

    #[test]
    fn test_display() {
        let game = TicTacToe;
        let mut state = game.initial_state();

        state = game.apply(&state, TicTacToeAction(0)); // X
        state = game.apply(&state, TicTacToeAction(4)); // O

        let display = format!("{}", state);
        assert!(display.contains("X"));
        assert!(display.contains("O"));
    }
}
