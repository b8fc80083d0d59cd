//! Program state and domain types.
//!
//! The position is stored as FEN text so any client can read it without knowing the engine's
//! internal encoding. `player_1` always plays White.

use anchor_lang::prelude::*;
use chess::{Board, Color};

use crate::error::ChessError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
/// Lifecycle of a game. Every variant other than `Ongoing` is terminal.
pub enum GameState {
    Ongoing,
    Draw,
    WhiteWon,
    BlackWon,
    /// Stopped by the admin before a result was reached.
    Canceled,
}

#[account]
#[derive(InitSpace)]
/// Game account holding both players, the position and the result.
pub struct GameAccount {
    /// Signer who created the game. Only this key may submit moves.
    pub admin: Pubkey,
    /// White.
    pub player_1: Pubkey,
    /// Black.
    pub player_2: Pubkey,
    /// FEN of the current position.
    #[max_len(100)]
    pub board: String,
    /// Player whose move is next. Left on the mover once the game ends by checkmate.
    pub turn: Pubkey,
    /// Half-moves applied since initialization.
    pub move_count: u32,
    pub state: GameState,
    /// Set only on checkmate.
    pub winner: Option<Pubkey>,
}

impl GameAccount {
    /// Reset the account to the standard starting position with `player_1` to move.
    pub fn setup(&mut self, admin: Pubkey, player_1: Pubkey, player_2: Pubkey) -> Result<()> {
        require_keys_neq!(player_1, player_2, ChessError::InvalidPlayers);
        self.admin = admin;
        self.player_1 = player_1;
        self.player_2 = player_2;
        self.board = Board::default().to_string();
        self.turn = player_1;
        self.move_count = 0;
        self.state = GameState::Ongoing;
        self.winner = None;
        Ok(())
    }

    pub fn is_finished(&self) -> bool {
        self.state != GameState::Ongoing
    }

    /// Colour played by the account in `turn`, or `None` if `turn` is neither player.
    pub fn turn_color(&self) -> Option<Color> {
        if self.turn == self.player_1 {
            Some(Color::White)
        } else if self.turn == self.player_2 {
            Some(Color::Black)
        } else {
            None
        }
    }

    pub fn pass_turn(&mut self) {
        self.turn = if self.turn == self.player_1 {
            self.player_2
        } else {
            self.player_1
        };
    }
}
