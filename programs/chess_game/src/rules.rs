//! Move arbitration for a stored game.
//!
//! Handlers validate accounts; everything that depends on the game record itself lives here so it
//! can run against a plain `GameAccount`.

use std::str::FromStr;

use anchor_lang::prelude::*;
use chess::{Board, BoardStatus, ChessMove, Color, MoveGen, Piece, Square};

use crate::constants::MAX_BOARD_LEN;
use crate::error::ChessError;
use crate::state::{GameAccount, GameState};

/// Parse an algebraic square such as `e4`.
pub fn parse_square(text: &str) -> Result<Square> {
    require!(text.len() == 2 && text.is_ascii(), ChessError::InvalidSquare);
    let square =
        Square::from_str(&text.to_ascii_lowercase()).map_err(|_| ChessError::InvalidSquare)?;
    Ok(square)
}

/// Find the legal move from `from` to `to`. Pawn moves onto the last rank promote to a queen.
pub fn find_legal_move(board: &Board, from: Square, to: Square) -> Option<ChessMove> {
    MoveGen::new_legal(board).find(|candidate| {
        candidate.get_source() == from
            && candidate.get_dest() == to
            && matches!(candidate.get_promotion(), None | Some(Piece::Queen))
    })
}

/// Result of an accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Player whose move was applied.
    pub player: Pubkey,
    /// The move ended the game by checkmate or stalemate.
    pub game_over: bool,
}

/// Validate and apply a move submitted by `signer`.
pub fn apply_move(
    game: &mut GameAccount,
    signer: Pubkey,
    from: &str,
    to: &str,
) -> Result<MoveOutcome> {
    require!(!game.is_finished(), ChessError::GameFinished);
    require_keys_eq!(signer, game.admin, ChessError::Unauthorized);

    let mover = game.turn;
    let color = game.turn_color().ok_or(ChessError::InvalidMove)?;

    let board = Board::from_str(&game.board).map_err(|_| ChessError::CorruptBoard)?;
    require!(board.side_to_move() == color, ChessError::TurnMismatch);

    let from = parse_square(from)?;
    let to = parse_square(to)?;
    let chess_move = find_legal_move(&board, from, to).ok_or(ChessError::InvalidMove)?;

    let next = board.make_move_new(chess_move);
    let fen = next.to_string();
    require!(fen.len() <= MAX_BOARD_LEN, ChessError::BoardTooLong);
    game.board = fen;
    game.move_count = game.move_count.checked_add(1).ok_or(ChessError::Overflow)?;

    match next.status() {
        BoardStatus::Checkmate => {
            msg!("Checkmate by {}", mover);
            game.state = match color {
                Color::White => GameState::WhiteWon,
                Color::Black => GameState::BlackWon,
            };
            game.winner = Some(mover);
        }
        BoardStatus::Stalemate => {
            msg!("Stalemate");
            game.state = GameState::Draw;
            game.winner = None;
        }
        BoardStatus::Ongoing => game.pass_turn(),
    }
    Ok(MoveOutcome {
        player: mover,
        game_over: game.is_finished(),
    })
}

/// Stop an ongoing game without a result.
pub fn cancel(game: &mut GameAccount, signer: Pubkey) -> Result<()> {
    require!(!game.is_finished(), ChessError::GameFinished);
    require_keys_eq!(signer, game.admin, ChessError::Unauthorized);
    game.state = GameState::Canceled;
    game.winner = None;
    Ok(())
}

/// A game may only be closed by its admin once it has a result or was canceled.
pub fn ensure_closable(game: &GameAccount, signer: Pubkey) -> Result<()> {
    require_keys_eq!(signer, game.admin, ChessError::Unauthorized);
    require!(game.is_finished(), ChessError::GameNotFinished);
    Ok(())
}
