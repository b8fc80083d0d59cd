//! Chess Game — a two-player chess match refereed on-chain.
//!
//! High level flow:
//! - The admin creates a `GameAccount` (fresh keypair account) naming White and Black.
//! - The admin relays each move as a pair of squares; the program checks it against the legal moves
//!   of the stored position and writes back the new FEN.
//! - Checkmate or stalemate ends the game. The admin may cancel an ongoing game and close a
//!   finished one to reclaim rent.

use anchor_lang::prelude::*;
pub mod constants;
pub mod error;
use error::*;
pub mod events;
use events::*;
pub mod rules;
pub mod state;
use constants::*;
use state::*;
declare_id!("4YJdg3btfUVYP6PZsGLhaJMLaBxFzmM1MWvkS2BYKHPi");

#[program]
pub mod chess_game {
    use super::*;

    /// Create a game between `player_1` (White) and `player_2` (Black) from the starting position.
    pub fn initialize_game(
        ctx: Context<InitializeGame>,
        player_1: Pubkey,
        player_2: Pubkey,
    ) -> Result<()> {
        let admin = ctx.accounts.admin.key();
        let game_key = ctx.accounts.game.key();
        msg!("Initializing game {}: {} vs {}", game_key, player_1, player_2);

        let game = &mut ctx.accounts.game;
        game.setup(admin, player_1, player_2)?;

        emit!(GameInitializedEvent {
            game: game_key,
            admin,
            player_1,
            player_2,
        });
        Ok(())
    }

    /// Apply the move `from` -> `to` (algebraic squares) for the player whose turn it is.
    pub fn make_move(ctx: Context<MakeMove>, from: String, to: String) -> Result<()> {
        let admin = ctx.accounts.admin.key();
        let game_key = ctx.accounts.game.key();
        let game = &mut ctx.accounts.game;

        let outcome = rules::apply_move(game, admin, &from, &to)?;
        let player = outcome.player;
        msg!("Move {}-{} by {}, new board: {}", from, to, player, game.board);

        emit!(MoveMadeEvent {
            game: game_key,
            player,
            from,
            to,
            board: game.board.clone(),
            move_count: game.move_count,
        });
        if outcome.game_over {
            emit!(GameOverEvent {
                game: game_key,
                state: game.state,
                winner: game.winner,
            });
        }
        Ok(())
    }

    /// Stop an ongoing game without a result.
    pub fn cancel_game(ctx: Context<CancelGame>) -> Result<()> {
        let admin = ctx.accounts.admin.key();
        let game_key = ctx.accounts.game.key();
        msg!("Canceling game {}", game_key);

        let game = &mut ctx.accounts.game;
        rules::cancel(game, admin)?;

        emit!(GameOverEvent {
            game: game_key,
            state: game.state,
            winner: game.winner,
        });
        Ok(())
    }

    /// Close a finished game and return its rent to the admin.
    pub fn close_game(ctx: Context<CloseGame>) -> Result<()> {
        msg!("Closing game {}", ctx.accounts.game.key());
        rules::ensure_closable(&ctx.accounts.game, ctx.accounts.admin.key())
    }
}

#[derive(Accounts)]
/// Accounts for creating a game. The game account is a fresh keypair and must co-sign.
pub struct InitializeGame<'info> {
    #[account(init, payer = admin, space = GAME_ACCOUNT_SPACE)]
    pub game: Account<'info, GameAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
/// Accounts for relaying a move. The admin key is checked by `rules::apply_move` after the game
/// state, so a finished game reports `GameFinished` to any signer.
pub struct MakeMove<'info> {
    #[account(mut)]
    pub game: Account<'info, GameAccount>,

    pub admin: Signer<'info>,
}

#[derive(Accounts)]
/// Accounts for canceling an ongoing game. The admin key is checked by `rules::cancel`.
pub struct CancelGame<'info> {
    #[account(mut)]
    pub game: Account<'info, GameAccount>,

    pub admin: Signer<'info>,
}

#[derive(Accounts)]
/// Accounts for closing a finished game.
pub struct CloseGame<'info> {
    #[account(
        mut,
        close = admin, // rent goes back to the admin
        has_one = admin @ ChessError::Unauthorized
    )]
    pub game: Account<'info, GameAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,
}
