use anchor_lang::prelude::*;

#[error_code]
pub enum ChessError {
    #[msg("The game is already finished")]
    GameFinished,

    #[msg("Only the admin can perform this action")]
    Unauthorized,

    #[msg("Invalid move")]
    InvalidMove,

    #[msg("Invalid square; expected a1..h8")]
    InvalidSquare,

    #[msg("Players must be two distinct accounts")]
    InvalidPlayers,

    #[msg("Turn does not match the side to move on the board")]
    TurnMismatch,

    #[msg("Stored board is not a valid position")]
    CorruptBoard,

    #[msg("Game is still in progress")]
    GameNotFinished,

    #[msg("Board text exceeds the account capacity")]
    BoardTooLong,

    #[msg("Arithmetic overflow")]
    Overflow,
}
