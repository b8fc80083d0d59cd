use anchor_lang::prelude::*;

use crate::state::GameState;

#[event]
pub struct GameInitializedEvent {
    pub game: Pubkey,
    pub admin: Pubkey,
    pub player_1: Pubkey,
    pub player_2: Pubkey,
}

#[event]
pub struct MoveMadeEvent {
    pub game: Pubkey,
    pub player: Pubkey,
    pub from: String,
    pub to: String,
    pub board: String,
    pub move_count: u32,
}

#[event]
pub struct GameOverEvent {
    pub game: Pubkey,
    pub state: GameState,
    pub winner: Option<Pubkey>,
}
