use anchor_lang::prelude::*;

use crate::state::GameAccount;

/// Upper bound on the stored FEN text. Must match `#[max_len]` on `GameAccount::board`.
pub const MAX_BOARD_LEN: usize = 100;

pub const GAME_ACCOUNT_SPACE: usize = 8 + GameAccount::INIT_SPACE;
