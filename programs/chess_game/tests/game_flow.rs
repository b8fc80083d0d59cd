use std::str::FromStr;

use anchor_lang::prelude::Pubkey;
use anchor_lang::{AccountDeserialize, AccountSerialize, Discriminator};
use chess_game::constants::GAME_ACCOUNT_SPACE;
use chess_game::error::ChessError;
use chess_game::rules;
use chess_game::state::{GameAccount, GameState};

struct Actors {
    admin: Pubkey,
    player_1: Pubkey,
    player_2: Pubkey,
}

fn actors() -> Actors {
    Actors {
        admin: Pubkey::new_unique(),
        player_1: Pubkey::new_unique(),
        player_2: Pubkey::new_unique(),
    }
}

fn empty_account() -> GameAccount {
    GameAccount {
        admin: Pubkey::default(),
        player_1: Pubkey::default(),
        player_2: Pubkey::default(),
        board: String::new(),
        turn: Pubkey::default(),
        move_count: 0,
        state: GameState::Ongoing,
        winner: None,
    }
}

/// Store the record the way the runtime does and decode it the way a client fetch does.
fn fetch(game: &GameAccount) -> GameAccount {
    let mut data = Vec::with_capacity(GAME_ACCOUNT_SPACE);
    game.try_serialize(&mut data).unwrap();
    assert!(data.len() <= GAME_ACCOUNT_SPACE);
    assert_eq!(&data[..8], GameAccount::DISCRIMINATOR);
    GameAccount::try_deserialize(&mut data.as_slice()).unwrap()
}

#[test]
fn initialized_game_reports_its_players() {
    let a = actors();
    let mut game = empty_account();
    game.setup(a.admin, a.player_1, a.player_2).unwrap();

    let fetched = fetch(&game);
    assert_eq!(fetched.admin, a.admin);
    assert_eq!(fetched.player_1, a.player_1);
    assert_eq!(fetched.player_2, a.player_2);
    assert_eq!(fetched.turn, a.player_1);
    assert_eq!(fetched.state, GameState::Ongoing);
    assert!(chess::Board::from_str(&fetched.board).is_ok());
}

#[test]
fn move_changes_the_fetched_board() {
    let a = actors();
    let mut game = empty_account();
    game.setup(a.admin, a.player_1, a.player_2).unwrap();
    let before = fetch(&game).board;

    rules::apply_move(&mut game, a.admin, "e2", "e4").unwrap();

    let after = fetch(&game);
    assert!(!after.board.is_empty());
    assert_ne!(after.board, before);
    assert_eq!(after.turn, a.player_2);
    assert_eq!(after.move_count, 1);
}

#[test]
fn rejected_move_leaves_record_untouched() {
    let a = actors();
    let mut game = empty_account();
    game.setup(a.admin, a.player_1, a.player_2).unwrap();
    let before = fetch(&game);

    let err = rules::apply_move(&mut game, a.player_1, "e2", "e4").unwrap_err();
    assert_eq!(err, ChessError::Unauthorized.into());
    let err = rules::apply_move(&mut game, a.admin, "e2", "d3").unwrap_err();
    assert_eq!(err, ChessError::InvalidMove.into());

    let after = fetch(&game);
    assert_eq!(after.board, before.board);
    assert_eq!(after.turn, before.turn);
    assert_eq!(after.move_count, 0);
}

#[test]
fn finished_game_round_trips_its_result() {
    let a = actors();
    let mut game = empty_account();
    game.setup(a.admin, a.player_1, a.player_2).unwrap();
    for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
        rules::apply_move(&mut game, a.admin, from, to).unwrap();
    }

    let fetched = fetch(&game);
    assert_eq!(fetched.state, GameState::BlackWon);
    assert_eq!(fetched.winner, Some(a.player_2));
    rules::ensure_closable(&fetched, a.admin).unwrap();
}

#[test]
fn mate_reports_game_over() {
    let a = actors();
    let mut game = empty_account();
    game.setup(a.admin, a.player_1, a.player_2).unwrap();
    let mut outcomes = Vec::new();
    let scholars_mate = [
        ("e2", "e4"),
        ("e7", "e5"),
        ("f1", "c4"),
        ("b8", "c6"),
        ("d1", "h5"),
        ("g8", "f6"),
        ("h5", "f7"),
    ];
    for (from, to) in scholars_mate {
        outcomes.push(rules::apply_move(&mut game, a.admin, from, to).unwrap());
    }

    let (last, earlier) = outcomes.split_last().unwrap();
    assert!(earlier.iter().all(|outcome| !outcome.game_over));
    assert!(last.game_over);
    assert_eq!(last.player, a.player_1);

    let fetched = fetch(&game);
    assert_eq!(fetched.state, GameState::WhiteWon);
    let err = rules::apply_move(&mut game, a.player_2, "a7", "a6").unwrap_err();
    assert_eq!(err, ChessError::GameFinished.into());
}

#[test]
fn canceled_game_can_be_closed() {
    let a = actors();
    let mut game = empty_account();
    game.setup(a.admin, a.player_1, a.player_2).unwrap();
    rules::apply_move(&mut game, a.admin, "d2", "d4").unwrap();
    rules::cancel(&mut game, a.admin).unwrap();

    let fetched = fetch(&game);
    assert_eq!(fetched.state, GameState::Canceled);
    assert!(fetched.winner.is_none());
    rules::ensure_closable(&fetched, a.admin).unwrap();
}
