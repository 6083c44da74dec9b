//! Integration tests for the command flow: keys -> commands -> session

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use blockfall::core::{collides, DropOutcome, FieldSession, Matrix};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::types::{Command, PieceKind};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn assert_session_invariants(s: &FieldSession) {
    assert!(s.grid().cells().iter().all(|&c| c <= 7));
    assert!(!collides(s.grid(), s.active().matrix(), s.active().position()));
    for y in 1..s.grid().height() {
        assert!(!s.grid().is_row_full(y), "row {} left full", y);
    }
}

#[test]
fn test_keys_drive_session() {
    let mut s = FieldSession::with_first_piece(Matrix::new(12, 20), PieceKind::T, 1);

    for code in [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('h')] {
        if let Some(cmd) = handle_key_event(key(code)) {
            s.apply(cmd);
        }
    }
    assert_eq!(s.active().position().x, 2);

    let cmd = handle_key_event(key(KeyCode::Down)).unwrap();
    assert_eq!(cmd, Command::SoftDrop);
    s.apply(cmd);
    assert_eq!(s.active().position().y, 1);

    let before = s.active().matrix().clone();
    s.apply(handle_key_event(key(KeyCode::Char('w'))).unwrap());
    assert_ne!(s.active().matrix(), &before);
    s.apply(handle_key_event(key(KeyCode::Char('q'))).unwrap());
    assert_eq!(s.active().matrix(), &before);
}

#[test]
fn test_unmapped_keys_do_nothing() {
    assert_eq!(handle_key_event(key(KeyCode::Char('p'))), None);
    assert_eq!(handle_key_event(key(KeyCode::Enter)), None);
    assert!(should_quit(key(KeyCode::Esc)));
    assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(!should_quit(key(KeyCode::Char('c'))));
}

#[test]
fn test_long_random_play_keeps_invariants() {
    let commands = [
        Command::MoveLeft,
        Command::RotateCw,
        Command::SoftDrop,
        Command::MoveRight,
        Command::RotateCcw,
        Command::MoveRight,
        Command::SoftDrop,
        Command::SoftDrop,
    ];

    for seed in [1, 7, 12345] {
        let mut s = FieldSession::new(10, 16, seed);
        let mut locks = 0;
        for step in 0..4000usize {
            let cmd = commands[(step * 7 + step / 3) % commands.len()];
            s.apply(cmd);
            if let Some(outcome) = s.advance_time(16) {
                if outcome.locked() {
                    locks += 1;
                }
            }
            assert_session_invariants(&s);
        }
        assert!(locks > 0);
        assert!(s.pieces_spawned() > 1);
    }
}

#[test]
fn test_same_seed_same_game() {
    let script = [
        Command::RotateCw,
        Command::MoveLeft,
        Command::SoftDrop,
        Command::MoveRight,
        Command::SoftDrop,
    ];

    let mut a = FieldSession::new(12, 20, 42);
    let mut b = FieldSession::new(12, 20, 42);
    for i in 0..2000 {
        let cmd = script[i % script.len()];
        a.apply(cmd);
        b.apply(cmd);
    }
    assert_eq!(a.snapshot(), b.snapshot());
    assert_eq!(a.pieces_spawned(), b.pieces_spawned());
}

#[test]
fn test_gravity_alone_stacks_until_reset() {
    let mut s = FieldSession::with_config(8, 10, 100, 3);
    let mut top_outs = 0;
    for _ in 0..5000 {
        if let Some(DropOutcome::ToppedOut { .. }) = s.advance_time(101) {
            top_outs += 1;
            assert!(s.grid().is_empty());
        }
        assert_session_invariants(&s);
    }
    assert!(top_outs > 0);
    assert_eq!(s.top_outs(), top_outs);
}
