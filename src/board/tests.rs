use super::*;
use crate::error::Error;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::Human.opponent(), Player::Computer);
    assert_eq!(Player::Computer.opponent(), Player::Human);
}

#[test]
fn test_state_new() {
    let state = GameState::new(3, 4);
    assert_eq!(state.red, 3);
    assert_eq!(state.blue, 4);
    assert_eq!(state.count(Pile::Red), 3);
    assert_eq!(state.count(Pile::Blue), 4);
    assert_eq!(state.total(), 7);
}

#[test]
fn test_terminal() {
    assert!(GameState::new(0, 0).is_terminal());
    assert!(!GameState::new(1, 0).is_terminal());
    assert!(!GameState::new(0, 1).is_terminal());
    assert!(GameState::default().is_terminal());
}

#[test]
fn test_from_counts_rejects_negative() {
    assert_eq!(GameState::from_counts(2, 5).unwrap(), GameState::new(2, 5));
    assert!(matches!(
        GameState::from_counts(-1, 5),
        Err(Error::InvalidArgument { .. })
    ));
    assert!(matches!(
        GameState::from_counts(0, -3),
        Err(Error::InvalidArgument { .. })
    ));
}

#[test]
fn test_apply_does_not_mutate() {
    let state = GameState::new(2, 2);
    let next = state.apply(Move::new(Pile::Blue, 1)).unwrap();
    assert_eq!(state, GameState::new(2, 2));
    assert_eq!(next, GameState::new(2, 1));
}

#[test]
fn test_apply_rejects_illegal() {
    let state = GameState::new(1, 0);

    let err = state.apply(Move::new(Pile::Red, 2)).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidMove { pile: Pile::Red, count: 2, available: 1 }
    ));

    assert!(state.apply(Move::new(Pile::Blue, 1)).is_err());
    assert!(state.apply(Move::new(Pile::Red, 0)).is_err());
    assert!(GameState::new(5, 5).apply(Move::new(Pile::Red, 3)).is_err());
}

#[test]
fn test_parse_pile() {
    assert_eq!("red".parse::<Pile>().unwrap(), Pile::Red);
    assert_eq!(" Blue ".parse::<Pile>().unwrap(), Pile::Blue);
    assert_eq!("r".parse::<Pile>().unwrap(), Pile::Red);
    assert!("green".parse::<Pile>().is_err());
}

#[test]
fn test_parse_move() {
    assert_eq!("red 2".parse::<Move>().unwrap(), Move::new(Pile::Red, 2));
    assert_eq!("b 1".parse::<Move>().unwrap(), Move::new(Pile::Blue, 1));
    assert!(matches!("red".parse::<Move>(), Err(Error::ParseMove { .. })));
    assert!(matches!("red two".parse::<Move>(), Err(Error::ParseMove { .. })));
    assert!(matches!("red 1 2".parse::<Move>(), Err(Error::ParseMove { .. })));
}

#[test]
fn test_move_display() {
    assert_eq!(Move::new(Pile::Blue, 2).to_string(), "blue 2");
    assert_eq!(GameState::new(1, 2).to_string(), "red: 1, blue: 2");
}
