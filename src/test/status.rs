use super::world;
use crate::game::{Astronaut, GameStatus, Impostor, Pos, World};

#[test]
fn status_from_counts() {
    assert_eq!(GameStatus::from_counts(2, 0, 1, 0), GameStatus::Continue);
    assert_eq!(GameStatus::from_counts(2, 1, 1, 1), GameStatus::Victory);
    assert_eq!(GameStatus::from_counts(2, 2, 1, 0), GameStatus::Defeat);
}

#[test]
fn victory_takes_priority_when_both_sides_are_wiped_out() {
    assert_eq!(GameStatus::from_counts(3, 3, 2, 2), GameStatus::Victory);

    let mut dead_astro = Astronaut::new(Pos::new(0, 0));
    dead_astro.alive = false;
    let mut dead_imp = Impostor::new(Pos::new(1, 1));
    dead_imp.alive = false;
    let w = World::from_parts(1, 5, vec![dead_astro], vec![dead_imp]).expect("build world");
    assert_eq!(w.status(), GameStatus::Victory);
}

#[test]
fn empty_impostor_side_counts_as_victory() {
    let w = world(1, 5, &[(0, 0)], &[]);
    assert_eq!(w.status(), GameStatus::Victory);
}

#[test]
fn evaluation_is_idempotent() {
    let w = world(1, 5, &[(0, 0), (2, 2)], &[(1, 1)]);
    let first = GameStatus::evaluate(&w);
    for _ in 0..5 {
        assert_eq!(GameStatus::evaluate(&w), first);
    }
    assert_eq!(first, GameStatus::Continue);
}

#[test]
fn status_text_round_trips_and_rejects_unknown() {
    for status in [GameStatus::Continue, GameStatus::Victory, GameStatus::Defeat] {
        assert_eq!(status.to_string().parse::<GameStatus>(), Ok(status));
    }
    assert!("victory".parse::<GameStatus>().is_err());
    assert!(!GameStatus::Continue.is_terminal());
    assert!(GameStatus::Defeat.is_terminal());
}
