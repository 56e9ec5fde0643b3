//! Tests for the match registry: lookup, listing and per-match serialization
//! of concurrent requests.

use broadside::MatchRegistry;
use broadside::rules::{
    Coordinate, ErrorKind, MatchError, MatchId, MatchRules, Phase, PlayerId, Ship, Shot,
};
use std::sync::Barrier;

fn ship(cells: &[(i32, i32)]) -> Ship {
    Ship::new(cells.iter().copied().map(Coordinate::from).collect())
}

fn ready_match(registry: &MatchRegistry) -> (MatchId, PlayerId, PlayerId) {
    let id = registry.create_match();
    let alice = registry.join(id, "Alice").unwrap();
    let bob = registry.join(id, "Bob").unwrap();
    registry.place_fleet(id, alice, vec![ship(&[(0, 0)])]).unwrap();
    registry.place_fleet(id, bob, vec![ship(&[(5, 5)])]).unwrap();
    (id, alice, bob)
}

#[test]
fn test_created_match_is_empty() {
    let registry = MatchRegistry::default();
    let id = registry.create_match();

    let game = registry.get_match(id).unwrap();
    assert_eq!(*game.id(), id);
    assert!(game.players().is_empty());
    assert!(game.turn().is_none());
    assert!(!*game.finished());
    assert_eq!(game.phase(), Phase::AwaitingPlayers);
}

#[test]
fn test_created_ids_are_distinct() {
    let registry = MatchRegistry::default();
    let a = registry.create_match();
    let b = registry.create_match();
    assert_ne!(a, b);
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_unknown_match_is_not_found() {
    let registry = MatchRegistry::default();
    let missing = MatchId::random();

    let err = registry.get_match(missing).unwrap_err();
    assert_eq!(err, MatchError::MatchNotFound(missing));
    assert_eq!(err.kind(), ErrorKind::NotFound);

    assert_eq!(
        registry.join(missing, "Alice").unwrap_err().kind(),
        ErrorKind::NotFound
    );
    assert_eq!(
        registry.view(missing, None).unwrap_err().kind(),
        ErrorKind::NotFound
    );
}

#[test]
fn test_list_matches_reports_every_match() {
    let registry = MatchRegistry::default();
    assert!(registry.list_matches().is_empty());

    let (ready, _, _) = ready_match(&registry);
    let fresh = registry.create_match();

    let summaries = registry.list_matches();
    assert_eq!(summaries.len(), 2);
    let ready_summary = summaries.iter().find(|s| s.id == ready).unwrap();
    assert_eq!(ready_summary.phase, Phase::InProgress);
    assert_eq!(ready_summary.players, vec!["Alice", "Bob"]);
    let fresh_summary = summaries.iter().find(|s| s.id == fresh).unwrap();
    assert_eq!(fresh_summary.phase, Phase::AwaitingPlayers);
}

#[test]
fn test_matches_use_registry_rules() {
    let registry = MatchRegistry::new(MatchRules::classic());
    let id = registry.create_match();
    let alice = registry.join(id, "Alice").unwrap();

    let err = registry
        .place_fleet(id, alice, vec![ship(&[(0, 0)])])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidFleet);
}

#[test]
fn test_full_game_through_registry() {
    let registry = MatchRegistry::default();
    let (id, alice, bob) = ready_match(&registry);

    let miss = registry.fire(id, alice, Coordinate::new(9, 9)).unwrap();
    assert_eq!(*miss.shot(), Shot::Miss);
    let miss = registry.fire(id, bob, Coordinate::new(9, 9)).unwrap();
    assert_eq!(*miss.shot(), Shot::Miss);
    let win = registry.fire(id, alice, Coordinate::new(5, 5)).unwrap();
    assert_eq!(*win.shot(), Shot::Hit);
    assert_eq!(*win.winner(), Some(alice));

    let err = registry.fire(id, bob, Coordinate::new(0, 0)).unwrap_err();
    assert_eq!(err, MatchError::MatchFinished);
}

#[test]
fn test_concurrent_fire_accepts_one_shot_per_turn() {
    let registry = MatchRegistry::default();
    let (id, alice, _bob) = ready_match(&registry);
    let shooters = 8;
    let barrier = Barrier::new(shooters);

    let results: Vec<Result<_, MatchError>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..shooters)
            .map(|i| {
                let registry = registry.clone();
                let barrier = &barrier;
                scope.spawn(move || {
                    barrier.wait();
                    registry.fire(id, alice, Coordinate::new(i as i32, 9))
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let accepted = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(accepted, 1);
    assert!(
        results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| *e == MatchError::WrongTurn)
    );
    assert_eq!(*registry.get_match(id).unwrap().shots_fired(), 1);
}

#[test]
fn test_concurrent_joins_admit_two_players() {
    let registry = MatchRegistry::default();
    let id = registry.create_match();
    let joiners = 6;
    let barrier = Barrier::new(joiners);

    let results: Vec<Result<PlayerId, MatchError>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..joiners)
            .map(|i| {
                let registry = registry.clone();
                let barrier = &barrier;
                scope.spawn(move || {
                    barrier.wait();
                    registry.join(id, &format!("Player {i}"))
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 2);
    assert_eq!(
        results
            .iter()
            .filter(|r| matches!(r, Err(MatchError::MatchFull)))
            .count(),
        joiners - 2
    );
    assert_eq!(registry.get_match(id).unwrap().players().len(), 2);
}

#[test]
fn test_independent_matches_progress_in_parallel() {
    let registry = MatchRegistry::default();
    let games: Vec<_> = (0..4).map(|_| ready_match(&registry)).collect();

    std::thread::scope(|scope| {
        for &(id, alice, _) in &games {
            let registry = registry.clone();
            scope.spawn(move || {
                registry.fire(id, alice, Coordinate::new(5, 5)).unwrap();
            });
        }
    });

    for (id, alice, _) in games {
        let game = registry.get_match(id).unwrap();
        assert_eq!(*game.winner(), Some(alice));
    }
}
