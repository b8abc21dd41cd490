//! Simulation integration tests.

use bowling_scorecard::{
    BowlingGame, GameRecord, GameRng, RandomBowler, SimConfig, SimStats, Simulation, SkilledBowler,
};

// =============================================================================
// Skill Extremes
// =============================================================================

/// Test that a bowler who always strikes scores 300 every game.
#[test]
fn test_always_strike() {
    let config = SimConfig::default()
        .with_games(20)
        .with_strike_probability(1.0);
    let stats = Simulation::from_config(config).run().unwrap();

    assert_eq!(stats.games, 20);
    assert_eq!(stats.perfect_games, 20);
    assert_eq!(stats.best, 300);
    assert_eq!(stats.worst, 300);
    assert_eq!(stats.strikes, 200);
    assert_eq!(stats.spares, 0);
    assert_eq!(stats.mean_score(), 300.0);
}

/// Test that a bowler who never strikes but always spares gets ten spares.
#[test]
fn test_always_spare() {
    let config = SimConfig::default()
        .with_games(20)
        .with_strike_probability(0.0)
        .with_spare_probability(1.0);
    let records = Simulation::from_config(config.clone()).play_games().unwrap();

    for record in &records {
        // Ten two-ball frames plus one bonus ball.
        assert_eq!(record.len(), 21);
        let game = record.replay().unwrap();
        assert!(game.is_over());
        assert!((100..=190).contains(&game.score()));
    }

    let stats = Simulation::from_config(config).run().unwrap();
    assert_eq!(stats.spares, 200);
    assert_eq!(stats.strikes, 0);
}

/// Test that a bowler who never clears the rack bowls twenty open balls.
#[test]
fn test_never_clear() {
    let sim = Simulation::new(SkilledBowler::new(0.0, 0.0), SimConfig::default());
    let game = sim.play_game(&mut GameRng::new(3)).unwrap();

    assert!(game.is_over());
    assert_eq!(game.log().roll_count(), 20);
    assert!(game.score() <= 90);
}

// =============================================================================
// Statistics
// =============================================================================

/// Test that statistics stay inside the legal score range.
#[test]
fn test_stats_in_range() {
    let stats = Simulation::new(RandomBowler, SimConfig::default().with_games(200))
        .run()
        .unwrap();

    assert_eq!(stats.games, 200);
    assert!(stats.worst <= stats.best);
    assert!(stats.best <= 300);
    assert!(stats.mean_score() >= f64::from(stats.worst));
    assert!(stats.mean_score() <= f64::from(stats.best));
    assert!(stats.strikes + stats.spares <= 2000);
}

/// Test that stats from records match stats from the run.
#[test]
fn test_stats_match_records() {
    let config = SimConfig::default().with_games(50).with_seed(11);
    let sim = Simulation::from_config(config);

    let mut from_records = SimStats::new();
    for record in sim.play_games().unwrap() {
        from_records.record_game(&record.replay().unwrap());
    }

    assert_eq!(from_records, sim.run().unwrap());
}

/// Test that different seeds give different batches.
#[test]
fn test_seed_changes_games() {
    let first = Simulation::new(RandomBowler, SimConfig::default().with_games(10).with_seed(1))
        .play_games()
        .unwrap();
    let second = Simulation::new(RandomBowler, SimConfig::default().with_games(10).with_seed(2))
        .play_games()
        .unwrap();

    assert_ne!(first, second);
}

// =============================================================================
// Records
// =============================================================================

/// Test that simulated records survive JSON and replay to the same game.
#[test]
fn test_records_json_round_trip() {
    let sim = Simulation::new(RandomBowler, SimConfig::default().with_games(10));

    for record in sim.play_games().unwrap() {
        let json = serde_json::to_string(&record).unwrap();
        let restored: GameRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, record);
        assert_eq!(restored.replay().unwrap().score(), record.replay().unwrap().score());
    }
}

/// Test that a tampered record is rejected on replay.
#[test]
fn test_tampered_record_rejected() {
    let record: GameRecord = serde_json::from_str(r#"{"rolls":[7,7]}"#).unwrap();
    assert!(record.replay().is_err());

    let mut rolls = BowlingGame::replay(&[10; 12]).unwrap().record().rolls().to_vec();
    rolls.push(10);
    assert!(GameRecord::from_rolls(&rolls).replay().is_err());
}

/// Test that the config survives JSON.
#[test]
fn test_config_json_round_trip() {
    let config = SimConfig::default().with_games(5).with_seed(99);

    let json = serde_json::to_string(&config).unwrap();
    let restored: SimConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, config);
}
