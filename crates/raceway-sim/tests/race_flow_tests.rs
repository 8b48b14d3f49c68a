// Integration tests: a full race loop over a real curve.

use raceway_core::Tolerance;
use raceway_geometry::CatmullRomCurve;
use raceway_math::DVec3;
use raceway_sim::{
    MotionConfig, RaceOutcome, RaceSession, SegmentTracker, Throttle,
};

fn oval_track() -> CatmullRomCurve {
    CatmullRomCurve::new(
        vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(20.0, 0.0, 0.0),
            DVec3::new(20.0, 0.0, 10.0),
            DVec3::new(0.0, 0.0, 10.0),
        ],
        true,
    )
    .unwrap()
}

#[test]
fn player_wins_a_short_race() {
    let curve = oval_track();
    let config = MotionConfig {
        acceleration: 4.0,
        friction: 2.0,
        max_speed: 8.0,
        spike_limit: 12.0,
    };
    let mut session = RaceSession::new(2);
    let mut player = SegmentTracker::new();
    let mut rival = SegmentTracker::new();
    rival.velocity = 1.0;

    let dt = 1.0 / 64.0;
    let mut ticks = 0;
    while session.outcome() == RaceOutcome::Running {
        player.velocity = config.integrate_forward(player.velocity, Throttle::Forward, dt);
        let advanced = player.advance(dt, curve.segment_count(), curve.looping());
        session.apply_player(advanced.lap_delta);

        let advanced = rival.advance(dt, curve.segment_count(), curve.looping());
        session.apply_rival(advanced.lap_delta);

        ticks += 1;
        assert!(ticks < 100_000, "race never finished");
    }

    // Full throttle beats the slow rival
    assert_eq!(session.outcome(), RaceOutcome::PlayerWins);
    assert!(session.player_laps >= 2);
    assert!(session.rival_laps < 2);
}

#[test]
fn rival_rubber_band_closes_the_gap() {
    let mut session = RaceSession::new(15);
    session.apply_player(3);

    let base = 4.0;
    let boosted = session.rival_target_speed(base, 2.0, base, 8.0);
    assert_eq!(boosted, 8.0);

    session.apply_rival(3);
    let even = session.rival_target_speed(base, 2.0, base, 8.0);
    assert_eq!(even, base);
}

#[test]
fn tracker_positions_follow_the_curve() {
    let curve = oval_track();
    let mut tracker = SegmentTracker::new();
    tracker.velocity = 0.5;

    let start = tracker.position_on(&curve);
    assert!((start - curve.points()[0]).length() < 1e-12);

    let tolerance = Tolerance::default();
    let mut last = start;
    for _ in 0..200 {
        tracker.advance(1.0 / 32.0, curve.segment_count(), curve.looping());
        let position = tracker.position_on(&curve);
        let heading = tracker.heading_on(&curve, 0.01, tolerance);

        // Moving at nonzero speed, each step lands somewhere new and the
        // look-ahead yields a unit heading
        assert!((position - last).length() > 0.0);
        let heading = heading.expect("heading should resolve while moving");
        assert!((heading.length() - 1.0).abs() < 1e-9);
        last = position;
    }
}

#[test]
fn restart_resets_trackers_and_session() {
    let curve = oval_track();
    let mut session = RaceSession::new(3);
    let mut player = SegmentTracker::new();
    player.velocity = 2.0;

    for _ in 0..100 {
        let advanced = player.advance(0.125, curve.segment_count(), curve.looping());
        session.apply_player(advanced.lap_delta);
    }
    assert!(session.player_laps > 0 || player.segment > 0);

    player.reset();
    session.reset();
    assert_eq!(player.segment, 0);
    assert_eq!(player.interpolation, 0.0);
    assert_eq!(session.player_laps, 0);
    assert_eq!(session.outcome(), RaceOutcome::Running);
}

#[test]
fn motion_config_round_trips_through_json() {
    let config = MotionConfig {
        acceleration: 1.0,
        friction: 2.0,
        max_speed: 7.0,
        spike_limit: 10.5,
    };
    let json = serde_json::to_string(&config).unwrap();
    let back: MotionConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.acceleration, config.acceleration);
    assert_eq!(back.friction, config.friction);
    assert_eq!(back.max_speed, config.max_speed);
    assert_eq!(back.spike_limit, config.spike_limit);
}
