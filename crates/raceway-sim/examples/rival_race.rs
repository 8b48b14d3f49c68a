//! Console race: a throttle-held player versus a rubber-banded rival.

use raceway_geometry::CatmullRomCurve;
use raceway_math::DVec3;
use raceway_sim::{MotionConfig, RaceOutcome, RaceSession, SegmentTracker, Throttle};

fn main() {
    let track = CatmullRomCurve::new(
        vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(30.0, 0.0, 0.0),
            DVec3::new(30.0, 0.0, 15.0),
            DVec3::new(0.0, 0.0, 15.0),
        ],
        true,
    )
    .expect("track definition");

    let config = MotionConfig::default();
    let mut session = RaceSession::new(5);
    let mut player = SegmentTracker::new();
    let mut rival = SegmentTracker::new();

    let dt = 1.0 / 60.0;
    let mut time = 0.0;
    while session.outcome() == RaceOutcome::Running {
        player.velocity = config.integrate_forward(player.velocity, Throttle::Forward, dt);
        let player_advanced = player.advance(dt, track.segment_count(), track.looping());
        session.apply_player(player_advanced.lap_delta);

        rival.velocity = session.rival_target_speed(4.0, 2.0, 4.0, config.max_speed);
        let rival_advanced = rival.advance(dt, track.segment_count(), track.looping());
        session.apply_rival(rival_advanced.lap_delta);

        if player_advanced.lap_delta != 0 || rival_advanced.lap_delta != 0 {
            let position = player.position_on(&track);
            println!(
                "t={:6.2}s  player {} / rival {} laps  player at ({:5.1}, {:5.1})",
                time, session.player_laps, session.rival_laps, position.x, position.z
            );
        }
        time += dt;
    }

    match session.outcome() {
        RaceOutcome::PlayerWins => println!("Player wins after {:.2}s", time),
        RaceOutcome::RivalWins => println!("Rival wins after {:.2}s", time),
        RaceOutcome::Running => unreachable!(),
    }
}
