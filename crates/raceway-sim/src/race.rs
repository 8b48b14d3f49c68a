//! Race bookkeeping: lap totals, win condition, rival pacing.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RaceOutcome {
    Running,
    PlayerWins,
    RivalWins,
}

/// Lap totals for the player and the AI rival.
///
/// Trackers report lap deltas; the session accumulates them, so per-object
/// advancement stays free of shared race state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RaceSession {
    pub player_laps: i32,
    pub rival_laps: i32,
    pub max_laps: i32,
}

impl RaceSession {
    pub fn new(max_laps: i32) -> Self {
        Self {
            player_laps: 0,
            rival_laps: 0,
            max_laps,
        }
    }

    /// Fold a tracker's lap delta into the player total.
    pub fn apply_player(&mut self, lap_delta: i32) {
        self.player_laps += lap_delta;
    }

    /// Fold a tracker's lap delta into the rival total.
    pub fn apply_rival(&mut self, lap_delta: i32) {
        self.rival_laps += lap_delta;
    }

    /// The player is checked first, so a simultaneous finish goes to the
    /// player.
    pub fn outcome(&self) -> RaceOutcome {
        if self.player_laps >= self.max_laps {
            RaceOutcome::PlayerWins
        } else if self.rival_laps >= self.max_laps {
            RaceOutcome::RivalWins
        } else {
            RaceOutcome::Running
        }
    }

    pub fn reset(&mut self) {
        self.player_laps = 0;
        self.rival_laps = 0;
    }

    /// Rubber-banded target speed for the rival: the further it trails the
    /// player in laps, the faster it drives, clamped to
    /// `[min_speed, max_speed]`.
    pub fn rival_target_speed(
        &self,
        base_speed: f64,
        catch_up_gain: f64,
        min_speed: f64,
        max_speed: f64,
    ) -> f64 {
        let lap_gap = (self.player_laps - self.rival_laps) as f64;
        (base_speed + lap_gap * catch_up_gain).clamp(min_speed, max_speed)
    }
}
