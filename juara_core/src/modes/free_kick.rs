use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace};

use super::{Evaluation, GameMode, ModeKind, ModeSignal};
use crate::config::FreeKickConfig;
use crate::field::Zone;
use crate::outcome::{AttemptOutcome, OutcomeKind};
use crate::params::Params;
use crate::resources::{Events, GameRng, SessionEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindDirection {
    Left,
    Right,
    None,
}

impl WindDirection {
    const ALL: [WindDirection; 3] = [Self::Left, Self::Right, Self::None];

    fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
            Self::None => 0.0,
        }
    }
}

/// Human description of a wind speed in km/h
pub fn describe_wind(speed: f32) -> &'static str {
    if speed < 5.0 {
        "Tenang"
    } else if speed < 10.0 {
        "Lemah"
    } else if speed < 15.0 {
        "Sedang"
    } else {
        "Kencang"
    }
}

/// One free-kick setup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeKickRound {
    pub number: u32,
    pub distance: u32,
    pub wind_speed: f32,
    pub wind: WindDirection,
    pub keeper_x: f32,
    pub wall_height: f32,
}

impl FreeKickRound {
    /// Horizontal drift the wind adds to the landing point
    pub fn wind_drift(&self, drift_per_kmh: f32) -> f32 {
        self.wind.sign() * self.wind_speed * drift_per_kmh
    }
}

/// Chosen angle (degrees, negative = left) and power (percent)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreeKickAction {
    pub angle: i32,
    pub power: u32,
}

impl FreeKickAction {
    /// Clamp to the slider ranges and snap power to its step
    pub fn new(angle: i32, power: u32) -> Self {
        let (a0, a1) = Params::ANGLE_RANGE;
        let (p0, p1) = Params::POWER_RANGE;
        let step = Params::POWER_STEP;
        let power = power.clamp(p0, p1);
        let snapped = ((power + step / 2) / step * step).clamp(p0, p1);
        Self {
            angle: angle.clamp(a0, a1),
            power: snapped,
        }
    }
}

impl Default for FreeKickAction {
    fn default() -> Self {
        Self { angle: 0, power: 50 }
    }
}

/// Where the ball comes down for a given kick
pub fn landing_point(round: &FreeKickRound, action: FreeKickAction, config: &FreeKickConfig) -> Vec2 {
    let x = 50.0 + action.angle as f32 * 1.5 + round.wind_drift(config.wind_drift);
    let y = 20.0 + (100.0 - action.power as f32) * 0.3;
    Vec2::new(x.clamp(0.0, 100.0), y.clamp(10.0, 90.0))
}

/// Ball position along its arc, `progress` in 0..=1
pub fn ball_path(landing: Vec2, progress: f32) -> Vec2 {
    let start = Vec2::new(50.0, 90.0);
    let p = progress.clamp(0.0, 1.0);
    let x = start.x + (landing.x - start.x) * p;
    let y = start.y - (start.y - landing.y) * p - (p * std::f32::consts::PI).sin() * 20.0;
    Vec2::new(x, y.max(10.0))
}

/// Classify a landing point against the wall, the goal and the keeper
pub fn evaluate_free_kick(
    round: &FreeKickRound,
    landing: Vec2,
    config: &FreeKickConfig,
) -> AttemptOutcome {
    let off_centre = (landing.x - 50.0).abs();

    // Lower y is higher in the air; the ball must pass above the wall
    if landing.y >= round.wall_height {
        return AttemptOutcome::new(OutcomeKind::WallBlock, 0, "TERTAHAN DINDING!")
            .with_landing(landing);
    }

    if !Zone::FREE_KICK_GOAL.contains(landing) {
        let points = (50.0 - off_centre).max(0.0).floor() as u32;
        return AttemptOutcome::new(OutcomeKind::Miss, points, "MELESET!").with_landing(landing);
    }

    if (landing.x - round.keeper_x).abs() < config.keeper_reach && landing.y > 30.0 {
        return AttemptOutcome::new(OutcomeKind::Save, 100, "DITANGKAP KIPER!")
            .with_landing(landing);
    }

    let distance_bonus = round.distance.saturating_mul(10);
    let wind_bonus = (round.wind_speed.floor() as u32).saturating_mul(5);
    let accuracy_bonus = (100.0 - off_centre * 2.0).max(0.0).floor() as u32;
    let label = if round.distance >= 30 {
        "GOAL SPEKTAKULER!"
    } else if round.wind_speed > 10.0 {
        "GOAL MELAWAN ANGIN!"
    } else {
        "GOOOAL!"
    };

    AttemptOutcome::new(
        OutcomeKind::Goal,
        300u32
            .saturating_add(distance_bonus)
            .saturating_add(wind_bonus)
            .saturating_add(accuracy_bonus),
        label,
    )
    .with_measure(round.distance)
    .with_landing(landing)
}

/// Bend a free kick over the wall, past the keeper, through the wind
pub struct FreeKickGame {
    config: FreeKickConfig,
    round: FreeKickRound,
}

impl FreeKickGame {
    pub fn new(config: FreeKickConfig) -> Self {
        let round = FreeKickRound {
            number: 0,
            distance: 20,
            wind_speed: 0.0,
            wind: WindDirection::None,
            keeper_x: 50.0,
            wall_height: config.wall_height(20),
        };
        Self { config, round }
    }

    pub fn config(&self) -> &FreeKickConfig {
        &self.config
    }

    fn generate_round(&mut self, rng: &mut GameRng, events: &mut Events) {
        let distance = self.config.distances.choose(&mut rng.0).copied().unwrap_or(20);
        let wind_speed = if self.config.wind_speed_max > 0.0 {
            rng.0.gen_range(0.0..self.config.wind_speed_max)
        } else {
            0.0
        };
        let wind = *WindDirection::ALL.choose(&mut rng.0).unwrap_or(&WindDirection::None);
        let (k0, k1) = self.config.keeper_x;

        self.round = FreeKickRound {
            number: self.round.number + 1,
            distance,
            wind_speed,
            wind,
            keeper_x: rng.0.gen_range(k0..k1),
            wall_height: self.config.wall_height(distance),
        };
        debug!(round = ?self.round, "free kick set up");
        events.push(SessionEvent::RoundStarted(self.round.number));
    }
}

impl GameMode for FreeKickGame {
    type Round = FreeKickRound;
    type Action = FreeKickAction;

    fn kind(&self) -> ModeKind {
        ModeKind::FreeKick
    }

    fn countdown_secs(&self) -> u32 {
        self.config.countdown_secs
    }

    fn session_secs(&self) -> Option<u32> {
        Some(self.config.session_secs)
    }

    fn begin(&mut self, rng: &mut GameRng, events: &mut Events) {
        self.round.number = 0;
        self.generate_round(rng, events);
    }

    fn round(&self) -> &FreeKickRound {
        &self.round
    }

    fn update(&mut self, _dt: f32, _rng: &mut GameRng, _events: &mut Events) -> ModeSignal {
        ModeSignal::Continue
    }

    fn evaluate(&mut self, action: FreeKickAction, _rng: &mut GameRng) -> Option<Evaluation> {
        let action = FreeKickAction::new(action.angle, action.power);
        let landing = landing_point(&self.round, action, &self.config);
        let outcome = evaluate_free_kick(&self.round, landing, &self.config);
        trace!(?action, ?landing, kind = ?outcome.kind, points = outcome.points, "free kick");

        Some(Evaluation {
            outcome,
            hold_secs: self.config.flight_secs + self.config.result_secs,
        })
    }

    fn settle(&mut self, rng: &mut GameRng, events: &mut Events) -> ModeSignal {
        self.generate_round(rng, events);
        ModeSignal::Continue
    }

    fn halt(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calm_round(distance: u32, keeper_x: f32) -> FreeKickRound {
        FreeKickRound {
            number: 1,
            distance,
            wind_speed: 0.0,
            wind: WindDirection::None,
            keeper_x,
            wall_height: FreeKickConfig::default().wall_height(distance),
        }
    }

    #[test]
    fn test_action_is_clamped_and_snapped() {
        assert_eq!(FreeKickAction::new(-45, 7), FreeKickAction { angle: -30, power: 20 });
        assert_eq!(FreeKickAction::new(12, 63), FreeKickAction { angle: 12, power: 65 });
        assert_eq!(FreeKickAction::new(0, 120), FreeKickAction { angle: 0, power: 100 });
    }

    #[test]
    fn test_landing_point_with_wind() {
        let config = FreeKickConfig::default();
        let mut round = calm_round(20, 50.0);
        round.wind = WindDirection::Left;
        round.wind_speed = 10.0;
        let landing = landing_point(&round, FreeKickAction::new(10, 80), &config);
        assert!((landing.x - 62.0).abs() < 1e-4);
        assert!((landing.y - 26.0).abs() < 1e-4);
    }

    #[test]
    fn test_low_kick_hits_the_wall() {
        let config = FreeKickConfig::default();
        let round = calm_round(18, 80.0);
        // power 20 -> y = 44, wall at 40
        let landing = landing_point(&round, FreeKickAction::new(0, 20), &config);
        let outcome = evaluate_free_kick(&round, landing, &config);
        assert_eq!(outcome.kind, OutcomeKind::WallBlock);
        assert_eq!(outcome.points, 0);
    }

    #[test]
    fn test_wide_kick_misses_with_partial_points() {
        let config = FreeKickConfig::default();
        let round = calm_round(25, 50.0);
        let landing = Vec2::new(10.0, 30.0);
        let outcome = evaluate_free_kick(&round, landing, &config);
        assert_eq!(outcome.kind, OutcomeKind::Miss);
        assert_eq!(outcome.points, 10);
    }

    #[test]
    fn test_keeper_saves_low_shot_near_him() {
        let config = FreeKickConfig::default();
        let round = calm_round(25, 50.0);
        let outcome = evaluate_free_kick(&round, Vec2::new(55.0, 35.0), &config);
        assert_eq!(outcome.kind, OutcomeKind::Save);
        assert_eq!(outcome.points, 100);
    }

    #[test]
    fn test_high_shot_beats_keeper() {
        let config = FreeKickConfig::default();
        let round = calm_round(20, 50.0);
        // y = 20 is above the keeper's reach
        let outcome = evaluate_free_kick(&round, Vec2::new(50.0, 20.0), &config);
        assert_eq!(outcome.kind, OutcomeKind::Goal);
        assert_eq!(outcome.points, 300 + 200 + 0 + 100);
        assert_eq!(outcome.label, "GOOOAL!");
        assert_eq!(outcome.measure, Some(20));
    }

    #[test]
    fn test_goal_points_saturate() {
        let config = FreeKickConfig::default();
        let mut round = calm_round(500_000_000, 80.0);
        round.wind_speed = 14.0;
        let outcome = evaluate_free_kick(&round, Vec2::new(50.0, 20.0), &config);
        assert_eq!(outcome.kind, OutcomeKind::Goal);
        assert_eq!(outcome.points, u32::MAX);
    }

    #[test]
    fn test_goal_labels() {
        let config = FreeKickConfig::default();
        let far = calm_round(30, 80.0);
        let outcome = evaluate_free_kick(&far, Vec2::new(40.0, 25.0), &config);
        assert_eq!(outcome.label, "GOAL SPEKTAKULER!");
        assert_eq!(outcome.points, 300 + 300 + 0 + 80);

        let mut windy = calm_round(20, 80.0);
        windy.wind_speed = 12.5;
        windy.wind = WindDirection::Right;
        let outcome = evaluate_free_kick(&windy, Vec2::new(40.0, 25.0), &config);
        assert_eq!(outcome.label, "GOAL MELAWAN ANGIN!");
        assert_eq!(outcome.points, 300 + 200 + 60 + 80);
    }

    #[test]
    fn test_round_generation_stays_in_ranges() {
        let mut game = FreeKickGame::new(FreeKickConfig::default());
        let mut rng = GameRng::new(99);
        let mut events = Events::new();
        game.begin(&mut rng, &mut events);
        for _ in 0..50 {
            let r = *game.round();
            assert!(Params::FREE_KICK_DISTANCES.contains(&r.distance));
            assert!((0.0..15.0).contains(&r.wind_speed));
            assert!((20.0..80.0).contains(&r.keeper_x));
            assert_eq!(r.wall_height, 40.0 + (r.distance - 18) as f32 * 2.0);
            game.settle(&mut rng, &mut events);
        }
        assert_eq!(game.round().number, 51);
    }

    #[test]
    fn test_ball_path_endpoints() {
        let landing = Vec2::new(70.0, 30.0);
        assert_eq!(ball_path(landing, 0.0), Vec2::new(50.0, 90.0));
        let end = ball_path(landing, 1.0);
        assert!((end.x - 70.0).abs() < 1e-4);
        assert!((end.y - 30.0).abs() < 1e-3);
    }

    #[test]
    fn test_describe_wind() {
        assert_eq!(describe_wind(0.0), "Tenang");
        assert_eq!(describe_wind(7.0), "Lemah");
        assert_eq!(describe_wind(14.9), "Sedang");
        assert_eq!(describe_wind(15.0), "Kencang");
    }
}
