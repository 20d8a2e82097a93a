use std::path::Path;

use serde::Deserialize;

use crate::error::{JuaraError, JuaraResult};
use crate::params::Params;

/// Stepping configuration shared by every mode
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub fixed_dt: f32,
    pub max_dt: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            fixed_dt: Params::FIXED_DT,
            max_dt: Params::MAX_DT,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AccuracyConfig {
    pub countdown_secs: u32,
    pub session_secs: u32,
    pub hit_radius: f32,
    pub points_per_unit: f32,
    pub max_points: u32,
    pub min_points: u32,
    pub relocate_secs: f32,
    pub target_x: (f32, f32),
    pub target_y: (f32, f32),
}

impl Default for AccuracyConfig {
    fn default() -> Self {
        Self {
            countdown_secs: 0, // Accuracy play starts straight away
            session_secs: Params::ACCURACY_SESSION_SECS,
            hit_radius: Params::ACCURACY_HIT_RADIUS,
            points_per_unit: Params::ACCURACY_POINTS_PER_UNIT,
            max_points: Params::ACCURACY_MAX_POINTS,
            min_points: Params::ACCURACY_MIN_POINTS,
            relocate_secs: Params::ACCURACY_RELOCATE_SECS,
            target_x: Params::ACCURACY_TARGET_X,
            target_y: Params::ACCURACY_TARGET_Y,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PowerConfig {
    pub countdown_secs: u32,
    pub session_secs: u32,
    pub meter_tick_secs: f32,
    pub speed_initial: f32,
    pub speed_step: f32,
    pub speed_max: f32,
    pub reset_secs: f32,
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self {
            countdown_secs: Params::COUNTDOWN_SECS,
            session_secs: Params::POWER_SESSION_SECS,
            meter_tick_secs: Params::METER_TICK_SECS,
            speed_initial: Params::METER_SPEED_INITIAL,
            speed_step: Params::METER_SPEED_STEP,
            speed_max: Params::METER_SPEED_MAX,
            reset_secs: Params::POWER_RESET_SECS,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FreeKickConfig {
    pub countdown_secs: u32,
    pub session_secs: u32,
    pub distances: Vec<u32>,
    pub wind_speed_max: f32,
    pub wind_drift: f32,
    pub keeper_x: (f32, f32),
    pub keeper_reach: f32,
    pub wall_base_height: f32,
    pub wall_height_per_meter: f32,
    pub flight_secs: f32,
    pub result_secs: f32,
}

impl Default for FreeKickConfig {
    fn default() -> Self {
        Self {
            countdown_secs: Params::COUNTDOWN_SECS,
            session_secs: Params::FREE_KICK_SESSION_SECS,
            distances: Params::FREE_KICK_DISTANCES.to_vec(),
            wind_speed_max: Params::WIND_SPEED_MAX,
            wind_drift: Params::WIND_DRIFT,
            keeper_x: Params::FREE_KICK_KEEPER_X,
            keeper_reach: Params::FREE_KICK_KEEPER_REACH,
            wall_base_height: Params::WALL_BASE_HEIGHT,
            wall_height_per_meter: Params::WALL_HEIGHT_PER_METER,
            flight_secs: Params::FREE_KICK_FLIGHT_SECS,
            result_secs: Params::FREE_KICK_RESULT_SECS,
        }
    }
}

impl FreeKickConfig {
    /// Wall grows taller the further out the kick is taken
    pub fn wall_height(&self, distance: u32) -> f32 {
        let first = self.distances.iter().copied().min().unwrap_or(0);
        self.wall_base_height + distance.saturating_sub(first) as f32 * self.wall_height_per_meter
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PenaltyConfig {
    pub countdown_secs: u32,
    pub regulation_rounds: u32,
    pub pressure_secs: u32,
    pub keeper_reach: f32,
    pub keeper_center: f32,
    pub keeper_swing: f32,
    pub keeper_rate: f32,
    pub computer_success_rate: f64,
    pub flight_secs: f32,
    pub result_secs: f32,
    pub computer_runup_secs: f32,
    pub computer_result_secs: f32,
}

impl Default for PenaltyConfig {
    fn default() -> Self {
        Self {
            countdown_secs: Params::COUNTDOWN_SECS,
            regulation_rounds: Params::PENALTY_REGULATION_ROUNDS,
            pressure_secs: Params::PRESSURE_SECS,
            keeper_reach: Params::PENALTY_KEEPER_REACH,
            keeper_center: Params::PENALTY_KEEPER_CENTER,
            keeper_swing: Params::PENALTY_KEEPER_SWING,
            keeper_rate: Params::PENALTY_KEEPER_RATE,
            computer_success_rate: Params::COMPUTER_SUCCESS_RATE,
            flight_secs: Params::PENALTY_FLIGHT_SECS,
            result_secs: Params::PENALTY_RESULT_SECS,
            computer_runup_secs: Params::COMPUTER_RUNUP_SECS,
            computer_result_secs: Params::COMPUTER_RESULT_SECS,
        }
    }
}

/// Game configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub session: SessionConfig,
    pub accuracy: AccuracyConfig,
    pub power: PowerConfig,
    pub free_kick: FreeKickConfig,
    pub penalty: PenaltyConfig,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON config; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> JuaraResult<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> JuaraResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> JuaraResult<()> {
        let s = &self.session;
        positive("session.fixed_dt", s.fixed_dt)?;
        if s.max_dt < s.fixed_dt {
            return Err(JuaraError::Config(format!(
                "session.max_dt ({}) must be >= session.fixed_dt ({})",
                s.max_dt, s.fixed_dt
            )));
        }

        let a = &self.accuracy;
        nonzero("accuracy.session_secs", a.session_secs)?;
        positive("accuracy.hit_radius", a.hit_radius)?;
        positive("accuracy.relocate_secs", a.relocate_secs)?;
        non_negative("accuracy.points_per_unit", a.points_per_unit)?;
        if a.min_points > a.max_points {
            return Err(JuaraError::Config(
                "accuracy.min_points must not exceed accuracy.max_points".to_string(),
            ));
        }
        field_range("accuracy.target_x", a.target_x)?;
        field_range("accuracy.target_y", a.target_y)?;

        let p = &self.power;
        nonzero("power.session_secs", p.session_secs)?;
        positive("power.meter_tick_secs", p.meter_tick_secs)?;
        positive("power.speed_initial", p.speed_initial)?;
        non_negative("power.speed_step", p.speed_step)?;
        non_negative("power.reset_secs", p.reset_secs)?;
        if p.speed_max < p.speed_initial {
            return Err(JuaraError::Config(
                "power.speed_max must be >= power.speed_initial".to_string(),
            ));
        }

        let f = &self.free_kick;
        nonzero("free_kick.session_secs", f.session_secs)?;
        if f.distances.is_empty() {
            return Err(JuaraError::Config(
                "free_kick.distances must not be empty".to_string(),
            ));
        }
        if let Some(&far) = f.distances.iter().find(|&&d| d > Params::FREE_KICK_MAX_DISTANCE) {
            return Err(JuaraError::Config(format!(
                "free_kick.distances must be at most {} m, got {far}",
                Params::FREE_KICK_MAX_DISTANCE
            )));
        }
        if !(0.0..=Params::FIELD_MAX).contains(&f.wind_speed_max) {
            return Err(JuaraError::Config(format!(
                "free_kick.wind_speed_max must be within [0, {}], got {}",
                Params::FIELD_MAX,
                f.wind_speed_max
            )));
        }
        non_negative("free_kick.wind_drift", f.wind_drift)?;
        field_range("free_kick.keeper_x", f.keeper_x)?;
        positive("free_kick.keeper_reach", f.keeper_reach)?;
        non_negative("free_kick.flight_secs", f.flight_secs)?;
        non_negative("free_kick.result_secs", f.result_secs)?;

        let k = &self.penalty;
        nonzero("penalty.regulation_rounds", k.regulation_rounds)?;
        nonzero("penalty.pressure_secs", k.pressure_secs)?;
        positive("penalty.keeper_reach", k.keeper_reach)?;
        non_negative("penalty.keeper_rate", k.keeper_rate)?;
        non_negative("penalty.flight_secs", k.flight_secs)?;
        non_negative("penalty.result_secs", k.result_secs)?;
        non_negative("penalty.computer_runup_secs", k.computer_runup_secs)?;
        non_negative("penalty.computer_result_secs", k.computer_result_secs)?;
        if !(0.0..=1.0).contains(&k.computer_success_rate) {
            return Err(JuaraError::Config(format!(
                "penalty.computer_success_rate must be within [0, 1], got {}",
                k.computer_success_rate
            )));
        }

        Ok(())
    }
}

fn positive(name: &str, value: f32) -> JuaraResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(JuaraError::Config(format!("{name} must be > 0, got {value}")))
    }
}

fn non_negative(name: &str, value: f32) -> JuaraResult<()> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(JuaraError::Config(format!("{name} must be >= 0, got {value}")))
    }
}

fn nonzero(name: &str, value: u32) -> JuaraResult<()> {
    if value > 0 {
        Ok(())
    } else {
        Err(JuaraError::Config(format!("{name} must be > 0")))
    }
}

fn field_range(name: &str, (lo, hi): (f32, f32)) -> JuaraResult<()> {
    if lo < hi && lo >= Params::FIELD_MIN && hi <= Params::FIELD_MAX {
        Ok(())
    } else {
        Err(JuaraError::Config(format!(
            "{name} must be an ordered range inside the field, got ({lo}, {hi})"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::new().validate().is_ok());
    }

    #[test]
    fn test_wall_height_grows_with_distance() {
        let config = FreeKickConfig::default();
        assert_eq!(config.wall_height(18), 40.0);
        assert_eq!(config.wall_height(35), 74.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json_str(r#"{ "power": { "speed_max": 6.0 } }"#)
            .expect("partial config should parse");
        assert_eq!(config.power.speed_max, 6.0);
        assert_eq!(config.power.speed_initial, Params::METER_SPEED_INITIAL);
        assert_eq!(config.accuracy.session_secs, Params::ACCURACY_SESSION_SECS);
    }

    #[test]
    fn test_rejects_probability_out_of_range() {
        let err = Config::from_json_str(r#"{ "penalty": { "computer_success_rate": 1.5 } }"#)
            .unwrap_err();
        assert!(matches!(err, JuaraError::Config(_)));
    }

    #[test]
    fn test_rejects_zero_pressure_timer() {
        let err = Config::from_json_str(r#"{ "penalty": { "pressure_secs": 0 } }"#).unwrap_err();
        assert!(matches!(err, JuaraError::Config(msg) if msg.contains("pressure_secs")));
    }

    #[test]
    fn test_rejects_negative_speed_step() {
        let err = Config::from_json_str(r#"{ "power": { "speed_step": -3.0 } }"#).unwrap_err();
        assert!(matches!(err, JuaraError::Config(msg) if msg.contains("speed_step")));
    }

    #[test]
    fn test_rejects_far_free_kick_distance() {
        let err = Config::from_json_str(r#"{ "free_kick": { "distances": [20, 500000000] } }"#)
            .unwrap_err();
        assert!(matches!(err, JuaraError::Config(msg) if msg.contains("distances")));
    }

    #[test]
    fn test_rejects_bad_keeper_and_pacing() {
        for json in [
            r#"{ "penalty": { "keeper_reach": 0.0 } }"#,
            r#"{ "free_kick": { "keeper_reach": -1.0 } }"#,
            r#"{ "free_kick": { "wind_drift": -0.3 } }"#,
            r#"{ "free_kick": { "flight_secs": -1.0 } }"#,
            r#"{ "penalty": { "result_secs": -2.5 } }"#,
            r#"{ "free_kick": { "wind_speed_max": 1e9 } }"#,
        ] {
            assert!(Config::from_json_str(json).is_err(), "accepted {json}");
        }
    }

    #[test]
    fn test_rejects_inverted_target_range() {
        let mut config = Config::new();
        config.accuracy.target_x = (90.0, 10.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Config::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, JuaraError::Json(_)));
    }
}
