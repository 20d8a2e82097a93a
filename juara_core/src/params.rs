/// Game tuning parameters for the kicking mini-games.
///
/// Coordinates are percentages of the rendered field (0..=100 on both axes,
/// y grows downward).
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_MIN: f32 = 0.0;
    pub const FIELD_MAX: f32 = 100.0;

    // Stepping
    pub const FIXED_DT: f32 = 0.05; // 50 ms, the meter tick
    pub const MAX_DT: f32 = 0.25; // Clamp to prevent large jumps

    // Pre-play countdown
    pub const COUNTDOWN_SECS: u32 = 3;

    // Accuracy
    pub const ACCURACY_SESSION_SECS: u32 = 60;
    pub const ACCURACY_HIT_RADIUS: f32 = 15.0;
    pub const ACCURACY_POINTS_PER_UNIT: f32 = 5.0;
    pub const ACCURACY_MAX_POINTS: u32 = 100;
    pub const ACCURACY_MIN_POINTS: u32 = 10;
    pub const ACCURACY_RELOCATE_SECS: f32 = 3.0;
    pub const ACCURACY_TARGET_X: (f32, f32) = (10.0, 90.0);
    pub const ACCURACY_TARGET_Y: (f32, f32) = (20.0, 80.0);

    // Power
    pub const POWER_SESSION_SECS: u32 = 60;
    pub const METER_TICK_SECS: f32 = 0.05;
    pub const METER_SPEED_INITIAL: f32 = 2.0;
    pub const METER_SPEED_STEP: f32 = 0.2; // Added after every kick
    pub const METER_SPEED_MAX: f32 = 4.0;
    pub const POWER_RESET_SECS: f32 = 2.0;

    // Free kick
    pub const FREE_KICK_SESSION_SECS: u32 = 90;
    pub const FREE_KICK_DISTANCES: [u32; 5] = [18, 20, 25, 30, 35];
    pub const FREE_KICK_MAX_DISTANCE: u32 = 60; // Halfway line
    pub const WIND_SPEED_MAX: f32 = 15.0; // km/h
    pub const WIND_DRIFT: f32 = 0.3; // Field units per km/h
    pub const FREE_KICK_KEEPER_X: (f32, f32) = (20.0, 80.0);
    pub const FREE_KICK_KEEPER_REACH: f32 = 15.0;
    pub const WALL_BASE_HEIGHT: f32 = 40.0;
    pub const WALL_HEIGHT_PER_METER: f32 = 2.0;
    pub const ANGLE_RANGE: (i32, i32) = (-30, 30);
    pub const POWER_RANGE: (u32, u32) = (20, 100);
    pub const POWER_STEP: u32 = 5;
    pub const FREE_KICK_FLIGHT_SECS: f32 = 1.0;
    pub const FREE_KICK_RESULT_SECS: f32 = 3.0;

    // Penalty
    pub const PENALTY_REGULATION_ROUNDS: u32 = 5;
    pub const PRESSURE_SECS: u32 = 5;
    pub const PENALTY_KEEPER_REACH: f32 = 25.0;
    pub const PENALTY_KEEPER_CENTER: f32 = 45.0;
    pub const PENALTY_KEEPER_SWING: f32 = 15.0;
    pub const PENALTY_KEEPER_RATE: f32 = 2.0; // rad/s
    pub const COMPUTER_SUCCESS_RATE: f64 = 0.7;
    pub const PENALTY_FLIGHT_SECS: f32 = 1.2;
    pub const PENALTY_RESULT_SECS: f32 = 2.5;
    pub const COMPUTER_RUNUP_SECS: f32 = 2.0;
    pub const COMPUTER_RESULT_SECS: f32 = 2.0;
}
