use tracing::trace;

use super::{Evaluation, GameMode, ModeKind, ModeSignal};
use crate::config::PowerConfig;
use crate::outcome::{AttemptOutcome, OutcomeKind, PowerTier};
use crate::resources::{Events, GameRng, SessionEvent};
use crate::timer::Interval;

/// Oscillation speed for the current kick, in meter units per tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerRound {
    pub speed: f32,
}

/// Release the kick (kick button or space bar)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerAction {
    Kick,
}

/// Bouncing 0..=100 meter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerMeter {
    pub value: f32,
    pub rising: bool,
}

impl PowerMeter {
    pub fn new() -> Self {
        Self {
            value: 0.0,
            rising: true,
        }
    }

    /// Move one tick, bouncing off either end
    pub fn advance(&mut self, speed: f32) {
        let next = if self.rising {
            self.value + speed
        } else {
            self.value - speed
        };
        if next >= 100.0 {
            self.value = 100.0;
            self.rising = false;
        } else if next <= 0.0 {
            self.value = 0.0;
            self.rising = true;
        } else {
            self.value = next;
        }
    }

    pub fn captured(&self) -> u32 {
        self.value.round().clamp(0.0, 100.0) as u32
    }
}

impl Default for PowerMeter {
    fn default() -> Self {
        Self::new()
    }
}

/// Score a captured meter value
pub fn evaluate_power(power: u32) -> AttemptOutcome {
    let tier = PowerTier::from_power(power);
    AttemptOutcome::new(OutcomeKind::Strike(tier), tier.points(), tier.label()).with_measure(power)
}

/// Advance the meter by however many ticks elapsed during `dt`
pub fn run_meter(meter: &mut PowerMeter, tick: &mut Interval, speed: f32, dt: f32) {
    for _ in 0..tick.update(dt) {
        meter.advance(speed);
    }
}

/// Time the release of an oscillating power meter
pub struct PowerGame {
    config: PowerConfig,
    round: PowerRound,
    meter: PowerMeter,
    tick: Option<Interval>,
}

impl PowerGame {
    pub fn new(config: PowerConfig) -> Self {
        let round = PowerRound {
            speed: config.speed_initial,
        };
        Self {
            config,
            round,
            meter: PowerMeter::new(),
            tick: None,
        }
    }

    pub fn meter(&self) -> &PowerMeter {
        &self.meter
    }

    pub fn config(&self) -> &PowerConfig {
        &self.config
    }
}

impl GameMode for PowerGame {
    type Round = PowerRound;
    type Action = PowerAction;

    fn kind(&self) -> ModeKind {
        ModeKind::Power
    }

    fn countdown_secs(&self) -> u32 {
        self.config.countdown_secs
    }

    fn session_secs(&self) -> Option<u32> {
        Some(self.config.session_secs)
    }

    fn begin(&mut self, _rng: &mut GameRng, events: &mut Events) {
        self.round = PowerRound {
            speed: self.config.speed_initial,
        };
        self.meter = PowerMeter::new();
        self.tick = Some(Interval::new(self.config.meter_tick_secs));
        events.push(SessionEvent::MeterReset);
    }

    fn round(&self) -> &PowerRound {
        &self.round
    }

    fn update(&mut self, dt: f32, _rng: &mut GameRng, _events: &mut Events) -> ModeSignal {
        if let Some(tick) = self.tick.as_mut() {
            run_meter(&mut self.meter, tick, self.round.speed, dt);
        }
        ModeSignal::Continue
    }

    fn evaluate(&mut self, action: PowerAction, _rng: &mut GameRng) -> Option<Evaluation> {
        let PowerAction::Kick = action;
        let power = self.meter.captured();
        let outcome = evaluate_power(power);
        trace!(power, speed = self.round.speed, points = outcome.points, "power kick");

        // Every kick makes the next one a little harder
        self.round.speed = (self.round.speed + self.config.speed_step).min(self.config.speed_max);

        Some(Evaluation {
            outcome,
            hold_secs: self.config.reset_secs,
        })
    }

    fn settle(&mut self, _rng: &mut GameRng, events: &mut Events) -> ModeSignal {
        self.meter = PowerMeter::new();
        if let Some(tick) = self.tick.as_mut() {
            tick.reset();
        }
        events.push(SessionEvent::MeterReset);
        ModeSignal::Continue
    }

    fn halt(&mut self) {
        self.tick = None;
    }
}
