use glam::Vec2;
use rand::Rng;
use tracing::trace;

use super::{Evaluation, GameMode, ModeKind, ModeSignal};
use crate::config::AccuracyConfig;
use crate::field::clamp_to_field;
use crate::outcome::{AttemptOutcome, OutcomeKind};
use crate::resources::{Events, GameRng, SessionEvent};
use crate::timer::Interval;

/// Where the target currently sits
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccuracyRound {
    pub target: Vec2,
}

/// A click on the field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccuracyAction {
    pub click: Vec2,
}

impl AccuracyAction {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            click: clamp_to_field(Vec2::new(x, y)),
        }
    }
}

/// Score a click against a target. Hit iff distance < radius.
pub fn evaluate_click(click: Vec2, target: Vec2, config: &AccuracyConfig) -> AttemptOutcome {
    let distance = click.distance(target);
    if distance < config.hit_radius {
        let penalty = (distance * config.points_per_unit).floor() as u32;
        let points = config
            .max_points
            .saturating_sub(penalty)
            .max(config.min_points);
        AttemptOutcome::new(OutcomeKind::Hit, points, "TEPAT SASARAN!").with_landing(click)
    } else {
        AttemptOutcome::new(OutcomeKind::Miss, 0, "MELESET!").with_landing(click)
    }
}

/// Click the moving target
pub struct AccuracyGame {
    config: AccuracyConfig,
    round: AccuracyRound,
    relocate: Option<Interval>,
}

impl AccuracyGame {
    pub fn new(config: AccuracyConfig) -> Self {
        Self {
            config,
            round: AccuracyRound {
                target: Vec2::new(50.0, 50.0),
            },
            relocate: None,
        }
    }

    pub fn config(&self) -> &AccuracyConfig {
        &self.config
    }

    fn random_target(&self, rng: &mut GameRng) -> Vec2 {
        let (x0, x1) = self.config.target_x;
        let (y0, y1) = self.config.target_y;
        Vec2::new(rng.0.gen_range(x0..x1), rng.0.gen_range(y0..y1))
    }

    fn place_target(&mut self, rng: &mut GameRng, events: &mut Events) {
        let target = self.random_target(rng);
        self.round = AccuracyRound { target };
        events.push(SessionEvent::TargetMoved(target));
    }
}

impl GameMode for AccuracyGame {
    type Round = AccuracyRound;
    type Action = AccuracyAction;

    fn kind(&self) -> ModeKind {
        ModeKind::Accuracy
    }

    fn countdown_secs(&self) -> u32 {
        self.config.countdown_secs
    }

    fn session_secs(&self) -> Option<u32> {
        Some(self.config.session_secs)
    }

    fn begin(&mut self, rng: &mut GameRng, events: &mut Events) {
        self.relocate = Some(Interval::new(self.config.relocate_secs));
        self.place_target(rng, events);
    }

    fn round(&self) -> &AccuracyRound {
        &self.round
    }

    fn update(&mut self, dt: f32, rng: &mut GameRng, events: &mut Events) -> ModeSignal {
        let fired = self.relocate.as_mut().map_or(0, |r| r.update(dt));
        if fired > 0 {
            self.place_target(rng, events);
        }
        ModeSignal::Continue
    }

    fn evaluate(&mut self, action: AccuracyAction, rng: &mut GameRng) -> Option<Evaluation> {
        let outcome = evaluate_click(action.click, self.round.target, &self.config);
        trace!(?action, target = ?self.round.target, points = outcome.points, "accuracy kick");

        if outcome.kind == OutcomeKind::Hit {
            // A hit moves the target immediately; the 3 s cadence carries on
            self.round.target = self.random_target(rng);
        }

        Some(Evaluation {
            outcome,
            hold_secs: 0.0,
        })
    }

    fn settle(&mut self, _rng: &mut GameRng, events: &mut Events) -> ModeSignal {
        events.push(SessionEvent::TargetMoved(self.round.target));
        ModeSignal::Continue
    }

    fn halt(&mut self) {
        self.relocate = None;
    }
}
