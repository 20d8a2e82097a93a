use glam::Vec2;
use rand::Rng;
use tracing::{debug, info, trace};

use super::{Evaluation, GameMode, MatchResult, ModeKind, ModeSignal};
use crate::config::PenaltyConfig;
use crate::field::Zone;
use crate::outcome::{AttemptOutcome, OutcomeKind};
use crate::resources::{Events, GameRng, SessionEvent};
use crate::timer::{Delay, RoundClock};

/// Where an unattended shot goes when the pressure timer runs out
pub const DEFAULT_SHOT: Vec2 = Vec2::new(50.0, 40.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Player,
    Computer,
}

/// Goals per side, like a scoreboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchScore {
    pub player: u32,
    pub computer: u32,
    pub shots: u32,
}

impl MatchScore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_level(&self) -> bool {
        self.player == self.computer
    }

    /// The match is decided once regulation is played and the sides differ
    pub fn is_decided(&self, completed_rounds: u32, regulation_rounds: u32) -> bool {
        completed_rounds >= regulation_rounds && !self.is_level()
    }
}

/// Live state of the current penalty round
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenaltyRound {
    pub number: u32,
    pub turn: Turn,
    pub keeper_x: f32,
    pub aim: Option<Vec2>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PenaltyAction {
    /// Pick a spot in the goal
    Aim(Vec2),
    /// Shoot at the picked spot
    Shoot,
    /// Pick and shoot in one go
    ShootAt(Vec2),
}

/// Score a shot given the keeper position and seconds of pressure left
pub fn evaluate_penalty(
    target: Vec2,
    keeper_x: f32,
    pressure_left: u32,
    config: &PenaltyConfig,
) -> AttemptOutcome {
    if !Zone::PENALTY_GOAL.contains(target) {
        return AttemptOutcome::new(OutcomeKind::Miss, 0, "MELESET!").with_landing(target);
    }

    if (target.x - keeper_x).abs() < config.keeper_reach && target.y > 40.0 {
        return AttemptOutcome::new(OutcomeKind::Save, 50, "DITANGKAP KIPER!")
            .with_landing(target);
    }

    // Quick decisions pay
    let base = 200 + pressure_left * 50;
    let (bonus, label) = if (target.x < 30.0 || target.x > 70.0) && target.y < 40.0 {
        (100, "GOAL SUDUT ATAS!")
    } else if target.y < 35.0 {
        (50, "GOAL ATAS!")
    } else {
        (0, "GOOOAL!")
    };

    AttemptOutcome::new(OutcomeKind::Goal, base + bonus, label).with_landing(target)
}

/// Keeper position `turn_time` seconds into a player turn
pub fn keeper_position(config: &PenaltyConfig, turn_time: f32) -> f32 {
    config.keeper_center + config.keeper_swing * (turn_time * config.keeper_rate).sin()
}

#[derive(Debug, Clone, Copy)]
enum ComputerPhase {
    RunUp(Delay),
    Result(Delay),
}

/// Best-of-five shoot-out against the computer, then sudden death
pub struct PenaltyGame {
    config: PenaltyConfig,
    round: PenaltyRound,
    score: MatchScore,
    pressure: Option<RoundClock>,
    turn_time: f32,
    computer: Option<ComputerPhase>,
    result: Option<MatchResult>,
}

impl PenaltyGame {
    pub fn new(config: PenaltyConfig) -> Self {
        let keeper_x = config.keeper_center;
        Self {
            config,
            round: PenaltyRound {
                number: 0,
                turn: Turn::Player,
                keeper_x,
                aim: None,
            },
            score: MatchScore::new(),
            pressure: None,
            turn_time: 0.0,
            computer: None,
            result: None,
        }
    }

    pub fn score(&self) -> &MatchScore {
        &self.score
    }

    pub fn config(&self) -> &PenaltyConfig {
        &self.config
    }

    /// Seconds left before the automatic shot
    pub fn pressure_left(&self) -> u32 {
        self.pressure.map_or(0, |p| p.remaining())
    }

    fn start_player_turn(&mut self, number: u32, events: &mut Events) {
        self.round = PenaltyRound {
            number,
            turn: Turn::Player,
            keeper_x: self.config.keeper_center,
            aim: None,
        };
        self.turn_time = 0.0;
        self.pressure = Some(RoundClock::new(self.config.pressure_secs));
        self.computer = None;
        debug!(round = number, "penalty round");
        events.push(SessionEvent::RoundStarted(number));
    }

    fn shoot(&mut self, target: Vec2) -> Evaluation {
        let target = Zone::PENALTY_GOAL.clamp(target);
        let pressure_left = self.pressure_left();
        let outcome = evaluate_penalty(target, self.round.keeper_x, pressure_left, &self.config);
        trace!(?target, keeper = self.round.keeper_x, pressure_left, kind = ?outcome.kind, "penalty");

        self.score.shots += 1;
        if outcome.kind == OutcomeKind::Goal {
            self.score.player += 1;
        }
        self.pressure = None;

        Evaluation {
            outcome,
            hold_secs: self.config.flight_secs + self.config.result_secs,
        }
    }

    fn update_player_turn(&mut self, dt: f32, events: &mut Events) -> ModeSignal {
        self.turn_time += dt;
        self.round.keeper_x = keeper_position(&self.config, self.turn_time);

        let Some(pressure) = self.pressure.as_mut() else {
            return ModeSignal::Continue;
        };
        let step = pressure.update(dt);
        if step.ticks > 0 {
            events.push(SessionEvent::PressureTick(pressure.remaining()));
        }
        if step.expired {
            debug!(round = self.round.number, "pressure expired, shooting at default spot");
            return ModeSignal::Resolved(self.shoot(DEFAULT_SHOT));
        }
        ModeSignal::Continue
    }

    fn update_computer_turn(&mut self, dt: f32, rng: &mut GameRng, events: &mut Events) -> ModeSignal {
        match self.computer {
            Some(ComputerPhase::RunUp(mut delay)) => {
                if delay.update(dt) {
                    let scored = rng.0.gen_bool(self.config.computer_success_rate);
                    if scored {
                        self.score.computer += 1;
                    }
                    events.push(SessionEvent::ComputerKick { scored });
                    let mut result = Delay::new();
                    result.start(self.config.computer_result_secs);
                    self.computer = Some(ComputerPhase::Result(result));
                } else {
                    self.computer = Some(ComputerPhase::RunUp(delay));
                }
                ModeSignal::Continue
            }
            Some(ComputerPhase::Result(mut delay)) => {
                if delay.update(dt) {
                    self.computer = None;
                    self.next_round(events)
                } else {
                    self.computer = Some(ComputerPhase::Result(delay));
                    ModeSignal::Continue
                }
            }
            None => ModeSignal::Continue,
        }
    }

    fn next_round(&mut self, events: &mut Events) -> ModeSignal {
        let completed = self.round.number;
        if self.score.is_decided(completed, self.config.regulation_rounds) {
            let result = MatchResult {
                player_goals: self.score.player,
                computer_goals: self.score.computer,
                rounds: completed,
            };
            info!(
                player = result.player_goals,
                computer = result.computer_goals,
                rounds = completed,
                "penalty match decided"
            );
            events.push(SessionEvent::MatchDecided {
                player_won: result.player_won(),
            });
            self.result = Some(result);
            return ModeSignal::Finished;
        }
        self.start_player_turn(completed + 1, events);
        ModeSignal::Continue
    }
}

impl GameMode for PenaltyGame {
    type Round = PenaltyRound;
    type Action = PenaltyAction;

    fn kind(&self) -> ModeKind {
        ModeKind::Penalty
    }

    fn countdown_secs(&self) -> u32 {
        self.config.countdown_secs
    }

    fn session_secs(&self) -> Option<u32> {
        None
    }

    fn begin(&mut self, _rng: &mut GameRng, events: &mut Events) {
        self.score = MatchScore::new();
        self.result = None;
        self.start_player_turn(1, events);
    }

    fn round(&self) -> &PenaltyRound {
        &self.round
    }

    fn update(&mut self, dt: f32, rng: &mut GameRng, events: &mut Events) -> ModeSignal {
        match self.round.turn {
            Turn::Player => self.update_player_turn(dt, events),
            Turn::Computer => self.update_computer_turn(dt, rng, events),
        }
    }

    fn evaluate(&mut self, action: PenaltyAction, _rng: &mut GameRng) -> Option<Evaluation> {
        if self.round.turn != Turn::Player || self.pressure.is_none() {
            return None;
        }
        match action {
            PenaltyAction::Aim(spot) => {
                self.round.aim = Some(Zone::PENALTY_GOAL.clamp(spot));
                None
            }
            PenaltyAction::Shoot => {
                let target = self.round.aim?;
                Some(self.shoot(target))
            }
            PenaltyAction::ShootAt(spot) => Some(self.shoot(spot)),
        }
    }

    fn settle(&mut self, _rng: &mut GameRng, _events: &mut Events) -> ModeSignal {
        // Player's shot has played out; the computer steps up
        self.round.turn = Turn::Computer;
        self.round.aim = None;
        let mut run_up = Delay::new();
        run_up.start(self.config.computer_runup_secs);
        self.computer = Some(ComputerPhase::RunUp(run_up));
        ModeSignal::Continue
    }

    fn halt(&mut self) {
        self.pressure = None;
        self.computer = None;
    }

    fn match_result(&self) -> Option<MatchResult> {
        self.result
    }
}
