//! Scripted players. `skill` in 0..=1 scales reaction time and aim error.

use glam::Vec2;
use juara_core::*;
use rand::rngs::StdRng;
use rand::Rng;

pub trait Bot<M: GameMode> {
    /// Called every step while the session is `Active`
    fn decide(&mut self, session: &Session<M>, dt: f32) -> Option<M::Action>;
}

/// Uniform error in `[-spread, spread]`, scaled down by skill
fn wobble(rng: &mut StdRng, skill: f32, spread: f32) -> f32 {
    let width = (1.0 - skill) * spread;
    if width <= 0.0 {
        0.0
    } else {
        rng.gen_range(-width..=width)
    }
}

fn reaction_secs(rng: &mut StdRng, skill: f32) -> f32 {
    let base = 0.2 + (1.0 - skill) * 1.0;
    base + rng.gen_range(0.0..0.3)
}

pub struct AccuracyBot {
    rng: StdRng,
    skill: f32,
    wait: Option<f32>,
}

impl AccuracyBot {
    pub fn new(rng: StdRng, skill: f32) -> Self {
        Self {
            rng,
            skill,
            wait: None,
        }
    }
}

impl Bot<AccuracyGame> for AccuracyBot {
    fn decide(&mut self, session: &Session<AccuracyGame>, dt: f32) -> Option<AccuracyAction> {
        let skill = self.skill;
        let rng = &mut self.rng;
        let wait = self.wait.get_or_insert_with(|| reaction_secs(rng, skill));
        *wait -= dt;
        if *wait > 0.0 {
            return None;
        }
        self.wait = None;

        let target = session.round().target;
        let x = target.x + wobble(&mut self.rng, self.skill, 30.0);
        let y = target.y + wobble(&mut self.rng, self.skill, 30.0);
        Some(AccuracyAction::new(x, y))
    }
}

pub struct PowerBot {
    rng: StdRng,
    skill: f32,
    release_at: Option<u32>,
}

impl PowerBot {
    pub fn new(rng: StdRng, skill: f32) -> Self {
        Self {
            rng,
            skill,
            release_at: None,
        }
    }
}

impl Bot<PowerGame> for PowerBot {
    fn decide(&mut self, session: &Session<PowerGame>, _dt: f32) -> Option<PowerAction> {
        let meter = session.mode().meter();
        let skill = self.skill;
        let rng = &mut self.rng;
        let release_at = *self
            .release_at
            .get_or_insert_with(|| (97.0 + wobble(rng, skill, 60.0)).clamp(0.0, 100.0) as u32);

        // Only release on the way up; at the top the meter is about to turn
        if (meter.rising && meter.captured() >= release_at) || meter.captured() == 100 {
            self.release_at = None;
            Some(PowerAction::Kick)
        } else {
            None
        }
    }
}

pub struct FreeKickBot {
    rng: StdRng,
    skill: f32,
    wait: Option<f32>,
}

impl FreeKickBot {
    pub fn new(rng: StdRng, skill: f32) -> Self {
        Self {
            rng,
            skill,
            wait: None,
        }
    }
}

impl Bot<FreeKickGame> for FreeKickBot {
    fn decide(&mut self, session: &Session<FreeKickGame>, dt: f32) -> Option<FreeKickAction> {
        // Reading the wind takes longer than clicking a target
        let skill = self.skill;
        let rng = &mut self.rng;
        let wait = self
            .wait
            .get_or_insert_with(|| 1.0 + reaction_secs(rng, skill));
        *wait -= dt;
        if *wait > 0.0 {
            return None;
        }
        self.wait = None;

        let round = session.round();
        let drift = round.wind_drift(session.mode().config().wind_drift);
        // Landing x moves 1.5 per degree; lean against the wind
        let angle = -drift / 1.5 + wobble(&mut self.rng, self.skill, 25.0);
        let power = 90.0 + wobble(&mut self.rng, self.skill, 45.0);
        Some(FreeKickAction::new(
            angle.round() as i32,
            power.clamp(0.0, 100.0).round() as u32,
        ))
    }
}

pub struct PenaltyBot {
    rng: StdRng,
    skill: f32,
    wait: Option<f32>,
}

impl PenaltyBot {
    pub fn new(rng: StdRng, skill: f32) -> Self {
        Self {
            rng,
            skill,
            wait: None,
        }
    }
}

impl Bot<PenaltyGame> for PenaltyBot {
    fn decide(&mut self, session: &Session<PenaltyGame>, dt: f32) -> Option<PenaltyAction> {
        let round = session.round();
        if round.turn != Turn::Player {
            self.wait = None;
            return None;
        }

        // Nerves: weaker players can run the pressure clock down
        let skill = self.skill;
        let rng = &mut self.rng;
        let wait = self
            .wait
            .get_or_insert_with(|| reaction_secs(rng, skill) * 4.0);
        *wait -= dt;
        if *wait > 0.0 {
            return None;
        }
        self.wait = None;

        // Go for the corner away from the keeper
        let x = if round.keeper_x < 50.0 { 72.0 } else { 28.0 };
        let spot = Vec2::new(
            x + wobble(&mut self.rng, self.skill, 20.0),
            32.0 + wobble(&mut self.rng, self.skill, 25.0),
        );
        Some(PenaltyAction::ShootAt(spot))
    }
}
