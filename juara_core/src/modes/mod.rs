//! The four kicking mini-games behind one round-simulator interface.

pub mod accuracy;
pub mod free_kick;
pub mod penalty;
pub mod power;

pub use accuracy::*;
pub use free_kick::*;
pub use penalty::*;
pub use power::*;

use std::fmt;
use std::str::FromStr;

use crate::error::JuaraError;
use crate::outcome::AttemptOutcome;
use crate::resources::{Events, GameRng};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeKind {
    Accuracy,
    Power,
    FreeKick,
    Penalty,
}

impl ModeKind {
    pub const ALL: [ModeKind; 4] = [
        ModeKind::Accuracy,
        ModeKind::Power,
        ModeKind::FreeKick,
        ModeKind::Penalty,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Accuracy => "Tendangan Akurat",
            Self::Power => "Tendangan Kuat",
            Self::FreeKick => "Tendangan Bebas",
            Self::Penalty => "Adu Penalti",
        }
    }
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Accuracy => "accuracy",
            Self::Power => "power",
            Self::FreeKick => "free-kick",
            Self::Penalty => "penalty",
        };
        f.write_str(name)
    }
}

impl FromStr for ModeKind {
    type Err = JuaraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "accuracy" => Ok(Self::Accuracy),
            "power" => Ok(Self::Power),
            "free-kick" | "freekick" | "freestyle" => Ok(Self::FreeKick),
            "penalty" => Ok(Self::Penalty),
            _ => Err(JuaraError::Parse {
                kind: "game mode",
                value: s.to_string(),
            }),
        }
    }
}

/// An evaluated attempt and how long the session holds in `Evaluating`
/// before the next round (ball flight plus result display)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub outcome: AttemptOutcome,
    pub hold_secs: f32,
}

/// What a mode asks of the session after an update
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModeSignal {
    Continue,
    /// The mode resolved an attempt on its own (e.g. an automatic shot)
    Resolved(Evaluation),
    /// The match is over regardless of the clock
    Finished,
}

/// Outcome of a head-to-head match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    pub player_goals: u32,
    pub computer_goals: u32,
    pub rounds: u32,
}

impl MatchResult {
    pub fn player_won(&self) -> bool {
        self.player_goals > self.computer_goals
    }

    pub fn label(&self) -> &'static str {
        if self.player_won() {
            "KAMU MENANG!"
        } else {
            "KAMU KALAH!"
        }
    }
}

/// Round simulator shared by every mode.
///
/// The session owns the clock, the FSM and the stats; a mode owns its round
/// parameters and any timers that only matter while it is `Active`.
pub trait GameMode {
    type Round: Clone + fmt::Debug;
    type Action: Copy + fmt::Debug;

    fn kind(&self) -> ModeKind;

    /// Pre-play countdown length; 0 starts play immediately
    fn countdown_secs(&self) -> u32;

    /// Session clock length; `None` when the mode is bounded by rounds
    fn session_secs(&self) -> Option<u32>;

    /// Reset per-session state and generate the first round
    fn begin(&mut self, rng: &mut GameRng, events: &mut Events);

    fn round(&self) -> &Self::Round;

    /// Advance while `Active`
    fn update(&mut self, dt: f32, rng: &mut GameRng, events: &mut Events) -> ModeSignal;

    /// Evaluate a player action. `None` means the action was ignored or did
    /// not complete an attempt.
    fn evaluate(&mut self, action: Self::Action, rng: &mut GameRng) -> Option<Evaluation>;

    /// Called once the evaluation hold has elapsed
    fn settle(&mut self, rng: &mut GameRng, events: &mut Events) -> ModeSignal;

    /// Disarm every mode timer; called on each session exit path
    fn halt(&mut self);

    fn match_result(&self) -> Option<MatchResult> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_names_round_trip() {
        for mode in ModeKind::ALL {
            assert_eq!(mode.to_string().parse::<ModeKind>().unwrap(), mode);
        }
        assert_eq!("Freestyle".parse::<ModeKind>().unwrap(), ModeKind::FreeKick);
        assert!("quiz".parse::<ModeKind>().is_err());
    }

    #[test]
    fn test_match_result_label() {
        let won = MatchResult {
            player_goals: 4,
            computer_goals: 3,
            rounds: 5,
        };
        assert!(won.player_won());
        assert_eq!(won.label(), "KAMU MENANG!");
        let lost = MatchResult {
            player_goals: 2,
            computer_goals: 3,
            rounds: 5,
        };
        assert_eq!(lost.label(), "KAMU KALAH!");
    }
}
