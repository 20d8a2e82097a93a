use crate::modes::ModeKind;

/// A rank label and the score needed to earn it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rank {
    pub label: &'static str,
    pub min_score: u32,
}

const fn rank(label: &'static str, min_score: u32) -> Rank {
    Rank { label, min_score }
}

const BEGINNER: Rank = rank("Pemula", 0);

// Highest threshold first
const ACCURACY_RANKS: [Rank; 4] = [
    rank("Juara", 1500),
    rank("Ahli", 800),
    rank("Menengah", 300),
    BEGINNER,
];

const POWER_RANKS: [Rank; 4] = [
    rank("Power Master", 2000),
    rank("Strong Striker", 1200),
    rank("Power Player", 600),
    BEGINNER,
];

const FREE_KICK_RANKS: [Rank; 4] = [
    rank("Free Kick Master", 3000),
    rank("Set Piece Specialist", 2000),
    rank("Free Kick Pro", 1000),
    BEGINNER,
];

const PENALTY_RANKS: [Rank; 4] = [
    rank("Penalty Master", 1500),
    rank("Penalty Expert", 1000),
    rank("Penalty Pro", 500),
    BEGINNER,
];

pub fn rank_table(mode: ModeKind) -> &'static [Rank] {
    match mode {
        ModeKind::Accuracy => &ACCURACY_RANKS,
        ModeKind::Power => &POWER_RANKS,
        ModeKind::FreeKick => &FREE_KICK_RANKS,
        ModeKind::Penalty => &PENALTY_RANKS,
    }
}

pub fn rank_for(mode: ModeKind, score: u32) -> Rank {
    rank_table(mode)
        .iter()
        .copied()
        .find(|r| score >= r.min_score)
        .unwrap_or(BEGINNER)
}
