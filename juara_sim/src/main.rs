use std::path::PathBuf;
use std::process;

use clap::Parser;
use juara_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

mod bot;
mod report;

use bot::{AccuracyBot, Bot, FreeKickBot, PenaltyBot, PowerBot};
use report::SessionRow;

/// Simulated step length handed to `Session::tick`
const FRAME_SECS: f32 = 1.0 / 60.0;
/// Safety net for sessions that never finish
const MAX_SESSION_SECS: f32 = 900.0;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Game mode to simulate; all four when omitted
    #[arg(short, long)]
    mode: Option<ModeKind>,

    #[arg(short, long, default_value_t = 12345)]
    seed: u64,

    /// Sessions per mode, seeds counting up from --seed
    #[arg(short = 'n', long, default_value_t = 1)]
    sessions: u32,

    /// Bot skill, 0 (wild) to 1 (flawless)
    #[arg(short = 'k', long, default_value_t = 0.7)]
    skill: f32,

    /// JSON config overriding the default tuning
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run(&cli) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> JuaraResult<()> {
    let config = match &cli.config {
        Some(path) => {
            info!("Loading config: {}", path.display());
            Config::load(path)?
        }
        None => Config::new(),
    };
    let skill = cli.skill.clamp(0.0, 1.0);
    if skill != cli.skill {
        warn!("Skill {} clamped to {}", cli.skill, skill);
    }

    let modes = match cli.mode {
        Some(mode) => vec![mode],
        None => ModeKind::ALL.to_vec(),
    };

    let mut rows = Vec::new();
    for mode in modes {
        for i in 0..cli.sessions {
            let seed = cli.seed.wrapping_add(u64::from(i));
            let summary = simulate(mode, &config, seed, skill);
            rows.push(SessionRow { seed, summary });
        }
    }

    println!("{}", report::sessions(&rows));
    Ok(())
}

fn simulate(mode: ModeKind, config: &Config, seed: u64, skill: f32) -> SessionSummary {
    // Bots get their own stream so they never perturb the game's draws
    let bot_rng = StdRng::seed_from_u64(seed ^ 0x5eed_b07);
    match mode {
        ModeKind::Accuracy => play(
            AccuracySession::accuracy(config, seed),
            AccuracyBot::new(bot_rng, skill),
        ),
        ModeKind::Power => play(
            PowerSession::power(config, seed),
            PowerBot::new(bot_rng, skill),
        ),
        ModeKind::FreeKick => play(
            FreeKickSession::free_kick(config, seed),
            FreeKickBot::new(bot_rng, skill),
        ),
        ModeKind::Penalty => play(
            PenaltySession::penalty(config, seed),
            PenaltyBot::new(bot_rng, skill),
        ),
    }
}

fn play<M: GameMode, B: Bot<M>>(mut session: Session<M>, mut bot: B) -> SessionSummary {
    session.start();

    let mut clock = 0.0;
    while !session.is_complete() {
        if clock > MAX_SESSION_SECS {
            warn!(mode = %session.mode().kind(), "session did not finish, stopping");
            session.quit();
            break;
        }
        if session.state() == SessionState::Active {
            if let Some(action) = bot.decide(&session, FRAME_SECS) {
                session.act(action);
            }
        }
        session.tick(FRAME_SECS);
        clock += FRAME_SECS;

        for event in session.drain_events() {
            match event {
                SessionEvent::Attempt(outcome) => {
                    debug!(label = outcome.label, points = outcome.points, "attempt")
                }
                SessionEvent::MatchDecided { player_won } => {
                    debug!(player_won, "match decided")
                }
                _ => {}
            }
        }
    }

    session.summary()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_mode_and_sessions() {
        let cli = Cli::try_parse_from(["juara-sim", "--mode", "freestyle", "-n", "3"]).unwrap();
        assert_eq!(cli.mode, Some(ModeKind::FreeKick));
        assert_eq!(cli.sessions, 3);
        assert_eq!(cli.seed, 12345);
        assert!(Cli::try_parse_from(["juara-sim", "--mode", "quiz"]).is_err());
    }

    #[test]
    fn test_flawless_bot_tops_accuracy() {
        let summary = simulate(ModeKind::Accuracy, &Config::new(), 1, 1.0);
        assert_eq!(summary.accuracy, 100);
        assert!(summary.attempts > 0);
    }

    #[test]
    fn test_every_mode_completes() {
        for mode in ModeKind::ALL {
            let summary = simulate(mode, &Config::new(), 3, 0.5);
            assert_eq!(summary.mode, mode);
            assert!(summary.attempts > 0);
        }
        let penalty = simulate(ModeKind::Penalty, &Config::new(), 3, 0.5);
        assert!(penalty.match_result.is_some());
    }
}
