//! Sightline match runner.
//!
//! Runs a full match and writes the snapshot history as JSON.

mod deciders;

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sightline_core::agent::Role;
use sightline_core::config::{AgentConfig, FieldConfig, GameConfig, SquadConfig};
use sightline_core::{Decider, Game, History, Match, MatchConfig};
use sightline_geom::{Coord, Segment};
use tracing::info;

use crate::deciders::DeciderKind;

#[derive(Parser, Debug)]
#[command(name = "sightline")]
#[command(about = "Run a Sightline hunter/runner match", long_about = None)]
struct Args {
    /// Game configuration (JSON). Defaults to a five-squad demo
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Decider used by every agent
    #[arg(short, long, value_enum, default_value = "pursuit")]
    decider: DeciderKind,

    /// Seed for randomized deciders
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Override the configured turn budget
    #[arg(short, long)]
    turns: Option<u32>,

    /// Write the history here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,

    /// Log the final scoreboard
    #[arg(long)]
    summary: bool,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

/// Five squads on a ring around a cross of walls.
fn demo_config() -> GameConfig {
    let field = FieldConfig::default()
        .with_obstruction(Segment::new(Coord::new(-4.0, 0.0), Coord::new(4.0, 0.0)))
        .with_obstruction(Segment::new(Coord::new(0.0, -4.0), Coord::new(0.0, 4.0)));

    (0..5).fold(GameConfig::default().with_field(field), |config, i| {
        let angle = f64::from(i) / 5.0 * std::f64::consts::TAU + 0.3;
        let home = Coord::new(angle.cos(), angle.sin());
        config.with_squad(
            SquadConfig::new(format!("squad-{:02}", i + 1))
                .with_agent(
                    AgentConfig::new(format!("agent-{:02}h", i + 1), Role::Hunter)
                        .with_initial_position(home * 8.0),
                )
                .with_agent(
                    AgentConfig::new(format!("agent-{:02}r", i + 1), Role::Runner)
                        .with_initial_position(home * 5.0),
                ),
        )
    })
}

fn load_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            GameConfig::from_json_str(&text)
                .with_context(|| format!("failed to parse {}", path.display()))?
        }
        None => demo_config(),
    };
    if let Some(turns) = args.turns {
        config.turns = turns;
    }
    Ok(config)
}

fn log_scoreboard(game: &Game) {
    for (rank, squad) in game.scoreboard().into_iter().enumerate() {
        info!(
            rank = rank + 1,
            squad = squad.name(),
            total = squad.total_point(),
            gained = squad.points_gained(),
            lost = squad.points_lost(),
            "final standing"
        );
    }
}

/// Streams the history as a JSON array, followed by a newline.
fn write_history<W: Write>(history: &History, pretty: bool, mut out: W) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut out, history)
    } else {
        serde_json::to_writer(&mut out, history)
    }
    .context("failed to serialize history")?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = load_config(&args)?;
    let deciders: Vec<Box<dyn Decider>> = (0..config.agent_count())
        .map(|_| args.decider.build(args.seed))
        .collect();

    info!(
        squads = config.squads.len(),
        agents = config.agent_count(),
        turns = config.turns,
        decider = ?args.decider,
        "starting match"
    );

    let mut game_match =
        Match::new(MatchConfig::from_parts(config, deciders)).context("invalid match configuration")?;
    let history = game_match.run_to_end().context("match aborted")?;

    if args.summary {
        log_scoreboard(game_match.game());
    }

    match &args.output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
            write_history(&history, args.pretty, BufWriter::new(file))
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(snapshots = history.len(), path = %path.display(), "history written");
        }
        None => write_history(&history, args.pretty, io::stdout().lock())?,
    }

    Ok(())
}
