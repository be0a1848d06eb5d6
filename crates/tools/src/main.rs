use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use delve_core::autopilot::play_to_end;
use delve_core::replay::replay_to_end;
use delve_core::session::{RunStatistics, TracingSessionListener};
use delve_core::{DecisionJournal, Difficulty, DungeonConfig, GameSession, PlayerClass};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Simulate and replay deterministic dungeon runs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a run to the end with the autopilot policy
    Simulate(SimulateArgs),
    /// Replay a decision journal and print its final state
    Replay {
        /// Path to the journal JSON file to replay
        #[arg(short, long)]
        journal: PathBuf,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct SimulateArgs {
    #[arg(short, long, default_value_t = 12345)]
    seed: u64,
    #[arg(short, long, default_value = "warrior", value_parser = parse_class)]
    class: PlayerClass,
    #[arg(short, long, default_value = "normal", value_parser = parse_difficulty)]
    difficulty: Difficulty,
    #[arg(short, long, default_value = "Adventurer")]
    name: String,
    /// TOML file overriding the standard dungeon config
    #[arg(long)]
    config: Option<PathBuf>,
    /// Where to write the decision journal as JSON
    #[arg(short, long)]
    journal_out: Option<PathBuf>,
    #[arg(long, default_value_t = 5_000)]
    max_decisions: usize,
    /// Print run statistics as JSON
    #[arg(long)]
    json: bool,
}

fn parse_class(value: &str) -> Result<PlayerClass, String> {
    match value.to_ascii_lowercase().as_str() {
        "warrior" => Ok(PlayerClass::Warrior),
        "rogue" => Ok(PlayerClass::Rogue),
        "mage" => Ok(PlayerClass::Mage),
        other => Err(format!("unknown class `{other}`, expected warrior, rogue or mage")),
    }
}

fn parse_difficulty(value: &str) -> Result<Difficulty, String> {
    match value.to_ascii_lowercase().as_str() {
        "easy" => Ok(Difficulty::Easy),
        "normal" => Ok(Difficulty::Normal),
        "hard" => Ok(Difficulty::Hard),
        "nightmare" => Ok(Difficulty::Nightmare),
        other => Err(format!("unknown difficulty `{other}`")),
    }
}

fn load_config(path: Option<&Path>) -> Result<DungeonConfig> {
    let Some(path) = path else {
        return Ok(DungeonConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: DungeonConfig = toml::from_str(&text)
        .with_context(|| format!("Failed to parse config TOML: {}", path.display()))?;
    config.validate().with_context(|| format!("Invalid dungeon config: {}", path.display()))?;
    Ok(config)
}

fn print_statistics(statistics: &RunStatistics, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(statistics)?);
        return Ok(());
    }
    println!("Deepest Floor: {}", statistics.deepest_floor);
    println!("Enemies Killed: {} ({} bosses)", statistics.enemies_killed, statistics.bosses_killed);
    println!("Damage Dealt/Taken: {}/{}", statistics.damage_dealt, statistics.damage_taken);
    println!("Gold Earned/Spent: {}/{}", statistics.gold_earned, statistics.gold_spent);
    Ok(())
}

fn simulate(args: SimulateArgs) -> Result<()> {
    let SimulateArgs { seed, class, difficulty, name, config, journal_out, max_decisions, json } =
        args;
    let config = load_config(config.as_deref())?;
    let mut session = GameSession::new(name.clone(), class, seed, difficulty, config.clone())
        .context("Failed to set up session")?;
    session.set_listener(TracingSessionListener);
    let mut journal = DecisionJournal::new(seed, name, class, difficulty, config);

    let decisions = play_to_end(&mut session, &mut journal, max_decisions)
        .context("Autopilot decision was rejected")?;

    if let Some(path) = journal_out.as_deref() {
        let data = serde_json::to_string_pretty(&journal)?;
        fs::write(path, data)
            .with_context(|| format!("Failed to write journal file: {}", path.display()))?;
        info!(path = %path.display(), decisions = journal.len(), "journal written");
    }

    println!("Simulation complete.");
    println!("Run: {}", session.run_info().run_id);
    println!("Decisions: {decisions}");
    println!("Final Tick: {}", session.tick());
    println!("Outcome: {:?}", session.end_reason());
    println!("Snapshot Hash: {}", session.snapshot_hash());
    print_statistics(session.statistics(), json)
}

fn replay(path: &Path, json: bool) -> Result<()> {
    let journal_data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read journal file: {}", path.display()))?;
    let journal: DecisionJournal =
        serde_json::from_str(&journal_data).context("Failed to deserialize journal JSON")?;
    if journal.is_empty() {
        bail!("Journal {} contains no decisions", path.display());
    }

    let result = replay_to_end(&journal).context("Replay failed during execution")?;

    println!("Replay complete.");
    println!("Final Tick: {}", result.tick);
    println!("Final State: {:?}", result.final_state);
    println!("Outcome: {:?}", result.end_reason);
    println!("Snapshot Hash: {}", result.snapshot_hash);
    print_statistics(&result.statistics, json)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match Cli::parse().command {
        Command::Simulate(args) => simulate(args),
        Command::Replay { journal, json } => replay(&journal, json),
    }
}
