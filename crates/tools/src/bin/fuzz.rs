use anyhow::{Result, ensure};
use clap::Parser;
use delve_core::journal::Decision;
use delve_core::mapgen::DungeonConfig;
use delve_core::{Difficulty, GameSession, PlayerClass, RunEndReason, SessionState};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Number of independent runs, each seeded from the harness RNG
    #[arg(short, long, default_value_t = 20)]
    runs: u32,
    #[arg(short, long, default_value_t = 1000)]
    decisions: u32,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

/// Every decision kind, aimed at whatever ids are currently in reach. Many
/// will be rejected; that is part of what the harness checks.
fn candidates(session: &GameSession) -> Vec<Decision> {
    let mut decisions = vec![
        Decision::Start,
        Decision::AdvanceRoom,
        Decision::AdvanceRoom,
        Decision::ReturnRoom,
        Decision::DescendFloor,
        Decision::ExecuteCombat,
        Decision::ExecuteCombat,
        Decision::LeaveShop,
        Decision::Rest,
        Decision::LeaveRest,
        Decision::LeaveEvent,
        Decision::OpenInventory,
        Decision::CloseInventory,
        Decision::Pause,
        Decision::Resume,
    ];
    for item in session.current_room().items() {
        decisions.push(Decision::PurchaseItem { item: item.id.clone() });
        decisions.push(Decision::PickUpItem { item: item.id.clone() });
    }
    for item in session.player().inventory().items() {
        decisions.push(Decision::UseItem { item: item.id.clone() });
        decisions.push(Decision::EquipItem { item: item.id.clone() });
    }
    decisions
}

fn check_invariants(session: &GameSession) -> Result<()> {
    let player = session.player();
    let health = player.health();
    ensure!(health.current() >= 0, "Invariant failed: negative health");
    ensure!(health.current() <= health.maximum(), "Invariant failed: HP > Max HP");
    ensure!(player.gold() >= 0, "Invariant failed: negative gold");
    let dungeon = session.dungeon();
    ensure!(
        dungeon.current_floor_number() <= dungeon.deepest_floor()
            && dungeon.deepest_floor() <= dungeon.max_floors(),
        "Invariant failed: floor pointer out of range"
    );
    if !player.is_alive() {
        ensure!(
            session.end_reason() == Some(RunEndReason::PlayerDeath),
            "Invariant failed: dead player without a death ending"
        );
    }
    if session.state() == SessionState::InCombat {
        ensure!(session.current_room().has_alive_enemies(), "Invariant failed: combat with no enemies");
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    println!("Starting Fuzz harness on seed {} for {} runs...", args.seed, args.runs);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let classes = [PlayerClass::Warrior, PlayerClass::Rogue, PlayerClass::Mage];
    let difficulties = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard, Difficulty::Nightmare];
    let configs = [DungeonConfig::easy(), DungeonConfig::standard(), DungeonConfig::hard()];

    for run in 0..args.runs {
        let seed = rng.next_u64();
        let mut session = GameSession::new(
            "Fuzz",
            choose(&mut rng, &classes),
            seed,
            choose(&mut rng, &difficulties),
            choose(&mut rng, &configs),
        )?;
        let mut accepted = 0u32;

        for _ in 0..args.decisions {
            if session.state() == SessionState::RunEnded {
                break;
            }
            let decision = choose(&mut rng, &candidates(&session));
            let before = session.snapshot_hash();
            match session.apply(&decision) {
                Ok(()) => accepted += 1,
                Err(error) => ensure!(
                    session.snapshot_hash() == before,
                    "Invariant failed: rejected {decision:?} mutated state ({error})"
                ),
            }
            check_invariants(&session)?;
        }

        println!(
            "run {run}: seed {seed} accepted {accepted} decisions, state {:?}, outcome {:?}",
            session.state(),
            session.end_reason()
        );
    }

    println!("Fuzz complete. All invariants held.");
    Ok(())
}
