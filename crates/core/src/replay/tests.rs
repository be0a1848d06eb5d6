use super::*;
use crate::autopilot;
use crate::journal::Decision;
use crate::mapgen::DungeonConfig;
use crate::types::{Difficulty, PlayerClass};

const MAX_DECISIONS: usize = 2_000;

fn recorded_run(seed: u64, class: PlayerClass) -> (GameSession, DecisionJournal) {
    let config = DungeonConfig::standard();
    let mut session =
        GameSession::new("Replayer", class, seed, Difficulty::Normal, config.clone()).unwrap();
    let mut journal =
        DecisionJournal::new(seed, "Replayer", class, Difficulty::Normal, config);
    autopilot::play_to_end(&mut session, &mut journal, MAX_DECISIONS).unwrap();
    (session, journal)
}

#[test]
fn replay_reproduces_the_recorded_run() {
    for (seed, class) in [(777, PlayerClass::Warrior), (31, PlayerClass::Rogue), (4, PlayerClass::Mage)] {
        let (live, journal) = recorded_run(seed, class);
        let replayed = replay_to_end(&journal).unwrap();

        assert_eq!(replayed.final_state, SessionState::RunEnded, "seed {seed}");
        assert_eq!(replayed.end_reason, live.end_reason());
        assert_eq!(replayed.snapshot_hash, live.snapshot_hash());
        assert_eq!(replayed.tick, live.tick());
        assert_eq!(&replayed.statistics, live.statistics());
    }
}

#[test]
fn journal_survives_a_json_round_trip_with_the_same_outcome() {
    let (live, journal) = recorded_run(2024, PlayerClass::Warrior);
    let json = serde_json::to_string_pretty(&journal).unwrap();
    let loaded: DecisionJournal = serde_json::from_str(&json).unwrap();
    assert_eq!(replay_to_end(&loaded).unwrap().snapshot_hash, live.snapshot_hash());
}

#[test]
fn rejected_decision_reports_its_sequence_number() {
    let (_, mut journal) = recorded_run(55, PlayerClass::Warrior);
    journal.decisions.truncate(1);
    journal.append(Decision::Rest);

    let error = replay_to_end(&journal).unwrap_err();

    assert!(matches!(
        error,
        ReplayError::Rejected { seq: 1, source: GameError::InvalidState(_) }
    ));
}

#[test]
fn invalid_setup_and_unknown_versions_fail_before_replaying() {
    let (_, mut journal) = recorded_run(9, PlayerClass::Rogue);
    journal.config.min_rooms_per_floor = 10;
    journal.config.max_rooms_per_floor = 2;
    assert!(matches!(replay_to_end(&journal), Err(ReplayError::InvalidSetup(_))));

    journal.format_version = 99;
    assert_eq!(replay_to_end(&journal).unwrap_err(), ReplayError::UnsupportedVersion(99));
}
