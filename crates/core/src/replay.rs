//! Rebuilds a run from its decision journal.

use tracing::debug;

use crate::error::GameError;
use crate::journal::{DecisionJournal, JOURNAL_FORMAT_VERSION};
use crate::session::{GameSession, RunEndReason, RunStatistics, SessionState};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ReplayError {
    #[error("unsupported journal format version {0}")]
    UnsupportedVersion(u16),

    #[error("journal setup is invalid: {0}")]
    InvalidSetup(#[source] GameError),

    #[error("decision {seq} was rejected: {source}")]
    Rejected {
        seq: u64,
        #[source]
        source: GameError,
    },
}

#[derive(Debug, PartialEq)]
pub struct ReplayResult {
    pub final_state: SessionState,
    pub end_reason: Option<RunEndReason>,
    pub snapshot_hash: u64,
    pub tick: u64,
    pub statistics: RunStatistics,
}

/// Builds the journal's session and applies every decision in order.
pub fn replay_session(journal: &DecisionJournal) -> Result<GameSession, ReplayError> {
    if journal.format_version != JOURNAL_FORMAT_VERSION {
        return Err(ReplayError::UnsupportedVersion(journal.format_version));
    }
    let mut session = GameSession::new(
        journal.player_name.clone(),
        journal.player_class,
        journal.seed,
        journal.difficulty,
        journal.config.clone(),
    )
    .map_err(ReplayError::InvalidSetup)?;

    for record in &journal.decisions {
        session
            .apply(&record.decision)
            .map_err(|source| ReplayError::Rejected { seq: record.seq, source })?;
    }
    debug!(decisions = journal.decisions.len(), tick = session.tick(), "journal replayed");
    Ok(session)
}

pub fn replay_to_end(journal: &DecisionJournal) -> Result<ReplayResult, ReplayError> {
    let session = replay_session(journal)?;
    Ok(ReplayResult {
        final_state: session.state(),
        end_reason: session.end_reason(),
        snapshot_hash: session.snapshot_hash(),
        tick: session.tick(),
        statistics: session.statistics().clone(),
    })
}

#[cfg(test)]
mod tests;
