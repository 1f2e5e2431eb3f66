//! TournamentState: the immutable whole-tournament snapshot.

use crate::models::round::{Entry, Round};
use serde::{Deserialize, Serialize};

/// Coarse phase of the tournament, derived from which fields are populated.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentPhase {
    /// Entries may be seeded; no vote has started.
    #[default]
    Setup,
    /// A round is active and accepting ballots.
    Voting,
    /// A winner has been declared; terminal until restarted.
    Complete,
}

/// One snapshot of the tournament. Operations never mutate a snapshot; they
/// return a new one, so callers may hold and compare old snapshots freely.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentState {
    /// Entries awaiting pairing, in FIFO order. Empty in the terminal state.
    /// Never contains the two entries currently under vote.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<Entry>,
    /// The sequence originally supplied to `set_entries`, kept for `restart`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub initial_entries: Vec<Entry>,
    /// The active round, while one is in progress.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote: Option<Round>,
    /// The tournament winner; set only in the terminal state, mutually
    /// exclusive with `vote`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<Entry>,
}

impl TournamentState {
    /// A fresh empty snapshot. Each caller gets an independent value; there
    /// is deliberately no shared initial-state constant.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> TournamentPhase {
        if self.winner.is_some() {
            TournamentPhase::Complete
        } else if self.vote.is_some() {
            TournamentPhase::Voting
        } else {
            TournamentPhase::Setup
        }
    }
}
