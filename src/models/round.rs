//! Round: the active pair under vote, its tally, and per-voter ballots.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A candidate competing in the tournament. Opaque; compared by equality only.
pub type Entry = String;

/// Identifier of a voter (e.g. a session or client id). The engine only
/// deduplicates ballots by this id; validating it is the caller's job.
pub type VoterId = String;

/// The active vote: two entries matched against each other, numbered
/// monotonically across rounds (and across restarts of the same tournament).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub round: u32,
    /// Exactly two distinct entries, in fixed order.
    pub pair: (Entry, Entry),
    /// Vote count per entry; keys are a subset of `pair`.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub tally: HashMap<Entry, u32>,
    /// Currently-counted ballot per voter; values are a subset of `pair`.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub votes: HashMap<VoterId, Entry>,
}

impl Round {
    /// Fresh round with the given number and pair; no ballots cast yet.
    pub fn new(round: u32, a: impl Into<Entry>, b: impl Into<Entry>) -> Self {
        Self {
            round,
            pair: (a.into(), b.into()),
            tally: HashMap::new(),
            votes: HashMap::new(),
        }
    }

    /// Whether `entry` is one of the two entries under vote.
    pub fn contains(&self, entry: &str) -> bool {
        self.pair.0 == entry || self.pair.1 == entry
    }

    /// Vote count for `entry`, treating a missing tally key as zero.
    pub fn tally_for(&self, entry: &str) -> u32 {
        self.tally.get(entry).copied().unwrap_or(0)
    }
}
