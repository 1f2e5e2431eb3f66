//! Action dispatch: one typed action in, one new snapshot out.

use crate::logic::{next, restart, set_entries, vote};
use crate::models::{Entry, TournamentState, VoterId};
use serde::{Deserialize, Serialize};

/// An action fed to the engine by the dispatch loop. Serialized with a
/// `type` tag so actions can travel as JSON.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    SetEntries { entries: Vec<Entry> },
    Next,
    Vote { entry: Entry, voter: VoterId },
    Restart,
}

/// Apply one action to a snapshot, returning the new snapshot.
///
/// VOTE is the only action needing orchestration: the active round is located
/// inside the state, voted on, and the result reassembled. A VOTE with no
/// active round returns the input unchanged.
pub fn reduce(state: &TournamentState, action: &Action) -> TournamentState {
    match action {
        Action::SetEntries { entries } => set_entries(state, entries.iter().cloned()),
        Action::Next => next(state),
        Action::Vote { entry, voter } => match &state.vote {
            Some(round) => TournamentState {
                vote: Some(vote(round, entry, voter)),
                ..state.clone()
            },
            None => state.clone(),
        },
        Action::Restart => restart(state),
    }
}
