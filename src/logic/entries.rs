//! Seeding the entry pool.

use crate::models::{Entry, TournamentState};

/// Seed (or replace) the pool of entries awaiting pairing.
///
/// Any iterable of entry-likes is normalized into an ordered sequence and
/// stored as both `entries` and `initial_entries` (the latter backs
/// `restart`). All other fields are left untouched: this operation does not
/// clear an in-progress `vote` or `winner`, so callers invoke it at
/// tournament setup. Always succeeds.
pub fn set_entries<I>(state: &TournamentState, entries: I) -> TournamentState
where
    I: IntoIterator,
    I::Item: Into<Entry>,
{
    let list: Vec<Entry> = entries.into_iter().map(Into::into).collect();
    TournamentState {
        entries: list.clone(),
        initial_entries: list,
        vote: state.vote.clone(),
        winner: state.winner.clone(),
    }
}
