//! Round advancement: winner resolution, `next`, and `restart`.

use crate::models::{Entry, Round, TournamentState};

/// Winners of a round, in pair order.
///
/// The entry with the strictly greater tally wins alone; equal tallies
/// (including the no-ballots case, 0 == 0) advance both entries.
pub fn round_winners(round: &Round) -> Vec<Entry> {
    let (a, b) = &round.pair;
    let a_votes = round.tally_for(a);
    let b_votes = round.tally_for(b);

    if a_votes == b_votes {
        vec![a.clone(), b.clone()]
    } else if a_votes > b_votes {
        vec![a.clone()]
    } else {
        vec![b.clone()]
    }
}

/// Resolve the active round (if any) and advance the tournament.
///
/// 1. Append the round's winners to the back of `entries`.
/// 2. One entry left: terminal state with that entry as `winner`.
/// 3. Otherwise: pair the first two entries into a new round numbered one
///    past the resolved round.
///
/// With no active round and no entries (already terminal, or never seeded)
/// this is a no-op returning the input unchanged, so a dispatcher may safely
/// replay a duplicate NEXT.
pub fn next(state: &TournamentState) -> TournamentState {
    let round = state.vote.as_ref().map(|v| v.round).unwrap_or(0);
    next_from(state, round)
}

/// `next` with an explicit base round number; the new round is numbered
/// `round + 1`. Used by `restart` to keep numbering monotonic across
/// tournaments run from the same initial entries.
pub fn next_from(state: &TournamentState, round: u32) -> TournamentState {
    let mut combined = state.entries.clone();
    if let Some(vote) = &state.vote {
        combined.extend(round_winners(vote));
    }

    match combined.len() {
        0 => state.clone(),
        1 => TournamentState {
            entries: Vec::new(),
            initial_entries: state.initial_entries.clone(),
            vote: None,
            winner: combined.pop(),
        },
        _ => {
            let mut entries = combined;
            let a = entries.remove(0);
            let b = entries.remove(0);
            TournamentState {
                entries,
                initial_entries: state.initial_entries.clone(),
                vote: Some(Round::new(round + 1, a, b)),
                winner: None,
            }
        }
    }
}

/// Reset the pool to `initial_entries` and begin a fresh tournament.
///
/// Clears `vote` and `winner`, then starts the first round via `next_from`
/// with the outgoing round number, so round numbers continue where the last
/// tournament left off instead of resetting to 1.
pub fn restart(state: &TournamentState) -> TournamentState {
    let round = state.vote.as_ref().map(|v| v.round).unwrap_or(0);
    let reset = TournamentState {
        entries: state.initial_entries.clone(),
        initial_entries: state.initial_entries.clone(),
        vote: None,
        winner: None,
    };
    next_from(&reset, round)
}
