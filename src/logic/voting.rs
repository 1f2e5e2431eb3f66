//! Ballot handling within the active round.

use crate::models::Round;

/// Retract `voter`'s recorded ballot, if any: decrement the tally for the
/// previously chosen entry and drop the voter from `votes`.
fn remove_previous_vote(mut round: Round, voter: &str) -> Round {
    if let Some(previous) = round.votes.remove(voter) {
        if let Some(count) = round.tally.get_mut(&previous) {
            *count = count.saturating_sub(1);
        }
    }
    round
}

/// Count a ballot for `entry` if it is one of the pair; otherwise leave the
/// round unchanged.
fn add_vote(mut round: Round, entry: &str, voter: &str) -> Round {
    if round.contains(entry) {
        *round.tally.entry(entry.to_owned()).or_insert(0) += 1;
        round.votes.insert(voter.to_owned(), entry.to_owned());
    }
    round
}

/// Apply (or correct) one voter's ballot within the active round.
///
/// Composed as retract-then-count: any previous ballot by `voter` is removed
/// first, then the new ballot is counted if `entry` is in the pair. Revoting
/// the same entry therefore nets out to no change, and a vote for an entry
/// outside the pair still retracts the old ballot (intentional asymmetry).
pub fn vote(round: &Round, entry: &str, voter: &str) -> Round {
    add_vote(remove_previous_vote(round.clone(), voter), entry, voter)
}
