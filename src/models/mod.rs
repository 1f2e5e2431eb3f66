//! Data structures for the voting tournament: entries, rounds, snapshots.

mod round;
mod state;

pub use round::{Entry, Round, VoterId};
pub use state::{TournamentPhase, TournamentState};
