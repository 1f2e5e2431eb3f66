//! Pairwise voting tournament: library with models and transition logic.

pub mod logic;
pub mod models;

pub use logic::{next, next_from, reduce, restart, round_winners, set_entries, vote, Action};
pub use models::{Entry, Round, TournamentPhase, TournamentState, VoterId};
