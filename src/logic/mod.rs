//! Tournament transition logic: seeding, round advancement, voting, dispatch.

mod entries;
mod reducer;
mod rounds;
mod voting;

pub use entries::set_entries;
pub use reducer::{reduce, Action};
pub use rounds::{next, next_from, restart, round_winners};
pub use voting::vote;
