//! Database integration for provisioning.
//!
//! The [`Seeder`] creates the auction collections and their indexes, then
//! inserts the fixed seed users.

mod indexes;
mod seeder;

pub use indexes::declared_indexes;
pub use seeder::{SeedError, SeedReport, Seeder, connect};
