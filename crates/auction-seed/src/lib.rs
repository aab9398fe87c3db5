//! Database initialization for the auction service.
//!
//! Creates the `users`, `auctions` and `bids` collections, declares their
//! secondary indexes and inserts a small fixed set of users. Safe to run more
//! than once: existing collections, indexes and users are left as they are.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use auction_seed::prelude::*;
//!
//! let config = SeedConfig::from_env();
//! let client = connect(&config).await?;
//! let report = Seeder::new(&client, &config).run().await?;
//! ```

pub mod config;
pub mod db;
pub mod fixtures;
pub mod models;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::SeedConfig;
    pub use crate::db::{SeedError, SeedReport, Seeder, connect};
    pub use crate::fixtures::{SEED_USERS, SeedUser};
    pub use crate::models::{
        AuctionDocument, AuctionStatus, Collection, ProductCondition, UserDocument,
    };
}
