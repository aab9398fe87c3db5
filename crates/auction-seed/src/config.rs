//! Configuration for seeding operations.

use serde::{Deserialize, Serialize};

/// Environment variable naming the target database.
pub const DATABASE_ENV: &str = "MONGO_INITDB_DATABASE";

/// Environment variable holding the MongoDB connection string.
pub const URI_ENV: &str = "MONGODB_URI";

/// Database used when [`DATABASE_ENV`] is unset or empty.
pub const DEFAULT_DATABASE: &str = "auction_db";

/// Connection string used when [`URI_ENV`] is unset or empty.
pub const DEFAULT_URI: &str = "mongodb://localhost:27017";

/// Configuration for seeding operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    /// MongoDB connection string.
    pub uri: String,

    /// Name of the database that receives the collections and seed data.
    pub database: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_URI.to_string(),
            database: DEFAULT_DATABASE.to_string(),
        }
    }
}

impl SeedConfig {
    /// Builds a config from raw values, falling back to the defaults for
    /// anything missing or empty. Non-empty values are taken verbatim.
    pub fn resolve(uri: Option<String>, database: Option<String>) -> Self {
        Self {
            uri: non_empty(uri).unwrap_or_else(|| DEFAULT_URI.to_string()),
            database: non_empty(database).unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
        }
    }

    /// Reads [`URI_ENV`] and [`DATABASE_ENV`] from the process environment.
    pub fn from_env() -> Self {
        Self::resolve(std::env::var(URI_ENV).ok(), std::env::var(DATABASE_ENV).ok())
    }

    /// Returns a copy targeting another database on the same server.
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
