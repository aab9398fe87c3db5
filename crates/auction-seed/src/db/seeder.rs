//! Database seeding utilities.

use mongodb::bson::{Document, doc};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use thiserror::Error;
use tracing::{debug, info};

use super::indexes::declared_indexes;
use crate::config::SeedConfig;
use crate::fixtures::{SEED_USERS, SeedUser};
use crate::models::Collection;

/// Server error code for creating a collection that already exists.
const NAMESPACE_EXISTS: i32 = 48;

/// Server error code for a unique index violation.
const DUPLICATE_KEY: i32 = 11000;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),
    #[error("Invalid connection string: {0}")]
    InvalidUri(String),
}

/// Outcome of a full seeding run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub database: String,
    /// Collections that did not exist before this run.
    pub collections_created: Vec<String>,
    /// Names of the declared indexes, as reported by the server.
    pub indexes: Vec<String>,
    pub users_inserted: usize,
    /// Users whose `_id` was already present.
    pub users_skipped: usize,
}

/// Opens a client for the configured server.
///
/// The driver connects lazily, so an unreachable server surfaces on the
/// first operation rather than here.
pub async fn connect(config: &SeedConfig) -> Result<Client, SeedError> {
    let mut options = ClientOptions::parse(&config.uri)
        .await
        .map_err(|e| SeedError::InvalidUri(e.to_string()))?;
    options.app_name = Some("auction-seed".to_string());
    Ok(Client::with_options(options)?)
}

/// Database seeder for the auction service.
pub struct Seeder {
    db: Database,
}

impl Seeder {
    /// Creates a seeder targeting `config.database` on the given client.
    pub fn new(client: &Client, config: &SeedConfig) -> Self {
        Self {
            db: client.database(&config.database),
        }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Creates collections, indexes and [`SEED_USERS`], in that order.
    pub async fn run(&self) -> Result<SeedReport, SeedError> {
        info!("Seeding database {}", self.db.name());

        let collections_created = self.ensure_collections().await?;
        let indexes = self.ensure_indexes().await?;
        let (users_inserted, users_skipped) = self.seed_users(&SEED_USERS).await?;

        Ok(SeedReport {
            database: self.db.name().to_string(),
            collections_created,
            indexes,
            users_inserted,
            users_skipped,
        })
    }

    /// Creates any missing collection. Returns the names that were created.
    pub async fn ensure_collections(&self) -> Result<Vec<String>, SeedError> {
        let existing = self.db.list_collection_names().await?;
        let mut created = Vec::new();

        for collection in Collection::ALL {
            let name = collection.as_str();
            if existing.iter().any(|n| n == name) {
                debug!("Collection {name} already exists");
                continue;
            }

            match self.db.create_collection(name).await {
                Ok(()) => {
                    info!("Created collection {name}");
                    created.push(name.to_string());
                }
                // Another run created it between the listing and now
                Err(e) if is_command_error(&e, NAMESPACE_EXISTS) => {
                    debug!("Collection {name} already exists");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Ok(created)
    }

    /// Creates every declared index. Returns the index names.
    pub async fn ensure_indexes(&self) -> Result<Vec<String>, SeedError> {
        let mut names = Vec::new();

        for (collection, model) in declared_indexes() {
            let result = self
                .db
                .collection::<Document>(collection.as_str())
                .create_index(model)
                .await?;
            info!("Ensured index {} on {collection}", result.index_name);
            names.push(result.index_name);
        }

        Ok(names)
    }

    /// Inserts users that are not already present, keyed by `_id`.
    ///
    /// Existing documents are left untouched. Returns `(inserted, skipped)`.
    pub async fn seed_users(&self, users: &[SeedUser]) -> Result<(usize, usize), SeedError> {
        info!("Seeding {} users...", users.len());

        let collection = self.db.collection::<Document>(Collection::Users.as_str());
        let mut inserted = 0;
        let mut skipped = 0;

        for user in users {
            let document = user.to_document();
            let result = collection
                .update_one(
                    doc! { "_id": document.id.as_str() },
                    doc! { "$setOnInsert": { "name": document.name.as_str() } },
                )
                .upsert(true)
                .await;

            match result {
                Ok(r) if r.upserted_id.is_some() => inserted += 1,
                Ok(_) => {
                    debug!("User {} already present", document.id);
                    skipped += 1;
                }
                // Concurrent upsert of the same _id
                Err(e) if is_duplicate_key(&e) => skipped += 1,
                Err(e) => return Err(e.into()),
            }
        }

        info!("Seeded {inserted} users ({skipped} already present)");
        Ok((inserted, skipped))
    }
}

fn is_command_error(err: &mongodb::error::Error, code: i32) -> bool {
    matches!(err.kind.as_ref(), ErrorKind::Command(e) if e.code == code)
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(e)) => e.code == DUPLICATE_KEY,
        ErrorKind::Command(e) => e.code == DUPLICATE_KEY,
        _ => false,
    }
}
