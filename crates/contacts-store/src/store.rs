//! Main store implementation for database operations.
//!
//! The `Store` type provides all CRUD operations for the `contacts` and
//! `users` collections. Every operation is a single driver call; error
//! translation to HTTP status codes happens in the server layer.

use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection, Database};

use contacts_core::Contact;

use crate::error::{StoreError, StoreResult};
use crate::models::{ContactDocument, DbDiagnostics};

/// Name of the contacts collection.
pub const CONTACTS_COLLECTION: &str = "contacts";

/// Name of the users collection.
pub const USERS_COLLECTION: &str = "users";

/// Configuration for connecting to the database.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Connection string for the document store.
    pub uri: String,
    /// Database name.
    pub database: String,
}

impl StoreConfig {
    /// Create configuration from environment variables.
    ///
    /// Reads:
    /// - `MONGODB_URI` - Required connection string
    /// - `MONGODB_DB` - Optional database name, defaults to "contacts_db"
    pub fn from_env() -> StoreResult<Self> {
        let uri = std::env::var("MONGODB_URI").map_err(|_| {
            StoreError::Config("MONGODB_URI environment variable not set".to_string())
        })?;

        let database =
            std::env::var("MONGODB_DB").unwrap_or_else(|_| "contacts_db".to_string());

        Ok(Self { uri, database })
    }
}

/// Database store for the Contacts API.
///
/// Holds the shared database handle. The driver pools connections
/// internally, so the handle is reused across concurrent requests.
#[derive(Clone)]
pub struct Store {
    db: Database,
}

impl Store {
    /// Connect to the database with the given configuration.
    ///
    /// The driver establishes connections lazily, so a `ping` command is
    /// issued here to surface a bad URI at startup rather than on the
    /// first request.
    pub async fn connect(config: StoreConfig) -> StoreResult<Self> {
        tracing::info!("Connecting to database...");

        let client = Client::with_uri_str(&config.uri).await?;
        let db = client.database(&config.database);
        db.run_command(doc! { "ping": 1 }).await?;

        tracing::info!(database = %db.name(), "Connected to database");

        Ok(Self { db })
    }

    /// Name of the connected database.
    pub fn database_name(&self) -> &str {
        self.db.name()
    }

    /// Typed read view of the contacts collection.
    fn contacts(&self) -> Collection<ContactDocument> {
        self.db.collection(CONTACTS_COLLECTION)
    }

    /// Write view of the contacts collection; `_id` is store-generated.
    fn contacts_without_id(&self) -> Collection<Contact> {
        self.db.collection(CONTACTS_COLLECTION)
    }

    /// The users collection holds free-form documents.
    fn users(&self) -> Collection<Document> {
        self.db.collection(USERS_COLLECTION)
    }

    // ==================== Contact Operations ====================

    /// List all contacts, in storage-native order.
    pub async fn list_contacts(&self) -> StoreResult<Vec<ContactDocument>> {
        let cursor = self.contacts().find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Get a contact by ID.
    pub async fn get_contact(&self, id: ObjectId) -> StoreResult<ContactDocument> {
        self.contacts()
            .find_one(doc! { "_id": id })
            .await?
            .ok_or(StoreError::ContactNotFound(id))
    }

    /// Insert a new contact and return its generated identifier.
    pub async fn insert_contact(&self, contact: &Contact) -> StoreResult<ObjectId> {
        let result = self.contacts_without_id().insert_one(contact).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or(StoreError::UnexpectedInsertId(result.inserted_id))
    }

    /// Replace all fields of a contact keyed by ID.
    pub async fn replace_contact(&self, id: ObjectId, contact: &Contact) -> StoreResult<()> {
        let result = self
            .contacts_without_id()
            .replace_one(doc! { "_id": id }, contact)
            .await?;

        if result.matched_count == 0 {
            return Err(StoreError::ContactNotFound(id));
        }
        Ok(())
    }

    /// Delete a contact keyed by ID.
    pub async fn delete_contact(&self, id: ObjectId) -> StoreResult<()> {
        let result = self.contacts().delete_one(doc! { "_id": id }).await?;

        if result.deleted_count == 0 {
            return Err(StoreError::ContactNotFound(id));
        }
        Ok(())
    }

    // ==================== User Operations ====================

    /// List all users, in storage-native order.
    pub async fn list_users(&self) -> StoreResult<Vec<Document>> {
        let cursor = self.users().find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Get a user by ID.
    pub async fn get_user(&self, id: ObjectId) -> StoreResult<Document> {
        self.users()
            .find_one(doc! { "_id": id })
            .await?
            .ok_or(StoreError::UserNotFound(id))
    }

    // ==================== Diagnostics ====================

    /// Inspect the database for the debug endpoint and the startup check.
    pub async fn diagnostics(&self) -> StoreResult<DbDiagnostics> {
        let collections = self.db.list_collection_names().await?;
        let contacts_collection = collections.iter().any(|name| name == CONTACTS_COLLECTION);

        let contact_count = if contacts_collection {
            self.contacts().count_documents(doc! {}).await?
        } else {
            0
        };

        Ok(DbDiagnostics {
            collections,
            contacts_collection,
            contact_count,
        })
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("database", &self.db.name())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_config_from_env() {
        // Single test so the env mutations below never race each other.
        // SAFETY: no other test in this crate touches these variables.
        unsafe { env::remove_var("MONGODB_URI") };
        assert!(matches!(
            StoreConfig::from_env(),
            Err(StoreError::Config(_))
        ));

        // SAFETY: as above.
        unsafe { env::set_var("MONGODB_URI", "mongodb://localhost:27017") };
        unsafe { env::remove_var("MONGODB_DB") };
        let config = StoreConfig::from_env().unwrap();
        assert_eq!(config.uri, "mongodb://localhost:27017");
        assert_eq!(config.database, "contacts_db");

        // SAFETY: as above.
        unsafe { env::set_var("MONGODB_DB", "contacts_test") };
        let config = StoreConfig::from_env().unwrap();
        assert_eq!(config.database, "contacts_test");

        // SAFETY: as above.
        unsafe { env::remove_var("MONGODB_URI") };
        unsafe { env::remove_var("MONGODB_DB") };
    }
}
