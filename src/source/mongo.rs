//! MongoDB-backed document source

use super::DocumentSource;
use crate::config::ConnectionConfig;
use crate::error::{Error, Result};
use crate::types::IndexDescriptor;
use async_trait::async_trait;
use bson::{doc, Bson, Document};
use futures::TryStreamExt;
use mongodb::error::ErrorKind;
use mongodb::{Client, Database};
use tracing::debug;

/// MongoDB `NamespaceNotFound` server error code.
const NAMESPACE_NOT_FOUND: i32 = 26;

/// A document source backed by a live MongoDB database.
#[derive(Debug, Clone)]
pub struct MongoSource {
    database: Database,
}

impl MongoSource {
    /// Connect using a connection config.
    ///
    /// The database comes from `config.database` when set, otherwise from
    /// the path component of the connection URI. A URI without a database
    /// name is a configuration error, not a source fault.
    pub async fn connect(config: &ConnectionConfig) -> Result<Self> {
        let client = Client::with_uri_str(&config.uri).await?;
        let database = match &config.database {
            Some(name) => client.database(name),
            None => client
                .default_database()
                .ok_or_else(|| Error::config("database name not found in connection URI"))?,
        };
        debug!(database = %database.name(), "connected to document source");
        Ok(Self { database })
    }

    /// Wrap an already-selected database
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    /// Name of the selected database
    pub fn database_name(&self) -> &str {
        self.database.name()
    }

    /// List collection names in the selected database, sorted
    pub async fn collection_names(&self) -> Result<Vec<String>> {
        let mut names = self.database.list_collection_names().await?;
        names.sort();
        Ok(names)
    }
}

#[async_trait]
impl DocumentSource for MongoSource {
    async fn fetch_sample(&self, collection: &str, limit: u32) -> Result<Vec<Bson>> {
        // The server treats limit 0 as "no limit"; a zero-sized sample
        // must fetch nothing instead.
        if limit == 0 {
            return Ok(Vec::new());
        }

        let coll = self.database.collection::<Document>(collection);
        let mut cursor = coll.find(doc! {}).limit(i64::from(limit)).await?;

        let mut documents = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            documents.push(Bson::Document(document));
        }
        debug!(collection, fetched = documents.len(), "sampled documents");
        Ok(documents)
    }

    async fn count_all(&self, collection: &str) -> Result<u64> {
        let coll = self.database.collection::<Document>(collection);
        Ok(coll.count_documents(doc! {}).await?)
    }

    async fn list_indexes(&self, collection: &str) -> Result<Vec<IndexDescriptor>> {
        let coll = self.database.collection::<Document>(collection);
        let mut cursor = match coll.list_indexes().await {
            Ok(cursor) => cursor,
            // A collection that does not exist has no indexes; report it
            // like an empty one, matching fetch_sample and count_all.
            Err(err) if is_namespace_not_found(&err) => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut indexes = Vec::new();
        while let Some(model) = cursor.try_next().await? {
            indexes.push(bson::to_document(&model)?);
        }
        Ok(indexes)
    }
}

fn is_namespace_not_found(err: &mongodb::error::Error) -> bool {
    matches!(*err.kind, ErrorKind::Command(ref command) if command.code == NAMESPACE_NOT_FOUND)
}
