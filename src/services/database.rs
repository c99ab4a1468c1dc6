use crate::error::AppError;
use mongodb::{
    bson::{doc, Document},
    Client as MongoClient, Collection, Database,
};

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    // Both collections are schema-less; records carry whatever fields the
    // client sent, plus the store-assigned _id.
    pub fn users(&self) -> Collection<Document> {
        self.db.collection("users")
    }

    pub fn tasks(&self) -> Collection<Document> {
        self.db.collection("tasks")
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}
