use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::options::IndexOptions;
use mongodb::Client;
use mongodb::Collection;
use mongodb::Database;
use mongodb::IndexModel;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

pub const VETS_COLLECTION: &str = "vets";
pub const ANIMALS_COLLECTION: &str = "animals";
pub const TREATMENTS_COLLECTION: &str = "treatments";

#[derive(Debug, Error)]
pub enum MongoContextError {
    #[error("Invalid MongoDB URI: {0}")]
    InvalidUri(String),

    #[error("MongoDB error: {0}")]
    Driver(#[from] mongodb::error::Error),
}

/// Handle to the clinic database.
///
/// Cheap to clone; the driver shares one connection pool between clones, so
/// each repository gets its own copy instead of reaching for a global.
#[derive(Clone, Debug)]
pub struct MongoContext {
    db: Database,
}

impl MongoContext {
    /// Connect to `uri`, select `db_name` and verify the server answers a ping.
    pub async fn init(uri: &str, db_name: &str) -> Result<Self, MongoContextError> {
        validate_mongo_uri(uri)?;

        let mut client_options = ClientOptions::parse(uri).await?;
        client_options.app_name = Some("clinic-service".to_string());

        let client = Client::with_options(client_options)?;
        let db = client.database(db_name);

        db.run_command(doc! { "ping": 1 }).await?;
        tracing::info!(database = db_name, "Connected to MongoDB");

        Ok(Self { db })
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn collection<T>(&self, name: &str) -> Collection<T>
    where
        T: Send + Sync + Serialize + DeserializeOwned,
    {
        self.db.collection::<T>(name)
    }

    /// Create the indexes the repositories rely on. Idempotent.
    pub async fn ensure_indexes(&self) -> Result<(), MongoContextError> {
        let unique_username = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.db
            .collection::<mongodb::bson::Document>(VETS_COLLECTION)
            .create_index(unique_username)
            .await?;

        let by_animal = IndexModel::builder()
            .keys(doc! { "animal_id": 1 })
            .build();
        self.db
            .collection::<mongodb::bson::Document>(TREATMENTS_COLLECTION)
            .create_index(by_animal)
            .await?;

        tracing::info!("MongoDB indexes ensured");
        Ok(())
    }
}

fn validate_mongo_uri(uri: &str) -> Result<(), MongoContextError> {
    let host_part = uri
        .strip_prefix("mongodb://")
        .or_else(|| uri.strip_prefix("mongodb+srv://"))
        .ok_or_else(|| {
            MongoContextError::InvalidUri(
                "must start with 'mongodb://' or 'mongodb+srv://'".to_string(),
            )
        })?;

    if host_part.trim().is_empty() {
        return Err(MongoContextError::InvalidUri(
            "missing host after scheme".to_string(),
        ));
    }

    if uri.contains(char::is_whitespace) {
        return Err(MongoContextError::InvalidUri(
            "must not contain whitespace".to_string(),
        ));
    }

    Ok(())
}
