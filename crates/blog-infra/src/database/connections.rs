#[cfg(feature = "mongodb")]
use std::time::Duration;

#[cfg(feature = "mongodb")]
use mongodb::{
    Client, Database,
    bson::doc,
    error::Error as MongoError,
    options::{Acknowledgment, ClientOptions, WriteConcern},
};

/// Configuration for the document database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub name: String,
    pub retry_writes: bool,
    /// `majority`, a node count such as `1`, or a custom tag set name.
    pub write_concern: String,
}

/// Process-wide handle to the document database.
///
/// Built once at startup and handed to the repositories that need it.
///
/// # Example
/// ```ignore
/// let store = DocumentStore::connect(&config).await?;
/// let posts = MongoPostRepository::new(&store);
/// ```
#[cfg(feature = "mongodb")]
pub struct DocumentStore {
    pub client: Client,
    pub database: Database,
}

#[cfg(not(feature = "mongodb"))]
pub struct DocumentStore;

#[cfg(feature = "mongodb")]
impl DocumentStore {
    /// Connect to the database described by `config` and check it answers.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, MongoError> {
        tracing::info!("Initializing document store connection...");

        let options = client_options(config).await?;
        let client = Client::with_options(options)?;
        let database = client.database(&config.name);

        database.run_command(doc! { "ping": 1 }).await?;
        tracing::info!(
            database = %config.name,
            retry_writes = config.retry_writes,
            write_concern = %config.write_concern,
            "Document store connected"
        );

        Ok(Self { client, database })
    }
}

/// Build the driver options: the connection string plus the fixed write settings.
#[cfg(feature = "mongodb")]
pub(crate) async fn client_options(config: &DatabaseConfig) -> Result<ClientOptions, MongoError> {
    let mut options = ClientOptions::parse(&config.url).await?;

    options.app_name = Some("blog-api".to_string());
    options.connect_timeout = Some(Duration::from_secs(10));
    options.retry_writes = Some(config.retry_writes);
    options.write_concern = Some(
        WriteConcern::builder()
            .w(acknowledgment(&config.write_concern))
            .build(),
    );

    Ok(options)
}

#[cfg(feature = "mongodb")]
fn acknowledgment(level: &str) -> Acknowledgment {
    match level {
        "majority" => Acknowledgment::Majority,
        other => match other.parse::<u32>() {
            Ok(nodes) => Acknowledgment::Nodes(nodes),
            Err(_) => Acknowledgment::Custom(other.to_string()),
        },
    }
}
