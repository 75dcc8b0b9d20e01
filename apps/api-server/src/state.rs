//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::PostRepository;
use blog_infra::{DatabaseConfig, DocumentStore, InMemoryPostRepository};

#[cfg(feature = "mongodb")]
use blog_infra::MongoPostRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub db: Option<Arc<DocumentStore>>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "mongodb")]
        let (db, posts): (Option<Arc<DocumentStore>>, Arc<dyn PostRepository>) = {
            if let Some(config) = db_config {
                match DocumentStore::connect(config).await {
                    Ok(store) => {
                        let repo: Arc<dyn PostRepository> =
                            Arc::new(MongoPostRepository::new(&store));
                        (Some(Arc::new(store)), repo)
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        (None, Arc::new(InMemoryPostRepository::new()))
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                (None, Arc::new(InMemoryPostRepository::new()))
            }
        };

        #[cfg(not(feature = "mongodb"))]
        let (db, posts): (Option<Arc<DocumentStore>>, Arc<dyn PostRepository>) = {
            let _ = db_config;
            tracing::info!("Running without mongodb feature - using in-memory repository");
            (None, Arc::new(InMemoryPostRepository::new()))
        };

        tracing::info!("Application state initialized");

        Self { posts, db }
    }

    /// State around an existing repository, with no database handle.
    #[cfg(test)]
    pub fn with_repository(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts, db: None }
    }

    /// Name of the storage backing the post repository.
    pub fn storage(&self) -> &'static str {
        if self.db.is_some() { "mongodb" } else { "in-memory" }
    }
}
