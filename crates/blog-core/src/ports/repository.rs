use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostChanges};
use crate::error::PersistenceError;

/// Post repository - owns persistence of post records.
///
/// Every call performs a single read or write against the backing store and
/// resolves to either the record or an error.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Validate `fields`, assign an id and persist the new post.
    async fn create_post(&self, fields: NewPost) -> Result<Post, PersistenceError>;

    /// Apply `changes` to the post with `id` and return the updated record.
    async fn update_post(&self, id: &str, changes: PostChanges) -> Result<Post, PersistenceError>;

    /// Find a post by its id.
    async fn find_post(&self, id: &str) -> Result<Post, PersistenceError>;
}
