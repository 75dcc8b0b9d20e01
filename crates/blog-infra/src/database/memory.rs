//! In-memory post repository - used as fallback when no database is reachable.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::PersistenceError;
use blog_core::domain::{NewPost, Post, PostChanges};
use blog_core::ports::PostRepository;

/// In-memory repository using a HashMap with async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<HashMap<String, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create_post(&self, fields: NewPost) -> Result<Post, PersistenceError> {
        let post = fields.into_post(Uuid::new_v4().simple().to_string())?;

        let mut posts = self.posts.write().await;
        posts.insert(post.id.clone(), post.clone());

        tracing::info!(post_id = %post.id, "Post created (in-memory)");
        Ok(post)
    }

    async fn update_post(&self, id: &str, changes: PostChanges) -> Result<Post, PersistenceError> {
        changes.validate()?;

        let mut posts = self.posts.write().await;
        let post = posts
            .get_mut(id)
            .ok_or_else(|| PersistenceError::not_found(id))?;
        changes.apply_to(post);

        Ok(post.clone())
    }

    async fn find_post(&self, id: &str) -> Result<Post, PersistenceError> {
        let posts = self.posts.read().await;
        posts
            .get(id)
            .cloned()
            .ok_or_else(|| PersistenceError::not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn fields(title: &str, content: &str, author: &str) -> NewPost {
        NewPost {
            title: Some(title.to_string()),
            content: Some(content.to_string()),
            author: Some(author.to_string()),
            date: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_date() {
        let repo = InMemoryPostRepository::new();
        let before = Utc::now();

        let post = repo
            .create_post(fields("My first test post", "Random content", "stswenguser"))
            .await
            .unwrap();

        assert!(!post.id.is_empty());
        assert_eq!(post.title, "My first test post");
        assert_eq!(post.content, "Random content");
        assert_eq!(post.author, "stswenguser");
        assert!(post.date >= before);
    }

    #[tokio::test]
    async fn test_create_generates_unique_ids() {
        let repo = InMemoryPostRepository::new();

        let first = repo.create_post(fields("t", "c", "a")).await.unwrap();
        let second = repo.create_post(fields("t", "c", "a")).await.unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_create_rejects_missing_content() {
        let repo = InMemoryPostRepository::new();
        let candidate = NewPost {
            content: None,
            ..fields("t", "c", "a")
        };

        let result = repo.create_post(candidate).await;
        assert!(matches!(result, Err(PersistenceError::Validation(_))));
        assert!(repo.posts.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_update_preserves_id() {
        let repo = InMemoryPostRepository::new();
        let created = repo.create_post(fields("t", "c", "a")).await.unwrap();
        let date = Utc::now();

        let updated = repo
            .update_post(
                &created.id,
                PostChanges {
                    title: Some("Updated title".to_string()),
                    content: Some("Updated content".to_string()),
                    author: Some("updatedAuthor".to_string()),
                    date: Some(date),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Updated title");
        assert_eq!(updated.content, "Updated content");
        assert_eq!(updated.author, "updatedAuthor");
        assert_eq!(updated.date, date);

        let found = repo.find_post(&created.id).await.unwrap();
        assert_eq!(found, updated);
    }

    #[tokio::test]
    async fn test_update_rejects_empty_title() {
        let repo = InMemoryPostRepository::new();
        let created = repo.create_post(fields("t", "c", "a")).await.unwrap();

        let result = repo
            .update_post(
                &created.id,
                PostChanges {
                    title: Some(String::new()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(PersistenceError::Validation(_))));
        assert_eq!(repo.find_post(&created.id).await.unwrap().title, "t");
    }

    #[tokio::test]
    async fn test_whitespace_fields_are_not_empty() {
        let repo = InMemoryPostRepository::new();
        let created = repo.create_post(fields(" ", "c", "a")).await.unwrap();

        let updated = repo
            .update_post(
                &created.id,
                PostChanges {
                    author: Some("  ".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, " ");
        assert_eq!(updated.author, "  ");
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let repo = InMemoryPostRepository::new();

        let find = repo.find_post("507asdghajsdhjgasd").await;
        let update = repo
            .update_post("507asdghajsdhjgasd", PostChanges::default())
            .await;

        assert!(matches!(find, Err(PersistenceError::NotFound { .. })));
        assert!(matches!(update, Err(PersistenceError::NotFound { .. })));
    }
}
