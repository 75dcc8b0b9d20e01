//! MongoDB post repository.

use async_trait::async_trait;
use mongodb::Collection;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::error::{Error as MongoError, ErrorKind};
use mongodb::options::ReturnDocument;

use blog_core::PersistenceError;
use blog_core::domain::{NewPost, Post, PostChanges};
use blog_core::ports::PostRepository;

use super::connections::DocumentStore;
use super::document::post::{self, PostDocument};

/// Post repository backed by the `posts` collection.
pub struct MongoPostRepository {
    collection: Collection<PostDocument>,
}

impl MongoPostRepository {
    pub fn new(store: &DocumentStore) -> Self {
        Self {
            collection: store.database.collection(post::COLLECTION),
        }
    }
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn create_post(&self, fields: NewPost) -> Result<Post, PersistenceError> {
        let id = ObjectId::new();
        let post = fields.into_post(id.to_hex())?;
        let document = PostDocument::new(id, &post);

        self.collection
            .insert_one(&document)
            .await
            .map_err(map_mongo_error)?;

        tracing::info!(post_id = %id, author = %document.author, "Post created");
        document.try_into()
    }

    async fn update_post(&self, id: &str, changes: PostChanges) -> Result<Post, PersistenceError> {
        changes.validate()?;
        let oid = post::object_id(id)?;

        if changes.is_empty() {
            return self.find_post(id).await;
        }

        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": oid }, post::set_document(changes))
            .return_document(ReturnDocument::After)
            .await
            .map_err(map_mongo_error)?
            .ok_or_else(|| PersistenceError::not_found(id))?;

        tracing::info!(post_id = %id, "Post updated");
        updated.try_into()
    }

    async fn find_post(&self, id: &str) -> Result<Post, PersistenceError> {
        tracing::debug!(post_id = %id, "Finding post");
        let oid = post::object_id(id)?;

        self.collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(map_mongo_error)?
            .ok_or_else(|| PersistenceError::not_found(id))?
            .try_into()
    }
}

pub(crate) fn map_mongo_error(err: MongoError) -> PersistenceError {
    match err.kind.as_ref() {
        ErrorKind::ServerSelection { .. } | ErrorKind::Io(_) => {
            PersistenceError::Connection(err.to_string())
        }
        _ => PersistenceError::Query(err.to_string()),
    }
}
