//! Post document for MongoDB.

use chrono::{DateTime, Utc};
use mongodb::bson::{self, Document, doc, oid::ObjectId};
use serde::{Deserialize, Serialize};

use blog_core::PersistenceError;
use blog_core::domain::{Post, PostChanges};

/// Name of the collection holding posts.
pub const COLLECTION: &str = "posts";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: bson::DateTime,
}

impl PostDocument {
    /// Build the document for a freshly validated post.
    pub fn new(id: ObjectId, post: &Post) -> Self {
        Self {
            id,
            title: post.title.clone(),
            content: post.content.clone(),
            author: post.author.clone(),
            date: to_bson_date(post.date),
        }
    }
}

/// Conversion from the stored document to the domain Post.
///
/// Fails when the stored date lies outside the range chrono can represent.
impl TryFrom<PostDocument> for Post {
    type Error = PersistenceError;

    fn try_from(document: PostDocument) -> Result<Self, Self::Error> {
        let millis = document.date.timestamp_millis();
        let date = DateTime::from_timestamp_millis(millis).ok_or_else(|| {
            PersistenceError::Query(format!(
                "post {} has an out-of-range date ({millis} ms)",
                document.id
            ))
        })?;

        Ok(Self {
            id: document.id.to_hex(),
            title: document.title,
            content: document.content,
            author: document.author,
            date,
        })
    }
}

/// Parse a post id. Anything that is not ObjectId hex cannot name a post.
pub fn object_id(id: &str) -> Result<ObjectId, PersistenceError> {
    ObjectId::parse_str(id).map_err(|_| PersistenceError::not_found(id))
}

/// `$set` update for the fields present in `changes`.
pub fn set_document(changes: PostChanges) -> Document {
    let mut fields = Document::new();
    if let Some(title) = changes.title {
        fields.insert("title", title);
    }
    if let Some(content) = changes.content {
        fields.insert("content", content);
    }
    if let Some(author) = changes.author {
        fields.insert("author", author);
    }
    if let Some(date) = changes.date {
        fields.insert("date", to_bson_date(date));
    }
    doc! { "$set": fields }
}

fn to_bson_date(date: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(date.timestamp_millis())
}
