use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PersistenceError;

use super::serde_date;

/// Post entity - a persisted blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    /// Identifier of the authoring user. Never checked for existence.
    pub author: String,
    pub date: DateTime<Utc>,
}

/// Candidate fields for a new post, as received from a caller.
///
/// Nothing is required at this stage; the repository validates the fields
/// before anything is written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    #[serde(default, deserialize_with = "serde_date::optional")]
    pub date: Option<DateTime<Utc>>,
}

impl NewPost {
    /// Validate the candidate fields and build the post stored under `id`.
    ///
    /// `date` defaults to the current time when absent.
    pub fn into_post(self, id: impl Into<String>) -> Result<Post, PersistenceError> {
        let title = required("title", self.title)?;
        let content = required("content", self.content)?;
        let author = required("author", self.author)?;

        Ok(Post {
            id: id.into(),
            title,
            content,
            author,
            date: self.date.unwrap_or_else(Utc::now),
        })
    }
}

/// Partial replacement of a post's writable fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    #[serde(default, deserialize_with = "serde_date::optional")]
    pub date: Option<DateTime<Utc>>,
}

impl PostChanges {
    /// Supplied text fields must not be empty.
    pub fn validate(&self) -> Result<(), PersistenceError> {
        for (field, value) in [
            ("title", &self.title),
            ("content", &self.content),
            ("author", &self.author),
        ] {
            if value.as_deref().is_some_and(str::is_empty) {
                return Err(PersistenceError::Validation(format!(
                    "`{field}` must not be empty"
                )));
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.author.is_none() && self.date.is_none()
    }

    /// Overwrite the fields present in this change set. The id is untouched.
    pub fn apply_to(self, post: &mut Post) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
        if let Some(author) = self.author {
            post.author = author;
        }
        if let Some(date) = self.date {
            post.date = date;
        }
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, PersistenceError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        Some(_) => Err(PersistenceError::Validation(format!(
            "`{field}` must not be empty"
        ))),
        None => Err(PersistenceError::Validation(format!("`{field}` is required"))),
    }
}
