//! Data Transfer Objects - request types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of a create or update request.
///
/// Every field is optional so that an incomplete body still reaches the
/// repository, which owns the required-field rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostPayload {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    /// RFC 3339 text or epoch milliseconds.
    #[serde(default, deserialize_with = "blog_core::domain::serde_date::optional")]
    pub date: Option<DateTime<Utc>>,
}
