//! Domain entities - the core business objects.

mod post;
pub mod serde_date;

pub use post::{NewPost, Post, PostChanges};
