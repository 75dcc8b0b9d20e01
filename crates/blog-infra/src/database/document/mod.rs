//! BSON document models.

pub mod post;

pub use post::PostDocument;
