//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `mongodb` - MongoDB document store support

pub mod database;

pub use database::{DatabaseConfig, DocumentStore, InMemoryPostRepository};

#[cfg(feature = "mongodb")]
pub use database::MongoPostRepository;
