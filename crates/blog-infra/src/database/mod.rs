//! Post storage - document store connection and repositories.

mod connections;
mod memory;

#[cfg(feature = "mongodb")]
pub mod document;
#[cfg(feature = "mongodb")]
mod mongo_repo;

pub use connections::{DatabaseConfig, DocumentStore};
pub use memory::InMemoryPostRepository;

#[cfg(feature = "mongodb")]
pub use mongo_repo::MongoPostRepository;
