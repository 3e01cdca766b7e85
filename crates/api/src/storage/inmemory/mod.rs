//! In-memory storage backend for testing.
//!
//! Mirrors the DynamoDB semantics (overwrite on save, upsert on update,
//! idempotent delete) so the handler can be exercised without AWS.

mod repository;

pub use repository::InMemoryRepository;
