//! DynamoDB storage backend implementation.
//!
//! The table has a single string partition key `Id` and plain `name` and
//! `email` string attributes. No sort key, no indexes.

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
