//! Storage backend implementations.
//!
//! Concrete implementations of [`users_core::storage::UserRepository`]:
//!
//! - [`dynamodb`]: AWS DynamoDB via `aws-sdk-dynamodb`, used by the Lambda.
//! - `inmemory`: HashMap-backed store used by the handler tests.

pub mod dynamodb;

#[cfg(test)]
pub mod inmemory;

pub use dynamodb::DynamoDbRepository;
