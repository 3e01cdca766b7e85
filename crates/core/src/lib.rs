//! Core types for the users API.
//!
//! Everything in this crate is pure: the record model, the storage contract
//! the handler depends on, and the response envelope builder. Concrete
//! storage backends and the Lambda entry point live in `users_api`.

pub mod response;
pub mod serde;
pub mod storage;
pub mod user;
