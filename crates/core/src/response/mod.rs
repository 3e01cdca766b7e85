//! Response envelopes returned by the request router.
//!
//! Pure functions: a status code and a serializable body go in, an
//! [`ApiResponse`] with a JSON body and content type comes out.

mod envelope;

pub use envelope::{
    error, json, success_message, ApiResponse, CONTENT_TYPE_JSON, SERIALIZATION_ERROR_BODY,
};
