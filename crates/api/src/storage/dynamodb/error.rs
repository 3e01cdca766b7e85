//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `users_core::storage`.

use std::error::Error;
use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use users_core::storage::RepositoryError;

/// Map any DynamoDB operation error to RepositoryError.
///
/// Requests that never reached DynamoDB (dispatch failures, timeouts) are
/// connection failures; everything DynamoDB answered with is a query failure.
pub fn map_sdk_error<E, R>(err: SdkError<E, R>, operation: &'static str) -> RepositoryError
where
    E: ProvideErrorMetadata + Error + Send + Sync + 'static,
    R: Debug,
{
    if matches!(
        err,
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_)
    ) {
        return RepositoryError::ConnectionFailed(format!(
            "{} failed: {}",
            operation,
            DisplayErrorContext(&err)
        ));
    }

    let message = match err.code() {
        Some("ResourceNotFoundException") => "Table not found".to_string(),
        Some("ProvisionedThroughputExceededException") => {
            "Throughput exceeded, please retry".to_string()
        }
        Some("RequestLimitExceeded") => "Request limit exceeded, please retry".to_string(),
        Some("ItemCollectionSizeLimitExceededException") => {
            "Item collection size limit exceeded".to_string()
        }
        Some("TransactionConflictException") => "Transaction conflict, please retry".to_string(),
        Some("InternalServerError") => "DynamoDB internal server error".to_string(),
        _ => format!("{} failed: {}", operation, DisplayErrorContext(&err)),
    };

    RepositoryError::QueryFailed(message)
}
