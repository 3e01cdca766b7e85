use users_core::response::{self, ApiResponse};

/// Handler error type that wraps `anyhow::Error`.
///
/// This allows using `?` on store and parse failures inside the handlers;
/// every such failure ends up as a 500 envelope carrying its message.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    pub fn into_response(self) -> ApiResponse {
        tracing::error!(error = %self.0, "Request failed");

        response::error(500, format!("internal error: {}", self.0))
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
