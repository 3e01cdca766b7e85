pub mod error;
pub mod lambda;
pub mod users;

pub use error::AppError;
pub use lambda::function_handler;
