//! User CRUD request router.
//!
//! | Method | Path `Id` | Action |
//! |--------|-----------|--------|
//! | GET    | absent    | list all users |
//! | GET    | present   | get one user |
//! | POST   | -         | create a user |
//! | PUT    | required  | update name and email |
//! | DELETE | required  | delete a user |

use users_core::response::{self, ApiResponse};
use users_core::serde::{is_blank, non_blank};
use users_core::storage::UserRepository;
use users_core::user::User;

use super::AppError;

pub const MISSING_ID: &str = "missing path parameter 'Id'";
pub const EMPTY_BODY: &str = "request body is empty";
pub const NOT_FOUND: &str = "user not found";
pub const UPDATED: &str = "user updated";
pub const DELETED: &str = "user deleted";

/// Transport-neutral view of an incoming request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Option<String>,
    pub path_id: Option<String>,
    pub body: Option<String>,
}

#[cfg(test)]
impl ApiRequest {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: Some(method.into()),
            ..Self::default()
        }
    }

    pub fn with_path_id(mut self, id: impl Into<String>) -> Self {
        self.path_id = Some(id.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

type HandlerResult = Result<ApiResponse, AppError>;

/// Route a request to the matching user operation.
///
/// Always produces a response: validation problems become 400s and any
/// store or body parse failure becomes a 500.
pub async fn handle_request(repo: &dyn UserRepository, request: ApiRequest) -> ApiResponse {
    let method = request.method.as_deref().unwrap_or_default().to_uppercase();
    let id = request.path_id.as_deref();
    let body = request.body.as_deref();

    tracing::info!(method = %method, path_id = ?id, body = ?body, "Handling request");

    let result = match method.as_str() {
        "GET" => match id {
            Some(id) => get_user(repo, id).await,
            None => list_users(repo).await,
        },
        "POST" => create_user(repo, body).await,
        "PUT" => update_user(repo, id, body).await,
        "DELETE" => delete_user(repo, id).await,
        _ => Ok(response::error(400, format!("unsupported method: {}", method))),
    };

    result.unwrap_or_else(AppError::into_response)
}

/// List all users (GET without `Id`).
async fn list_users(repo: &dyn UserRepository) -> HandlerResult {
    let users = repo.find_all().await?;
    Ok(response::json(200, &users))
}

/// Get a single user (GET with `Id`).
async fn get_user(repo: &dyn UserRepository, id: &str) -> HandlerResult {
    if is_blank(Some(id)) {
        return Ok(response::error(400, MISSING_ID));
    }

    Ok(match repo.find_by_id(id).await? {
        Some(user) => response::json(200, &user),
        None => response::error(404, NOT_FOUND),
    })
}

/// Create a user (POST), generating an id when the body has none.
async fn create_user(repo: &dyn UserRepository, body: Option<&str>) -> HandlerResult {
    let Some(body) = non_blank(body) else {
        return Ok(response::error(400, EMPTY_BODY));
    };

    let user = User::from_json(body)?.with_generated_id();
    repo.save(&user).await?;

    tracing::info!(user_id = %user.id, "Created user");

    Ok(response::json(201, &user))
}

/// Update a user's name and email (PUT). The path id wins over any body id.
async fn update_user(
    repo: &dyn UserRepository,
    id: Option<&str>,
    body: Option<&str>,
) -> HandlerResult {
    let Some(id) = non_blank(id) else {
        return Ok(response::error(400, MISSING_ID));
    };
    let Some(body) = non_blank(body) else {
        return Ok(response::error(400, EMPTY_BODY));
    };

    let user = User::from_json(body)?.with_id(id);
    repo.update(&user).await?;

    tracing::info!(user_id = %id, "Updated user");

    Ok(response::success_message(UPDATED))
}

/// Delete a user (DELETE).
async fn delete_user(repo: &dyn UserRepository, id: Option<&str>) -> HandlerResult {
    let Some(id) = non_blank(id) else {
        return Ok(response::error(400, MISSING_ID));
    };

    repo.delete(id).await?;

    tracing::info!(user_id = %id, "Deleted user");

    Ok(response::success_message(DELETED))
}
