//! Users API handlers.
//!
//! ```text
//! POST   /api/user        {"name":"alice"}
//! GET    /api/user/{id}
//! POST   /api/user/{id}   {"name":"alice2"}
//! DELETE /api/user/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::ports::UserServiceError;
use crate::domain::{Error, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_user_id, require_name};

/// Request body for creating or renaming a user.
///
/// Example JSON:
/// `{"name":"alice"}`
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct UserRequest {
    #[schema(example = "alice")]
    pub name: String,
}

/// Translate service failures into the HTTP error envelope.
///
/// Absence becomes 404. Every other variant is already generic, so its
/// message is forwarded unchanged as a 500.
pub(crate) fn map_user_service_error(err: UserServiceError) -> Error {
    if err.is_not_found() {
        return Error::not_found("user not found");
    }
    let message = err.to_string();
    match err {
        UserServiceError::Create { id } => Error::internal(message).with_details(json!({ "id": id })),
        _ => Error::internal(message),
    }
}

/// Create a user with a freshly generated identifier.
#[utoipa::path(
    post,
    path = "/api/user",
    request_body = UserRequest,
    responses(
        (status = 200, description = "User created", body = User),
        (status = 400, description = "Invalid request", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/user")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserRequest>,
) -> ApiResult<web::Json<User>> {
    let name = require_name(payload.into_inner().name)?;
    let id = state
        .users
        .create_user(&name)
        .await
        .map_err(map_user_service_error)?;
    Ok(web::Json(User::new(id, name)))
}

/// Fetch a user by identifier.
#[utoipa::path(
    get,
    path = "/api/user/{id}",
    params(("id" = String, Path, description = "User identifier (UUID)")),
    responses(
        (status = 200, description = "User", body = User),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 404, description = "User not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/user/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(&path)?;
    let name = state
        .users
        .get_user(&id)
        .await
        .map_err(map_user_service_error)?;
    Ok(web::Json(User::new(id, name)))
}

/// Rename an existing user.
#[utoipa::path(
    post,
    path = "/api/user/{id}",
    params(("id" = String, Path, description = "User identifier (UUID)")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "User not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[post("/user/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UserRequest>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(&path)?;
    let name = require_name(payload.into_inner().name)?;
    state
        .users
        .update_user(&id, &name)
        .await
        .map_err(map_user_service_error)?;
    Ok(web::Json(User::new(id, name)))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/api/user/{id}",
    params(("id" = String, Path, description = "User identifier (UUID)")),
    responses(
        (status = 200, description = "User deleted"),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 404, description = "User not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/user/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(&path)?;
    state
        .users
        .delete_user(&id)
        .await
        .map_err(map_user_service_error)?;
    Ok(HttpResponse::Ok().finish())
}

#[cfg(test)]
mod tests;
