use axum::{
    Router,
    extract::State,
    routing::get,
};
use axum_helpers::{
    ApiResponse, ValidatedJson,
    errors::responses::{
        BadRequestIdentifierResponse, ConflictResponse, InternalServerErrorResponse,
        NotFoundResponse, UnprocessableEntityResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::identifier::UserIdPath;
use crate::models::{CreateUser, DeleteResult, UpdateUser, UserResponse};
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(list_users, create_user, get_user, update_user, delete_user),
    components(
        schemas(UserResponse, CreateUser, UpdateUser, DeleteResult),
        responses(
            BadRequestIdentifierResponse,
            UnprocessableEntityResponse,
            NotFoundResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Users", description = "User account management (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Create the users router with all HTTP endpoints
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
        .with_state(shared_service)
}

/// List all users
#[utoipa::path(
    get,
    path = "",
    tag = "Users",
    responses(
        (status = 200, description = "Every user, with `count`", body = ApiResponse<Vec<UserResponse>>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> UserResult<ApiResponse<Vec<UserResponse>>> {
    let users = service.list_users().await?;
    Ok(ApiResponse::list(
        format!("Found {} users", users.len()),
        users,
    ))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created successfully", body = ApiResponse<UserResponse>),
        (status = 409, response = ConflictResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> UserResult<ApiResponse<UserResponse>> {
    let user = service.create_user(input).await?;
    Ok(ApiResponse::created("User created successfully", user))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "24-character hex user ID")
    ),
    responses(
        (status = 200, description = "User retrieved successfully", body = ApiResponse<UserResponse>),
        (status = 400, response = BadRequestIdentifierResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    UserIdPath(id): UserIdPath,
) -> UserResult<ApiResponse<UserResponse>> {
    let user = service.get_user(&id).await?;
    Ok(ApiResponse::ok("User retrieved successfully", user))
}

/// Replace a user's name, email and password
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "24-character hex user ID")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated successfully", body = ApiResponse<UserResponse>),
        (status = 400, response = BadRequestIdentifierResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    UserIdPath(id): UserIdPath,
    ValidatedJson(input): ValidatedJson<UpdateUser>,
) -> UserResult<ApiResponse<UserResponse>> {
    let user = service.update_user(&id, input).await?;
    Ok(ApiResponse::ok("User updated successfully", user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "24-character hex user ID")
    ),
    responses(
        (status = 200, description = "User deleted successfully", body = ApiResponse<DeleteResult>),
        (status = 400, response = BadRequestIdentifierResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    UserIdPath(id): UserIdPath,
) -> UserResult<ApiResponse<DeleteResult>> {
    let result = service.delete_user(&id).await?;
    Ok(ApiResponse::ok("User deleted successfully", result))
}
