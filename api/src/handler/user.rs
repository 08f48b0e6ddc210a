use super::ensure_user_exists;
use crate::model::pagination::{ListQuery, PageResponse};
use crate::model::user::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::model::{CreatedResponse, OperationResponse};
use crate::validation::parse_path_id;
use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::StatusCode,
    Json,
};
use kernel::model::id::UserId;
use registry::AppRegistry;
use serde_json::Value;
use shared::error::{AppError, AppResult};

pub async fn list_users(
    Query(query): Query<ListQuery>,
    OriginalUri(uri): OriginalUri,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PageResponse<UserResponse>>> {
    let users = registry
        .user_repository()
        .find_all(query.to_page_options())
        .await?;

    let data = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(PageResponse::new(data, uri.path(), &query)))
}

pub async fn register_user(
    State(registry): State<AppRegistry>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<CreatedResponse<UserId>>)> {
    let req = CreateUserRequest::parse(&body)?;

    let user_id = registry.user_repository().create(req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(user_id, "User was created successfully")),
    ))
}

pub async fn show_user(
    Path(user_id): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UserResponse>> {
    let user_id: UserId = parse_path_id(&user_id, "user")?;

    registry
        .user_repository()
        .find_by_id(user_id)
        .await
        .and_then(|user| match user {
            Some(user) => Ok(Json(user.into())),
            None => Err(AppError::EntityNotFound(format!(
                "user ({user_id}) was not found"
            ))),
        })
}

pub async fn update_user(
    Path(user_id): Path<String>,
    State(registry): State<AppRegistry>,
    Json(body): Json<Value>,
) -> AppResult<Json<OperationResponse>> {
    let user_id: UserId = parse_path_id(&user_id, "user")?;
    ensure_user_exists(&registry, user_id).await?;

    let req = UpdateUserRequest::parse(&body)?;
    registry
        .user_repository()
        .update(req.into_event(user_id))
        .await?;

    Ok(Json(OperationResponse::ok("User was updated successfully")))
}

pub async fn delete_user(
    Path(user_id): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<OperationResponse>> {
    let user_id: UserId = parse_path_id(&user_id, "user")?;
    ensure_user_exists(&registry, user_id).await?;

    registry.user_repository().delete(user_id).await?;

    Ok(Json(OperationResponse::ok("User account was deleted")))
}
