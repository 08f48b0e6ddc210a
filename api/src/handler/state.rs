use super::ensure_state_exists;
use crate::model::pagination::{ListQuery, PageResponse};
use crate::model::state::{CreateStateRequest, StateResponse};
use crate::model::{CreatedResponse, OperationResponse};
use crate::validation::parse_path_id;
use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::StatusCode,
    Json,
};
use kernel::model::id::StateId;
use registry::AppRegistry;
use serde_json::Value;
use shared::error::{AppError, AppResult};

pub async fn list_states(
    Query(query): Query<ListQuery>,
    OriginalUri(uri): OriginalUri,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PageResponse<StateResponse>>> {
    let states = registry
        .state_repository()
        .find_all(query.to_page_options())
        .await?;

    let data = states.into_iter().map(StateResponse::from).collect();
    Ok(Json(PageResponse::new(data, uri.path(), &query)))
}

pub async fn register_state(
    State(registry): State<AppRegistry>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<CreatedResponse<StateId>>)> {
    let req = CreateStateRequest::parse(&body)?;

    let state_id = registry.state_repository().create(req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(
            state_id,
            "State was created successfully",
        )),
    ))
}

pub async fn show_state(
    Path(state_id): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<StateResponse>> {
    let state_id: StateId = parse_path_id(&state_id, "state")?;

    registry
        .state_repository()
        .find_by_id(state_id)
        .await
        .and_then(|state| match state {
            Some(state) => Ok(Json(state.into())),
            None => Err(AppError::EntityNotFound(format!(
                "state ({state_id}) was not found"
            ))),
        })
}

pub async fn delete_state(
    Path(state_id): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<OperationResponse>> {
    let state_id: StateId = parse_path_id(&state_id, "state")?;
    ensure_state_exists(&registry, state_id).await?;

    registry.state_repository().delete(state_id).await?;

    Ok(Json(OperationResponse::ok("State was deleted successfully")))
}
