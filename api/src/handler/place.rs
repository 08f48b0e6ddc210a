use super::{ensure_place_exists, ensure_user_exists};
use crate::model::pagination::{ListQuery, PageResponse};
use crate::model::place::{CreatePlaceRequest, PlaceResponse, UpdatePlaceRequest};
use crate::model::{CreatedResponse, OperationResponse};
use crate::validation::parse_path_id;
use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::StatusCode,
    Json,
};
use kernel::model::id::PlaceId;
use registry::AppRegistry;
use serde_json::Value;
use shared::error::{AppError, AppResult};

pub async fn list_places(
    Query(query): Query<ListQuery>,
    OriginalUri(uri): OriginalUri,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PageResponse<PlaceResponse>>> {
    let places = registry
        .place_repository()
        .find_all(query.to_page_options())
        .await?;

    let data = places.into_iter().map(PlaceResponse::from).collect();
    Ok(Json(PageResponse::new(data, uri.path(), &query)))
}

pub async fn register_place(
    State(registry): State<AppRegistry>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<CreatedResponse<PlaceId>>)> {
    let req = CreatePlaceRequest::parse(&body)?;

    if !registry.city_repository().exists(req.city_id).await? {
        return Err(AppError::EntityNotFound(format!(
            "city ({}) was not found",
            req.city_id
        )));
    }
    ensure_user_exists(&registry, req.owner_id).await?;

    let place_id = registry.place_repository().create(req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(
            place_id,
            "Place was created successfully",
        )),
    ))
}

pub async fn show_place(
    Path(place_id): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PlaceResponse>> {
    let place_id: PlaceId = parse_path_id(&place_id, "place")?;

    registry
        .place_repository()
        .find_by_id(place_id)
        .await
        .and_then(|place| match place {
            Some(place) => Ok(Json(place.into())),
            None => Err(AppError::EntityNotFound(format!(
                "place ({place_id}) was not found"
            ))),
        })
}

pub async fn update_place(
    Path(place_id): Path<String>,
    State(registry): State<AppRegistry>,
    Json(body): Json<Value>,
) -> AppResult<Json<OperationResponse>> {
    let place_id: PlaceId = parse_path_id(&place_id, "place")?;
    ensure_place_exists(&registry, place_id).await?;

    let req = UpdatePlaceRequest::parse(&body)?;
    registry
        .place_repository()
        .update(req.into_event(place_id))
        .await?;

    Ok(Json(OperationResponse::ok("Place was updated successfully")))
}

pub async fn delete_place(
    Path(place_id): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<OperationResponse>> {
    let place_id: PlaceId = parse_path_id(&place_id, "place")?;
    ensure_place_exists(&registry, place_id).await?;

    registry.place_repository().delete(place_id).await?;

    Ok(Json(OperationResponse::ok("Place was deleted successfully")))
}
