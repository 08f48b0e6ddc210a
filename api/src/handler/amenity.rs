use super::ensure_place_exists;
use crate::model::amenity::{AmenityResponse, CreateAmenityRequest};
use crate::model::pagination::{ListQuery, PageResponse};
use crate::model::{CreatedResponse, OperationResponse};
use crate::validation::parse_path_id;
use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::StatusCode,
    Json,
};
use kernel::model::id::{AmenityId, PlaceId};
use registry::AppRegistry;
use serde_json::Value;
use shared::error::{AppError, AppResult};

pub async fn list_amenities(
    Query(query): Query<ListQuery>,
    OriginalUri(uri): OriginalUri,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PageResponse<AmenityResponse>>> {
    let amenities = registry
        .amenity_repository()
        .find_all(query.to_page_options())
        .await?;

    let data = amenities.into_iter().map(AmenityResponse::from).collect();
    Ok(Json(PageResponse::new(data, uri.path(), &query)))
}

pub async fn register_amenity(
    State(registry): State<AppRegistry>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<CreatedResponse<AmenityId>>)> {
    let req = CreateAmenityRequest::parse(&body)?;

    let amenity_id = registry.amenity_repository().create(req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(
            amenity_id,
            "Amenity was created successfully",
        )),
    ))
}

pub async fn show_amenity(
    Path(amenity_id): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<AmenityResponse>> {
    let amenity_id: AmenityId = parse_path_id(&amenity_id, "amenity")?;

    registry
        .amenity_repository()
        .find_by_id(amenity_id)
        .await
        .and_then(|amenity| match amenity {
            Some(amenity) => Ok(Json(amenity.into())),
            None => Err(AppError::EntityNotFound(format!(
                "amenity ({amenity_id}) was not found"
            ))),
        })
}

pub async fn delete_amenity(
    Path(amenity_id): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<OperationResponse>> {
    let amenity_id: AmenityId = parse_path_id(&amenity_id, "amenity")?;
    ensure_amenity_exists(&registry, amenity_id).await?;

    registry.amenity_repository().delete(amenity_id).await?;

    Ok(Json(OperationResponse::ok(
        "Amenity was deleted successfully",
    )))
}

pub async fn list_place_amenities(
    Path(place_id): Path<String>,
    Query(query): Query<ListQuery>,
    OriginalUri(uri): OriginalUri,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PageResponse<AmenityResponse>>> {
    let place_id: PlaceId = parse_path_id(&place_id, "place")?;
    ensure_place_exists(&registry, place_id).await?;

    let amenities = registry
        .amenity_repository()
        .find_by_place_id(place_id, query.to_page_options())
        .await?;

    let data = amenities.into_iter().map(AmenityResponse::from).collect();
    Ok(Json(PageResponse::new(data, uri.path(), &query)))
}

pub async fn attach_amenity(
    Path((place_id, amenity_id)): Path<(String, String)>,
    State(registry): State<AppRegistry>,
) -> AppResult<(StatusCode, Json<OperationResponse>)> {
    let place_id: PlaceId = parse_path_id(&place_id, "place")?;
    let amenity_id: AmenityId = parse_path_id(&amenity_id, "amenity")?;

    ensure_place_exists(&registry, place_id).await?;
    ensure_amenity_exists(&registry, amenity_id).await?;

    registry
        .amenity_repository()
        .attach_to_place(place_id, amenity_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(OperationResponse::new(
            201,
            "Amenity was added to the place successfully",
        )),
    ))
}

pub async fn detach_amenity(
    Path((place_id, amenity_id)): Path<(String, String)>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<OperationResponse>> {
    let place_id: PlaceId = parse_path_id(&place_id, "place")?;
    let amenity_id: AmenityId = parse_path_id(&amenity_id, "amenity")?;

    ensure_place_exists(&registry, place_id).await?;
    ensure_amenity_exists(&registry, amenity_id).await?;

    registry
        .amenity_repository()
        .detach_from_place(place_id, amenity_id)
        .await?;

    Ok(Json(OperationResponse::ok(
        "Amenity was removed from the place successfully",
    )))
}

async fn ensure_amenity_exists(registry: &AppRegistry, amenity_id: AmenityId) -> AppResult<()> {
    if !registry.amenity_repository().exists(amenity_id).await? {
        return Err(AppError::EntityNotFound(format!(
            "amenity ({amenity_id}) was not found"
        )));
    }
    Ok(())
}
