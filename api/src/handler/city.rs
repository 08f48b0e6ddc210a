use super::ensure_state_exists;
use crate::model::city::{CityResponse, CreateCityRequest};
use crate::model::pagination::{ListQuery, PageResponse};
use crate::model::{CreatedResponse, OperationResponse};
use crate::validation::parse_path_id;
use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::StatusCode,
    Json,
};
use kernel::model::{
    city::City,
    id::{CityId, StateId},
};
use registry::AppRegistry;
use serde_json::Value;
use shared::error::{AppError, AppResult};

pub async fn list_state_cities(
    Path(state_id): Path<String>,
    Query(query): Query<ListQuery>,
    OriginalUri(uri): OriginalUri,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PageResponse<CityResponse>>> {
    let state_id: StateId = parse_path_id(&state_id, "state")?;
    ensure_state_exists(&registry, state_id).await?;

    let cities = registry
        .city_repository()
        .find_by_state_id(state_id, query.to_page_options())
        .await?;

    let data = cities.into_iter().map(CityResponse::from).collect();
    Ok(Json(PageResponse::new(data, uri.path(), &query)))
}

pub async fn register_city(
    Path(state_id): Path<String>,
    State(registry): State<AppRegistry>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<CreatedResponse<CityId>>)> {
    let state_id: StateId = parse_path_id(&state_id, "state")?;
    ensure_state_exists(&registry, state_id).await?;

    let req = CreateCityRequest::parse(&body)?;
    let city_id = registry
        .city_repository()
        .create(req.into_event(state_id))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(city_id, "City was created successfully")),
    ))
}

pub async fn show_city(
    Path((state_id, city_id)): Path<(String, String)>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<CityResponse>> {
    let city = find_scoped_city(&registry, &state_id, &city_id).await?;
    Ok(Json(CityResponse::from(city)))
}

pub async fn delete_city(
    Path((state_id, city_id)): Path<(String, String)>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<OperationResponse>> {
    let city = find_scoped_city(&registry, &state_id, &city_id).await?;

    registry.city_repository().delete(city.id).await?;

    Ok(Json(OperationResponse::ok("City was deleted successfully")))
}

/// State, city, and the city-in-state pairing each 404 independently.
async fn find_scoped_city(
    registry: &AppRegistry,
    state_id: &str,
    city_id: &str,
) -> AppResult<City> {
    let state_id: StateId = parse_path_id(state_id, "state")?;
    let city_id: CityId = parse_path_id(city_id, "city")?;

    ensure_state_exists(registry, state_id).await?;

    if !registry.city_repository().exists(city_id).await? {
        return Err(AppError::EntityNotFound(format!(
            "city ({city_id}) was not found"
        )));
    }

    let city = registry
        .city_repository()
        .find_by_id(city_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound(format!("city ({city_id}) was not found")))?;

    if city.state_id != state_id {
        return Err(AppError::EntityNotFound(format!(
            "city ({city_id}) does not belong to state ({state_id})"
        )));
    }

    Ok(city)
}
