use super::{ensure_place_exists, ensure_user_exists};
use crate::model::pagination::{ListQuery, PageResponse};
use crate::model::review::{CreateReviewRequest, ReviewResponse};
use crate::model::{CreatedResponse, OperationResponse};
use crate::validation::parse_path_id;
use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::StatusCode,
    Json,
};
use kernel::model::{
    id::{PlaceId, ReviewId, UserId},
    review::Review,
};
use registry::AppRegistry;
use serde_json::Value;
use shared::error::{AppError, AppResult};

pub async fn list_user_reviews(
    Path(user_id): Path<String>,
    Query(query): Query<ListQuery>,
    OriginalUri(uri): OriginalUri,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PageResponse<ReviewResponse>>> {
    let user_id: UserId = parse_path_id(&user_id, "user")?;
    ensure_user_exists(&registry, user_id).await?;

    let reviews = registry
        .review_repository()
        .find_by_user_id(user_id, query.to_page_options())
        .await?;

    let data = reviews.into_iter().map(ReviewResponse::from).collect();
    Ok(Json(PageResponse::new(data, uri.path(), &query)))
}

pub async fn review_user(
    Path(user_id): Path<String>,
    State(registry): State<AppRegistry>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<CreatedResponse<ReviewId>>)> {
    let user_id: UserId = parse_path_id(&user_id, "user")?;
    ensure_user_exists(&registry, user_id).await?;

    let req = CreateReviewRequest::parse(&body)?;
    ensure_user_exists(&registry, req.from_user_id).await?;

    let review_id = registry
        .review_repository()
        .create_for_user(req.into_event(), user_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(review_id, "Review saved successfully")),
    ))
}

pub async fn show_user_review(
    Path((user_id, review_id)): Path<(String, String)>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReviewResponse>> {
    let review = find_user_review(&registry, &user_id, &review_id).await?;
    Ok(Json(ReviewResponse::from(review)))
}

pub async fn delete_user_review(
    Path((user_id, review_id)): Path<(String, String)>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<OperationResponse>> {
    let review = find_user_review(&registry, &user_id, &review_id).await?;

    registry.review_repository().delete(review.id).await?;

    Ok(Json(OperationResponse::ok("Review was deleted successfully")))
}

pub async fn list_place_reviews(
    Path(place_id): Path<String>,
    Query(query): Query<ListQuery>,
    OriginalUri(uri): OriginalUri,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PageResponse<ReviewResponse>>> {
    let place_id: PlaceId = parse_path_id(&place_id, "place")?;
    ensure_place_exists(&registry, place_id).await?;

    let reviews = registry
        .review_repository()
        .find_by_place_id(place_id, query.to_page_options())
        .await?;

    let data = reviews.into_iter().map(ReviewResponse::from).collect();
    Ok(Json(PageResponse::new(data, uri.path(), &query)))
}

pub async fn review_place(
    Path(place_id): Path<String>,
    State(registry): State<AppRegistry>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<CreatedResponse<ReviewId>>)> {
    let place_id: PlaceId = parse_path_id(&place_id, "place")?;
    ensure_place_exists(&registry, place_id).await?;

    let req = CreateReviewRequest::parse(&body)?;
    ensure_user_exists(&registry, req.from_user_id).await?;

    let review_id = registry
        .review_repository()
        .create_for_place(req.into_event(), place_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(review_id, "Review saved successfully")),
    ))
}

pub async fn show_place_review(
    Path((place_id, review_id)): Path<(String, String)>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReviewResponse>> {
    let review = find_place_review(&registry, &place_id, &review_id).await?;
    Ok(Json(ReviewResponse::from(review)))
}

pub async fn delete_place_review(
    Path((place_id, review_id)): Path<(String, String)>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<OperationResponse>> {
    let review = find_place_review(&registry, &place_id, &review_id).await?;

    registry.review_repository().delete(review.id).await?;

    Ok(Json(OperationResponse::ok("Review was deleted successfully")))
}

async fn find_user_review(
    registry: &AppRegistry,
    user_id: &str,
    review_id: &str,
) -> AppResult<Review> {
    let user_id: UserId = parse_path_id(user_id, "user")?;
    let review_id: ReviewId = parse_path_id(review_id, "review")?;

    ensure_user_exists(registry, user_id).await?;

    registry
        .review_repository()
        .find_for_user(review_id, user_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound(format!("review ({review_id}) was not found")))
}

async fn find_place_review(
    registry: &AppRegistry,
    place_id: &str,
    review_id: &str,
) -> AppResult<Review> {
    let place_id: PlaceId = parse_path_id(place_id, "place")?;
    let review_id: ReviewId = parse_path_id(review_id, "review")?;

    ensure_place_exists(registry, place_id).await?;

    registry
        .review_repository()
        .find_for_place(review_id, place_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound(format!("review ({review_id}) was not found")))
}
