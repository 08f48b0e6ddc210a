use axum::{
    routing::{delete, get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::review::{
    delete_place_review, delete_user_review, list_place_reviews, list_user_reviews, review_place,
    review_user, show_place_review, show_user_review,
};

pub fn build_review_routers() -> Router<AppRegistry> {
    let user_review_routers = Router::new()
        .route("/", post(review_user))
        .route("/", get(list_user_reviews))
        .route("/:review_id", get(show_user_review))
        .route("/:review_id", delete(delete_user_review));

    let place_review_routers = Router::new()
        .route("/", post(review_place))
        .route("/", get(list_place_reviews))
        .route("/:review_id", get(show_place_review))
        .route("/:review_id", delete(delete_place_review));

    Router::new()
        .nest("/users/:user_id/reviews", user_review_routers)
        .nest("/places/:place_id/reviews", place_review_routers)
}
