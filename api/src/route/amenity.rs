use axum::{
    routing::{delete, get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::amenity::{
    attach_amenity, delete_amenity, detach_amenity, list_amenities, list_place_amenities,
    register_amenity, show_amenity,
};

pub fn build_amenity_routers() -> Router<AppRegistry> {
    let amenity_routers = Router::new()
        .route("/", post(register_amenity))
        .route("/", get(list_amenities))
        .route("/:amenity_id", get(show_amenity))
        .route("/:amenity_id", delete(delete_amenity));

    let place_amenity_routers = Router::new()
        .route("/", get(list_place_amenities))
        .route("/:amenity_id", post(attach_amenity))
        .route("/:amenity_id", delete(detach_amenity));

    Router::new()
        .nest("/amenities", amenity_routers)
        .nest("/places/:place_id/amenities", place_amenity_routers)
}
