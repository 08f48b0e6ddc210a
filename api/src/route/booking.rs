use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::booking::{
    book_place, delete_booking, list_place_bookings, show_booking, update_booking,
};

pub fn build_booking_routers() -> Router<AppRegistry> {
    let booking_routers = Router::new()
        .route("/", get(list_place_bookings))
        .route("/", post(book_place))
        .route("/:book_id", get(show_booking))
        .route("/:book_id", put(update_booking))
        .route("/:book_id", delete(delete_booking));

    Router::new().nest("/places/:place_id/books", booking_routers)
}
