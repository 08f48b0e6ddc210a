use kernel::model::id::{PlaceId, StateId, UserId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub mod amenity;
pub mod booking;
pub mod city;
pub mod health;
pub mod place;
pub mod review;
pub mod state;
pub mod user;

// Path-scoped resources get their own existence check before anything
// deeper runs, so a missing parent 404s no matter what else is wrong
// with the request.

pub(crate) async fn ensure_place_exists(
    registry: &AppRegistry,
    place_id: PlaceId,
) -> AppResult<()> {
    if !registry.place_repository().exists(place_id).await? {
        return Err(AppError::EntityNotFound(format!(
            "place ({place_id}) was not found"
        )));
    }
    Ok(())
}

pub(crate) async fn ensure_user_exists(registry: &AppRegistry, user_id: UserId) -> AppResult<()> {
    if !registry.user_repository().exists(user_id).await? {
        return Err(AppError::EntityNotFound(format!(
            "user ({user_id}) was not found"
        )));
    }
    Ok(())
}

pub(crate) async fn ensure_state_exists(
    registry: &AppRegistry,
    state_id: StateId,
) -> AppResult<()> {
    if !registry.state_repository().exists(state_id).await? {
        return Err(AppError::EntityNotFound(format!(
            "state ({state_id}) was not found"
        )));
    }
    Ok(())
}
