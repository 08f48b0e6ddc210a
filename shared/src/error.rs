use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub type AppResult<T> = Result<T, AppError>;

/// Application-wide failure taxonomy.
///
/// Client-caused failures carry the application-level code that goes into
/// the JSON body alongside the HTTP status; database failures keep their
/// source for logging and surface as a bare 500.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("'{0}' is missing")]
    MissingField(&'static str),
    #[error("{0}")]
    InvalidField(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    ImmutableField(&'static str),
    #[error("Place unavailable at this date")]
    PlaceUnavailable,
    #[error("{msg}")]
    AlreadyExists { code: u32, msg: &'static str },
    #[error("failed to run the transaction")]
    TransactionError(#[source] sqlx::Error),
    #[error("failed to run a database query")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("{0}")]
    NoRowsAffectedError(String),
}

impl AppError {
    fn app_code(&self) -> Option<u32> {
        match self {
            AppError::MissingField(_) => Some(40000),
            AppError::InvalidField(_) => Some(400),
            AppError::ImmutableField(_) => Some(403),
            AppError::PlaceUnavailable => Some(110_000),
            AppError::AlreadyExists { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MissingField(_) | AppError::InvalidField(_) => StatusCode::BAD_REQUEST,
            AppError::ImmutableField(_) => StatusCode::FORBIDDEN,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::PlaceUnavailable => StatusCode::GONE,
            AppError::AlreadyExists { .. } => StatusCode::CONFLICT,
            AppError::TransactionError(_)
            | AppError::SpecificOperationError(_)
            | AppError::NoRowsAffectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(
                error.cause_chain = ?self,
                error.message = %self,
                "unexpected error happened"
            );
            return status.into_response();
        }

        match self.app_code() {
            // 404s carry no body detail beyond the status.
            None => status.into_response(),
            Some(code) => (
                status,
                Json(json!({ "code": code, "msg": self.to_string() })),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(res: Response) -> Value {
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn missing_field_maps_to_400_with_distinguished_code() {
        let res = AppError::MissingField("date_start").into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = body_json(res).await;
        assert_eq!(body["code"], 40000);
        assert_eq!(body["msg"], "'date_start' is missing");
    }

    #[tokio::test]
    async fn invalid_field_maps_to_400_naming_the_field() {
        let res = AppError::InvalidField("user_id is not an integer".into()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = body_json(res).await;
        assert_eq!(body["code"], 400);
        assert_eq!(body["msg"], "user_id is not an integer");
    }

    #[tokio::test]
    async fn immutable_field_maps_to_403() {
        let res = AppError::ImmutableField("User cannot be changed").into_response();
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
        let body = body_json(res).await;
        assert_eq!(body["code"], 403);
        assert_eq!(body["msg"], "User cannot be changed");
    }

    #[tokio::test]
    async fn unavailable_date_maps_to_410_with_conflict_code() {
        let res = AppError::PlaceUnavailable.into_response();
        assert_eq!(res.status(), StatusCode::GONE);
        let body = body_json(res).await;
        assert_eq!(body["code"], 110_000);
        assert_eq!(body["msg"], "Place unavailable at this date");
    }

    #[tokio::test]
    async fn not_found_has_no_json_body() {
        let res = AppError::EntityNotFound("place not found".into()).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn duplicate_email_maps_to_409() {
        let res = AppError::AlreadyExists {
            code: 10000,
            msg: "Email already exists",
        }
        .into_response();
        assert_eq!(res.status(), StatusCode::CONFLICT);
        let body = body_json(res).await;
        assert_eq!(body["code"], 10000);
    }
}
