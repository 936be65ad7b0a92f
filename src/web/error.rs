use std::any::Any;

use axum::{Json, http::StatusCode, response::IntoResponse};
use thiserror::Error;

use crate::{
    error::log_error,
    model::{DatabaseError, ResourceType},
};

pub type WebResult<T> = std::result::Result<T, WebError>;

pub const COURSE_ID_REQUIRED: &str = "Course ID is required";
pub const COURSE_NOT_FOUND: &str = "Course not found or not available";
pub const COURSE_FETCH_FAILED: &str = "Failed to fetch course";
pub const COURSES_FETCH_FAILED: &str = "Failed to fetch courses";

/// Every way a course read can end other than success.
///
/// Validation and not-found are ordinary outcomes of a request; only
/// `Dependency` means the store (or the handler itself) misbehaved.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("ValidationError: {message}")]
    Validation { message: &'static str },

    #[error("ResourceNotFound: {resource_type:?}")]
    NotFound {
        resource_type: ResourceType,
        message: &'static str,
    },

    #[error("ResourceFetchError: {resource_type:?}. Error: {error}")]
    Dependency {
        resource_type: ResourceType,
        error: DatabaseError,
        fallback: &'static str,
    },
}

impl WebError {
    pub fn course_id_required() -> Self {
        Self::Validation {
            message: COURSE_ID_REQUIRED,
        }
    }

    pub fn course_not_found() -> Self {
        Self::NotFound {
            resource_type: ResourceType::Course,
            message: COURSE_NOT_FOUND,
        }
    }

    pub fn course_fetch_error(r#type: ResourceType, error: DatabaseError) -> Self {
        Self::Dependency {
            resource_type: r#type,
            error,
            fallback: COURSE_FETCH_FAILED,
        }
    }

    pub fn catalogue_fetch_error(error: DatabaseError) -> Self {
        Self::Dependency {
            resource_type: ResourceType::Course,
            error,
            fallback: COURSES_FETCH_FAILED,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Dependency { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the response envelope. Store failures surface their
    /// own text.
    pub fn client_display(&self) -> String {
        match self {
            Self::Validation { message } => String::from(*message),
            Self::NotFound { message, .. } => String::from(*message),
            Self::Dependency {
                error, fallback, ..
            } => {
                let text = error.to_string();
                if text.trim().is_empty() {
                    String::from(*fallback)
                } else {
                    text
                }
            }
        }
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    /// Human-readable message for the client
    pub message: String,
}

impl ErrorResponse {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> axum::response::Response {
        match &self {
            Self::Dependency { .. } => log_error(&self),
            _ => tracing::debug!("{}", self),
        }

        let status_code = self.status_code();
        let body = ErrorResponse::new(self.client_display());

        (status_code, Json(body)).into_response()
    }
}

/// Turns a panic inside a handler into the same 500 envelope a store failure
/// produces.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> axum::response::Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        String::from(COURSE_FETCH_FAILED)
    };

    tracing::error!("handler panicked: {}", message);

    let message = if message.trim().is_empty() {
        String::from(COURSE_FETCH_FAILED)
    } else {
        message
    };

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(message)),
    )
        .into_response()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn status_codes_test() {
        assert_eq!(WebError::course_id_required().status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(WebError::course_not_found().status_code(), StatusCode::NOT_FOUND);

        let err = WebError::course_fetch_error(
            ResourceType::Module,
            DatabaseError::SqlxError(sqlx::Error::PoolTimedOut),
        );
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn dependency_surfaces_store_text_test() {
        let err = WebError::course_fetch_error(
            ResourceType::Module,
            DatabaseError::SqlxError(sqlx::Error::Protocol("relation \"modules\" is gone".into())),
        );
        assert!(err.client_display().contains("relation \"modules\" is gone"));
    }

    async fn envelope_of(response: axum::response::Response) -> ErrorResponse {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn panic_payload_message_test() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = envelope_of(response).await;
        assert!(!body.success);
        assert_eq!(body.message, "boom");

        let response = panic_response(Box::new(String::from("formatted boom 7")));
        assert_eq!(envelope_of(response).await.message, "formatted boom 7");

        let response = panic_response(Box::new(42_u8));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(envelope_of(response).await.message, COURSE_FETCH_FAILED);
    }
}
