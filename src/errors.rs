use crate::db::errors::DbError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;
use utoipa::ToSchema;

#[derive(ThisError, Debug)]
pub enum Error {
    /// Invalid request data (malformed JSON body, shape mismatch)
    #[error("{message}")]
    BadRequest { message: String },

    /// Database operation error; its message is surfaced to the client verbatim
    #[error(transparent)]
    Database(#[from] DbError),

    /// Delete failure with the client-facing message fixed regardless of cause
    #[error("削除に失敗しました")]
    DeleteFailed { source: DbError },
}

/// JSON error body, `{"error": "..."}` on every failure path.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Error::Database(_) | Error::DeleteFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Log full error details for debugging - different log levels based on severity
        match &self {
            Error::Database(DbError::Other(_)) => {
                tracing::error!("Internal service error: {:#}", self);
            }
            Error::Database(_) => {
                tracing::warn!("Database constraint error: {}", self);
            }
            Error::DeleteFailed { source } => {
                tracing::warn!("Delete failed: {}", source);
            }
            Error::BadRequest { .. } => {
                tracing::debug!("Client error: {}", self);
            }
        }

        let status = self.status_code();
        let body = Json(ErrorResponse { error: self.to_string() });
        (status, body).into_response()
    }
}

/// Type alias for service operation results
pub type Result<T, E = Error> = std::result::Result<T, E>;
