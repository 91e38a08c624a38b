use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Catalog unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Incomplete join: {0}")]
    IncompleteJoin(String),

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Chart history error: {0}")]
    ChartHistory(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::ChartHistory(e.to_string())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::UpstreamUnavailable(_) | AppError::IncompleteJoin(_) => StatusCode::BAD_GATEWAY,
            AppError::EmptyInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::ChartHistory(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match self {
            AppError::UpstreamUnavailable(ref msg) => {
                tracing::error!("Catalog unavailable: {}", msg);
                self.to_string()
            }
            AppError::IncompleteJoin(ref msg) => {
                tracing::error!("Upstream returned inconsistent data: {}", msg);
                self.to_string()
            }
            AppError::EmptyInput(msg) => msg,
            AppError::NotFound(msg) => msg,
            AppError::Validation(msg) => msg,
            AppError::ChartHistory(ref msg) => {
                tracing::error!("Chart history error: {}", msg);
                "Chart history error".to_string()
            }
            AppError::Internal(ref e) => {
                tracing::error!("Internal error: {:?}", e);
                "Internal server error".to_string()
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
