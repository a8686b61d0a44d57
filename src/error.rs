use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use crate::models::ErrorBody;

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Prompt is required")]
    MissingPrompt,

    #[error("API call failed: {body}")]
    Upstream { status: u16, body: String },

    #[error("The AI did not generate a response.")]
    EmptyResult,

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Upstream returned a null body")]
    NullResponse,
}

pub type GenerateResult<T> = Result<T, GenerateError>;

impl GenerateError {

    pub fn status(&self) -> StatusCode {

        match self {
            GenerateError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            GenerateError::MissingPrompt => StatusCode::BAD_REQUEST,
            GenerateError::Upstream { status, .. } => StatusCode::from_u16(*status)
                .unwrap_or(StatusCode::BAD_GATEWAY),
            GenerateError::EmptyResult
            | GenerateError::Request(_)
            | GenerateError::Decode(_)
            | GenerateError::NullResponse => StatusCode::INTERNAL_SERVER_ERROR,
        }

    }

}

impl IntoResponse for GenerateError {

    fn into_response(self) -> Response {

        // internal failures are logged here and masked for the caller
        let message = match &self {
            GenerateError::Request(_)
            | GenerateError::Decode(_)
            | GenerateError::NullResponse => {
                tracing::error!(error = %self, "Server-side error");
                "Internal Server Error".to_string()
            }
            _ => self.to_string()
        };

        (self.status(), Json(ErrorBody { error: message })).into_response()

    }

}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT must be a valid port number, got {0:?}")]
    InvalidPort(String),
}
