use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::Method;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use crate::AppState;
use crate::error::{GenerateError, GenerateResult};
use crate::models::PromptRequest;

pub async fn health_check() -> &'static str {

    "OK"

}

pub async fn generate_handler(
    State(state): State<AppState>,
    method: Method,
    body: Result<Bytes, BytesRejection>
) -> GenerateResult<Response> {

    if method != Method::POST {
        return Err(GenerateError::MethodNotAllowed);
    }

    // an unreadable or oversized body, or anything that is not an object
    // with a usable prompt, counts as missing
    let request: Option<PromptRequest> = body
        .ok()
        .and_then(|bytes| serde_json::from_slice(&bytes).ok());
    let prompt = request
        .as_ref()
        .and_then(PromptRequest::prompt_text)
        .ok_or(GenerateError::MissingPrompt)?;

    let data = state.gemini_client.generate_content(prompt).await?;

    Ok(([(CONTENT_TYPE, "application/json")], data).into_response())

}
