use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use axum::body::Bytes;
use serde_json::Value;
use crate::config::Config;
use crate::error::{GenerateError, GenerateResult};
use crate::models::{GenerateContentRequest, has_candidates};

#[derive(Clone)]
pub struct GeminiClient {
    http_client: Client,
    api_key: String,
    api_base: String,
    model: String
}

impl GeminiClient {

    pub fn new(http_client: Client, config: &Config) -> Self {

        GeminiClient {
            http_client,
            api_key: config.api_key.clone(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            model: config.model.clone()
        }

    }

    fn generate_url(&self) -> String {

        format!(
            "{}/models/{}:generateContent?key={}",
            self.api_base, self.model, self.api_key
        )

    }

    // no timeout or retry on purpose, the call waits as long as the upstream does.
    // on success the raw upstream bytes are returned so key order survives
    pub async fn generate_content(&self, prompt: &str) -> GenerateResult<Bytes> {

        let payload = GenerateContentRequest::from_prompt(prompt);

        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "Sending request to Gemini API");

        let response = self.http_client
            .post(self.generate_url())
            .header(CONTENT_TYPE, "application/json")
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await?;
            tracing::error!(%status, %body, "Google AI API Error");
            return Err(GenerateError::Upstream { status: status.as_u16(), body });
        }

        let bytes = response.bytes().await?;
        let data: Value = serde_json::from_slice(&bytes)?;

        if data.is_null() {
            return Err(GenerateError::NullResponse);
        }

        // safety filters can suppress every candidate
        if !has_candidates(&data) {
            return Err(GenerateError::EmptyResult);
        }

        Ok(bytes)

    }

}
