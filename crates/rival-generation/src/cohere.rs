//! Cohere `/generate` client.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use rival_core::config::defaults;
use rival_core::errors::{GenerationError, RivalResult};
use rival_core::traits::IGenerator;

/// Blocking completion client with a fixed request timeout.
pub struct CohereGenerator {
    client: Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl CohereGenerator {
    pub fn new(api_base: &str, api_key: &str, model: &str) -> RivalResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(defaults::DEFAULT_HTTP_TIMEOUT_SECS))
            .build()
            .map_err(completion_failed)?;
        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        })
    }
}

impl IGenerator for CohereGenerator {
    fn complete(&self, prompt: &str, max_tokens: usize, temperature: f64) -> RivalResult<String> {
        #[derive(Deserialize)]
        struct Generation {
            text: String,
        }
        #[derive(Deserialize)]
        struct GenerateResponse {
            generations: Vec<Generation>,
        }

        let body = json!({
            "model": self.model,
            "prompt": prompt,
            "max_tokens": max_tokens,
            "temperature": temperature,
        });

        let response = self
            .client
            .post(format!("{}/generate", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(completion_failed)?;

        let parsed: GenerateResponse = response.json().map_err(completion_failed)?;
        let text = parsed
            .generations
            .into_iter()
            .next()
            .map(|g| g.text)
            .ok_or(GenerationError::EmptyResponse)?;

        debug!(model = %self.model, chars = text.chars().count(), "completion received");
        Ok(text)
    }

    fn name(&self) -> &str {
        &self.model
    }
}

fn completion_failed(e: reqwest::Error) -> GenerationError {
    GenerationError::CompletionFailed {
        reason: e.to_string(),
    }
}
