//! Inference Gateway
//!
//! Oracle boundary for quantities missing from the local table. The trait is
//! text-in/text-out: the resolver sends a quantity name and gets back the
//! provider's raw answer or a failure. Prompting, model selection, and
//! transport live behind the trait.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::Deserialize;

/// Default Groq model
const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Text-in/text-out oracle consulted when the local table misses.
///
/// Exactly one call per resolution miss; no retry or caching at this layer.
#[async_trait]
pub trait InferenceGateway: Send + Sync {
    /// Ask the oracle for the dimensional formula of `quantity`.
    ///
    /// Returns the provider's raw text. Callers must treat it as
    /// unverified; it may not even be a well-formed dimensional expression.
    async fn infer(&self, quantity: &str) -> Result<String>;

    /// Get the model name for logging
    fn model_name(&self) -> &str;

    /// Get the provider name for logging
    fn provider_name(&self) -> &str;
}

/// Groq API client (OpenAI-compatible chat completions)
#[derive(Clone)]
pub struct GroqClient {
    api_key: String,
    client: reqwest::Client,
    model: String,
}

impl GroqClient {
    /// Create a new Groq client with the given API key
    pub fn new(api_key: String) -> Self {
        let model = std::env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self {
            api_key,
            client: reqwest::Client::new(),
            model,
        }
    }

    /// Create with a specific model
    pub fn with_model(api_key: String, model: &str) -> Self {
        Self {
            api_key,
            client: reqwest::Client::new(),
            model: model.to_string(),
        }
    }

    /// Create from environment variables.
    ///
    /// A missing `GROQ_API_KEY` is an expected configuration state: callers
    /// should treat the error as "fallback disabled" and construct the
    /// resolver without a gateway, not crash.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GROQ_API_KEY")
            .map_err(|_| anyhow!("GROQ_API_KEY environment variable not set"))?;
        Ok(Self::new(api_key))
    }

    fn user_prompt(quantity: &str) -> String {
        format!(
            "Determine the dimensional formula for the physical quantity \"{}\". \
             Respond only with the dimensional expression in standard format \
             (e.g., MLT^-2 for Force).",
            quantity
        )
    }

    /// Internal API call implementation
    async fn call_api(&self, quantity: &str) -> Result<String> {
        let response = self
            .client
            .post(GROQ_API_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&serde_json::json!({
                "model": &self.model,
                "messages": [
                    {"role": "system", "content": "You are a physics expert."},
                    {"role": "user", "content": Self::user_prompt(quantity)}
                ],
                "temperature": 0.1
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("Groq API error {}: {}", status, body));
        }

        #[derive(Deserialize)]
        struct Message {
            content: String,
        }
        #[derive(Deserialize)]
        struct Choice {
            message: Message,
        }
        #[derive(Deserialize)]
        struct ApiResponse {
            choices: Vec<Choice>,
        }

        let api_response: ApiResponse = response.json().await?;
        api_response
            .choices
            .first()
            .map(|c| c.message.content.trim().to_string())
            .ok_or_else(|| anyhow!("Groq returned no choices"))
    }
}

#[async_trait]
impl InferenceGateway for GroqClient {
    async fn infer(&self, quantity: &str) -> Result<String> {
        tracing::debug!(model = %self.model, %quantity, "querying Groq for dimension");
        self.call_api(quantity).await
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    fn provider_name(&self) -> &str {
        "Groq"
    }
}
