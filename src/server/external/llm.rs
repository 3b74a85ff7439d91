use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::server::error::{external::ExternalError, Error};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

const SYSTEM_PROMPT: &str = "You polish restaurant review text. Keep the \
reviewer's opinions and facts exactly as written, fix grammar and flow, and \
return only the improved review text.";

/// Client for the external language-model completion API.
///
/// Treated as best-effort everywhere: callers fall back to the original text
/// when a request fails.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

/// Structured review context included alongside the original text
pub struct ReviewContext<'a> {
    pub place_name: &'a str,
    pub category_label: &'a str,
    pub dish_name: Option<&'a str>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: String,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Deserialize)]
struct CompletionChoiceMessage {
    content: String,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: CompletionChoiceMessage,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

impl Client {
    pub fn new(base_url: &str, api_key: &str, model: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        })
    }

    /// Returns improved review prose for the original text
    pub async fn enhance_review(
        &self,
        original: &str,
        context: &ReviewContext<'_>,
    ) -> Result<String, Error> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        let mut user_prompt = format!(
            "Place: {} ({})\n",
            context.place_name, context.category_label
        );
        if let Some(dish_name) = context.dish_name {
            user_prompt.push_str(&format!("Dish: {}\n", dish_name));
        }
        user_prompt.push_str(&format!("Review:\n{}", original));

        let request = CompletionRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                Message {
                    role: "user",
                    content: user_prompt,
                },
            ],
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ExternalError::LlmUnavailable(e.to_string()))?
            .error_for_status()
            .map_err(|e| ExternalError::LlmUnavailable(e.to_string()))?;

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| ExternalError::UnexpectedResponse(e.to_string()))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                ExternalError::UnexpectedResponse("completion response had no choices".to_string())
            })?;

        Ok(content)
    }
}
