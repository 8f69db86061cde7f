//! Blocking client for the chat completions endpoint.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{API_KEY_ENV_VAR, ConnectorConfig};
use crate::error::ConnectorError;
use crate::types::{Function, Message, ResponseMessage};

/// Thin client for the OpenAI chat completions API.
///
/// Holds an immutable [`ConnectorConfig`] and a reusable blocking HTTP
/// client. Construction performs no network I/O; each
/// [`generate`](Connector::generate) call issues exactly one request.
/// The connector keeps no conversation state between calls and may be
/// shared across threads.
#[derive(Debug)]
pub struct Connector {
    client: reqwest::blocking::Client,
    config: ConnectorConfig,
    api_key: Option<String>,
    url_chat: String,
}

impl Connector {
    /// Creates a connector from the given configuration.
    ///
    /// When the config carries no API key, [`API_KEY_ENV_VAR`] is
    /// consulted. A key that resolves to nothing is not an error here; it
    /// only surfaces once [`generate`](Connector::generate) is invoked.
    ///
    /// # Errors
    /// [`ConnectorError::Configuration`] if the HTTP client cannot be built.
    pub fn new(config: ConnectorConfig) -> Result<Self, ConnectorError> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV_VAR).ok());

        let user_agent = format!("chatgpt-connector/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                ConnectorError::Configuration(format!("failed to build reqwest client: {e}"))
            })?;

        let url_chat = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));

        Ok(Self {
            client,
            config,
            api_key,
            url_chat,
        })
    }

    /// Performs one non-streaming chat completion request and returns the
    /// first choice's message unmodified.
    ///
    /// The configured model and sampling parameters are sent with every
    /// request. `functions` is forwarded verbatim when present; `None`
    /// leaves the field out of the request body entirely. The call blocks
    /// until the service responds or the transport fails; there is no
    /// retry and no local validation of `messages`.
    ///
    /// # Errors
    /// - [`ConnectorError::MissingApiKey`] if no key was resolvable
    /// - [`ConnectorError::Network`] for transport failures
    /// - [`ConnectorError::Api`] for any non-success status, rate limits
    ///   and authentication failures included
    /// - [`ConnectorError::Parse`] if the body cannot be decoded
    /// - [`ConnectorError::EmptyChoices`] if the response has no choices
    pub fn generate(
        &self,
        messages: &[Message],
        functions: Option<&[Function]>,
    ) -> Result<ResponseMessage, ConnectorError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ConnectorError::MissingApiKey(API_KEY_ENV_VAR))?;

        let body = ChatCompletionRequest {
            model: &self.config.model,
            messages,
            temperature: self.config.temperature,
            top_p: self.config.top_p,
            max_tokens: self.config.max_tokens,
            functions,
        };

        debug!(
            model = %self.config.model,
            message_count = messages.len(),
            has_functions = functions.is_some(),
            "POST {}", self.url_chat
        );

        let res = self
            .client
            .post(&self.url_chat)
            .bearer_auth(api_key)
            .json(&body)
            .send()?;

        let status = res.status();
        if !status.is_success() {
            let message = res.text().unwrap_or_else(|_| "unknown error".to_string());
            return Err(ConnectorError::Api {
                status_code: status.as_u16(),
                message,
            });
        }

        let text = res.text().map_err(|e| ConnectorError::Parse {
            message: "failed to read response body".to_string(),
            source: Box::new(e),
        })?;

        let response: ChatCompletionResponse =
            serde_json::from_str(&text).map_err(|e| ConnectorError::Parse {
                message: "failed to decode chat completion response".to_string(),
                source: Box::new(e),
            })?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or(ConnectorError::EmptyChoices)?;

        debug!(status = %status, "chat completion succeeded");
        Ok(choice.message)
    }
}

/// Request body for `/chat/completions` (non-streaming).
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    functions: Option<&'a [Function]>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}
