//! Chat-completion dispatch.
//!
//! Builds and sends one chat-completion POST per call and classifies
//! failures into the [`DispatchError`] taxonomy. The provider configuration
//! is re-derived from the settings snapshot on every call.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::error::DispatchError;
use crate::provider::{self, ProviderConfig};
use crate::settings::LlmSettings;

// ============================================================================
// Constants
// ============================================================================

/// Sampling temperature for all insight tasks.
pub const TEMPERATURE: f64 = 0.7;

/// Completion token cap, kept low for cost efficiency.
pub const MAX_TOKENS: u32 = 300;

/// Transport-level request timeout. The orchestration layer itself imposes
/// no deadline; this only bounds a hung socket.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Error-message fragments that mark a rejected credential.
const INVALID_CREDENTIAL_MARKERS: [&str; 4] = [
    "Incorrect API key",
    "invalid_api_key",
    "Unauthorized",
    "User not found",
];

/// Error-message fragment that marks an exhausted balance.
const QUOTA_MARKER: &str = "credits";

// ============================================================================
// Wire Types
// ============================================================================

/// Chat message role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instruction framing for the model.
    System,
    /// The actual task prompt.
    User,
}

/// One chat message in the request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role.
    pub role: Role,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Request body for the chat-completions endpoint.
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f64,
    max_tokens: u32,
}

/// Success response body. Every field is lenient: any structurally absent
/// piece yields empty content rather than an error.
#[derive(Debug, Default, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Default, Deserialize)]
struct CompletionChoice {
    #[serde(default)]
    message: ChoiceMessage,
}

#[derive(Debug, Default, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: String,
}

impl CompletionResponse {
    /// The first choice's message content, or empty string.
    fn into_text(mut self) -> String {
        if self.choices.is_empty() {
            return String::new();
        }
        self.choices.swap_remove(0).message.content
    }
}

/// Error body shape shared by OpenAI-dialect providers.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

// ============================================================================
// Failure Classification
// ============================================================================

/// Pulls the provider's error message out of a failure body, if present.
fn extract_error_message(body: &str) -> Option<String> {
    let parsed: ErrorResponse = serde_json::from_str(body).ok()?;
    parsed.error?.message
}

/// Classifies a non-success HTTP response into the dispatch taxonomy.
///
/// Pure function of status and body, so classification is testable without
/// a live endpoint.
pub fn classify_failure(status: u16, body: &str) -> DispatchError {
    let message = extract_error_message(body).unwrap_or_else(|| {
        if body.is_empty() {
            format!("HTTP {status}")
        } else {
            body.to_string()
        }
    });

    if status == 401
        || INVALID_CREDENTIAL_MARKERS
            .iter()
            .any(|marker| message.contains(marker))
    {
        return DispatchError::InvalidCredential;
    }

    if status == 402 || message.contains(QUOTA_MARKER) {
        return DispatchError::InsufficientQuota;
    }

    DispatchError::Upstream(message)
}

// ============================================================================
// Completion Backend
// ============================================================================

/// A backend that can run one chat completion.
///
/// The orchestrator only talks to this trait, so tests substitute scripted
/// implementations without any network.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Runs one completion and returns the raw generated text.
    async fn complete(
        &self,
        prompt: &str,
        system_prompt: Option<&str>,
    ) -> Result<String, DispatchError>;
}

// ============================================================================
// Dispatch Policy
// ============================================================================

/// Attempt policy for upstream failures.
///
/// Defaults to a single attempt with no backoff, matching the observed
/// behavior of the system. Credential and quota failures are deterministic
/// and never retried regardless of this policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchPolicy {
    /// Maximum attempts per dispatch (>= 1).
    pub max_attempts: u32,
}

impl DispatchPolicy {
    /// Single-attempt policy.
    pub fn single_attempt() -> Self {
        Self { max_attempts: 1 }
    }

    /// Policy with bounded retries for upstream failures.
    pub fn with_max_attempts(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }
}

impl Default for DispatchPolicy {
    fn default() -> Self {
        Self::single_attempt()
    }
}

// ============================================================================
// HTTP Backend
// ============================================================================

/// The real HTTP-backed completion backend.
///
/// Holds the settings snapshot for the current call; each `complete`
/// invocation re-resolves the provider configuration from that snapshot and
/// carries its own request/response buffers, so concurrent dispatches share
/// no mutable state.
#[derive(Debug, Clone)]
pub struct HttpCompletionBackend {
    http: reqwest::Client,
    settings: LlmSettings,
    policy: DispatchPolicy,
}

impl HttpCompletionBackend {
    /// Creates a backend over the given settings snapshot.
    pub fn new(settings: LlmSettings) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("postlens/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            settings,
            policy: DispatchPolicy::default(),
        }
    }

    /// Sets the attempt policy.
    pub fn with_policy(mut self, policy: DispatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The settings snapshot this backend dispatches with.
    pub fn settings(&self) -> &LlmSettings {
        &self.settings
    }

    /// Runs a single attempt against the resolved endpoint.
    async fn dispatch_once(
        &self,
        config: &ProviderConfig,
        credential: &str,
        messages: &[ChatMessage],
    ) -> Result<String, DispatchError> {
        let Some(endpoint) = config.endpoint_url.as_deref() else {
            return Err(DispatchError::Upstream("endpoint not configured".to_string()));
        };
        let Some(model) = config.model_id.as_deref() else {
            return Err(DispatchError::Upstream("model not configured".to_string()));
        };

        let body = CompletionRequest {
            model,
            messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let mut request = self
            .http
            .post(endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {credential}"),
            );
        for (name, value) in &config.extra_headers {
            request = request.header(name.as_str(), value.as_str());
        }

        debug!(endpoint, model, provider = %config.kind, "Dispatching completion request");

        let response = request.json(&body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(classify_failure(status.as_u16(), &text));
        }

        let text = response.text().await?;
        let parsed: CompletionResponse = serde_json::from_str(&text).unwrap_or_else(|e| {
            debug!(error = %e, "Completion body had no recognizable shape");
            CompletionResponse::default()
        });

        Ok(parsed.into_text())
    }
}

#[async_trait]
impl CompletionBackend for HttpCompletionBackend {
    #[instrument(skip(self, prompt, system_prompt))]
    async fn complete(
        &self,
        prompt: &str,
        system_prompt: Option<&str>,
    ) -> Result<String, DispatchError> {
        // Fresh resolution per dispatch: a snapshot swap between calls is
        // observed, and each dispatch stays internally consistent.
        let config = provider::resolve(&self.settings);

        let Some(credential) = self.settings.first_credential() else {
            return Err(DispatchError::MissingCredential);
        };
        if !config.kind.is_configured() {
            return Err(DispatchError::MissingCredential);
        }

        let mut messages = Vec::with_capacity(2);
        if let Some(system) = system_prompt {
            messages.push(ChatMessage::system(system));
        }
        messages.push(ChatMessage::user(prompt));

        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.dispatch_once(&config, credential, &messages).await {
                Ok(text) => return Ok(text),
                // Only upstream faults are worth another attempt; credential
                // and quota rejections are deterministic.
                Err(DispatchError::Upstream(message)) if attempt < self.policy.max_attempts => {
                    warn!(attempt, error = %message, "Upstream failure, retrying");
                }
                Err(error) => return Err(error),
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
