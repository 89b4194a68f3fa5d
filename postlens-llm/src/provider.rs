//! Provider resolution.
//!
//! Maps the configuration snapshot to a concrete endpoint, model id, and
//! provider dialect. Pure and deterministic: no side effects, no network,
//! recomputed fresh for every dispatch so credential rotation between calls
//! is observed correctly.

use crate::settings::LlmSettings;

// ============================================================================
// Constants
// ============================================================================

/// OpenAI chat-completions endpoint.
pub const OPENAI_CHAT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// OpenRouter chat-completions endpoint.
pub const OPENROUTER_CHAT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Model id used against OpenAI-dialect endpoints.
pub const OPENAI_DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Model id used against OpenRouter-dialect endpoints.
pub const OPENROUTER_DEFAULT_MODEL: &str = "openai/gpt-3.5-turbo";

/// Substring of an endpoint override that implies the OpenRouter dialect.
const OPENROUTER_URL_MARKER: &str = "openrouter";

/// Credential prefixes identifying OpenRouter keys. Checked before the
/// plain `sk-` prefix, which they share.
const OPENROUTER_KEY_PREFIXES: [&str; 2] = ["sk-or-v1", "sk-or-"];

/// Credential prefix identifying OpenAI keys.
const OPENAI_KEY_PREFIX: &str = "sk-";

/// Referer header sent to OpenRouter to identify the calling application.
const OPENROUTER_REFERER: &str = "https://github.com/postlens/postlens";

/// Title header sent to OpenRouter to identify the calling application.
const OPENROUTER_TITLE: &str = "PostLens";

// ============================================================================
// Provider Kind
// ============================================================================

/// Which remote chat-completion dialect (and header set) to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// Plain OpenAI-style endpoint.
    OpenAiCompatible,
    /// OpenRouter-style endpoint (namespaced model ids, identifying headers).
    OpenRouterCompatible,
    /// No usable credential; no dispatch possible.
    Unconfigured,
}

impl ProviderKind {
    /// Returns the display name for this kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::OpenAiCompatible => "OpenAI",
            Self::OpenRouterCompatible => "OpenRouter",
            Self::Unconfigured => "Unconfigured",
        }
    }

    /// Returns true if a dispatch can be attempted against this kind.
    pub fn is_configured(&self) -> bool {
        !matches!(self, Self::Unconfigured)
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Provider Config
// ============================================================================

/// Resolved provider configuration for one dispatch.
///
/// Derived fresh from the settings snapshot on every dispatch; never cached
/// in a global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Chat-completions endpoint URL, absent when unconfigured.
    pub endpoint_url: Option<String>,
    /// Model id to request, absent when unconfigured.
    pub model_id: Option<String>,
    /// The dialect in use.
    pub kind: ProviderKind,
    /// Extra request headers (name, value); non-empty only for OpenRouter.
    pub extra_headers: Vec<(String, String)>,
}

impl ProviderConfig {
    /// Config for an absent credential: nothing to dispatch against.
    fn unconfigured() -> Self {
        Self {
            endpoint_url: None,
            model_id: None,
            kind: ProviderKind::Unconfigured,
            extra_headers: Vec::new(),
        }
    }

    /// Config for an OpenAI-dialect endpoint.
    fn openai(url: impl Into<String>) -> Self {
        Self {
            endpoint_url: Some(url.into()),
            model_id: Some(OPENAI_DEFAULT_MODEL.to_string()),
            kind: ProviderKind::OpenAiCompatible,
            extra_headers: Vec::new(),
        }
    }

    /// Config for an OpenRouter-dialect endpoint, with identifying headers.
    fn openrouter(url: impl Into<String>) -> Self {
        Self {
            endpoint_url: Some(url.into()),
            model_id: Some(OPENROUTER_DEFAULT_MODEL.to_string()),
            kind: ProviderKind::OpenRouterCompatible,
            extra_headers: vec![
                ("HTTP-Referer".to_string(), OPENROUTER_REFERER.to_string()),
                ("X-Title".to_string(), OPENROUTER_TITLE.to_string()),
            ],
        }
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolves the settings snapshot to a provider configuration.
///
/// Resolution order:
/// 1. No credential anywhere: unconfigured.
/// 2. Explicit endpoint override (OpenRouter dialect when the URL contains
///    the marker substring), then the generic override.
/// 3. Auto-detection from the credential's textual prefix.
/// 4. OpenAI endpoint as the final default.
pub fn resolve(settings: &LlmSettings) -> ProviderConfig {
    let Some(credential) = settings.first_credential() else {
        return ProviderConfig::unconfigured();
    };

    if let Some(url) = &settings.endpoint_override {
        if url.contains(OPENROUTER_URL_MARKER) {
            return ProviderConfig::openrouter(url.clone());
        }
        return ProviderConfig::openai(url.clone());
    }

    if let Some(url) = &settings.openai_endpoint_override {
        return ProviderConfig::openai(url.clone());
    }

    if OPENROUTER_KEY_PREFIXES
        .iter()
        .any(|prefix| credential.starts_with(prefix))
    {
        return ProviderConfig::openrouter(OPENROUTER_CHAT_ENDPOINT);
    }

    if credential.starts_with(OPENAI_KEY_PREFIX) {
        return ProviderConfig::openai(OPENAI_CHAT_ENDPOINT);
    }

    ProviderConfig::openai(OPENAI_CHAT_ENDPOINT)
}

// ============================================================================
// Tests
// ============================================================================
