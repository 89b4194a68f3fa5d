//! LLM configuration snapshot.
//!
//! All configuration enters through [`LlmSettings`], an explicit immutable
//! value constructed once per call (from the process environment, or
//! directly in tests) and passed into the resolver as a parameter. No other
//! module reads the environment, so tests never mutate process-wide state.

use std::env;

// ============================================================================
// Environment Variables
// ============================================================================

/// Primary credential variable.
pub const PRIMARY_CREDENTIAL_VAR: &str = "POSTLENS_API_KEY";

/// First generic credential fallback.
pub const OPENAI_CREDENTIAL_VAR: &str = "OPENAI_API_KEY";

/// Second generic credential fallback.
pub const OPENROUTER_CREDENTIAL_VAR: &str = "OPENROUTER_API_KEY";

/// Explicit endpoint override. A value containing `"openrouter"` implies
/// the OpenRouter dialect.
pub const ENDPOINT_OVERRIDE_VAR: &str = "POSTLENS_API_URL";

/// Explicit generic (OpenAI-dialect) endpoint override.
pub const OPENAI_ENDPOINT_OVERRIDE_VAR: &str = "OPENAI_API_URL";

// ============================================================================
// Credential Candidate
// ============================================================================

/// One named credential slot, present or absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialCandidate {
    /// The variable name this candidate was read from.
    pub name: String,
    /// The credential value, if set and non-empty.
    pub value: Option<String>,
}

impl CredentialCandidate {
    /// Creates a candidate.
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            // An empty string is as good as unset.
            value: value.filter(|v| !v.is_empty()),
        }
    }
}

// ============================================================================
// LLM Settings
// ============================================================================

/// Immutable configuration snapshot for one processing call.
///
/// Holds the priority-ordered credential candidates and the explicit
/// endpoint overrides. Each dispatch derives a fresh `ProviderConfig` from
/// this snapshot, so a snapshot taken at call time stays internally
/// consistent even if the environment changes mid-run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LlmSettings {
    /// Credential candidates in priority order.
    pub credentials: Vec<CredentialCandidate>,
    /// Explicit endpoint override (OpenRouter dialect when the value
    /// contains the OpenRouter marker).
    pub endpoint_override: Option<String>,
    /// Explicit generic endpoint override (always OpenAI dialect).
    pub openai_endpoint_override: Option<String>,
}

impl LlmSettings {
    /// Reads a snapshot from the process environment.
    ///
    /// This is the only place in the crate that touches environment
    /// variables.
    pub fn from_env() -> Self {
        Self {
            credentials: vec![
                CredentialCandidate::new(PRIMARY_CREDENTIAL_VAR, env_var(PRIMARY_CREDENTIAL_VAR)),
                CredentialCandidate::new(OPENAI_CREDENTIAL_VAR, env_var(OPENAI_CREDENTIAL_VAR)),
                CredentialCandidate::new(
                    OPENROUTER_CREDENTIAL_VAR,
                    env_var(OPENROUTER_CREDENTIAL_VAR),
                ),
            ],
            endpoint_override: env_var(ENDPOINT_OVERRIDE_VAR),
            openai_endpoint_override: env_var(OPENAI_ENDPOINT_OVERRIDE_VAR),
        }
    }

    /// Creates a snapshot with a single credential (test and embedding
    /// convenience).
    pub fn with_credential(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            credentials: vec![CredentialCandidate::new(name, Some(value.into()))],
            endpoint_override: None,
            openai_endpoint_override: None,
        }
    }

    /// Sets the endpoint override.
    pub fn endpoint_override(mut self, url: impl Into<String>) -> Self {
        self.endpoint_override = Some(url.into());
        self
    }

    /// Sets the generic endpoint override.
    pub fn openai_endpoint_override(mut self, url: impl Into<String>) -> Self {
        self.openai_endpoint_override = Some(url.into());
        self
    }

    /// Returns the first present credential, in priority order.
    pub fn first_credential(&self) -> Option<&str> {
        self.credentials
            .iter()
            .find_map(|candidate| candidate.value.as_deref())
    }

    /// Returns true if any credential is present.
    pub fn has_credential(&self) -> bool {
        self.first_credential().is_some()
    }
}

fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

// ============================================================================
// Tests
// ============================================================================
