//! Providers command - show current provider resolution.

use anyhow::Result;
use serde_json::json;

use postlens_llm::{resolve, LlmSettings};

use crate::{Cli, OutputFormat};

/// Runs the providers command.
pub fn run(cli: &Cli) -> Result<()> {
    let settings = LlmSettings::from_env();
    let config = resolve(&settings);

    let credential_source = settings
        .credentials
        .iter()
        .find(|candidate| candidate.value.is_some());

    match cli.format {
        OutputFormat::Text => {
            println!("Provider:  {}", config.kind);
            println!(
                "Endpoint:  {}",
                config.endpoint_url.as_deref().unwrap_or("(none)")
            );
            println!(
                "Model:     {}",
                config.model_id.as_deref().unwrap_or("(none)")
            );
            match credential_source {
                Some(candidate) => println!(
                    "Credential: {} ({})",
                    mask(candidate.value.as_deref().unwrap_or_default()),
                    candidate.name
                ),
                None => println!("Credential: (none - local analyzer will answer)"),
            }
            if !config.extra_headers.is_empty() {
                let names: Vec<&str> = config
                    .extra_headers
                    .iter()
                    .map(|(name, _)| name.as_str())
                    .collect();
                println!("Headers:   {}", names.join(", "));
            }
        }
        OutputFormat::Json => {
            let value = json!({
                "provider": config.kind.display_name(),
                "endpoint": config.endpoint_url,
                "model": config.model_id,
                "credentialSource": credential_source.map(|c| c.name.clone()),
                "extraHeaders": config
                    .extra_headers
                    .iter()
                    .map(|(name, _)| name.clone())
                    .collect::<Vec<_>>(),
            });
            let rendered = if cli.pretty {
                serde_json::to_string_pretty(&value)?
            } else {
                serde_json::to_string(&value)?
            };
            println!("{rendered}");
        }
    }

    Ok(())
}

/// Shows only the first few characters of a credential.
fn mask(credential: &str) -> String {
    const VISIBLE: usize = 10;
    if credential.chars().count() <= VISIBLE {
        "*".repeat(credential.chars().count())
    } else {
        let prefix: String = credential.chars().take(VISIBLE).collect();
        format!("{prefix}...")
    }
}
