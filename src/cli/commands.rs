//! CLI command implementations

use anyhow::{Context, Result};
use copygen_engine::{
    CATALOG, GenerationOutcome, Orchestrator, Product, ResultShape, Selection, cancel_pair,
};
use std::io::Read;
use std::path::Path;
use tracing::debug;

use super::args::GenerateArgs;
use crate::Config;

// ============================================================================
// Generate Command
// ============================================================================

/// Read a product document from a file, or from stdin when the path is `-`.
pub(crate) fn read_product(path: &Path) -> Result<Product> {
    let content = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read product JSON from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read product file {}", path.display()))?
    };

    serde_json::from_str(&content)
        .with_context(|| format!("Product JSON in {} is not valid", path.display()))
}

/// Run the orchestrator for one product. Ctrl-C cancels the request.
pub async fn execute_generate_command(
    config: &Config,
    args: &GenerateArgs,
) -> Result<GenerationOutcome> {
    let product = read_product(&args.product)?;
    let style = config.style_configuration()?;
    let selection: Selection = args.kind.parse()?;
    let gateway = copygen_gateway::from_settings(config.gateway_settings())?;
    let orchestrator = Orchestrator::new(gateway);

    let (handle, signal) = cancel_pair();
    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            handle.cancel();
        }
    });

    debug!(kind = %args.kind, base_url = %config.backend.base_url, "Starting generation");
    let result = orchestrator
        .generate_with_cancel(&product, style, selection, &signal)
        .await;
    interrupt.abort();

    Ok(result?)
}

pub fn render_outcome(outcome: &GenerationOutcome, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(outcome)
    } else {
        serde_json::to_string(outcome)
    };
    rendered.context("Failed to serialize generation outcome")
}

// ============================================================================
// Config Command
// ============================================================================

pub fn render_config(config: &Config, json: bool) -> Result<String> {
    let effective = config.effective_config();

    if json {
        let entries: serde_json::Map<String, serde_json::Value> = effective
            .into_iter()
            .map(|(key, (value, source))| {
                (key, serde_json::json!({ "value": value, "source": source }))
            })
            .collect();
        let document = serde_json::json!({
            "config_file": config.config_path.as_ref().map(|p| p.display().to_string()),
            "settings": entries,
        });
        return serde_json::to_string_pretty(&document).context("Failed to serialize config");
    }

    let mut output = String::new();
    match &config.config_path {
        Some(path) => output.push_str(&format!("Config file: {}\n", path.display())),
        None => output.push_str("Config file: none (using defaults)\n"),
    }
    let width = effective.keys().map(String::len).max().unwrap_or(0);
    for (key, (value, source)) in &effective {
        output.push_str(&format!("  {key:<width$} = {value} ({source})\n"));
    }
    Ok(output)
}

// ============================================================================
// Kinds Command
// ============================================================================

pub fn render_kinds(json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(&CATALOG).context("Failed to serialize catalog");
    }

    let mut output = String::new();
    for contract in &CATALOG {
        let shape = match contract.shape {
            ResultShape::Text => "text",
            ResultShape::Structured => "structured",
        };
        let mut inputs = vec!["product"];
        if contract.uses_platform {
            inputs.push("platform");
        }
        if contract.uses_style {
            inputs.extend(["tone", "length", "style"]);
        }
        output.push_str(&format!(
            "{:<16}{:<28}{:<12}{}\n",
            contract.kind.as_str(),
            contract.endpoint.path(),
            shape,
            inputs.join(", ")
        ));
    }
    Ok(output)
}
