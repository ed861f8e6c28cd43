//! Logging and observability setup for copygen
//!
//! Structured logging through `tracing`. Library crates only emit events; the
//! binary installs the subscriber via [`init_tracing`].

use std::time::Duration;
use tracing::{Level, debug, info, span, warn};
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::error::TransportError;

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins when set. Otherwise verbose mode logs copygen at debug, and
/// the default keeps copygen at info with everything else at warn.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| {
            if verbose {
                EnvFilter::try_new("copygen=debug,info")
            } else {
                EnvFilter::try_new("copygen=info,warn")
            }
        })
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if verbose {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .with_line_number(false)
                    .with_file(false)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .with_line_number(false)
                    .with_file(false)
                    .compact(),
            )
            .try_init()?;
    }

    Ok(())
}

/// Span wrapping one generation request.
pub fn generation_span(selection: &str, planned: usize) -> tracing::Span {
    span!(
        Level::INFO,
        "generation",
        selection = %selection,
        planned = planned,
    )
}

/// Log the dispatch of one backend invocation.
pub fn log_invocation_start(kind: &str, endpoint: &str) {
    debug!(kind = %kind, endpoint = %endpoint, "Invoking generation backend");
}

/// Log a failed artifact. The message is redacted before it is emitted.
pub fn log_artifact_failure(kind: &str, error: &TransportError) {
    warn!(
        kind = %kind,
        error_kind = %error.kind(),
        error = %error.redacted_message(),
        "Artifact generation failed"
    );
}

/// Log the settled state of a generation request.
pub fn log_generation_complete(succeeded: usize, failed: usize, elapsed: Duration) {
    info!(
        succeeded = succeeded,
        failed = failed,
        duration_ms = %elapsed.as_millis(),
        "Generation settled"
    );
}

/// Log a whole-call cancellation.
pub fn log_generation_cancelled(in_flight: usize, elapsed: Duration) {
    warn!(
        in_flight = in_flight,
        duration_ms = %elapsed.as_millis(),
        "Generation cancelled; discarding partial results"
    );
}
