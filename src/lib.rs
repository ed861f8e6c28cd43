//! copygen: concurrent orchestration of product-content generation requests
//!
//! Describe a product and a style, then ask for one or all of the generated
//! artifacts (description, SEO metadata, marketing copy, image prompt, field
//! completion). Each artifact is one backend call; calls run concurrently and
//! every one settles, so one failing kind never hides the others.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use copygen::{Configuration, Orchestrator, Product, Selection, Tone, Length, Style};
//! use copygen::gateway::{GatewaySettings, from_settings};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gateway = from_settings(GatewaySettings::default())?;
//!     let orchestrator = Orchestrator::new(gateway);
//!
//!     let product = Product::new("Mug", "Ceramic coffee mug").with_brand("Acme");
//!     let config = Configuration::new(Tone::Witty, Length::Short, Style::Standard);
//!
//!     let outcome = orchestrator.generate(&product, config, Selection::All).await;
//!     println!("{}", serde_json::to_string_pretty(&outcome)?);
//!     Ok(())
//! }
//! ```
//!
//! # Crates
//!
//! - [`engine`]: model, catalog, dispatcher, orchestrator
//! - [`gateway`]: backend transport
//! - [`config`]: configuration discovery
//! - [`utils`]: errors, logging, exit codes

pub mod cli;

pub use copygen_config as config;
pub use copygen_engine as engine;
pub use copygen_gateway as gateway;
pub use copygen_utils as utils;

pub use copygen_config::{CliArgs, Config};
pub use copygen_engine::{
    ArtifactContent, ArtifactKind, ArtifactResult, CancelHandle, CancelSignal, Configuration,
    GenerationOutcome, Length, Orchestrator, Platform, Product, Selection, Style, StyleOptions,
    Tone, cancel_pair,
};
pub use copygen_gateway::{BackendGateway, Endpoint, HttpGateway};
pub use copygen_utils::error::{
    ConfigError, ConfigurationError, GenerationError, TransportError, TransportErrorKind,
    UserFriendlyError,
};
pub use copygen_utils::exit_codes::ExitCode;
