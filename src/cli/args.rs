//! CLI argument definitions and parsing structures

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// copygen - generate product content through a generation backend
#[derive(Parser, Debug)]
#[command(name = "copygen")]
#[command(about = "Generate product descriptions, SEO metadata and marketing copy")]
#[command(long_about = r#"
copygen sends a product description to a content generation backend and
collects the generated artifacts. Requesting "all" issues one call per artifact
kind concurrently; a failing kind is reported without hiding the others.

EXAMPLES:
  # Generate every artifact for a product
  copygen generate --product mug.json

  # Marketing copy for Instagram, read from stdin
  cat mug.json | copygen generate --product - --kind marketing --platform instagram

  # Show effective configuration and where each value came from
  copygen config

CONFIGURATION:
  Precedence: CLI flags > environment > config file > defaults
  The config file is discovered by searching upward from CWD for
  .copygen/config.toml, or read from $COPYGEN_HOME/config.toml.
  COPYGEN_BACKEND_URL overrides the backend base URL.

EXIT CODES:
  0 all artifacts generated, 1 some artifacts failed, 2 invalid configuration,
  3 cancelled, 4 I/O or runtime error
"#)]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (overrides discovery)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL, e.g. http://localhost:5000
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    /// Per-request timeout in seconds (1-600)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate content for a product
    Generate(GenerateArgs),

    /// Show effective configuration with source attribution
    Config {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List artifact kinds and their endpoints
    Kinds {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Product JSON file, or '-' for stdin
    #[arg(long, short)]
    pub product: PathBuf,

    /// Artifact to generate: all, description, seo, marketing, image_prompt, missing_fields
    #[arg(long, short, default_value = "all")]
    pub kind: String,

    /// Tone: default, professional, conversational, witty, enthusiastic
    #[arg(long)]
    pub tone: Option<String>,

    /// Length: short, medium, long
    #[arg(long)]
    pub length: Option<String>,

    /// Style: standard, storytelling, minimalistic, technical
    #[arg(long)]
    pub style: Option<String>,

    /// Marketing platform: email, instagram, facebook
    #[arg(long)]
    pub platform: Option<String>,

    /// Pretty-print the JSON outcome
    #[arg(long)]
    pub pretty: bool,
}
