use std::path::PathBuf;

/// Overrides supplied on the command line. `None` leaves the lower layers in
/// effect.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub config_path: Option<PathBuf>,
    pub backend_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub tone: Option<String>,
    pub length: Option<String>,
    pub style: Option<String>,
    pub platform: Option<String>,
    pub verbose: Option<bool>,
}
