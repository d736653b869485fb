use std::path::PathBuf;

/// Runtime settings shared by the attrsim binaries.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the optional remote scoring service. `None` leaves remote
    /// calls disabled and the local model authoritative.
    pub ml_base_url: Option<String>,
    pub ml_timeout_secs: u64,
    pub log_level: String,
    /// Optional YAML file overriding the built-in feature weights.
    pub weights_path: Option<PathBuf>,
    /// Records generated when no explicit count is given.
    pub dataset_size: usize,
}
