use crate::job::AcquisitionMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Environment-driven configuration for the acquisition pipeline.
///
/// Built by [`crate::config::load_app_config`]; mode selection is an
/// explicit value handed to the acquirer at construction rather than a
/// flag checked at call time.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Base URL of the external acquisition engine.
    pub engine_base_url: String,
    /// Forces mock mode regardless of environment when `true`.
    pub use_mock_acquisition: bool,
    /// Timeout for the job-creation request.
    pub submit_timeout_secs: u64,
    /// Timeout for each individual status check.
    pub poll_timeout_secs: u64,
    /// Fixed sleep between status checks.
    pub poll_interval_secs: u64,
    /// Status checks allowed before the job is declared timed out.
    pub poll_max_attempts: u32,
    /// Timeout for the result download.
    pub download_timeout_secs: u64,
}

impl AppConfig {
    /// The acquisition mode this configuration selects.
    #[must_use]
    pub fn acquisition_mode(&self) -> AcquisitionMode {
        if self.use_mock_acquisition {
            AcquisitionMode::Mock
        } else {
            AcquisitionMode::Live
        }
    }
}
