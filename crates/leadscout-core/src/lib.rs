pub mod app_config;
pub mod config;
pub mod job;
pub mod lead;
pub mod request;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use job::{AcquisitionMode, JobStatus, LeadAcquisitionResult, ScrapeJob};
pub use lead::{Coordinates, RawLead};
pub use request::{SearchRequest, ValidationError};
