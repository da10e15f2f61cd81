use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::lead::RawLead;

/// Lifecycle state of one scrape job.
///
/// `Completed` and `Failed` mirror what the engine reports; `TimedOut` is
/// assigned locally when the polling budget runs out before a terminal
/// status is observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    Created,
    Polling,
    Completed,
    Failed,
    TimedOut,
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Created => write!(f, "created"),
            JobStatus::Polling => write!(f, "polling"),
            JobStatus::Completed => write!(f, "completed"),
            JobStatus::Failed => write!(f, "failed"),
            JobStatus::TimedOut => write!(f, "timed_out"),
        }
    }
}

/// One engine-side scrape job, owned exclusively by a single acquisition
/// call. Never shared or reused across calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeJob {
    /// Engine-assigned job identifier (or a `mock-` prefixed id in mock mode).
    pub id: String,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
    /// Number of status checks performed so far.
    pub attempts_polled: u32,
}

impl ScrapeJob {
    /// A freshly-submitted job with zero polls on the clock.
    #[must_use]
    pub fn created(id: String) -> Self {
        Self {
            id,
            status: JobStatus::Created,
            created_at: Utc::now(),
            attempts_polled: 0,
        }
    }
}

/// Which backend an acquisition call talks to. Selected at construction,
/// never mixed within one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquisitionMode {
    /// Real requests against the configured acquisition engine.
    Live,
    /// Synthesized leads, no network. For offline development.
    Mock,
}

impl std::fmt::Display for AcquisitionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AcquisitionMode::Live => write!(f, "live"),
            AcquisitionMode::Mock => write!(f, "mock"),
        }
    }
}

/// Successful outcome of one acquisition call.
#[derive(Debug, Clone)]
pub struct LeadAcquisitionResult {
    pub job: ScrapeJob,
    pub leads: Vec<RawLead>,
    pub mode: AcquisitionMode,
}
