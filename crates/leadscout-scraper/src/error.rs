use leadscout_core::ValidationError;
use thiserror::Error;

/// Which network phase of the acquisition lifecycle an error belongs to.
///
/// Only the single-attempt phases appear here: a timed-out status check is
/// tolerated and treated as "still pending" by the poll loop, so it never
/// surfaces as a phase error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Submit,
    Download,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Submit => write!(f, "submit"),
            Phase::Download => write!(f, "download"),
        }
    }
}

/// Every distinguishable acquisition fault, with the upstream status code
/// and raw error body preserved where available. Never swallowed into a
/// generic message; callers translate [`AcquisitionError::reason_code`]
/// into user-facing copy.
#[derive(Debug, Error)]
pub enum AcquisitionError {
    /// The request failed validation before any network call.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Job creation was rejected or returned no identifier. Never retried:
    /// blind re-submission is not idempotent-safe.
    #[error("job submission failed: {reason}")]
    SubmitFailed {
        status: Option<u16>,
        body: Option<String>,
        reason: String,
    },

    /// The engine explicitly reported a terminal failure status.
    #[error("engine reported job {job_id} as failed (status \"{status}\")")]
    JobFailed { job_id: String, status: String },

    /// The poll budget ran out before a terminal status was observed.
    /// Distinct from [`AcquisitionError::JobFailed`]: the engine never
    /// finished, it did not reject the job.
    #[error("job {job_id} did not finish within {attempts} poll attempts")]
    JobTimedOut { job_id: String, attempts: u32 },

    /// Result retrieval failed after the job reported completion. Never
    /// retried: the job already committed server-side, so a broken download
    /// is a distinct fault class.
    #[error("result download failed for job {job_id}: {reason}")]
    DownloadFailed {
        job_id: String,
        status: Option<u16>,
        body: Option<String>,
        reason: String,
    },

    /// A phase exceeded its own timeout budget.
    #[error("network timeout during {phase} phase")]
    NetworkTimeout { phase: Phase },

    /// Anything unexpected, with the original cause preserved.
    #[error("unexpected failure during {context}: {source}")]
    Unknown {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl AcquisitionError {
    /// Stable machine-readable reason code for caller-side translation.
    #[must_use]
    pub fn reason_code(&self) -> &'static str {
        match self {
            AcquisitionError::Validation(_) => "VALIDATION",
            AcquisitionError::SubmitFailed { .. } => "SUBMIT_FAILED",
            AcquisitionError::JobFailed { .. } => "JOB_FAILED",
            AcquisitionError::JobTimedOut { .. } => "JOB_TIMED_OUT",
            AcquisitionError::DownloadFailed { .. } => "DOWNLOAD_FAILED",
            AcquisitionError::NetworkTimeout { .. } => "NETWORK_TIMEOUT",
            AcquisitionError::Unknown { .. } => "UNKNOWN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_codes_are_stable() {
        let err = AcquisitionError::JobTimedOut {
            job_id: "j1".to_owned(),
            attempts: 24,
        };
        assert_eq!(err.reason_code(), "JOB_TIMED_OUT");

        let err = AcquisitionError::NetworkTimeout {
            phase: Phase::Download,
        };
        assert_eq!(err.reason_code(), "NETWORK_TIMEOUT");
    }

    #[test]
    fn timed_out_and_failed_are_distinguishable() {
        let timed_out = AcquisitionError::JobTimedOut {
            job_id: "j1".to_owned(),
            attempts: 24,
        };
        let failed = AcquisitionError::JobFailed {
            job_id: "j1".to_owned(),
            status: "failed".to_owned(),
        };
        assert_ne!(timed_out.reason_code(), failed.reason_code());
    }

    #[test]
    fn display_includes_upstream_detail() {
        let err = AcquisitionError::DownloadFailed {
            job_id: "j9".to_owned(),
            status: Some(502),
            body: Some("bad gateway".to_owned()),
            reason: "engine returned HTTP 502".to_owned(),
        };
        let msg = err.to_string();
        assert!(msg.contains("j9"), "message was: {msg}");
        assert!(msg.contains("502"), "message was: {msg}");
    }
}
