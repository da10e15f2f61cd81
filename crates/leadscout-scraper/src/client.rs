use std::time::{Duration, Instant};

use leadscout_core::{
    AcquisitionMode, AppConfig, JobStatus, LeadAcquisitionResult, ScrapeJob, SearchRequest,
};
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;

use crate::aliases::{
    lookup_json_field, COMPLETED_STATUSES, FAILED_STATUSES, JOB_ID_ALIASES, JOB_STATUS_ALIASES,
};
use crate::error::{AcquisitionError, Phase};
use crate::parse::parse_results;
use crate::poll::{poll_until, PollOutcome, PollVerdict};
use crate::query::{normalize_query, NormalizedQuery};

/// Connect timeout shared by every phase.
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Per-phase time budgets for the engine lifecycle.
///
/// Defaults: submit 10 s, each poll 10 s, a 5 s interval for at most 24
/// attempts (a two-minute ceiling), download 30 s.
#[derive(Debug, Clone)]
pub struct EngineTimeouts {
    pub submit_secs: u64,
    pub poll_secs: u64,
    pub poll_interval_secs: u64,
    pub poll_max_attempts: u32,
    pub download_secs: u64,
}

impl Default for EngineTimeouts {
    fn default() -> Self {
        Self {
            submit_secs: 10,
            poll_secs: 10,
            poll_interval_secs: 5,
            poll_max_attempts: 24,
            download_secs: 30,
        }
    }
}

impl EngineTimeouts {
    /// Budgets as configured through the environment.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            submit_secs: config.submit_timeout_secs,
            poll_secs: config.poll_timeout_secs,
            poll_interval_secs: config.poll_interval_secs,
            poll_max_attempts: config.poll_max_attempts,
            download_secs: config.download_timeout_secs,
        }
    }
}

/// Job-creation request body, shaped the way the engine expects it.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitJobBody<'a> {
    name: &'a str,
    keywords: [&'a str; 1],
    depth: u32,
    lang: &'a str,
    max: u32,
    max_time: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    radius: Option<u32>,
}

/// Why one status check yielded nothing usable.
///
/// These are tolerated, logged, and treated as "not yet" by the poll loop;
/// only an explicit failure status from the engine is terminal.
#[derive(Debug, Error)]
enum PollCheckError {
    #[error("engine returned HTTP {status}")]
    Status { status: u16 },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("response carried no recognizable status field")]
    MissingStatus,
}

/// HTTP client for the external acquisition engine's create/poll/download
/// lifecycle.
///
/// One `acquire` call drives one job end-to-end, sequentially. Submission
/// and download are attempted exactly once: submission is not
/// idempotent-safe to retry blindly, and a failed download after a
/// completed job is a distinct fault the caller must see. Only the poll
/// phase repeats, and that is a designed wait loop, not error recovery.
pub struct EngineClient {
    base_url: String,
    submit_client: Client,
    poll_client: Client,
    download_client: Client,
    poll_interval: Duration,
    poll_max_attempts: u32,
}

impl EngineClient {
    /// Creates a client with one `reqwest::Client` per phase budget.
    ///
    /// # Errors
    ///
    /// Returns [`AcquisitionError::Unknown`] if an underlying HTTP client
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(base_url: &str, timeouts: &EngineTimeouts) -> Result<Self, AcquisitionError> {
        let build = |secs: u64| {
            Client::builder()
                .timeout(Duration::from_secs(secs))
                .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
                .build()
                .map_err(|e| AcquisitionError::Unknown {
                    context: "building HTTP client".to_owned(),
                    source: Box::new(e),
                })
        };
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            submit_client: build(timeouts.submit_secs)?,
            poll_client: build(timeouts.poll_secs)?,
            download_client: build(timeouts.download_secs)?,
            poll_interval: Duration::from_secs(timeouts.poll_interval_secs),
            poll_max_attempts: timeouts.poll_max_attempts,
        })
    }

    /// Acquires leads for a validated request against the live engine:
    /// submit, poll until terminal, download, parse, truncate to the
    /// request's `max_results`.
    ///
    /// # Errors
    ///
    /// - [`AcquisitionError::SubmitFailed`]: job creation rejected or no id.
    /// - [`AcquisitionError::JobFailed`]: engine reported a failure status.
    /// - [`AcquisitionError::JobTimedOut`]: poll budget exhausted.
    /// - [`AcquisitionError::DownloadFailed`]: result retrieval failed.
    /// - [`AcquisitionError::NetworkTimeout`]: a phase exceeded its budget.
    pub async fn acquire(
        &self,
        request: &SearchRequest,
    ) -> Result<LeadAcquisitionResult, AcquisitionError> {
        let started = Instant::now();
        let query = normalize_query(&request.query);
        tracing::info!(
            query = %request.query,
            mode = %AcquisitionMode::Live,
            max_results = request.max_results,
            "submitting scrape job"
        );

        let job_id = self.submit_job(request, &query).await?;
        let mut job = ScrapeJob::created(job_id.clone());
        job.status = JobStatus::Polling;
        tracing::info!(
            job_id = %job.id,
            elapsed = ?started.elapsed(),
            "job created; polling for completion"
        );

        let outcome = poll_until(self.poll_interval, self.poll_max_attempts, |attempt| {
            let job_id = job_id.clone();
            async move { self.poll_check(&job_id, attempt).await }
        })
        .await?;

        match outcome {
            PollOutcome::Exhausted { attempts } => {
                job.status = JobStatus::TimedOut;
                job.attempts_polled = attempts;
                tracing::warn!(
                    job_id = %job.id,
                    attempts,
                    elapsed = ?started.elapsed(),
                    "poll budget exhausted before a terminal status"
                );
                return Err(AcquisitionError::JobTimedOut {
                    job_id: job.id,
                    attempts,
                });
            }
            PollOutcome::Ready { attempts, .. } => {
                job.attempts_polled = attempts;
                tracing::info!(
                    job_id = %job.id,
                    attempts,
                    elapsed = ?started.elapsed(),
                    "job completed; downloading results"
                );
            }
        }

        let payload = self.download_results(&job.id).await?;
        let mut leads = parse_results(&payload);
        leads.truncate(request.max_results as usize);
        job.status = JobStatus::Completed;
        tracing::info!(
            job_id = %job.id,
            count = leads.len(),
            elapsed = ?started.elapsed(),
            "acquisition complete"
        );

        Ok(LeadAcquisitionResult {
            job,
            leads,
            mode: AcquisitionMode::Live,
        })
    }

    /// Submits a job-creation request. Attempted exactly once.
    async fn submit_job(
        &self,
        request: &SearchRequest,
        query: &NormalizedQuery,
    ) -> Result<String, AcquisitionError> {
        let body = SubmitJobBody {
            name: query.business_type.as_deref().unwrap_or(&request.query),
            keywords: [request.query.as_str()],
            depth: 1,
            lang: &request.language_code,
            max: request.max_results,
            max_time: "5m",
            radius: request.radius_meters,
        };
        let url = format!("{}/api/v1/jobs", self.base_url);

        let response = self
            .submit_client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    AcquisitionError::NetworkTimeout {
                        phase: Phase::Submit,
                    }
                } else {
                    AcquisitionError::SubmitFailed {
                        status: err.status().map(|s| s.as_u16()),
                        body: None,
                        reason: format!("job creation request failed: {err}"),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AcquisitionError::SubmitFailed {
                status: Some(status.as_u16()),
                body: Some(body),
                reason: format!("engine rejected job creation with HTTP {status}"),
            });
        }

        let value: serde_json::Value =
            response
                .json()
                .await
                .map_err(|err| AcquisitionError::SubmitFailed {
                    status: Some(status.as_u16()),
                    body: None,
                    reason: format!("submit response was not valid JSON: {err}"),
                })?;

        lookup_json_field(&value, JOB_ID_ALIASES)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AcquisitionError::SubmitFailed {
                status: Some(status.as_u16()),
                body: Some(value.to_string()),
                reason: "submit response carried no job identifier".to_owned(),
            })
    }

    /// Classifies one status check for the poll loop.
    ///
    /// Check failures (network, non-2xx, missing status field) are logged
    /// and mapped to `Pending`; the budget, not the failure, decides when
    /// to give up. Only an explicit failure status aborts.
    async fn poll_check(
        &self,
        job_id: &str,
        attempt: u32,
    ) -> Result<PollVerdict<()>, AcquisitionError> {
        match self.poll_status(job_id).await {
            Ok(raw) => {
                let status = raw.to_lowercase();
                if COMPLETED_STATUSES.contains(&status.as_str()) {
                    Ok(PollVerdict::Ready(()))
                } else if FAILED_STATUSES.contains(&status.as_str()) {
                    Err(AcquisitionError::JobFailed {
                        job_id: job_id.to_owned(),
                        status,
                    })
                } else {
                    tracing::debug!(job_id, attempt, status = %status, "job still running");
                    Ok(PollVerdict::Pending)
                }
            }
            Err(err) => {
                tracing::warn!(job_id, attempt, error = %err, "status check failed; will poll again");
                Ok(PollVerdict::Pending)
            }
        }
    }

    /// Fetches the raw status string for a job through the alias table.
    async fn poll_status(&self, job_id: &str) -> Result<String, PollCheckError> {
        let url = format!("{}/api/v1/jobs/{job_id}", self.base_url);
        let response = self.poll_client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PollCheckError::Status {
                status: status.as_u16(),
            });
        }
        let value: serde_json::Value = response.json().await?;
        lookup_json_field(&value, JOB_STATUS_ALIASES).ok_or(PollCheckError::MissingStatus)
    }

    /// Downloads the result payload for a completed job. Attempted exactly
    /// once.
    async fn download_results(&self, job_id: &str) -> Result<String, AcquisitionError> {
        let url = format!("{}/api/v1/jobs/{job_id}/download", self.base_url);

        let response = self
            .download_client
            .get(&url)
            .send()
            .await
            .map_err(|err| download_error(job_id, err, "download request failed"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AcquisitionError::DownloadFailed {
                job_id: job_id.to_owned(),
                status: Some(status.as_u16()),
                body: Some(body),
                reason: format!("engine returned HTTP {status} for the result download"),
            });
        }

        response
            .text()
            .await
            .map_err(|err| download_error(job_id, err, "failed reading the result payload"))
    }
}

fn download_error(job_id: &str, err: reqwest::Error, context: &str) -> AcquisitionError {
    if err.is_timeout() {
        AcquisitionError::NetworkTimeout {
            phase: Phase::Download,
        }
    } else {
        AcquisitionError::DownloadFailed {
            job_id: job_id.to_owned(),
            status: err.status().map(|s| s.as_u16()),
            body: None,
            reason: format!("{context}: {err}"),
        }
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
