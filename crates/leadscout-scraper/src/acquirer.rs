//! Entry-point facade for the acquisition pipeline.

use leadscout_core::{AcquisitionMode, AppConfig, LeadAcquisitionResult, SearchRequest};

use crate::client::{EngineClient, EngineTimeouts};
use crate::error::AcquisitionError;
use crate::mock::acquire_mock;

enum Backend {
    Live(EngineClient),
    Mock,
}

/// The pipeline's single entry point: validates a request and drives one
/// acquisition end-to-end against the configured backend.
///
/// The mode is injected at construction and never mixed within one call.
/// Concurrent `acquire` calls are independent; the acquirer holds no shared
/// mutable state.
pub struct LeadAcquirer {
    backend: Backend,
}

impl LeadAcquirer {
    /// Builds an acquirer for an explicit mode.
    ///
    /// # Errors
    ///
    /// Returns [`AcquisitionError::Unknown`] if the live HTTP client cannot
    /// be constructed. Mock mode never fails to build.
    pub fn new(
        mode: AcquisitionMode,
        base_url: &str,
        timeouts: &EngineTimeouts,
    ) -> Result<Self, AcquisitionError> {
        let backend = match mode {
            AcquisitionMode::Live => Backend::Live(EngineClient::new(base_url, timeouts)?),
            AcquisitionMode::Mock => Backend::Mock,
        };
        Ok(Self { backend })
    }

    /// Builds an acquirer from loaded application configuration.
    ///
    /// # Errors
    ///
    /// Same as [`LeadAcquirer::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, AcquisitionError> {
        Self::new(
            config.acquisition_mode(),
            &config.engine_base_url,
            &EngineTimeouts::from_config(config),
        )
    }

    #[must_use]
    pub fn mode(&self) -> AcquisitionMode {
        match self.backend {
            Backend::Live(_) => AcquisitionMode::Live,
            Backend::Mock => AcquisitionMode::Mock,
        }
    }

    /// Acquires scored-ready leads for one search request.
    ///
    /// Validation runs first and fails closed: no network traffic for an
    /// invalid request. Every error is raised immediately; the acquirer
    /// performs no automatic retry of the submit or download phases, and
    /// the caller decides whether to re-invoke `acquire` entirely.
    ///
    /// # Errors
    ///
    /// [`AcquisitionError`] with a stable reason code; see the error
    /// taxonomy on that type.
    pub async fn acquire(
        &self,
        request: &SearchRequest,
    ) -> Result<LeadAcquisitionResult, AcquisitionError> {
        request.validate()?;
        match &self.backend {
            Backend::Live(client) => client.acquire(request).await,
            Backend::Mock => Ok(acquire_mock(request)),
        }
    }
}
