use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hard ceiling on the number of leads a single request may ask for.
pub const MAX_RESULTS_CEILING: u32 = 100;

/// Largest accepted search radius, in meters.
pub const MAX_RADIUS_METERS: u32 = 50_000;

/// A prospecting search request as handed to the acquisition pipeline.
///
/// Must pass [`SearchRequest::validate`] before any network dispatch;
/// invalid requests fail closed with every violated constraint listed,
/// not just the first one encountered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text prospecting query, e.g. `"dentistas em Campinas"`.
    pub query: String,
    /// Maximum number of leads the caller wants back (1..=100).
    pub max_results: u32,
    /// Two-letter language code forwarded to the engine (e.g. `"pt"`).
    pub language_code: String,
    /// Optional search radius in meters (1..=50_000).
    #[serde(default)]
    pub radius_meters: Option<u32>,
}

/// A malformed [`SearchRequest`], listing every violated constraint.
#[derive(Debug, Error)]
#[error("invalid search request: {}", violations.join("; "))]
pub struct ValidationError {
    pub violations: Vec<String>,
}

impl SearchRequest {
    /// Checks every field constraint and collects all violations.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] with one entry per violated constraint:
    /// empty query, `max_results` outside `1..=100`, a language code that
    /// is not exactly two ASCII letters, or a radius outside `1..=50_000`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Vec::new();

        if self.query.trim().is_empty() {
            violations.push("query must not be empty".to_owned());
        }
        if self.max_results < 1 || self.max_results > MAX_RESULTS_CEILING {
            violations.push(format!(
                "max_results must be between 1 and {MAX_RESULTS_CEILING}, got {}",
                self.max_results
            ));
        }
        if self.language_code.len() != 2
            || !self.language_code.chars().all(|c| c.is_ascii_alphabetic())
        {
            violations.push(format!(
                "language_code must be exactly two ASCII letters, got \"{}\"",
                self.language_code
            ));
        }
        if let Some(radius) = self.radius_meters {
            if radius < 1 || radius > MAX_RADIUS_METERS {
                violations.push(format!(
                    "radius_meters must be between 1 and {MAX_RADIUS_METERS}, got {radius}"
                ));
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { violations })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> SearchRequest {
        SearchRequest {
            query: "dentistas em Campinas".to_owned(),
            max_results: 20,
            language_code: "pt".to_owned(),
            radius_meters: None,
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn valid_request_with_radius_passes() {
        let mut req = valid_request();
        req.radius_meters = Some(5_000);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn empty_query_is_rejected() {
        let mut req = valid_request();
        req.query = "   ".to_owned();
        let err = req.validate().unwrap_err();
        assert_eq!(err.violations.len(), 1);
        assert!(err.violations[0].contains("query"));
    }

    #[test]
    fn zero_max_results_is_rejected() {
        let mut req = valid_request();
        req.max_results = 0;
        let err = req.validate().unwrap_err();
        assert!(err.violations[0].contains("max_results"));
    }

    #[test]
    fn oversized_max_results_is_rejected() {
        let mut req = valid_request();
        req.max_results = 101;
        assert!(req.validate().is_err());
    }

    #[test]
    fn three_letter_language_code_is_rejected() {
        let mut req = valid_request();
        req.language_code = "por".to_owned();
        let err = req.validate().unwrap_err();
        assert!(err.violations[0].contains("language_code"));
    }

    #[test]
    fn numeric_language_code_is_rejected() {
        let mut req = valid_request();
        req.language_code = "p1".to_owned();
        assert!(req.validate().is_err());
    }

    #[test]
    fn zero_radius_is_rejected() {
        let mut req = valid_request();
        req.radius_meters = Some(0);
        let err = req.validate().unwrap_err();
        assert!(err.violations[0].contains("radius_meters"));
    }

    #[test]
    fn oversized_radius_is_rejected() {
        let mut req = valid_request();
        req.radius_meters = Some(50_001);
        assert!(req.validate().is_err());
    }

    #[test]
    fn all_violations_are_collected_not_just_the_first() {
        let req = SearchRequest {
            query: String::new(),
            max_results: 0,
            language_code: "portuguese".to_owned(),
            radius_meters: Some(0),
        };
        let err = req.validate().unwrap_err();
        assert_eq!(
            err.violations.len(),
            4,
            "expected all four violations listed, got: {:?}",
            err.violations
        );
    }

    #[test]
    fn error_display_joins_violations() {
        let req = SearchRequest {
            query: String::new(),
            max_results: 0,
            language_code: "pt".to_owned(),
            radius_meters: None,
        };
        let err = req.validate().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("query"), "message was: {msg}");
        assert!(msg.contains("max_results"), "message was: {msg}");
    }
}
