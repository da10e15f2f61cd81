use leadscout_core::RawLead;
use serde::{Deserialize, Serialize};

/// Website-analysis signals for one lead, as supplied by the caller.
///
/// When no analyzer has run, [`WebsiteAnalysisSignal::from_lead`] derives a
/// best-effort signal from the lead record alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebsiteAnalysisSignal {
    pub has_website: bool,
    pub has_https: bool,
    pub is_responsive: bool,
    #[serde(default)]
    pub load_time_ms: Option<u32>,
    /// Detected technology strings, e.g. `"jQuery 1.12.4"` or `"WordPress 4.9"`.
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Design modernity on a 0..=10 scale, when an analyzer reported one.
    #[serde(default)]
    pub modernity_level: Option<u8>,
}

impl WebsiteAnalysisSignal {
    /// Derives a signal from a raw lead without any external analysis.
    ///
    /// HTTPS is inferred from the website URL scheme; responsiveness is
    /// assumed (optimistic) so an unanalyzed site is not penalized for
    /// signals nobody measured.
    #[must_use]
    pub fn from_lead(lead: &RawLead) -> Self {
        let has_website = lead.website.is_some();
        let has_https = lead
            .website
            .as_deref()
            .is_some_and(|url| url.starts_with("https://"));
        Self {
            has_website,
            has_https,
            is_responsive: true,
            load_time_ms: None,
            technologies: Vec::new(),
            modernity_level: None,
        }
    }
}

/// Named point weights for the scoring engine.
///
/// Defaulted but overridable per call. The same `(signal, rules)` pair
/// always yields the same [`ScoreResult`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRules {
    pub no_website: u8,
    pub no_https: u8,
    pub not_responsive: u8,
    pub old_tech: u8,
    pub slow_page: u8,
    /// Full-scale weight of the design-modernity penalty: a site at
    /// modernity 0 earns the whole weight, one at 10 earns nothing.
    pub outdated_design: u8,
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self {
            no_website: 10,
            no_https: 3,
            not_responsive: 3,
            old_tech: 2,
            slow_page: 2,
            outdated_design: 5,
        }
    }
}

/// Qualitative opportunity bucket derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Ignore,
    Low,
    Medium,
    Hot,
}

impl ScoreBand {
    /// Maps a clamped 0..=10 total onto its band (fixed thresholds).
    #[must_use]
    pub fn from_total(total: u8) -> Self {
        match total {
            0..=3 => ScoreBand::Ignore,
            4..=5 => ScoreBand::Low,
            6 => ScoreBand::Medium,
            _ => ScoreBand::Hot,
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreBand::Ignore => write!(f, "ignore"),
            ScoreBand::Low => write!(f, "low"),
            ScoreBand::Medium => write!(f, "medium"),
            ScoreBand::Hot => write!(f, "hot"),
        }
    }
}

/// One contributing factor, recorded so the total is auditable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreFactor {
    pub name: &'static str,
    pub points: u8,
    pub description: String,
}

/// Estimated first-contract revenue range for a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueEstimate {
    pub min: u32,
    pub max: u32,
    pub currency: &'static str,
}

/// Outcome of scoring one lead. Derived, recomputed on demand; a new score
/// supersedes the old one rather than mutating it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Clamped opportunity score, 0..=10.
    pub total: u8,
    pub band: ScoreBand,
    pub factors: Vec<ScoreFactor>,
    pub recommended_action: &'static str,
    pub revenue_estimate: RevenueEstimate,
}

#[cfg(test)]
mod tests {
    use leadscout_core::Coordinates;

    use super::*;

    fn lead_with_website(website: Option<&str>) -> RawLead {
        RawLead {
            name: "Padaria Central".to_owned(),
            place_id: "p-1".to_owned(),
            coordinates: Some(Coordinates {
                lat: -23.55,
                lng: -46.63,
            }),
            address: "Rua A, 100".to_owned(),
            rating: Some(4.2),
            review_count: Some(31),
            categories: vec!["bakery".to_owned()],
            website: website.map(str::to_owned),
            phone: None,
            maps_link: "https://maps.example.com/p-1".to_owned(),
            opening_hours: None,
        }
    }

    #[test]
    fn from_lead_without_website() {
        let signal = WebsiteAnalysisSignal::from_lead(&lead_with_website(None));
        assert!(!signal.has_website);
        assert!(!signal.has_https);
    }

    #[test]
    fn from_lead_with_https_website() {
        let signal =
            WebsiteAnalysisSignal::from_lead(&lead_with_website(Some("https://padaria.com.br")));
        assert!(signal.has_website);
        assert!(signal.has_https);
        assert!(signal.is_responsive, "unanalyzed sites assumed responsive");
    }

    #[test]
    fn from_lead_with_plain_http_website() {
        let signal =
            WebsiteAnalysisSignal::from_lead(&lead_with_website(Some("http://padaria.com.br")));
        assert!(signal.has_website);
        assert!(!signal.has_https);
    }

    #[test]
    fn band_thresholds() {
        assert_eq!(ScoreBand::from_total(0), ScoreBand::Ignore);
        assert_eq!(ScoreBand::from_total(3), ScoreBand::Ignore);
        assert_eq!(ScoreBand::from_total(4), ScoreBand::Low);
        assert_eq!(ScoreBand::from_total(5), ScoreBand::Low);
        assert_eq!(ScoreBand::from_total(6), ScoreBand::Medium);
        assert_eq!(ScoreBand::from_total(7), ScoreBand::Hot);
        assert_eq!(ScoreBand::from_total(10), ScoreBand::Hot);
    }

    #[test]
    fn default_rules_match_documented_weights() {
        let rules = ScoreRules::default();
        assert_eq!(rules.no_website, 10);
        assert_eq!(rules.no_https, 3);
        assert_eq!(rules.not_responsive, 3);
        assert_eq!(rules.old_tech, 2);
        assert_eq!(rules.slow_page, 2);
        assert_eq!(rules.outdated_design, 5);
    }
}
