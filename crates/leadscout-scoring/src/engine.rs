//! Deterministic additive scoring of website-analysis signals.
//!
//! Purely functional: no state, no I/O, safe to call concurrently. The same
//! `(signal, rules)` pair always yields the same [`ScoreResult`].

use crate::legacy::first_legacy_match;
use crate::types::{
    RevenueEstimate, ScoreBand, ScoreFactor, ScoreResult, ScoreRules, WebsiteAnalysisSignal,
};

/// Page loads slower than this count as a "slow page" signal, in milliseconds.
pub const SLOW_PAGE_THRESHOLD_MS: u32 = 3_000;

/// Scores one lead's website signals into a 0..=10 opportunity score.
///
/// The point system is additive and evaluated in a fixed order so the factor
/// list is reproducible:
///
/// 1. No website at all short-circuits to the full `no_website` weight,
///    the single strongest opportunity signal; nothing else is evaluated.
/// 2. Otherwise accumulate `no_https`, `not_responsive`, `slow_page`
///    (load time above [`SLOW_PAGE_THRESHOLD_MS`]), `old_tech` (any detected
///    technology on the legacy denylist), and a graded `outdated_design`
///    penalty of `round((10 - modernity) * weight / 10)` when a modernity
///    level is present.
/// 3. The total is clamped to 0..=10.
///
/// Correlated signals double-count on purpose: an old stack that is also
/// slow earns both `old_tech` and `slow_page`.
#[must_use]
pub fn score(signal: &WebsiteAnalysisSignal, rules: &ScoreRules) -> ScoreResult {
    if !signal.has_website {
        let points = rules.no_website.min(10);
        let factors = vec![ScoreFactor {
            name: "no_website",
            points,
            description: "business has no website at all".to_owned(),
        }];
        return finish(points, false, factors);
    }

    let mut factors: Vec<ScoreFactor> = Vec::new();

    if !signal.has_https {
        factors.push(ScoreFactor {
            name: "no_https",
            points: rules.no_https,
            description: "site is served without HTTPS".to_owned(),
        });
    }

    if !signal.is_responsive {
        factors.push(ScoreFactor {
            name: "not_responsive",
            points: rules.not_responsive,
            description: "site is not mobile-responsive".to_owned(),
        });
    }

    if let Some(load_time_ms) = signal.load_time_ms {
        if load_time_ms > SLOW_PAGE_THRESHOLD_MS {
            factors.push(ScoreFactor {
                name: "slow_page",
                points: rules.slow_page,
                description: format!("page took {load_time_ms} ms to load"),
            });
        }
    }

    if let Some(tech) = first_legacy_match(&signal.technologies) {
        factors.push(ScoreFactor {
            name: "old_tech",
            points: rules.old_tech,
            description: format!("legacy technology detected: {tech}"),
        });
    }

    if let Some(modernity) = signal.modernity_level {
        let points = modernity_points(modernity, rules.outdated_design);
        if points > 0 {
            factors.push(ScoreFactor {
                name: "outdated_design",
                points,
                description: format!("design modernity rated {modernity}/10"),
            });
        }
    }

    let total: u32 = factors.iter().map(|f| u32::from(f.points)).sum();
    let total = u8::try_from(total.min(10)).unwrap_or(10);

    finish(total, true, factors)
}

/// Scores with the default rule weights. See [`score`].
#[must_use]
pub fn score_with_default_rules(signal: &WebsiteAnalysisSignal) -> ScoreResult {
    score(signal, &ScoreRules::default())
}

/// Graded penalty for an outdated design: `round((10 - modernity) * weight / 10)`.
///
/// At the default weight of 5 this reproduces `round((10 - modernity) / 2)`.
/// Integer arithmetic with round-half-up keeps the result exact.
fn modernity_points(modernity: u8, weight: u8) -> u8 {
    let gap = u32::from(10 - modernity.min(10));
    let raw = gap * u32::from(weight);
    u8::try_from((raw + 5) / 10).unwrap_or(u8::MAX)
}

fn finish(total: u8, has_website: bool, factors: Vec<ScoreFactor>) -> ScoreResult {
    let band = ScoreBand::from_total(total);
    ScoreResult {
        total,
        band,
        factors,
        recommended_action: recommended_action(band, has_website),
        revenue_estimate: revenue_estimate(band, has_website),
    }
}

/// Fixed action lookup keyed by score band and website presence.
fn recommended_action(band: ScoreBand, has_website: bool) -> &'static str {
    match (band, has_website) {
        (ScoreBand::Hot, false) => {
            "Contact immediately: no web presence, pitch a first website"
        }
        (ScoreBand::Hot, true) => "Contact immediately: existing site needs a full rebuild",
        (ScoreBand::Medium, _) => "Reach out with a concrete improvement proposal",
        (ScoreBand::Low, _) => "Add to the nurture list and revisit next quarter",
        (ScoreBand::Ignore, _) => "Skip: web presence is already in good shape",
    }
}

/// Fixed revenue-range lookup keyed by score band and website presence.
/// Ranges are in BRL, the pipeline's home market currency.
fn revenue_estimate(band: ScoreBand, has_website: bool) -> RevenueEstimate {
    let (min, max) = match (band, has_website) {
        (ScoreBand::Hot, false) => (3_000, 8_000),
        (ScoreBand::Hot, true) => (2_500, 7_000),
        (ScoreBand::Medium, _) => (1_500, 4_000),
        (ScoreBand::Low, _) => (800, 2_000),
        (ScoreBand::Ignore, _) => (0, 500),
    };
    RevenueEstimate {
        min,
        max,
        currency: "BRL",
    }
}
