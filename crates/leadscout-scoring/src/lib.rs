pub mod engine;
mod legacy;
pub mod types;

pub use engine::{score, score_with_default_rules, SLOW_PAGE_THRESHOLD_MS};
pub use types::{
    RevenueEstimate, ScoreBand, ScoreFactor, ScoreResult, ScoreRules, WebsiteAnalysisSignal,
};
