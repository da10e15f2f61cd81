//! Lead acquisition pipeline: query normalization, scrape-job orchestration
//! against the external acquisition engine, and tolerant result parsing.

pub mod acquirer;
mod aliases;
pub mod client;
pub mod error;
mod mock;
pub mod parse;
mod poll;
pub mod query;

pub use acquirer::LeadAcquirer;
pub use client::{EngineClient, EngineTimeouts};
pub use error::{AcquisitionError, Phase};
pub use parse::parse_results;
pub use query::{normalize_query, NormalizedQuery};
