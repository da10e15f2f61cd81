//! Synthetic lead generation for offline development.
//!
//! No network, no engine. Output is randomized but bounded so downstream
//! scoring and UI work behaves like it would on live data. Everything is
//! tagged `mode=mock` in logs so it is never mistaken for a real scrape.

use chrono::Utc;
use leadscout_core::{
    AcquisitionMode, Coordinates, JobStatus, LeadAcquisitionResult, RawLead, ScrapeJob,
    SearchRequest,
};
use rand::Rng;
use uuid::Uuid;

use crate::query::{normalize_query, NormalizedQuery};

/// Mock mode never fabricates more leads than this, whatever the request cap.
pub(crate) const MOCK_LEAD_CAP: u32 = 20;

/// Reference point the mock coordinates jitter around (São Paulo).
const REFERENCE_LAT: f64 = -23.5505;
const REFERENCE_LNG: f64 = -46.6333;

const NAME_SUFFIXES: &[&str] = &[
    "Central",
    "do Centro",
    "Express",
    "Premium",
    "da Praça",
    "Vila Nova",
    "Boutique",
    "& Cia",
    "Popular",
    "Real",
];

/// Runs one full mock acquisition: a synthetic completed job plus
/// `min(max_results, 20)` fabricated leads.
pub(crate) fn acquire_mock(request: &SearchRequest) -> LeadAcquisitionResult {
    let query = normalize_query(&request.query);
    let job = ScrapeJob {
        id: format!("mock-{}", Uuid::new_v4()),
        status: JobStatus::Completed,
        created_at: Utc::now(),
        attempts_polled: 0,
    };
    let leads = generate_mock_leads(request, &query);
    tracing::info!(
        job_id = %job.id,
        mode = %AcquisitionMode::Mock,
        count = leads.len(),
        query = %request.query,
        "generated mock leads (no live acquisition performed)"
    );
    LeadAcquisitionResult {
        job,
        leads,
        mode: AcquisitionMode::Mock,
    }
}

/// Fabricates plausible leads with bounded attributes: rating in 3.0..=5.0,
/// coordinates jittered around the reference point, roughly 65% with a
/// website and 70% with a phone.
pub(crate) fn generate_mock_leads(
    request: &SearchRequest,
    query: &NormalizedQuery,
) -> Vec<RawLead> {
    let mut rng = rand::rng();
    let count = request.max_results.min(MOCK_LEAD_CAP) as usize;
    let label = query.business_type.as_deref().unwrap_or("Negócio");
    let slug = slugify(label);

    (0..count)
        .map(|i| {
            let place_id = format!("mock-place-{i:03}");
            // One decimal place, without float rounding artifacts.
            let rating = f64::from(rng.random_range(30..=50)) / 10.0;
            let website = rng.random_bool(0.65).then(|| {
                let scheme = if rng.random_bool(0.7) { "https" } else { "http" };
                format!("{scheme}://www.{slug}{i}.com.br")
            });
            let phone = rng.random_bool(0.7).then(|| {
                format!(
                    "+55 11 9{:04}-{:04}",
                    rng.random_range(1000..=9999),
                    rng.random_range(0..=9999)
                )
            });

            RawLead {
                name: format!("{label} {}", NAME_SUFFIXES[i % NAME_SUFFIXES.len()]),
                place_id: place_id.clone(),
                coordinates: Some(Coordinates {
                    lat: REFERENCE_LAT + rng.random_range(-0.05..=0.05),
                    lng: REFERENCE_LNG + rng.random_range(-0.05..=0.05),
                }),
                address: format!(
                    "Rua {} {}, {}",
                    label,
                    i + 1,
                    query.location.as_deref().unwrap_or("São Paulo")
                ),
                rating: Some(rating),
                review_count: Some(rng.random_range(5..=480)),
                categories: query
                    .business_type
                    .clone()
                    .map_or_else(Vec::new, |t| vec![t]),
                website,
                phone,
                maps_link: format!("https://maps.example.com/place/{place_id}"),
                opening_hours: rng
                    .random_bool(0.5)
                    .then(|| "Seg a Sex, 09:00-18:00".to_owned()),
            }
        })
        .collect()
}

fn slugify(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}
