use serde::{Deserialize, Serialize};

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Returns `true` when both components are inside their valid ranges
    /// (latitude in [-90, 90], longitude in [-180, 180]) and finite.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// One discovered business, as produced by the result parser or the mock
/// generator. Immutable once constructed; one instance per acquired business.
///
/// Optional fields are `None` when the engine did not report them or the
/// reported value could not be interpreted; a partially-populated lead is
/// normal, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawLead {
    /// Display name of the business.
    pub name: String,
    /// Engine-assigned place identifier.
    pub place_id: String,
    /// `None` when the engine reported no coordinates or an unparsable pair.
    pub coordinates: Option<Coordinates>,
    pub address: String,
    /// Average review rating, typically 1.0..=5.0.
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    /// Business categories as reported by the engine. Empty when unknown.
    pub categories: Vec<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    /// Link back to the business on the source map service.
    pub maps_link: String,
    pub opening_hours: Option<String>,
}
