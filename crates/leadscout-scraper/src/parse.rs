//! Tolerant parser for the engine's delimited result payload.
//!
//! The payload is a comma-delimited text table: one header line naming the
//! fields, then one row per business. Header names are matched
//! case-insensitively through the alias tables in [`crate::aliases`].
//! Splitting is hand-rolled rather than pulled from a CSV crate: the
//! engine's dialect is small (quoted fields, `""` escapes) and the parser
//! must keep going on rows a strict reader would reject.

use leadscout_core::{Coordinates, RawLead};

use crate::aliases::{
    header_position, ADDRESS_ALIASES, CATEGORIES_ALIASES, LAT_ALIASES, LNG_ALIASES,
    MAPS_LINK_ALIASES, NAME_ALIASES, OPENING_HOURS_ALIASES, PHONE_ALIASES, PLACE_ID_ALIASES,
    RATING_ALIASES, REVIEW_COUNT_ALIASES, WEBSITE_ALIASES,
};

const DELIMITER: char = ',';

/// Column indices resolved from the header line, one per logical field.
/// `None` means the engine did not include that column at all.
#[derive(Debug)]
struct HeaderMap {
    name: Option<usize>,
    place_id: Option<usize>,
    lat: Option<usize>,
    lng: Option<usize>,
    address: Option<usize>,
    rating: Option<usize>,
    review_count: Option<usize>,
    categories: Option<usize>,
    website: Option<usize>,
    phone: Option<usize>,
    maps_link: Option<usize>,
    opening_hours: Option<usize>,
}

impl HeaderMap {
    /// Resolves each logical field against a lowercased header.
    fn from_header(header: &[String]) -> Self {
        Self {
            name: header_position(header, NAME_ALIASES),
            place_id: header_position(header, PLACE_ID_ALIASES),
            lat: header_position(header, LAT_ALIASES),
            lng: header_position(header, LNG_ALIASES),
            address: header_position(header, ADDRESS_ALIASES),
            rating: header_position(header, RATING_ALIASES),
            review_count: header_position(header, REVIEW_COUNT_ALIASES),
            categories: header_position(header, CATEGORIES_ALIASES),
            website: header_position(header, WEBSITE_ALIASES),
            phone: header_position(header, PHONE_ALIASES),
            maps_link: header_position(header, MAPS_LINK_ALIASES),
            opening_hours: header_position(header, OPENING_HOURS_ALIASES),
        }
    }
}

/// Parses the delimited result payload into lead records.
///
/// Tolerance rules:
/// - an empty payload or a header-only payload is a valid empty result;
/// - rows shorter than the header treat the missing trailing fields as absent;
/// - unparsable numerics (rating, review count, coordinates) degrade to
///   `None` instead of failing the row;
/// - a row without a name is skipped with a warning; one bad row never
///   discards the rest of the batch.
///
/// Idempotent: parsing the same payload twice yields structurally equal
/// lead lists.
#[must_use]
pub fn parse_results(payload: &str) -> Vec<RawLead> {
    let mut lines = payload.lines();
    let Some(header_line) = lines.next() else {
        return Vec::new();
    };

    let header: Vec<String> = split_delimited_line(header_line)
        .into_iter()
        .map(|f| f.to_lowercase())
        .collect();
    let map = HeaderMap::from_header(&header);

    let mut leads = Vec::new();
    for (index, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let fields = split_delimited_line(line);
        let get = |column: Option<usize>| -> Option<String> {
            column
                .and_then(|i| fields.get(i))
                .filter(|s| !s.is_empty())
                .cloned()
        };

        let Some(name) = get(map.name) else {
            // Header line is line 1, first data row is line 2.
            tracing::warn!(line = index + 2, "result row has no name; skipping");
            continue;
        };

        let coordinates = match (
            get(map.lat).and_then(|s| parse_f64(&s)),
            get(map.lng).and_then(|s| parse_f64(&s)),
        ) {
            (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
            _ => None,
        };

        let categories = get(map.categories)
            .map(|raw| {
                raw.split([';', ','])
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();

        leads.push(RawLead {
            name,
            place_id: get(map.place_id).unwrap_or_default(),
            coordinates,
            address: get(map.address).unwrap_or_default(),
            rating: get(map.rating).and_then(|s| parse_f64(&s)),
            review_count: get(map.review_count).and_then(|s| s.parse().ok()),
            categories,
            website: get(map.website),
            phone: get(map.phone),
            maps_link: get(map.maps_link).unwrap_or_default(),
            opening_hours: get(map.opening_hours),
        });
    }

    leads
}

/// Parses a float, accepting both `4.5` and the comma-decimal `4,5` the
/// engine emits for some locales.
fn parse_f64(raw: &str) -> Option<f64> {
    raw.parse()
        .ok()
        .or_else(|| raw.replace(',', ".").parse().ok())
}

/// Splits one line on the delimiter, honoring quoted fields.
///
/// A field wrapped in double quotes may contain the delimiter; `""` inside
/// a quoted field is an escaped quote. Unquoted fields are trimmed; quoted
/// field content is preserved exactly. An unterminated quote keeps whatever
/// was read (tolerant, not an error).
pub(crate) fn split_delimited_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut was_quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else {
            match c {
                '"' if !was_quoted && field.trim().is_empty() => {
                    field.clear();
                    in_quotes = true;
                    was_quoted = true;
                }
                DELIMITER => {
                    fields.push(finish_field(field, was_quoted));
                    field = String::new();
                    was_quoted = false;
                }
                _ => field.push(c),
            }
        }
    }
    fields.push(finish_field(field, was_quoted));
    fields
}

fn finish_field(field: String, was_quoted: bool) -> String {
    if was_quoted {
        field
    } else {
        field.trim().to_owned()
    }
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
