//! Field-name alias tables for the engine's loosely-typed payloads.
//!
//! The engine is inconsistent about field names across versions, both in
//! its JSON envelopes and in the delimited result header. Each logical
//! field has one alias table here, consulted in fixed priority order, so
//! the mapping is declarative rather than scattered conditional checks.

use serde_json::Value;

/// Accepted names for the job identifier in a submit response.
pub(crate) const JOB_ID_ALIASES: &[&str] = &["jobId", "id"];

/// Accepted names for the status field in a poll response.
pub(crate) const JOB_STATUS_ALIASES: &[&str] = &["status", "state"];

/// Status values the engine uses for successful completion.
pub(crate) const COMPLETED_STATUSES: &[&str] = &["completed", "done", "finished"];

/// Status values the engine uses for terminal failure.
pub(crate) const FAILED_STATUSES: &[&str] = &["failed", "error"];

// Result-header aliases, all compared lowercase.
pub(crate) const NAME_ALIASES: &[&str] = &["title", "name"];
pub(crate) const PLACE_ID_ALIASES: &[&str] = &["place_id", "placeid", "cid"];
pub(crate) const LAT_ALIASES: &[&str] = &["latitude", "lat"];
pub(crate) const LNG_ALIASES: &[&str] = &["longitude", "lng", "lon"];
pub(crate) const ADDRESS_ALIASES: &[&str] = &["address", "full_address"];
pub(crate) const RATING_ALIASES: &[&str] = &["rating", "stars"];
pub(crate) const REVIEW_COUNT_ALIASES: &[&str] = &["reviews", "review_count"];
pub(crate) const CATEGORIES_ALIASES: &[&str] = &["categories", "category"];
pub(crate) const WEBSITE_ALIASES: &[&str] = &["website", "site"];
pub(crate) const PHONE_ALIASES: &[&str] = &["phone", "phone_number"];
pub(crate) const MAPS_LINK_ALIASES: &[&str] = &["link", "maps_link"];
pub(crate) const OPENING_HOURS_ALIASES: &[&str] = &["opening_hours", "hours"];

/// Looks up a JSON field through an alias table in priority order.
///
/// String values are returned as-is; numeric values are stringified so a
/// numeric job id still resolves. Anything else counts as absent.
pub(crate) fn lookup_json_field(value: &Value, aliases: &[&str]) -> Option<String> {
    for alias in aliases {
        match value.get(alias) {
            Some(Value::String(s)) => return Some(s.clone()),
            Some(Value::Number(n)) => return Some(n.to_string()),
            _ => {}
        }
    }
    None
}

/// Finds the column index of the first alias present in a lowercased header.
pub(crate) fn header_position(header: &[String], aliases: &[&str]) -> Option<usize> {
    aliases
        .iter()
        .find_map(|alias| header.iter().position(|h| h == alias))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn json_lookup_prefers_earlier_alias() {
        let value = json!({"jobId": "a", "id": "b"});
        assert_eq!(
            lookup_json_field(&value, JOB_ID_ALIASES),
            Some("a".to_owned())
        );
    }

    #[test]
    fn json_lookup_falls_through_to_later_alias() {
        let value = json!({"id": "b"});
        assert_eq!(
            lookup_json_field(&value, JOB_ID_ALIASES),
            Some("b".to_owned())
        );
    }

    #[test]
    fn json_lookup_stringifies_numeric_ids() {
        let value = json!({"id": 4711});
        assert_eq!(
            lookup_json_field(&value, JOB_ID_ALIASES),
            Some("4711".to_owned())
        );
    }

    #[test]
    fn json_lookup_misses_on_absent_fields() {
        let value = json!({"something": "else"});
        assert_eq!(lookup_json_field(&value, JOB_ID_ALIASES), None);
    }

    #[test]
    fn json_lookup_ignores_non_scalar_values() {
        let value = json!({"status": {"nested": true}, "state": "running"});
        assert_eq!(
            lookup_json_field(&value, JOB_STATUS_ALIASES),
            Some("running".to_owned())
        );
    }

    #[test]
    fn header_position_respects_alias_priority() {
        let header: Vec<String> = ["name", "title"].iter().map(|s| (*s).to_owned()).collect();
        // "title" is the first alias, so its column wins even though "name"
        // appears first in the header.
        assert_eq!(header_position(&header, NAME_ALIASES), Some(1));
    }

    #[test]
    fn header_position_misses_on_absent_field() {
        let header: Vec<String> = vec!["address".to_owned()];
        assert_eq!(header_position(&header, NAME_ALIASES), None);
    }
}
