//! Free-text query normalization.

use std::sync::LazyLock;

use regex::Regex;

/// Matches the first `" em "` / `" in "` separator, case-insensitively.
static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+(?:em|in)\s+").expect("separator regex is valid"));

/// Best-effort split of a prospecting query into subject and place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    pub business_type: Option<String>,
    pub location: Option<String>,
}

/// Splits a free-text query on the pattern `<subject> (em|in) <place>`.
///
/// Never fails: without a separator the whole trimmed string becomes the
/// business type and the location is absent; empty sides degrade to `None`.
/// Pure and deterministic.
#[must_use]
pub fn normalize_query(query: &str) -> NormalizedQuery {
    if let Some(m) = SEPARATOR.find(query) {
        let business_type = non_empty(&query[..m.start()]);
        let location = non_empty(&query[m.end()..]);
        return NormalizedQuery {
            business_type,
            location,
        };
    }

    NormalizedQuery {
        business_type: non_empty(query),
        location: None,
    }
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_portuguese_separator() {
        let q = normalize_query("dentistas em Campinas");
        assert_eq!(q.business_type.as_deref(), Some("dentistas"));
        assert_eq!(q.location.as_deref(), Some("Campinas"));
    }

    #[test]
    fn splits_on_english_separator() {
        let q = normalize_query("plumbers in Austin");
        assert_eq!(q.business_type.as_deref(), Some("plumbers"));
        assert_eq!(q.location.as_deref(), Some("Austin"));
    }

    #[test]
    fn separator_is_case_insensitive() {
        let q = normalize_query("restaurantes EM Porto Alegre");
        assert_eq!(q.business_type.as_deref(), Some("restaurantes"));
        assert_eq!(q.location.as_deref(), Some("Porto Alegre"));
    }

    #[test]
    fn first_separator_wins() {
        let q = normalize_query("lojas em Santana em São Paulo");
        assert_eq!(q.business_type.as_deref(), Some("lojas"));
        assert_eq!(q.location.as_deref(), Some("Santana em São Paulo"));
    }

    #[test]
    fn no_separator_means_whole_query_is_business_type() {
        let q = normalize_query("barbearias");
        assert_eq!(q.business_type.as_deref(), Some("barbearias"));
        assert_eq!(q.location, None);
    }

    #[test]
    fn embedded_em_inside_a_word_is_not_a_separator() {
        let q = normalize_query("empresas de limpeza");
        assert_eq!(q.business_type.as_deref(), Some("empresas de limpeza"));
        assert_eq!(q.location, None);
    }

    #[test]
    fn empty_query_degrades_to_all_absent() {
        let q = normalize_query("   ");
        assert_eq!(q.business_type, None);
        assert_eq!(q.location, None);
    }

    #[test]
    fn missing_place_after_separator_degrades_gracefully() {
        let q = normalize_query("padarias em ");
        assert_eq!(q.business_type.as_deref(), Some("padarias"));
        assert_eq!(q.location, None);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let q = normalize_query("  pizzarias em Niterói  ");
        assert_eq!(q.business_type.as_deref(), Some("pizzarias"));
        assert_eq!(q.location.as_deref(), Some("Niterói"));
    }
}
