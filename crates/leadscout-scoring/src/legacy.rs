//! Denylist of outdated web stacks.

/// Lowercase substrings that mark a detected technology as legacy.
///
/// Matched case-insensitively against each technology string via
/// substring containment, so `"jQuery 1.12.4"` matches `"jquery 1."`.
pub(crate) const LEGACY_TECH: &[&str] = &[
    // Old jQuery majors
    "jquery 1.",
    "jquery 2.",
    // Dead browser plugins
    "flash",
    "shockwave",
    "silverlight",
    // Legacy Internet Explorer targets
    "ie 6",
    "ie 7",
    "ie 8",
    "msie",
    // Old CMS majors
    "wordpress 3",
    "wordpress 4",
    "joomla 1",
    "joomla 2",
    "drupal 6",
    "drupal 7",
    // Abandoned tooling / runtimes
    "frontpage",
    "asp classic",
    "php 5",
];

/// Returns the first detected technology that matches the denylist,
/// for inclusion in the factor description.
#[must_use]
pub(crate) fn first_legacy_match(technologies: &[String]) -> Option<&str> {
    technologies.iter().map(String::as_str).find(|tech| {
        let lower = tech.to_lowercase();
        LEGACY_TECH.iter().any(|entry| lower.contains(entry))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn techs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn old_jquery_major_matches() {
        let t = techs(&["jQuery 1.12.4"]);
        assert_eq!(first_legacy_match(&t), Some("jQuery 1.12.4"));
    }

    #[test]
    fn modern_jquery_does_not_match() {
        let t = techs(&["jQuery 3.7.1"]);
        assert_eq!(first_legacy_match(&t), None);
    }

    #[test]
    fn flash_matches_case_insensitively() {
        let t = techs(&["Adobe FLASH Player"]);
        assert!(first_legacy_match(&t).is_some());
    }

    #[test]
    fn old_wordpress_major_matches() {
        let t = techs(&["WordPress 4.9"]);
        assert!(first_legacy_match(&t).is_some());
    }

    #[test]
    fn current_wordpress_does_not_match() {
        let t = techs(&["WordPress 6.5"]);
        assert_eq!(first_legacy_match(&t), None);
    }

    #[test]
    fn first_match_wins_over_later_entries() {
        let t = techs(&["React 18", "PHP 5.6", "Drupal 7"]);
        assert_eq!(first_legacy_match(&t), Some("PHP 5.6"));
    }

    #[test]
    fn empty_list_matches_nothing() {
        assert_eq!(first_legacy_match(&[]), None);
    }
}
