/// A normalized, lower-cased search term for case-insensitive substring filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Builds a term from raw filter input. Only missing or empty input means
    /// "no filter"; whitespace is searched for like any other text.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let raw = raw?;
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw.to_lowercase()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn matches(&self, field: &str) -> bool {
        field.to_lowercase().contains(&self.0)
    }

    /// True when any of the given text fields contains the term.
    pub fn matches_any<'a>(&self, fields: impl IntoIterator<Item = Option<&'a str>>) -> bool {
        fields.into_iter().flatten().any(|field| self.matches(field))
    }
}

/// Applies an optional search filter: no term matches everything.
pub fn search_matches<'a>(
    raw: Option<&str>,
    fields: impl IntoIterator<Item = Option<&'a str>>,
) -> bool {
    match SearchTerm::parse(raw) {
        Some(term) => term.matches_any(fields),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_terms_are_ignored() {
        assert_eq!(SearchTerm::parse(None), None);
        assert_eq!(SearchTerm::parse(Some("")), None);
    }

    #[test]
    fn test_whitespace_is_kept_verbatim() {
        let term = SearchTerm::parse(Some(" ")).unwrap();
        assert_eq!(term.as_str(), " ");
        assert!(term.matches("Abdul Karim"));
        assert!(!term.matches("A+"));

        let term = SearchTerm::parse(Some("A+ ")).unwrap();
        assert!(!term.matches("A+"));
    }

    #[test]
    fn test_case_insensitive_substring() {
        let term = SearchTerm::parse(Some("KAR")).unwrap();
        assert!(term.matches("Abdul Karim"));
        assert!(!term.matches("Shamsun Nahar"));
    }

    #[test]
    fn test_matches_any_skips_missing_fields() {
        let term = SearchTerm::parse(Some("example.com")).unwrap();
        assert!(term.matches_any([Some("Abdul"), None, Some("abdul@example.com")]));
        assert!(!term.matches_any([Some("Abdul"), None]));
    }

    #[test]
    fn test_search_matches_without_term() {
        assert!(search_matches(None, [Some("anything")]));
        assert!(!search_matches(Some("zzz"), [Some("anything")]));
    }
}
