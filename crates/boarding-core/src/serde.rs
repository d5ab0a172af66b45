use serde::{Deserialize, Deserializer};

/// Deserializes an optional string, treating an empty string as `None`.
/// Form values and CLI flags send `""` for "not set". Whitespace is kept.
pub fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.filter(|s| !s.is_empty()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    Text(String),
}

/// Deserializes an optional i64 from either a JSON number or a string.
///
/// Empty strings are treated as `None`, matching query-string style input.
pub fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<NumberOrString> = Option::deserialize(deserializer)?;
    match value {
        Some(NumberOrString::Number(n)) => Ok(Some(n)),
        Some(NumberOrString::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberOrString::Text(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Params {
        #[serde(default, deserialize_with = "empty_string_as_none")]
        search: Option<String>,
        #[serde(default, deserialize_with = "deserialize_optional_i64")]
        page: Option<i64>,
    }

    #[test]
    fn test_empty_search_is_none() {
        let params: Params = serde_json::from_str(r#"{"search": ""}"#).unwrap();
        assert_eq!(params.search, None);
    }

    #[test]
    fn test_whitespace_search_is_kept() {
        let params: Params = serde_json::from_str(r#"{"search": "  "}"#).unwrap();
        assert_eq!(params.search.as_deref(), Some("  "));
    }

    #[test]
    fn test_page_accepts_number_and_string() {
        let params: Params = serde_json::from_str(r#"{"page": 3}"#).unwrap();
        assert_eq!(params.page, Some(3));
        let params: Params = serde_json::from_str(r#"{"page": "4"}"#).unwrap();
        assert_eq!(params.page, Some(4));
        let params: Params = serde_json::from_str(r#"{"page": ""}"#).unwrap();
        assert_eq!(params.page, None);
    }

    #[test]
    fn test_page_rejects_garbage() {
        let result: Result<Params, _> = serde_json::from_str(r#"{"page": "two"}"#);
        assert!(result.is_err());
    }
}
