//! Request DTOs for the listings API
//!
//! Defines the query strings and bodies accepted by the HTTP layer.

use serde::{de, Deserialize, Deserializer};

use crate::error::{ListingsError, Result};
use crate::listings::{Category, DEFAULT_POPULAR_LIMIT};

/// Query string for `GET /listings/popular`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PopularQuery {
    /// Total number of items wanted across all categories
    #[serde(default, deserialize_with = "blank_as_none")]
    pub limit: Option<usize>,
}

/// Treats `?limit=` like an absent limit; anything else must be a number.
fn blank_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw.trim().parse().map(Some).map_err(de::Error::custom),
    }
}

impl PopularQuery {
    /// The requested limit, or the default of 6 when absent or blank.
    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_POPULAR_LIMIT)
    }
}

/// Query string for `GET /listings/search`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    /// Search text; required, may be blank
    #[serde(default)]
    pub q: Option<String>,
    /// Restricts the search to one category
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl SearchQuery {
    /// Returns the query text, rejecting requests without `q`.
    pub fn query(&self) -> Result<&str> {
        self.q
            .as_deref()
            .ok_or_else(|| ListingsError::InvalidRequest("Query parameter 'q' is required".to_string()))
    }

    /// Parses `type`; an absent or empty value searches every category.
    pub fn category(&self) -> Result<Option<Category>> {
        match self.kind.as_deref() {
            None | Some("") => Ok(None),
            Some(kind) => kind.parse().map(Some),
        }
    }
}

/// Body for `POST /listings/cache/invalidate`
///
/// Exactly one of `key` or `pattern` must be given.
#[derive(Debug, Clone, Deserialize)]
pub struct InvalidateRequest {
    #[serde(default)]
    pub key: Option<String>,
    /// Regular expression matched against raw cache keys
    #[serde(default)]
    pub pattern: Option<String>,
}

/// What an invalidate request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidateTarget<'a> {
    Key(&'a str),
    Pattern(&'a str),
}

impl InvalidateRequest {
    /// Validates the request and returns its target.
    pub fn target(&self) -> Result<InvalidateTarget<'_>> {
        match (self.key.as_deref(), self.pattern.as_deref()) {
            (Some(key), None) if !key.is_empty() => Ok(InvalidateTarget::Key(key)),
            (None, Some(pattern)) if !pattern.is_empty() => Ok(InvalidateTarget::Pattern(pattern)),
            _ => Err(ListingsError::InvalidRequest(
                "Provide exactly one non-empty 'key' or 'pattern'".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popular_query_default_limit() {
        let query: PopularQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.limit(), 6);

        let query: PopularQuery = serde_json::from_str(r#"{"limit": "9"}"#).unwrap();
        assert_eq!(query.limit(), 9);
    }

    #[test]
    fn test_popular_query_blank_limit_uses_default() {
        let query: PopularQuery = serde_json::from_str(r#"{"limit": ""}"#).unwrap();
        assert_eq!(query.limit(), 6);

        assert!(serde_json::from_str::<PopularQuery>(r#"{"limit": "abc"}"#).is_err());
        assert!(serde_json::from_str::<PopularQuery>(r#"{"limit": "-2"}"#).is_err());
    }

    #[test]
    fn test_search_query_requires_q() {
        let query = SearchQuery::default();
        assert!(matches!(query.query(), Err(ListingsError::InvalidRequest(_))));

        let query = SearchQuery {
            q: Some(String::new()),
            kind: None,
        };
        assert_eq!(query.query().unwrap(), "");
    }

    #[test]
    fn test_search_query_category() {
        let query: SearchQuery = serde_json::from_str(r#"{"q": "villa", "type": "projects"}"#).unwrap();
        assert_eq!(query.category().unwrap(), Some(Category::Projects));

        let query: SearchQuery = serde_json::from_str(r#"{"q": "villa", "type": ""}"#).unwrap();
        assert_eq!(query.category().unwrap(), None);

        let query: SearchQuery = serde_json::from_str(r#"{"q": "villa", "type": "castles"}"#).unwrap();
        assert!(query.category().is_err());
    }

    #[test]
    fn test_invalidate_request_target() {
        let req: InvalidateRequest = serde_json::from_str(r#"{"key": "popular_listings_6"}"#).unwrap();
        assert_eq!(req.target().unwrap(), InvalidateTarget::Key("popular_listings_6"));

        let req: InvalidateRequest = serde_json::from_str(r#"{"pattern": "^popular"}"#).unwrap();
        assert_eq!(req.target().unwrap(), InvalidateTarget::Pattern("^popular"));
    }

    #[test]
    fn test_invalidate_request_rejects_both_or_neither() {
        let req: InvalidateRequest = serde_json::from_str("{}").unwrap();
        assert!(req.target().is_err());

        let req: InvalidateRequest =
            serde_json::from_str(r#"{"key": "a", "pattern": "b"}"#).unwrap();
        assert!(req.target().is_err());

        let req: InvalidateRequest = serde_json::from_str(r#"{"key": ""}"#).unwrap();
        assert!(req.target().is_err());
    }
}
