//! Filter and limit normalization for search endpoints.
//!
//! Every list operation funnels its criteria through [`search_params`],
//! which produces the `params[...]` query mapping the service expects.

use std::collections::BTreeMap;
use std::fmt;

/// Number of records a search returns when no limit is given.
pub(crate) const DEFAULT_QUERY_LIMIT: u32 = 2;

/// The limit key is case sensitive on the server and is never folded.
const QUERY_LIMIT_KEY: &str = "params[QueryLimit]";

/// Key/value search constraints for a list endpoint.
///
/// Keys and values are free-form; the service matches them against record
/// fields. Ordering is kept stable so outbound requests are deterministic.
///
/// # Example
///
/// ```
/// use visoma::Filters;
///
/// let filters = Filters::new().with("title", "Ticket 1");
/// assert!(!filters.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters(BTreeMap<String, String>);

impl Filters {
    /// Creates an empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a constraint, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds a constraint in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns true if no constraints are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the constraints in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }
}

impl fmt::Display for Filters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Filters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Filters(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Filters {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Builds the query parameter mapping for a search request.
///
/// Absent filters produce an empty mapping; an absent or zero limit falls
/// back to [`DEFAULT_QUERY_LIMIT`]. Filter keys are wrapped as
/// `params[<key>]` and both keys and values are lowercased - a cache
/// normalization aid, not something the service requires.
pub(crate) fn search_params(
    filters: Option<&Filters>,
    limit: Option<u32>,
) -> BTreeMap<String, String> {
    let mut params: BTreeMap<String, String> = filters
        .map(|filters| {
            filters
                .iter()
                .map(|(key, value)| {
                    (format!("params[{key}]").to_lowercase(), value.to_lowercase())
                })
                .collect()
        })
        .unwrap_or_default();

    let limit = limit.filter(|&limit| limit != 0).unwrap_or(DEFAULT_QUERY_LIMIT);
    params.insert(QUERY_LIMIT_KEY.to_string(), limit.to_string());

    tracing::debug!(?params, "visoma search params");
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_and_limit() {
        let params = search_params(None, None);
        assert_eq!(
            params,
            BTreeMap::from([("params[QueryLimit]".to_string(), "2".to_string())])
        );
    }

    #[test]
    fn test_default_filter() {
        let params = search_params(None, Some(6));
        assert_eq!(params["params[QueryLimit]"], "6");
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_default_limit() {
        let filters = Filters::from([("username", "user1")]);
        let params = search_params(Some(&filters), None);
        assert_eq!(params["params[username]"], "user1");
        assert_eq!(params["params[QueryLimit]"], "2");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_zero_limit_falls_back_to_default() {
        let params = search_params(None, Some(0));
        assert_eq!(params["params[QueryLimit]"], "2");
    }

    #[test]
    fn test_filter_normalization() {
        let filters = Filters::from([("USERNAME", "User-1")]);
        let params = search_params(Some(&filters), Some(6));
        assert_eq!(
            params,
            BTreeMap::from([
                ("params[username]".to_string(), "user-1".to_string()),
                ("params[QueryLimit]".to_string(), "6".to_string()),
            ])
        );
    }

    #[test]
    fn test_limit_key_case_is_preserved() {
        let params = search_params(None, None);
        assert!(params.contains_key("params[QueryLimit]"));
        assert!(!params.contains_key("params[querylimit]"));
    }

    #[test]
    fn test_filters_display_is_map_like() {
        let filters = Filters::new().with("title", "Ticket 1");
        assert_eq!(filters.to_string(), r#"{"title": "Ticket 1"}"#);
    }
}
