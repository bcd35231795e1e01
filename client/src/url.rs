//! URL and query-string building for the MindWell API.
//!
//! # Design
//! The backend accepts comma-separated lists for array-valued parameters
//! (`specializationIds=1,2`), so list values are joined with a literal
//! comma after each element is form-encoded individually. `None` and
//! empty-string values are dropped entirely, matching the backend's
//! "absent means unfiltered" convention. With an empty base URL the result
//! stays relative, for same-origin reverse-proxy deployments.

use url::form_urlencoded;

/// Ordered query-string builder used by the API façade.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one `key=value` pair. Empty values are dropped.
    pub fn push(mut self, key: &str, value: impl ToString) -> Self {
        let value = value.to_string();
        if !value.is_empty() {
            self.pairs.push((key.to_string(), encode(&value)));
        }
        self
    }

    /// Append the pair only when the value is present (and non-empty).
    pub fn opt(mut self, key: &str, value: Option<impl ToString>) -> Self {
        if let Some(value) = value {
            self = self.push(key, value);
        }
        self
    }

    /// Append a comma-joined list value. Empty lists are dropped.
    pub fn list<T: ToString>(mut self, key: &str, values: &[T]) -> Self {
        if values.is_empty() {
            return self;
        }
        let joined = values
            .iter()
            .map(|v| encode(&v.to_string()))
            .collect::<Vec<_>>()
            .join(",");
        self.pairs.push((key.to_string(), joined));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn encoded(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={v}", encode(k)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn encode(raw: &str) -> String {
    // The backend reads commas literally (list values, sort directives), so
    // they stay unescaped.
    let encoded: String = form_urlencoded::byte_serialize(raw.as_bytes()).collect();
    encoded.replace("%2C", ",")
}

/// Resolve `path` + `query` against `base`.
///
/// A non-empty base yields an absolute URL; an empty base keeps the path
/// relative (`/api/..?..`) instead of pinning it to some origin.
pub fn build_url(base: &str, path: &str, query: &Query) -> String {
    let base = base.trim_end_matches('/');
    if query.is_empty() {
        format!("{base}{path}")
    } else {
        format!("{base}{path}?{}", query.encoded())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_values_join_with_commas_and_empty_strings_drop() {
        let query = Query::new()
            .list("specializationIds", &[1, 2])
            .opt("q", Some(""));
        let url = build_url("", "/api/v1/experts", &query);
        assert_eq!(url, "/api/v1/experts?specializationIds=1,2");
    }

    #[test]
    fn none_values_drop() {
        let query = Query::new()
            .opt("page", Some(0))
            .opt("categoryId", None::<i64>);
        assert_eq!(
            build_url("", "/api/v1/blog/posts", &query),
            "/api/v1/blog/posts?page=0"
        );
    }

    #[test]
    fn base_url_is_prepended_and_trimmed() {
        let query = Query::new().push("size", 12);
        assert_eq!(
            build_url("https://api.mindwell.vn/", "/api/v1/experts", &query),
            "https://api.mindwell.vn/api/v1/experts?size=12"
        );
    }

    #[test]
    fn empty_query_produces_bare_path() {
        assert_eq!(
            build_url("http://localhost:9000", "/api/v1/checkout/options", &Query::new()),
            "http://localhost:9000/api/v1/checkout/options"
        );
    }

    #[test]
    fn values_are_form_encoded() {
        let query = Query::new().push("q", "lo âu nhẹ");
        let url = build_url("", "/api/v1/experts", &query);
        assert!(url.starts_with("/api/v1/experts?q="));
        assert!(!url.contains(' '));
    }

    #[test]
    fn sort_directives_keep_their_comma() {
        let query = Query::new().list("sort", &["avgRating,desc"]);
        assert_eq!(
            build_url("", "/api/v1/experts", &query),
            "/api/v1/experts?sort=avgRating,desc"
        );
    }

    #[test]
    fn booleans_and_numbers_stringify() {
        let query = Query::new()
            .opt("verified", Some(true))
            .opt("minRate", Some(150_000));
        assert_eq!(
            build_url("", "/api/v1/experts", &query),
            "/api/v1/experts?verified=true&minRate=150000"
        );
    }
}
