//! Canonical query-string construction.
//!
//! A [`ParameterSet`] collects the parameters a normalizer decided to send
//! and serializes them in insertion order, so the same logical call always
//! produces an identical URL.

use url::form_urlencoded;

/// A single query-parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Str(String),
    Int(u64),
    /// Boolean-shaped option. Serialized as the literal `1`; an off flag is
    /// never serialized at all.
    Flag,
}

/// Ordered set of query parameters for one request. Call-local, never reused.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    pairs: Vec<(&'static str, ParamValue)>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no parameter has been set; such a set serializes to `""`.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn push_str(&mut self, name: &'static str, value: impl Into<String>) {
        self.pairs.push((name, ParamValue::Str(value.into())));
    }

    pub fn push_int(&mut self, name: &'static str, value: u64) {
        self.pairs.push((name, ParamValue::Int(value)));
    }

    pub fn push_flag(&mut self, name: &'static str) {
        self.pairs.push((name, ParamValue::Flag));
    }

    /// Serialize as `?k1=v1&k2=v2`, values percent-encoded, pairs in
    /// insertion order. An empty set yields an empty string with no `?`.
    pub fn to_query_string(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.pairs {
            match value {
                ParamValue::Str(s) => serializer.append_pair(name, s),
                ParamValue::Int(n) => serializer.append_pair(name, &n.to_string()),
                ParamValue::Flag => serializer.append_pair(name, "1"),
            };
        }
        format!("?{}", serializer.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_serializes_to_empty_string() {
        let mut params = ParameterSet::new();
        assert!(params.is_empty());
        assert_eq!(params.to_query_string(), "");

        params.push_int("a", 1);
        assert!(!params.is_empty());
    }

    #[test]
    fn test_single_pair() {
        let mut params = ParameterSet::new();
        params.push_int("a", 1);
        assert_eq!(params.to_query_string(), "?a=1");
    }

    #[test]
    fn test_pairs_keep_insertion_order() {
        let mut params = ParameterSet::new();
        params.push_str("start", "yesterday");
        params.push_int("limit", 4);
        params.push_str("status", "all");
        assert_eq!(params.to_query_string(), "?start=yesterday&limit=4&status=all");
    }

    #[test]
    fn test_flag_serializes_as_literal_one() {
        let mut params = ParameterSet::new();
        params.push_flag("segments");
        assert_eq!(params.to_query_string(), "?segments=1");
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let mut params = ParameterSet::new();
        params.push_str("privacy", "Buddies Only");
        params.push_str("since", "2015-05-01T00:00:00+00:00");
        assert_eq!(
            params.to_query_string(),
            "?privacy=Buddies+Only&since=2015-05-01T00%3A00%3A00%2B00%3A00"
        );
    }
}
