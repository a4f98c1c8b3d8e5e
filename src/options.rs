//! Per-endpoint query options.
//!
//! Each endpoint family gets its own options record whose fields are exactly
//! that endpoint's allowed parameters, so an out-of-list parameter is
//! unrepresentable. `to_params` is pure: it reads the record and produces a
//! fresh [`ParameterSet`], never mutating caller state.

use crate::query::ParameterSet;

/// Loose input for the API's boolean-shaped options (`segments`,
/// `recursive`).
///
/// The upstream API accepts `true`, `1` and `"1"` interchangeably for these.
/// [`FlagValue::is_on`] is the one coercion rule shared by every options
/// record: exactly those three spellings switch a flag on, and anything else
/// is treated as if the option were absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl FlagValue {
    pub fn is_on(&self) -> bool {
        match self {
            FlagValue::Bool(b) => *b,
            FlagValue::Int(n) => *n == 1,
            FlagValue::Str(s) => s == "1",
        }
    }
}

impl From<bool> for FlagValue {
    fn from(value: bool) -> Self {
        FlagValue::Bool(value)
    }
}

impl From<i64> for FlagValue {
    fn from(value: i64) -> Self {
        FlagValue::Int(value)
    }
}

impl From<i32> for FlagValue {
    fn from(value: i32) -> Self {
        FlagValue::Int(value.into())
    }
}

impl From<&str> for FlagValue {
    fn from(value: &str) -> Self {
        FlagValue::Str(value.to_string())
    }
}

impl From<String> for FlagValue {
    fn from(value: String) -> Self {
        FlagValue::Str(value)
    }
}

fn flag_on(value: &Option<FlagValue>) -> bool {
    value.as_ref().is_some_and(FlagValue::is_on)
}

/// Options for `GET trips`.
///
/// An entirely empty record serializes to `start=today` (the API explorer's
/// documented default). Setting any field suppresses that default; a
/// caller-supplied `start` always wins over it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripsQuery {
    pub segments: Option<FlagValue>,
    pub start: Option<String>,
    pub end: Option<String>,
    /// Filter results changed since this UTC date/time (ISO8601).
    pub since: Option<String>,
    /// Filter results changed until this UTC date/time (ISO8601).
    pub until: Option<String>,
    pub status: Option<String>,
    pub privacy: Option<String>,
    pub purpose: Option<String>,
    pub count: Option<u64>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    /// Include changed sub-objects. Only sent when `since` or `until` is
    /// also set; the API rejects it on its own.
    pub recursive: Option<FlagValue>,
}

impl TripsQuery {
    pub fn to_params(&self) -> ParameterSet {
        let mut params = ParameterSet::new();
        if *self == Self::default() {
            params.push_str("start", "today");
            return params;
        }
        if flag_on(&self.segments) {
            params.push_flag("segments");
        }
        if let Some(start) = &self.start {
            params.push_str("start", start.clone());
        }
        if let Some(end) = &self.end {
            params.push_str("end", end.clone());
        }
        if let Some(since) = &self.since {
            params.push_str("since", since.clone());
        }
        if let Some(until) = &self.until {
            params.push_str("until", until.clone());
        }
        if let Some(status) = &self.status {
            params.push_str("status", status.clone());
        }
        if let Some(privacy) = &self.privacy {
            params.push_str("privacy", privacy.clone());
        }
        if let Some(purpose) = &self.purpose {
            params.push_str("purpose", purpose.clone());
        }
        if let Some(count) = self.count {
            params.push_int("count", count);
        }
        if let Some(offset) = self.offset {
            params.push_int("offset", offset);
        }
        if let Some(limit) = self.limit {
            params.push_int("limit", limit);
        }
        if flag_on(&self.recursive) && (self.since.is_some() || self.until.is_some()) {
            params.push_flag("recursive");
        }
        params
    }
}

/// Options for `GET trips/{id}` and `GET trips/current`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripQuery {
    pub segments: Option<FlagValue>,
}

impl TripQuery {
    pub fn to_params(&self) -> ParameterSet {
        let mut params = ParameterSet::new();
        if flag_on(&self.segments) {
            params.push_flag("segments");
        }
        params
    }
}

/// Options for `GET trips/past`. No defaults, no conditional rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PastTripsQuery {
    pub segments: Option<FlagValue>,
    pub privacy: Option<String>,
    pub purpose: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl PastTripsQuery {
    pub fn to_params(&self) -> ParameterSet {
        let mut params = ParameterSet::new();
        if flag_on(&self.segments) {
            params.push_flag("segments");
        }
        if let Some(privacy) = &self.privacy {
            params.push_str("privacy", privacy.clone());
        }
        if let Some(purpose) = &self.purpose {
            params.push_str("purpose", purpose.clone());
        }
        if let Some(limit) = self.limit {
            params.push_int("limit", limit);
        }
        if let Some(offset) = self.offset {
            params.push_int("offset", offset);
        }
        params
    }
}

/// Options for `GET stream`. Plain passthrough integers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamQuery {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub count: Option<u64>,
}

impl StreamQuery {
    pub fn to_params(&self) -> ParameterSet {
        let mut params = ParameterSet::new();
        if let Some(offset) = self.offset {
            params.push_int("offset", offset);
        }
        if let Some(limit) = self.limit {
            params.push_int("limit", limit);
        }
        if let Some(count) = self.count {
            params.push_int("count", count);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_truthy_spellings() {
        assert!(FlagValue::from(true).is_on());
        assert!(FlagValue::from(1).is_on());
        assert!(FlagValue::from("1").is_on());

        assert!(!FlagValue::from(false).is_on());
        assert!(!FlagValue::from(0).is_on());
        assert!(!FlagValue::from(2).is_on());
        assert!(!FlagValue::from("true").is_on());
        assert!(!FlagValue::from("").is_on());
    }

    #[test]
    fn test_trips_empty_record_defaults_to_start_today() {
        let params = TripsQuery::default().to_params();
        assert_eq!(params.to_query_string(), "?start=today");
    }

    #[test]
    fn test_trips_any_option_suppresses_default() {
        let query = TripsQuery {
            limit: Some(4),
            ..Default::default()
        };
        assert_eq!(query.to_params().to_query_string(), "?limit=4");
    }

    #[test]
    fn test_trips_caller_start_wins() {
        let query = TripsQuery {
            start: Some("yesterday".to_string()),
            ..Default::default()
        };
        assert_eq!(query.to_params().to_query_string(), "?start=yesterday");
    }

    #[test]
    fn test_trips_recursive_requires_since_or_until() {
        let alone = TripsQuery {
            recursive: Some(1.into()),
            status: Some("all".to_string()),
            ..Default::default()
        };
        assert_eq!(alone.to_params().to_query_string(), "?status=all");

        let with_since = TripsQuery {
            recursive: Some(1.into()),
            since: Some("2015-05-01".to_string()),
            ..Default::default()
        };
        assert_eq!(
            with_since.to_params().to_query_string(),
            "?since=2015-05-01&recursive=1"
        );

        let with_until = TripsQuery {
            recursive: Some(true.into()),
            until: Some("2016-12-31".to_string()),
            ..Default::default()
        };
        assert_eq!(
            with_until.to_params().to_query_string(),
            "?until=2016-12-31&recursive=1"
        );
    }

    #[test]
    fn test_trips_full_option_set() {
        let query = TripsQuery {
            segments: Some("1".into()),
            start: Some("yesterday".to_string()),
            end: Some("tomorrow".to_string()),
            since: Some("2015-05-01".to_string()),
            until: Some("2016-12-31".to_string()),
            status: Some("all".to_string()),
            privacy: Some("Public".to_string()),
            purpose: Some("Personal".to_string()),
            count: None,
            offset: Some(3),
            limit: Some(4),
            recursive: Some("1".into()),
        };
        assert_eq!(
            query.to_params().to_query_string(),
            "?segments=1&start=yesterday&end=tomorrow&since=2015-05-01&until=2016-12-31\
             &status=all&privacy=Public&purpose=Personal&offset=3&limit=4&recursive=1"
        );
    }

    #[test]
    fn test_trip_segments_coercion() {
        for on in [
            FlagValue::from(true),
            FlagValue::from(1),
            FlagValue::from("1"),
        ] {
            let query = TripQuery { segments: Some(on) };
            assert_eq!(query.to_params().to_query_string(), "?segments=1");
        }

        let off = TripQuery {
            segments: Some(false.into()),
        };
        assert_eq!(off.to_params().to_query_string(), "");
        assert_eq!(TripQuery::default().to_params().to_query_string(), "");
    }

    #[test]
    fn test_past_trips_string_segments_coerced() {
        let query = PastTripsQuery {
            segments: Some("1".into()),
            ..Default::default()
        };
        assert_eq!(query.to_params().to_query_string(), "?segments=1");
    }

    #[test]
    fn test_past_trips_no_injected_defaults() {
        assert_eq!(PastTripsQuery::default().to_params().to_query_string(), "");

        let query = PastTripsQuery {
            privacy: Some("Buddies Only".to_string()),
            limit: Some(10),
            offset: Some(5),
            ..Default::default()
        };
        assert_eq!(
            query.to_params().to_query_string(),
            "?privacy=Buddies+Only&limit=10&offset=5"
        );
    }

    #[test]
    fn test_stream_passthrough() {
        assert_eq!(StreamQuery::default().to_params().to_query_string(), "");

        let query = StreamQuery {
            offset: Some(20),
            limit: Some(10),
            count: Some(1),
        };
        assert_eq!(
            query.to_params().to_query_string(),
            "?offset=20&limit=10&count=1"
        );
    }
}
