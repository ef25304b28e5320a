//! Request Builder: path templates, positional values and query parameters.
//!
//! # Design
//! A `RequestBuilder` collects a template such as
//! `/bill/{congress}/{billType}/{billNumber}`, the positional values for its
//! placeholders, and named query parameters whose values may be absent.
//! `build()` validates everything up front and returns an `HttpRequest`, so an
//! invalid call fails with `InvalidParameter` before any network I/O.
//!
//! Absent query values are never emitted. This keeps "no filter" distinct
//! from "filter equals the server default". `format=json` is always appended
//! so the rest of the pipeline can assume a JSON body.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::error::{ApiError, ApiResult};
use crate::http::HttpRequest;

const FORMAT_PARAM: &str = "format";
const FORMAT_JSON: &str = "json";

/// Timestamp layout the API expects for `fromDateTime` / `toDateTime`.
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A parsed path template with ordered `{name}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    raw: String,
    segments: Vec<Segment>,
}

impl PathTemplate {
    /// Parse a template. Placeholders must occupy a whole path segment.
    pub fn parse(template: &str) -> ApiResult<Self> {
        let is_brace = |c: char| c == '{' || c == '}';
        let mut segments = Vec::new();

        for part in template.split('/').filter(|s| !s.is_empty()) {
            let inner = part.strip_prefix('{').and_then(|p| p.strip_suffix('}'));
            let segment = match inner {
                Some(name) if !name.is_empty() && !name.contains(is_brace) => {
                    Segment::Placeholder(name.to_string())
                }
                None if !part.contains(is_brace) => Segment::Literal(part.to_string()),
                _ => {
                    return Err(ApiError::invalid(
                        "template",
                        format!("malformed segment `{part}` in `{template}`"),
                    ))
                }
            };
            segments.push(segment);
        }

        Ok(Self {
            raw: template.to_string(),
            segments,
        })
    }

    /// Placeholder names in the order they must be supplied.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Substitute `values` into the placeholders, in order.
    pub fn resolve(&self, values: &[PathValue]) -> ApiResult<String> {
        let expected = self.placeholders().count();
        if values.len() > expected {
            return Err(ApiError::invalid(
                "path",
                format!(
                    "`{}` takes {expected} value(s), {} supplied",
                    self.raw,
                    values.len()
                ),
            ));
        }

        let mut values = values.iter();
        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Literal(text) => path.push_str(text),
                Segment::Placeholder(name) => {
                    let value = values
                        .next()
                        .ok_or_else(|| ApiError::invalid(name, "no value supplied"))?;
                    value.validate(name)?;
                    path.push_str(&value.to_string());
                }
            }
        }
        if path.is_empty() {
            path.push('/');
        }
        Ok(path)
    }
}

/// One positional path value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathValue {
    Number(u64),
    Text(String),
}

impl PathValue {
    fn validate(&self, name: &str) -> ApiResult<()> {
        let Self::Text(text) = self else {
            return Ok(());
        };
        if text.trim().is_empty() {
            return Err(ApiError::invalid(name, "must not be empty"));
        }
        if text.contains(|c: char| c == '/' || c == '?' || c == '#') {
            return Err(ApiError::invalid(
                name,
                format!("`{text}` contains a reserved URL character"),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for PathValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u32> for PathValue {
    fn from(value: u32) -> Self {
        Self::Number(u64::from(value))
    }
}

impl From<u64> for PathValue {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for PathValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PathValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for PathValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

/// Paging and filter parameters shared by list endpoints.
///
/// Every field is optional; unset fields are not sent. Endpoints that do not
/// understand a filter ignore it server-side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    pub from_date_time: Option<DateTime<Utc>>,
    pub to_date_time: Option<DateTime<Utc>>,
    pub sort: Option<String>,
    pub current_member: Option<bool>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// `offset` and `limit` in one call.
    pub fn page(self, offset: u32, limit: u32) -> Self {
        self.offset(offset).limit(limit)
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn from_date_time(mut self, from: DateTime<Utc>) -> Self {
        self.from_date_time = Some(from);
        self
    }

    pub fn to_date_time(mut self, to: DateTime<Utc>) -> Self {
        self.to_date_time = Some(to);
        self
    }

    /// Sort expression, e.g. `updateDate+desc`.
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn current_member(mut self, current: bool) -> Self {
        self.current_member = Some(current);
        self
    }
}

/// Accumulates a template, positional values and query parameters.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    template: String,
    values: Vec<PathValue>,
    query: Vec<(String, String)>,
}

impl RequestBuilder {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            values: Vec::new(),
            query: Vec::new(),
        }
    }

    /// Supply the next positional value.
    pub fn path(mut self, value: impl Into<PathValue>) -> Self {
        self.values.push(value.into());
        self
    }

    /// Set a query parameter. `None` clears any earlier value for `name`.
    pub fn query<V: ToString>(mut self, name: &str, value: Option<V>) -> Self {
        self.query.retain(|(k, _)| k != name);
        if let Some(value) = value {
            self.query.push((name.to_string(), value.to_string()));
        }
        self
    }

    /// Apply every set field of `options`.
    pub fn list(self, options: &ListOptions) -> Self {
        let format_date = |dt: &DateTime<Utc>| dt.format(DATE_TIME_FORMAT).to_string();
        self.query("offset", options.offset)
            .query("limit", options.limit)
            .query("fromDateTime", options.from_date_time.as_ref().map(format_date))
            .query("toDateTime", options.to_date_time.as_ref().map(format_date))
            .query("sort", options.sort.as_deref())
            .query("currentMember", options.current_member)
    }

    pub fn build(self) -> ApiResult<HttpRequest> {
        let path = PathTemplate::parse(&self.template)?.resolve(&self.values)?;
        let mut query = self.query;
        query.retain(|(k, _)| k != FORMAT_PARAM);
        query.push((FORMAT_PARAM.to_string(), FORMAT_JSON.to_string()));
        Ok(HttpRequest { path, query })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn resolves_placeholders_in_order() {
        let req = RequestBuilder::new("/bill/{congress}/{billType}/{billNumber}")
            .path(118u32)
            .path("hr")
            .path(1u32)
            .list(&ListOptions::new().limit(5))
            .build()
            .unwrap();

        assert_eq!(req.path, "/bill/118/hr/1");
        assert_eq!(req.query_value("limit"), Some("5"));
        assert_eq!(req.query_value("offset"), None);
        assert_eq!(req.query_string(), "limit=5&format=json");
    }

    #[test]
    fn literal_only_template() {
        let req = RequestBuilder::new("/congress/current").build().unwrap();
        assert_eq!(req.path, "/congress/current");
        assert_eq!(req.query_string(), "format=json");
    }

    #[test]
    fn missing_value_names_the_placeholder() {
        let err = RequestBuilder::new("/bill/{congress}/{billType}")
            .path(118u32)
            .build()
            .unwrap_err();
        match err {
            ApiError::InvalidParameter { name, .. } => assert_eq!(name, "billType"),
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    #[test]
    fn surplus_values_are_rejected() {
        let err = RequestBuilder::new("/law/{congress}")
            .path(118u32)
            .path("pub")
            .build()
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidParameter { .. }));
    }

    #[test]
    fn empty_text_value_is_rejected() {
        for bad in ["", "   "] {
            let err = RequestBuilder::new("/committee/{chamber}")
                .path(bad)
                .build()
                .unwrap_err();
            assert!(
                matches!(err, ApiError::InvalidParameter { ref name, .. } if name == "chamber"),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn reserved_characters_are_rejected() {
        for bad in ["hr/1", "hr?x=1", "hr#frag"] {
            let err = RequestBuilder::new("/bill/{congress}/{billType}")
                .path(118u32)
                .path(bad)
                .build()
                .unwrap_err();
            assert!(matches!(err, ApiError::InvalidParameter { .. }), "{bad}");
        }
    }

    #[test]
    fn malformed_template_is_rejected() {
        for bad in ["/bill/{congress", "/bill/{}", "/bill/x{congress}"] {
            assert!(PathTemplate::parse(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn placeholders_listed_in_order() {
        let template =
            PathTemplate::parse("/committee-print/{congress}/{chamber}/{jacketNumber}/text")
                .unwrap();
        let names: Vec<_> = template.placeholders().collect();
        assert_eq!(names, ["congress", "chamber", "jacketNumber"]);
    }

    #[test]
    fn list_options_render_every_filter() {
        let from = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2024, 6, 30, 23, 59, 59).unwrap();
        let options = ListOptions::new()
            .page(20, 10)
            .from_date_time(from)
            .to_date_time(to)
            .sort("updateDate+desc")
            .current_member(true);

        let req = RequestBuilder::new("/member").list(&options).build().unwrap();
        assert_eq!(req.query_value("offset"), Some("20"));
        assert_eq!(req.query_value("limit"), Some("10"));
        assert_eq!(req.query_value("fromDateTime"), Some("2024-01-01T00:00:00Z"));
        assert_eq!(req.query_value("toDateTime"), Some("2024-06-30T23:59:59Z"));
        assert_eq!(req.query_value("sort"), Some("updateDate+desc"));
        assert_eq!(req.query_value("currentMember"), Some("true"));
    }

    #[test]
    fn zero_limit_and_offset_are_passed_through() {
        let req = RequestBuilder::new("/law/{congress}")
            .path(118u32)
            .list(&ListOptions::new().page(0, 0))
            .build()
            .unwrap();
        assert_eq!(req.query_value("offset"), Some("0"));
        assert_eq!(req.query_value("limit"), Some("0"));
    }

    #[test]
    fn later_query_value_replaces_earlier_one() {
        let req = RequestBuilder::new("/bill")
            .query("limit", Some(5))
            .query("limit", Some(7))
            .query("sort", Some("a"))
            .query("sort", None::<&str>)
            .build()
            .unwrap();
        assert_eq!(req.query_string(), "limit=7&format=json");
    }

    #[test]
    fn caller_cannot_override_format() {
        let req = RequestBuilder::new("/bill")
            .query("format", Some("xml"))
            .build()
            .unwrap();
        assert_eq!(req.query, vec![("format".to_string(), "json".to_string())]);
    }
}
