use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use serde_json::Value;

use crate::utils::error::{Error, Result};

// YYYYMMDD
static DATE_PLAIN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{8}$").unwrap());

// YYYY-MM-DD
static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

// YYYY-MM-DDTHH:MM:SS
static DATETIME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}$").unwrap());

// YYYY-MM-DDTHH:MM:SSZ, YYYY-MM-DDTHH:MM:SS+HH:MM or YYYY-MM-DDTHH:MM:SS-HH:MM
static DATETIME_WITH_ZONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(Z|[+-]\d{2}:\d{2})$").unwrap()
});

/// A date or datetime as the AfterShip API reports them.
///
/// The API mixes plain dates, naive datetimes and offset datetimes in the
/// same fields, so the parsed value keeps the shape it arrived in. Naive
/// datetimes are treated as UTC; equality compares UTC instants, which makes
/// a plain date equal to the same calendar day at midnight UTC.
#[derive(Debug, Clone, Copy)]
pub enum DateValue {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    ZonedDateTime(DateTime<FixedOffset>),
}

impl DateValue {
    /// The value as a naive UTC instant. Plain dates count as midnight.
    pub fn as_utc(&self) -> NaiveDateTime {
        match self {
            DateValue::Date(date) => date.and_time(NaiveTime::MIN),
            DateValue::DateTime(datetime) => *datetime,
            DateValue::ZonedDateTime(datetime) => datetime.naive_utc(),
        }
    }
}

impl PartialEq for DateValue {
    fn eq(&self, other: &Self) -> bool {
        self.as_utc() == other.as_utc()
    }
}

impl Eq for DateValue {}

impl fmt::Display for DateValue {
    /// Serializes back to the shape the value was parsed from, keeping the
    /// supplied offset for zoned datetimes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateValue::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            DateValue::DateTime(datetime) => {
                write!(f, "{}", datetime.format("%Y-%m-%dT%H:%M:%S"))
            }
            DateValue::ZonedDateTime(datetime) => {
                write!(f, "{}", datetime.format("%Y-%m-%dT%H:%M:%S%:z"))
            }
        }
    }
}

/// Parse a date or datetime string from the API.
///
/// Recognized shapes, first match wins:
/// `YYYYMMDD`, `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DDTHH:MM:SSZ`
/// and `YYYY-MM-DDTHH:MM:SS+HH:MM` / `-HH:MM`.
///
/// The empty string parses to `None`. Any other input fails, so a domain
/// object under construction fails with it rather than dropping the field.
pub fn parse(value: &str) -> Result<Option<DateValue>> {
    if value.is_empty() {
        return Ok(None);
    }

    if DATE_PLAIN_REGEX.is_match(value) {
        let date = NaiveDate::parse_from_str(value, "%Y%m%d")
            .map_err(|e| invalid_date(value, &e))?;
        return Ok(Some(DateValue::Date(date)));
    }

    if DATE_REGEX.is_match(value) {
        let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map_err(|e| invalid_date(value, &e))?;
        return Ok(Some(DateValue::Date(date)));
    }

    if DATETIME_REGEX.is_match(value) {
        let datetime = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
            .map_err(|e| invalid_date(value, &e))?;
        return Ok(Some(DateValue::DateTime(datetime)));
    }

    if DATETIME_WITH_ZONE_REGEX.is_match(value) {
        let datetime =
            DateTime::parse_from_rfc3339(value).map_err(|e| invalid_date(value, &e))?;
        return Ok(Some(DateValue::ZonedDateTime(datetime)));
    }

    Err(Error::MalformedResponse(format!(
        "invalid date value {value:?}"
    )))
}

/// Parse a date field out of a decoded JSON value; `null` means no value.
pub fn parse_json(value: &Value) -> Result<Option<DateValue>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => parse(s),
        other => Err(Error::MalformedResponse(format!(
            "invalid date value {other}"
        ))),
    }
}

fn invalid_date(value: &str, cause: &chrono::ParseError) -> Error {
    Error::MalformedResponse(format!("invalid date value {value:?}: {cause}"))
}
