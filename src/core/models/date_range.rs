use std::sync::OnceLock;

use chrono::{DateTime, Days, Local, Utc};
use regex::Regex;

use crate::core::errors::{MongauditError, Result};

static RANGE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn range_pattern() -> &'static Regex {
    RANGE_PATTERN.get_or_init(|| {
        Regex::new(r"^\d{4}-\d{2}-\d{2}_\d{4}-\d{2}-\d{2}$").expect("pattern is valid")
    })
}

/// Strict open-interval date bounds for the log query.
///
/// Both bounds are UTC midnight instants; the query matches entries
/// created strictly between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// Parse a `YYYY-MM-DD_YYYY-MM-DD` range string.
    ///
    /// Rejects anything that is not exactly 21 characters of the expected
    /// digit pattern, and any half that is not a valid calendar date.
    pub fn parse(s: &str) -> Result<Self> {
        if s.chars().count() != 21 {
            return Err(MongauditError::InvalidRange {
                detail: format!("'{s}' has the wrong length"),
            });
        }
        if !range_pattern().is_match(s) {
            return Err(MongauditError::InvalidRange {
                detail: format!("'{s}' does not match YYYY-MM-DD_YYYY-MM-DD"),
            });
        }

        let (start, end) = s.split_once('_').expect("pattern guarantees one underscore");

        Ok(Self {
            start: parse_utc_midnight(start)?,
            end: parse_utc_midnight(end)?,
        })
    }

    /// Default range string: today through tomorrow, local calendar dates.
    pub fn today_through_tomorrow() -> String {
        let today = Local::now().date_naive();
        let tomorrow = today
            .checked_add_days(Days::new(1))
            .expect("tomorrow fits in the calendar");
        format!("{}_{}", today.format("%Y-%m-%d"), tomorrow.format("%Y-%m-%d"))
    }
}

/// Parse one `YYYY-MM-DD` half as midnight UTC.
fn parse_utc_midnight(date: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(&format!("{date}T00:00:00.000Z"))
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| MongauditError::InvalidRange {
            detail: format!("'{date}' is not a valid calendar date"),
        })
}
