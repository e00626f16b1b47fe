use chrono::{DateTime, Utc};

use crate::core::models::date_range::DateRange;

/// Driver-agnostic description of one bounded log fetch: strict date
/// bounds plus a result cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogQuery {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub limit: u64,
}

impl LogQuery {
    pub fn new(range: DateRange, limit: u64) -> Self {
        Self {
            start: range.start,
            end: range.end,
            limit,
        }
    }
}
