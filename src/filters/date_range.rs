use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::models::SessionRecord;

/// Inclusive range over a session's `modifiedAt`. Either end may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start: Some(start), end: Some(end) }
    }

    /// Whole calendar days in UTC: `since` from midnight, `until` through
    /// its last millisecond
    pub fn from_dates(since: Option<NaiveDate>, until: Option<NaiveDate>) -> Self {
        let end_of_day = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
        Self {
            start: since.map(|date| date.and_time(NaiveTime::MIN).and_utc()),
            end: until.map(|date| date.and_time(end_of_day).and_utc()),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Sessions whose `modifiedAt` does not parse never match a bounded range
    pub fn contains(&self, session: &SessionRecord) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Ok(modified) = DateTime::parse_from_rfc3339(&session.modified_at) else {
            return false;
        };
        let modified = modified.with_timezone(&Utc);
        self.start.is_none_or(|start| modified >= start) && self.end.is_none_or(|end| modified <= end)
    }
}
