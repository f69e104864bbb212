use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, Utc};

use super::error::SalesAnalyticsError;

/// Inclusive calendar date range, `start <= end` is guaranteed by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, SalesAnalyticsError> {
        if start > end {
            return Err(SalesAnalyticsError::InvalidRange);
        }
        Ok(Self { start, end })
    }

    /// Validate raw query parameters.
    ///
    /// Checks run in a fixed order: presence of both bounds, then format of
    /// both bounds, then ordering. Ordering compares the parsed instants, the
    /// range itself keeps only their UTC dates.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self, SalesAnalyticsError> {
        let (start, end) = match (non_empty(start), non_empty(end)) {
            (Some(s), Some(e)) => (s, e),
            _ => return Err(SalesAnalyticsError::MissingParameter),
        };

        let start = parse_utc_instant(start).ok_or(SalesAnalyticsError::InvalidDateFormat)?;
        let end = parse_utc_instant(end).ok_or(SalesAnalyticsError::InvalidDateFormat)?;

        if start > end {
            return Err(SalesAnalyticsError::InvalidRange);
        }
        Self::new(start.date(), end.date())
    }

    /// `today - days_back ..= today`
    pub fn trailing(today: NaiveDate, days_back: u32) -> Result<Self, SalesAnalyticsError> {
        let start = today
            .checked_sub_days(Days::new(days_back as u64))
            .ok_or_else(|| {
                SalesAnalyticsError::InternalComputationFailure(format!(
                    "cannot go {} days back from {}",
                    days_back, today
                ))
            })?;
        Self::new(start, today)
    }

    /// Reject ranges longer than `max_days` (inclusive day count)
    pub fn ensure_within(self, max_days: u32) -> Result<Self, SalesAnalyticsError> {
        if self.day_count() > max_days as u64 {
            return Err(SalesAnalyticsError::RangeTooLarge { max_days });
        }
        Ok(self)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of calendar days covered, both ends included
    pub fn day_count(&self) -> u64 {
        (self.end - self.start).num_days() as u64 + 1
    }

    /// Fresh iterator over every day of the range
    pub fn days(&self) -> DateSpan {
        DateSpan {
            next: Some(self.start),
            end: self.end,
        }
    }
}

impl IntoIterator for DateRange {
    type Item = NaiveDate;
    type IntoIter = DateSpan;

    fn into_iter(self) -> DateSpan {
        self.days()
    }
}

/// Lazy ascending sequence of calendar days between two inclusive bounds
#[derive(Debug, Clone)]
pub struct DateSpan {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for DateSpan {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next.filter(|day| *day <= self.end)?;
        // NaiveDate::MAX has no successor, which also ends the span
        self.next = current.succ_opt();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next {
            Some(day) if day <= self.end => (self.end - day).num_days() as usize + 1,
            _ => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DateSpan {}

/// Whitespace is not "missing": it is reported as a bad format by the parser
fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.is_empty())
}

/// Parse a bound into a UTC instant.
///
/// Accepts `YYYY-MM-DD` (midnight UTC), RFC 3339 timestamps (converted to UTC)
/// and naive `YYYY-MM-DDTHH:MM:SS`, read as UTC.
pub fn parse_utc_instant(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.with_timezone(&Utc).naive_utc());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// UTC calendar date of a bound, time of day discarded
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    parse_utc_instant(raw).map(|instant| instant.date())
}
