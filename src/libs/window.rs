//! Reporting window: the inclusive time span activity is summed over.
//!
//! The service expects both bounds as ISO-8601 timestamps, sent in the
//! `DateStart` and `DateStop` headers.

use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveTime, SecondsFormat, TimeZone};

/// Format accepted on the command line for dates, e.g. `31-12-2024`.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportWindow {
    pub start: String,
    pub end: String,
}

impl ReportWindow {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// The 24 hours of a single local calendar day.
    pub fn for_date(date: NaiveDate) -> Self {
        Self::for_range(date, date)
    }

    /// From the start of `first` to the last microsecond of `last`, local time.
    pub fn for_range(first: NaiveDate, last: NaiveDate) -> Self {
        let start = local_timestamp(first, NaiveTime::MIN);
        let end_of_day = NaiveTime::from_hms_micro_opt(23, 59, 59, 999_999).unwrap_or(NaiveTime::MIN);
        let end = local_timestamp(last, end_of_day);
        Self {
            start: start.to_rfc3339_opts(SecondsFormat::AutoSi, false),
            end: end.to_rfc3339_opts(SecondsFormat::AutoSi, false),
        }
    }
}

fn local_timestamp(date: NaiveDate, time: NaiveTime) -> DateTime<Local> {
    let naive = date.and_time(time);
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        // Wall time skipped by a DST jump.
        LocalResult::None => Local.from_utc_datetime(&naive),
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| format!("Date format incorrect, expected DD-MM-YYYY: {}", e))
}

pub fn yesterday() -> NaiveDate {
    Local::now().date_naive() - Duration::days(1)
}
