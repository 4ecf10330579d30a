//! Date utilities: the day-key policy shared by the aggregator and the
//! record source, plus period parsing for CLI filters.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use std::fmt;

/// Naive timestamp layouts accepted from the backend (no offset).
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Offset timestamps that RFC 3339 parsing rejects (missing seconds).
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%d %H:%M%:z"];

/// The zone in which instants are truncated to calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceZone {
    #[default]
    Utc,
    Local,
    Named(Tz),
}

impl ReferenceZone {
    /// Accepts `utc`, `local` (any case) or an IANA name like `Europe/Rome`.
    pub fn parse(s: &str) -> AppResult<Self> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "utc" | "z" | "gmt" => Ok(ReferenceZone::Utc),
            "local" => Ok(ReferenceZone::Local),
            _ => trimmed
                .parse::<Tz>()
                .map(ReferenceZone::Named)
                .map_err(|_| AppError::InvalidTimeZone(trimmed.to_string())),
        }
    }

    /// Calendar day of an absolute instant in this zone.
    pub fn date_of(&self, instant: &DateTime<FixedOffset>) -> NaiveDate {
        match self {
            ReferenceZone::Utc => instant.with_timezone(&Utc).date_naive(),
            ReferenceZone::Local => instant.with_timezone(&Local).date_naive(),
            ReferenceZone::Named(tz) => instant.with_timezone(tz).date_naive(),
        }
    }

    pub fn today(&self) -> NaiveDate {
        match self {
            ReferenceZone::Utc => Utc::now().date_naive(),
            ReferenceZone::Local => Local::now().date_naive(),
            ReferenceZone::Named(tz) => Utc::now().with_timezone(tz).date_naive(),
        }
    }
}

impl fmt::Display for ReferenceZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceZone::Utc => write!(f, "UTC"),
            ReferenceZone::Local => write!(f, "local"),
            ReferenceZone::Named(tz) => write!(f, "{}", tz.name()),
        }
    }
}

/// Calendar-day key of a raw backend timestamp.
///
/// Offset timestamps are converted to `zone` first; naive timestamps and
/// plain dates are taken as wall-clock values already in `zone`.
/// Returns `None` for empty or unparsable input.
pub fn day_key(raw: &str, zone: ReferenceZone) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(zone.date_of(&dt));
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(zone.date_of(&dt));
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(ndt.date());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a period filter into an inclusive `(start, end)` pair.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - start:end, both sides in the same format
pub fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidPeriod(p.to_string());

    if let Some((start_raw, end_raw)) = p.split_once(':') {
        let (start, end) = (start_raw.trim(), end_raw.trim());
        if start.len() != end.len() {
            return Err(invalid());
        }
        let (from, _) = single_period(start).ok_or_else(invalid)?;
        let (_, to) = single_period(end).ok_or_else(invalid)?;
        if from > to {
            return Err(invalid());
        }
        return Ok((from, to));
    }

    single_period(p.trim()).ok_or_else(invalid)
}

fn single_period(p: &str) -> Option<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().ok()?;
            Some((
                NaiveDate::from_ymd_opt(y, 1, 1)?,
                NaiveDate::from_ymd_opt(y, 12, 31)?,
            ))
        }
        // YYYY-MM
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d").ok()?;
            Some(month_bounds(first.year(), first.month())?)
        }
        // YYYY-MM-DD
        10 => {
            let d = parse_date(p)?;
            Some((d, d))
        }
        _ => None,
    }
}

/// First and last day of a month.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((first, next.pred_opt()?))
}

pub fn current_month(zone: ReferenceZone) -> AppResult<(NaiveDate, NaiveDate)> {
    let today = zone.today();
    month_bounds(today.year(), today.month())
        .ok_or_else(|| AppError::InvalidDate(today.to_string()))
}

/// Resolve an optional `--period`, defaulting to the current month.
pub fn resolve_period(
    period: &Option<String>,
    zone: ReferenceZone,
) -> AppResult<(NaiveDate, NaiveDate)> {
    match period {
        Some(p) => parse_period(p),
        None => current_month(zone),
    }
}

/// Every day from `start` to `end`, both included.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|d| *d <= end).collect()
}
