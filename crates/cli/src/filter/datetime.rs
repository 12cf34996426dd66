// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Datetime literals for date filter fields.
//!
//! Accepts either a relative expression anchored at the current time or an
//! ISO-8601 date/datetime, and renders both in the backend's canonical form:
//!
//! ```text
//! now            2023-02-02 02:02:02.222222
//! now-1h         2023-02-02 01:02:02.222222
//! 2023-01-01     2023-01-01 00:00:00
//! 2023-02-14T10:09:07.060011Z   2023-02-14 10:09:07.060011+00:00
//! ```

use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use regex::Regex;

use super::error::{FilterError, Result};

// `now`, an optional signed offset, an optional unit (days when omitted).
static RELATIVE_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"^now([+-]\d+)?(ms|s|m|h|d)?$") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

// Fixed-width ISO-8601 date, optionally followed by a time and a UTC offset.
// Both extended (`2023-02-14T10:09:07+02:00`) and basic (`20230214T100907+0200`)
// spellings are accepted.
static ISO_RE: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(concat!(
        r"^(?P<year>\d{4})(?:-(?P<month>\d{2})-(?P<day>\d{2})|(?P<bmonth>\d{2})(?P<bday>\d{2}))",
        r"(?:[Tt ](?P<hour>\d{2})(?::?(?P<minute>\d{2})(?::?(?P<second>\d{2})(?:[.,](?P<frac>\d+))?)?)?",
        r"(?P<tz>[Zz]|(?P<sign>[+-])(?P<tzh>\d{2})(?::?(?P<tzm>\d{2}))?)?)?$",
    )) {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    }
});

/// An absolute point in time as it will be sent to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    /// Wall-clock date and time (in `offset` when one is present).
    pub datetime: NaiveDateTime,
    /// UTC offset carried by the source literal, if any.
    pub offset: Option<FixedOffset>,
    /// Whether the source literal spelled out a fractional second.
    pub subsec: bool,
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.datetime.format("%Y-%m-%d %H:%M:%S"))?;

        let micros = self.datetime.nanosecond() / 1_000;
        if self.subsec || micros != 0 {
            write!(f, ".{micros:06}")?;
        }

        if let Some(offset) = self.offset {
            let secs = offset.local_minus_utc();
            let sign = if secs < 0 { '-' } else { '+' };
            let secs = secs.unsigned_abs();
            write!(f, "{sign}{:02}:{:02}", secs / 3600, (secs % 3600) / 60)?;
        }
        Ok(())
    }
}

/// Adapt a datetime literal to the backend's canonical timestamp string.
///
/// # Errors
///
/// Returns [`FilterError::InvalidDatetime`] when `literal` is neither a
/// relative expression nor a parseable ISO-8601 date/datetime.
pub fn adapt_datetime(literal: &str, now: DateTime<Utc>) -> Result<String> {
    let stamp = match resolve_relative(literal, now)? {
        Some(resolved) => Timestamp {
            datetime: resolved.naive_utc(),
            offset: None,
            subsec: false,
        },
        None => parse_iso(literal)?,
    };
    Ok(stamp.to_string())
}

/// Resolve a `now[+-N][unit]` expression against `now`.
///
/// Returns `Ok(None)` when `literal` is not a relative expression at all.
/// Units are `ms`, `s`, `m`, `h` and `d`; matching ignores case.
pub fn resolve_relative(literal: &str, now: DateTime<Utc>) -> Result<Option<DateTime<Utc>>> {
    let folded = literal.trim().to_lowercase();
    let Some(caps) = RELATIVE_RE.captures(&folded) else {
        return Ok(None);
    };

    let invalid = || FilterError::InvalidDatetime {
        value: literal.to_string(),
    };

    let offset: i64 = match caps.get(1) {
        Some(m) => m.as_str().parse().map_err(|_| invalid())?,
        None => 0,
    };

    let delta = match caps.get(2).map_or("d", |m| m.as_str()) {
        "ms" => Duration::try_milliseconds(offset),
        "s" => Duration::try_seconds(offset),
        "m" => Duration::try_minutes(offset),
        "h" => Duration::try_hours(offset),
        _ => Duration::try_days(offset),
    }
    .ok_or_else(invalid)?;

    now.checked_add_signed(delta).map(Some).ok_or_else(invalid)
}

/// Parse an ISO-8601 date or datetime literal.
///
/// Accepts `T` or a space between date and time, a time of `HH`, `HH:MM`
/// or `HH:MM:SS[.fff]`, and an optional `Z`, `+HH`, `+HHMM` or `+HH:MM`
/// offset. Every field must be zero-padded to its full width. A bare date
/// means midnight. Fractions beyond microseconds are truncated.
pub fn parse_iso(literal: &str) -> Result<Timestamp> {
    let invalid = || FilterError::InvalidDatetime {
        value: literal.to_string(),
    };

    let caps = ISO_RE.captures(literal.trim()).ok_or_else(invalid)?;
    let number = |name: &str| caps.name(name).and_then(|m| m.as_str().parse::<u32>().ok());

    let year = caps
        .name("year")
        .and_then(|m| m.as_str().parse::<i32>().ok())
        .ok_or_else(invalid)?;
    let month = number("month").or_else(|| number("bmonth")).ok_or_else(invalid)?;
    let day = number("day").or_else(|| number("bday")).ok_or_else(invalid)?;
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)?;

    let Some(hour) = number("hour") else {
        return Ok(Timestamp {
            datetime: date.and_time(NaiveTime::MIN),
            offset: None,
            subsec: false,
        });
    };

    let frac = caps.name("frac").map(|m| m.as_str());
    let micros = frac.map_or(Some(0), fraction_micros).ok_or_else(invalid)?;
    let time = NaiveTime::from_hms_micro_opt(
        hour,
        number("minute").unwrap_or(0),
        number("second").unwrap_or(0),
        micros,
    )
    .ok_or_else(invalid)?;

    let offset = match caps.name("tz").map(|m| m.as_str()) {
        None => None,
        Some("Z" | "z") => FixedOffset::east_opt(0),
        Some(_) => {
            let hours = number("tzh").ok_or_else(invalid)?;
            let minutes = number("tzm").unwrap_or(0);
            if minutes >= 60 {
                return Err(invalid());
            }
            let secs = i32::try_from(hours * 3600 + minutes * 60).map_err(|_| invalid())?;
            let secs = match caps.name("sign").map(|m| m.as_str()) {
                Some("-") => -secs,
                _ => secs,
            };
            Some(FixedOffset::east_opt(secs).ok_or_else(invalid)?)
        }
    };

    Ok(Timestamp {
        datetime: date.and_time(time),
        offset,
        subsec: frac.is_some(),
    })
}

/// Microseconds from the digits after the decimal mark, truncated to six places.
fn fraction_micros(digits: &str) -> Option<u32> {
    let kept: String = digits.chars().take(6).collect();
    format!("{kept:0<6}").parse().ok()
}

#[cfg(test)]
#[path = "datetime_tests.rs"]
mod tests;
