//! Date parsing and formatting katas.

use crate::error::{KataError, Result};
use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use std::f64::consts::PI;

const LONG_FORM: &str = "%B %d, %Y %H:%M:%S";

/// Parses an RFC 2822 date into a UTC timestamp.
///
/// Besides strict RFC 2822 (`Tue, 26 Jan 2016 13:48:02 GMT`) two common
/// variants are accepted:
/// - a `GMT+h`, `GMT+hh` or `GMT-hhmm` zone suffix, e.g. `Sun, 17 May 1998 03:00:00 GMT+01`;
/// - the long form `December 17, 1995 03:24:00`, read as UTC.
///
/// # Examples
/// ```
/// use kata_solver::dates::parse_rfc2822;
///
/// let ts = parse_rfc2822("Sun, 17 May 1998 03:00:00 GMT+01").unwrap();
/// assert_eq!(ts.to_rfc3339(), "1998-05-17T02:00:00+00:00");
/// ```
pub fn parse_rfc2822(value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();
    let normalized = normalize_gmt_offset(value)?;
    if let Ok(dt) = DateTime::parse_from_rfc2822(&normalized) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, LONG_FORM)
        .map(|naive| naive.and_utc())
        .map_err(|e| KataError::parse(value, e))
}

/// Parses an ISO 8601 date-time with an explicit offset into a UTC timestamp.
pub fn parse_iso8601(value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| KataError::parse(value, e))
}

// `GMT+1` -> `+0100`, `GMT+01` -> `+0100`, `GMT-0530` -> `-0530`. Values
// without a `GMT` sign suffix are returned as is.
fn normalize_gmt_offset(value: &str) -> Result<String> {
    let Some((head, zone)) = value.rsplit_once(' ') else {
        return Ok(value.to_string());
    };
    let Some(offset) = zone.strip_prefix("GMT") else {
        return Ok(value.to_string());
    };
    let Some(digits) = offset.strip_prefix(['+', '-']) else {
        return Ok(value.to_string());
    };
    let sign = &offset[..1];
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(KataError::parse(value, format!("invalid GMT offset {:?}", zone)));
    }
    match digits.len() {
        1 | 2 => Ok(format!("{} {}{:0>2}00", head, sign, digits)),
        4 => Ok(format!("{} {}{}", head, sign, digits)),
        n => Err(KataError::parse(
            value,
            format!("GMT offset must have 1, 2 or 4 digits, found {}", n),
        )),
    }
}

/// Returns true for leap years of the Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    if year % 4 != 0 {
        false
    } else if year % 100 != 0 {
        true
    } else {
        year % 400 == 0
    }
}

/// Formats the span between two times as `HH:mm:ss.sss`.
///
/// Each field is the difference of the corresponding clock fields of `end`
/// and `start`, not the true elapsed duration. Spans crossing a field
/// boundary therefore produce negative components, which are padded the same
/// way as positive ones (`-1` hours renders as `0-1`).
pub fn time_span_to_string(start: &NaiveDateTime, end: &NaiveDateTime) -> String {
    let h = end.hour() as i64 - start.hour() as i64;
    let m = end.minute() as i64 - start.minute() as i64;
    let s = end.second() as i64 - start.second() as i64;
    let ms = millis(end) - millis(start);
    format!(
        "{}:{}:{}.{}",
        pad_field(h, 2),
        pad_field(m, 2),
        pad_field(s, 2),
        pad_field(ms, 3)
    )
}

fn millis(t: &NaiveDateTime) -> i64 {
    (t.nanosecond() / 1_000_000).min(999) as i64
}

// Left-pads with zeros while the value is below the next power of ten.
fn pad_field(value: i64, width: u32) -> String {
    let mut out = value.to_string();
    for power in 1..width {
        if value <= 10_i64.pow(power) - 1 {
            out.insert(0, '0');
        }
    }
    out
}

/// Returns the angle in radians, within `[0, π]`, between the hour and
/// minute hands of an analog clock at `hour:minute` (24-hour clock).
pub fn angle_between_clock_hands(hour: u32, minute: u32) -> f64 {
    let h = (hour % 24) as f64;
    let h = if h > 12.0 { h - 12.0 } else { h };
    let m = minute as f64;
    let deg = (0.5 * (60.0 * h - 11.0 * m)).abs() % 360.0;
    let deg = if deg > 180.0 { 360.0 - deg } else { deg };
    deg * PI / 180.0
}
