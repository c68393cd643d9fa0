//! Canonical local-date keys.
//!
//! Every per-day record is keyed by an ISO `YYYY-MM-DD` string naming a
//! **local** calendar day. Internally the engine works on
//! [`chrono::NaiveDate`], which carries no timezone and so cannot shift a
//! key across midnight the way a UTC round-trip would; the helpers here
//! are the only place strings and dates meet.

use chrono::{DateTime, Datelike, Local, NaiveDate};

use crate::error::ValidationError;

/// Format string for date keys.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Format a calendar date as a `YYYY-MM-DD` key.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Format an instant's local calendar day as a `YYYY-MM-DD` key.
///
/// Two calls on the same local calendar day always agree, regardless of
/// time of day or DST transitions.
pub fn local_date_key(instant: &DateTime<Local>) -> String {
    date_key(instant.date_naive())
}

/// Today's local calendar date.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` key back into a calendar date.
///
/// # Errors
/// Returns [`ValidationError::InvalidDateKey`] for anything that is not a
/// well-formed calendar date in that exact format.
pub fn parse_date_key(key: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT)
        .map_err(|_| ValidationError::InvalidDateKey(key.to_string()))
}

/// Weekday index of a date: 0 = Sunday through 6 = Saturday.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Weekday index of a `YYYY-MM-DD` key.
///
/// # Errors
/// Returns [`ValidationError::InvalidDateKey`] if the key is malformed.
pub fn weekday_of(key: &str) -> Result<u8, ValidationError> {
    Ok(weekday_index(parse_date_key(key)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn key_format_is_zero_padded() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(date_key(d), "2024-03-05");
    }

    #[test]
    fn key_round_trips() {
        let d = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(parse_date_key(&date_key(d)).unwrap(), d);
    }

    #[test]
    fn weekday_index_is_sunday_based() {
        // 2024-01-07 was a Sunday, 2024-01-01 a Monday.
        let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(weekday_index(sunday), 0);
        assert_eq!(weekday_index(monday), 1);
    }

    #[test]
    fn weekday_of_round_trips_through_key() {
        let mut d = NaiveDate::from_ymd_opt(2024, 2, 25).unwrap();
        for _ in 0..14 {
            assert_eq!(weekday_of(&date_key(d)).unwrap(), weekday_index(d));
            d = d.succ_opt().unwrap();
        }
    }

    #[test]
    fn local_key_is_stable_across_the_day() {
        // Same local calendar day at both ends of the clock.
        let early = Local.with_ymd_and_hms(2024, 3, 10, 0, 0, 1).unwrap();
        let late = Local.with_ymd_and_hms(2024, 3, 10, 23, 59, 59).unwrap();
        assert_eq!(local_date_key(&early), "2024-03-10");
        assert_eq!(local_date_key(&late), "2024-03-10");
    }

    #[test]
    fn malformed_keys_are_rejected() {
        for bad in ["2024/01/01", "2024-13-01", "2024-02-30", "not-a-date", ""] {
            assert!(parse_date_key(bad).is_err(), "accepted {bad:?}");
        }
    }
}
