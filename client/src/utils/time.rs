//! # Time Helpers
//!
//! Fractional-hour clock position, as the recommendation endpoint expects.

use chrono::{DateTime, Local, TimeZone, Timelike};

/// Clock position of `t` as fractional hours in `[0, 24)`.
///
/// 9:15:00 becomes 9.25. The recommendation engine keys off this, so the
/// conversion ignores the date entirely.
pub fn fractional_hour<Tz: TimeZone>(t: &DateTime<Tz>) -> f64 {
    f64::from(t.hour())
        + f64::from(t.minute()) / 60.0
        + f64::from(t.second()) / 3600.0
}

/// Current wall-clock position in the device's local timezone.
pub fn local_fractional_hour() -> f64 {
    fractional_hour(&Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 4, 18, h, m, s).unwrap()
    }

    #[test]
    fn test_quarter_past_nine_is_nine_point_two_five() {
        assert!((fractional_hour(&at(9, 15, 0)) - 9.25).abs() < 1e-9);
    }

    #[test]
    fn test_seconds_contribute() {
        let got = fractional_hour(&at(23, 59, 59));
        assert!((got - (23.0 + 59.0 / 60.0 + 59.0 / 3600.0)).abs() < 1e-9);
        assert!(got < 24.0);
    }

    #[test]
    fn test_midnight_is_zero() {
        assert_eq!(fractional_hour(&at(0, 0, 0)), 0.0);
    }
}
