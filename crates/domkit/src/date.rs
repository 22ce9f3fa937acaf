//! German long-form date strings, as shown in user-facing timestamps.

use chrono::{Datelike, Local, Timelike};

pub const MONTH_NAMES: [&str; 12] = [
    "Januar", "Februar", "März", "April", "Mai", "Juni",
    "Juli", "August", "September", "Oktober", "November", "Dezember",
];

/// Format a date and time as `D. Month YYYY um HH:MM:SS`.
///
/// The day is not padded; the time is always two digits per field.
///
/// ```
/// use chrono::NaiveDate;
/// use domkit::date::to_date_string;
///
/// let dt = NaiveDate::from_ymd_opt(2024, 3, 5)
///     .and_then(|d| d.and_hms_opt(9, 4, 0))
///     .unwrap();
/// assert_eq!(to_date_string(&dt), "5. März 2024 um 09:04:00");
/// ```
pub fn to_date_string<T: Datelike + Timelike>(date: &T) -> String {
    // month0() is always in 0..12
    let month = MONTH_NAMES[date.month0() as usize];
    format!(
        "{}. {} {} um {:02}:{:02}:{:02}",
        date.day(),
        month,
        date.year(),
        date.hour(),
        date.minute(),
        date.second()
    )
}

/// The current local time as a date string
pub fn now() -> String {
    to_date_string(&Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(year: i32, month: u32, day: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(h, m, s))
            .unwrap()
    }

    #[test]
    fn test_every_month_name() {
        let expected = [
            "Januar", "Februar", "März", "April", "Mai", "Juni",
            "Juli", "August", "September", "Oktober", "November", "Dezember",
        ];
        for (i, name) in expected.iter().enumerate() {
            let dt = at(2023, i as u32 + 1, 15, 12, 30, 45);
            assert_eq!(to_date_string(&dt), format!("15. {name} 2023 um 12:30:45"));
        }
    }

    #[test]
    fn test_time_is_zero_padded() {
        assert_eq!(to_date_string(&at(2024, 1, 1, 0, 0, 0)), "1. Januar 2024 um 00:00:00");
        assert_eq!(to_date_string(&at(1999, 12, 31, 23, 59, 9)), "31. Dezember 1999 um 23:59:09");
        assert_eq!(to_date_string(&at(2020, 2, 29, 7, 5, 3)), "29. Februar 2020 um 07:05:03");
    }

    #[test]
    fn test_now_has_shape() {
        let s = now();
        assert!(s.contains(" um "));
        assert!(MONTH_NAMES.iter().any(|name| s.contains(name)));
    }
}
