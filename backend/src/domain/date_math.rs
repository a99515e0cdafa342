//! Calendar date arithmetic for the dashboard.
//!
//! Every value here is a plain (year, month, day) triple. Nothing in this
//! module reads the host timezone: "today" is taken from UTC and all
//! comparisons and month arithmetic operate on the date triple only.

use chrono::{Datelike, Days, Months, NaiveDate, Utc};
use shared::Locale;
use std::cmp::Ordering;
use std::fmt;

/// A date with no time of day and no timezone
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from its components; `None` if the day does not exist
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Today's date in UTC
    pub fn today_utc() -> Self {
        Self(Utc::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month number, 1-12
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// (year, month) pair identifying this date's calendar month
    pub fn year_month(&self) -> (i32, u32) {
        (self.year(), self.month())
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    pub fn add_days(&self, days: u64) -> Option<Self> {
        self.0.checked_add_days(Days::new(days)).map(Self)
    }

    pub fn sub_days(&self, days: u64) -> Option<Self> {
        self.0.checked_sub_days(Days::new(days)).map(Self)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_iso(*self))
    }
}

/// Parse a strict `YYYY-MM-DD` string.
///
/// Any other shape, non-digit component or impossible day yields `None`.
pub fn parse_iso(value: &str) -> Option<CalendarDate> {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_only = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_only {
        return None;
    }

    let year = value[0..4].parse::<i32>().ok()?;
    let month = value[5..7].parse::<u32>().ok()?;
    let day = value[8..10].parse::<u32>().ok()?;
    CalendarDate::from_ymd(year, month, day)
}

/// Zero-padded `YYYY-MM-DD`
pub fn to_iso(date: CalendarDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Display string for a date in the given locale
pub fn format(date: CalendarDate, locale: Locale) -> String {
    match locale {
        Locale::PtBr => format!("{:02}/{:02}/{:04}", date.day(), date.month(), date.year()),
        Locale::EnUs => format!("{:02}/{:02}/{:04}", date.month(), date.day(), date.year()),
    }
}

/// Like [`format`], but an absent date renders as an empty string
pub fn format_opt(date: Option<CalendarDate>, locale: Locale) -> String {
    date.map(|d| format(d, locale)).unwrap_or_default()
}

/// Format an ISO date string for display; invalid input renders as an empty string
pub fn format_iso_for_display(value: &str, locale: Locale) -> String {
    format_opt(parse_iso(value), locale)
}

pub fn compare(a: CalendarDate, b: CalendarDate) -> Ordering {
    a.cmp(&b)
}

/// Move a date by `months` calendar months (negative moves backwards).
///
/// The day of month is kept, clamped to the length of the target month.
/// Returns `None` only outside the representable date range.
pub fn add_months(date: CalendarDate, months: i32) -> Option<CalendarDate> {
    let naive = date.as_naive();
    let moved = if months >= 0 {
        naive.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        naive.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    moved.map(CalendarDate)
}

/// Number of days in a month (1-12); 0 for an invalid month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Weekday of the first day of a month (0 = Sunday, 1 = Monday, etc.)
pub fn first_weekday_of_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|date| date.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// First day of the date's month
pub fn month_start(date: CalendarDate) -> CalendarDate {
    date.as_naive().with_day(1).map(CalendarDate).unwrap_or(date)
}

/// `YYYY-MM` key of the date's month
pub fn month_key(date: CalendarDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Whole calendar months from `from`'s month to `to`'s month (negative if `to` is earlier)
pub fn months_between(from: CalendarDate, to: CalendarDate) -> i32 {
    (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32
}

pub fn previous_month((year, month): (i32, u32)) -> (i32, u32) {
    if month <= 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

pub fn next_month((year, month): (i32, u32)) -> (i32, u32) {
    if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Three-letter month abbreviation used on chart labels
pub fn month_label(month: u32, locale: Locale) -> &'static str {
    const PT_BR: [&str; 12] = [
        "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
    ];
    const EN_US: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    let labels = match locale {
        Locale::PtBr => &PT_BR,
        Locale::EnUs => &EN_US,
    };
    match month {
        1..=12 => labels[month as usize - 1],
        _ => "",
    }
}

/// Full month name for the picker header
pub fn month_name(month: u32, locale: Locale) -> &'static str {
    match (locale, month) {
        (Locale::PtBr, 1) => "Janeiro",
        (Locale::PtBr, 2) => "Fevereiro",
        (Locale::PtBr, 3) => "Março",
        (Locale::PtBr, 4) => "Abril",
        (Locale::PtBr, 5) => "Maio",
        (Locale::PtBr, 6) => "Junho",
        (Locale::PtBr, 7) => "Julho",
        (Locale::PtBr, 8) => "Agosto",
        (Locale::PtBr, 9) => "Setembro",
        (Locale::PtBr, 10) => "Outubro",
        (Locale::PtBr, 11) => "Novembro",
        (Locale::PtBr, 12) => "Dezembro",
        (Locale::EnUs, 1) => "January",
        (Locale::EnUs, 2) => "February",
        (Locale::EnUs, 3) => "March",
        (Locale::EnUs, 4) => "April",
        (Locale::EnUs, 5) => "May",
        (Locale::EnUs, 6) => "June",
        (Locale::EnUs, 7) => "July",
        (Locale::EnUs, 8) => "August",
        (Locale::EnUs, 9) => "September",
        (Locale::EnUs, 10) => "October",
        (Locale::EnUs, 11) => "November",
        (Locale::EnUs, 12) => "December",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        parse_iso(s).unwrap()
    }

    #[test]
    fn test_parse_iso_accepts_strict_shape() {
        let parsed = parse_iso("2024-03-05").unwrap();
        assert_eq!(parsed.year_month(), (2024, 3));
        assert_eq!(parsed.day(), 5);
    }

    #[test]
    fn test_parse_iso_rejects_other_shapes() {
        assert_eq!(parse_iso(""), None);
        assert_eq!(parse_iso("2024-3-05"), None);
        assert_eq!(parse_iso("2024/03/05"), None);
        assert_eq!(parse_iso("2024-03-05T10:00:00Z"), None);
        assert_eq!(parse_iso("20a4-03-05"), None);
        assert_eq!(parse_iso("+024-03-05"), None);
        assert_eq!(parse_iso("2024-02-30"), None);
        assert_eq!(parse_iso("2024-13-01"), None);
        assert_eq!(parse_iso("not-a-date"), None);
    }

    #[test]
    fn test_iso_round_trip() {
        for s in ["2024-01-01", "2024-02-29", "1999-12-31", "0042-07-04"] {
            let parsed = parse_iso(s);
            assert_eq!(parsed.and_then(|d| parse_iso(&to_iso(d))), parsed);
            assert_eq!(to_iso(parsed.unwrap()), s);
        }
    }

    #[test]
    fn test_format_by_locale() {
        let d = date("2024-03-05");
        assert_eq!(format(d, Locale::PtBr), "05/03/2024");
        assert_eq!(format(d, Locale::EnUs), "03/05/2024");
        assert_eq!(format_opt(None, Locale::PtBr), "");
        assert_eq!(format_iso_for_display("garbage", Locale::PtBr), "");
        assert_eq!(format_iso_for_display("2024-12-25", Locale::PtBr), "25/12/2024");
    }

    #[test]
    fn test_compare() {
        assert_eq!(compare(date("2024-01-01"), date("2024-01-02")), Ordering::Less);
        assert_eq!(compare(date("2024-01-02"), date("2024-01-02")), Ordering::Equal);
        assert_eq!(compare(date("2025-01-01"), date("2024-12-31")), Ordering::Greater);
    }

    #[test]
    fn test_add_months_clamps_day() {
        assert_eq!(add_months(date("2024-01-15"), 1), Some(date("2024-02-15")));
        assert_eq!(add_months(date("2024-01-31"), 1), Some(date("2024-02-29")));
        assert_eq!(add_months(date("2023-01-31"), 1), Some(date("2023-02-28")));
        assert_eq!(add_months(date("2024-11-30"), 3), Some(date("2025-02-28")));
        assert_eq!(add_months(date("2024-03-31"), -1), Some(date("2024-02-29")));
        assert_eq!(add_months(date("2024-01-10"), -13), Some(date("2022-12-10")));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 1), 31);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2024, 13), 0);
    }

    #[test]
    fn test_is_leap_year() {
        assert!(!is_leap_year(2025));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
    }

    #[test]
    fn test_first_weekday_of_month() {
        // 2024-05-01 was a Wednesday, 2024-09-01 a Sunday
        assert_eq!(first_weekday_of_month(2024, 5), 3);
        assert_eq!(first_weekday_of_month(2024, 9), 0);
    }

    #[test]
    fn test_month_helpers() {
        assert_eq!(month_start(date("2024-05-17")), date("2024-05-01"));
        assert_eq!(month_key(date("2024-05-17")), "2024-05");
        assert_eq!(months_between(date("2024-01-31"), date("2024-04-01")), 3);
        assert_eq!(months_between(date("2023-11-15"), date("2024-02-15")), 3);
        assert_eq!(months_between(date("2024-05-01"), date("2024-04-30")), -1);
        assert_eq!(previous_month((2025, 1)), (2024, 12));
        assert_eq!(previous_month((2025, 6)), (2025, 5));
        assert_eq!(next_month((2025, 12)), (2026, 1));
        assert_eq!(next_month((2025, 6)), (2025, 7));
    }

    #[test]
    fn test_month_labels() {
        assert_eq!(month_label(2, Locale::PtBr), "Fev");
        assert_eq!(month_label(2, Locale::EnUs), "Feb");
        assert_eq!(month_label(13, Locale::PtBr), "");
        assert_eq!(month_name(3, Locale::PtBr), "Março");
        assert_eq!(month_name(12, Locale::EnUs), "December");
    }

    #[test]
    fn test_day_offsets() {
        let d = date("2024-02-28");
        assert_eq!(d.add_days(1), Some(date("2024-02-29")));
        assert_eq!(d.add_days(2), Some(date("2024-03-01")));
        assert_eq!(date("2024-03-01").sub_days(1), Some(date("2024-02-29")));
        assert_eq!(d.to_string(), "2024-02-28");
    }
}
