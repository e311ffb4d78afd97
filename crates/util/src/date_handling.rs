//! # Date Handling Utilities
//!
//! This module turns compliance dates into status tiers and formats them for
//! display, CSV cells, JSON bodies and export file names. It also parses the
//! dates operators type into the form.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use roster_types::{StatusTier, digits_only};

/// Milliseconds in one calendar day.
pub const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Dates this many days away (inclusive) or fewer count as expiring soon.
pub const EXPIRING_SOON_WINDOW_DAYS: i64 = 30;

/// Number of digits in a fully typed `dd/mm/yyyy` date.
const DATE_INPUT_DIGITS: usize = 8;

/// Accepted shapes for typed dates. chrono alone takes `7/2/25` as year 25.
static DATE_INPUT_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{2}/\d{2}/\d{4}|\d{4}-\d{2}-\d{2}|\d{8})$").expect("valid date pattern"));

/// Whole days from `now` until the start of `date`, rounded up.
///
/// The difference is taken in milliseconds between local midnight of `date`
/// and `now`, then divided by a day with ceiling semantics, so a date a few
/// hours into tomorrow is already one day out and today's date (whose
/// midnight has passed) is zero.
///
/// # Example
/// ```rust
/// use chrono::NaiveDate;
/// use roster_util::date_handling::days_until;
///
/// let now = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap().and_hms_opt(14, 0, 0).unwrap();
/// assert_eq!(days_until(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(), now), 0);
/// assert_eq!(days_until(NaiveDate::from_ymd_opt(2025, 1, 11).unwrap(), now), 1);
/// assert_eq!(days_until(NaiveDate::from_ymd_opt(2025, 1, 9).unwrap(), now), -1);
/// ```
pub fn days_until(date: NaiveDate, now: NaiveDateTime) -> i64 {
    let start_of_date = date.and_time(NaiveTime::MIN);
    let millis = (start_of_date - now).num_milliseconds();
    ceil_div(millis, MILLIS_PER_DAY)
}

/// Integer division rounding toward positive infinity.
fn ceil_div(numerator: i64, denominator: i64) -> i64 {
    let quotient = numerator / denominator;
    if numerator % denominator > 0 { quotient + 1 } else { quotient }
}

/// Classifies a possibly absent compliance date relative to `now`.
pub fn status_for(date: Option<NaiveDate>, now: NaiveDateTime) -> StatusTier {
    let Some(date) = date else {
        return StatusTier::NotProvided;
    };
    match days_until(date, now) {
        days if days < 0 => StatusTier::Expired,
        days if days <= EXPIRING_SOON_WINDOW_DAYS => StatusTier::ExpiringSoon,
        _ => StatusTier::Current,
    }
}

/// `dd/MM/yyyy`, the display and CSV form.
pub fn format_date_ddmmyyyy(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `yyyy-MM-dd`, the JSON form.
pub fn format_date_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `dd-MM-yyyy`, used inside export file names.
pub fn format_file_stamp(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// Parses an operator-typed date.
///
/// Accepts `dd/mm/yyyy`, `yyyy-mm-dd` and eight bare digits (`ddmmyyyy`).
pub fn parse_date_input(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if !DATE_INPUT_SHAPE.is_match(trimmed) {
        return None;
    }
    for format in ["%d/%m/%Y", "%Y-%m-%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    if trimmed.len() == DATE_INPUT_DIGITS && trimmed.chars().all(|c| c.is_ascii_digit()) {
        return NaiveDate::parse_from_str(trimmed, "%d%m%Y").ok();
    }
    None
}

/// Masks typed digits as `dd/mm/yyyy` while the operator types.
///
/// Returns `None` when the edit would exceed eight digits; the caller keeps
/// its previous text.
pub fn format_date_input_progressive(input: &str) -> Option<String> {
    let digits = digits_only(input);
    if digits.len() > DATE_INPUT_DIGITS {
        return None;
    }
    let mut masked = String::with_capacity(10);
    for (index, digit) in digits.chars().enumerate() {
        if index == 2 || index == 4 {
            masked.push('/');
        }
        masked.push(digit);
    }
    Some(masked)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn afternoon(date: NaiveDate) -> NaiveDateTime {
        date.and_hms_opt(15, 30, 0).unwrap()
    }

    #[test]
    fn today_is_expiring_soon() {
        let today = day(2025, 6, 1);
        assert_eq!(status_for(Some(today), afternoon(today)), StatusTier::ExpiringSoon);
        assert_eq!(status_for(Some(today), today.and_time(NaiveTime::MIN)), StatusTier::ExpiringSoon);
    }

    #[test]
    fn window_boundaries() {
        let today = day(2025, 6, 1);
        let now = afternoon(today);
        assert_eq!(status_for(today.checked_add_days(chrono::Days::new(30)), now), StatusTier::ExpiringSoon);
        assert_eq!(status_for(today.checked_add_days(chrono::Days::new(31)), now), StatusTier::Current);
        assert_eq!(status_for(today.checked_sub_days(chrono::Days::new(1)), now), StatusTier::Expired);
    }

    #[test]
    fn absent_date_is_never_current() {
        assert_eq!(status_for(None, afternoon(day(2025, 6, 1))), StatusTier::NotProvided);
    }

    #[test]
    fn partial_days_round_toward_the_future() {
        let now = day(2025, 6, 1).and_hms_opt(23, 0, 0).unwrap();
        assert_eq!(days_until(day(2025, 6, 2), now), 1);
        let early = day(2025, 6, 1).and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(days_until(day(2025, 6, 2), early), 1);
        assert_eq!(days_until(day(2025, 5, 31), early), -1);
    }

    #[test]
    fn formats() {
        let date = day(2025, 2, 7);
        assert_eq!(format_date_ddmmyyyy(date), "07/02/2025");
        assert_eq!(format_date_iso(date), "2025-02-07");
        assert_eq!(format_file_stamp(date), "07-02-2025");
    }

    #[test]
    fn parses_typed_dates() {
        assert_eq!(parse_date_input("07/02/2025"), Some(day(2025, 2, 7)));
        assert_eq!(parse_date_input("2025-02-07"), Some(day(2025, 2, 7)));
        assert_eq!(parse_date_input("07022025"), Some(day(2025, 2, 7)));
        assert_eq!(parse_date_input("31/02/2025"), None);
        assert_eq!(parse_date_input("07/02"), None);
        assert_eq!(parse_date_input(""), None);
    }

    #[test]
    fn short_years_and_loose_digits_are_not_dates() {
        assert_eq!(parse_date_input("7/2/25"), None);
        assert_eq!(parse_date_input("07/02/25"), None);
        assert_eq!(parse_date_input("25-2-7"), None);
        assert_eq!(parse_date_input(" 07/02/2025 "), Some(day(2025, 2, 7)));
    }

    #[test]
    fn masks_dates_while_typing() {
        assert_eq!(format_date_input_progressive("0").as_deref(), Some("0"));
        assert_eq!(format_date_input_progressive("070").as_deref(), Some("07/0"));
        assert_eq!(format_date_input_progressive("07/02/2025").as_deref(), Some("07/02/2025"));
        assert_eq!(format_date_input_progressive("07/02/20251"), None);
    }
}
