//! Date text helpers for the product form.
//!
//! The form shows `DD/MM/YYYY`; the wire carries ISO dates. Conversions are
//! textual and tolerate malformed input by passing it through.

use chrono::{Datelike, Local, NaiveDate};

const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Formats a date as `DD/MM/YYYY`
pub fn format_display(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Parses a `DD/MM/YYYY` string into a real calendar date.
///
/// Only ASCII digits are accepted, two for day and month and four for year.
pub fn parse_display(text: &str) -> Option<NaiveDate> {
    let mut parts = text.split('/');
    let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let digits = |part: &str, len: usize| part.len() == len && part.bytes().all(|b| b.is_ascii_digit());
    if !(digits(day, 2) && digits(month, 2) && digits(year, 4)) {
        return None;
    }

    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

/// Keeps the digits of `text` (at most 8) and inserts slashes as they are
/// typed: `01012030` becomes `01/01/2030`, `0101` becomes `01/01`.
pub fn mask_date_input(text: &str) -> String {
    let mut masked = String::with_capacity(10);
    for (i, digit) in text.chars().filter(char::is_ascii_digit).take(8).enumerate() {
        if i == 2 || i == 4 {
            masked.push('/');
        }
        masked.push(digit);
    }
    masked
}

/// Same day one year later; 29 February rolls over to 1 March.
pub fn revision_date_for(release: NaiveDate) -> NaiveDate {
    let year = release.year() + 1;
    NaiveDate::from_ymd_opt(year, release.month(), release.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(release)
}

/// `2025-01-31T00:00:00.000Z` or `2025-01-31` to `31/01/2025`.
///
/// Text that does not split into three `-` parts comes back as its date part.
pub fn iso_to_display(iso: &str) -> String {
    let date_part = iso_date_part(iso);
    let parts: Vec<&str> = date_part.split('-').collect();
    match parts.as_slice() {
        [year, month, day] => format!("{}/{}/{}", day, month, year),
        _ => date_part.to_string(),
    }
}

/// `31/01/2025` to `2025-01-31`; anything else is returned unchanged
pub fn display_to_iso(display: &str) -> String {
    let parts: Vec<&str> = display.split('/').collect();
    match parts.as_slice() {
        [day, month, year] => format!("{}-{}-{}", year, month, day),
        _ => display.to_string(),
    }
}

/// Date portion of an ISO string: before `T`, otherwise the first 10 chars
pub(crate) fn iso_date_part(iso: &str) -> &str {
    match iso.split_once('T') {
        Some((date, _)) => date,
        None => match iso.char_indices().nth(10) {
            Some((end, _)) => &iso[..end],
            None => iso,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_mask_date_input() {
        assert_eq!(mask_date_input(""), "");
        assert_eq!(mask_date_input("01"), "01");
        assert_eq!(mask_date_input("010"), "01/0");
        assert_eq!(mask_date_input("0101"), "01/01");
        assert_eq!(mask_date_input("01012030"), "01/01/2030");
        assert_eq!(mask_date_input("01/01/2030"), "01/01/2030");
        assert_eq!(mask_date_input("0101203099"), "01/01/2030");
        assert_eq!(mask_date_input("ab12-"), "12");
    }

    #[test]
    fn test_revision_date_for() {
        assert_eq!(revision_date_for(date(2025, 3, 15)), date(2026, 3, 15));
        assert_eq!(revision_date_for(date(2024, 2, 29)), date(2025, 3, 1));
        assert_eq!(revision_date_for(date(2025, 12, 31)), date(2026, 12, 31));
    }

    #[test]
    fn test_iso_display_conversions() {
        assert_eq!(iso_to_display("2025-01-31T00:00:00.000Z"), "31/01/2025");
        assert_eq!(iso_to_display("2025-01-31"), "31/01/2025");
        assert_eq!(iso_to_display("garbage"), "garbage");
        assert_eq!(iso_to_display(""), "");
        assert_eq!(display_to_iso("31/01/2025"), "2025-01-31");
        assert_eq!(display_to_iso("31-01-2025"), "31-01-2025");
    }

    #[test]
    fn test_parse_display_requires_real_dates() {
        assert_eq!(parse_display("31/01/2025"), Some(date(2025, 1, 31)));
        assert_eq!(parse_display("31/02/2025"), None);
        assert_eq!(parse_display("aa/bb/cccc"), None);
        assert_eq!(parse_display("01/01"), None);
        assert_eq!(parse_display("+1/+1/2030"), None);
        assert_eq!(parse_display(" 1/01/2030"), None);
        assert_eq!(parse_display("1/1/2030"), None);
        assert_eq!(parse_display("01/01/02030"), None);
        assert_eq!(format_display(date(2025, 1, 5)), "05/01/2025");
    }

    #[test]
    fn test_iso_date_part() {
        assert_eq!(iso_date_part("2025-01-31T10:00:00Z"), "2025-01-31");
        assert_eq!(iso_date_part("2025-01-31 10:00"), "2025-01-31");
        assert_eq!(iso_date_part("2025"), "2025");
    }
}
