use std::borrow::Cow;
use time::Date;

/// Format a calendar date as fixed-width `yyyy-mm-dd`.
///
/// Only the year, month and day are read, so the result never depends on a
/// time zone or locale. `time` limits years to `-9999..=9999`, so the year is
/// always four digits; negative years get a leading `-` in front of them
/// (year -1 is `-0001-01-01`).
pub fn format_date(date: Date) -> String {
    let year = date.year();
    let sign = if year < 0 { "-" } else { "" };
    format!(
        "{sign}{:04}-{:02}-{:02}",
        year.unsigned_abs(),
        u8::from(date.month()),
        date.day()
    )
}

/// Format a priority as the shortest decimal that parses back to the same
/// `f32`.
///
/// Integral values keep a trailing `.0` (`1.0`, `-1.0`), very large or very
/// small magnitudes switch to exponent form (`3.4028235e38`), and non-finite
/// values are written as `NaN`, `inf` and `-inf`. Nothing is rounded or
/// clamped.
pub fn format_priority(priority: f32) -> String {
    format!("{priority:?}")
}

/// Escape special XML characters.
pub fn escape_text(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
