// src/core/parse.rs
//! Lenient number/duration readers for scraped text.
//! All of them answer `None` for "unknown" instead of failing.

use std::sync::LazyLock;

use regex::Regex;

static ISO_HOURS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)H").expect("hours pattern"));
static ISO_MINUTES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)M").expect("minutes pattern"));
static TEXT_HOURS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*h").expect("hours pattern"));
static TEXT_MINUTES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*m").expect("minutes pattern"));
static LEADING_YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d{4})").expect("year pattern"));

/// Keep only the digits and parse what is left: `"1,234 votes"` → `1234`.
pub fn parse_int_lenient(text: Option<&str>) -> Option<i64> {
    let digits: String = text?.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// `PT2H10M` → `130`. Missing components count as zero; a zero total is unknown.
pub fn parse_iso_duration_minutes(text: Option<&str>) -> Option<i64> {
    let text = text.filter(|t| !t.is_empty())?;
    hours_and_minutes(first_number(&ISO_HOURS, text), first_number(&ISO_MINUTES, text))
}

/// Display runtimes such as `2h 49m` or `1 h 5 min`. Zero is unknown.
pub fn parse_runtime_text(text: &str) -> Option<i64> {
    hours_and_minutes(first_number(&TEXT_HOURS, text), first_number(&TEXT_MINUTES, text))
}

/// Four digits at the very start of a date string (`2014-11-07` → `2014`).
pub fn leading_year(text: &str) -> Option<i32> {
    LEADING_YEAR
        .captures(text)
        .and_then(|c| c[1].parse().ok())
}

/// Total minutes; zero or out of range is unknown.
fn hours_and_minutes(hours: i64, minutes: i64) -> Option<i64> {
    hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .filter(|total| *total > 0)
}

fn first_number(re: &Regex, text: &str) -> i64 {
    re.captures(text)
        .and_then(|c| c[1].parse::<i64>().ok())
        .unwrap_or(0)
}
