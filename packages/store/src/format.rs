//! Display formatting shared by every page.

use chrono::NaiveDate;

/// Shown in place of a missing value.
pub const DASH: &str = "—";

/// Up to two uppercase initials, `?` when there is no name.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split(' ')
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect();
    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

/// The value itself, or [`DASH`] when empty.
pub fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        DASH
    } else {
        value
    }
}

/// Group an integer string the Indian way: last three digits, then pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Rupee amount with Indian digit grouping and at most two decimals,
/// trailing zeros trimmed: `₹1,23,456`, `₹1,500.5`.
pub fn format_inr(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');
    let grouped = group_indian(int_part);
    if frac.is_empty() {
        format!("{sign}₹{grouped}")
    } else {
        format!("{sign}₹{grouped}.{frac}")
    }
}

/// `2024-01-15` (or an ISO timestamp) as `15 Jan 2024`.
///
/// Missing dates show [`DASH`]; unparseable ones are shown verbatim.
pub fn format_date(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|s| !s.is_empty()) else {
        return DASH.to_string();
    };
    let date_part = raw.get(..10).unwrap_or(raw);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%-d %b %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Today's date in `YYYY-MM-DD`, the value format of `<input type="date">`.
pub fn today_iso() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}
