use chrono::{Datelike, NaiveDate};

/// "2h 5m"; `None` when the runtime is unknown (zero).
pub fn format_runtime(minutes: u32) -> Option<String> {
    if minutes == 0 {
        return None;
    }
    Some(format!("{}h {}m", minutes / 60, minutes % 60))
}

fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()
}

pub fn release_year(date: &str) -> Option<i32> {
    parse_date(date).map(|d| d.year())
}

/// Card label: the year, or "Unknown" without a usable date.
pub fn year_label(date: &str) -> String {
    release_year(date)
        .map(|y| y.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// "March 31, 1999"
pub fn format_long_date(date: &str) -> Option<String> {
    parse_date(date).map(|d| d.format("%B %-d, %Y").to_string())
}

/// "$63,000,000"
pub fn format_money(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_rating(vote_average: f32) -> String {
    format!("{vote_average:.1}")
}

/// Cut `text` to `width` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_in_hours_and_minutes() {
        assert_eq!(format_runtime(125).as_deref(), Some("2h 5m"));
        assert_eq!(format_runtime(59).as_deref(), Some("0h 59m"));
        assert_eq!(format_runtime(120).as_deref(), Some("2h 0m"));
    }

    #[test]
    fn zero_runtime_is_omitted() {
        assert_eq!(format_runtime(0), None);
    }

    #[test]
    fn release_dates() {
        assert_eq!(release_year("1999-03-30"), Some(1999));
        assert_eq!(year_label(""), "Unknown");
        assert_eq!(year_label("soon"), "Unknown");
        assert_eq!(format_long_date("1999-03-31").as_deref(), Some("March 31, 1999"));
        assert_eq!(format_long_date("2024-01-05").as_deref(), Some("January 5, 2024"));
        assert_eq!(format_long_date(""), None);
    }

    #[test]
    fn money_gets_thousands_separators() {
        assert_eq!(format_money(0), "$0");
        assert_eq!(format_money(999), "$999");
        assert_eq!(format_money(1000), "$1,000");
        assert_eq!(format_money(63_000_000), "$63,000,000");
        assert_eq!(format_money(463_517_383), "$463,517,383");
    }

    #[test]
    fn rating_has_one_decimal() {
        assert_eq!(format_rating(8.216), "8.2");
        assert_eq!(format_rating(7.0), "7.0");
    }

    #[test]
    fn truncate_marks_the_cut() {
        assert_eq!(truncate("Alien", 10), "Alien");
        assert_eq!(truncate("The Lord of the Rings", 8), "The Lor…");
        assert_eq!(truncate("Amélie", 3), "Am…");
    }
}
