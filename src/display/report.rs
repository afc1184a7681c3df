//! Report formatting utilities for terminal output
//!
//! Shared helpers for the dashboard and report layouts. Widths are counted in
//! characters since account and category names are often accented.

use crate::models::Money;

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for an amount scaled against the largest amount on the chart
pub fn format_money_bar(amount: Money, peak: Money, width: usize) -> String {
    format_bar(amount.cents() as f64, peak.cents() as f64, width)
}

/// Format a header line with padding
pub fn format_header(title: &str, width: usize) -> String {
    let len = title.chars().count();
    let padding = if len >= width { 0 } else { (width - len) / 2 };
    format!("{}{}", " ".repeat(padding), title)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Left-align text in a field of given width
pub fn left_align(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(0.0, 100.0, 4), "    ");
        assert_eq!(format_bar(10.0, 0.0, 3), "   ");
    }

    #[test]
    fn test_format_money_bar_full_at_peak() {
        let bar = format_money_bar(Money::from_cents(500), Money::from_cents(500), 8);
        assert_eq!(bar, "████████");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Test", 4), "Test");
        assert_eq!(truncate("Cuenta Líquida Principal", 10), "Cuenta ...");
    }

    #[test]
    fn test_alignment_counts_chars() {
        assert_eq!(left_align("abc", 5), "abc  ");
        assert_eq!(left_align("Líq", 5), "Líq  ");
        assert_eq!(format_header("Hi", 6), "  Hi");
    }
}
