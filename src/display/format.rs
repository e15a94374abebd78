//! Formatting helpers shared by the display modules

/// Format an amount with a currency symbol, e.g. `-$12.50`
pub fn format_amount(amount: f64, symbol: &str) -> String {
    let cents = (amount * 100.0).round() as i64;
    let magnitude = cents.unsigned_abs();
    let (dollars, cents_part) = (magnitude / 100, magnitude % 100);

    if cents < 0 {
        format!("-{}{}.{:02}", symbol, dollars, cents_part)
    } else {
        format!("{}{}.{:02}", symbol, dollars, cents_part)
    }
}

/// Format a whole-number rate
pub fn format_percentage(rate: i64) -> String {
    format!("{}%", rate)
}

/// Progress bar with a count, e.g. `[███░░░] 1/2`
pub fn format_progress_bar(completed: u32, total: u32, width: usize) -> String {
    let filled = if total == 0 {
        width
    } else {
        ((completed as f64 / total as f64) * width as f64).round() as usize
    };
    let filled = filled.min(width);

    format!(
        "[{}{}] {}/{}",
        "█".repeat(filled),
        "░".repeat(width - filled),
        completed,
        total
    )
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

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}
