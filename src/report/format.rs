//! Currency and count formatting for display
//!
//! Whole dollars, en-US grouping: `$16,472`, `-$1,234`.

use crate::estimate::round_half_up;

/// Whole-dollar currency string. Cents round half away from zero.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let negative = rounded < 0.0;
    let digits = group_thousands(&format!("{:.0}", rounded.abs()));

    if negative {
        format!("-${}", digits)
    } else {
        format!("${}", digits)
    }
}

/// Short form for buttons: `$16K` from 16,472. Below 1,000 falls back to `format_currency`.
pub fn format_compact_currency(amount: f64) -> String {
    if amount >= 1000.0 {
        format!("${}K", round_half_up(amount / 1000.0))
    } else {
        format_currency(amount)
    }
}

/// Whole count for "≈ N clients" copy; never negative
pub fn format_whole_count(value: f64) -> u64 {
    round_half_up(value).max(0.0) as u64
}

/// ROI multiple range, e.g. `46x-61x`
pub fn format_multiple_range(low: f64, high: f64) -> String {
    format!("{}x-{}x", low, high)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
