//! Formatting helpers for terminal output
//!
//! Amounts are kept as unrounded floats everywhere else; rounding to cents
//! happens only here.

/// Format an amount with a currency symbol and two decimals
pub fn format_amount(amount: f64, symbol: &str) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    // Avoid printing "-$0.00" for tiny negative values
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };

    let whole = format_thousands(rounded.abs().trunc() as u64);
    let cents = ((rounded.abs().fract() * 100.0).round() as u64).min(99);

    if rounded < 0.0 {
        format!("-{}{}.{:02}", symbol, whole, cents)
    } else {
        format!("{}{}.{:02}", symbol, whole, cents)
    }
}

fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(10.5, "$"), "$10.50");
        assert_eq!(format_amount(0.0, "$"), "$0.00");
        assert_eq!(format_amount(-10.5, "$"), "-$10.50");
        assert_eq!(format_amount(0.05, "$"), "$0.05");
        assert_eq!(format_amount(300_000.0, "Rp"), "Rp300,000.00");
        assert_eq!(format_amount(1_234_567.891, "$"), "$1,234,567.89");
    }

    #[test]
    fn test_rounding_only_at_display() {
        assert_eq!(format_amount(1_200_000.0 / 28.0 * 7.0, "$"), "$300,000.00");
        assert_eq!(format_amount(-0.001, "$"), "$0.00");
        assert_eq!(format_amount(2.999, "$"), "$3.00");
    }

    #[test]
    fn test_separator() {
        assert_eq!(separator(3), "---");
    }
}
