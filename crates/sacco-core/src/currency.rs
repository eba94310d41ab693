//! Currency display helpers

/// Format whole currency units as US dollars: `25000` → `"$25,000.00"`.
pub fn format_currency(amount: u64) -> String {
    format!("${}.00", group_thousands(amount))
}

/// Insert `,` separators every three digits.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a percentage change with an explicit sign and one decimal.
pub fn format_change(percent: f64) -> String {
    if percent >= 0.0 {
        format!("+{percent:.1}%")
    } else {
        format!("{percent:.1}%")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0), "$0.00");
        assert_eq!(format_currency(999), "$999.00");
        assert_eq!(format_currency(1_000), "$1,000.00");
        assert_eq!(format_currency(25_000), "$25,000.00");
        assert_eq!(format_currency(120_000), "$120,000.00");
        assert_eq!(format_currency(1_234_567), "$1,234,567.00");
    }

    #[test]
    fn test_group_thousands_edges() {
        assert_eq!(group_thousands(100), "100");
        assert_eq!(group_thousands(100_000), "100,000");
        assert_eq!(group_thousands(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(12.068), "+12.1%");
        assert_eq!(format_change(0.0), "+0.0%");
        assert_eq!(format_change(-3.25), "-3.2%");
    }
}
