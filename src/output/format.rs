/// `1234567.891` with `"$"` and 2 decimals becomes `$1,234,567.89`.
pub fn format_currency(value: f64, symbol: &str, decimals: usize) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }

    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };

    let mut out = String::with_capacity(formatted.len() + symbol.len() + 8);
    // no "-$0.00" for values that round to zero
    if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    out.push_str(symbol);
    out.push_str(&group_thousands(int_part));
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

pub fn format_count(count: u32) -> String {
    group_thousands(&count.to_string())
}

/// Up to two decimals, trailing zeros dropped: `24.0` -> `24`, `1.25` -> `1.25`.
pub fn format_plain(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
