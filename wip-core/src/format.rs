//! Display helpers. Amounts are stored unrounded; rounding happens here only.

pub fn format_money(v: f64) -> String {
    let v = if v.is_finite() { v } else { 0.0 };
    let cents = (v.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if v < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}{grouped}.{frac:02}")
}

pub fn format_hours(h: f64) -> String {
    format!("{h:.2}h")
}

pub fn format_percent(part: f64, whole: f64) -> String {
    if whole == 0.0 {
        return "-".to_string();
    }
    format!("{:.0}%", part / whole * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money() {
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(385.0), "385.00");
        assert_eq!(format_money(1234567.891), "1,234,567.89");
        assert_eq!(format_money(-1000.5), "-1,000.50");
        assert_eq!(format_money(-0.001), "0.00");
        assert_eq!(format_money(f64::NAN), "0.00");
    }

    #[test]
    fn hours_and_percent() {
        assert_eq!(format_hours(1.5), "1.50h");
        assert_eq!(format_percent(45.0, 60.0), "75%");
        assert_eq!(format_percent(1.0, 0.0), "-");
    }
}
