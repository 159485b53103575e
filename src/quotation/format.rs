//! Display formatting for money and quantities

/// Placeholder for fields that do not apply to a vehicle
pub const NOT_APPLICABLE: &str = "N/A";

/// Currency prefix used on every amount
pub const CURRENCY: &str = "KShs";

/// Round to whole units and group thousands with commas
pub fn format_thousands(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    let rounded = format!("{:.0}", amount);
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", rounded.as_str()),
    };
    // -0.4 rounds to "-0"
    let sign = if digits.bytes().all(|b| b == b'0') { "" } else { sign };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{}{}", sign, grouped)
}

/// `KShs 1,234,567`
pub fn format_kshs(amount: f64) -> String {
    format!("{} {}", CURRENCY, format_thousands(amount))
}

/// Optional amount, `N/A` when absent
pub fn format_optional_kshs(amount: Option<f64>) -> String {
    amount.map_or_else(|| NOT_APPLICABLE.to_string(), format_kshs)
}

pub fn format_tonnage(tonnage: f64) -> String {
    format!("{:.1}", tonnage)
}
