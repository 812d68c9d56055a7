//! Number and currency formatting for Indonesian Rupiah (id-ID).

pub const CURRENCY_SYMBOL: &str = "Rp";
pub const THOUSANDS_SEPARATOR: char = '.';
pub const DECIMAL_SEPARATOR: char = ',';

/// Formats a number with id-ID digit grouping and a fixed number of decimals.
///
/// ```rust,ignore
/// assert_eq!(format_number_with_decimals(1234.5, 2), "1.234,50");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let decimals = decimals.min(6) as usize;
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, fraction) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(c);
    }

    let negative = value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { "-" } else { "" };

    match fraction {
        Some(f) => format!("{}{}{}{}", sign, grouped, DECIMAL_SEPARATOR, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Integer with thousands grouping: `1234567.0` -> `"1.234.567"`.
pub fn format_number(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Rupiah amount without decimals: `1500000.0` -> `"Rp 1.500.000"`.
pub fn format_currency(amount: f64) -> String {
    format_currency_with(amount, CURRENCY_SYMBOL, 0)
}

pub fn format_currency_with(amount: f64, symbol: &str, decimals: u8) -> String {
    let number = format_number_with_decimals(amount, decimals);
    match number.strip_prefix('-') {
        Some(abs) => format!("-{} {}", symbol, abs),
        None => format!("{} {}", symbol, number),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "Rp 0");
        assert_eq!(format_currency(1500000.0), "Rp 1.500.000");
        assert_eq!(format_currency(999.0), "Rp 999");
        assert_eq!(format_currency(1000.0), "Rp 1.000");
        assert_eq!(format_currency(-25000.0), "-Rp 25.000");
    }

    #[test]
    fn test_currency_rounds_to_whole_rupiah() {
        assert_eq!(format_currency(1499.6), "Rp 1.500");
        assert_eq!(format_currency(-0.4), "Rp 0");
    }

    #[test]
    fn test_format_currency_with_decimals() {
        assert_eq!(format_currency_with(1234567.891, "Rp", 2), "Rp 1.234.567,89");
        assert_eq!(format_currency_with(12.5, "USD", 2), "USD 12,50");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.0), "1.234.567");
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(-1234.0), "-1.234");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1.234,6");
    }
}
