// Display formatting helpers
//
// Mirrors what the dashboard front end renders: abbreviated magnitudes for
// KPI values, grouped digits for row counts, title-cased column names.

/// Format a numeric value with a K/M/B suffix at two decimals. Integers below
/// a thousand render plain; non-finite values render as "N/A".
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "N/A".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1_000_000_000.0 {
        format!("{:.2}B", value / 1_000_000_000.0)
    } else if magnitude >= 1_000_000.0 {
        format!("{:.2}M", value / 1_000_000.0)
    } else if magnitude >= 1_000.0 {
        format!("{:.2}K", value / 1_000.0)
    } else if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
    }
}

/// Format an integer count with comma grouping, e.g. 1234567 -> "1,234,567".
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Convert "unit_price" to "Unit Price".
pub fn format_column_name(name: &str) -> String {
    title_case(&name.replace('_', " "))
}

/// Capitalize the first letter of each whitespace-separated word.
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_suffixes() {
        assert_eq!(format_number(2_500_000_000.0), "2.50B");
        assert_eq!(format_number(1_500_000.0), "1.50M");
        assert_eq!(format_number(1_234.0), "1.23K");
        assert_eq!(format_number(-4_200.0), "-4.20K");
    }

    #[test]
    fn test_format_number_small_values() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(3.14159), "3.14");
        assert_eq!(format_number(f64::NAN), "N/A");
    }

    #[test]
    fn test_format_count_groups_digits() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_column_name() {
        assert_eq!(format_column_name("unit_price"), "Unit Price");
        assert_eq!(format_column_name("region"), "Region");
    }
}
