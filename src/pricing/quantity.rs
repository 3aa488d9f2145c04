use std::sync::LazyLock;

use regex::Regex;

static FIRST_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(\.[0-9]+)?").expect("quantity pattern is valid"));

/// Extracts the multiplier from a free-text quantity such as `"2"`, `"1kg"` or
/// `"2,5 litros"`.
///
/// Only the first decimal comma is treated as a decimal point. Anything without a
/// positive number in it counts as one unit.
pub fn parse_quantity(quantity: Option<&str>) -> f64 {
    let Some(raw) = quantity else {
        return 1.0;
    };
    let normalized = raw.replacen(',', ".", 1);
    FIRST_NUMBER
        .find(&normalized)
        .and_then(|found| found.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value > 0.0)
        .unwrap_or(1.0)
}

#[cfg(test)]
mod tests {
    use super::parse_quantity;

    #[test]
    fn missing_or_textual_quantity_defaults_to_one() {
        assert_eq!(parse_quantity(None), 1.0);
        assert_eq!(parse_quantity(Some("")), 1.0);
        assert_eq!(parse_quantity(Some("uma dúzia")), 1.0);
    }

    #[test]
    fn decimal_comma_is_normalized() {
        assert_eq!(parse_quantity(Some("2,5kg")), 2.5);
        assert_eq!(parse_quantity(Some("0,75 l")), 0.75);
    }

    #[test]
    fn non_positive_values_fall_back_to_one() {
        assert_eq!(parse_quantity(Some("0 un")), 1.0);
        assert_eq!(parse_quantity(Some("0.0")), 1.0);
    }

    #[test]
    fn first_number_wins() {
        assert_eq!(parse_quantity(Some("3 pacotes de 500g")), 3.0);
        assert_eq!(parse_quantity(Some("pacote com 12")), 12.0);
        assert_eq!(parse_quantity(Some("1kg")), 1.0);
    }

    #[test]
    fn trailing_dot_is_not_part_of_the_number() {
        assert_eq!(parse_quantity(Some("4. unidades")), 4.0);
    }

    #[test]
    fn only_ascii_digits_count() {
        assert_eq!(parse_quantity(Some("٣ caixas, 2kg")), 2.0);
        assert_eq!(parse_quantity(Some("٣ caixas")), 1.0);
    }
}
