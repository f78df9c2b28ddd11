/// Parse a `baseFrequency` value from a raw attribute string.
///
/// The attribute may carry one or two whitespace-delimited numbers
/// (e.g. `"0.0123 0.0123"`); only the first is meaningful here.
/// Returns `None` when the attribute is absent, empty, or non-numeric.
pub fn parse_base_frequency(raw: Option<&str>) -> Option<f64> {
    raw?.split_whitespace().next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_attribute_is_none() {
        assert_eq!(parse_base_frequency(None), None);
    }

    #[test]
    fn empty_attribute_is_none() {
        assert_eq!(parse_base_frequency(Some("")), None);
    }

    #[test]
    fn first_token_wins() {
        assert_eq!(parse_base_frequency(Some("0.0123 0.0123")), Some(0.0123));
    }

    #[test]
    fn non_numeric_token_is_none() {
        assert_eq!(parse_base_frequency(Some("abc def")), None);
    }

    #[test]
    fn leading_whitespace_is_tolerated() {
        assert_eq!(parse_base_frequency(Some("  1.5")), Some(1.5));
    }
}
