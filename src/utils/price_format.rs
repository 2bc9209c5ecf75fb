//! Price rendering.

/// Renders a price in its natural decimal form.
///
/// Whole amounts drop the fractional part (`20.0` renders as `20`); other
/// amounts keep the shortest representation that round-trips (`19.5`). No
/// currency rounding or locale grouping is applied.
pub fn format_price(price: f64) -> String {
    price.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_number() {
        assert_eq!(format_price(20.0), "20");
        assert_eq!(format_price(0.0), "0");
        assert_eq!(format_price(1250.0), "1250");
    }

    #[test]
    fn test_fraction() {
        assert_eq!(format_price(19.5), "19.5");
        assert_eq!(format_price(0.25), "0.25");
    }

    #[test]
    fn test_no_rounding() {
        assert_eq!(format_price(9.999), "9.999");
    }
}
