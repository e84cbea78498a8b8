/// Round to two decimal places, halves away from zero.
///
/// Negative zero comes back as `0.0` so a tared scale never logs `-0.00`.
/// Values too large to scale by 100 have no fractional digits left and are
/// returned as they are.
pub(crate) fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value + 0.0;
    }
    scaled.round() / 100.0 + 0.0
}

/// Fixed two-decimal rendering used for the CSV log and console echo
pub(crate) fn format_fixed2(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_half_goes_away_from_zero() {
        assert_eq!(round2(12.345), 12.35);
        assert_eq!(round2(-12.345), -12.35);
        assert_eq!(round2(0.125), 0.13);
    }

    #[test]
    fn round2_keeps_two_decimals() {
        assert_eq!(round2(123.4), 123.4);
        assert_eq!(round2(7.0), 7.0);
        assert_eq!(round2(1.004), 1.0);
    }

    #[test]
    fn round2_clears_negative_zero() {
        let v = round2(-0.0);
        assert!(v.is_sign_positive());
        let v = round2(-0.001);
        assert!(v.is_sign_positive());
        assert_eq!(format_fixed2(v), "0.00");
    }

    #[test]
    fn round2_stays_finite_near_the_top_of_the_range() {
        assert_eq!(round2(1e307), 1e307);
        assert_eq!(round2(-1e307), -1e307);
        assert_eq!(round2(f64::MAX), f64::MAX);
    }

    #[test]
    fn format_fixed2_pads() {
        assert_eq!(format_fixed2(123.4), "123.40");
        assert_eq!(format_fixed2(-5.0), "-5.00");
        assert_eq!(format_fixed2(0.2), "0.20");
    }
}
