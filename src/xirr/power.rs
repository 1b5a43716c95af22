//! Sign-preserving real power

/// `base^exponent`, extended to negative bases with fractional exponents.
///
/// For `exponent < 1` and `base < 0` this returns `-((-base)^exponent)`,
/// keeping the discount factor real while `1 + rate` is transiently negative
/// during iteration. Everything else is ordinary `powf`, so `0^negative`
/// still yields infinity.
pub fn signed_pow(base: f64, exponent: f64) -> f64 {
    if exponent < 1.0 && base < 0.0 {
        -(-base).powf(exponent)
    } else {
        base.powf(exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_positive_base_matches_powf() {
        assert_abs_diff_eq!(signed_pow(1.1, -1.0), 1.0 / 1.1, epsilon = 1e-15);
        assert_abs_diff_eq!(signed_pow(4.0, 0.5), 2.0, epsilon = 1e-15);
        assert_abs_diff_eq!(signed_pow(2.0, 3.0), 8.0, epsilon = 1e-15);
    }

    #[test]
    fn test_negative_base_fractional_exponent() {
        // naive powf would be NaN here
        assert!((-4.0_f64).powf(0.5).is_nan());
        assert_abs_diff_eq!(signed_pow(-4.0, 0.5), -2.0, epsilon = 1e-15);
        assert_abs_diff_eq!(signed_pow(-8.0, -1.0 / 3.0), -0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_base_large_exponent_is_plain_powf() {
        assert_abs_diff_eq!(signed_pow(-2.0, 2.0), 4.0, epsilon = 1e-15);
        assert!(signed_pow(-2.0, 1.5).is_nan());
    }

    #[test]
    fn test_zero_base_negative_exponent() {
        assert!(signed_pow(0.0, -0.5).is_infinite());
    }
}
