//! Numeric extraction from raw scale output
//!
//! Scales pad their display text in odd ways: the sign can sit several
//! columns away from the magnitude (`"-  12.34 g"`), lines may carry units,
//! status words or line noise. Reading the magnitude alone silently turns
//! negative weights positive, so signs are glued back onto their digits
//! before anything is parsed.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// A sign followed by whitespace and then the start of a number
static DETACHED_SIGN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([+-])\s+(\d|\.\d)").expect("valid sign regex")
});

/// Optional sign, mantissa with optional fraction, optional exponent
static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").expect("valid number regex")
});

/// Collapse any sign separated from its digits by whitespace.
///
/// Returns the input unchanged (borrowed) when there is nothing to fix.
pub(crate) fn normalize_signs(line: &str) -> Cow<'_, str> {
    DETACHED_SIGN.replace_all(line, "${1}${2}")
}

/// Extract the first signed number from a line of device output.
///
/// Returns `None` for blank lines, lines without digits, and lines whose
/// first number has a dangling exponent such as `1.5e` or `2E+`. A unit
/// letter touching the number (`5eggs`, `12.3E g`) is not an exponent.
pub(crate) fn extract_value(line: &str) -> Option<f64> {
    let normalized = normalize_signs(line);
    let text: &str = &normalized;
    let m = NUMBER.find(text)?;

    // Regex stops before an incomplete exponent; reject rather than guess.
    if let Some(after) = text[m.end()..].strip_prefix(['e', 'E'])
        && is_dangling_exponent(after)
    {
        return None;
    }

    m.as_str().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// What follows an `e`/`E` that the number pattern did not take
fn is_dangling_exponent(after: &str) -> bool {
    after.trim_end().is_empty() || after.starts_with(['+', '-'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detached_minus_is_recovered() {
        assert_eq!(extract_value("-  12.34"), Some(-12.34));
        assert_eq!(extract_value("-  12.34 g"), Some(-12.34));
        assert_eq!(extract_value("- \t7"), Some(-7.0));
    }

    #[test]
    fn detached_plus_is_recovered() {
        assert_eq!(extract_value("+ 0.5"), Some(0.5));
        assert_eq!(extract_value("+0.00"), Some(0.0));
    }

    #[test]
    fn scale_lines_with_labels_and_units() {
        assert_eq!(extract_value("Net  +123.40 g"), Some(123.40));
        assert_eq!(extract_value("ST,GS,-   0.85kg"), Some(-0.85));
        assert_eq!(extract_value("  42 "), Some(42.0));
    }

    #[test]
    fn negative_zero_is_a_value() {
        let v = extract_value("Net  -0.00 g");
        assert_eq!(v, Some(0.0));
    }

    #[test]
    fn no_digits_means_no_value() {
        assert_eq!(extract_value(""), None);
        assert_eq!(extract_value("ERR"), None);
        assert_eq!(extract_value("Weighing..."), None);
        assert_eq!(extract_value("- -"), None);
        assert_eq!(extract_value("."), None);
    }

    #[test]
    fn first_number_wins() {
        assert_eq!(extract_value("3 items, 4.5 g"), Some(3.0));
        assert_eq!(extract_value("- 1 then -2"), Some(-1.0));
    }

    #[test]
    fn duplicated_signs_keep_the_sign_next_to_digits() {
        assert_eq!(extract_value("--12.5"), Some(-12.5));
        assert_eq!(extract_value("+- 3"), Some(-3.0));
    }

    #[test]
    fn fraction_forms() {
        assert_eq!(extract_value(".5"), Some(0.5));
        assert_eq!(extract_value("- .25"), Some(-0.25));
        assert_eq!(extract_value("12."), Some(12.0));
    }

    #[test]
    fn exponents() {
        assert_eq!(extract_value("1.5e3"), Some(1500.0));
        assert_eq!(extract_value("- 2E-2 g"), Some(-0.02));
        assert_eq!(extract_value("7e+1"), Some(70.0));
    }

    #[test]
    fn malformed_exponent_is_no_match() {
        assert_eq!(extract_value("1.5e"), None);
        assert_eq!(extract_value("2E+"), None);
        assert_eq!(extract_value("3e-x"), None);
    }

    #[test]
    fn unit_letter_after_number_is_not_an_exponent() {
        assert_eq!(extract_value("5eggs"), Some(5.0));
        assert_eq!(extract_value("12.3E g"), Some(12.3));
        assert_eq!(extract_value("- 0.4 Ea"), Some(-0.4));
    }

    #[test]
    fn overflowing_exponent_is_no_match() {
        assert_eq!(extract_value("1e999"), None);
    }

    #[test]
    fn normalize_leaves_clean_lines_borrowed() {
        assert!(matches!(normalize_signs("Net -1.0 g"), Cow::Borrowed(_)));
        assert_eq!(normalize_signs("-  12.34 g"), "-12.34 g");
    }

    #[test]
    fn extraction_is_stable_on_normalized_text() {
        let lines = [
            "-  12.34",
            "+ 0.5",
            "Net  +123.40 g",
            "Net  -0.00 g",
            "ST,GS,-   0.85kg",
            "ERR",
            "",
            "- .25",
            "5eggs",
            "1.5e",
        ];
        for line in lines {
            let normalized = normalize_signs(line);
            assert_eq!(
                extract_value(&normalized),
                extract_value(line),
                "line {line:?}"
            );
            assert_eq!(normalize_signs(&normalized), normalized, "line {line:?}");
        }
    }
}
