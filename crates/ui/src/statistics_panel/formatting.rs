//! Number formatting for the statistics tables.
//!
//! All helpers emit `.` as the decimal separator; callers localize with
//! `LocalizationState::localize_decimal`.

const UNITS: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

/// Compact amount: two decimals at most, `K`/`M`/`B`/`T` from a thousand up.
pub fn fmt_number(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    let abs = value.abs();
    for (scale, suffix) in UNITS {
        if abs >= scale {
            return format!("{}{}", trim_decimals(value / scale, 2), suffix);
        }
    }
    trim_decimals(value, 2)
}

/// Formats a fraction (0.0..1.0) as "XX.X%".
pub fn fmt_percent(fraction: f64) -> String {
    if !fraction.is_finite() {
        return "-".to_string();
    }
    format!("{:.1}%", fraction * 100.0)
}

/// Formats an already-scaled percentage (0..100) as "XX%".
pub fn fmt_progress(percent: f64) -> String {
    if !percent.is_finite() {
        return "-".to_string();
    }
    format!("{:.0}%", percent)
}

fn trim_decimals(value: f64, places: usize) -> String {
    let s = format!("{:.*}", places, value);
    let trimmed = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_number_small() {
        assert_eq!(fmt_number(0.0), "0");
        assert_eq!(fmt_number(5.0), "5");
        assert_eq!(fmt_number(2.5), "2.5");
        assert_eq!(fmt_number(0.126), "0.13");
        assert_eq!(fmt_number(999.0), "999");
    }

    #[test]
    fn test_fmt_number_suffixes() {
        assert_eq!(fmt_number(1_000.0), "1K");
        assert_eq!(fmt_number(1_500.0), "1.5K");
        assert_eq!(fmt_number(12_346.0), "12.35K");
        assert_eq!(fmt_number(2_000_000.0), "2M");
        assert_eq!(fmt_number(3_250_000_000.0), "3.25B");
        assert_eq!(fmt_number(7e12), "7T");
    }

    #[test]
    fn test_fmt_number_negative() {
        assert_eq!(fmt_number(-1_500.0), "-1.5K");
        assert_eq!(fmt_number(-0.001), "0");
        assert_eq!(fmt_number(-0.0), "0");
    }

    #[test]
    fn test_fmt_number_non_finite() {
        assert_eq!(fmt_number(f64::NAN), "-");
        assert_eq!(fmt_number(f64::INFINITY), "-");
    }

    #[test]
    fn test_fmt_percent() {
        assert_eq!(fmt_percent(0.0), "0.0%");
        assert_eq!(fmt_percent(0.5), "50.0%");
        assert_eq!(fmt_percent(0.857), "85.7%");
        assert_eq!(fmt_percent(f64::NAN), "-");
    }

    #[test]
    fn test_fmt_progress() {
        assert_eq!(fmt_progress(0.0), "0%");
        assert_eq!(fmt_progress(30.0), "30%");
        assert_eq!(fmt_progress(100.0), "100%");
        assert_eq!(fmt_progress(f64::INFINITY), "-");
    }
}
