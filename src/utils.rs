pub(crate) fn assert_order_at_least_one(max_order: usize) {
    assert!(max_order >= 1, "n-gram order must be at least 1");
}

// Raw values stay unrounded through the pipeline; this is display precision only.
pub(crate) fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_down() {
        assert_eq!(round_to_hundredths(0.4444), 0.44);
    }

    #[test]
    fn test_round_up() {
        assert_eq!(round_to_hundredths(6.0 / 7.0), 0.86);
    }

    #[test]
    fn test_exact_value_unchanged() {
        assert_eq!(round_to_hundredths(0.25), 0.25);
        assert_eq!(round_to_hundredths(1.0), 1.0);
    }
}
