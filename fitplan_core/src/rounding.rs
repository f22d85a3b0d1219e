//! Rounding helpers shared by the nutrition and statistics code.
//!
//! All rounding is half-up (ties go towards positive infinity), so `-2.5`
//! rounds to `-2` and `2.5` to `3`.

/// Round to the nearest integer, ties towards positive infinity
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to the nearest integer and convert to `i64`
pub fn round_to_int(value: f64) -> i64 {
    round_half_up(value) as i64
}

/// Round to a fixed number of decimal places
pub fn round_to_places(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    round_half_up(value * factor) / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ties_round_up() {
        assert_eq!(round_to_int(2.5), 3);
        assert_eq!(round_to_int(-2.5), -2);
        assert_eq!(round_to_int(2363.625), 2364);
    }

    #[test]
    fn test_round_to_places() {
        assert_eq!(round_to_places(7.25, 1), 7.3);
        assert_eq!(round_to_places(600.004, 2), 600.0);
        assert_eq!(round_to_places(0.0, 1), 0.0);
    }
}
