//! Default exponential schedule: `min * 2^attempt`, capped at `max`.

use std::time::Duration;

/// Exponential backoff for a 0-based `attempt`.
///
/// The product is computed in floating point over nanoseconds and converted
/// back to an integral duration. If that conversion is inexact (overflow,
/// non-finite product) or the result exceeds `max`, `max` is returned.
pub fn exponential_backoff(min: Duration, max: Duration, attempt: u32) -> Duration {
    let mult = 2f64.powf(f64::from(attempt)) * min.as_nanos() as f64;
    // Float-to-int `as` saturates, so an overflowing product fails the equality below.
    let nanos = mult as u64;
    let sleep = Duration::from_nanos(nanos);
    if !mult.is_finite() || nanos as f64 != mult || sleep > max {
        return max;
    }
    sleep
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: Duration = Duration::from_secs(1);
    const MAX: Duration = Duration::from_secs(30);

    #[test]
    fn doubles_until_capped() {
        let expected = [1, 2, 4, 8, 16, 30, 30, 30, 30, 30];
        for (attempt, secs) in expected.iter().enumerate() {
            assert_eq!(
                exponential_backoff(MIN, MAX, attempt as u32),
                Duration::from_secs(*secs),
                "attempt {attempt}"
            );
        }
    }

    #[test]
    fn monotonic_then_constant() {
        let mut prev = Duration::ZERO;
        for attempt in 0..64 {
            let d = exponential_backoff(Duration::from_millis(250), MAX, attempt);
            assert!(d >= prev, "attempt {attempt}: {d:?} < {prev:?}");
            assert!(d <= MAX);
            prev = d;
        }
        assert_eq!(prev, MAX);
    }

    #[test]
    fn overflow_clamps_to_max() {
        assert_eq!(exponential_backoff(MIN, MAX, 200), MAX);
        assert_eq!(exponential_backoff(MIN, MAX, u32::MAX), MAX);
    }

    #[test]
    fn sub_second_minimum() {
        let min = Duration::from_millis(250);
        assert_eq!(exponential_backoff(min, MAX, 0), min);
        assert_eq!(exponential_backoff(min, MAX, 3), Duration::from_secs(2));
    }

    #[test]
    fn zero_minimum_stays_zero() {
        assert_eq!(exponential_backoff(Duration::ZERO, MAX, 10), Duration::ZERO);
    }
}
