use std::time::Duration;

/// Arithmetic mean of `samples`, `None` when there is nothing to average.
pub fn mean(samples: &[Duration]) -> Option<Duration> {
    if samples.is_empty() {
        return None;
    }
    let total: u128 = samples.iter().map(Duration::as_nanos).sum();
    let nanos = total / samples.len() as u128;
    Some(Duration::new(
        (nanos / 1_000_000_000) as u64,
        (nanos % 1_000_000_000) as u32,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_single_sample() {
        let d = Duration::from_millis(1234);
        assert_eq!(mean(&[d]), Some(d));
    }

    #[test]
    fn test_mean_of_cumulative_samples() {
        let samples = [
            Duration::from_millis(100),
            Duration::from_millis(200),
            Duration::from_millis(300),
        ];
        assert_eq!(mean(&samples), Some(Duration::from_millis(200)));
    }

    #[test]
    fn test_order_does_not_matter() {
        let a = [Duration::from_secs(3), Duration::from_millis(10), Duration::from_secs(1)];
        let b = [Duration::from_millis(10), Duration::from_secs(1), Duration::from_secs(3)];
        assert_eq!(mean(&a), mean(&b));
    }

    #[test]
    fn test_large_durations_do_not_overflow() {
        let samples = [Duration::from_secs(u64::MAX / 2), Duration::from_secs(u64::MAX / 2)];
        assert_eq!(mean(&samples), Some(Duration::from_secs(u64::MAX / 2)));
    }
}
