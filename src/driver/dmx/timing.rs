use std::time::{Duration, Instant};

/// spin on the monotonic clock until `deadline`
/// sleeping is too coarse for the microsecond gaps of a dmx frame
pub fn hold_until(deadline: Instant) {
    while Instant::now() < deadline {
        std::hint::spin_loop();
    }
}

pub fn hold(duration: Duration) {
    if duration.is_zero() {
        return;
    }
    hold_until(Instant::now() + duration);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hold_waits_at_least_duration() {
        let start = Instant::now();
        hold(Duration::from_micros(200));
        assert!(start.elapsed() >= Duration::from_micros(200));
    }

    #[test]
    fn test_zero_hold_returns() {
        hold(Duration::ZERO);
        hold_until(Instant::now());
    }
}
