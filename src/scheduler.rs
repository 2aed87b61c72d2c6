use std::time::{Duration, Instant};

/// Fixed-cadence tick source driven by the event loop's wake-ups.
pub struct Ticker {
    interval: Duration,
    next: Instant,
}

impl Ticker {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self { interval, next: now + interval }
    }

    pub fn deadline(&self) -> Instant {
        self.next
    }

    /// True once per elapsed deadline. Falling behind re-anchors instead of bursting.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next += self.interval;
        if self.next <= now {
            self.next = now + self.interval;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn fires_on_each_deadline() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(100 * MS, t0);

        assert!(!ticker.poll(t0));
        assert!(!ticker.poll(t0 + 99 * MS));
        assert!(ticker.poll(t0 + 100 * MS));
        assert!(!ticker.poll(t0 + 150 * MS));
        assert!(ticker.poll(t0 + 210 * MS));
        assert_eq!(ticker.deadline(), t0 + 300 * MS);
    }

    #[test]
    fn does_not_burst_after_a_stall() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(100 * MS, t0);

        assert!(ticker.poll(t0 + 1_000 * MS));
        assert!(!ticker.poll(t0 + 1_000 * MS));
        assert_eq!(ticker.deadline(), t0 + 1_100 * MS);
    }
}
