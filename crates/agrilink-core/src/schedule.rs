use embassy_time::{Duration, Instant};

/// Spaces upload attempts at least `interval` apart.
///
/// The first attempt is due one interval after the schedule starts, and every
/// attempt (successful or not) restarts the wait.
#[derive(Debug, Clone, Copy)]
pub struct UploadSchedule {
    interval: Duration,
    last: Instant,
}

impl UploadSchedule {
    pub const fn new(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            last: start,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last) >= self.interval
    }

    pub fn record(&mut self, now: Instant) {
        self.last = now;
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_upload_waits_one_interval() {
        let schedule = UploadSchedule::new(Duration::from_secs(10), Instant::from_secs(0));
        assert!(!schedule.is_due(Instant::from_secs(9)));
        assert!(schedule.is_due(Instant::from_secs(10)));
    }

    #[test]
    fn test_record_restarts_wait() {
        let mut schedule = UploadSchedule::new(Duration::from_secs(10), Instant::from_secs(0));
        schedule.record(Instant::from_secs(13));
        assert!(!schedule.is_due(Instant::from_secs(22)));
        assert!(schedule.is_due(Instant::from_secs(23)));
    }

    #[test]
    fn test_clock_before_last_is_not_due() {
        let schedule = UploadSchedule::new(Duration::from_secs(10), Instant::from_secs(50));
        assert!(!schedule.is_due(Instant::from_secs(5)));
    }
}
