use std::time::{Duration, SystemTime};

#[derive(Clone)]
pub struct SystemClock {}

pub trait Clock: Send + Sync {
    fn now(&self) -> SystemTime;

    fn duration_since(&self, time: SystemTime) -> Duration {
        return self.now().duration_since(time).unwrap_or(Duration::ZERO);
    }
}

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        return SystemTime::now();
    }
}

impl SystemClock {
    pub fn new() -> SystemClock {
        return SystemClock {};
    }
}

#[cfg(test)]
mod tests {
    use std::ops::Sub;
    use std::time::{Duration, SystemTime};

    use crate::clock::clock::{Clock, SystemClock};

    #[test]
    fn duration_since_an_earlier_time() {
        let clock = SystemClock::new();
        let earlier = SystemTime::now().sub(Duration::from_secs(5));

        assert!(clock.duration_since(earlier) >= Duration::from_secs(5));
    }

    #[test]
    fn duration_since_a_later_time_is_zero() {
        let clock = SystemClock::new();
        let later = SystemTime::now() + Duration::from_secs(60);

        assert_eq!(Duration::ZERO, clock.duration_since(later));
    }
}
