use std::time::{Duration, Instant};

/// Cooldown shared by all combinations: at most one alert per window,
/// whichever combination triggered it. Callers pass `now` explicitly so
/// tests drive the clock instead of sleeping.
pub struct AlertGate {
    cooldown: Duration,
    last_alert: Option<Instant>,
}

impl AlertGate {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_alert: None,
        }
    }

    /// True when enough time has passed since the last recorded alert.
    /// The very first alert is always permitted.
    pub fn can_fire(&self, now: Instant) -> bool {
        match self.last_alert {
            Some(last) => now.duration_since(last) >= self.cooldown,
            None => true,
        }
    }

    /// Marks an alert as fired. Only called when one actually goes out;
    /// a suppressed attempt leaves the window untouched.
    pub fn record(&mut self, now: Instant) {
        self.last_alert = Some(now);
    }

    pub fn last_alert(&self) -> Option<Instant> {
        self.last_alert
    }
}
