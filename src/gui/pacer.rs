use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Holds scheduler polls to a fixed firing period.
pub struct Pacer {
    target_period: Duration,
    frame_timer: Instant,
    period_smoothed: f64,
}

impl Pacer {
    pub fn new(fires_per_sec: f64) -> Self {
        Self {
            target_period: Duration::from_secs_f64(1.0 / fires_per_sec),
            frame_timer: Instant::now(),
            period_smoothed: 1.0 / fires_per_sec,
        }
    }

    /// Achieved firing rate, smoothed over recent frames.
    pub fn fps(&self) -> f64 {
        1. / self.period_smoothed
    }

    pub fn wait(&mut self) {
        let before_wait = self.frame_timer.elapsed();

        if self.target_period > before_wait {
            sleep(self.target_period - before_wait);
        }

        let after_wait = self.frame_timer.elapsed();
        let period = after_wait.as_secs_f64();
        self.period_smoothed += (period - self.period_smoothed) * 0.1;

        self.frame_timer = Instant::now();
    }
}
