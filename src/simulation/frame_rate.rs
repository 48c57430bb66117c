/// Frames-per-second estimate sampled over a fixed interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRateCounter {
    frames: u32,
    frame_rate: f64,
    interval: f64,
    last_sample_t: f64,
}

impl FrameRateCounter {
    pub fn new(interval: f64) -> Self {
        FrameRateCounter { frames: 0, frame_rate: 0.0, interval, last_sample_t: 0.0 }
    }

    /// Counts one presented frame.
    pub fn record_frame(&mut self) {
        self.frames = self.frames.saturating_add(1);
    }

    /// Recomputes the rate once more than `interval` seconds passed since the last sample.
    /// Returns the new rate when one was taken.
    /// # Example
    /// ```
    /// use projectile_motion::simulation::FrameRateCounter;
    ///
    /// let mut counter = FrameRateCounter::new(0.2);
    /// for _ in 0..15 {
    ///     counter.record_frame();
    /// }
    /// assert_eq!(counter.update(0.1), None);
    /// assert_eq!(counter.update(0.25), Some(60.0));
    /// ```
    pub fn update(&mut self, t: f64) -> Option<f64> {
        let elapsed = t - self.last_sample_t;
        if elapsed <= self.interval {
            return None;
        }
        self.frame_rate = self.frames as f64 / elapsed;
        self.last_sample_t = t;
        self.frames = 0;
        Some(self.frame_rate)
    }

    /// Starts sampling again from flight time `t`.
    pub fn reset(&mut self, t: f64) {
        self.frames = 0;
        self.last_sample_t = t;
    }

    pub fn frame_rate(&self) -> f64 {
        self.frame_rate
    }

    /// Milliseconds per frame, `None` until a non-zero rate was sampled.
    pub fn frame_time_ms(&self) -> Option<f64> {
        if self.frame_rate > 0.0 {
            Some(1000.0 / self.frame_rate)
        } else {
            None
        }
    }

    /// The two overlay lines: frame rate and time per frame.
    pub fn overlay_lines(&self) -> [String; 2] {
        let frame_time = match self.frame_time_ms() {
            Some(ms) => format!("{:5.0}", ms),
            None => format!("{:>5}", "-"),
        };
        [
            format!("fr (f/s): {:6.0}", self.frame_rate),
            format!("ft (ms/f): {}", frame_time),
        ]
    }
}
