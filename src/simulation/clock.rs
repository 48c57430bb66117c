/// Turns monotonic clock readings (in seconds) into flight time `t` and frame delta `dt`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulationClock {
    start_time: f64,
    last_t: Option<f64>,
    paused_at: Option<f64>,
}

impl SimulationClock {
    pub fn new(now: f64) -> Self {
        SimulationClock { start_time: now, last_t: None, paused_at: None }
    }

    /// Makes `now` the new launch instant.
    pub fn restart(&mut self, now: f64) {
        self.start_time = now;
        self.last_t = None;
        self.paused_at = None;
    }

    pub fn elapsed(&self, now: f64) -> f64 {
        now - self.start_time
    }

    /// Returns `(t, dt)` for this reading.
    ///
    /// The first reading after a restart or resume only records a baseline and returns `None`.
    /// # Example
    /// ```
    /// use projectile_motion::simulation::SimulationClock;
    ///
    /// let mut clock = SimulationClock::new(10.0);
    /// assert_eq!(clock.tick(10.5), None);
    /// let (t, dt) = clock.tick(10.75).unwrap();
    /// assert_eq!(t, 0.75);
    /// assert_eq!(dt, 0.25);
    /// ```
    pub fn tick(&mut self, now: f64) -> Option<(f64, f64)> {
        let t = self.elapsed(now);
        let previous = self.last_t.replace(t);
        previous.map(|last| (t, t - last))
    }

    pub fn pause(&mut self, now: f64) {
        if self.paused_at.is_none() {
            self.paused_at = Some(now);
        }
    }

    /// Shifts the launch instant by the time spent paused so `t` carries on where it stopped.
    pub fn resume(&mut self, now: f64) {
        if let Some(paused_at) = self.paused_at.take() {
            self.start_time += now - paused_at;
        }
        self.last_t = None;
    }

    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }
}
