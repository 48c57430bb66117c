/// Which integration algorithm advances the projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimulationMode {
    /// Closed-form kinematics evaluated at the elapsed time.
    Analytical,
    /// Stepwise Euler integration over the frame delta.
    #[default]
    Numerical,
}

impl SimulationMode {
    pub fn toggled(self) -> Self {
        match self {
            SimulationMode::Analytical => SimulationMode::Numerical,
            SimulationMode::Numerical => SimulationMode::Analytical,
        }
    }
}

/// How the curve generator derives point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Sweep an index or angle and evaluate coordinates directly.
    Parametric,
    /// Solve the shape's equation for one coordinate given the other.
    #[default]
    Cartesian,
}

impl RenderMode {
    /// # Example
    /// ```
    /// use projectile_motion::models::RenderMode;
    ///
    /// assert_eq!(RenderMode::from_cartesian_flag(true), RenderMode::Cartesian);
    /// assert_eq!(RenderMode::from_cartesian_flag(false), RenderMode::Parametric);
    /// ```
    pub fn from_cartesian_flag(use_cartesian: bool) -> Self {
        if use_cartesian { RenderMode::Cartesian } else { RenderMode::Parametric }
    }

    pub fn is_cartesian(self) -> bool {
        self == RenderMode::Cartesian
    }

    pub fn toggled(self) -> Self {
        RenderMode::from_cartesian_flag(!self.is_cartesian())
    }
}

/// Whether the driver is currently advancing the projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Paused,
    Running,
    /// The projectile hit the ground. Only a restart leaves this state.
    Grounded,
}

impl RunState {
    pub fn is_running(self) -> bool {
        self == RunState::Running
    }
}
