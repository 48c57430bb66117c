use crate::utils::ProjectileError;

/// Sampling density for the generated curves.
///
/// Adjusted geometrically by doubling or halving and kept within `minimum..=maximum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentCount {
    value: usize,
    minimum: usize,
    maximum: usize,
}

impl SegmentCount {
    /// # Errors
    /// Returns `InvalidSegmentCount` when `value` is below `minimum` or `minimum` is zero,
    /// and `SegmentCountTooLarge` when `value` is above `maximum`.
    ///
    /// # Example
    /// ```
    /// use projectile_motion::models::SegmentCount;
    ///
    /// assert_eq!(SegmentCount::new(8, 4, 64).unwrap().get(), 8);
    /// assert!(SegmentCount::new(2, 4, 64).is_err());
    /// assert!(SegmentCount::new(128, 4, 64).is_err());
    /// ```
    pub fn new(value: usize, minimum: usize, maximum: usize) -> Result<Self, ProjectileError> {
        if minimum == 0 {
            return Err(ProjectileError::InvalidSegmentCount { requested: value, minimum: 1 });
        }
        if value < minimum {
            return Err(ProjectileError::InvalidSegmentCount { requested: value, minimum });
        }
        if value > maximum {
            return Err(ProjectileError::SegmentCountTooLarge { requested: value, maximum });
        }
        Ok(SegmentCount { value, minimum, maximum })
    }

    /// Builds a count, pulling `value` into `minimum..=maximum` if needed.
    pub fn clamped(value: usize, minimum: usize, maximum: usize) -> Self {
        let minimum = minimum.max(1);
        let maximum = maximum.max(minimum);
        SegmentCount { value: value.clamp(minimum, maximum), minimum, maximum }
    }

    pub fn get(&self) -> usize {
        self.value
    }

    pub fn minimum(&self) -> usize {
        self.minimum
    }

    pub fn maximum(&self) -> usize {
        self.maximum
    }

    /// Doubles the count, stopping at the maximum.
    ///
    /// Returns `false` and leaves the count alone when it is already at the maximum.
    /// # Example
    /// ```
    /// use projectile_motion::models::SegmentCount;
    ///
    /// let mut segments = SegmentCount::new(8, 4, 12).unwrap();
    /// assert!(segments.double());
    /// assert_eq!(segments.get(), 12);
    /// assert!(!segments.double());
    /// assert_eq!(segments.get(), 12);
    /// ```
    pub fn double(&mut self) -> bool {
        if self.value >= self.maximum {
            return false;
        }
        self.value = self.value.saturating_mul(2).min(self.maximum);
        true
    }

    /// Halves the count, stopping at the minimum.
    ///
    /// Returns `false` and leaves the count alone when it is already at the minimum.
    /// # Example
    /// ```
    /// use projectile_motion::models::SegmentCount;
    ///
    /// let mut segments = SegmentCount::new(8, 4, 64).unwrap();
    /// assert!(segments.halve());
    /// assert_eq!(segments.get(), 4);
    /// assert!(!segments.halve());
    /// assert_eq!(segments.get(), 4);
    /// ```
    pub fn halve(&mut self) -> bool {
        if self.value <= self.minimum {
            return false;
        }
        self.value = (self.value / 2).max(self.minimum);
        true
    }
}
