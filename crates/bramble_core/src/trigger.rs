//! Cooperative countdown trigger.

/// Fires once a configured amount of tick time has accumulated.
///
/// The trigger never looks at wall clocks; it only advances when fed delta
/// time through [`TimedTrigger::tick`]. One-shot triggers stay done until
/// [`TimedTrigger::reset`]; continuous triggers re-arm themselves after
/// firing.
///
/// # Example
///
/// ```
/// use bramble_core::TimedTrigger;
///
/// let mut trigger = TimedTrigger::new(1.0);
/// assert!(!trigger.tick(0.6));
/// assert!(trigger.tick(0.6));
/// assert!(!trigger.tick(0.6)); // done until reset
/// ```
#[derive(Debug, Clone)]
pub struct TimedTrigger {
    /// Seconds to wait before firing.
    interval: f32,
    /// Seconds accumulated since the last reset.
    elapsed: f32,
    /// Paused triggers accumulate nothing.
    active: bool,
    /// Whether the trigger already fired since the last reset.
    done: bool,
    /// Whether the trigger re-arms itself after firing.
    continuous: bool,
}

impl TimedTrigger {
    /// Creates a one-shot trigger firing after `interval` seconds.
    #[must_use]
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            elapsed: 0.0,
            active: true,
            done: false,
            continuous: false,
        }
    }

    /// Creates a trigger that re-arms itself after each firing.
    #[must_use]
    pub fn continuous(interval: f32) -> Self {
        Self {
            continuous: true,
            ..Self::new(interval)
        }
    }

    /// Advances the trigger by `dt` seconds. Returns `true` on the tick the
    /// interval elapses; a done or paused trigger returns `false`.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.active || self.done {
            return false;
        }

        self.elapsed += dt;
        if self.elapsed < self.interval {
            return false;
        }

        self.done = true;
        if self.continuous {
            self.reset();
        }
        true
    }

    /// Re-arms the trigger and clears accumulated time.
    pub fn reset(&mut self) {
        self.done = false;
        self.elapsed = 0.0;
    }

    /// Pauses or resumes the trigger. Accumulated time is kept.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Whether the trigger is currently accumulating time.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the trigger fired since the last reset.
    #[must_use]
    pub fn has_triggered(&self) -> bool {
        self.done
    }

    /// The configured interval in seconds.
    #[must_use]
    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Changes the interval. Accumulated time is kept.
    pub fn set_interval(&mut self, interval: f32) {
        self.interval = interval;
    }

    /// Seconds left until the trigger fires; zero once done.
    #[must_use]
    pub fn remaining(&self) -> f32 {
        if self.done {
            0.0
        } else {
            (self.interval - self.elapsed).max(0.0)
        }
    }
}
