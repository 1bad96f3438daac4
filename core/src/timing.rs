//! Transition timing vocabulary
//!
//! Durations, stagger steps and easing curves shared by the navigation
//! state machine and whatever animates the views.

use std::str::FromStr;
use std::time::Duration;

/// Length of the leaving phase between a navigation request and its commit
pub const LEAVE_DURATION: Duration = Duration::from_millis(350);

/// Named animation durations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    Instant,
    Fast,
    Normal,
    Moderate,
    Slow,
    VerySlow,
}

impl Pace {
    pub fn millis(self) -> u64 {
        match self {
            Pace::Instant => 150,
            Pace::Fast => 200,
            Pace::Normal => 300,
            Pace::Moderate => 400,
            Pace::Slow => 500,
            Pace::VerySlow => 800,
        }
    }

    pub fn duration(self) -> Duration {
        Duration::from_millis(self.millis())
    }
}

/// Named delays between consecutive items of a staggered animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stagger {
    Instant,
    Tight,
    Normal,
    Loose,
}

impl Stagger {
    pub fn millis(self) -> u64 {
        match self {
            Stagger::Instant => 20,
            Stagger::Tight => 50,
            Stagger::Normal => 100,
            Stagger::Loose => 150,
        }
    }

    /// Start delay of the item at `index`
    pub fn delay_for(self, index: usize) -> Duration {
        Duration::from_millis(self.millis() * index as u64)
    }
}

/// Easing curves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// power3.out
    Smooth,
    /// power4.out
    Bounce,
    /// power4.in
    BounceIn,
    /// circ.out
    Organic,
}

impl Easing {
    /// Apply the curve to a normalized time value, clamped to 0.0..=1.0
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Smooth => 1.0 - (1.0 - t).powi(4),
            Easing::Bounce => 1.0 - (1.0 - t).powi(5),
            Easing::BounceIn => t.powi(5),
            Easing::Organic => (1.0 - (t - 1.0).powi(2)).sqrt(),
        }
    }
}

impl FromStr for Easing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear" => Ok(Easing::Linear),
            "smooth" | "power3.out" => Ok(Easing::Smooth),
            "bounce" | "power4.out" => Ok(Easing::Bounce),
            "bounce_in" | "bouncein" | "bounce-in" | "power4.in" => Ok(Easing::BounceIn),
            "organic" | "circ" | "circ.out" => Ok(Easing::Organic),
            other => Err(format!("Unknown easing '{}'", other)),
        }
    }
}
