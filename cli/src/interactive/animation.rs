//! Animation system for interactive UI
//!
//! This module provides the fade and scroll animation configuration used
//! around page transitions, built on the core timing vocabulary.

use folio_core::timing::{Easing, Pace, Stagger};
use iocraft::prelude::Color;
use std::time::{Duration, Instant};

/// Configuration for UI animations
#[derive(Debug, Clone)]
pub struct UiAnimationConfig {
    pub easing: Easing,
    pub frame_interval_ms: u64,
    /// Fade-in length of an entering page
    pub enter: Pace,
    /// Delay between consecutive sections of an entering page
    pub stagger: Stagger,
    /// Length of a smooth scroll back to the origin
    pub scroll: Pace,
}

impl UiAnimationConfig {
    /// Create new animation config with environment variable overrides
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let easing = std::env::var("FOLIO_UI_EASING")
            .ok()
            .and_then(|v| v.parse::<Easing>().ok())
            .unwrap_or(defaults.easing);

        let frame_interval_ms = std::env::var("FOLIO_UI_FRAME_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(defaults.frame_interval_ms);

        Self {
            easing,
            frame_interval_ms,
            ..defaults
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

impl Default for UiAnimationConfig {
    fn default() -> Self {
        Self {
            easing: Easing::Smooth,
            frame_interval_ms: 16,
            enter: Pace::Normal,
            stagger: Stagger::Tight,
            scroll: Pace::Fast,
        }
    }
}

/// Which way the current page is fading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeDirection {
    In,
    Out,
}

/// Opacity animation of the page body
#[derive(Debug, Clone, Copy)]
pub struct PageFade {
    pub direction: FadeDirection,
    pub start_time: Instant,
    pub duration: Duration,
}

impl PageFade {
    pub fn new(direction: FadeDirection, duration: Duration) -> Self {
        Self {
            direction,
            start_time: Instant::now(),
            duration,
        }
    }

    /// A fade that is already finished and fully visible
    pub fn settled() -> Self {
        Self {
            direction: FadeDirection::In,
            start_time: Instant::now(),
            duration: Duration::ZERO,
        }
    }

    /// Start delay of the item in stagger `slot`
    ///
    /// Only entering pages stagger; a leaving page fades as one block so it
    /// is gone before the leave duration ends.
    pub fn delay_for(&self, stagger: Stagger, slot: usize) -> Duration {
        match self.direction {
            FadeDirection::In => stagger.delay_for(slot),
            FadeDirection::Out => Duration::ZERO,
        }
    }

    /// Opacity of the item in stagger `slot`, between 0.0 and 1.0
    pub fn opacity(&self, easing: Easing, stagger: Stagger, slot: usize) -> f64 {
        let delay = self.delay_for(stagger, slot);
        let elapsed = self.start_time.elapsed().saturating_sub(delay);
        let progress = progress(elapsed, self.duration);
        match self.direction {
            FadeDirection::In => easing.apply(progress),
            FadeDirection::Out => 1.0 - easing.apply(progress),
        }
    }

    /// Whether every item up to stagger slot `last_slot` has finished
    pub fn is_complete(&self, stagger: Stagger, last_slot: usize) -> bool {
        self.start_time.elapsed() >= self.duration + self.delay_for(stagger, last_slot)
    }
}

/// Smooth scroll of the page offset back to the origin
#[derive(Debug, Clone, Copy)]
pub struct ScrollAnimation {
    pub from: usize,
    pub start_time: Instant,
    pub duration: Duration,
}

impl ScrollAnimation {
    pub fn new(from: usize, duration: Duration) -> Self {
        Self {
            from,
            start_time: Instant::now(),
            duration,
        }
    }

    /// Offset for the current frame
    pub fn offset(&self, easing: Easing) -> usize {
        let progress = progress(self.start_time.elapsed(), self.duration);
        let remaining = 1.0 - easing.apply(progress);
        (self.from as f64 * remaining).round() as usize
    }

    pub fn is_complete(&self) -> bool {
        self.start_time.elapsed() >= self.duration
    }
}

fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    elapsed.as_secs_f64() / duration.as_secs_f64()
}

/// Blend a foreground color toward the terminal background by opacity
pub fn faded(rgb: (u8, u8, u8), background: (u8, u8, u8), opacity: f64) -> Color {
    let opacity = opacity.clamp(0.0, 1.0);
    let mix = |fg: u8, bg: u8| -> u8 {
        (bg as f64 + (fg as f64 - bg as f64) * opacity).round() as u8
    };
    Color::Rgb {
        r: mix(rgb.0, background.0),
        g: mix(rgb.1, background.1),
        b: mix(rgb.2, background.2),
    }
}
