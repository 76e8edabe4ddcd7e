//! Animation state for the step indicator.
//!
//! Animations are plain values. A [`Tween`] describes one scalar moving
//! from `from` to `to` after an optional delay; [`Tween::seek`] samples it
//! at an elapsed time without touching any clock. [`IndicatorAnimation`]
//! groups the two tweens the indicator needs and sequences them:
//!
//! ```text
//! 0 ms ──── fill ────▶ progress_duration ──── size ────▶ + marker_duration
//! ```
//!
//! Markers are circles, so the corner radius is always half the size and
//! needs no tween of its own. Retargeting mid-flight starts the new fill
//! from wherever the old one had reached, so successive position changes
//! never jump.

use std::time::Duration;

/// Interpolation curve applied to normalized tween progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    EaseInOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// A single scalar transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    delay: Duration,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    /// Begin a transition from `from` to `to` lasting `duration`.
    #[must_use]
    pub fn start(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from,
            to,
            delay: Duration::ZERO,
            duration,
            easing: Easing::default(),
        }
    }

    /// A tween already resting at `value`.
    #[must_use]
    pub fn settled(value: f32) -> Self {
        Self::start(value, value, Duration::ZERO)
    }

    #[must_use]
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Sample the value at `elapsed` since the tween was started.
    pub fn seek(&self, elapsed: Duration) -> f32 {
        if elapsed <= self.delay {
            return self.from;
        }
        let running = elapsed - self.delay;
        if self.duration.is_zero() || running >= self.duration {
            return self.to;
        }
        let t = running.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    /// Time at which the tween reaches its target.
    pub fn end(&self) -> Duration {
        self.delay + self.duration
    }

    pub fn target(&self) -> f32 {
        self.to
    }
}

/// Target values for one indicator transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationTarget {
    pub fill: f32,
    pub resting_size: f32,
    pub emphasized_size: f32,
    pub progress_duration: Duration,
    pub marker_duration: Duration,
}

/// Fill extent plus current-marker size, sequenced as one transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorAnimation {
    fill: Tween,
    size: Tween,
    elapsed: Duration,
}

impl IndicatorAnimation {
    /// Idle animation with an empty track and a resting current marker.
    pub fn new(resting_size: f32) -> Self {
        Self {
            fill: Tween::settled(0.0),
            size: Tween::settled(resting_size),
            elapsed: Duration::ZERO,
        }
    }

    /// Start a new transition toward `target`, replacing any in flight.
    ///
    /// The marker snaps back to its resting size, the fill moves from its
    /// current sampled value to the new extent, and only once the fill has
    /// landed does the marker grow to its emphasized size.
    #[must_use]
    pub fn retarget(&self, target: AnimationTarget) -> Self {
        let fill_from = self.fill();
        let fill = Tween::start(fill_from, target.fill, target.progress_duration);
        let size = Tween::start(target.resting_size, target.emphasized_size, target.marker_duration)
            .after(target.progress_duration);
        Self {
            fill,
            size,
            elapsed: Duration::ZERO,
        }
    }

    /// Move the transition forward by `delta`.
    #[must_use]
    pub fn advanced(&self, delta: Duration) -> Self {
        let end = self.end();
        Self {
            elapsed: (self.elapsed + delta).min(end),
            ..*self
        }
    }

    /// Jump straight to the end of the transition.
    #[must_use]
    pub fn settled(&self) -> Self {
        Self {
            elapsed: self.end(),
            ..*self
        }
    }

    pub fn fill(&self) -> f32 {
        self.fill.seek(self.elapsed)
    }

    pub fn marker_size(&self) -> f32 {
        self.size.seek(self.elapsed)
    }

    pub fn target_fill(&self) -> f32 {
        self.fill.target()
    }

    pub fn is_running(&self) -> bool {
        self.elapsed < self.end()
    }

    fn end(&self) -> Duration {
        self.fill.end().max(self.size.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(fill: f32) -> AnimationTarget {
        AnimationTarget {
            fill,
            resting_size: 3.0,
            emphasized_size: 5.0,
            progress_duration: Duration::from_millis(200),
            marker_duration: Duration::from_millis(100),
        }
    }

    #[test]
    fn tween_respects_bounds_and_delay() {
        let tween = Tween::start(0.0, 10.0, Duration::from_millis(100)).after(Duration::from_millis(50));
        assert_eq!(tween.seek(Duration::ZERO), 0.0);
        assert_eq!(tween.seek(Duration::from_millis(50)), 0.0);
        assert_eq!(tween.seek(Duration::from_millis(150)), 10.0);
        assert_eq!(tween.seek(Duration::from_secs(3)), 10.0);
        let mid = tween.seek(Duration::from_millis(100));
        assert!(mid > 0.0 && mid < 10.0);
    }

    #[test]
    fn linear_tween_is_proportional() {
        let tween = Tween::start(0.0, 8.0, Duration::from_millis(100)).with_easing(Easing::Linear);
        assert!((tween.seek(Duration::from_millis(25)) - 2.0).abs() < 1e-4);
    }

    #[test]
    fn marker_grows_only_after_fill_lands() {
        let animation = IndicatorAnimation::new(3.0).retarget(target(20.0));
        assert_eq!(animation.marker_size(), 3.0);

        let mid_fill = animation.advanced(Duration::from_millis(120));
        assert!(mid_fill.fill() > 0.0 && mid_fill.fill() < 20.0);
        assert_eq!(mid_fill.marker_size(), 3.0);

        let filled = animation.advanced(Duration::from_millis(200));
        assert_eq!(filled.fill(), 20.0);
        assert_eq!(filled.marker_size(), 3.0);

        let done = filled.advanced(Duration::from_millis(100));
        assert_eq!(done.marker_size(), 5.0);
        assert!(!done.is_running());
    }

    #[test]
    fn retarget_mid_flight_continues_from_sampled_fill() {
        let first = IndicatorAnimation::new(3.0)
            .retarget(target(40.0))
            .advanced(Duration::from_millis(100));
        let reached = first.fill();
        let second = first.retarget(target(10.0));
        assert_eq!(second.fill(), reached);
        assert_eq!(second.marker_size(), 3.0);
        assert_eq!(second.settled().fill(), 10.0);
    }

    #[test]
    fn restart_resets_grown_marker_to_resting() {
        let grown = IndicatorAnimation::new(3.0).retarget(target(5.0)).settled();
        assert_eq!(grown.marker_size(), 5.0);
        let restarted = grown.retarget(target(10.0));
        assert_eq!(restarted.marker_size(), 3.0);
        assert!(restarted.is_running());
    }

    #[test]
    fn advancing_never_overshoots() {
        let animation = IndicatorAnimation::new(3.0).retarget(target(7.0)).advanced(Duration::from_secs(60));
        assert!(!animation.is_running());
        assert_eq!(animation.fill(), 7.0);
    }
}
