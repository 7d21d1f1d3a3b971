//! Timed interpolation of a single scalar.
//!
//! [`AnimatedValue`] is the transition primitive used by the navigator: it
//! holds a current value, can jump immediately via [`set`](AnimatedValue::set),
//! or glide to a target via [`animate_to`](AnimatedValue::animate_to). The
//! animation clock is supplied by the host: the value does not move until
//! [`tick`](AnimatedValue::tick) is called, and the first tick after
//! `animate_to` anchors the start time. Issuing a new `set` or `animate_to`
//! while an animation is in flight discards it; the last caller wins.

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    EaseOutQuad,
    #[default]
    EaseOutCubic,
}

impl Easing {
    /// Maps linear progress `p` in [0, 1] onto the eased curve.
    pub fn apply(self, p: f32) -> f32 {
        let p = p.clamp(0.0, 1.0);
        match self {
            Easing::Linear => p,
            Easing::EaseOutQuad => 1.0 - (1.0 - p) * (1.0 - p),
            Easing::EaseOutCubic => 1.0 - (1.0 - p).powi(3),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Animation {
    from: f32,
    to: f32,
    duration: f64,
    easing: Easing,
    /// Anchored by the first tick after the animation was issued.
    started: Option<f64>,
}

#[derive(Debug)]
pub struct AnimatedValue {
    current: f32,
    animation: Option<Animation>,
}

impl AnimatedValue {
    pub fn new(value: f32) -> AnimatedValue {
        AnimatedValue {
            current: value,
            animation: None,
        }
    }

    pub fn value(&self) -> f32 {
        self.current
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Jumps to `value`, discarding any in-flight animation.
    pub fn set(&mut self, value: f32) {
        self.current = value;
        self.animation = None;
    }

    /// Starts gliding from the current value to `target` over `duration`
    /// seconds. A zero or negative duration completes on the next tick.
    pub fn animate_to(&mut self, target: f32, duration: f64, easing: Easing) {
        self.animation = Some(Animation {
            from: self.current,
            to: target,
            duration,
            easing,
            started: None,
        });
    }

    /// Advances the animation to `now` (seconds, monotonic).
    ///
    /// Returns `true` exactly once, on the tick that completes the animation.
    pub fn tick(&mut self, now: f64) -> bool {
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };

        let started = *animation.started.get_or_insert(now);
        let elapsed = now - started;

        if animation.duration <= 0.0 || elapsed >= animation.duration {
            self.current = animation.to;
            self.animation = None;
            return true;
        }

        let p = animation.easing.apply((elapsed / animation.duration) as f32);
        self.current = animation.from + (animation.to - animation.from) * p;

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_discards_in_flight_animation() {
        let mut value = AnimatedValue::new(0.0);
        value.animate_to(100.0, 0.25, Easing::Linear);
        value.set(42.0);

        assert!(!value.is_animating());
        assert_eq!(value.value(), 42.0);
        assert!(!value.tick(1.0));
        assert_eq!(value.value(), 42.0);
    }

    #[test]
    fn first_tick_anchors_the_start_time() {
        let mut value = AnimatedValue::new(0.0);
        value.animate_to(100.0, 1.0, Easing::Linear);

        // Issued at some earlier moment; the clock starts at the first tick.
        assert!(!value.tick(10.0));
        assert_eq!(value.value(), 0.0);

        assert!(!value.tick(10.5));
        assert!((value.value() - 50.0).abs() < 1e-3);

        assert!(value.tick(11.0));
        assert_eq!(value.value(), 100.0);
        assert!(!value.is_animating());
    }

    #[test]
    fn completion_is_reported_once() {
        let mut value = AnimatedValue::new(360.0);
        value.animate_to(0.0, 0.25, Easing::EaseOutCubic);

        assert!(!value.tick(0.0));
        assert!(value.tick(5.0));
        assert!(!value.tick(6.0));
    }

    #[test]
    fn ease_out_moves_faster_early() {
        let mut value = AnimatedValue::new(0.0);
        value.animate_to(100.0, 1.0, Easing::EaseOutCubic);

        value.tick(0.0);
        value.tick(0.5);

        assert!(value.value() > 50.0);
    }

    #[test]
    fn restart_uses_the_current_value_as_origin() {
        let mut value = AnimatedValue::new(0.0);
        value.animate_to(100.0, 1.0, Easing::Linear);
        value.tick(0.0);
        value.tick(0.5);

        // Interrupted midway and redirected back to zero.
        value.animate_to(0.0, 1.0, Easing::Linear);
        value.tick(1.0);
        value.tick(1.5);

        assert!((value.value() - 25.0).abs() < 1e-3);
    }

    #[test]
    fn zero_duration_completes_on_next_tick() {
        let mut value = AnimatedValue::new(5.0);
        value.animate_to(9.0, 0.0, Easing::Linear);

        assert!(value.tick(0.0));
        assert_eq!(value.value(), 9.0);
    }

    #[test]
    fn easing_endpoints_are_exact() {
        for easing in [Easing::Linear, Easing::EaseOutQuad, Easing::EaseOutCubic] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }
}
