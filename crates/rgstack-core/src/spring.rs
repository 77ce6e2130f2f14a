#![forbid(unsafe_code)]

//! Spring animation for committed card transitions.
//!
//! When a layout is flagged `animated`, the view layer moves the card into
//! it along a damped spring instead of jumping. [`SpringCurve`] describes
//! that spring in designer terms (response and damping fraction);
//! [`Spring`] integrates it; [`LayoutAnimator`] applies it to a [`Layout`].
//!
//! # Parameters
//!
//! - **response**: approximate period of the undamped oscillation, in
//!   seconds. Stiffness is `(2π / response)²` for a unit mass.
//! - **damping_fraction**: `1.0` is critical damping; below it the card
//!   overshoots slightly. Damping is `4π · damping_fraction / response`.
//! - **blend_duration**: how long a host should blend a new spring into one
//!   already in flight. Carried for the view layer; not used here.
//!
//! # Integration
//!
//! Semi-implicit Euler, with large frame deltas subdivided into 4ms steps
//! for stability at high stiffness.
//!
//! # Invariants
//!
//! 1. A spring at rest stays at rest until [`Spring::set_target`] moves the
//!    target by more than the arrival distance.
//! 2. On coming to rest the position snaps exactly to the target.
//! 3. Stiffness is clamped to a small positive minimum; damping to `>= 0`.

use std::f64::consts::PI;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::interpolate::Interpolate;
use crate::layout::Layout;

/// Longest physics substep. A frame delta is split into equal substeps no
/// longer than this.
const SUBSTEP_SECS: f64 = 0.004;

/// Distance from the target, in progress units, at which a card counts as
/// arrived.
const SETTLE_DISTANCE: f64 = 0.001;

/// Speed, in progress units per second, below which an arrived card stops.
const SETTLE_SPEED: f64 = 0.01;

/// Stiffness floor; a softer spring would never bring a card home.
const STIFFNESS_FLOOR: f64 = 0.1;

/// Designer-facing spring description.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpringCurve {
    /// Oscillation period in seconds.
    pub response: f64,
    /// Fraction of critical damping.
    pub damping_fraction: f64,
    /// Blend time for retargeting an in-flight spring, in seconds.
    pub blend_duration: f64,
}

impl Default for SpringCurve {
    /// The interactive curve used for card transitions.
    fn default() -> Self {
        Self {
            response: 0.25,
            damping_fraction: 0.75,
            blend_duration: 0.95,
        }
    }
}

impl SpringCurve {
    /// Stiffness for a unit mass.
    #[must_use]
    pub fn stiffness(&self) -> f64 {
        let omega = 2.0 * PI / self.response;
        omega * omega
    }

    /// Damping coefficient for a unit mass.
    #[must_use]
    pub fn damping(&self) -> f64 {
        4.0 * PI * self.damping_fraction / self.response
    }

    /// A normalized spring (0 → 1) with this curve.
    #[must_use]
    pub fn spring(&self) -> Spring {
        Spring::normalized()
            .with_stiffness(self.stiffness())
            .with_damping(self.damping())
    }

    /// Validate the curve. An empty list means it is usable.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if !(self.response.is_finite() && self.response > 0.0) {
            errors.push(format!(
                "animation.response must be > 0, got {}",
                self.response
            ));
        }
        if !(self.damping_fraction.is_finite() && self.damping_fraction >= 0.0) {
            errors.push(format!(
                "animation.damping_fraction must be >= 0, got {}",
                self.damping_fraction
            ));
        }
        if !(self.blend_duration.is_finite() && self.blend_duration >= 0.0) {
            errors.push(format!(
                "animation.blend_duration must be >= 0, got {}",
                self.blend_duration
            ));
        }
        errors
    }
}

/// Progress of one card transition, driven by a damped spring.
///
/// The value usually runs from `0.0` (the layout the card left) to `1.0`
/// (the layout it is heading for) and may briefly pass `1.0` when the
/// curve is underdamped.
#[derive(Debug, Clone)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    stiffness: f64,
    damping: f64,
    settled: bool,
}

impl Spring {
    /// Spring at `initial`, pulled toward `target` by the default card curve.
    #[must_use]
    pub fn new(initial: f64, target: f64) -> Self {
        let curve = SpringCurve::default();
        Self {
            position: initial,
            velocity: 0.0,
            target,
            stiffness: curve.stiffness(),
            damping: curve.damping(),
            settled: false,
        }
    }

    /// Spring for a whole transition: from `0.0` to `1.0`.
    #[must_use]
    pub fn normalized() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Replace the stiffness, floored at 0.1.
    #[must_use]
    pub fn with_stiffness(self, stiffness: f64) -> Self {
        Self {
            stiffness: stiffness.max(STIFFNESS_FLOOR),
            ..self
        }
    }

    /// Replace the damping; negative values become zero.
    #[must_use]
    pub fn with_damping(self, damping: f64) -> Self {
        Self {
            damping: damping.max(0.0),
            ..self
        }
    }

    /// Transition progress. Not clamped, so overshoot is visible.
    #[inline]
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[inline]
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Whether the card has arrived and stopped.
    #[inline]
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.settled
    }

    /// Send the card somewhere else. Moves smaller than the arrival
    /// distance are ignored.
    pub fn set_target(&mut self, target: f64) {
        if (target - self.target).abs() <= SETTLE_DISTANCE {
            return;
        }
        self.target = target;
        self.settled = false;
    }

    fn has_arrived(&self) -> bool {
        (self.position - self.target).abs() < SETTLE_DISTANCE
            && self.velocity.abs() < SETTLE_SPEED
    }

    /// Run the physics for one display frame of length `dt`.
    ///
    /// Uses semi-implicit Euler over equal substeps of at most
    /// 4ms. On arrival the position snaps to the target.
    pub fn advance(&mut self, dt: Duration) {
        if self.settled {
            return;
        }
        let secs = dt.as_secs_f64();
        let substeps = (secs / SUBSTEP_SECS).ceil().max(1.0);
        let h = secs / substeps;
        for _ in 0..substeps as u32 {
            let pull = -self.stiffness * (self.position - self.target);
            let drag = -self.damping * self.velocity;
            self.velocity += (pull + drag) * h;
            self.position += self.velocity * h;
        }
        if self.has_arrived() {
            self.position = self.target;
            self.velocity = 0.0;
            self.settled = true;
        }
    }
}

/// Moves a card from one layout to another along a spring.
///
/// Targets that are not flagged `animated` are applied immediately.
#[derive(Debug, Clone)]
pub struct LayoutAnimator {
    curve: SpringCurve,
    from: Layout,
    to: Layout,
    spring: Option<Spring>,
}

impl LayoutAnimator {
    /// Start at rest on `layout`.
    #[must_use]
    pub fn new(layout: Layout, curve: SpringCurve) -> Self {
        Self {
            curve,
            from: layout,
            to: layout,
            spring: None,
        }
    }

    /// Retarget toward `target`, starting from what is currently displayed.
    pub fn retarget(&mut self, target: Layout) {
        if target == self.to {
            return;
        }
        let displayed = self.current();
        self.from = displayed;
        self.to = target;
        self.spring = target.animated.then(|| self.curve.spring());
    }

    /// Advance the running spring, if any.
    pub fn tick(&mut self, dt: Duration) {
        if let Some(spring) = self.spring.as_mut() {
            spring.advance(dt);
            if spring.is_at_rest() {
                self.spring = None;
                self.from = self.to;
            }
        }
    }

    /// Whether a spring is still running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.spring.is_some()
    }

    /// Layout to display this frame.
    #[must_use]
    pub fn current(&self) -> Layout {
        match &self.spring {
            Some(spring) => Layout {
                animated: self.to.animated,
                ..self.from.interpolate(&self.to, spring.position())
            },
            None => self.to,
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::SpringCurve;

    #[test]
    fn partial_curve_fills_defaults() {
        let curve: SpringCurve =
            serde_json::from_str(r#"{ "response": 0.4 }"#).expect("partial curve");
        assert_eq!(
            curve,
            SpringCurve {
                response: 0.4,
                ..SpringCurve::default()
            }
        );
        assert_eq!(
            serde_json::from_str::<SpringCurve>("{}").expect("empty curve"),
            SpringCurve::default()
        );
    }
}
