//! # Motion Module
//!
//! The animation heart: one smoothed scalar drives the whole scene.
//!
//! The user toggles between two discrete phases (chaos cloud, formed tree);
//! [`ProgressDriver`] turns that toggle into a continuous `progress` value in
//! `[0, 1]` using exponential smoothing, and the easing functions below map
//! that global value to per-entity local progress:
//!
//! - **Field points** (foliage) use `progress` directly, on the GPU.
//! - **Weighted instances** (ornaments) use [`lagged_progress`], so heavy
//!   gift boxes settle long after the light lamps have landed.
//! - **Fixed-curve instances** (photo frames) use [`eased_progress`] with a
//!   shared exponent.
//!
//! Nothing here allocates or fails; the tuning values are validated once at
//! config-load time and trusted on the frame path.

use crate::config::DriverTuning;

/// The two discrete states the scene animates between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScenePhase {
    /// Everything dispersed into the floating cloud.
    Chaos,
    /// Everything settled onto the tree.
    Formed,
}

impl ScenePhase {
    /// The progress value this phase drives toward.
    #[must_use]
    pub const fn target_progress(self) -> f32 {
        match self {
            Self::Chaos => 0.0,
            Self::Formed => 1.0,
        }
    }

    /// The opposite phase.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Chaos => Self::Formed,
            Self::Formed => Self::Chaos,
        }
    }
}

/// Exponential-smoothing driver for the global progress scalar.
///
/// Every frame, [`advance`](Self::advance) moves `progress` a fraction of the
/// remaining distance toward the current phase's target and snaps to the
/// exact target once within `snap_epsilon`. The transition is symmetric in
/// both directions, and a phase toggle mid-flight simply reverses the drive
/// from wherever progress currently sits.
///
/// Stability invariant (enforced by `SceneConfig::validate`):
/// `rate * gain * max_delta < 1`, so a single step can never cross the
/// target. Given that, `progress` stays inside `[0, 1]` forever.
#[derive(Clone, Copy, Debug)]
pub struct ProgressDriver {
    progress: f32,
    phase: ScenePhase,
    tuning: DriverTuning,
}

impl ProgressDriver {
    /// Creates a driver already settled at `phase`'s target.
    #[must_use]
    pub fn new(phase: ScenePhase, tuning: DriverTuning) -> Self {
        Self {
            progress: phase.target_progress(),
            phase,
            tuning,
        }
    }

    /// Current smoothed progress in `[0, 1]`.
    #[must_use]
    pub const fn progress(&self) -> f32 {
        self.progress
    }

    /// Current phase being driven toward.
    #[must_use]
    pub const fn phase(&self) -> ScenePhase {
        self.phase
    }

    /// True once progress sits exactly on the phase target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.progress == self.phase.target_progress()
    }

    /// Sets the phase to drive toward. Progress is untouched; the next
    /// [`advance`](Self::advance) steers from wherever it currently is.
    pub fn set_phase(&mut self, phase: ScenePhase) {
        self.phase = phase;
    }

    /// Flips the phase and returns the new one.
    pub fn toggle(&mut self) -> ScenePhase {
        self.phase = self.phase.toggled();
        self.phase
    }

    /// Steps progress by one frame and returns the new value.
    ///
    /// `delta` is the frame time in seconds. It is clamped to
    /// `[0, max_delta]` first: a debugger pause or window drag must not let
    /// one giant step hurl progress past the target, and a clock that runs
    /// backwards must not reverse the animation.
    pub fn advance(&mut self, delta: f32) -> f32 {
        let delta = delta.clamp(0.0, self.tuning.max_delta);
        let target = self.phase.target_progress();
        if (self.progress - target).abs() > self.tuning.snap_epsilon {
            self.progress += (target - self.progress) * delta * self.tuning.rate * self.tuning.gain;
        } else {
            self.progress = target;
        }
        self.progress
    }
}

/// Maps global progress through an entity's lag weight.
///
/// Computes `progress ^ (1 / lag_weight)`. A small weight makes the exponent
/// large, so local progress stays near zero until global progress approaches
/// one and the entity lands late with a snap. A weight of 1 is a linear
/// response.
///
/// `lag_weight` must be positive; config validation guarantees it before any
/// frame runs.
#[must_use]
#[inline]
pub fn lagged_progress(progress: f32, lag_weight: f32) -> f32 {
    progress.powf(lag_weight.recip())
}

/// Maps global progress through a fixed exponent curve.
///
/// Computes `progress ^ exponent`. Exponents below 1 lead the global value
/// (photo frames drift into place early); above 1 they trail it.
#[must_use]
#[inline]
pub fn eased_progress(progress: f32, exponent: f32) -> f32 {
    progress.powf(exponent)
}
