//! The one piece of state that persists across frames.

use crate::matrix::Mat4;

/// Angular increment per tick, in radians.
pub const DEFAULT_STEP: f32 = 0.02;

/// Rotation accumulator owned by the frame driver.
///
/// Pure accumulation with no feedback: after N ticks from zero the angle
/// is the N-fold repeated sum of the step. The model-view matrix is
/// recomputed from the angle every frame rather than updated
/// incrementally, so rounding never accumulates across frames.
#[derive(Clone, Copy, Debug)]
pub struct RotationState {
    angle: f32,
    step: f32,
}

impl RotationState {
    /// Start at angle zero with the default step.
    pub fn new() -> Self {
        Self::with_step(DEFAULT_STEP)
    }

    /// Start at angle zero with a custom step.
    pub fn with_step(step: f32) -> Self {
        Self { angle: 0.0, step }
    }

    /// Current angle in radians.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.angle += self.step;
    }

    /// Recompute the model-view matrix from the current angle:
    /// identity composed with a pure Z-axis rotation.
    pub fn model_view(&self) -> Mat4 {
        Mat4::rotation_z(self.angle)
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::new()
    }
}

// ===================================================================
// Tests
// ===================================================================
