//! Path camera: flies the keyframed route as the user scrolls

use glam::{Quat, Vec2, Vec3};
use thiserror::Error;
use tracing::trace;

use showroom_core::spline::{CatmullRom3, SplineError};
use showroom_core::types::{CameraPose, Keyframe};

use crate::input::FrameInput;

use super::RigConfig;

/// Errors from rig construction
#[derive(Debug, Clone, Error)]
pub enum RigError {
    #[error("invalid camera path: {0}")]
    InvalidPath(#[from] SplineError),
}

/// Scroll-driven cinematic camera.
///
/// Owns two Catmull-Rom curves built once from the keyframe sequence, one
/// through the camera positions and one through the look targets. Each frame
/// it maps scroll progress to a point on both curves, spins the result with
/// the vehicle, steers the gaze by the damped free-look offset and commits
/// the resulting pose. The only state that survives a frame is the free-look
/// offset and the last committed pose.
pub struct PathCamera {
    config: RigConfig,
    position_curve: CatmullRom3,
    target_curve: CatmullRom3,
    /// Damped gaze offset, world units; persists across frames
    look_offset: Vec3,
    pose: CameraPose,
    on_step: Option<Box<dyn FnMut(usize)>>,
}

impl PathCamera {
    /// Build a rig from the ordered keyframe path with default tuning
    pub fn new(path: &[Keyframe]) -> Result<Self, RigError> {
        Self::with_config(path, RigConfig::default())
    }

    /// Build a rig from the ordered keyframe path.
    ///
    /// Fails when the path has fewer than 2 keyframes or consecutive
    /// keyframes coincide in either the position or the target sequence.
    pub fn with_config(path: &[Keyframe], config: RigConfig) -> Result<Self, RigError> {
        let positions = path.iter().map(|k| k.position).collect();
        let targets = path.iter().map(|k| k.target).collect();
        let position_curve = CatmullRom3::with_tension(positions, config.tension)?;
        let target_curve = CatmullRom3::with_tension(targets, config.tension)?;

        Ok(Self {
            config,
            position_curve,
            target_curve,
            look_offset: Vec3::ZERO,
            pose: CameraPose::default(),
            on_step: None,
        })
    }

    /// Register the overlay callback, invoked with the nearest keyframe
    /// index at most once per update
    pub fn set_step_callback(&mut self, callback: impl FnMut(usize) + 'static) {
        self.on_step = Some(Box::new(callback));
    }

    /// Number of keyframes on the path
    pub fn step_count(&self) -> usize {
        self.position_curve.len()
    }

    /// The pose committed by the most recent update
    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    /// Current free-look gaze offset
    pub fn look_offset(&self) -> Vec3 {
        self.look_offset
    }

    /// Advance the rig by one rendered frame and return the step index.
    ///
    /// The step index rounds to the *nearest* keyframe, not the segment
    /// currently being sampled; with unevenly spaced keyframes the overlay
    /// can switch a little ahead of or behind the camera. That is a display
    /// approximation, kept on purpose.
    pub fn update(&mut self, input: &FrameInput, delta: f32) -> usize {
        let progress = input.progress();
        let last = self.position_curve.len() - 1;
        let step = (progress * last as f32).round() as usize;
        if let Some(on_step) = self.on_step.as_mut() {
            on_step(step);
        }

        let mut position = self.position_curve.sample(progress);
        let mut target = self.target_curve.sample(progress);
        if !position.is_finite() || !target.is_finite() {
            trace!(progress, "skipping pose update: non-finite curve sample");
            return step;
        }

        // The path is authored in the vehicle's frame. When the body spins,
        // rotate both sampled points around world Y at the origin so the
        // whole route spins with it. The curve data itself is never touched.
        if let Some(yaw) = input.vehicle_yaw {
            if yaw != 0.0 {
                let spin = Quat::from_rotation_y(yaw);
                position = spin * position;
                target = spin * target;
            }
        }

        let delta = delta.max(0.0);
        let desired = if input.free_look {
            self.desired_look_offset(position, target, input.pointer)
        } else {
            Some(Vec3::ZERO)
        };
        if let Some(desired) = desired {
            let blend = (delta * self.config.look_damping).min(1.0);
            self.look_offset += (desired - self.look_offset) * blend;
        }

        // The offset steers the gaze only; the camera body stays on the path.
        self.pose = CameraPose::new(position, target + self.look_offset);
        step
    }

    /// Where the gaze offset should settle for the current pointer reading,
    /// in a basis aligned with the view. `None` when the view direction is
    /// degenerate (zero length or parallel to world up).
    fn desired_look_offset(&self, position: Vec3, target: Vec3, pointer: Vec2) -> Option<Vec3> {
        let view_dir = (target - position).try_normalize()?;
        let right = view_dir.cross(Vec3::Y).try_normalize()?;
        let cam_up = right.cross(view_dir).normalize();

        let s = self.config.look_sensitivity;
        Some(right * (pointer.x * s) + cam_up * (pointer.y * s))
    }
}
