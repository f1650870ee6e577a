//! Per-frame input snapshot for the camera rig
//!
//! The host gathers the providers' current readings into one value per
//! rendered frame. Providers that have not initialized yet read as `None`.

use glam::Vec2;

/// Everything the rig consumes for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Normalized scroll offset in `[0, 1]`; `None` before the scroll
    /// provider initializes
    pub scroll: Option<f32>,
    /// Pointer position in normalized device coordinates, `[-1, 1]` per axis
    pub pointer: Vec2,
    /// Current yaw of the vehicle root in radians; `None` until the model
    /// has loaded
    pub vehicle_yaw: Option<f32>,
    /// Whether pointer-driven free look is active this frame
    pub free_look: bool,
}

impl FrameInput {
    /// Create an empty snapshot (no providers initialized)
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot with only a scroll reading, everything else idle
    pub fn at_progress(scroll: f32) -> Self {
        Self {
            scroll: Some(scroll),
            ..Self::default()
        }
    }

    /// Scroll progress with absence and range handled: missing reads as 0,
    /// out-of-range values clamp
    pub fn progress(&self) -> f32 {
        self.scroll.unwrap_or(0.0).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_defaults_and_clamps() {
        assert_eq!(FrameInput::new().progress(), 0.0);
        assert_eq!(FrameInput::at_progress(0.4).progress(), 0.4);
        assert_eq!(FrameInput::at_progress(-2.0).progress(), 0.0);
        assert_eq!(FrameInput::at_progress(1.7).progress(), 1.0);
    }
}
