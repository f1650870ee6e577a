//! Core types shared across the showcase

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// A single authored stop on the camera path.
///
/// `position` and `target` are expressed in the vehicle-local frame: the rig
/// rotates them into world space when the vehicle spins. The optional strings
/// feed the narrative overlay and carry no meaning for the camera itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Camera position for this stop
    pub position: Vec3,
    /// Point the camera looks at for this stop
    pub target: Vec3,
    /// Headline shown by the overlay
    pub text: Option<String>,
    /// Secondary caption shown by the overlay
    pub subtext: Option<String>,
    /// Longer flavor copy for this stop
    pub description: Option<String>,
}

impl Keyframe {
    /// Create a keyframe with no overlay copy
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            text: None,
            subtext: None,
            description: None,
        }
    }

    /// Attach the overlay headline and caption
    pub fn with_caption(mut self, text: impl Into<String>, subtext: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self.subtext = Some(subtext.into());
        self
    }

    /// Attach the longer flavor copy
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Where the camera sits and what it looks at, recomputed every frame.
///
/// Orientation is derived from a look-at toward `target` with world Y as the
/// up reference, so no roll is ever introduced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
        }
    }
}

impl CameraPose {
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    /// View direction, or `None` when position and target coincide
    pub fn forward(&self) -> Option<Vec3> {
        (self.target - self.position).try_normalize()
    }

    /// Right-handed view matrix for the render system
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyframe_builder() {
        let frame = Keyframe::new(Vec3::new(2.5, 1.4, 4.0), Vec3::new(-1.09, 0.4, 0.0))
            .with_caption("THE GHOST", "INITIATING SEQUENCE");
        assert_eq!(frame.text.as_deref(), Some("THE GHOST"));
        assert_eq!(frame.subtext.as_deref(), Some("INITIATING SEQUENCE"));
        assert!(frame.description.is_none());
    }

    #[test]
    fn test_pose_forward() {
        let pose = CameraPose::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -3.0));
        let forward = pose.forward().unwrap();
        assert!((forward - Vec3::NEG_Z).length() < 1e-6);

        let degenerate = CameraPose::new(Vec3::ONE, Vec3::ONE);
        assert!(degenerate.forward().is_none());
    }

    #[test]
    fn test_view_matrix_translates_eye_to_origin() {
        let pose = CameraPose::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO);
        let eye = pose.view_matrix().transform_point3(pose.position);
        assert!(eye.length() < 1e-5);
    }
}
