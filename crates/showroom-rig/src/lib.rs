//! Showroom Rig - Scroll-driven cinematic camera
//!
//! Provides the path camera that flies a keyframed route around the vehicle,
//! driven by scroll progress, with free-look gaze steering and rotation
//! compensation against the vehicle's spin.

pub mod camera;
pub mod input;

pub use camera::{PathCamera, RigConfig, RigError};
pub use input::FrameInput;
