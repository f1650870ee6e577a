//! Showroom Core - Foundational types for the showcase
//!
//! This crate provides the types shared across the showcase:
//! - Mathematical primitives (re-exported from glam)
//! - Keyframe and camera pose types
//! - The Catmull-Rom path spline
//! - Frame timing for render-loop hosts

pub mod spline;
pub mod time;
pub mod types;

pub use glam::{Mat4, Quat, Vec2, Vec3};
pub use spline::{CatmullRom3, SplineError};
pub use time::FrameClock;
pub use types::{CameraPose, Keyframe};
