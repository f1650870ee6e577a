//! Camera system module
//!
//! Provides the scroll-driven path camera with free-look gaze steering.

mod config;
mod controller;

pub use config::RigConfig;
pub use controller::{PathCamera, RigError};
