//! Camera rig configuration

use serde::{Deserialize, Serialize};

/// Rig tuning parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RigConfig {
    /// Gaze offset in world units when the pointer reaches the viewport edge
    pub look_sensitivity: f32,
    /// Exponential rate at which the gaze offset chases its target
    pub look_damping: f32,
    /// Catmull-Rom tension for the path curves
    pub tension: f32,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            look_sensitivity: 3.0,
            look_damping: 5.0,
            tension: 0.5,
        }
    }
}
