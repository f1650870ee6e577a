//! Narrative overlay driven by the camera's step index
//!
//! Consumes only the integer step index reported by the rig and re-renders
//! when it changes. The index is a nearest-keyframe approximation, so the
//! overlay may flip slightly ahead of the camera between unevenly spaced
//! stops.

use showroom_core::Keyframe;

/// Overlay panel state
pub struct Overlay {
    steps: Vec<Keyframe>,
    current: usize,
}

impl Overlay {
    pub fn new(steps: Vec<Keyframe>) -> Self {
        Self { steps, current: 0 }
    }

    /// Feed a step index; returns whether the panel changed.
    /// Out-of-range indices clamp into the valid range.
    pub fn set_step(&mut self, index: usize) -> bool {
        let clamped = match self.steps.len() {
            0 => 0,
            len => index.min(len - 1),
        };
        if clamped == self.current {
            return false;
        }
        self.current = clamped;
        true
    }

    /// The stop currently narrated, falling back to the first stop
    pub fn current(&self) -> Option<&Keyframe> {
        self.steps.get(self.current).or_else(|| self.steps.first())
    }

    /// Render the panel as terminal text
    pub fn render(&self) -> String {
        let Some(info) = self.current() else {
            return String::new();
        };

        let strip: String = (0..self.steps.len())
            .map(|idx| if idx == self.current { '█' } else { '░' })
            .collect();

        let mut panel = String::new();
        panel.push_str(info.text.as_deref().unwrap_or(""));
        panel.push('\n');
        panel.push_str(info.subtext.as_deref().unwrap_or(""));
        panel.push('\n');
        if let Some(description) = &info.description {
            panel.push_str(description);
            panel.push('\n');
        }
        panel.push_str(&format!(
            "{strip}  {}/{}",
            self.current + 1,
            self.steps.len()
        ));
        panel
    }
}
