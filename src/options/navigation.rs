use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

/// What happens when a click starts a camera run while another is in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// Every run proceeds independently; runs are applied in start order
    /// each frame, so the newest one decides where the camera ends up.
    #[default]
    Concurrent,
    /// A new run cancels whatever is in flight.
    Replace,
}

/// One entry of the click-to-navigate table.
///
/// Clicking `object` flies the camera to `anchor`'s position plus `offset`.
/// The anchor is usually the clicked object itself, but need not be.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavigationRule {
    /// Name of the clicked object.
    pub object: String,
    /// Name of the object whose position the offset is applied to.
    pub anchor: String,
    /// Offset from the anchor's world position.
    pub offset: [f32; 3],
}

impl NavigationRule {
    /// Rule anchored on `anchor` for clicks on `object`.
    #[must_use]
    pub fn new(
        object: impl Into<String>,
        anchor: impl Into<String>,
        offset: [f32; 3],
    ) -> Self {
        Self {
            object: object.into(),
            anchor: anchor.into(),
            offset,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Click-to-navigate behavior.
pub struct NavigationOptions {
    /// Length of a camera run in milliseconds.
    pub duration_ms: u64,
    /// Interpolation curve for camera runs.
    pub easing: EasingFunction,
    /// Handling of overlapping runs.
    pub overlap: OverlapPolicy,
    /// Name → target table.
    pub rules: Vec<NavigationRule>,
}

impl NavigationOptions {
    /// Camera run length.
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            duration_ms: 1000,
            easing: EasingFunction::Linear,
            overlap: OverlapPolicy::Concurrent,
            // cube3 is anchored on cube2. That is how the scene has always
            // behaved; change the anchor here to fly to cube3 itself.
            rules: vec![
                NavigationRule::new("cube1", "cube1", [0.0, 0.0, 4.0]),
                NavigationRule::new("cube2", "cube2", [3.0, 3.0, 0.0]),
                NavigationRule::new("cube3", "cube2", [2.0, 0.0, 3.0]),
            ],
        }
    }
}
