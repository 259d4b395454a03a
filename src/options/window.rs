use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Window and presentation settings.
pub struct WindowOptions {
    /// Window title (native only).
    pub title: String,
    /// Background color, linear RGB.
    pub clear_color: [f32; 3],
    /// Frame cap (0 = unlimited, vsync-bound).
    pub target_fps: u32,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            title: "cubenav".into(),
            clear_color: [0.0, 0.0, 0.0],
            target_fps: 0,
        }
    }
}
