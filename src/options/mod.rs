//! Application options with TOML file support.
//!
//! Camera projection and orbit tuning, the click-to-navigate table, the
//! scene layout and window settings are consolidated here. Every section
//! uses `#[serde(default)]`, so a file only needs the values it overrides.

mod camera;
mod navigation;
mod scene;
mod window;

use std::path::Path;

pub use camera::CameraOptions;
pub use navigation::{NavigationOptions, NavigationRule, OverlapPolicy};
pub use scene::{ObjectSpec, SceneOptions};
use serde::{Deserialize, Serialize};
pub use window::WindowOptions;

use crate::error::NavError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera projection and orbit-control parameters.
    pub camera: CameraOptions,
    /// Click-to-navigate behavior and lookup table.
    pub navigation: NavigationOptions,
    /// Objects placed in the scene.
    pub scene: SceneOptions,
    /// Window and presentation settings.
    pub window: WindowOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Io`] if the file cannot be read and
    /// [`NavError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, NavError> {
        let content = std::fs::read_to_string(path).map_err(NavError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::OptionsParse`] on malformed input.
    pub fn from_toml(content: &str) -> Result<Self, NavError> {
        toml::from_str(content).map_err(|e| NavError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`NavError`] if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), NavError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| NavError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(NavError::Io)?;
        }
        std::fs::write(path, content).map_err(NavError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::easing::EasingFunction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[navigation]
duration_ms = 250
overlap = "replace"
easing = "quadratic_out"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.navigation.duration_ms, 250);
        assert_eq!(opts.navigation.overlap, OverlapPolicy::Replace);
        assert_eq!(opts.navigation.easing, EasingFunction::QuadraticOut);
        // Untouched sections keep their defaults
        assert_eq!(opts.navigation.rules.len(), 3);
        assert_eq!(opts.camera.fovy, 75.0);
        assert_eq!(opts.scene.objects.len(), 3);
    }

    #[test]
    fn default_navigation_is_one_second_linear() {
        let opts = Options::default();
        assert_eq!(opts.navigation.duration().as_millis(), 1000);
        assert_eq!(opts.navigation.easing, EasingFunction::Linear);
        assert_eq!(opts.navigation.overlap, OverlapPolicy::Concurrent);
    }

    #[test]
    fn default_cube3_rule_is_anchored_on_cube2() {
        let opts = Options::default();
        let rule = opts
            .navigation
            .rules
            .iter()
            .find(|rule| rule.object == "cube3")
            .unwrap();
        assert_eq!(rule.anchor, "cube2");
        assert_eq!(rule.offset, [2.0, 0.0, 3.0]);
    }

    #[test]
    fn scene_objects_parse_with_default_size() {
        let toml_str = r#"
[[scene.objects]]
name = "base"
position = [0.0, 0.0, 0.0]
color = 0x336699

[[scene.objects]]
name = "top"
position = [0.0, 1.0, 0.0]
size = [0.5, 0.5, 0.5]
color = 0xffffff
parent = "base"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.scene.objects.len(), 2);
        assert_eq!(opts.scene.objects[0].size, [1.0, 1.0, 1.0]);
        assert_eq!(opts.scene.objects[1].parent.as_deref(), Some("base"));
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("navigation = 3").unwrap_err();
        assert!(matches!(err, NavError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join(format!("cubenav-opts-{}", std::process::id()));
        let path = dir.join("options.toml");
        let mut opts = Options::default();
        opts.window.title = "saved".into();
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
