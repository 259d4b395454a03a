//! Click-to-navigate: turn a click on a named object into a camera run.
//!
//! A click is picked against the scene, the nearest object's name is looked
//! up in the [`NavigationTable`], and the resolved world target is handed to
//! the [`CameraAnimator`]. Clicks on empty space or on objects without a
//! rule do nothing beyond logging.

use std::fmt;
use std::time::Duration;

use glam::{Vec2, Vec3};
use rustc_hash::FxHashMap;

use crate::animation::CameraAnimator;
use crate::engine::AppContext;
use crate::options::NavigationOptions;
use crate::picking;
use crate::scene::SceneRegistry;

/// Why a name could not be turned into a camera target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No rule exists for the object.
    UnknownObject(String),
    /// The rule's anchor object is not in the scene.
    MissingAnchor {
        /// Object the rule is for.
        object: String,
        /// Anchor the rule names.
        anchor: String,
    },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownObject(name) => write!(f, "no navigation rule for '{name}'"),
            Self::MissingAnchor { object, anchor } => {
                write!(f, "rule for '{object}' anchors on missing object '{anchor}'")
            }
        }
    }
}

impl std::error::Error for ResolveError {}

#[derive(Debug, Clone, PartialEq)]
struct Target {
    anchor: String,
    offset: Vec3,
}

/// Name → (anchor, offset) lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationTable {
    targets: FxHashMap<String, Target>,
}

impl NavigationTable {
    /// Build the table from configured rules. Later rules for the same
    /// object replace earlier ones.
    #[must_use]
    pub fn from_options(options: &NavigationOptions) -> Self {
        let mut targets = FxHashMap::default();
        for rule in &options.rules {
            let previous = targets.insert(
                rule.object.clone(),
                Target {
                    anchor: rule.anchor.clone(),
                    offset: Vec3::from(rule.offset),
                },
            );
            if previous.is_some() {
                log::warn!("duplicate navigation rule for '{}', keeping the last", rule.object);
            }
        }
        Self { targets }
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether the table has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// World-space camera target for a click on `name`.
    ///
    /// # Errors
    ///
    /// [`ResolveError::UnknownObject`] if no rule names `name`;
    /// [`ResolveError::MissingAnchor`] if the rule's anchor is not registered.
    pub fn resolve(&self, name: &str, registry: &SceneRegistry) -> Result<Vec3, ResolveError> {
        let target = self
            .targets
            .get(name)
            .ok_or_else(|| ResolveError::UnknownObject(name.to_owned()))?;
        let anchor = registry
            .id_of(&target.anchor)
            .and_then(|id| registry.world_position(id))
            .ok_or_else(|| ResolveError::MissingAnchor {
                object: name.to_owned(),
                anchor: target.anchor.clone(),
            })?;
        Ok(anchor + target.offset)
    }
}

/// What a click ended up doing.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// Nothing under the cursor.
    Missed,
    /// A camera run toward `target` was started.
    Navigating {
        /// Name of the clicked object.
        object: String,
        /// Where the camera is headed.
        target: Vec3,
    },
    /// The clicked object has no usable rule.
    Unrecognized {
        /// Name of the clicked object.
        name: String,
    },
}

/// Handles clicks: pick, resolve, start a camera run.
#[derive(Debug, Clone)]
pub struct ClickNavigator {
    table: NavigationTable,
    duration: Duration,
}

impl ClickNavigator {
    /// Navigator with the configured table and run length.
    #[must_use]
    pub fn new(options: &NavigationOptions) -> Self {
        Self {
            table: NavigationTable::from_options(options),
            duration: options.duration(),
        }
    }

    /// The lookup table.
    #[must_use]
    pub fn table(&self) -> &NavigationTable {
        &self.table
    }

    /// Length of each camera run.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Handle a click at `screen` on a `viewport`-sized surface.
    pub fn handle_click(
        &self,
        ctx: &AppContext,
        animator: &mut CameraAnimator,
        screen: Vec2,
        viewport: (u32, u32),
    ) -> ClickOutcome {
        let hits = picking::pick(&ctx.camera, &ctx.registry, screen, viewport);
        let Some(nearest) = hits.into_iter().next() else {
            return ClickOutcome::Missed;
        };

        log::info!("clicked {}", nearest.name);

        match self.table.resolve(&nearest.name, &ctx.registry) {
            Ok(target) => {
                animator.animate(&ctx.camera, target, self.duration);
                ClickOutcome::Navigating {
                    object: nearest.name,
                    target,
                }
            }
            Err(e) => {
                log::error!("unrecognized click target: {e}");
                ClickOutcome::Unrecognized { name: nearest.name }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{NavigationRule, Options};
    use crate::scene::{SceneObject, Shape};

    const VIEWPORT: (u32, u32) = (800, 600);

    fn context() -> AppContext {
        AppContext::new(&Options::default(), VIEWPORT).unwrap()
    }

    fn screen_of(ctx: &AppContext, name: &str) -> Vec2 {
        let world = ctx.registry.world_position(ctx.registry.id_of(name).unwrap()).unwrap();
        let ndc = ctx.camera.build_matrix().project_point3(world);
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * VIEWPORT.0 as f32,
            (1.0 - ndc.y) * 0.5 * VIEWPORT.1 as f32,
        )
    }

    fn navigator() -> ClickNavigator {
        ClickNavigator::new(&NavigationOptions::default())
    }

    #[test]
    fn default_table_resolves_three_cubes() {
        let ctx = context();
        let table = navigator().table().clone();
        assert_eq!(table.len(), 3);
        assert_eq!(table.resolve("cube1", &ctx.registry), Ok(Vec3::new(0.0, 0.0, 4.0)));
        assert_eq!(table.resolve("cube2", &ctx.registry), Ok(Vec3::new(6.0, 6.0, 0.0)));
    }

    #[test]
    fn cube3_resolves_relative_to_cube2() {
        let ctx = context();
        let target = navigator().table().resolve("cube3", &ctx.registry).unwrap();
        // cube2 (3, 3, 0) + (2, 0, 3), not cube3 (2, 0, 3) + (2, 0, 3)
        assert_eq!(target, Vec3::new(5.0, 3.0, 3.0));
    }

    #[test]
    fn unknown_and_unanchored_rules_fail() {
        let ctx = context();
        let options = NavigationOptions {
            rules: vec![NavigationRule::new("cube1", "ghost", [0.0; 3])],
            ..NavigationOptions::default()
        };
        let table = NavigationTable::from_options(&options);
        assert_eq!(
            table.resolve("cube2", &ctx.registry),
            Err(ResolveError::UnknownObject("cube2".into()))
        );
        assert!(matches!(
            table.resolve("cube1", &ctx.registry),
            Err(ResolveError::MissingAnchor { .. })
        ));
    }

    #[test]
    fn clicking_each_cube_starts_a_one_second_run() {
        let ctx = context();
        let navigator = navigator();
        let cases = [
            ("cube1", Vec3::new(0.0, 0.0, 4.0)),
            ("cube2", Vec3::new(6.0, 6.0, 0.0)),
            ("cube3", Vec3::new(5.0, 3.0, 3.0)),
        ];
        for (name, expected) in cases {
            let mut animator = CameraAnimator::default();
            let outcome =
                navigator.handle_click(&ctx, &mut animator, screen_of(&ctx, name), VIEWPORT);
            assert_eq!(
                outcome,
                ClickOutcome::Navigating {
                    object: name.into(),
                    target: expected
                }
            );
            let run = &animator.tweens()[0];
            assert_eq!(run.from(), ctx.camera.eye);
            assert_eq!(run.to(), expected);
            assert_eq!(run.duration(), Duration::from_millis(1000));
        }
    }

    #[test]
    fn clicking_empty_space_does_nothing() {
        let ctx = context();
        let mut animator = CameraAnimator::default();
        let outcome = navigator().handle_click(&ctx, &mut animator, Vec2::new(5.0, 5.0), VIEWPORT);
        assert_eq!(outcome, ClickOutcome::Missed);
        assert!(!animator.is_animating());
    }

    #[test]
    fn clicking_an_object_without_a_rule_is_unrecognized() {
        let mut ctx = context();
        ctx.registry
            .add(SceneObject::new(
                "stray",
                Vec3::new(0.0, 0.0, 5.0),
                Shape::UNIT_CUBE,
                [1.0; 3],
            ))
            .unwrap();
        let mut animator = CameraAnimator::default();
        let outcome =
            navigator().handle_click(&ctx, &mut animator, Vec2::new(400.0, 300.0), VIEWPORT);
        assert_eq!(outcome, ClickOutcome::Unrecognized { name: "stray".into() });
        assert!(!animator.is_animating());
    }
}
