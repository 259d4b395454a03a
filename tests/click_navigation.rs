//! Click-to-navigate through the public API, without a window or GPU.

use std::convert::Infallible;
use std::sync::{Mutex, Once};
use std::time::Duration;

use cubenav::camera::Camera;
use cubenav::scene::SceneRegistry;
use cubenav::{ClickOutcome, FrameSink, InputEvent, MouseButton, NavEngine, Options};
use glam::{Vec2, Vec3};

const VIEWPORT: (u32, u32) = (1024, 768);
const FRAME: Duration = Duration::from_millis(16);

#[derive(Default)]
struct CountingSink {
    frames: usize,
    last_eye: Option<Vec3>,
}

impl FrameSink for CountingSink {
    type Error = Infallible;

    fn draw(&mut self, _registry: &SceneRegistry, camera: &Camera) -> Result<(), Infallible> {
        self.frames += 1;
        self.last_eye = Some(camera.eye);
        Ok(())
    }
}

static LOGGED: Mutex<Vec<(log::Level, String)>> = Mutex::new(Vec::new());

struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        if let Ok(mut logged) = LOGGED.lock() {
            logged.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: CaptureLogger = CaptureLogger;

fn capture_logs() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        log::set_logger(&CAPTURE).unwrap();
        log::set_max_level(log::LevelFilter::Info);
    });
}

fn logged_error_mentions(needle: &str) -> bool {
    LOGGED
        .lock()
        .unwrap()
        .iter()
        .any(|(level, line)| *level == log::Level::Error && line.contains(needle))
}

fn single_rule(offset: [f32; 3]) -> Options {
    Options::from_toml(&format!(
        r#"
[[navigation.rules]]
object = "cube1"
anchor = "cube1"
offset = [{:?}, {:?}, {:?}]
"#,
        offset[0], offset[1], offset[2]
    ))
    .unwrap()
}

fn screen_of(engine: &NavEngine, name: &str) -> Vec2 {
    let registry = engine.registry();
    let world = registry
        .id_of(name)
        .and_then(|id| registry.world_position(id))
        .unwrap();
    let ndc = engine.camera().build_matrix().project_point3(world);
    Vec2::new(
        (ndc.x + 1.0) * 0.5 * VIEWPORT.0 as f32,
        (1.0 - ndc.y) * 0.5 * VIEWPORT.1 as f32,
    )
}

fn click(engine: &mut NavEngine, at: Vec2) {
    engine.handle_event(InputEvent::CursorMoved { x: at.x, y: at.y });
    for pressed in [true, false] {
        engine.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed,
        });
    }
}

fn settle(engine: &mut NavEngine, sink: &mut CountingSink) {
    for _ in 0..120 {
        engine.frame_with_dt(sink, FRAME).unwrap();
    }
}

#[test]
fn each_cube_sends_the_camera_to_its_table_entry() {
    let expected = [
        ("cube1", Vec3::new(0.0, 0.0, 4.0)),
        ("cube2", Vec3::new(6.0, 6.0, 0.0)),
        ("cube3", Vec3::new(5.0, 3.0, 3.0)),
    ];
    for (name, target) in expected {
        let mut engine = NavEngine::new(Options::default(), VIEWPORT).unwrap();
        let mut sink = CountingSink::default();
        let at = screen_of(&engine, name);
        click(&mut engine, at);
        assert!(engine.is_animating(), "{name} did not start a run");

        settle(&mut engine, &mut sink);
        assert_eq!(engine.camera().eye, target, "{name}");
        assert_eq!(sink.last_eye, Some(target));
        assert!(!engine.is_animating());
    }
}

#[test]
fn empty_space_leaves_the_camera_alone() {
    let mut engine = NavEngine::new(Options::default(), VIEWPORT).unwrap();
    let before = engine.camera().clone();
    assert_eq!(engine.click(Vec2::new(3.0, 3.0)), ClickOutcome::Missed);

    let mut sink = CountingSink::default();
    settle(&mut engine, &mut sink);
    assert_eq!(engine.camera(), &before);
    assert_eq!(sink.frames, 120);
}

#[test]
fn options_file_changes_run_length_and_table() {
    let options = Options::from_toml(
        r#"
[navigation]
duration_ms = 100

[[navigation.rules]]
object = "cube1"
anchor = "cube1"
offset = [0.0, 2.0, 6.0]
"#,
    )
    .unwrap();
    let mut engine = NavEngine::new(options, VIEWPORT).unwrap();
    let at = screen_of(&engine, "cube1");
    assert_eq!(
        engine.click(at),
        ClickOutcome::Navigating {
            object: "cube1".into(),
            target: Vec3::new(0.0, 2.0, 6.0),
        }
    );

    let mut sink = CountingSink::default();
    for _ in 0..7 {
        engine.frame_with_dt(&mut sink, FRAME).unwrap();
    }
    assert_eq!(engine.camera().eye, Vec3::new(0.0, 2.0, 6.0));

    capture_logs();
    let before = engine.camera().clone();
    let at = screen_of(&engine, "cube2");
    assert_eq!(
        engine.click(at),
        ClickOutcome::Unrecognized {
            name: "cube2".into()
        }
    );
    assert!(logged_error_mentions("'cube2'"));

    settle(&mut engine, &mut sink);
    assert_eq!(engine.camera(), &before);
}

#[test]
fn targets_closer_than_the_zoom_limit_land_exactly() {
    let mut engine = NavEngine::new(single_rule([0.0, 0.0, 0.2]), VIEWPORT).unwrap();
    let center = Vec2::new(VIEWPORT.0 as f32 / 2.0, VIEWPORT.1 as f32 / 2.0);
    assert_eq!(
        engine.click(center),
        ClickOutcome::Navigating {
            object: "cube1".into(),
            target: Vec3::new(0.0, 0.0, 0.2),
        }
    );

    let mut sink = CountingSink::default();
    settle(&mut engine, &mut sink);
    assert_eq!(engine.camera().eye, Vec3::new(0.0, 0.0, 0.2));
}

#[test]
fn target_straight_above_the_pivot_lands_exactly() {
    let mut engine = NavEngine::new(single_rule([0.0, 4.0, 0.0]), VIEWPORT).unwrap();
    let at = screen_of(&engine, "cube1");
    assert!(matches!(engine.click(at), ClickOutcome::Navigating { .. }));

    let mut sink = CountingSink::default();
    settle(&mut engine, &mut sink);
    assert_eq!(engine.camera().eye, Vec3::new(0.0, 4.0, 0.0));
    assert!(engine.camera().build_matrix().is_finite());
}
