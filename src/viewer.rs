//! Standalone window backed by winit.
//!
//! Natively the GPU is initialized synchronously when the window appears.
//! In the browser the canvas is appended to the document body and the GPU
//! is initialized asynchronously; frames are skipped until it is ready.
//!
//! ```no_run
//! # use cubenav::Viewer;
//! Viewer::builder()
//!     .with_title("cubes")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::{cell::RefCell, rc::Rc, sync::Arc};

use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

use crate::{
    error::NavError, gpu::render_context::RenderContext, options::Options,
    renderer::SceneRenderer, InputEvent, MouseButton, NavEngine,
};

/// Wheel pixels per scroll line for touchpads and browsers.
const PIXELS_PER_LINE: f32 = 100.0;

/// Renderer that may still be initializing.
type RendererSlot = Rc<RefCell<Option<SceneRenderer>>>;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: Option<String>,
}

impl ViewerBuilder {
    fn new() -> Self {
        Self {
            options: None,
            title: None,
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title, overriding the options' title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        let options = self.options.unwrap_or_default();
        let title = self.title.unwrap_or_else(|| options.window.title.clone());
        Viewer { options, title }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A window showing the cube scene.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Natively this blocks until
    /// the window is closed; in the browser it returns once the loop is
    /// handed to the page.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Scene`] if the configured scene is invalid and
    /// [`NavError::Viewer`] if the event loop cannot be created or fails.
    pub fn run(self) -> Result<(), NavError> {
        let engine = NavEngine::new(self.options, (1, 1))?;

        let event_loop = EventLoop::new().map_err(|e| NavError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let app = ViewerApp {
            window: None,
            engine,
            renderer: Rc::new(RefCell::new(None)),
            drawing: false,
            title: self.title,
        };
        start(event_loop, app)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn start(event_loop: EventLoop<()>, mut app: ViewerApp) -> Result<(), NavError> {
    event_loop
        .run_app(&mut app)
        .map_err(|e| NavError::Viewer(e.to_string()))
}

#[cfg(target_arch = "wasm32")]
#[allow(clippy::unnecessary_wraps)]
fn start(event_loop: EventLoop<()>, app: ViewerApp) -> Result<(), NavError> {
    use winit::platform::web::EventLoopExtWebSys;
    event_loop.spawn_app(app);
    Ok(())
}

// ── Winit app ────────────────────────────────────────────────────────────

struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: NavEngine,
    renderer: RendererSlot,
    /// Whether a frame has been drawn since the renderer became ready.
    drawing: bool,
    title: String,
}

/// Surface size for a window, never zero.
fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

#[cfg(not(target_arch = "wasm32"))]
fn window_attributes(event_loop: &ActiveEventLoop, title: &str) -> WindowAttributes {
    let attrs = Window::default_attributes().with_title(title);
    let Some(monitor) = event_loop
        .primary_monitor()
        .or_else(|| event_loop.available_monitors().next())
    else {
        return attrs;
    };
    let size = monitor.size();
    let scale = monitor.scale_factor();
    attrs.with_inner_size(winit::dpi::LogicalSize::new(
        f64::from(size.width) / scale * 0.75,
        f64::from(size.height) / scale * 0.75,
    ))
}

#[cfg(target_arch = "wasm32")]
fn window_attributes(_event_loop: &ActiveEventLoop, title: &str) -> WindowAttributes {
    use winit::platform::web::WindowAttributesExtWebSys;

    let attrs = Window::default_attributes()
        .with_title(title)
        .with_append(true)
        .with_prevent_default(true);
    let Some(page) = web_sys::window() else {
        return attrs;
    };
    let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64())
    };
    match (dimension(page.inner_width()), dimension(page.inner_height())) {
        (Some(width), Some(height)) => {
            attrs.with_inner_size(winit::dpi::LogicalSize::new(width, height))
        }
        _ => attrs,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_renderer(slot: &RendererSlot, window: Arc<Window>, size: (u32, u32), options: Options) {
    match pollster::block_on(RenderContext::new(window, size)) {
        Ok(context) => {
            *slot.borrow_mut() = Some(SceneRenderer::new(context, &options.window));
        }
        Err(e) => log::error!("failed to initialize GPU: {e}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn spawn_renderer(slot: &RendererSlot, window: Arc<Window>, size: (u32, u32), options: Options) {
    let slot = Rc::clone(slot);
    wasm_bindgen_futures::spawn_local(async move {
        match RenderContext::new(Arc::clone(&window), size).await {
            Ok(context) => {
                *slot.borrow_mut() = Some(SceneRenderer::new(context, &options.window));
                window.request_redraw();
            }
            Err(e) => log::error!("failed to initialize GPU: {e}"),
        }
    });
}

impl ViewerApp {
    fn redraw(&mut self) {
        if !self.engine.should_render() {
            return;
        }
        let mut slot = self.renderer.borrow_mut();
        let Some(renderer) = slot.as_mut() else {
            return;
        };
        if !self.drawing {
            self.engine.restart_timing();
            self.drawing = true;
        }

        let viewport = self.engine.viewport();
        if renderer.context().size() != viewport {
            renderer.resize(viewport.0, viewport.1);
        }

        match self.engine.frame(renderer) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                renderer.reconfigure();
            }
            Err(e) => log::error!("render error: {e:?}"),
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = window_attributes(event_loop, &self.title);
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let (width, height) = viewport_size(window.inner_size());
        self.engine.resize(width, height);
        spawn_renderer(
            &self.renderer,
            Arc::clone(&window),
            (width, height),
            self.engine.options().clone(),
        );

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                let (width, height) = viewport_size(size);
                self.engine.resize(width, height);
                if let Some(renderer) = self.renderer.borrow_mut().as_mut() {
                    renderer.resize(width, height);
                }
            }

            WindowEvent::RedrawRequested => {
                self.redraw();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            WindowEvent::MouseInput { button, state, .. } => {
                self.engine.handle_event(InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed: state == ElementState::Pressed,
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                #[allow(clippy::cast_possible_truncation)]
                self.engine.handle_event(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            WindowEvent::MouseWheel { delta, .. } => {
                #[allow(clippy::cast_possible_truncation)]
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
                };
                self.engine.handle_event(InputEvent::Scroll { delta: lines });
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.engine.handle_event(InputEvent::ModifiersChanged {
                    shift: modifiers.state().shift_key(),
                });
            }

            _ => (),
        }
    }
}
