// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Graphics code converts between pixel, index and float types constantly
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Unused / redundant code
#![warn(unused_results)]
#![warn(unused_qualifications)]
// Cast hygiene
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]

//! Orbit a small scene of colored cubes and fly the camera to whichever
//! cube you click.
//!
//! # Key entry points
//!
//! - [`NavEngine`] - window-independent core: scene, camera, orbit
//!   controls, camera animator, click navigation
//! - [`Options`] - runtime configuration (camera, navigation table, scene
//!   layout, window)
//! - [`picking::pick`] - which objects lie under a screen pixel
//! - `Viewer` (feature `viewer`) - a winit window that drives the engine
//!   and draws it with wgpu
//!
//! # Architecture
//!
//! Input events become [`NavCommand`]s. A click is picked against the
//! [`scene::SceneRegistry`]; if the nearest object has a navigation rule, a
//! [`animation::CameraTween`] toward the rule's target is started. Every
//! frame the [`engine::render_loop::RenderLoop`] advances the tweens,
//! resyncs the orbit controls, and hands the scene to a
//! [`FrameSink`] for drawing.

#[cfg(all(target_arch = "wasm32", feature = "viewer", not(feature = "web")))]
compile_error!("the viewer on wasm32 needs the `web` feature");

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod navigation;
pub mod options;
pub mod picking;
pub mod renderer;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

pub use engine::command::NavCommand;
pub use engine::render_loop::FrameSink;
pub use engine::{AppContext, NavEngine};
pub use error::NavError;
pub use input::{InputEvent, InputProcessor, MouseButton};
pub use navigation::ClickOutcome;
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
