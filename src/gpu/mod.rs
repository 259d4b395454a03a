//! GPU resource management: device/surface ownership and growable
//! instance buffers.

/// Growable per-instance vertex buffers.
pub mod instance_buffer;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
