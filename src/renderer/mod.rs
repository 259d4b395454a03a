//! GPU drawing of the cube scene.
//!
//! One instanced pipeline draws every registered object as a flat-shaded
//! box. [`SceneRenderer`] owns the render context and implements
//! [`FrameSink`], so the render loop can hand it the scene and camera once
//! per frame.

pub mod cube_mesh;
pub(crate) mod pipeline_util;

use wgpu::util::DeviceExt;

use self::cube_mesh::{CubeInstance, CubeVertex, CUBE_INDICES};
use crate::camera::{Camera, CameraUniform};
use crate::engine::render_loop::FrameSink;
use crate::gpu::instance_buffer::InstanceBuffer;
use crate::gpu::render_context::RenderContext;
use crate::options::WindowOptions;
use crate::scene::SceneRegistry;

/// Draws the scene into the window surface.
pub struct SceneRenderer {
    context: RenderContext,
    pipeline: wgpu::RenderPipeline,
    camera_uniform: CameraUniform,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    instances: InstanceBuffer<CubeInstance>,
    depth_view: wgpu::TextureView,
    clear_color: wgpu::Color,
}

impl SceneRenderer {
    /// Build the cube pipeline and its buffers on `context`.
    #[must_use]
    pub fn new(context: RenderContext, window: &WindowOptions) -> Self {
        let device = &context.device;

        let camera_uniform = CameraUniform::new();
        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::bytes_of(&camera_uniform),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let camera_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Camera Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &camera_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let pipeline = create_cube_pipeline(&context, &camera_layout);

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Cube Vertices"),
            contents: bytemuck::cast_slice(&cube_mesh::cube_vertices()),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Cube Indices"),
            contents: bytemuck::cast_slice(&CUBE_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });
        let instances = InstanceBuffer::new(device, "Cube Instances", 16);

        let (width, height) = context.size();
        let depth_view = pipeline_util::create_depth_target(device, width, height);

        let [r, g, b] = window.clear_color;
        let clear_color = wgpu::Color {
            r: f64::from(r),
            g: f64::from(g),
            b: f64::from(b),
            a: 1.0,
        };

        Self {
            context,
            pipeline,
            camera_uniform,
            camera_buffer,
            camera_bind_group,
            vertex_buffer,
            index_buffer,
            instances,
            depth_view,
            clear_color,
        }
    }

    /// The render context.
    #[must_use]
    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    /// Resize the surface and depth buffer. Ignores zero-sized dimensions.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.context.resize(width, height);
        self.depth_view = pipeline_util::create_depth_target(&self.context.device, width, height);
    }

    /// Reconfigure the surface after it was lost or went out of date.
    pub fn reconfigure(&mut self) {
        self.context.reconfigure();
    }
}

impl FrameSink for SceneRenderer {
    type Error = wgpu::SurfaceError;

    fn draw(&mut self, registry: &SceneRegistry, camera: &Camera) -> Result<(), wgpu::SurfaceError> {
        self.camera_uniform.update_view_proj(camera);
        self.context
            .queue
            .write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&self.camera_uniform));
        let _ = self.instances.write(
            &self.context.device,
            &self.context.queue,
            &cube_mesh::instances(registry),
        );

        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.context.create_encoder();
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if self.instances.count() > 0 {
                pass.set_pipeline(&self.pipeline);
                pass.set_bind_group(0, &self.camera_bind_group, &[]);
                pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
                pass.set_vertex_buffer(1, self.instances.buffer().slice(..));
                pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
                pass.draw_indexed(0..CUBE_INDICES.len() as u32, 0, 0..self.instances.count());
            }
        }
        self.context.submit(encoder);
        frame.present();
        Ok(())
    }
}

fn create_cube_pipeline(
    context: &RenderContext,
    camera_layout: &wgpu::BindGroupLayout,
) -> wgpu::RenderPipeline {
    let shader = context
        .device
        .create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Cube Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../../assets/shaders/cube.wgsl").into()),
        });

    let layout = context
        .device
        .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Cube Pipeline Layout"),
            bind_group_layouts: &[camera_layout],
            push_constant_ranges: &[],
        });

    context
        .device
        .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Cube Pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[CubeVertex::layout(), CubeInstance::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &pipeline_util::surface_fragment_targets(context.format()),
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(pipeline_util::depth_stencil_state()),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
}
