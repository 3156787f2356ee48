//! Colored triangle batch renderer.
//!
//! Owns one shader, one pipeline and a pair of vertex buffers (positions and
//! colors). Callers replace the whole batch with [`TriangleBatchRenderer::submit`]
//! and draw it with a single draw call in [`TriangleBatchRenderer::render`].

use anyhow::{bail, Result};
use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::coords::{ColorRgba, Vec2};
use crate::render::{RenderCtx, RenderTarget};

const SHADER_SRC: &str = include_str!("shaders/triangles.wgsl");

/// Minimum vertex capacity of the batch buffers.
const MIN_CAPACITY: usize = 1024;

/// Full-plane quad drawn under the batch.
const BACKDROP_POSITIONS: [[f32; 2]; 6] = [
    [-1.0, 1.0],
    [1.0, 1.0],
    [-1.0, -1.0],
    [1.0, 1.0],
    [1.0, -1.0],
    [-1.0, -1.0],
];

/// Where the plane sits on screen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlanePlacement {
    /// Plane center in logical px.
    pub center: Vec2,
    /// Unscaled plane size in logical px.
    pub size: Vec2,
    /// Clockwise rotation about `center`, degrees.
    pub rotation_deg: f32,
    pub scale: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct PlacementUniform {
    viewport: [f32; 2],
    center: [f32; 2],
    half_extent: [f32; 2],
    rotation: [f32; 2], // (sin, cos)
    scale: f32,
    _pad0: f32,
    _pad1: [f32; 2], // 16-byte size
}

impl PlacementUniform {
    fn new(ctx: &RenderCtx<'_>, p: PlanePlacement) -> Self {
        let (sin, cos) = p.rotation_deg.to_radians().sin_cos();
        Self {
            viewport: [ctx.viewport.width.max(1.0), ctx.viewport.height.max(1.0)],
            center: [p.center.x, p.center.y],
            half_extent: [p.size.x * 0.5, p.size.y * 0.5],
            rotation: [sin, cos],
            scale: p.scale,
            _pad0: 0.0,
            _pad1: [0.0; 2],
        }
    }
}

const POSITION_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];
const COLOR_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x4];

fn position_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 2]>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &POSITION_ATTRS,
    }
}

fn color_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 4]>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &COLOR_ATTRS,
    }
}

/// GPU resources for one plane of colored triangles.
///
/// Everything is acquired in [`new`](Self::new) and released when the renderer
/// is dropped.
pub struct TriangleBatchRenderer {
    surface_format: wgpu::TextureFormat,
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    placement_ubo: wgpu::Buffer,

    backdrop_positions: wgpu::Buffer,
    backdrop_colors: wgpu::Buffer,

    positions: wgpu::Buffer,
    colors: wgpu::Buffer,
    /// Capacity of `positions`/`colors`, in vertices.
    capacity: usize,
    vertex_count: u32,
}

impl TriangleBatchRenderer {
    /// Compiles the shader and builds the pipeline for `surface_format`.
    ///
    /// Shader compilation errors are logged with the driver diagnostic and
    /// returned; the renderer is unusable in that case.
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        backdrop: ColorRgba,
    ) -> Result<Self> {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("pixelpad triangles shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SRC.into()),
        });

        let info = pollster::block_on(shader.get_compilation_info());
        let errors: Vec<String> = info
            .messages
            .iter()
            .filter(|m| matches!(m.message_type, wgpu::CompilationMessageType::Error))
            .map(|m| m.message.clone())
            .collect();
        if !errors.is_empty() {
            for e in &errors {
                log::error!("triangles shader: {e}");
            }
            bail!("triangles shader failed to compile ({} error(s))", errors.len());
        }

        let min_binding_size = std::num::NonZeroU64::new(std::mem::size_of::<PlacementUniform>() as u64);

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("pixelpad triangles bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size,
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pixelpad triangles pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("pixelpad triangles pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[position_layout(), color_layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let placement_ubo = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("pixelpad triangles placement ubo"),
            size: std::mem::size_of::<PlacementUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("pixelpad triangles bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: placement_ubo.as_entire_binding(),
            }],
        });

        let backdrop_positions = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("pixelpad backdrop positions"),
            contents: bytemuck::cast_slice(&BACKDROP_POSITIONS),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let backdrop_colors = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("pixelpad backdrop colors"),
            contents: bytemuck::cast_slice(&[backdrop.to_array(); 6]),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let (positions, colors) = create_batch_buffers(device, MIN_CAPACITY);

        log::debug!("triangle batch renderer ready ({surface_format:?})");

        Ok(Self {
            surface_format,
            pipeline,
            bind_group,
            placement_ubo,
            backdrop_positions,
            backdrop_colors,
            positions,
            colors,
            capacity: MIN_CAPACITY,
            vertex_count: 0,
        })
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.surface_format
    }

    /// Number of vertices drawn by the next [`render`](Self::render).
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Replaces the batch with `positions` (plane NDC) and per-vertex `colors`.
    ///
    /// Both slices must have the same length, a multiple of 3.
    pub fn submit(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        positions: &[[f32; 2]],
        colors: &[[f32; 4]],
    ) {
        debug_assert_eq!(positions.len(), colors.len());
        debug_assert_eq!(positions.len() % 3, 0);

        let count = positions.len().min(colors.len());
        if count > self.capacity {
            let new_cap = count.next_power_of_two().max(MIN_CAPACITY);
            let (p, c) = create_batch_buffers(device, new_cap);
            self.positions = p;
            self.colors = c;
            self.capacity = new_cap;
            log::debug!("triangle batch capacity grown to {new_cap} vertices");
        }

        if count > 0 {
            queue.write_buffer(&self.positions, 0, bytemuck::cast_slice(&positions[..count]));
            queue.write_buffer(&self.colors, 0, bytemuck::cast_slice(&colors[..count]));
        }
        self.vertex_count = count as u32;
    }

    /// Draws the backdrop, then every submitted vertex in one draw call.
    pub fn render(
        &self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        placement: PlanePlacement,
    ) {
        let uniform = PlacementUniform::new(ctx, placement);
        ctx.queue.write_buffer(&self.placement_ubo, 0, bytemuck::bytes_of(&uniform));

        let mut rpass = target.overlay_pass("pixelpad triangles");

        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);

        rpass.set_vertex_buffer(0, self.backdrop_positions.slice(..));
        rpass.set_vertex_buffer(1, self.backdrop_colors.slice(..));
        rpass.draw(0..BACKDROP_POSITIONS.len() as u32, 0..1);

        if self.vertex_count > 0 {
            rpass.set_vertex_buffer(0, self.positions.slice(..));
            rpass.set_vertex_buffer(1, self.colors.slice(..));
            rpass.draw(0..self.vertex_count, 0..1);
        }
    }
}

fn create_batch_buffers(device: &wgpu::Device, capacity: usize) -> (wgpu::Buffer, wgpu::Buffer) {
    let positions = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("pixelpad batch positions"),
        size: (capacity * std::mem::size_of::<[f32; 2]>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let colors = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("pixelpad batch colors"),
        size: (capacity * std::mem::size_of::<[f32; 4]>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    (positions, colors)
}
