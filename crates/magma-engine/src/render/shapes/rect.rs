use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::coords::{Color, Rect};

use super::common::{
    QUAD_INDICES, QUAD_VERTICES, QuadVertex, ViewportUniform, linear_premul, premul_alpha_blend,
    viewport_ubo_min_binding_size,
};

/// Instance buffers grow in powers of two from this many rectangles.
const MIN_INSTANCE_CAPACITY: usize = 64;

/// One filled rectangle, in physical pixels.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct RectInstance {
    origin: [f32; 2],
    size: [f32; 2],
    color: [f32; 4],
}

impl RectInstance {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        1 => Float32x2, // origin
        2 => Float32x2, // size
        3 => Float32x4  // color
    ];

    pub fn new(rect: Rect, color: Color) -> Self {
        Self {
            origin: [rect.x as f32, rect.y as f32],
            size: [rect.w as f32, rect.h as f32],
            color: linear_premul(color),
        }
    }

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<RectInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

/// Instanced rectangle pipeline for one surface format.
///
/// Usage per frame: [`prepare`](Self::prepare) uploads the batch, then
/// [`draw`](Self::draw) records it into an open render pass.
pub struct RectPipeline {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    viewport_ubo: wgpu::Buffer,
    quad_vbo: wgpu::Buffer,
    quad_ibo: wgpu::Buffer,
    instances: Option<wgpu::Buffer>,
    capacity: usize,
    prepared: u32,
}

impl RectPipeline {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("magma rect shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/rect.wgsl").into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("magma rect bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: viewport_ubo_min_binding_size(),
                },
                count: None,
            }],
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("magma rect pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("magma rect pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[QuadVertex::layout(), RectInstance::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(premul_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let viewport_ubo = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("magma rect viewport ubo"),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("magma rect bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        let quad_vbo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("magma rect quad vbo"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let quad_ibo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("magma rect quad ibo"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            pipeline,
            bind_group,
            viewport_ubo,
            quad_vbo,
            quad_ibo,
            instances: None,
            capacity: 0,
            prepared: 0,
        }
    }

    /// Uploads the viewport size and `batch` for the next [`draw`](Self::draw).
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        viewport: (u32, u32),
        batch: &[RectInstance],
    ) {
        self.prepared = 0;
        if batch.is_empty() {
            return;
        }

        let uniform = ViewportUniform {
            viewport: [viewport.0.max(1) as f32, viewport.1.max(1) as f32],
            _pad: [0.0; 2],
        };
        queue.write_buffer(&self.viewport_ubo, 0, bytemuck::bytes_of(&uniform));

        if batch.len() > self.capacity || self.instances.is_none() {
            self.capacity = batch.len().next_power_of_two().max(MIN_INSTANCE_CAPACITY);
            self.instances = Some(device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("magma rect instance vbo"),
                size: (self.capacity * std::mem::size_of::<RectInstance>()) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            log::trace!("rect instance buffer grown to {}", self.capacity);
        }

        let Some(instances) = self.instances.as_ref() else { return };
        queue.write_buffer(instances, 0, bytemuck::cast_slice(batch));
        self.prepared = u32::try_from(batch.len()).unwrap_or(u32::MAX);
    }

    /// Records the prepared batch. No-op when nothing was prepared.
    pub fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        let Some(instances) = self.instances.as_ref() else { return };
        if self.prepared == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.quad_vbo.slice(..));
        rpass.set_vertex_buffer(1, instances.slice(..));
        rpass.set_index_buffer(self.quad_ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, 0..self.prepared);
    }
}
