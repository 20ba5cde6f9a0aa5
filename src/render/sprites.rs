use glam::Mat4;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteInstance {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct BatchUniforms {
    model: [[f32; 4]; 4],
    params: [f32; 4],
}

const SPRITE_ATTRIBS: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32, 2 => Float32x4];

pub(crate) fn instance_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<SpriteInstance>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &SPRITE_ATTRIBS,
    }
}

pub(crate) fn batch_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("sprite_batch_bgl"),
        entries: &[super::helpers::uniform_layout_entry(
            0,
            wgpu::ShaderStages::VERTEX,
        )],
    })
}

/// Static point cloud with a per-layer model matrix.
pub(crate) struct SpriteLayer {
    pub(crate) instances: wgpu::Buffer,
    pub(crate) count: u32,
    uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    size_scale: f32,
    twinkle: f32,
}

impl SpriteLayer {
    pub(crate) fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        sprites: &[SpriteInstance],
        size_scale: f32,
        twinkle: f32,
    ) -> Self {
        let instances = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sprite_instances"),
            contents: bytemuck::cast_slice(sprites),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let uniforms = BatchUniforms {
            model: Mat4::IDENTITY.to_cols_array_2d(),
            params: [size_scale, twinkle, 0.0, 0.0],
        };
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sprite_batch_uniforms"),
            contents: bytemuck::bytes_of(&uniforms),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("sprite_batch_bg"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        Self {
            instances,
            count: sprites.len() as u32,
            uniform_buffer,
            bind_group,
            size_scale,
            twinkle,
        }
    }

    pub(crate) fn set_model(&self, queue: &wgpu::Queue, model: Mat4) {
        let uniforms = BatchUniforms {
            model: model.to_cols_array_2d(),
            params: [self.size_scale, self.twinkle, 0.0, 0.0],
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
    }
}
