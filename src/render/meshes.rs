use crate::core::mesh::{mesh_for, Vertex};
use crate::core::{DrawItem, MeshKind};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct InstanceRaw {
    model: [[f32; 4]; 4],
    color: [f32; 4],
    emissive: [f32; 4],
    params: [f32; 4],
}

impl InstanceRaw {
    pub(crate) fn from_item(item: &DrawItem) -> Self {
        let m = &item.material;
        Self {
            model: item.model.to_cols_array_2d(),
            color: [m.color[0], m.color[1], m.color[2], m.opacity.clamp(0.0, 1.0)],
            emissive: [
                m.emissive[0],
                m.emissive[1],
                m.emissive[2],
                m.emissive_intensity.max(0.0),
            ],
            params: [
                m.wire.shader_code(),
                if m.textured { 1.0 } else { 0.0 },
                0.0,
                0.0,
            ],
        }
    }
}

const VERTEX_ATTRIBS: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];
const INSTANCE_ATTRIBS: [wgpu::VertexAttribute; 7] = wgpu::vertex_attr_array![
    3 => Float32x4, 4 => Float32x4, 5 => Float32x4, 6 => Float32x4,
    7 => Float32x4, 8 => Float32x4, 9 => Float32x4
];

pub(crate) fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRIBS,
    }
}

pub(crate) fn instance_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<InstanceRaw>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &INSTANCE_ATTRIBS,
    }
}

pub(crate) struct GpuMesh {
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
}

impl GpuMesh {
    fn upload(device: &wgpu::Device, kind: MeshKind) -> Self {
        let data = mesh_for(kind);
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("mesh_vertices"),
            contents: bytemuck::cast_slice(&data.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("mesh_indices"),
            contents: bytemuck::cast_slice(&data.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: data.indices.len() as u32,
        }
    }
}

/// One uploaded mesh per [`MeshKind`].
pub(crate) struct MeshSet {
    sphere: GpuMesh,
    torus: GpuMesh,
    quad: GpuMesh,
    cuboid: GpuMesh,
}

impl MeshSet {
    pub(crate) fn new(device: &wgpu::Device) -> Self {
        Self {
            sphere: GpuMesh::upload(device, MeshKind::Sphere),
            torus: GpuMesh::upload(device, MeshKind::Torus),
            quad: GpuMesh::upload(device, MeshKind::Quad),
            cuboid: GpuMesh::upload(device, MeshKind::Cuboid),
        }
    }

    pub(crate) fn get(&self, kind: MeshKind) -> &GpuMesh {
        match kind {
            MeshKind::Sphere => &self.sphere,
            MeshKind::Torus => &self.torus,
            MeshKind::Quad => &self.quad,
            MeshKind::Cuboid => &self.cuboid,
        }
    }
}

/// Growable per-frame instance buffer.
pub(crate) struct InstanceBuffer {
    pub(crate) buffer: wgpu::Buffer,
    capacity: usize,
}

impl InstanceBuffer {
    pub(crate) fn new(device: &wgpu::Device, capacity: usize) -> Self {
        Self {
            buffer: Self::allocate(device, capacity),
            capacity,
        }
    }

    fn allocate(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("mesh_instances"),
            size: (capacity.max(1) * std::mem::size_of::<InstanceRaw>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    pub(crate) fn write(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        instances: &[InstanceRaw],
        chunk: usize,
    ) {
        if instances.len() > self.capacity {
            let chunk = chunk.max(1);
            self.capacity = instances.len().div_ceil(chunk) * chunk;
            self.buffer = Self::allocate(device, self.capacity);
            log::info!("[render] instance buffer grown to {}", self.capacity);
        }
        if !instances.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(instances));
        }
    }
}
