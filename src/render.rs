use crate::core::{Camera, DrawItem, MeshKind, SCENE_WGSL, SPRITES_WGSL};
use glam::{Mat4, Vec3};
use web_sys as web;

mod helpers;
mod meshes;
mod sprites;
mod targets;

use meshes::{InstanceBuffer, InstanceRaw, MeshSet};
use sprites::SpriteLayer;
use targets::RenderTargets;

pub use sprites::SpriteInstance;

// ===================== WebGPU state =====================

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct CameraUniforms {
    view_proj: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    eye: [f32; 4],
    params: [f32; 4],
}

/// Handle to a sprite layer registered with [`GpuState::add_sprite_layer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteLayerId(usize);

/// A contiguous range of instances sharing one mesh and one pass.
struct DrawRun {
    mesh: MeshKind,
    blended: bool,
    start: u32,
    end: u32,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,

    camera_buffer: wgpu::Buffer,
    camera_bg: wgpu::BindGroup,

    mesh_opaque: wgpu::RenderPipeline,
    mesh_blended: wgpu::RenderPipeline,
    sprite_pipeline: wgpu::RenderPipeline,

    meshes: MeshSet,
    instances: InstanceBuffer,
    scratch: Vec<InstanceRaw>,
    runs: Vec<DrawRun>,

    texture_bgl: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    blank_texture_bg: wgpu::BindGroup,
    card_texture_bg: Option<wgpu::BindGroup>,

    sprite_bgl: wgpu::BindGroupLayout,
    sprite_layers: Vec<SpriteLayer>,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    camera: Camera,
    time_accum: f32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, clear: [f64; 3]) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let targets = RenderTargets::new(&device, width, height);

        // Camera uniform shared by both pipelines
        let camera_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("camera_bgl"),
            entries: &[helpers::uniform_layout_entry(
                0,
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            )],
        });
        let camera_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("camera_uniforms"),
            size: std::mem::size_of::<CameraUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let camera_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("camera_bg"),
            layout: &camera_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        // Card texture slot; a 1x1 white texture stands in until an image arrives
        let texture_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("texture_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let (blank_tex, blank_view) = helpers::create_texture(
            &device,
            "blank_tex",
            1,
            1,
            wgpu::TextureFormat::Rgba8UnormSrgb,
            wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        );
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &blank_tex,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &[255, 255, 255, 255],
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4),
                rows_per_image: Some(1),
            },
            wgpu::Extent3d {
                width: 1,
                height: 1,
                depth_or_array_layers: 1,
            },
        );
        let blank_texture_bg = texture_bind_group(&device, &texture_bgl, &blank_view, &sampler);

        // Mesh pipelines
        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
        });
        let mesh_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("mesh_pl"),
            bind_group_layouts: &[&camera_bgl, &texture_bgl],
            push_constant_ranges: &[],
        });
        let mesh_buffers = [meshes::vertex_layout(), meshes::instance_layout()];
        let mesh_opaque = helpers::make_pipeline(
            &device,
            "mesh_opaque",
            &mesh_pl,
            &scene_shader,
            "vs_main",
            "fs_main",
            &mesh_buffers,
            format,
            Some(wgpu::BlendState::REPLACE),
            true,
        );
        let mesh_blended = helpers::make_pipeline(
            &device,
            "mesh_blended",
            &mesh_pl,
            &scene_shader,
            "vs_main",
            "fs_main",
            &mesh_buffers,
            format,
            Some(wgpu::BlendState::ALPHA_BLENDING),
            false,
        );

        // Sprite pipeline
        let sprite_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sprite_shader"),
            source: wgpu::ShaderSource::Wgsl(SPRITES_WGSL.into()),
        });
        let sprite_bgl = sprites::batch_layout(&device);
        let sprite_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("sprite_pl"),
            bind_group_layouts: &[&camera_bgl, &sprite_bgl],
            push_constant_ranges: &[],
        });
        let sprite_pipeline = helpers::make_pipeline(
            &device,
            "sprite_pipeline",
            &sprite_pl,
            &sprite_shader,
            "vs_sprite",
            "fs_sprite",
            &[sprites::instance_layout()],
            format,
            Some(helpers::ADDITIVE_BLENDING),
            false,
        );

        let meshes = MeshSet::new(&device);
        let instances = InstanceBuffer::new(&device, crate::constants::INSTANCE_CHUNK);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            camera_buffer,
            camera_bg,
            mesh_opaque,
            mesh_blended,
            sprite_pipeline,
            meshes,
            instances,
            scratch: Vec::new(),
            runs: Vec::new(),
            texture_bgl,
            sampler,
            blank_texture_bg,
            card_texture_bg: None,
            sprite_bgl,
            sprite_layers: Vec::new(),
            width,
            height,
            clear_color: wgpu::Color {
                r: clear[0],
                g: clear[1],
                b: clear[2],
                a: 1.0,
            },
            camera: Camera::looking_at_origin(Vec3::new(0.0, 0.0, 10.0), width as f32 / height as f32),
            time_accum: 0.0,
        })
    }

    pub fn set_camera(&mut self, eye: Vec3, target: Vec3) {
        self.camera.eye = eye;
        self.camera.target = target;
    }

    pub fn add_sprite_layer(
        &mut self,
        sprites: &[SpriteInstance],
        size_scale: f32,
        twinkle: f32,
    ) -> SpriteLayerId {
        let layer = SpriteLayer::new(&self.device, &self.sprite_bgl, sprites, size_scale, twinkle);
        self.sprite_layers.push(layer);
        SpriteLayerId(self.sprite_layers.len() - 1)
    }

    pub fn set_sprite_layer_model(&mut self, id: SpriteLayerId, model: Mat4) {
        if let Some(layer) = self.sprite_layers.get(id.0) {
            layer.set_model(&self.queue, model);
        }
    }

    /// Upload a decoded image as the card face texture.
    pub fn set_card_image(&mut self, bitmap: &web::ImageBitmap) {
        let size = wgpu::Extent3d {
            width: bitmap.width().max(1),
            height: bitmap.height().max(1),
            depth_or_array_layers: 1,
        };
        let (tex, view) = helpers::create_texture(
            &self.device,
            "card_tex",
            size.width,
            size.height,
            wgpu::TextureFormat::Rgba8UnormSrgb,
            wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::COPY_DST
                | wgpu::TextureUsages::RENDER_ATTACHMENT,
        );
        self.queue.copy_external_image_to_texture(
            &wgpu::CopyExternalImageSourceInfo {
                source: wgpu::ExternalImageSource::ImageBitmap(bitmap.clone()),
                origin: wgpu::Origin2d::ZERO,
                flip_y: false,
            },
            wgpu::CopyExternalImageDestInfo {
                texture: &tex,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
                color_space: wgpu::PredefinedColorSpace::Srgb,
                premultiplied_alpha: false,
            },
            size,
        );
        self.card_texture_bg = Some(texture_bind_group(
            &self.device,
            &self.texture_bgl,
            &view,
            &self.sampler,
        ));
    }

    pub fn clear_card_image(&mut self) {
        self.card_texture_bg = None;
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
        }
    }

    fn write_camera(&mut self) {
        self.camera.aspect = self.width as f32 / self.height.max(1) as f32;
        let view = self.camera.view_matrix();
        let proj = self.camera.projection_matrix();
        let uniforms = CameraUniforms {
            view_proj: (proj * view).to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
            eye: self.camera.eye.extend(1.0).to_array(),
            params: [self.time_accum, self.width as f32, self.height as f32, 0.0],
        };
        self.queue
            .write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&uniforms));
    }

    /// Order items (opaque first, then blended back to front) into the
    /// scratch instance list and group them into draw runs.
    fn prepare_instances(&mut self, items: &[DrawItem]) {
        let eye = self.camera.eye;
        let mut order: Vec<&DrawItem> = items.iter().collect();
        order.sort_by(|a, b| {
            let ab = a.material.is_blended();
            let bb = b.material.is_blended();
            ab.cmp(&bb).then_with(|| {
                if ab {
                    let da = eye.distance_squared(a.model.w_axis.truncate());
                    let db = eye.distance_squared(b.model.w_axis.truncate());
                    db.total_cmp(&da)
                } else {
                    (a.mesh as u8).cmp(&(b.mesh as u8))
                }
            })
        });

        self.scratch.clear();
        self.runs.clear();
        for item in order {
            let blended = item.material.is_blended();
            let idx = self.scratch.len() as u32;
            self.scratch.push(InstanceRaw::from_item(item));
            match self.runs.last_mut() {
                Some(run) if run.mesh == item.mesh && run.blended == blended => run.end = idx + 1,
                _ => self.runs.push(DrawRun {
                    mesh: item.mesh,
                    blended,
                    start: idx,
                    end: idx + 1,
                }),
            }
        }
        self.instances.write(
            &self.device,
            &self.queue,
            &self.scratch,
            crate::constants::INSTANCE_CHUNK,
        );
    }

    pub fn render(&mut self, dt_sec: f32, items: &[DrawItem]) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += dt_sec.max(0.0);
        self.write_camera();
        self.prepare_instances(items);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.camera_bg, &[]);
            let texture_bg = self
                .card_texture_bg
                .as_ref()
                .unwrap_or(&self.blank_texture_bg);

            // Opaque meshes
            rpass.set_pipeline(&self.mesh_opaque);
            rpass.set_bind_group(1, texture_bg, &[]);
            rpass.set_vertex_buffer(1, self.instances.buffer.slice(..));
            for run in self.runs.iter().filter(|r| !r.blended) {
                let mesh = self.meshes.get(run.mesh);
                rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..mesh.index_count, 0, run.start..run.end);
            }

            // Point sprites
            if !self.sprite_layers.is_empty() {
                rpass.set_pipeline(&self.sprite_pipeline);
                for layer in &self.sprite_layers {
                    rpass.set_bind_group(1, &layer.bind_group, &[]);
                    rpass.set_vertex_buffer(0, layer.instances.slice(..));
                    rpass.draw(0..6, 0..layer.count);
                }
            }

            // Translucent meshes, back to front
            rpass.set_pipeline(&self.mesh_blended);
            rpass.set_bind_group(1, texture_bg, &[]);
            rpass.set_vertex_buffer(1, self.instances.buffer.slice(..));
            for run in self.runs.iter().filter(|r| r.blended) {
                let mesh = self.meshes.get(run.mesh);
                rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..mesh.index_count, 0, run.start..run.end);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn texture_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("texture_bg"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}
