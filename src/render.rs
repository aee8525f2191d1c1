use crate::constants::CLEAR_COLOR;
use anamorph_core::{CloudKind, PointCloud};
use glam::Mat4;
use web_sys as web;

mod points;
use points::{create_points_resources, upload_cloud, CloudBuffers, CloudUniforms, PointsResources};

const CLOUD_SLOTS: [CloudKind; 3] = [CloudKind::Camouflage, CloudKind::Subject, CloudKind::Target];

#[inline]
fn slot_index(kind: CloudKind) -> usize {
    match kind {
        CloudKind::Camouflage => 0,
        CloudKind::Subject => 1,
        CloudKind::Target => 2,
    }
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    points: PointsResources,
    clouds: [Option<CloudBuffers>; 3],
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
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
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let points = create_points_resources(&device, format);
        log::info!("[gpu] surface {}x{} {:?}", width, height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            points,
            clouds: [None, None, None],
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
        })
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    #[inline]
    pub fn has_cloud(&self, kind: CloudKind) -> bool {
        self.clouds[slot_index(kind)].is_some()
    }

    /// Upload a cloud's positions. Clouds are immutable after load, so this
    /// happens once per slot.
    pub fn upload(&mut self, kind: CloudKind, cloud: &PointCloud) {
        let label = format!("{:?}_instances", kind).to_lowercase();
        let buffers = upload_cloud(&self.device, &self.points.bgl, &label, cloud);
        log::info!("[gpu] uploaded {:?} ({} points)", kind, buffers.count);
        self.clouds[slot_index(kind)] = Some(buffers);
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
        }
    }

    /// Draw every uploaded cloud with its current style. `point_scale`
    /// converts style sizes (CSS px) to backing pixels.
    pub fn render<'c>(
        &mut self,
        view_proj: Mat4,
        point_scale: f32,
        styles: impl Iterator<Item = (CloudKind, &'c PointCloud)>,
    ) -> Result<(), wgpu::SurfaceError> {
        for (kind, cloud) in styles {
            if let Some(buf) = &self.clouds[slot_index(kind)] {
                let s = cloud.style;
                let u = CloudUniforms {
                    view_proj: view_proj.to_cols_array_2d(),
                    color: [s.color[0], s.color[1], s.color[2], s.opacity],
                    params: [
                        s.size * point_scale,
                        self.width as f32,
                        self.height as f32,
                        0.0,
                    ],
                };
                self.queue
                    .write_buffer(&buf.uniform_buffer, 0, bytemuck::bytes_of(&u));
            }
        }

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
                label: Some("points_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.points.pipeline);
            for kind in CLOUD_SLOTS {
                let Some(buf) = &self.clouds[slot_index(kind)] else {
                    continue;
                };
                if buf.count == 0 {
                    continue;
                }
                rpass.set_bind_group(0, &buf.bind_group, &[]);
                rpass.set_vertex_buffer(0, buf.instances.slice(..));
                rpass.draw(0..6, 0..buf.count);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
