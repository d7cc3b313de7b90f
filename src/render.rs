use crate::constants::{
    AMBIENT_LIGHT, BLOOM_STRENGTH, BLOOM_THRESHOLD, EXPOSURE, LIGHT_DIR, MAX_INSTANCES,
};
use crate::core::{FrameView, BACKGROUND_RGB, FOG_DENSITY};
use web_sys as web;

mod helpers;
mod post;
mod scene;
mod targets;

use helpers::HDR_FORMAT;
use scene::{InstanceRaw, SceneResources, SceneUniforms};
use targets::RenderTargets;

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    scene: SceneResources,
    targets: RenderTargets,
    linear_sampler: wgpu::Sampler,
    post: post::PostResources,
    bind_groups: post::PostBindGroups,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    warned_overflow: bool,
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

        let targets = RenderTargets::new(&device, width, height);
        let scene = scene::create_scene_resources(&device, HDR_FORMAT, MAX_INSTANCES);

        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::POST_WGSL.into()),
        });
        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let post = post::create_post_resources(&device, &post_shader, HDR_FORMAT, format);
        let bind_groups = post::build_bind_groups(
            &device,
            &post,
            &linear_sampler,
            &targets.hdr_view,
            &targets.bloom_a_view,
            &targets.bloom_b_view,
        );

        let [r, g, b] = BACKGROUND_RGB;
        Ok(Self {
            surface,
            device,
            queue,
            config,
            scene,
            targets,
            linear_sampler,
            post,
            bind_groups,
            width,
            height,
            clear_color: wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: 1.0,
            },
            warned_overflow: false,
        })
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
            self.bind_groups = post::build_bind_groups(
                &self.device,
                &self.post,
                &self.linear_sampler,
                &self.targets.hdr_view,
                &self.targets.bloom_a_view,
                &self.targets.bloom_b_view,
            );
        }
    }

    /// Re-apply the current surface configuration after a lost/outdated frame.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, view: &FrameView) -> Result<(), wgpu::SurfaceError> {
        let count = view.instances.len().min(self.scene.instance_capacity);
        if count < view.instances.len() && !self.warned_overflow {
            log::warn!(
                "[render] {} parts exceed instance capacity {}",
                view.instances.len(),
                self.scene.instance_capacity
            );
            self.warned_overflow = true;
        }
        let raw: Vec<InstanceRaw> = view.instances[..count]
            .iter()
            .map(|inst| InstanceRaw {
                model: inst.model.to_cols_array_2d(),
                color_glow: [inst.color.x, inst.color.y, inst.color.z, inst.glow],
            })
            .collect();
        self.queue
            .write_buffer(&self.scene.instance_buffer, 0, bytemuck::cast_slice(&raw));
        let [lx, ly, lz] = LIGHT_DIR;
        let [fr, fg, fb] = BACKGROUND_RGB;
        let uniforms = SceneUniforms {
            view_proj: view.view_proj.to_cols_array_2d(),
            eye: [view.eye.x, view.eye.y, view.eye.z, 1.0],
            light_dir: [lx, ly, lz, AMBIENT_LIGHT],
            fog: [fr, fg, fb, FOG_DENSITY],
        };
        self.queue
            .write_buffer(&self.scene.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        post::write_post_uniforms(
            &self.queue,
            &self.post,
            [self.width as f32 / 2.0, self.height as f32 / 2.0],
            BLOOM_STRENGTH,
            BLOOM_THRESHOLD,
            EXPOSURE,
        );

        let frame = self.surface.get_current_texture()?;
        let swap_view = frame
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
                    view: &self.targets.hdr_view,
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
            rpass.set_pipeline(&self.scene.pipeline);
            rpass.set_bind_group(0, &self.scene.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.scene.vertex_buffer.slice(..));
            rpass.set_vertex_buffer(1, self.scene.instance_buffer.slice(..));
            rpass.draw(0..self.scene.vertex_count, 0..count as u32);
        }

        // bright pass -> bloom_a, blur h -> bloom_b, blur v -> bloom_a
        post::blit(
            &mut encoder,
            "bright_pass",
            &self.targets.bloom_a_view,
            wgpu::Color::BLACK,
            &self.post.bright_pipeline,
            &self.bind_groups.hdr,
            None,
        );
        post::blit(
            &mut encoder,
            "blur_h",
            &self.targets.bloom_b_view,
            wgpu::Color::BLACK,
            &self.post.blur_pipeline,
            &self.bind_groups.from_bloom_a,
            None,
        );
        post::blit(
            &mut encoder,
            "blur_v",
            &self.targets.bloom_a_view,
            wgpu::Color::BLACK,
            &self.post.blur_pipeline,
            &self.bind_groups.from_bloom_b,
            None,
        );
        post::blit(
            &mut encoder,
            "composite",
            &swap_view,
            self.clear_color,
            &self.post.composite_pipeline,
            &self.bind_groups.hdr,
            Some(&self.bind_groups.bloom_a_only),
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
