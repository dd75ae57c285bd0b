use crate::controller::ClockController;
use crate::gpu::{Gpu, GpuError};
use crate::ui::pages;
use crate::Platform;

use egui_wgpu::ScreenDescriptor;
use glam::UVec2;
use std::time::{Duration, Instant};
use wgpu::*;

pub struct AppInput {
    pub egui_input: egui::RawInput,
    pub win_size: UVec2,
}

pub struct FrameOutput {
    pub platform_output: egui::PlatformOutput,
    /// How soon egui wants the next frame. `Duration::ZERO` means right away.
    pub repaint_after: Duration,
}

#[derive(Debug)]
pub enum FrameError {
    NoSurface,
    Surface(SurfaceError),
}
impl std::fmt::Display for FrameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSurface => f.write_str("no surface to draw to"),
            Self::Surface(err) => write!(f, "failed to acquire surface texture: {err}"),
        }
    }
}
impl std::error::Error for FrameError {}

pub struct App<P> {
    pub clock: ClockController<P>,
    pub egui: egui::Context,
    gpu: Option<Gpu>,
    renderer: Option<egui_wgpu::Renderer>,
}
impl<P: Platform> App<P> {
    pub fn new(clock: ClockController<P>, egui: egui::Context) -> Self {
        Self {
            clock,
            egui,
            gpu: None,
            renderer: None,
        }
    }

    pub async fn renew_surface(
        &mut self,
        instance: &Instance,
        surface: Surface<'static>,
        size: UVec2,
    ) -> Result<(), GpuError> {
        let gpu = Gpu::new(instance, surface, size).await?;
        let renderer =
            egui_wgpu::Renderer::new(&gpu.device, gpu.surface_config.format, None, 1);
        log::info!(
            "Surface ready: {}x{} {:?}",
            gpu.surface_config.width,
            gpu.surface_config.height,
            gpu.surface_config.format
        );
        self.gpu = Some(gpu);
        self.renderer = Some(renderer);
        Ok(())
    }

    pub fn invalidate_surface(&mut self) {
        self.renderer = None;
        self.gpu = None;
    }

    pub fn update_size(&mut self, size: UVec2) {
        if let Some(gpu) = &mut self.gpu {
            gpu.resize(size);
        }
    }

    pub fn draw_frame(&mut self, input: AppInput) -> Result<FrameOutput, FrameError> {
        let at = Instant::now();
        let clock = &mut self.clock;
        let full_output = self
            .egui
            .run(input.egui_input, |ctx| pages::clock_page(ctx, clock, at));

        let repaint_after = full_output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .map_or(Duration::MAX, |viewport| viewport.repaint_delay);

        let (Some(gpu), Some(renderer)) = (&mut self.gpu, &mut self.renderer) else {
            return Err(FrameError::NoSurface);
        };
        if gpu.surface_size() != input.win_size {
            gpu.resize(input.win_size);
        }

        let paint_jobs = self
            .egui
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        let size = gpu.surface_size();
        let screen = ScreenDescriptor {
            size_in_pixels: [size.x, size.y],
            pixels_per_point: full_output.pixels_per_point,
        };

        let textures = &full_output.textures_delta;
        for (id, delta) in &textures.set {
            renderer.update_texture(&gpu.device, &gpu.queue, *id, delta);
        }
        let rs = render(gpu, renderer, &paint_jobs, &screen);
        for id in &textures.free {
            renderer.free_texture(id);
        }
        rs?;

        Ok(FrameOutput {
            platform_output: full_output.platform_output,
            repaint_after,
        })
    }
}

fn render(
    gpu: &Gpu,
    renderer: &mut egui_wgpu::Renderer,
    paint_jobs: &[egui::ClippedPrimitive],
    screen: &ScreenDescriptor,
) -> Result<(), FrameError> {
    let frame = match gpu.surface.get_current_texture() {
        Ok(frame) => frame,
        Err(err @ (SurfaceError::Lost | SurfaceError::Outdated)) => {
            gpu.configure_surface();
            return Err(FrameError::Surface(err));
        }
        Err(err) => return Err(FrameError::Surface(err)),
    };
    let view = frame.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = gpu
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("clock-frame"),
        });

    let mut commands =
        renderer.update_buffers(&gpu.device, &gpu.queue, &mut encoder, paint_jobs, screen);
    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("clock-pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color::BLACK),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        renderer.render(&mut pass, paint_jobs, screen);
    }
    commands.push(encoder.finish());
    gpu.queue.submit(commands);
    frame.present();
    Ok(())
}
