use glam::{uvec2, UVec2};
use wgpu::*;

#[derive(Debug)]
pub enum GpuError {
    RequestAdapterError,
    RequestDeviceError(RequestDeviceError),
    UnsupportedSurface,
}
impl std::fmt::Display for GpuError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RequestAdapterError => f.write_str("no compatible graphics adapter"),
            Self::RequestDeviceError(err) => write!(f, "failed to open graphics device: {err}"),
            Self::UnsupportedSurface => {
                f.write_str("surface has no configuration for this adapter")
            }
        }
    }
}
impl std::error::Error for GpuError {}

pub struct Gpu {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
}
impl Gpu {
    pub async fn new(
        instance: &Instance,
        surface: Surface<'static>,
        size: UVec2,
    ) -> Result<Self, GpuError> {
        let adapter = instance
            .request_adapter(&RequestAdapterOptions {
                power_preference: PowerPreference::LowPower,
                force_fallback_adapter: false,
                compatible_surface: Some(&surface),
            })
            .await
            .ok_or(GpuError::RequestAdapterError)?;

        let mut surface_config = surface
            .get_default_config(&adapter, size.x.max(1), size.y.max(1))
            .ok_or(GpuError::UnsupportedSurface)?;
        // egui blends in gamma space and needs a non-sRGB target
        let caps = surface.get_capabilities(&adapter);
        if let Some(format) = caps.formats.iter().copied().find(|f| !f.is_srgb()) {
            surface_config.format = format;
        }

        let (device, queue) = adapter
            .request_device(
                &DeviceDescriptor {
                    label: None,
                    required_features: Features::empty(),
                    required_limits: Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                },
                None,
            )
            .await
            .map_err(GpuError::RequestDeviceError)?;

        let gpu = Self {
            device,
            queue,
            surface,
            surface_config,
        };
        gpu.configure_surface();
        Ok(gpu)
    }

    pub fn surface_size(&self) -> UVec2 {
        uvec2(self.surface_config.width, self.surface_config.height)
    }

    pub fn configure_surface(&self) {
        self.surface.configure(&self.device, &self.surface_config);
    }

    pub fn resize(&mut self, size: UVec2) {
        if size.x == 0 || size.y == 0 {
            return;
        }
        self.surface_config.width = size.x;
        self.surface_config.height = size.y;
        self.configure_surface();
    }
}
