/// Initialization parameters for a window's GPU surface.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    ///
    /// Engine colors are sRGB bytes; an sRGB target keeps them exact.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior). FIFO is supported everywhere and caps the
    /// frame rate at the display refresh rate.
    pub present_mode: wgpu::PresentMode,

    /// Optional alpha mode; falls back to the first supported one.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    pub required_features: wgpu::Features,
    pub required_limits: wgpu::Limits,

    /// Hint only; support depends on platform/backend.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::downlevel_defaults(),
            desired_maximum_frame_latency: 2,
        }
    }
}
