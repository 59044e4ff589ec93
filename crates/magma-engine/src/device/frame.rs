/// A single acquired frame, presented by [`Gpu::submit`](super::Gpu::submit).
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
