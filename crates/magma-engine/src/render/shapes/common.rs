//! Shared GPU types used by shape pipelines.

use bytemuck::{Pod, Zeroable};

use crate::coords::Color;

// ── blend ─────────────────────────────────────────────────────────────────

pub(super) fn premul_alpha_blend() -> wgpu::BlendState {
    let component = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    };
    wgpu::BlendState { color: component, alpha: component }
}

// ── viewport uniform ──────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct ViewportUniform {
    pub viewport: [f32; 2],
    pub _pad: [f32; 2], // 16-byte alignment
}

pub(super) fn viewport_ubo_min_binding_size() -> Option<std::num::NonZeroU64> {
    std::num::NonZeroU64::new(std::mem::size_of::<ViewportUniform>() as u64)
}

// ── quad vertex ───────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct QuadVertex {
    pub corner: [f32; 2], // 0..1
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

pub(super) const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { corner: [0.0, 0.0] },
    QuadVertex { corner: [1.0, 0.0] },
    QuadVertex { corner: [1.0, 1.0] },
    QuadVertex { corner: [0.0, 1.0] },
];

pub(super) const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

// ── color conversion ──────────────────────────────────────────────────────

/// Converts straight-alpha sRGB bytes to linear premultiplied floats, the
/// layout expected by an sRGB render target with premultiplied blending.
pub(crate) fn linear_premul(color: Color) -> [f32; 4] {
    let a = color.alpha() as f32 / 255.0;
    [
        srgb_to_linear(color.red()) * a,
        srgb_to_linear(color.green()) * a,
        srgb_to_linear(color.blue()) * a,
        a,
    ]
}

fn srgb_to_linear(c: u8) -> f32 {
    let c = c as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_premul_endpoints() {
        assert_eq!(linear_premul(Color::WHITE), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(linear_premul(Color::BLACK), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(linear_premul(Color::rgba(255, 255, 255, 0)), [0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn linear_premul_scales_by_alpha() {
        let [r, _, _, a] = linear_premul(Color::rgba(255, 0, 0, 51));
        assert!((a - 0.2).abs() < 1e-6);
        assert!((r - 0.2).abs() < 1e-6);
    }
}
