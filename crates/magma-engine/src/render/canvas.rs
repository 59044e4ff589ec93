use crate::coords::{Color, Rect};
use crate::device::{Gpu, SurfaceErrorAction};
use crate::error::{EngineError, Result};
use crate::platform::Canvas;

use super::shapes::linear_premul;
use super::shapes::rect::{RectInstance, RectPipeline};

/// `wgpu`-backed canvas.
///
/// Calls are batched on the CPU; `present` records a single render pass that
/// clears to the last clear color and draws the batch, then submits.
pub struct GpuCanvas {
    gpu: Gpu,
    rects: RectPipeline,
    draw_color: Color,
    clear_color: Color,
    batch: Vec<RectInstance>,
}

impl GpuCanvas {
    pub fn new(gpu: Gpu) -> Self {
        let rects = RectPipeline::new(gpu.device(), gpu.surface_format());
        Self {
            gpu,
            rects,
            draw_color: Color::BLACK,
            clear_color: Color::BLACK,
            batch: Vec::new(),
        }
    }
}

impl Canvas for GpuCanvas {
    fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color;
    }

    fn draw_color(&self) -> Color {
        self.draw_color
    }

    fn clear(&mut self) {
        self.clear_color = self.draw_color;
        self.batch.clear();
    }

    fn fill_rect(&mut self, rect: Rect) {
        if !rect.is_empty() {
            self.batch.push(RectInstance::new(rect, self.draw_color));
        }
    }

    fn present(&mut self) -> Result<()> {
        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                let reason = err.to_string();
                return match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => Err(EngineError::Present(reason)),
                    action => {
                        log::debug!("frame skipped after surface error ({reason}): {action:?}");
                        Ok(())
                    }
                };
            }
        };

        let (w, h) = self.size();
        self.rects.prepare(self.gpu.device(), self.gpu.queue(), (w, h), &self.batch);

        {
            let mut rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("magma frame"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(to_wgpu_color(self.clear_color)),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
            self.rects.draw(&mut rpass);
        }

        self.gpu.submit(frame);
        self.batch.clear();
        Ok(())
    }

    fn size(&self) -> (u32, u32) {
        let size = self.gpu.size();
        (size.width, size.height)
    }
}

fn to_wgpu_color(color: Color) -> wgpu::Color {
    let [r, g, b, a] = linear_premul(color);
    wgpu::Color { r: r as f64, g: g as f64, b: b as f64, a: a as f64 }
}
