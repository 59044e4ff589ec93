use crate::coords::{Color, Rect, clamp_i32};
use crate::platform::Canvas;

use super::FrameSlots;

/// Turns classified slots into canvas calls.
///
/// Consumers only run for frames that carry a Transform.
pub trait DrawConsumer {
    fn draw(&mut self, slots: &FrameSlots, canvas: &mut dyn Canvas);
}

impl<F> DrawConsumer for F
where
    F: FnMut(&FrameSlots, &mut dyn Canvas),
{
    fn draw(&mut self, slots: &FrameSlots, canvas: &mut dyn Canvas) {
        self(slots, canvas)
    }
}

/// Default consumer: a filled marker at the Transform position and a 1 px
/// outline around each collider's bounds, clipped to the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeOutlines {
    pub color: Color,
    /// Marker edge length at scale 1.
    pub marker_size: u32,
}

impl Default for ShapeOutlines {
    fn default() -> Self {
        Self { color: Color::WHITE, marker_size: 4 }
    }
}

impl DrawConsumer for ShapeOutlines {
    fn draw(&mut self, slots: &FrameSlots, canvas: &mut dyn Canvas) {
        let Some(transform) = slots.transform else {
            return;
        };
        let (w, h) = canvas.size();
        let viewport = Rect::new(0, 0, w, h);
        let ox = clamp_i32(transform.position().x());
        let oy = clamp_i32(transform.position().y());

        canvas.set_draw_color(self.color);

        let size = (self.marker_size as f32 * transform.scale().max(0.0)).round() as u32;
        let half = clamp_i32(size / 2);
        if let Some(marker) = Rect::new(ox - half, oy - half, size, size).intersect(viewport) {
            canvas.fill_rect(marker);
        }

        let bounds = [
            slots.box_collider.map(|c| c.bounds().offset(ox, oy)),
            slots.circle_collider.map(|c| c.bounds().offset(ox, oy)),
            slots.capsule_collider.map(|c| c.bounds().offset(ox, oy)),
        ];
        for rect in bounds.into_iter().flatten() {
            for edge in outline(rect) {
                if let Some(visible) = edge.intersect(viewport) {
                    canvas.fill_rect(visible);
                }
            }
        }
    }
}

/// The four 1 px edges of `rect`. Degenerate rectangles yield nothing.
fn outline(rect: Rect) -> Vec<Rect> {
    if rect.is_empty() {
        return Vec::new();
    }
    let right = rect.x.saturating_add(clamp_i32(rect.w - 1));
    let bottom = rect.y.saturating_add(clamp_i32(rect.h - 1));
    vec![
        Rect::new(rect.x, rect.y, rect.w, 1),
        Rect::new(rect.x, bottom, rect.w, 1),
        Rect::new(rect.x, rect.y, 1, rect.h),
        Rect::new(right, rect.y, 1, rect.h),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{BoxCollider, CircleCollider, Transform};
    use crate::coords::Vec2;
    use crate::platform::{CanvasOp, HeadlessPlatform, Platform, WindowDesc};

    fn canvas(p: &mut HeadlessPlatform) -> (crate::platform::HeadlessWindow, crate::platform::HeadlessCanvas) {
        let desc = WindowDesc {
            title: "draw".into(),
            position: Vec2::zero(),
            width: 100,
            height: 100,
            fullscreen: false,
        };
        let window = p.create_window(&desc).unwrap();
        let canvas = p.create_canvas(&window).unwrap();
        (window, canvas)
    }

    #[test]
    fn no_transform_draws_nothing() {
        let mut p = HeadlessPlatform::new();
        let (_w, mut c) = canvas(&mut p);
        ShapeOutlines::default().draw(&FrameSlots::default(), &mut c);
        assert!(c.ops().is_empty());
    }

    #[test]
    fn marker_is_centered_on_transform() {
        let mut p = HeadlessPlatform::new();
        let (_w, mut c) = canvas(&mut p);
        let slots = FrameSlots {
            transform: Some(Transform::new(Vec2::new(50, 50)).with_scale(2.0)),
            ..FrameSlots::default()
        };
        ShapeOutlines { color: Color::WHITE, marker_size: 4 }.draw(&slots, &mut c);
        assert_eq!(
            c.ops(),
            [
                CanvasOp::SetDrawColor(Color::WHITE),
                CanvasOp::FillRect(Rect::new(46, 46, 8, 8), Color::WHITE),
            ]
        );
    }

    #[test]
    fn colliders_are_outlined_relative_to_transform() {
        let mut p = HeadlessPlatform::new();
        let (_w, mut c) = canvas(&mut p);
        let slots = FrameSlots {
            transform: Some(Transform::new(Vec2::new(10, 20))),
            box_collider: Some(BoxCollider::from_rect(Vec2::new(0, 0), 5, 3)),
            ..FrameSlots::default()
        };
        ShapeOutlines { color: Color::WHITE, marker_size: 0 }.draw(&slots, &mut c);
        assert_eq!(
            c.filled_since_clear(),
            [
                Rect::new(10, 20, 5, 1),
                Rect::new(10, 22, 5, 1),
                Rect::new(10, 20, 1, 3),
                Rect::new(14, 20, 1, 3),
            ]
        );
    }

    #[test]
    fn off_canvas_edges_are_clipped() {
        let mut p = HeadlessPlatform::new();
        let (_w, mut c) = canvas(&mut p);
        let slots = FrameSlots {
            transform: Some(Transform::new(Vec2::new(0, 0))),
            circle_collider: Some(CircleCollider::new(10.0)),
            ..FrameSlots::default()
        };
        ShapeOutlines { color: Color::WHITE, marker_size: 0 }.draw(&slots, &mut c);
        // Circle bounds span (-5,-5)..(5,5); only the bottom and right edges
        // survive, clipped to the canvas.
        assert_eq!(
            c.filled_since_clear(),
            [Rect::new(0, 4, 5, 1), Rect::new(4, 0, 1, 5)]
        );
    }

    #[test]
    fn closures_are_consumers() {
        let mut p = HeadlessPlatform::new();
        let (_w, mut c) = canvas(&mut p);
        let mut calls = 0;
        let mut consumer = |_: &FrameSlots, canvas: &mut dyn Canvas| {
            calls += 1;
            canvas.fill_rect(Rect::new(0, 0, 1, 1));
        };
        consumer.draw(&FrameSlots::default(), &mut c);
        assert_eq!(calls, 1);
        assert_eq!(c.filled_since_clear().len(), 1);
    }
}
