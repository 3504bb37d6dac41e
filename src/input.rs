use glam::Vec2;
use web_sys as web;

// The canvas is fixed at the viewport origin, so client coordinates are
// canvas coordinates in CSS pixels.

#[inline]
pub fn mouse_client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
pub fn first_touch_pos(ev: &web::TouchEvent) -> Option<Vec2> {
    ev.touches()
        .get(0)
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
}
