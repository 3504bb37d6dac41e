use crate::constants::{capped_pixel_ratio, CELL_CSS_VAR};
use crate::core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// 2-D context of `canvas`, or `None` if the browser refuses one.
pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
}

#[inline]
fn window_extent(window: &web::Window) -> (f64, f64) {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    (dim(window.inner_width()), dim(window.inner_height()))
}

/// Size the backing store to the window (scaled by the capped DPR), reset the
/// transform so drawing stays in CSS pixels, and return the drawable size.
pub fn sync_canvas_to_viewport(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
) -> Viewport {
    let dpr = capped_pixel_ratio(window.device_pixel_ratio());
    let (w, h) = window_extent(window);
    canvas.set_width((w * dpr).floor() as u32);
    canvas.set_height((h * dpr).floor() as u32);
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    Viewport::new(
        (canvas.width() as f64 / dpr) as f32,
        (canvas.height() as f64 / dpr) as f32,
    )
}

/// Expose the grid cell size as a CSS custom property on `<html>`.
pub fn publish_cell_size(document: &web::Document, cell: f32) {
    if let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        _ = root.style().set_property(CELL_CSS_VAR, &format!("{cell}px"));
    }
}

#[inline]
pub fn media_query(window: &web::Window, query: &str) -> Option<web::MediaQueryList> {
    window.match_media(query).ok().flatten()
}

#[inline]
pub fn is_visible(document: &web::Document) -> bool {
    document.visibility_state() == web::VisibilityState::Visible
}
