use crate::core::{CellRect, Rgb, Surface, Viewport};
use web_sys as web;

/// [`Surface`] backed by a Canvas 2D context whose transform maps CSS pixels.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    // The outline style only changes with its alpha; keep the string around.
    outline: Option<(f32, String)>,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx, outline: None }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, viewport: Viewport) {
        self.ctx
            .clear_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
    }

    fn fill_cell(&mut self, rect: CellRect, color: Rgb, alpha: f32) {
        self.ctx.set_fill_style_str(&color.css_rgba(alpha));
        self.ctx
            .fill_rect(rect.x as f64, rect.y as f64, rect.size as f64, rect.size as f64);
    }

    fn stroke_cell(&mut self, rect: CellRect, alpha: f32) {
        if !matches!(&self.outline, Some((a, _)) if *a == alpha) {
            self.outline = Some((alpha, Rgb::WHITE.css_rgba(alpha)));
        }
        if let Some((_, style)) = &self.outline {
            self.ctx.set_stroke_style_str(style);
        }
        self.ctx
            .stroke_rect(rect.x as f64, rect.y as f64, rect.size as f64, rect.size as f64);
    }
}
