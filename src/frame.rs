use crate::core::{Mount, ShimmerEngine, ShimmerState, Tick};
use crate::dom;
use crate::events::WebHost;
use crate::render::CanvasSurface;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;

pub struct FrameContext {
    pub mount: Mount<WebHost>,
    pub engine: ShimmerEngine,
    pub surface: CanvasSurface,
    pub state: Rc<RefCell<ShimmerState>>,
    pub published_cell: Option<f32>,
}

impl FrameContext {
    pub fn frame(&mut self, now_ms: f64) {
        if !self.mount.begin_frame() {
            return;
        }
        // Copy out so listeners never observe a borrow held across drawing.
        let state = *self.state.borrow();
        if let Tick::Drawn(metrics) = self.engine.tick(now_ms, &state, &mut self.surface) {
            if self.published_cell != Some(metrics.cell) {
                dom::publish_cell_size(&self.mount.host().document, metrics.cell);
                self.published_cell = Some(metrics.cell);
            }
        }
        self.mount.schedule_next();
    }
}

/// Install the frame callback and request the first frame. The callback
/// holds the context weakly; whoever owns the returned `Rc` keeps it alive.
pub fn start_loop(frame_ctx: &Rc<RefCell<FrameContext>>) {
    let weak: Weak<RefCell<FrameContext>> = Rc::downgrade(frame_ctx);
    let slot = frame_ctx.borrow().mount.host().frame_slot.clone();
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        if let Some(ctx) = weak.upgrade() {
            ctx.borrow_mut().frame(now_ms);
        }
    }) as Box<dyn FnMut(f64)>));
    frame_ctx.borrow_mut().mount.schedule_next();
}

/// Unmount and release the frame callback.
pub fn stop_loop(frame_ctx: &Rc<RefCell<FrameContext>>) {
    let slot = {
        let mut ctx = frame_ctx.borrow_mut();
        ctx.mount.unmount();
        ctx.mount.host().frame_slot.clone()
    };
    slot.borrow_mut().take();
}
