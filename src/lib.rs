//! Grid shimmer: an animated background grid of softly tinted cells, swept
//! by slow colour wavefronts and lit up around the pointer.
//!
//! `core` holds the platform-independent engine and is what the host-side
//! tests exercise; the remaining modules adapt it to a browser canvas.

pub mod constants;
pub mod contact;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod input;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
pub use web_entry::*;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::constants::{CANVAS_ID, COARSE_POINTER_QUERY, REDUCED_MOTION_QUERY};
    use crate::core::{Ambient, Mount, ShimmerEngine, ShimmerParams, ShimmerState};
    use crate::dom;
    use crate::events::WebHost;
    use crate::frame::{self, FrameContext};
    use crate::render::CanvasSurface;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::spawn_local;
    use web_sys as web;

    /// Owner of a mounted grid shimmer. Dropping it from JS (`free()`) or
    /// calling `unmount()` stops the animation and removes every listener.
    #[wasm_bindgen]
    pub struct ShimmerHandle {
        ctx: Rc<RefCell<FrameContext>>,
    }

    #[wasm_bindgen]
    impl ShimmerHandle {
        pub fn unmount(&self) {
            frame::stop_loop(&self.ctx);
            log::info!("grid shimmer unmounted");
        }

        #[wasm_bindgen(getter, js_name = isMounted)]
        pub fn is_mounted(&self) -> bool {
            self.ctx.borrow().mount.is_mounted()
        }

        /// Layout unit last published to `--cell`, in CSS pixels.
        #[wasm_bindgen(getter, js_name = cellSize)]
        pub fn cell_size(&self) -> Option<f32> {
            self.ctx.borrow().published_cell
        }
    }

    impl Drop for ShimmerHandle {
        fn drop(&mut self) {
            frame::stop_loop(&self.ctx);
        }
    }

    /// Mount onto `canvas`. Returns `None` (and does nothing) when the 2-D
    /// context is unavailable.
    #[wasm_bindgen(js_name = mountGridShimmer)]
    pub fn mount_grid_shimmer(canvas: web::HtmlCanvasElement) -> Option<ShimmerHandle> {
        mount(canvas, ShimmerParams::default())
    }

    fn mount(canvas: web::HtmlCanvasElement, params: ShimmerParams) -> Option<ShimmerHandle> {
        let (window, document) = dom::window_document()?;
        let Some(ctx) = dom::context_2d(&canvas) else {
            log::warn!("grid shimmer: no 2d context; not animating");
            return None;
        };

        let reduced_motion = dom::media_query(&window, REDUCED_MOTION_QUERY);
        let coarse_pointer = dom::media_query(&window, COARSE_POINTER_QUERY);
        let state = Rc::new(RefCell::new(ShimmerState {
            ambient: Ambient {
                reduced_motion: reduced_motion.as_ref().is_some_and(|m| m.matches()),
                coarse_pointer: coarse_pointer.as_ref().is_some_and(|m| m.matches()),
                visible: dom::is_visible(&document),
            },
            viewport: dom::sync_canvas_to_viewport(&window, &canvas, &ctx),
            ..Default::default()
        }));

        let host = WebHost {
            window,
            document,
            canvas,
            ctx: ctx.clone(),
            state: state.clone(),
            reduced_motion,
            coarse_pointer,
            frame_slot: Rc::new(RefCell::new(None)),
        };
        let mount = Mount::mount(host);
        log::info!(
            "grid shimmer mounted: {} listeners, viewport {:.0}x{:.0}",
            mount.listener_count(),
            state.borrow().viewport.width,
            state.borrow().viewport.height
        );

        let frame_ctx = Rc::new(RefCell::new(FrameContext {
            mount,
            engine: ShimmerEngine::with_rng(params, StdRng::from_entropy()),
            surface: CanvasSurface::new(ctx),
            state,
            published_cell: None,
        }));
        frame::start_loop(&frame_ctx);
        Some(ShimmerHandle { ctx: frame_ctx })
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("grid-shimmer starting");

        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
        Ok(())
    }

    async fn init() -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        // Pages without the background canvas simply opt out.
        let Some(el) = document.get_element_by_id(CANVAS_ID) else {
            log::info!("no #{} element; grid shimmer not mounted", CANVAS_ID);
            return Ok(());
        };
        let canvas: web::HtmlCanvasElement = el
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("#{CANVAS_ID} is not a canvas: {:?}", e)))?;

        if let Some(handle) = mount(canvas, ShimmerParams::default()) {
            // Lives as long as the page.
            std::mem::forget(handle);
        }
        Ok(())
    }
}
