//! Browser side of the mount lifecycle: one DOM listener per [`Signal`],
//! plus requestAnimationFrame scheduling.

use crate::core::{Host, ShimmerState, Signal};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

mod ambient;
mod pointer;

/// An attached DOM listener; detaching removes it from its target.
pub struct WebListener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl WebListener {
    fn attach(
        target: &web::EventTarget,
        event: &'static str,
        passive: bool,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
        let added = if passive {
            let opts = web::AddEventListenerOptions::new();
            opts.set_passive(true);
            target.add_event_listener_with_callback_and_add_event_listener_options(
                event, callback, &opts,
            )
        } else {
            target.add_event_listener_with_callback(event, callback)
        };
        match added {
            Ok(()) => Some(Self {
                target: target.clone(),
                event,
                closure,
            }),
            Err(e) => {
                log::warn!("[events] could not listen for {}: {:?}", event, e);
                None
            }
        }
    }

    fn detach(self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Slot for the frame callback. Filled after the frame context exists and
/// emptied on unmount.
pub type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub struct WebHost {
    pub window: web::Window,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub state: Rc<RefCell<ShimmerState>>,
    pub reduced_motion: Option<web::MediaQueryList>,
    pub coarse_pointer: Option<web::MediaQueryList>,
    pub frame_slot: FrameSlot,
}

impl Host for WebHost {
    type Listener = WebListener;
    type FrameRequest = i32;

    fn listen(&mut self, signal: Signal) -> Option<WebListener> {
        match signal {
            Signal::Resize => ambient::resize(self),
            Signal::PointerMove => pointer::mouse_move(self),
            Signal::PointerLeave => pointer::mouse_leave(self),
            Signal::TouchStart => pointer::touch(self, "touchstart"),
            Signal::TouchMove => pointer::touch(self, "touchmove"),
            Signal::TouchEnd => pointer::touch_end(self),
            Signal::ReducedMotionChange => ambient::reduced_motion(self),
            Signal::CoarsePointerChange => ambient::coarse_pointer(self),
            Signal::VisibilityChange => ambient::visibility(self),
        }
    }

    fn unlisten(&mut self, listener: WebListener) {
        listener.detach();
    }

    fn request_frame(&mut self) -> Option<i32> {
        let slot = self.frame_slot.borrow();
        let cb = slot.as_ref()?;
        self.window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .ok()
    }

    fn cancel_frame(&mut self, request: i32) {
        _ = self.window.cancel_animation_frame(request);
    }
}
