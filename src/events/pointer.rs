use super::{WebHost, WebListener};
use crate::core::PointerInput;
use crate::input;
use wasm_bindgen::JsCast;
use web_sys as web;

fn pointer_listener(
    host: &WebHost,
    event: &'static str,
    passive: bool,
    read: impl Fn(&web::Event) -> Option<PointerInput> + 'static,
) -> Option<WebListener> {
    let state = host.state.clone();
    WebListener::attach(host.window.as_ref(), event, passive, move |ev| {
        if let Some(input) = read(&ev) {
            state.borrow_mut().pointer.apply(input);
        }
    })
}

pub fn mouse_move(host: &WebHost) -> Option<WebListener> {
    pointer_listener(host, "mousemove", false, |ev| {
        ev.dyn_ref::<web::MouseEvent>()
            .map(|ev| PointerInput::Move(input::mouse_client_pos(ev)))
    })
}

pub fn mouse_leave(host: &WebHost) -> Option<WebListener> {
    pointer_listener(host, "mouseleave", false, |_| Some(PointerInput::Leave))
}

/// touchstart / touchmove follow the first remaining touch.
pub fn touch(host: &WebHost, event: &'static str) -> Option<WebListener> {
    pointer_listener(host, event, true, |ev| {
        Some(PointerInput::Touch(
            ev.dyn_ref::<web::TouchEvent>()
                .and_then(input::first_touch_pos),
        ))
    })
}

pub fn touch_end(host: &WebHost) -> Option<WebListener> {
    pointer_listener(host, "touchend", false, |_| Some(PointerInput::TouchEnd))
}
