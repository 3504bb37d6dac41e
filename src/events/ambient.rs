use super::{WebHost, WebListener};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn resize(host: &WebHost) -> Option<WebListener> {
    let state = host.state.clone();
    let window = host.window.clone();
    let canvas = host.canvas.clone();
    let ctx = host.ctx.clone();
    WebListener::attach(host.window.as_ref(), "resize", false, move |_| {
        let viewport = dom::sync_canvas_to_viewport(&window, &canvas, &ctx);
        state.borrow_mut().viewport = viewport;
    })
}

// Media query lists fire `change` with a MediaQueryListEvent.
fn media_change(
    list: Option<&web::MediaQueryList>,
    mut apply: impl FnMut(bool) + 'static,
) -> Option<WebListener> {
    WebListener::attach(list?.as_ref(), "change", false, move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::MediaQueryListEvent>() {
            apply(ev.matches());
        }
    })
}

pub fn reduced_motion(host: &WebHost) -> Option<WebListener> {
    let state = host.state.clone();
    media_change(host.reduced_motion.as_ref(), move |on| {
        state.borrow_mut().ambient.reduced_motion = on;
    })
}

pub fn coarse_pointer(host: &WebHost) -> Option<WebListener> {
    let state = host.state.clone();
    media_change(host.coarse_pointer.as_ref(), move |on| {
        state.borrow_mut().ambient.coarse_pointer = on;
    })
}

pub fn visibility(host: &WebHost) -> Option<WebListener> {
    let state = host.state.clone();
    let document = host.document.clone();
    WebListener::attach(host.document.as_ref(), "visibilitychange", false, move |_| {
        state.borrow_mut().ambient.visible = dom::is_visible(&document);
    })
}
