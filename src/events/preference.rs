use crate::dom;
use crate::session::Session;
use ambient_core::AmbientEvent;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Follow OS-level reduced-motion changes. Without `matchMedia` the
/// preference simply stays at its mount-time value.
pub fn wire_reduced_motion_change(window: &web::Window, session: &Session) {
    let Some(query) = dom::reduced_motion_query(window) else {
        log::info!("[events] reduced-motion query unsupported");
        return;
    };
    let s = session.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MediaQueryListEvent| {
        s.dispatch(AmbientEvent::ReducedMotionChanged(ev.matches()));
    }) as Box<dyn FnMut(_)>);
    _ = query.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}
