use crate::session::Session;
use ambient_core::AmbientEvent;
use glam::IVec2;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointermove(window: &web::Window, session: &Session) {
    let s = session.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = IVec2::new(ev.client_x(), ev.client_y());
        s.dispatch(AmbientEvent::PointerMoved(pos));
    }) as Box<dyn FnMut(_)>);
    super::add_passive_listener(window, "pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}
