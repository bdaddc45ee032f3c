use crate::dom;
use crate::session::Session;
use ambient_core::AmbientEvent;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_scroll(window: &web::Window, session: &Session) {
    let s = session.clone();
    let win = window.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::Event| {
        s.dispatch(AmbientEvent::Scrolled(dom::scroll_metrics(&win)));
    }) as Box<dyn FnMut(_)>);
    super::add_passive_listener(window, "scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}
