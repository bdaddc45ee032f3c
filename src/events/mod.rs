pub mod pointer;
pub mod preference;
pub mod scroll;

pub use pointer::wire_pointermove;
pub use preference::wire_reduced_motion_change;
pub use scroll::wire_scroll;

use web_sys as web;

/// Register a passive listener; input handlers never call `preventDefault`.
pub(crate) fn add_passive_listener(
    target: &web::EventTarget,
    event: &str,
    callback: &js_sys::Function,
) {
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    if let Err(e) =
        target.add_event_listener_with_callback_and_add_event_listener_options(event, callback, &opts)
    {
        log::error!("[events] failed to listen for {}: {:?}", event, e);
    }
}
