#![cfg(target_arch = "wasm32")]
use ambient_core::{AmbientAggregator, AmbientEvent, SubscriptionId};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod bridge;
mod dom;
mod events;
mod frame;
mod session;
mod styles;

use session::Session;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).ok();
    log::info!("ambient-web starting");
    Ok(())
}

/// Read-only handle on the page's ambient signals.
#[wasm_bindgen]
pub struct AmbientSignals {
    session: Session,
}

#[wasm_bindgen]
impl AmbientSignals {
    /// Latest snapshot as a plain object.
    pub fn snapshot(&self) -> JsValue {
        bridge::snapshot_to_js(&self.session.latest.borrow())
    }

    /// Call `callback(snapshot)` after every change. Returns an id for
    /// `unsubscribe`.
    pub fn subscribe(&self, callback: js_sys::Function) -> Result<u32, JsValue> {
        let mut agg = self
            .session
            .aggregator
            .try_borrow_mut()
            .map_err(|_| JsValue::from_str("cannot subscribe from inside a subscriber"))?;
        let id = agg.subscribe(move |state| {
            if let Err(e) = callback.call1(&JsValue::NULL, &bridge::snapshot_to_js(state)) {
                log::error!("[signals] subscriber threw: {:?}", e);
            }
        });
        Ok(id.0)
    }

    pub fn unsubscribe(&self, id: u32) -> Result<bool, JsValue> {
        let mut agg = self
            .session
            .aggregator
            .try_borrow_mut()
            .map_err(|_| JsValue::from_str("cannot unsubscribe from inside a subscriber"))?;
        Ok(agg.unsubscribe(SubscriptionId(id)))
    }
}

/// Start aggregating for this page session. Only one mount is allowed.
#[wasm_bindgen]
pub fn mount(options: Option<JsValue>) -> Result<AmbientSignals, JsValue> {
    static MOUNTED: AtomicBool = AtomicBool::new(false);
    if MOUNTED.swap(true, Ordering::SeqCst) {
        return Err(JsValue::from_str("ambient signals already mounted"));
    }
    init(options).map_err(|e| {
        log::error!("mount error: {:?}", e);
        MOUNTED.store(false, Ordering::SeqCst);
        JsValue::from_str(&format!("{e:#}"))
    })
}

fn init(options: Option<JsValue>) -> anyhow::Result<AmbientSignals> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = bridge::config_from_options(&options)?;
    let tick_interval = config.tick_interval;
    let hints = dom::capability_hints(&window);

    let started = Instant::now();
    let mut aggregator =
        AmbientAggregator::new(config, hints, Box::new(dom::BrowserClock), started.elapsed());

    // keep the readable copy and the <html> mirror in sync with every publish
    let session_latest = Rc::new(RefCell::new(aggregator.snapshot()));
    {
        let latest = session_latest.clone();
        aggregator.subscribe(move |state| {
            *latest.borrow_mut() = Rc::new(state.clone());
        });
        let doc = document.clone();
        aggregator.subscribe(move |state| dom::apply_root_styles(&doc, state));
    }
    dom::apply_root_styles(&document, &aggregator.snapshot());

    let session = Session::new(aggregator, session_latest, started);

    events::wire_pointermove(&window, &session);
    events::wire_scroll(&window, &session);
    events::wire_reduced_motion_change(&window, &session);

    // pick up a restored scroll position without waiting for a scroll event
    session.dispatch(AmbientEvent::Scrolled(dom::scroll_metrics(&window)));

    frame::wire_deadline_timer(&session);
    frame::start_tick_loop(&session, tick_interval);

    log::info!("[mount] ambient signals mounted");
    Ok(AmbientSignals { session })
}
