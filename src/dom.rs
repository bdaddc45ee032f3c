use crate::styles;
use ambient_core::{AmbientState, CapabilityHints, ScrollMetrics, WallClock};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// `None` when `matchMedia` is unsupported or rejects the query.
pub fn reduced_motion_query(window: &web::Window) -> Option<web::MediaQueryList> {
    match window.match_media(REDUCED_MOTION_QUERY) {
        Ok(mql) => mql,
        Err(e) => {
            log::warn!("[dom] matchMedia unavailable: {:?}", e);
            None
        }
    }
}

pub fn capability_hints(window: &web::Window) -> CapabilityHints {
    let navigator = window.navigator();
    let cores = navigator.hardware_concurrency();
    // deviceMemory is Chromium-only and missing from web-sys
    let memory = js_sys::Reflect::get(&navigator, &JsValue::from_str("deviceMemory"))
        .ok()
        .and_then(|v| v.as_f64());
    CapabilityHints {
        logical_cores: (cores.is_finite() && cores >= 1.0).then_some(cores as u32),
        device_memory_gb: memory.filter(|m| m.is_finite() && *m > 0.0).map(|m| m as f32),
        reduced_motion: reduced_motion_query(window)
            .map(|q| q.matches())
            .unwrap_or(false),
    }
}

pub fn scroll_metrics(window: &web::Window) -> ScrollMetrics {
    let offset = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let content = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    ScrollMetrics {
        offset: offset as f32,
        scrollable: (content - viewport).max(0.0) as f32,
    }
}

pub struct BrowserClock;

impl WallClock for BrowserClock {
    fn local_hour(&self) -> u32 {
        js_sys::Date::new_0().get_hours()
    }
}

/// Mirror a snapshot onto `<html>` for CSS consumers.
pub fn apply_root_styles(document: &web::Document, state: &AmbientState) {
    let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    let style = root.style();
    for (name, value) in styles::css_properties(state) {
        _ = style.set_property(name, &value);
    }
    for (name, value) in styles::data_attributes(state) {
        _ = root.set_attribute(name, value);
    }
}
