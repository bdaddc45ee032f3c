// Mapping from snapshots to CSS custom properties and data attributes on
// `<html>`, so purely CSS-driven decorations can follow the signals.
// Pure functions only; `dom.rs` applies the results.

use ambient_core::AmbientState;
use smallvec::{smallvec, SmallVec};

pub const PROP_INTENSITY: &str = "--ambient-intensity";
pub const PROP_SCROLL_DEPTH: &str = "--ambient-scroll-depth";
pub const PROP_POINTER_X: &str = "--ambient-pointer-x";
pub const PROP_POINTER_Y: &str = "--ambient-pointer-y";

pub const ATTR_IDLE: &str = "data-ambient-idle";
pub const ATTR_FOCUS: &str = "data-ambient-focus";
pub const ATTR_TIME: &str = "data-ambient-time";
pub const ATTR_TIER: &str = "data-ambient-tier";
pub const ATTR_REDUCED_MOTION: &str = "data-ambient-reduced-motion";

#[inline]
fn flag(v: bool) -> &'static str {
    if v {
        "true"
    } else {
        "false"
    }
}

pub fn css_properties(state: &AmbientState) -> SmallVec<[(&'static str, String); 4]> {
    smallvec![
        (PROP_INTENSITY, format!("{:.3}", state.animation_intensity)),
        (PROP_SCROLL_DEPTH, format!("{:.3}", state.scroll.depth)),
        (PROP_POINTER_X, format!("{}px", state.pointer.position.x)),
        (PROP_POINTER_Y, format!("{}px", state.pointer.position.y)),
    ]
}

pub fn data_attributes(state: &AmbientState) -> SmallVec<[(&'static str, &'static str); 5]> {
    smallvec![
        (ATTR_IDLE, flag(state.idle)),
        (ATTR_FOCUS, flag(state.focus_mode)),
        (ATTR_TIME, state.time_of_day.as_str()),
        (ATTR_TIER, state.performance_tier.as_str()),
        (ATTR_REDUCED_MOTION, flag(state.reduced_motion)),
    ]
}
