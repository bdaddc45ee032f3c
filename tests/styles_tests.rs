// Host-side tests for the CSS/data-attribute mapping.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod styles {
    include!("../src/styles.rs");
}

use ambient_core::{AmbientState, PerformanceTier, TimeOfDay};
use glam::IVec2;
use styles::*;

fn state() -> AmbientState {
    AmbientState::initial(TimeOfDay::Evening, false, PerformanceTier::Medium)
}

fn prop(state: &AmbientState, name: &str) -> String {
    css_properties(state)
        .into_iter()
        .find(|(n, _)| *n == name)
        .map(|(_, v)| v)
        .unwrap_or_else(|| panic!("missing {name}"))
}

fn attr(state: &AmbientState, name: &str) -> &'static str {
    data_attributes(state)
        .into_iter()
        .find(|(n, _)| *n == name)
        .map(|(_, v)| v)
        .unwrap_or_else(|| panic!("missing {name}"))
}

#[test]
fn initial_state_maps_to_neutral_values() {
    let s = state();
    assert_eq!(prop(&s, PROP_INTENSITY), "1.000");
    assert_eq!(prop(&s, PROP_SCROLL_DEPTH), "0.000");
    assert_eq!(prop(&s, PROP_POINTER_X), "0px");
    assert_eq!(attr(&s, ATTR_IDLE), "false");
    assert_eq!(attr(&s, ATTR_FOCUS), "false");
    assert_eq!(attr(&s, ATTR_TIME), "evening");
    assert_eq!(attr(&s, ATTR_TIER), "medium");
    assert_eq!(attr(&s, ATTR_REDUCED_MOTION), "false");
}

#[test]
fn signals_are_formatted_for_css() {
    let mut s = state();
    s.animation_intensity = 0.4567;
    s.scroll.depth = 0.25;
    s.pointer.position = IVec2::new(640, -3);
    s.idle = true;
    s.focus_mode = true;
    s.reduced_motion = true;

    assert_eq!(prop(&s, PROP_INTENSITY), "0.457");
    assert_eq!(prop(&s, PROP_SCROLL_DEPTH), "0.250");
    assert_eq!(prop(&s, PROP_POINTER_X), "640px");
    assert_eq!(prop(&s, PROP_POINTER_Y), "-3px");
    assert_eq!(attr(&s, ATTR_IDLE), "true");
    assert_eq!(attr(&s, ATTR_FOCUS), "true");
    assert_eq!(attr(&s, ATTR_REDUCED_MOTION), "true");
}

#[test]
fn property_names_are_custom_properties() {
    for (name, _) in css_properties(&state()) {
        assert!(name.starts_with("--ambient-"), "{name}");
    }
    for (name, _) in data_attributes(&state()) {
        assert!(name.starts_with("data-ambient-"), "{name}");
    }
}
