use ambient_core::{AmbientConfig, AmbientState, ConfigError};
use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

fn set(obj: &Object, key: &str, value: JsValue) {
    _ = Reflect::set(obj, &JsValue::from_str(key), &value);
}

/// Plain JS object with camelCase keys for JS consumers.
pub fn snapshot_to_js(state: &AmbientState) -> JsValue {
    let pointer = Object::new();
    set(&pointer, "x", JsValue::from(state.pointer.position.x));
    set(&pointer, "y", JsValue::from(state.pointer.position.y));
    set(&pointer, "speed", JsValue::from_f64(state.pointer.speed as f64));

    let scroll = Object::new();
    set(&scroll, "offset", JsValue::from_f64(state.scroll.offset as f64));
    set(&scroll, "speed", JsValue::from_f64(state.scroll.speed as f64));
    set(&scroll, "depth", JsValue::from_f64(state.scroll.depth as f64));

    let obj = Object::new();
    set(&obj, "pointer", pointer.into());
    set(&obj, "scroll", scroll.into());
    set(&obj, "idle", JsValue::from_bool(state.idle));
    set(
        &obj,
        "idleDurationSeconds",
        JsValue::from_f64(state.idle_duration_secs as f64),
    );
    set(&obj, "focusMode", JsValue::from_bool(state.focus_mode));
    set(
        &obj,
        "animationIntensity",
        JsValue::from_f64(state.animation_intensity as f64),
    );
    set(&obj, "timeOfDay", JsValue::from_str(state.time_of_day.as_str()));
    set(
        &obj,
        "reducedMotionPreference",
        JsValue::from_bool(state.reduced_motion),
    );
    set(
        &obj,
        "performanceTier",
        JsValue::from_str(state.performance_tier.as_str()),
    );
    obj.into()
}

/// Build a config from the optional `mount` options object. Missing keys keep
/// their defaults; unknown keys and non-numeric values are skipped with a
/// warning.
pub fn config_from_options(options: &Option<JsValue>) -> Result<AmbientConfig, ConfigError> {
    let mut config = AmbientConfig::default();
    let Some(obj) = options
        .as_ref()
        .filter(|v| !v.is_null() && !v.is_undefined())
    else {
        return Ok(config);
    };
    let Some(obj) = obj.dyn_ref::<Object>() else {
        log::warn!("[mount] options is not an object, using defaults");
        return Ok(config);
    };
    let entries: Vec<(String, Option<f64>)> = Object::keys(obj)
        .iter()
        .filter_map(|k| k.as_string())
        .filter_map(|key| {
            let v = Reflect::get(obj, &JsValue::from_str(&key)).ok()?;
            if v.is_null() || v.is_undefined() {
                return None;
            }
            Some((key, v.as_f64()))
        })
        .collect();
    config.apply_overrides(entries.iter().map(|(k, v)| (k.as_str(), *v)))?;
    config.validate()?;
    Ok(config)
}
