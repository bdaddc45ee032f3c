//! Tuning values for the aggregator.
//!
//! Every field defaults to the matching constant in `constants.rs`. Hosts may
//! override individual values (the web frontend reads them from the options
//! object passed to `mount`) and must call [`AmbientConfig::validate`] before
//! handing the config to the aggregator.

use crate::constants::*;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("idle timeout {idle:?} must be longer than the throttle window {throttle:?}")]
    IdleNotAfterThrottle { idle: Duration, throttle: Duration },
    #[error("focus depth threshold {0} is outside [0, 1]")]
    DepthOutOfRange(f32),
    #[error("{0} must be non-zero")]
    ZeroDuration(&'static str),
    #[error("unknown config key `{0}`")]
    UnknownKey(String),
    #[error("value {value} for `{key}` is not a finite non-negative number")]
    InvalidValue { key: String, value: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct AmbientConfig {
    pub pointer_throttle: Duration,
    pub scroll_throttle: Duration,
    pub idle_after: Duration,
    pub focus_after: Duration,
    pub focus_depth_threshold: f32,
    pub tick_interval: Duration,
    pub clock_resample: Duration,
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            pointer_throttle: POINTER_THROTTLE,
            scroll_throttle: SCROLL_THROTTLE,
            idle_after: IDLE_AFTER,
            focus_after: FOCUS_AFTER,
            focus_depth_threshold: FOCUS_DEPTH_THRESHOLD,
            tick_interval: TICK_INTERVAL,
            clock_resample: CLOCK_RESAMPLE,
        }
    }
}

impl AmbientConfig {
    pub fn with_idle_after(mut self, idle_after: Duration) -> Self {
        self.idle_after = idle_after;
        self
    }

    pub fn with_focus_after(mut self, focus_after: Duration) -> Self {
        self.focus_after = focus_after;
        self
    }

    pub fn with_focus_depth_threshold(mut self, threshold: f32) -> Self {
        self.focus_depth_threshold = threshold;
        self
    }

    pub fn with_throttles(mut self, pointer: Duration, scroll: Duration) -> Self {
        self.pointer_throttle = pointer;
        self.scroll_throttle = scroll;
        self
    }

    pub fn with_tick_interval(mut self, tick: Duration) -> Self {
        self.tick_interval = tick;
        self
    }

    /// Apply a single named override. Seconds for `idleSecs`/`focusSecs`,
    /// milliseconds for the `*Ms` keys, a fraction for `focusDepth`.
    pub fn apply_override(&mut self, key: &str, value: f64) -> Result<(), ConfigError> {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::InvalidValue {
                key: key.to_string(),
                value,
            });
        }
        match key {
            "idleSecs" => self.idle_after = from_micros_f64(value * 1e6),
            "focusSecs" => self.focus_after = from_micros_f64(value * 1e6),
            "focusDepth" => self.focus_depth_threshold = value as f32,
            "pointerThrottleMs" => self.pointer_throttle = from_micros_f64(value * 1e3),
            "scrollThrottleMs" => self.scroll_throttle = from_micros_f64(value * 1e3),
            "tickMs" => self.tick_interval = from_micros_f64(value * 1e3),
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }

    /// Apply host-supplied options. Unrecognised keys and values that are not
    /// numbers (`None`) are skipped with a warning; a recognised key with a bad
    /// number is an error.
    pub fn apply_overrides<'a>(
        &mut self,
        entries: impl IntoIterator<Item = (&'a str, Option<f64>)>,
    ) -> Result<(), ConfigError> {
        for (key, value) in entries {
            if !OVERRIDE_KEYS.contains(&key) {
                log::warn!("[config] ignoring unknown option `{}`", key);
                continue;
            }
            match value {
                Some(v) => self.apply_override(key, v)?,
                None => log::warn!("[config] ignoring non-numeric option `{}`", key),
            }
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let named = [
            ("pointer throttle", self.pointer_throttle),
            ("scroll throttle", self.scroll_throttle),
            ("tick interval", self.tick_interval),
            ("clock resample", self.clock_resample),
        ];
        for (name, d) in named {
            if d.is_zero() {
                return Err(ConfigError::ZeroDuration(name));
            }
        }
        let throttle = self.pointer_throttle.max(self.scroll_throttle);
        if self.idle_after <= throttle {
            return Err(ConfigError::IdleNotAfterThrottle {
                idle: self.idle_after,
                throttle,
            });
        }
        if !(0.0..=1.0).contains(&self.focus_depth_threshold) {
            return Err(ConfigError::DepthOutOfRange(self.focus_depth_threshold));
        }
        Ok(())
    }
}

#[inline]
fn from_micros_f64(micros: f64) -> Duration {
    Duration::from_micros(micros.round() as u64)
}

/// Keys accepted by [`AmbientConfig::apply_override`].
pub const OVERRIDE_KEYS: [&str; 6] = [
    "idleSecs",
    "focusSecs",
    "focusDepth",
    "pointerThrottleMs",
    "scrollThrottleMs",
    "tickMs",
];
