//! Animation intensity tracking.
//!
//! Consumers sample intensity at arbitrary times, so it never jumps: each tick
//! moves the displayed value a fixed fraction of the way toward a target
//! derived from presence and motion.

use crate::constants::*;
use std::time::Duration;

/// Inputs the target is derived from, gathered once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IntensityInputs {
    pub reduced_motion: bool,
    pub idle_secs: Option<f32>,
    pub pointer_speed: f32,
    pub scroll_speed: f32,
}

pub fn target_intensity(inputs: &IntensityInputs) -> f32 {
    if inputs.reduced_motion {
        return INTENSITY_MIN;
    }
    if let Some(secs) = inputs.idle_secs {
        return (IDLE_INTENSITY_START - IDLE_INTENSITY_DECAY_PER_SEC * secs.max(0.0))
            .max(IDLE_INTENSITY_FLOOR);
    }
    let pointer_excess = (inputs.pointer_speed - FAST_POINTER_SPEED).max(0.0);
    let scroll_excess = (inputs.scroll_speed - FAST_SCROLL_SPEED).max(0.0);
    if pointer_excess > 0.0 || scroll_excess > 0.0 {
        let boost = BOOST_PER_SPEED * (1.0 + pointer_excess.max(scroll_excess));
        return (INTENSITY_NEUTRAL + boost).min(INTENSITY_MAX);
    }
    INTENSITY_NEUTRAL
}

/// Move `current` toward `target`. A full `tick` closes `SMOOTHING_FRACTION`
/// of the gap; shorter steps close proportionally less and longer steps are
/// treated as one tick.
#[inline]
pub fn next_intensity(current: f32, target: f32, dt: Duration, tick: Duration) -> f32 {
    let ratio = if tick.is_zero() {
        1.0
    } else {
        (dt.as_secs_f32() / tick.as_secs_f32()).clamp(0.0, 1.0)
    };
    let alpha = 1.0 - (1.0 - SMOOTHING_FRACTION).powf(ratio);
    let target = target.clamp(INTENSITY_MIN, INTENSITY_MAX);
    (current + (target - current) * alpha).clamp(INTENSITY_MIN, INTENSITY_MAX)
}

/// Largest change a single tick may make.
pub fn max_tick_delta() -> f32 {
    SMOOTHING_FRACTION * (INTENSITY_MAX - INTENSITY_MIN)
}
