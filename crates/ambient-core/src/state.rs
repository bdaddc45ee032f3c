//! Snapshot types handed to signal consumers.
//!
//! These types avoid referencing platform-specific APIs. The aggregator
//! replaces the whole snapshot on every update; consumers only ever hold
//! shared references to a finished value.

use crate::capability::PerformanceTier;
use crate::clock::TimeOfDay;
use crate::constants::INTENSITY_NEUTRAL;
use glam::IVec2;

/// Last accepted pointer sample. Speed is in px/ms.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSignal {
    pub position: IVec2,
    pub speed: f32,
}

/// Last accepted scroll sample. `depth` is 0 at the top and 1 at the bottom
/// of the scrollable range.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSignal {
    pub offset: f32,
    pub speed: f32,
    pub depth: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AmbientState {
    pub pointer: PointerSignal,
    pub scroll: ScrollSignal,
    pub idle: bool,
    pub idle_duration_secs: f32,
    pub focus_mode: bool,
    pub animation_intensity: f32,
    pub time_of_day: TimeOfDay,
    pub reduced_motion: bool,
    pub performance_tier: PerformanceTier,
}

impl AmbientState {
    pub fn initial(
        time_of_day: TimeOfDay,
        reduced_motion: bool,
        performance_tier: PerformanceTier,
    ) -> Self {
        Self {
            pointer: PointerSignal::default(),
            scroll: ScrollSignal::default(),
            idle: false,
            idle_duration_secs: 0.0,
            focus_mode: false,
            animation_intensity: INTENSITY_NEUTRAL,
            time_of_day,
            reduced_motion,
            performance_tier,
        }
    }
}

/// Raw scroll geometry read from the host.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f32,
    /// Total content height minus viewport height.
    pub scrollable: f32,
}

impl ScrollMetrics {
    #[inline]
    pub fn depth(&self) -> f32 {
        if self.scrollable > 0.0 && self.offset.is_finite() {
            (self.offset / self.scrollable).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}
