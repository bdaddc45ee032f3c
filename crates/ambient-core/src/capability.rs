use crate::constants::*;

/// Best-effort device hints reported by the host. Any of them may be missing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CapabilityHints {
    pub logical_cores: Option<u32>,
    pub device_memory_gb: Option<f32>,
    pub reduced_motion: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PerformanceTier {
    High,
    Medium,
    Low,
}

impl PerformanceTier {
    /// Classify the device once. Missing hints fall back to a mid-range default.
    pub fn probe(hints: &CapabilityHints) -> Self {
        if hints.reduced_motion {
            return PerformanceTier::Low;
        }
        let cores = hints.logical_cores.unwrap_or(DEFAULT_LOGICAL_CORES);
        let memory = hints
            .device_memory_gb
            .filter(|m| m.is_finite())
            .unwrap_or(DEFAULT_DEVICE_MEMORY_GB);
        if cores >= HIGH_TIER_CORES && memory >= HIGH_TIER_MEMORY_GB {
            PerformanceTier::High
        } else if cores >= MEDIUM_TIER_CORES && memory >= MEDIUM_TIER_MEMORY_GB {
            PerformanceTier::Medium
        } else {
            PerformanceTier::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PerformanceTier::High => "high",
            PerformanceTier::Medium => "medium",
            PerformanceTier::Low => "low",
        }
    }
}
