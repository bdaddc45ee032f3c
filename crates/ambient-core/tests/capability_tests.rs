// Host-side tests for the capability probe and time-of-day buckets.

use ambient_core::{CapabilityHints, PerformanceTier, TimeOfDay};

fn hints(cores: Option<u32>, memory: Option<f32>, reduced_motion: bool) -> CapabilityHints {
    CapabilityHints {
        logical_cores: cores,
        device_memory_gb: memory,
        reduced_motion,
    }
}

#[test]
fn tier_table_matches_thresholds() {
    assert_eq!(
        PerformanceTier::probe(&hints(Some(8), Some(8.0), false)),
        PerformanceTier::High
    );
    assert_eq!(
        PerformanceTier::probe(&hints(Some(4), Some(4.0), false)),
        PerformanceTier::Medium
    );
    assert_eq!(
        PerformanceTier::probe(&hints(Some(2), Some(2.0), false)),
        PerformanceTier::Low
    );
    // both hints must meet the threshold
    assert_eq!(
        PerformanceTier::probe(&hints(Some(16), Some(2.0), false)),
        PerformanceTier::Low
    );
    assert_eq!(
        PerformanceTier::probe(&hints(Some(16), Some(4.0), false)),
        PerformanceTier::Medium
    );
}

#[test]
fn reduced_motion_forces_low_tier() {
    for cores in [None, Some(2), Some(8), Some(64)] {
        for memory in [None, Some(1.0), Some(8.0), Some(32.0)] {
            assert_eq!(
                PerformanceTier::probe(&hints(cores, memory, true)),
                PerformanceTier::Low
            );
        }
    }
}

#[test]
fn missing_hints_default_to_mid_range() {
    assert_eq!(
        PerformanceTier::probe(&CapabilityHints::default()),
        PerformanceTier::Medium
    );
    assert_eq!(
        PerformanceTier::probe(&hints(Some(8), None, false)),
        PerformanceTier::Medium
    );
    assert_eq!(
        PerformanceTier::probe(&hints(None, Some(f32::NAN), false)),
        PerformanceTier::Medium
    );
}

#[test]
fn time_of_day_buckets() {
    assert_eq!(TimeOfDay::from_hour(5), TimeOfDay::Morning);
    assert_eq!(TimeOfDay::from_hour(11), TimeOfDay::Morning);
    assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Afternoon);
    assert_eq!(TimeOfDay::from_hour(16), TimeOfDay::Afternoon);
    assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::Evening);
    assert_eq!(TimeOfDay::from_hour(20), TimeOfDay::Evening);
    assert_eq!(TimeOfDay::from_hour(21), TimeOfDay::Night);
    assert_eq!(TimeOfDay::from_hour(0), TimeOfDay::Night);
    assert_eq!(TimeOfDay::from_hour(4), TimeOfDay::Night);
    assert_eq!(TimeOfDay::from_hour(24), TimeOfDay::Night);
}
