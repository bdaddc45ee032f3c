use std::time::Duration;

// Shared ambient tuning constants used by the aggregator and the web frontend.

// Input throttling
pub const POINTER_THROTTLE: Duration = Duration::from_millis(60); // one pointer sample per window
pub const SCROLL_THROTTLE: Duration = Duration::from_millis(100); // one scroll sample per window
pub const MIN_SAMPLE_ELAPSED: Duration = Duration::from_millis(1); // velocity divisor floor
pub const SPEED_STALE_AFTER: Duration = Duration::from_secs(1); // speeds older than this read as 0

// Presence (idle/focus) timing
pub const IDLE_AFTER: Duration = Duration::from_secs(60); // quiet period before idle
pub const FOCUS_AFTER: Duration = Duration::from_secs(30); // additional quiet period before focus
pub const FOCUS_DEPTH_THRESHOLD: f32 = 0.3; // scroll depth required at idle-entry

// Periodic loops
pub const TICK_INTERVAL: Duration = Duration::from_millis(200);
pub const CLOCK_RESAMPLE: Duration = Duration::from_secs(60);

// Intensity bounds and targets
pub const INTENSITY_MIN: f32 = 0.1; // floor, also the reduced-motion target
pub const INTENSITY_MAX: f32 = 1.5;
pub const INTENSITY_NEUTRAL: f32 = 1.0;
pub const IDLE_INTENSITY_START: f32 = 0.6; // target on idle-entry
pub const IDLE_INTENSITY_DECAY_PER_SEC: f32 = 0.005; // further reduction per idle second
pub const IDLE_INTENSITY_FLOOR: f32 = 0.3;
pub const SMOOTHING_FRACTION: f32 = 0.15; // share of the gap closed per tick

// Motion boost (speeds in px/ms)
pub const FAST_POINTER_SPEED: f32 = 1.5;
pub const FAST_SCROLL_SPEED: f32 = 2.0;
pub const BOOST_PER_SPEED: f32 = 0.1; // extra intensity per px/ms over the threshold

// Capability probe
pub const DEFAULT_LOGICAL_CORES: u32 = 4;
pub const DEFAULT_DEVICE_MEMORY_GB: f32 = 4.0;
pub const HIGH_TIER_CORES: u32 = 8;
pub const HIGH_TIER_MEMORY_GB: f32 = 8.0;
pub const MEDIUM_TIER_CORES: u32 = 4;
pub const MEDIUM_TIER_MEMORY_GB: f32 = 4.0;
