/// Coarse wall-clock bucket used by microcopy and palette consumers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    #[inline]
    pub fn from_hour(hour: u32) -> Self {
        match hour % 24 {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=20 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
        }
    }
}

/// Source of the local hour (0..=23). The browser frontend reads `Date`.
pub trait WallClock {
    fn local_hour(&self) -> u32;
}

/// Clock pinned to one hour; handy for hosts without a local time source.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub u32);

impl WallClock for FixedClock {
    fn local_hour(&self) -> u32 {
        self.0
    }
}
