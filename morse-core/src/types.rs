//! Core data types for the Morse transmitter

use crate::hal::Duration;

/// Hard storage bound for a normalized word. The configured
/// per-transmission limit is clamped to this capacity.
pub const WORD_CAPACITY: usize = 16;

/// Default per-transmission character limit
pub const DEFAULT_LIMIT: usize = 12;

/// One Morse pulse: an "on" phase of the output
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "std", derive(Hash))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PulseUnit {
    /// Dot (one base unit)
    Short,
    /// Dash (three base units)
    Long,
}

impl PulseUnit {
    /// Returns the duration of this pulse in base units
    pub const fn duration_units(&self) -> u32 {
        match self {
            PulseUnit::Short => 1,
            PulseUnit::Long => 3,
        }
    }

    /// Conventional notation for this pulse
    pub const fn symbol(&self) -> char {
        match self {
            PulseUnit::Short => '.',
            PulseUnit::Long => '-',
        }
    }
}

/// Ordered pulse sequence representing one letter
pub type Glyph = &'static [PulseUnit];

/// Transmitter states
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TxState {
    /// Nothing pending, output low
    Idle,
    /// Previous character drained, picking the next one
    BetweenCharacters,
    /// A pulse is on the wire (or armed to assert)
    SendingPulse,
    /// An off-gap separating two pulses is running
    SendingGap,
}

impl TxState {
    /// Returns true while a transmission is in flight
    pub const fn is_active(&self) -> bool {
        !matches!(self, TxState::Idle)
    }
}

/// Transmitter configuration parameters
#[derive(Copy, Clone, Debug)]
pub struct TxConfig {
    /// Maximum characters considered per transmission
    pub limit: usize,
    /// Base timing unit; every pulse and gap is a multiple of it
    pub unit: Duration,
}

impl Default for TxConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            unit: Duration::from_millis(250),
        }
    }
}

impl TxConfig {
    /// Create a new configuration with validation
    pub fn new(limit: usize, unit_ms: u64) -> Result<Self, &'static str> {
        if limit == 0 || limit > WORD_CAPACITY {
            return Err("limit must be between 1 and WORD_CAPACITY");
        }
        if unit_ms == 0 || unit_ms > 10_000 {
            return Err("base unit must be between 1 and 10000 ms");
        }

        Ok(Self {
            limit,
            unit: Duration::from_millis(unit_ms),
        })
    }

    /// Duration of the off-gap between two pulses (always one unit)
    pub fn gap_duration(&self) -> Duration {
        self.unit
    }

    /// On-wire duration of one pulse
    pub fn pulse_duration(&self, unit: PulseUnit) -> Duration {
        self.unit * unit.duration_units()
    }
}
