//! Test utilities for transmitter waveform analysis

pub mod waveform {
    //! Collapse timestamped level changes into phases and render them

    use crate::hal::Duration;

    /// One contiguous output phase
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Phase {
        pub level: bool,
        pub start_ms: u64,
        pub duration_ms: u64,
    }

    /// Records commanded output levels against a millisecond clock
    #[derive(Debug, Default)]
    pub struct WaveformRecorder {
        transitions: Vec<(u64, bool)>,
    }

    impl WaveformRecorder {
        pub fn new() -> Self {
            Self::default()
        }

        /// Record a commanded level at `at_ms`. Redundant writes (the
        /// machine forces the port low on every tick) collapse away.
        pub fn record(&mut self, at_ms: u64, level: bool) {
            if self.transitions.last().map(|&(_, l)| l) == Some(level) {
                return;
            }
            self.transitions.push((at_ms, level));
        }

        /// Completed phases, in order. The final transition has no
        /// successor and closes no phase.
        pub fn phases(&self) -> Vec<Phase> {
            self.transitions
                .windows(2)
                .map(|pair| Phase {
                    level: pair[0].1,
                    start_ms: pair[0].0,
                    duration_ms: pair[1].0 - pair[0].0,
                })
                .collect()
        }

        /// Durations of the on-phases, in order
        pub fn on_durations_ms(&self) -> Vec<u64> {
            self.phases()
                .iter()
                .filter(|phase| phase.level)
                .map(|phase| phase.duration_ms)
                .collect()
        }

        /// Durations of the off-phases between pulses, in order.
        /// Leading silence before the first pulse is not a gap.
        pub fn off_durations_ms(&self) -> Vec<u64> {
            let phases = self.phases();
            match phases.iter().position(|phase| phase.level) {
                Some(first_on) => phases[first_on..]
                    .iter()
                    .filter(|phase| !phase.level)
                    .map(|phase| phase.duration_ms)
                    .collect(),
                None => Vec::new(),
            }
        }

        /// Timestamp of the first on-phase, if the output ever asserted
        pub fn first_on_ms(&self) -> Option<u64> {
            self.transitions
                .iter()
                .find(|&&(_, level)| level)
                .map(|&(at, _)| at)
        }

        /// Render the on-phases as dots and dashes. Phases matching
        /// neither one nor three units render as '?'.
        pub fn to_morse_string(&self, unit: Duration) -> String {
            let unit_ms = unit.as_millis();
            self.on_durations_ms()
                .iter()
                .map(|&ms| {
                    if ms == unit_ms {
                        '.'
                    } else if ms == unit_ms * 3 {
                        '-'
                    } else {
                        '?'
                    }
                })
                .collect()
        }
    }

}
