//! Hardware abstraction layer for the transmitter

// Re-export time types based on feature
#[cfg(feature = "embassy-time")]
pub use embassy_time::{Duration, Instant};

#[cfg(not(feature = "embassy-time"))]
pub use self::mock_time::Duration;

#[cfg(not(feature = "embassy-time"))]
mod mock_time {
    /// Millisecond duration stand-in used when embassy-time is off
    #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
    pub struct Duration(u64);

    impl Duration {
        pub const fn from_millis(ms: u64) -> Self {
            Self(ms)
        }

        pub const fn as_millis(&self) -> u64 {
            self.0
        }
    }

    impl core::ops::Mul<u32> for Duration {
        type Output = Duration;

        fn mul(self, rhs: u32) -> Duration {
            Duration(self.0 * rhs as u64)
        }
    }
}

use embedded_hal::digital::OutputPin;

/// Error types for HAL operations
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HalError {
    /// GPIO operation failed
    GpioError,
    /// Timer subsystem fault
    TimingError,
}

#[cfg(feature = "std")]
impl core::fmt::Display for HalError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HalError::GpioError => write!(f, "GPIO operation failed"),
            HalError::TimingError => write!(f, "timer subsystem fault"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HalError {}

/// Capability for driving the single digital output.
/// `set_level` is assumed immediate and non-blocking.
pub trait SignalPort {
    type Error: From<HalError>;

    /// Set the output level (true = on)
    fn set_level(&mut self, on: bool) -> Result<(), Self::Error>;
}

/// Capability for scheduling the single recurring timer callback.
///
/// At most one deadline is ever in flight; arming replaces any pending
/// deadline, so two timers can never race.
pub trait PulseTimer {
    type Error: From<HalError>;

    /// Arm the timer to fire once after `delay`
    fn arm(&mut self, delay: Duration) -> Result<(), Self::Error>;

    /// Drop any pending deadline. Idempotent.
    fn cancel(&mut self) -> Result<(), Self::Error>;

    /// Remaining delay of the pending deadline, if one is armed
    fn pending(&self) -> Option<Duration>;
}

/// Signal port over any embedded-hal output pin
pub struct OutputPinPort<P> {
    pin: P,
    inverted: bool,
}

impl<P> OutputPinPort<P>
where
    P: OutputPin,
{
    pub fn new(pin: P, inverted: bool) -> Self {
        Self { pin, inverted }
    }
}

impl<P> SignalPort for OutputPinPort<P>
where
    P: OutputPin,
{
    type Error = HalError;

    fn set_level(&mut self, on: bool) -> Result<(), Self::Error> {
        let high = on != self.inverted;
        if high {
            self.pin.set_high().map_err(|_| HalError::GpioError)
        } else {
            self.pin.set_low().map_err(|_| HalError::GpioError)
        }
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    //! Mock implementations for testing

    use super::*;
    use core::cell::RefCell;
    use heapless::Vec;

    const LOG_CAPACITY: usize = 256;

    /// Signal port recording every commanded level
    #[derive(Default)]
    pub struct MockPort {
        level: RefCell<bool>,
        log: RefCell<Vec<bool, LOG_CAPACITY>>,
    }

    impl MockPort {
        pub fn new() -> Self {
            Self::default()
        }

        /// Last commanded level
        pub fn level(&self) -> bool {
            *self.level.borrow()
        }

        /// Number of `set_level(true)` calls seen so far
        pub fn on_count(&self) -> usize {
            self.log.borrow().iter().filter(|&&on| on).count()
        }

        /// Total number of `set_level` calls seen so far
        pub fn call_count(&self) -> usize {
            self.log.borrow().len()
        }
    }

    impl SignalPort for MockPort {
        type Error = HalError;

        fn set_level(&mut self, on: bool) -> Result<(), Self::Error> {
            *self.level.borrow_mut() = on;
            self.log.borrow_mut().push(on).ok();
            Ok(())
        }
    }

    /// Timer recording every armed delay
    #[derive(Default)]
    pub struct MockTimer {
        pending: RefCell<Option<Duration>>,
        armed: RefCell<Vec<Duration, LOG_CAPACITY>>,
        failing: bool,
    }

    impl MockTimer {
        pub fn new() -> Self {
            Self::default()
        }

        /// Timer whose `arm` always reports a scheduling fault
        pub fn failing() -> Self {
            Self {
                failing: true,
                ..Self::default()
            }
        }

        /// Every delay armed so far, in order
        pub fn armed_log(&self) -> Vec<Duration, LOG_CAPACITY> {
            self.armed.borrow().clone()
        }
    }

    impl PulseTimer for MockTimer {
        type Error = HalError;

        fn arm(&mut self, delay: Duration) -> Result<(), Self::Error> {
            if self.failing {
                return Err(HalError::TimingError);
            }
            *self.pending.borrow_mut() = Some(delay);
            self.armed.borrow_mut().push(delay).ok();
            Ok(())
        }

        fn cancel(&mut self) -> Result<(), Self::Error> {
            *self.pending.borrow_mut() = None;
            Ok(())
        }

        fn pending(&self) -> Option<Duration> {
            *self.pending.borrow()
        }
    }
}
