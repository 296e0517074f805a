//! Timer-driven transmission state machine
//!
//! The machine owns the signal port and the timer capability. Every
//! entry point (`transmit`, `tick`, `abort`) runs to completion on the
//! caller's single logical timeline; suspension between pulse and gap
//! boundaries lives entirely inside the timer subsystem.

use crate::encoder::{Encoder, NormalizedWord};
use crate::hal::{Duration, PulseTimer, SignalPort};
use crate::table::MorseTable;
use crate::types::{Glyph, TxConfig, TxState};

/// Non-blocking Morse transmitter
pub struct Transmitter<P, T>
where
    P: SignalPort,
    T: PulseTimer<Error = P::Error>,
{
    state: TxState,
    config: TxConfig,
    encoder: Encoder,
    word: NormalizedWord,
    series: Glyph,
    gap_pending: bool,
    port: P,
    timer: T,
}

impl<P, T> Transmitter<P, T>
where
    P: SignalPort,
    T: PulseTimer<Error = P::Error>,
{
    /// Create an idle transmitter owning the given capabilities
    pub fn new(config: TxConfig, port: P, timer: T) -> Self {
        Self {
            state: TxState::Idle,
            encoder: Encoder::new(config.limit),
            config,
            word: NormalizedWord::new(),
            series: &[],
            gap_pending: false,
            port,
            timer,
        }
    }

    /// Current machine state
    pub fn state(&self) -> TxState {
        self.state
    }

    /// Current configuration
    pub fn config(&self) -> &TxConfig {
        &self.config
    }

    /// The owned signal port
    pub fn port(&self) -> &P {
        &self.port
    }

    /// The owned timer
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Remaining delay until the next `tick` is due, if any
    pub fn pending_delay(&self) -> Option<Duration> {
        self.timer.pending()
    }

    /// Accept a word for transmission. Always safe to call: an active
    /// transmission is hard-stopped and replaced (implicit
    /// cancel-and-restart). Empty input is a valid no-op.
    pub fn transmit(&mut self, raw: &str) -> Result<(), P::Error> {
        self.silence()?;
        self.word = self.encoder.prepare(raw);
        #[cfg(feature = "defmt")]
        defmt::info!("word accepted: {} chars", self.word.len());
        if self.word.is_empty() {
            self.state = TxState::Idle;
            return Ok(());
        }
        self.load_next_character()
    }

    /// Hard-stop any active transmission and return to idle.
    /// Idempotent; a second call in a row does nothing.
    pub fn abort(&mut self) -> Result<(), P::Error> {
        self.silence()?;
        self.word.clear();
        self.state = TxState::Idle;
        #[cfg(feature = "defmt")]
        defmt::info!("transmission aborted");
        Ok(())
    }

    /// Timer-fire handler: emit the next pulse or gap, move to the
    /// next character, or finish.
    pub fn tick(&mut self) -> Result<(), P::Error> {
        // Safety reset: output low and no deadline, whatever state the
        // machine was woken in.
        self.port.set_level(false)?;
        self.timer.cancel()?;

        if let Some((&unit, rest)) = self.series.split_first() {
            if self.gap_pending {
                // The gap between two pulses is always exactly one
                // base unit, independent of neighboring pulse lengths.
                self.gap_pending = false;
                self.timer.arm(self.config.gap_duration())?;
                self.state = TxState::SendingGap;
                #[cfg(feature = "defmt")]
                defmt::trace!("gap");
            } else {
                self.series = rest;
                self.port.set_level(true)?;
                self.gap_pending = true;
                self.timer.arm(self.config.pulse_duration(unit))?;
                self.state = TxState::SendingPulse;
                #[cfg(feature = "defmt")]
                defmt::trace!("pulse: {} units", unit.duration_units());
            }
            return Ok(());
        }

        if !self.word.is_empty() {
            self.state = TxState::BetweenCharacters;
            return self.load_next_character();
        }

        // Natural completion; output is already low
        self.state = TxState::Idle;
        #[cfg(feature = "defmt")]
        defmt::info!("transmission complete");
        Ok(())
    }

    /// Pop characters until one maps to a glyph, skipping unsupported
    /// ones as if they were never typed. May drain the whole word.
    fn load_next_character(&mut self) -> Result<(), P::Error> {
        while let Some(ch) = self.word.pop_front() {
            match MorseTable::lookup(ch) {
                Some(glyph) => {
                    self.series = glyph;
                    self.state = TxState::SendingPulse;
                    #[cfg(feature = "defmt")]
                    defmt::debug!("sending '{}': {} pulses", ch, glyph.len());
                    // Fixed one-unit priming delay before the first
                    // pulse asserts, regardless of the pulse's own
                    // length. Keeps consecutive words visibly apart.
                    return self.timer.arm(self.config.gap_duration());
                }
                None => {
                    #[cfg(feature = "defmt")]
                    defmt::debug!("skipping unsupported '{}'", ch);
                    continue;
                }
            }
        }
        self.state = TxState::Idle;
        Ok(())
    }

    /// Cancel the pending deadline and force the output low if a
    /// transmission is in flight. An idle machine's output is already
    /// low, so the port is left untouched.
    fn silence(&mut self) -> Result<(), P::Error> {
        self.timer.cancel()?;
        if self.state.is_active() {
            self.port.set_level(false)?;
        }
        self.series = &[];
        self.gap_pending = false;
        Ok(())
    }
}
