//! Async command-driven transmit loop (embassy)
//!
//! Wires the run-to-completion state machine to an embassy executor:
//! one task owns the transmitter, receives commands over a channel,
//! and sleeps on the armed deadline between ticks. Commands win the
//! race against a sleeping pulse, so abort takes effect immediately.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Channel;
use embassy_time::{with_timeout, Duration, Instant};
use heapless::String;

use crate::hal::{HalError, PulseTimer, SignalPort};
use crate::transmitter::Transmitter;

/// Transport bound for command text; the configured word limit still
/// governs what gets transmitted.
pub const REQUEST_CAPACITY: usize = 32;

/// Inbound operations, both safe at any time
#[derive(Debug, Clone)]
pub enum TxCommand {
    /// Start transmitting a word, replacing any active transmission
    Transmit(String<REQUEST_CAPACITY>),
    /// Hard-stop and silence the output
    Abort,
}

/// Timer capability backed by embassy-time deadlines. Arming only
/// records the deadline; the driver task does the sleeping.
#[derive(Default)]
pub struct DeadlineTimer {
    deadline: Option<Instant>,
}

impl DeadlineTimer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PulseTimer for DeadlineTimer {
    type Error = HalError;

    fn arm(&mut self, delay: Duration) -> Result<(), Self::Error> {
        self.deadline = Some(Instant::now() + delay);
        Ok(())
    }

    fn cancel(&mut self) -> Result<(), Self::Error> {
        self.deadline = None;
        Ok(())
    }

    fn pending(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }
}

/// Drive a transmitter from a command channel.
///
/// While a deadline is armed the channel is raced against it with
/// `with_timeout`; a timeout means the deadline elapsed and `tick`
/// runs. Port or timer faults are logged and the machine is forced
/// back to a silent idle rather than taking the task down.
pub async fn transmit_task<P, T, M, const N: usize>(
    mut tx: Transmitter<P, T>,
    commands: &Channel<M, TxCommand, N>,
) -> !
where
    P: SignalPort,
    T: PulseTimer<Error = P::Error>,
    M: RawMutex,
{
    loop {
        let command = match tx.pending_delay() {
            Some(delay) => match with_timeout(delay, commands.receive()).await {
                Ok(command) => Some(command),
                Err(_) => {
                    // Deadline elapsed
                    if tx.tick().is_err() {
                        recover(&mut tx);
                    }
                    None
                }
            },
            None => Some(commands.receive().await),
        };

        if let Some(command) = command {
            let result = match &command {
                TxCommand::Transmit(text) => tx.transmit(text),
                TxCommand::Abort => tx.abort(),
            };
            if result.is_err() {
                recover(&mut tx);
            }
        }
    }
}

fn recover<P, T>(tx: &mut Transmitter<P, T>)
where
    P: SignalPort,
    T: PulseTimer<Error = P::Error>,
{
    #[cfg(feature = "defmt")]
    defmt::warn!("transmit fault, forcing idle");
    let _ = tx.abort();
}
