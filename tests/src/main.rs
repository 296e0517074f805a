//! Console demo: transmit a word through a simulated signal port,
//! printing every level change with its timestamp.

use morse_core::transmitter::Transmitter;
use morse_core::types::{TxConfig, DEFAULT_LIMIT};

use morse_tests::sim::{drain, HostTimer, RecordingPort};

#[tokio::main]
async fn main() {
    let word = std::env::args().nth(1).unwrap_or_else(|| "sos".into());

    let config = TxConfig::new(DEFAULT_LIMIT, 100).expect("default demo config is valid");
    let (port, _log) = RecordingPort::new(true);
    let mut tx = Transmitter::new(config, port, HostTimer::new());

    println!("transmitting {word:?} (base unit 100 ms)");
    tx.transmit(&word).expect("simulated port cannot fail");
    drain(&mut tx).await.expect("simulated port cannot fail");
    println!("done");
}
