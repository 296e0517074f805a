//! Property tests for input normalization and machine robustness

use morse_core::encoder::Encoder;
use morse_core::hal::mock::{MockPort, MockTimer};
use morse_core::transmitter::Transmitter;
use morse_core::types::{TxConfig, TxState, DEFAULT_LIMIT};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prepared_word_is_bounded_and_uppercase(raw in ".*") {
        let word = Encoder::new(DEFAULT_LIMIT).prepare(&raw);

        prop_assert!(word.len() <= DEFAULT_LIMIT);
        prop_assert!(word.iter().all(|c| !c.is_ascii_lowercase()));
    }

    #[test]
    fn prepared_word_is_prefix_equal(raw in ".*") {
        let word = Encoder::new(DEFAULT_LIMIT).prepare(&raw);

        let expected: Vec<char> = raw
            .chars()
            .take(DEFAULT_LIMIT)
            .map(|c| c.to_ascii_uppercase())
            .collect();
        let got: Vec<char> = word.iter().copied().collect();
        prop_assert_eq!(got, expected);
    }

    /// No input, however malformed, can wedge the machine: it always
    /// drains back to a silent idle.
    #[test]
    fn any_input_drains_to_idle(raw in ".{0,20}") {
        let config = TxConfig::new(DEFAULT_LIMIT, 100).unwrap();
        let mut tx = Transmitter::new(config, MockPort::new(), MockTimer::new());

        tx.transmit(&raw).unwrap();
        let mut guard = 0;
        while tx.pending_delay().is_some() {
            tx.tick().unwrap();
            guard += 1;
            prop_assert!(guard < 1000);
        }

        prop_assert_eq!(tx.state(), TxState::Idle);
        prop_assert!(!tx.port().level());
    }
}
