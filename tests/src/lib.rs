//! Host-based tests for the Morse transmitter core


#[cfg(test)]
mod glyph_tests;

#[cfg(test)]
mod encoder_props;
