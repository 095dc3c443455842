//! UI layer: top bar and the waveform plot.

pub mod panels;
pub mod plot;
