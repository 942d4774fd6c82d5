//! Boundary types for the native host bridge.
//!
//! Inbound notifications arrive as (name, optional numeric payload) pairs
//! and are parsed into one tagged union; outbound calls are fire-and-forget
//! (tag, payload) pairs handed to whatever native function the embedding
//! page exposes.

/// Inbound host notification. Payloads are untrusted: non-numeric or
/// non-finite values fail the parse instead of propagating into the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    NoteOn,
    NoteOff,
    /// Raw `updateFrequency` value, rescaled when applied to the view state.
    Frequency(f64),
    /// Raw `updateAmplitude` value; drives the key light intensity.
    Amplitude(f64),
}

impl HostEvent {
    pub const NAMES: [&'static str; 4] =
        ["noteOn", "noteOff", "updateFrequency", "updateAmplitude"];

    pub fn parse(name: &str, payload: Option<f64>) -> Option<HostEvent> {
        let numeric = payload.filter(|v| v.is_finite());
        match name {
            "noteOn" => Some(HostEvent::NoteOn),
            "noteOff" => Some(HostEvent::NoteOff),
            "updateFrequency" => numeric.map(HostEvent::Frequency),
            "updateAmplitude" => numeric.map(HostEvent::Amplitude),
            _ => None,
        }
    }
}

/// Outbound call into the native layer. Delivery is at-most-once per UI
/// event; there is no acknowledgment channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outbound {
    /// Selected wave shape index: 0 = sine, 1 = pyramid, 2 = cube.
    WaveShape(u8),
    LfoOn(bool),
}

impl Outbound {
    pub fn tag(&self) -> &'static str {
        match self {
            Outbound::WaveShape(_) => "waveShape",
            Outbound::LfoOn(_) => "lfoOn",
        }
    }
}
