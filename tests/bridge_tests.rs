// Host-side tests for the host-bridge boundary types.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod bridge {
    include!("../src/bridge.rs");
}

use bridge::*;

#[test]
fn note_events_parse_without_payload() {
    assert_eq!(HostEvent::parse("noteOn", None), Some(HostEvent::NoteOn));
    assert_eq!(HostEvent::parse("noteOff", None), Some(HostEvent::NoteOff));
    // a stray payload on a note event is ignored
    assert_eq!(HostEvent::parse("noteOn", Some(3.0)), Some(HostEvent::NoteOn));
}

#[test]
fn numeric_events_require_a_finite_payload() {
    assert_eq!(
        HostEvent::parse("updateFrequency", Some(250.0)),
        Some(HostEvent::Frequency(250.0))
    );
    assert_eq!(
        HostEvent::parse("updateAmplitude", Some(42.5)),
        Some(HostEvent::Amplitude(42.5))
    );
    assert_eq!(HostEvent::parse("updateFrequency", None), None);
    assert_eq!(HostEvent::parse("updateFrequency", Some(f64::NAN)), None);
    assert_eq!(HostEvent::parse("updateAmplitude", Some(f64::INFINITY)), None);
}

#[test]
fn unknown_names_are_dropped() {
    assert_eq!(HostEvent::parse("setWaveTable", Some(1.0)), None);
    assert_eq!(HostEvent::parse("", None), None);
}

#[test]
fn every_wire_name_round_trips_through_parse() {
    for name in HostEvent::NAMES {
        assert!(
            HostEvent::parse(name, Some(1.0)).is_some(),
            "{name} failed to parse"
        );
    }
}

#[test]
fn outbound_wire_tags() {
    assert_eq!(Outbound::WaveShape(2).tag(), "waveShape");
    assert_eq!(Outbound::LfoOn(true).tag(), "lfoOn");
    assert_eq!(Outbound::LfoOn(false).tag(), "lfoOn");
}
