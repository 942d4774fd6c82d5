// Host-side tests for the view state: shape selection, toggles, note gate,
// host event application, and background controls.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod bridge {
    include!("../src/bridge.rs");
}
mod constants {
    include!("../src/constants.rs");
}
mod state {
    include!("../src/state.rs");
}

use bridge::{HostEvent, Outbound};
use state::*;

fn visible_count(st: &ViewState) -> usize {
    ShapeVariant::ALL
        .iter()
        .filter(|v| st.is_visible(**v))
        .count()
}

#[test]
fn exactly_one_shape_visible_after_any_selection() {
    let mut st = ViewState::new();
    assert_eq!(visible_count(&st), 1);
    for v in ShapeVariant::ALL {
        st.select_shape(v);
        assert_eq!(visible_count(&st), 1, "after selecting {v:?}");
        assert!(st.is_visible(v));
    }
}

#[test]
fn selecting_the_active_shape_sends_nothing() {
    let mut st = ViewState::new();
    assert_eq!(st.active_shape, ShapeVariant::Sine);
    assert_eq!(st.select_shape(ShapeVariant::Sine), None);
    st.select_shape(ShapeVariant::Cube);
    assert_eq!(st.select_shape(ShapeVariant::Cube), None);
}

#[test]
fn selecting_pyramid_from_sine_reports_index_one() {
    let mut st = ViewState::new();
    let msg = st.select_shape(ShapeVariant::Pyramid);
    assert_eq!(msg, Some(Outbound::WaveShape(1)));
}

#[test]
fn shape_indices_cover_the_wire_range() {
    let indices: Vec<u8> = ShapeVariant::ALL.iter().map(|v| v.index()).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn lfo_toggle_mirrors_state_outbound() {
    let mut st = ViewState::new();
    assert_eq!(st.toggle_lfo(), Outbound::LfoOn(true));
    assert!(st.lfo_on);
    assert_eq!(st.toggle_lfo(), Outbound::LfoOn(false));
    assert!(!st.lfo_on);
}

#[test]
fn rotation_is_gated_on_the_held_note() {
    let mut st = ViewState::new();
    st.osc.frequency = 0.25;
    for n in [1usize, 7, 60] {
        let before = st.rotation;
        for _ in 0..n {
            st.advance_rotation();
        }
        assert_eq!(st.rotation, before, "gate off, {n} ticks");
    }
}

#[test]
fn rotation_accumulates_frequency_per_tick() {
    for (n, f) in [(1usize, 0.05f32), (10, 0.1), (240, 0.017)] {
        let mut st = ViewState::new();
        st.apply_host_event(HostEvent::NoteOn);
        st.osc.frequency = f;
        let before = st.rotation;
        for _ in 0..n {
            st.advance_rotation();
        }
        let expected = before + n as f32 * f;
        assert!(
            (st.rotation - expected).abs() < 1e-3,
            "n={n} f={f}: {} vs {expected}",
            st.rotation
        );
    }
}

#[test]
fn note_gate_follows_host_events() {
    let mut st = ViewState::new();
    st.apply_host_event(HostEvent::NoteOn);
    assert!(st.note_on);
    st.apply_host_event(HostEvent::NoteOff);
    assert!(!st.note_on);
}

#[test]
fn frequency_event_rescales_exactly() {
    let mut st = ViewState::new();
    st.apply_host_event(HostEvent::Frequency(250.0));
    assert!((st.osc.frequency - 0.05).abs() < 1e-7);
}

#[test]
fn frequency_event_clamps_out_of_range_values() {
    let mut st = ViewState::new();
    st.apply_host_event(HostEvent::Frequency(1.0e9));
    assert_eq!(st.osc.frequency, constants::FREQUENCY_MAX);
    st.apply_host_event(HostEvent::Frequency(-500.0));
    assert_eq!(st.osc.frequency, 0.0);
}

#[test]
fn amplitude_event_drives_the_light_not_the_oscillation() {
    let mut st = ViewState::new();
    let amp_before = st.osc.amplitude;
    st.apply_host_event(HostEvent::Amplitude(250.0));
    assert!((st.light_intensity - 0.25).abs() < 1e-7);
    assert_eq!(st.osc.amplitude, amp_before);
    st.apply_host_event(HostEvent::Amplitude(1.0e12));
    assert_eq!(st.light_intensity, constants::LIGHT_INTENSITY_MAX);
}

#[test]
fn displacement_is_bounded_by_amplitude() {
    let st = ViewState::new();
    let bound = st.osc.amplitude * constants::DISPLACEMENT_GAIN + 1e-6;
    let mut t = 0.0f32;
    while t < 10.0 {
        assert!(st.displacement(t).abs() <= bound);
        t += 0.137;
    }
}

#[test]
fn hover_reports_changes_only() {
    let mut st = ViewState::new();
    assert!(st.set_hover(Some(ShapeVariant::Cube)));
    assert!(!st.set_hover(Some(ShapeVariant::Cube)));
    assert!(st.set_hover(None));
    assert!(!st.set_hover(None));
}

#[test]
fn knob_drag_disables_controls_until_release() {
    let mut st = ViewState::new();
    assert!(st.controls_enabled);
    st.begin_knob_drag();
    assert!(st.dragging_knob);
    assert!(!st.controls_enabled);
    st.end_knob_drag();
    assert!(!st.dragging_knob);
    assert!(st.controls_enabled);
}

#[test]
fn background_darkness_clamps_to_its_range() {
    let mut bg = Background::default();
    for _ in 0..100 {
        bg.adjust_darkness(constants::BACKGROUND_DARKNESS_STEP);
    }
    assert_eq!(bg.darkness, constants::BACKGROUND_DARKNESS_MAX);
    for _ in 0..100 {
        bg.adjust_darkness(-constants::BACKGROUND_DARKNESS_STEP);
    }
    assert_eq!(bg.darkness, constants::BACKGROUND_DARKNESS_MIN);
}

#[test]
fn background_color_scales_with_darkness() {
    let bg = Background::default();
    let c = bg.color();
    for i in 0..3 {
        assert!((c[i] - bg.base[i] * bg.darkness).abs() < 1e-6);
    }
}

#[test]
fn hsl_round_trips_rgb() {
    for rgb in [
        [1.0, 0.533, 0.0],
        [0.2, 0.4, 0.8],
        [0.5, 0.5, 0.5],
        [0.0, 1.0, 0.0],
    ] {
        let (h, s, l) = rgb_to_hsl(rgb);
        let back = hsl_to_rgb(h, s, l);
        for i in 0..3 {
            assert!(
                (back[i] - rgb[i]).abs() < 1e-4,
                "{rgb:?} -> {back:?} at {i}"
            );
        }
    }
}

#[test]
fn hue_shifts_accumulate_and_wrap() {
    let mut bg = Background::default();
    let start = bg.base;
    // a full lap around the hue circle lands back on the start color
    for _ in 0..100 {
        bg.shift_hue(0.01);
    }
    for i in 0..3 {
        assert!((bg.base[i] - start[i]).abs() < 0.02, "channel {i}");
    }
}
