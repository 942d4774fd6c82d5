use crate::bridge::{HostEvent, Outbound};
use crate::constants::*;

/// The three selectable display shapes. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeVariant {
    Sine,
    Pyramid,
    Cube,
}

impl ShapeVariant {
    pub const ALL: [ShapeVariant; 3] =
        [ShapeVariant::Sine, ShapeVariant::Pyramid, ShapeVariant::Cube];

    /// Wire index reported to the native layer.
    pub fn index(self) -> u8 {
        match self {
            ShapeVariant::Sine => 0,
            ShapeVariant::Pyramid => 1,
            ShapeVariant::Cube => 2,
        }
    }
}

/// Shared sine displacement parameters. `frequency` is host-driven;
/// `amplitude` keeps its default (the host's amplitude stream is routed to
/// the key light instead, see [`ViewState::apply_host_event`]).
#[derive(Debug, Clone, Copy)]
pub struct OscillationParams {
    pub amplitude: f32,
    pub frequency: f32,
    pub phase_shift: f32,
}

impl Default for OscillationParams {
    fn default() -> Self {
        Self {
            amplitude: OSC_AMPLITUDE_DEFAULT,
            frequency: OSC_FREQUENCY_DEFAULT,
            phase_shift: 0.0,
        }
    }
}

/// Background color: a base hue darkened by an adjustable factor, both
/// steerable from the keyboard.
#[derive(Debug, Clone, Copy)]
pub struct Background {
    pub base: [f32; 3],
    pub darkness: f32,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            base: BACKGROUND_BASE,
            darkness: BACKGROUND_DARKNESS_DEFAULT,
        }
    }
}

impl Background {
    pub fn adjust_darkness(&mut self, delta: f32) {
        self.darkness =
            (self.darkness + delta).clamp(BACKGROUND_DARKNESS_MIN, BACKGROUND_DARKNESS_MAX);
    }

    /// Rotate the base hue, keeping saturation and lightness.
    pub fn shift_hue(&mut self, delta: f32) {
        let (h, s, l) = rgb_to_hsl(self.base);
        self.base = hsl_to_rgb((h + delta).rem_euclid(1.0), s, l);
    }

    pub fn color(&self) -> [f32; 3] {
        [
            self.base[0] * self.darkness,
            self.base[1] * self.darkness,
            self.base[2] * self.darkness,
        ]
    }
}

/// All mutable view state, owned by the UI thread and passed by reference
/// into the interaction handlers and the per-frame update.
#[derive(Debug)]
pub struct ViewState {
    pub active_shape: ShapeVariant,
    /// Green cluster toggle; mirrored to the native layer as `lfoOn`.
    pub lfo_on: bool,
    /// Blue cluster toggle; purely visual.
    pub vibrato_on: bool,
    /// Mirrors whether a MIDI note is currently held.
    pub note_on: bool,
    pub osc: OscillationParams,
    /// Accumulated Y rotation shared by the three candidate shapes.
    /// Grows without bound; only its value modulo 2π is visible.
    pub rotation: f32,
    pub light_intensity: f32,
    pub hovered: Option<ShapeVariant>,
    pub dragging_knob: bool,
    pub controls_enabled: bool,
    pub background: Background,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            active_shape: ShapeVariant::Sine,
            lfo_on: false,
            vibrato_on: false,
            note_on: false,
            osc: OscillationParams::default(),
            rotation: 0.0,
            light_intensity: KEY_LIGHT_INTENSITY,
            hovered: None,
            dragging_knob: false,
            controls_enabled: true,
            background: Background::default(),
        }
    }

    pub fn is_visible(&self, shape: ShapeVariant) -> bool {
        self.active_shape == shape
    }

    /// Activate `shape` and report the new index to the native layer.
    /// Selecting the shape that is already active is a no-op.
    pub fn select_shape(&mut self, shape: ShapeVariant) -> Option<Outbound> {
        if shape == self.active_shape {
            return None;
        }
        self.active_shape = shape;
        Some(Outbound::WaveShape(shape.index()))
    }

    pub fn toggle_lfo(&mut self) -> Outbound {
        self.lfo_on = !self.lfo_on;
        Outbound::LfoOn(self.lfo_on)
    }

    pub fn toggle_vibrato(&mut self) {
        self.vibrato_on = !self.vibrato_on;
    }

    /// Returns true when the highlighted proxy changed.
    pub fn set_hover(&mut self, hovered: Option<ShapeVariant>) -> bool {
        if self.hovered == hovered {
            return false;
        }
        self.hovered = hovered;
        true
    }

    pub fn begin_knob_drag(&mut self) {
        self.dragging_knob = true;
        self.controls_enabled = false;
    }

    pub fn end_knob_drag(&mut self) {
        self.dragging_knob = false;
        self.controls_enabled = true;
    }

    /// Apply one inbound host notification. Rescaled results are clamped to
    /// display-safe bounds; parse already rejected non-finite payloads.
    pub fn apply_host_event(&mut self, ev: HostEvent) {
        match ev {
            HostEvent::NoteOn => self.note_on = true,
            HostEvent::NoteOff => self.note_on = false,
            HostEvent::Frequency(raw) => {
                let f = (raw / HOST_VALUE_DIVISOR * FREQUENCY_SCALE) as f32;
                self.osc.frequency = f.clamp(0.0, FREQUENCY_MAX);
            }
            HostEvent::Amplitude(raw) => {
                // Host amplitude drives the key light, not the shape
                // displacement; the displacement amplitude stays at its
                // default. TODO: revisit once the native side exposes a
                // dedicated brightness parameter.
                let i = (raw / HOST_VALUE_DIVISOR * AMPLITUDE_LIGHT_SCALE) as f32;
                self.light_intensity = i.clamp(0.0, LIGHT_INTENSITY_MAX);
            }
        }
    }

    /// Advance the shared rotation by one tick; gated on the held note.
    pub fn advance_rotation(&mut self) {
        if self.note_on {
            self.rotation += self.osc.frequency;
        }
    }

    /// Shared vertical displacement for the current elapsed time (seconds).
    pub fn displacement(&self, t: f32) -> f32 {
        (DISPLACEMENT_TIME_SCALE * t + self.osc.phase_shift).sin()
            * self.osc.amplitude
            * DISPLACEMENT_GAIN
    }
}

pub fn rgb_to_hsl(rgb: [f32; 3]) -> (f32, f32, f32) {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    if (max - min).abs() < f32::EPSILON {
        return (0.0, 0.0, l);
    }
    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
    let h = if (max - r).abs() < f32::EPSILON {
        ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
    } else if (max - g).abs() < f32::EPSILON {
        ((b - r) / d + 2.0) / 6.0
    } else {
        ((r - g) / d + 4.0) / 6.0
    };
    (h, s, l)
}

pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    if s <= 0.0 {
        return [l, l, l];
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let hue = |mut t: f32| -> f32 {
        t = t.rem_euclid(1.0);
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    };
    [hue(h + 1.0 / 3.0), hue(h), hue(h - 1.0 / 3.0)]
}
