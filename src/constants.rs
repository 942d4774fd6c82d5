use glam::Vec3;

// Layout and tuning constants for the panel. Shape dimensions mirror the
// native plugin's wave-shape presets.

// Sine slab profile
pub const SINE_WIDTH: f32 = 1.33;
pub const SINE_HEIGHT: f32 = 0.665;
pub const SINE_DEPTH: f32 = 0.266;
pub const SINE_RADIUS: f32 = 0.0665;
pub const SINE_SMOOTHNESS: u32 = 16;
pub const SINE_SEGMENTS: u32 = 64;

// Pyramid (rounded triangle) profile
pub const PYRAMID_WIDTH: f32 = 1.0;
pub const PYRAMID_HEIGHT: f32 = 0.866;
pub const PYRAMID_DEPTH: f32 = 0.2;
pub const PYRAMID_RADIUS: f32 = 0.05;
pub const PYRAMID_SMOOTHNESS: u32 = 4;

// Rounded cube
pub const CUBE_SIZE: f32 = 0.8;
pub const CUBE_RADIUS: f32 = 0.05;
pub const CUBE_SMOOTHNESS: u32 = 16;

// Selector proxies are third-scale copies of the display shapes,
// arranged in a row above the active shape.
pub const SELECTOR_SCALE: f32 = 1.0 / 3.0;
pub const SELECTOR_SPACING: f32 = 0.7;
pub const SELECTOR_POSITIONS: [Vec3; 3] = [
    Vec3::new(0.0, SINE_HEIGHT / 2.0 + 0.65, 0.0),
    Vec3::new(-SELECTOR_SPACING, SINE_HEIGHT / 2.0 + 0.5, 0.0),
    Vec3::new(SELECTOR_SPACING, SINE_HEIGHT / 2.0 + 0.5, 0.0),
];
pub const SELECTOR_PICK_RADIUS: f32 = 0.3;
pub const SELECTOR_OPACITY: f32 = 0.5;

// Particle clusters
pub const PARTICLE_COUNT: usize = 25;
pub const PARTICLE_RING_RADIUS: f32 = 1.0;
pub const PARTICLE_RING_JITTER: f32 = 0.1; // full spread around the ring radius
pub const PARTICLE_SIZE_MIN: f32 = 0.03;
pub const PARTICLE_SIZE_MAX: f32 = 0.08;
pub const PARTICLE_JITTER_AMPLITUDE: f32 = 0.1;
pub const PARTICLE_EXCITED_SCALE: f32 = 1.5;
pub const PARTICLE_GROUP_ORIGINS: [Vec3; 2] =
    [Vec3::new(10.0, 6.0, 5.5), Vec3::new(-10.0, -6.0, 5.5)];
pub const GROUP_SEEDS: [u64; 2] = [7, 11];

// Click rings around each cluster: a thin annulus in the cluster's plane.
pub const RING_THICKNESS: f32 = 0.1;
pub const RING_BAND: f32 = RING_THICKNESS + RING_THICKNESS * 0.1;

// Knob drag affordance
pub const KNOB_POSITION: Vec3 = Vec3::new(0.0, -1.6, 0.0);
pub const KNOB_RADIUS: f32 = 0.15;
pub const KNOB_PICK_RADIUS: f32 = 0.25;

// Decorative arrow pairs (filter affordance upper-left, reserved pair lower-right)
pub const ARROW_SCALE: f32 = 0.2;
pub const FILTER_ARROWS_ORIGIN: Vec3 = Vec3::new(-3.2, 1.9, -2.0);
pub const RESERVED_ARROWS_ORIGIN: Vec3 = Vec3::new(3.0, -1.5, -2.0);

// Oscillation defaults
pub const OSC_AMPLITUDE_DEFAULT: f32 = 0.36;
pub const OSC_FREQUENCY_DEFAULT: f32 = 0.5;
pub const DISPLACEMENT_GAIN: f32 = 0.35;
pub const DISPLACEMENT_TIME_SCALE: f32 = 10.0;

// Host payload rescaling
pub const HOST_VALUE_DIVISOR: f64 = 500.0;
pub const FREQUENCY_SCALE: f64 = 0.1;
pub const FREQUENCY_MAX: f32 = 1.0;
pub const AMPLITUDE_LIGHT_SCALE: f64 = 0.5;
pub const LIGHT_INTENSITY_MAX: f32 = 10.0;

// Hover probe debounce
pub const HOVER_DEBOUNCE_MS: i32 = 50;

// Camera: fixed eye in front of the scene, orbit locked.
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 0.0, -5.0);
pub const CAMERA_FOV_Y_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Lighting rig
pub const KEY_LIGHT_POSITION: Vec3 = Vec3::new(2.0, 2.0, -1.0);
pub const KEY_LIGHT_COLOR: [f32; 3] = [0.69, 0.29, 0.22]; // warm brick red
pub const KEY_LIGHT_INTENSITY: f32 = 3.0;
pub const AMBIENT_COLOR: [f32; 3] = [0.93, 0.87, 0.80]; // warm off-white
pub const AMBIENT_INTENSITY: f32 = 0.1;

// Background: amber base darkened well below full brightness.
pub const BACKGROUND_BASE: [f32; 3] = [1.0, 0.533, 0.0];
pub const BACKGROUND_DARKNESS_DEFAULT: f32 = 0.25;
pub const BACKGROUND_DARKNESS_MIN: f32 = 0.001;
pub const BACKGROUND_DARKNESS_MAX: f32 = 0.5;
pub const BACKGROUND_DARKNESS_STEP: f32 = 0.03;
pub const BACKGROUND_HUE_STEP: f32 = 0.01;

// Palette
pub const SHAPE_COLOR: [f32; 3] = [0.77, 0.38, 0.28]; // fired copper
pub const PROXY_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const PARTICLE_WHITE: [f32; 3] = [1.0, 1.0, 1.0];
pub const SUNLIT_SAND: [f32; 3] = [0.91, 0.85, 0.63];
pub const PALE_SKY_BLUE: [f32; 3] = [0.69, 0.78, 0.91];
pub const SAGE_GREEN: [f32; 3] = [0.61, 0.69, 0.53];
pub const PLANE_COLOR: [f32; 3] = [0.36, 0.30, 0.24]; // dry mud
pub const KNOB_COLOR: [f32; 3] = [0.85, 0.80, 0.72];
pub const KNOB_DRAG_COLOR: [f32; 3] = [1.0, 0.97, 0.90];
