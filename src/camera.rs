use crate::constants::{CAMERA_EYE, CAMERA_FAR, CAMERA_FOV_Y_DEG, CAMERA_NEAR};
use glam::{Mat4, Vec3, Vec4};

/// Current canvas backing-store dimensions, in pixels.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

/// The camera is locked: fixed eye, fixed target, orbit/pan/zoom disabled.
pub fn view_matrix() -> Mat4 {
    Mat4::look_at_rh(CAMERA_EYE, Vec3::ZERO, Vec3::Y)
}

pub fn projection_matrix(aspect: f32) -> Mat4 {
    Mat4::perspective_rh(
        CAMERA_FOV_Y_DEG.to_radians(),
        aspect,
        CAMERA_NEAR,
        CAMERA_FAR,
    )
}

pub fn view_proj(viewport: Viewport) -> Mat4 {
    projection_matrix(viewport.aspect()) * view_matrix()
}

/// Compute a world-space ray from canvas pixel coordinates by unprojecting
/// through the inverse view-projection. Returns (origin, direction).
pub fn screen_to_world_ray(viewport: Viewport, sx: f32, sy: f32) -> (Vec3, Vec3) {
    let ndc_x = (2.0 * sx / viewport.width) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / viewport.height);
    let inv = view_proj(viewport).inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let ro = CAMERA_EYE;
    let rd = (p1 - ro).normalize();
    (ro, rd)
}
