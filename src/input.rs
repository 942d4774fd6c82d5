use glam::Vec3;

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Intersection of a ray with the plane z = `plane_z`, if in front of the origin.
#[inline]
pub fn ray_plane_z(ray_origin: Vec3, ray_dir: Vec3, plane_z: f32) -> Option<Vec3> {
    if ray_dir.z.abs() < 1e-6 {
        return None;
    }
    let t = (plane_z - ray_origin.z) / ray_dir.z;
    (t >= 0.0).then(|| ray_origin + ray_dir * t)
}

/// True when `point` falls inside the flat annulus around `center`
/// (distance measured in the XY plane).
#[inline]
pub fn annulus_contains(point: Vec3, center: Vec3, inner: f32, outer: f32) -> bool {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    let d = (dx * dx + dy * dy).sqrt();
    d >= inner && d <= outer
}

/// Ray test against a thin ring lying in the plane of `center`:
/// the ring used as a click zone around each particle cluster.
#[inline]
pub fn ray_ring(
    ray_origin: Vec3,
    ray_dir: Vec3,
    center: Vec3,
    radius: f32,
    band: f32,
) -> bool {
    match ray_plane_z(ray_origin, ray_dir, center.z) {
        Some(hit) => annulus_contains(hit, center, radius - band, radius + band),
        None => false,
    }
}

/// Nearest hit among a set of pick spheres; returns the winning index.
pub fn pick_nearest(
    ray_origin: Vec3,
    ray_dir: Vec3,
    spheres: &[(Vec3, f32)],
) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, (center, radius)) in spheres.iter().enumerate() {
        if let Some(t) = ray_sphere(ray_origin, ray_dir, *center, *radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}
