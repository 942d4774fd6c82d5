use glam::{Vec2, Vec3};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Triangle mesh ready for upload: positions, per-vertex normals, indices.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Translate every vertex so the bounding box is centered on the origin.
    pub fn center(&mut self) {
        if self.positions.is_empty() {
            return;
        }
        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);
        for p in &self.positions {
            let v = Vec3::from(*p);
            min = min.min(v);
            max = max.max(v);
        }
        let mid = (min + max) * 0.5;
        for p in &mut self.positions {
            p[0] -= mid.x;
            p[1] -= mid.y;
            p[2] -= mid.z;
        }
    }
}

// How finely quadratic curve spans are flattened into line segments.
const CURVE_STEPS: u32 = 8;
// Below this outline area the extrusion caps are degenerate and skipped:
// the mirrored sine band encloses only a hairline sliver, and capping it
// would fan a visible sheet across the whole wave.
const CAP_AREA_EPS: f32 = 1e-2;

/// 2D profile outline builder: move/line/quadratic-curve commands flattened
/// to a closed polygon, with zero-length segments dropped.
#[derive(Debug, Default)]
pub struct ProfilePath {
    points: Vec<Vec2>,
}

impl ProfilePath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: Vec2) {
        self.push(p);
    }

    pub fn line_to(&mut self, p: Vec2) {
        self.push(p);
    }

    /// Quadratic curve from the current point through `ctrl` to `end`.
    pub fn quad_to(&mut self, ctrl: Vec2, end: Vec2) {
        let start = match self.points.last() {
            Some(p) => *p,
            None => {
                self.push(end);
                return;
            }
        };
        for k in 1..=CURVE_STEPS {
            let t = k as f32 / CURVE_STEPS as f32;
            let u = 1.0 - t;
            let p = start * (u * u) + ctrl * (2.0 * u * t) + end * (t * t);
            self.push(p);
        }
    }

    fn push(&mut self, p: Vec2) {
        if let Some(last) = self.points.last() {
            if (p - *last).length_squared() < 1e-12 {
                return;
            }
        }
        self.points.push(p);
    }

    /// Finish the outline; a trailing point coincident with the first is dropped.
    pub fn into_outline(mut self) -> Vec<Vec2> {
        if self.points.len() > 2 {
            let first = self.points[0];
            if let Some(last) = self.points.last() {
                if (*last - first).length_squared() < 1e-12 {
                    self.points.pop();
                }
            }
        }
        self.points
    }
}

fn signed_area(outline: &[Vec2]) -> f32 {
    let n = outline.len();
    let mut acc = 0.0;
    for i in 0..n {
        let p = outline[i];
        let q = outline[(i + 1) % n];
        acc += p.x * q.y - q.x * p.y;
    }
    acc * 0.5
}

// Spiky joins at very sharp turns are capped at this miter length.
const MITER_LIMIT: f32 = 2.0;

/// Per-vertex join normals of a counter-clockwise outline: the unit outward
/// direction (for shading) and the miter vector (for offsetting, scaled by
/// 1/cos of the half-angle so straight walls stay at exact offset distance).
fn outward_normals(outline: &[Vec2]) -> Vec<(Vec2, Vec2)> {
    let n = outline.len();
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let prev = outline[(i + n - 1) % n];
        let p = outline[i];
        let next = outline[(i + 1) % n];
        let d1 = (p - prev).normalize_or_zero();
        let d2 = (next - p).normalize_or_zero();
        let n1 = Vec2::new(d1.y, -d1.x);
        let n2 = Vec2::new(d2.y, -d2.x);
        let m = n1 + n2;
        let unit = if m.length_squared() > 1e-12 {
            m.normalize()
        } else if n1.length_squared() > 1e-12 {
            n1
        } else {
            n2
        };
        let cos_half = unit.dot(if n1.length_squared() > 1e-12 { n1 } else { unit });
        let scale = if cos_half > 1.0 / MITER_LIMIT {
            1.0 / cos_half
        } else {
            MITER_LIMIT
        };
        out.push((unit, unit * scale));
    }
    out
}

// One band of the side surface: ring at height `z`, outline pushed out by
// `offset`, normals blending the 2D outward direction with `nz`.
struct Ring {
    z: f32,
    offset: f32,
    n_side: f32,
    n_z: f32,
}

/// Extrude a closed 2D outline along +Z with quarter-round beveled rims.
///
/// The side wall sits at the outline pushed out by `bevel_radius` over
/// `z ∈ [0, depth]`; both rims curve back to the unexpanded outline, where
/// flat caps close the solid (skipped for effectively zero-area outlines,
/// whose caps would be invisible slivers). The result is centered.
pub fn extrude_profile(
    outline: &[Vec2],
    depth: f32,
    bevel_radius: f32,
    bevel_segments: u32,
) -> MeshData {
    let mut outline: Vec<Vec2> = outline.to_vec();
    let area = signed_area(&outline);
    if area < -CAP_AREA_EPS {
        outline.reverse();
    }
    let area = area.abs();
    let n = outline.len();
    let mut mesh = MeshData::default();
    if n < 3 {
        return mesh;
    }
    let normals2d = outward_normals(&outline);

    let segs = bevel_segments.max(1);
    let mut rings: Vec<Ring> = Vec::with_capacity(2 * segs as usize + 2);
    // Front bevel: cap rim out to the expanded wall. The band between the
    // last front ring (z = 0) and the first back ring (z = depth) is the
    // straight side wall.
    for k in 0..=segs {
        let phi = k as f32 / segs as f32 * FRAC_PI_2;
        rings.push(Ring {
            z: -bevel_radius * phi.cos(),
            offset: bevel_radius * phi.sin(),
            n_side: phi.sin(),
            n_z: -phi.cos(),
        });
    }
    // Back bevel: wall back in to the back cap rim.
    for k in 0..=segs {
        let phi = k as f32 / segs as f32 * FRAC_PI_2;
        rings.push(Ring {
            z: depth + bevel_radius * phi.sin(),
            offset: bevel_radius * phi.cos(),
            n_side: phi.cos(),
            n_z: phi.sin(),
        });
    }

    for ring in &rings {
        for (p, (unit, miter)) in outline.iter().zip(&normals2d) {
            let pos = *p + *miter * ring.offset;
            mesh.positions.push([pos.x, pos.y, ring.z]);
            let nrm = Vec3::new(unit.x * ring.n_side, unit.y * ring.n_side, ring.n_z)
                .normalize_or_zero();
            mesh.normals.push([nrm.x, nrm.y, nrm.z]);
        }
    }
    let ring_count = rings.len();
    for r in 0..ring_count - 1 {
        let a = (r * n) as u32;
        let b = ((r + 1) * n) as u32;
        for i in 0..n as u32 {
            let j = (i + 1) % n as u32;
            mesh.indices.extend_from_slice(&[a + i, b + i, b + j]);
            mesh.indices.extend_from_slice(&[a + i, b + j, a + j]);
        }
    }

    if area > CAP_AREA_EPS {
        add_cap(&mut mesh, &outline, -bevel_radius, -1.0);
        add_cap(&mut mesh, &outline, depth + bevel_radius, 1.0);
    }

    mesh.center();
    mesh
}

// Fan-triangulated flat cap about the outline centroid (outlines here are
// convex once rounded).
fn add_cap(mesh: &mut MeshData, outline: &[Vec2], z: f32, nz: f32) {
    let n = outline.len();
    let centroid = outline.iter().copied().sum::<Vec2>() / n as f32;
    let base = mesh.positions.len() as u32;
    mesh.positions.push([centroid.x, centroid.y, z]);
    mesh.normals.push([0.0, 0.0, nz]);
    for p in outline {
        mesh.positions.push([p.x, p.y, z]);
        mesh.normals.push([0.0, 0.0, nz]);
    }
    for i in 0..n as u32 {
        let j = (i + 1) % n as u32;
        if nz < 0.0 {
            mesh.indices.extend_from_slice(&[base, base + 1 + i, base + 1 + j]);
        } else {
            mesh.indices.extend_from_slice(&[base, base + 1 + j, base + 1 + i]);
        }
    }
}

/// One full sine period as a slab: the wave path is traced with quadratic
/// blending between samples, mirrored back on itself to close the outline,
/// and inflated by the bevel into a rounded ribbon.
pub fn sine_wave_solid(
    width: f32,
    height: f32,
    depth: f32,
    radius: f32,
    smoothness: u32,
    segments: u32,
) -> MeshData {
    let eps = 1e-3;
    let seg_w = width / segments as f32;
    let sample = |i: u32| -> Vec2 {
        let x = -width / 2.0 + i as f32 * seg_w;
        let y = (i as f32 / segments as f32 * TAU).sin() * height / 2.0;
        Vec2::new(x, y)
    };

    let mut path = ProfilePath::new();
    path.move_to(sample(0));
    for i in 1..=segments {
        let p = sample(i);
        path.quad_to(Vec2::new(p.x - seg_w / 2.0, p.y), p);
    }
    for i in (0..=segments).rev() {
        let p = sample(i);
        path.line_to(Vec2::new(p.x, p.y + eps));
    }

    extrude_profile(&path.into_outline(), depth, radius, smoothness)
}

/// Triangle with three quadratic-rounded corners, extruded with bevel.
pub fn rounded_triangle_solid(
    width: f32,
    height: f32,
    depth: f32,
    radius: f32,
    smoothness: u32,
) -> MeshData {
    let eps = 1e-5;
    let r0 = radius - eps;
    let hw = width / 2.0;
    let hh = height / 2.0;

    let mut path = ProfilePath::new();
    path.move_to(Vec2::new(-hw + r0, -hh));
    path.line_to(Vec2::new(hw - r0, -hh));
    path.quad_to(Vec2::new(hw, -hh), Vec2::new(hw, -hh + r0));
    path.line_to(Vec2::new(r0, hh - r0));
    path.quad_to(Vec2::new(0.0, hh), Vec2::new(-r0, hh - r0));
    path.line_to(Vec2::new(-hw, -hh + r0));
    path.quad_to(Vec2::new(-hw, -hh), Vec2::new(-hw + r0, -hh));

    extrude_profile(&path.into_outline(), depth, radius, smoothness)
}

/// Rectangle with four rounded corners, extruded so bevel plus body depth
/// read as a rounded cube.
pub fn rounded_box_solid(
    width: f32,
    height: f32,
    depth: f32,
    radius: f32,
    smoothness: u32,
) -> MeshData {
    let eps = 1e-5;
    let r0 = radius - eps;

    let mut path = ProfilePath::new();
    path.move_to(Vec2::new(0.0, r0));
    path.line_to(Vec2::new(0.0, height - r0));
    path.quad_to(Vec2::new(0.0, height), Vec2::new(r0, height));
    path.line_to(Vec2::new(width - r0, height));
    path.quad_to(Vec2::new(width, height), Vec2::new(width, height - r0));
    path.line_to(Vec2::new(width, r0));
    path.quad_to(Vec2::new(width, 0.0), Vec2::new(width - r0, 0.0));
    path.line_to(Vec2::new(r0, 0.0));
    path.quad_to(Vec2::new(0.0, 0.0), Vec2::new(0.0, r0));

    extrude_profile(&path.into_outline(), depth - radius * 2.0, radius, smoothness * 2)
}

/// Unit-ish UV sphere used by decorative particles and the knob.
pub fn uv_sphere(radius: f32, lat_segments: u32, lon_segments: u32) -> MeshData {
    let mut mesh = MeshData::default();
    for lat in 0..=lat_segments {
        let theta = PI * lat as f32 / lat_segments as f32;
        let (st, ct) = theta.sin_cos();
        for lon in 0..=lon_segments {
            let phi = TAU * lon as f32 / lon_segments as f32;
            let (sp, cp) = phi.sin_cos();
            let n = Vec3::new(cp * st, ct, sp * st);
            mesh.positions.push([n.x * radius, n.y * radius, n.z * radius]);
            mesh.normals.push([n.x, n.y, n.z]);
        }
    }
    let stride = lon_segments + 1;
    for lat in 0..lat_segments {
        for lon in 0..lon_segments {
            let a = lat * stride + lon;
            let b = a + stride;
            mesh.indices.extend_from_slice(&[a, b, a + 1]);
            mesh.indices.extend_from_slice(&[a + 1, b, b + 1]);
        }
    }
    mesh
}

/// Axis-aligned box with flat per-face normals.
pub fn box_solid(width: f32, height: f32, depth: f32) -> MeshData {
    let (hx, hy, hz) = (width / 2.0, height / 2.0, depth / 2.0);
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        (
            [0.0, 0.0, 1.0],
            [[-hx, -hy, hz], [hx, -hy, hz], [hx, hy, hz], [-hx, hy, hz]],
        ),
        (
            [0.0, 0.0, -1.0],
            [[-hx, -hy, -hz], [-hx, hy, -hz], [hx, hy, -hz], [hx, -hy, -hz]],
        ),
        (
            [0.0, 1.0, 0.0],
            [[-hx, hy, -hz], [-hx, hy, hz], [hx, hy, hz], [hx, hy, -hz]],
        ),
        (
            [0.0, -1.0, 0.0],
            [[-hx, -hy, -hz], [hx, -hy, -hz], [hx, -hy, hz], [-hx, -hy, hz]],
        ),
        (
            [1.0, 0.0, 0.0],
            [[hx, -hy, -hz], [hx, hy, -hz], [hx, hy, hz], [hx, -hy, hz]],
        ),
        (
            [-1.0, 0.0, 0.0],
            [[-hx, -hy, -hz], [-hx, -hy, hz], [-hx, hy, hz], [-hx, hy, -hz]],
        ),
    ];
    let mut mesh = MeshData::default();
    for (normal, corners) in faces {
        let base = mesh.positions.len() as u32;
        for c in corners {
            mesh.positions.push(c);
            mesh.normals.push(normal);
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }
    mesh
}

/// Regular icosahedron, normals pointing radially.
pub fn icosahedron(radius: f32) -> MeshData {
    let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let raw = [
        [-1.0, phi, 0.0],
        [1.0, phi, 0.0],
        [-1.0, -phi, 0.0],
        [1.0, -phi, 0.0],
        [0.0, -1.0, phi],
        [0.0, 1.0, phi],
        [0.0, -1.0, -phi],
        [0.0, 1.0, -phi],
        [phi, 0.0, -1.0],
        [phi, 0.0, 1.0],
        [-phi, 0.0, -1.0],
        [-phi, 0.0, 1.0],
    ];
    let faces: [[u32; 3]; 20] = [
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];
    let mut mesh = MeshData::default();
    for v in raw {
        let n = Vec3::from(v).normalize();
        mesh.positions.push([n.x * radius, n.y * radius, n.z * radius]);
        mesh.normals.push([n.x, n.y, n.z]);
    }
    for f in faces {
        mesh.indices.extend_from_slice(&f);
    }
    mesh
}

/// Flat backdrop quad in the XY plane, facing -Z (toward the camera).
pub fn backdrop_plane(width: f32, height: f32) -> MeshData {
    let (hx, hy) = (width / 2.0, height / 2.0);
    MeshData {
        positions: vec![
            [-hx, -hy, 0.0],
            [hx, -hy, 0.0],
            [hx, hy, 0.0],
            [-hx, hy, 0.0],
        ],
        normals: vec![[0.0, 0.0, -1.0]; 4],
        indices: vec![0, 2, 1, 0, 3, 2],
    }
}
