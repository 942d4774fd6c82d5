use crate::constants::*;
use crate::geometry::{self, MeshData};
use crate::particles::{ParticleGroup, ParticleShape};
use glam::{Mat4, Vec3};
use std::f32::consts::{FRAC_PI_2, PI};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(pub usize);

/// One drawable instance: shared geometry plus its own transform and tint.
#[derive(Debug, Clone)]
pub struct Node {
    pub mesh: MeshId,
    pub position: Vec3,
    pub rotation_y: f32,
    pub rotation_z: f32,
    pub scale: Vec3,
    pub color: [f32; 3],
    pub opacity: f32,
    pub visible: bool,
}

impl Node {
    pub fn new(mesh: MeshId) -> Self {
        Self {
            mesh,
            position: Vec3::ZERO,
            rotation_y: 0.0,
            rotation_z: 0.0,
            scale: Vec3::ONE,
            color: [1.0, 1.0, 1.0],
            opacity: 1.0,
            visible: true,
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_rotation_y(self.rotation_y)
            * Mat4::from_rotation_z(self.rotation_z)
            * Mat4::from_scale(self.scale)
    }
}

#[derive(Debug, Clone)]
pub struct DirectionalLight {
    pub direction: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
}

#[derive(Debug, Clone)]
pub struct AmbientLight {
    pub color: [f32; 3],
    pub intensity: f32,
}

/// Flat scene: geometry pool, draw list, lights, background. Mutated only
/// from the frame update; translucent nodes are appended last so they draw
/// over the opaque set.
#[derive(Debug)]
pub struct Scene {
    pub meshes: Vec<MeshData>,
    pub nodes: Vec<Node>,
    pub key_light: DirectionalLight,
    pub ambient: AmbientLight,
    pub background: [f32; 3],
}

impl Scene {
    pub fn new() -> Self {
        Self {
            meshes: Vec::new(),
            nodes: Vec::new(),
            key_light: DirectionalLight {
                direction: (-KEY_LIGHT_POSITION).normalize(),
                color: KEY_LIGHT_COLOR,
                intensity: KEY_LIGHT_INTENSITY,
            },
            ambient: AmbientLight {
                color: AMBIENT_COLOR,
                intensity: AMBIENT_INTENSITY,
            },
            background: [0.0, 0.0, 0.0],
        }
    }

    pub fn add_mesh(&mut self, mesh: MeshData) -> MeshId {
        self.meshes.push(mesh);
        MeshId(self.meshes.len() - 1)
    }

    pub fn add_node(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

/// Handles to the nodes the interaction and frame layers keep mutating.
#[derive(Debug)]
pub struct SceneNodes {
    /// Display meshes, indexed by `ShapeVariant::index()`.
    pub shapes: [NodeId; 3],
    /// Translucent pick proxies, same order.
    pub selectors: [NodeId; 3],
    /// Per-cluster particle nodes, parallel to each group's particle list.
    pub particles: [Vec<NodeId>; 2],
    pub knob: NodeId,
}

/// Build the full static scene: display shapes, selector proxies, backdrop,
/// arrow clusters, particle clusters, and the drag knob.
pub fn build_scene(groups: &[ParticleGroup; 2]) -> (Scene, SceneNodes) {
    let mut scene = Scene::new();

    let sine = scene.add_mesh(geometry::sine_wave_solid(
        SINE_WIDTH,
        SINE_HEIGHT,
        SINE_DEPTH,
        SINE_RADIUS,
        SINE_SMOOTHNESS,
        SINE_SEGMENTS,
    ));
    let pyramid = scene.add_mesh(geometry::rounded_triangle_solid(
        PYRAMID_WIDTH,
        PYRAMID_HEIGHT,
        PYRAMID_DEPTH,
        PYRAMID_RADIUS,
        PYRAMID_SMOOTHNESS,
    ));
    let cube = scene.add_mesh(geometry::rounded_box_solid(
        CUBE_SIZE,
        CUBE_SIZE,
        CUBE_SIZE,
        CUBE_RADIUS,
        CUBE_SMOOTHNESS,
    ));
    let arrow = scene.add_mesh(geometry::rounded_triangle_solid(
        PYRAMID_WIDTH,
        PYRAMID_HEIGHT,
        0.1,
        PYRAMID_RADIUS,
        PYRAMID_SMOOTHNESS,
    ));
    let backdrop = scene.add_mesh(geometry::backdrop_plane(30.0, 20.0));
    let sphere = scene.add_mesh(geometry::uv_sphere(1.0, 8, 8));
    let cube_small = scene.add_mesh(geometry::box_solid(2.0, 2.0, 2.0));
    let ico = scene.add_mesh(geometry::icosahedron(1.0));

    // Backdrop plane behind everything.
    let mut plane = Node::new(backdrop);
    plane.position = Vec3::new(0.0, 0.0, 10.0);
    plane.color = PLANE_COLOR;
    scene.add_node(plane);

    // The three display shapes share the origin; only one is visible.
    let shapes = [sine, pyramid, cube].map(|mesh| {
        let mut node = Node::new(mesh);
        node.color = SHAPE_COLOR;
        node.visible = false;
        scene.add_node(node)
    });
    scene.node_mut(shapes[0]).visible = true;

    // Decorative arrow pairs: up/down filter affordance, and a reserved
    // left/right pair kept hidden.
    let arrow_layout = [
        (FILTER_ARROWS_ORIGIN, true, [0.0, PI]),
        (RESERVED_ARROWS_ORIGIN, false, [PI, FRAC_PI_2]),
    ];
    for (origin, visible, rotations) in arrow_layout {
        for (dy, rot_z) in [0.1, -0.5].into_iter().zip(rotations) {
            let mut node = Node::new(arrow);
            node.position = origin + Vec3::new(0.0, dy, 0.0);
            node.rotation_z = rot_z;
            node.scale = Vec3::splat(ARROW_SCALE);
            node.color = SAGE_GREEN;
            node.visible = visible;
            scene.add_node(node);
        }
    }

    // Particle clusters.
    let particles = [0, 1].map(|g| {
        let group = &groups[g];
        group
            .particles
            .iter()
            .map(|p| {
                let mesh = match p.shape {
                    ParticleShape::Sphere => sphere,
                    ParticleShape::Box => cube_small,
                    ParticleShape::Icosahedron => ico,
                };
                let mut node = Node::new(mesh);
                node.position = group.origin + p.initial;
                node.rotation_y = p.phase;
                node.scale = Vec3::splat(p.size);
                node.color = p.color;
                scene.add_node(node)
            })
            .collect()
    });

    // Drag knob.
    let mut knob_node = Node::new(sphere);
    knob_node.position = KNOB_POSITION;
    knob_node.scale = Vec3::splat(KNOB_RADIUS);
    knob_node.color = KNOB_COLOR;
    let knob = scene.add_node(knob_node);

    // Translucent selector proxies go last so they blend over the rest.
    let selectors = [sine, pyramid, cube].map(|mesh| {
        let mut node = Node::new(mesh);
        node.scale = Vec3::splat(SELECTOR_SCALE);
        node.color = PROXY_COLOR;
        node.opacity = SELECTOR_OPACITY;
        scene.add_node(node)
    });
    for (i, id) in selectors.iter().enumerate() {
        scene.node_mut(*id).position = SELECTOR_POSITIONS[i];
    }

    (
        scene,
        SceneNodes {
            shapes,
            selectors,
            particles,
            knob,
        },
    )
}
