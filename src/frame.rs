use crate::camera::{self, Viewport};
use crate::constants::{KNOB_COLOR, KNOB_DRAG_COLOR, PROXY_COLOR, SELECTOR_OPACITY};
use crate::particles::ParticleGroup;
use crate::render;
use crate::scene::{Scene, SceneNodes};
use crate::state::{ShapeVariant, ViewState};
use glam::Vec3;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame callback owns or shares with the event wiring.
pub struct FrameContext<'a> {
    pub state: Rc<RefCell<ViewState>>,
    pub groups: Rc<RefCell<[ParticleGroup; 2]>>,
    pub scene: Scene,
    pub nodes: SceneNodes,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub started: Instant,
}

impl<'a> FrameContext<'a> {
    /// One animation tick: advance state, mirror it into the scene graph,
    /// and render. Runs well inside a frame budget; never blocks.
    pub fn frame(&mut self) {
        let t = self.started.elapsed().as_secs_f32();

        let (active, displacement, rotation, lfo_on, vibrato_on, hovered, dragging, intensity, bg) = {
            let mut st = self.state.borrow_mut();
            st.advance_rotation();
            (
                st.active_shape,
                st.displacement(t),
                st.rotation,
                st.lfo_on,
                st.vibrato_on,
                st.hovered,
                st.dragging_knob,
                st.light_intensity,
                st.background.color(),
            )
        };

        for (i, variant) in ShapeVariant::ALL.into_iter().enumerate() {
            let node = self.scene.node_mut(self.nodes.shapes[i]);
            node.visible = variant == active;
            node.rotation_y = rotation;
            node.position.y = if lfo_on { displacement } else { 0.0 };
            if vibrato_on {
                // Z keeps its last displaced value when the toggle goes off.
                node.position.z = displacement;
            }
        }

        {
            let groups = self.groups.borrow();
            for (g, group) in groups.iter().enumerate() {
                for (i, p) in group.particles.iter().enumerate() {
                    let node = self.scene.node_mut(self.nodes.particles[g][i]);
                    node.position = group.position_at(i, t);
                    node.scale = Vec3::splat(p.size * p.scale);
                    node.color = p.color;
                }
            }
        }

        for (i, variant) in ShapeVariant::ALL.into_iter().enumerate() {
            let node = self.scene.node_mut(self.nodes.selectors[i]);
            node.color = PROXY_COLOR;
            node.opacity = if hovered == Some(variant) {
                1.0
            } else {
                SELECTOR_OPACITY
            };
        }

        self.scene.node_mut(self.nodes.knob).color =
            if dragging { KNOB_DRAG_COLOR } else { KNOB_COLOR };

        self.scene.key_light.intensity = intensity;
        self.scene.background = bg;

        if let Some(g) = &mut self.gpu {
            let w = self.canvas.width();
            let h = self.canvas.height();
            g.resize_if_needed(w, h);
            let vp = Viewport::new(w as f32, h as f32);
            if let Err(e) = g.render(&self.scene, camera::view_proj(vp)) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &Scene,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for the surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, scene).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Drive `frame()` from requestAnimationFrame for the lifetime of the view.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
