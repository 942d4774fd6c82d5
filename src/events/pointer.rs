use crate::camera::{self, Viewport};
use crate::constants::*;
use crate::dom;
use crate::events::NativeBridge;
use crate::input;
use crate::particles::ParticleGroup;
use crate::state::{ShapeVariant, ViewState};
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Everything the pointer handlers need, cloned into each listener closure.
#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub state: Rc<RefCell<ViewState>>,
    pub groups: Rc<RefCell<[ParticleGroup; 2]>>,
    /// Pending hover probe timeout; cleared before every reschedule.
    pub hover_timeout: Rc<RefCell<Option<i32>>>,
    pub bridge: NativeBridge,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_click(&w);
    wire_mousemove(&w);
    wire_mousedown(&w);
    wire_mouseup(&w);
}

fn viewport_of(canvas: &web::HtmlCanvasElement) -> Viewport {
    Viewport::new(canvas.width() as f32, canvas.height() as f32)
}

fn selector_spheres() -> [(Vec3, f32); 3] {
    SELECTOR_POSITIONS.map(|p| (p, SELECTOR_PICK_RADIUS))
}

fn pointer_ray(canvas: &web::HtmlCanvasElement, ev: &web::MouseEvent) -> (Vec3, Vec3) {
    let (sx, sy) = dom::mouse_canvas_px(ev, canvas);
    camera::screen_to_world_ray(viewport_of(canvas), sx, sy)
}

fn wire_click(w: &InputWiring) {
    let w = w.clone();
    dom::add_window_listener("click", move |ev: web::MouseEvent| {
        let (ro, rd) = pointer_ray(&w.canvas, &ev);

        if let Some(i) = input::pick_nearest(ro, rd, &selector_spheres()) {
            let variant = ShapeVariant::ALL[i];
            // release the state borrow before calling into the native layer
            let msg = w.state.borrow_mut().select_shape(variant);
            if let Some(msg) = msg {
                log::info!("[click] wave shape -> {}", variant.index());
                w.bridge.send(msg);
            }
            return;
        }

        if input::ray_ring(ro, rd, PARTICLE_GROUP_ORIGINS[0], PARTICLE_RING_RADIUS, RING_BAND) {
            let msg = w.state.borrow_mut().toggle_lfo();
            let on = w.state.borrow().lfo_on;
            w.groups.borrow_mut()[0].set_excited(on);
            log::info!("[click] lfo {}", if on { "on" } else { "off" });
            w.bridge.send(msg);
            return;
        }

        if input::ray_ring(ro, rd, PARTICLE_GROUP_ORIGINS[1], PARTICLE_RING_RADIUS, RING_BAND) {
            w.state.borrow_mut().toggle_vibrato();
            let on = w.state.borrow().vibrato_on;
            w.groups.borrow_mut()[1].set_excited(on);
            log::info!("[click] vibrato {}", if on { "on" } else { "off" });
        }
    });
}

// The hover probe is debounced: each mousemove cancels the pending probe
// and schedules a fresh one, so the ray cast runs at most once per quiet
// 50ms window (last-write-wins).
fn wire_mousemove(w: &InputWiring) {
    let w = w.clone();
    dom::add_window_listener("mousemove", move |ev: web::MouseEvent| {
        let (sx, sy) = dom::mouse_canvas_px(&ev, &w.canvas);

        if let Some(id) = w.hover_timeout.borrow_mut().take() {
            dom::clear_timeout(id);
        }
        let probe = w.clone();
        let id = dom::set_timeout(
            move || {
                probe.hover_timeout.borrow_mut().take();
                let (ro, rd) =
                    camera::screen_to_world_ray(viewport_of(&probe.canvas), sx, sy);
                let hovered = input::pick_nearest(ro, rd, &selector_spheres())
                    .map(|i| ShapeVariant::ALL[i]);
                probe.state.borrow_mut().set_hover(hovered);
            },
            HOVER_DEBOUNCE_MS,
        );
        *w.hover_timeout.borrow_mut() = id;
    });
}

fn wire_mousedown(w: &InputWiring) {
    let w = w.clone();
    dom::add_window_listener("mousedown", move |ev: web::MouseEvent| {
        let (ro, rd) = pointer_ray(&w.canvas, &ev);
        if input::ray_sphere(ro, rd, KNOB_POSITION, KNOB_PICK_RADIUS).is_some() {
            log::info!("[drag] knob grabbed");
            w.state.borrow_mut().begin_knob_drag();
        }
    });
}

fn wire_mouseup(w: &InputWiring) {
    let w = w.clone();
    dom::add_window_listener("mouseup", move |_ev: web::MouseEvent| {
        let mut state = w.state.borrow_mut();
        if state.dragging_knob {
            log::info!("[drag] knob released");
        }
        state.end_knob_drag();
    });
}
