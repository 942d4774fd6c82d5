#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use crate::events::{InputWiring, NativeBridge};
use crate::particles::ParticleGroup;
use crate::state::ViewState;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod bridge;
mod camera;
mod constants;
mod dom;
mod events;
mod frame;
mod geometry;
mod input;
mod particles;
mod render;
mod scene;
mod state;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("waveshape-panel starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("panel-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #panel-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Keep the canvas backing store in sync with CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    // ---------------- View state and scene ----------------
    let state = Rc::new(RefCell::new(ViewState::new()));
    let groups = Rc::new(RefCell::new([
        ParticleGroup::spawn(
            PARTICLE_GROUP_ORIGINS[0],
            PARTICLE_WHITE,
            SUNLIT_SAND,
            PARTICLE_COUNT,
            GROUP_SEEDS[0],
        ),
        ParticleGroup::spawn(
            PARTICLE_GROUP_ORIGINS[1],
            PALE_SKY_BLUE,
            SUNLIT_SAND,
            PARTICLE_COUNT,
            GROUP_SEEDS[1],
        ),
    ]));
    let (scene, nodes) = scene::build_scene(&groups.borrow());
    log::info!(
        "[scene] {} meshes, {} nodes",
        scene.meshes.len(),
        scene.nodes.len()
    );

    // Initialize WebGPU
    let gpu = frame::init_gpu(&canvas, &scene).await;

    // ---------------- Host bridge and input ----------------
    let bridge = NativeBridge::resolve();
    events::wire_host_events(state.clone());
    events::wire_background_keys(state.clone());
    events::wire_input_handlers(InputWiring {
        canvas: canvas.clone(),
        state: state.clone(),
        groups: groups.clone(),
        hover_timeout: Rc::new(RefCell::new(None)),
        bridge,
    });

    // Animation loop driven by requestAnimationFrame
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        state,
        groups,
        scene,
        nodes,
        canvas,
        gpu,
        started: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
