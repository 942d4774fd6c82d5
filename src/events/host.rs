use crate::bridge::{HostEvent, Outbound};
use crate::dom;
use crate::state::ViewState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Handle on the native layer's entry point. Resolved once at startup; a
/// missing function downgrades every outbound call to a logged no-op.
#[derive(Clone)]
pub struct NativeBridge {
    func: Option<js_sys::Function>,
}

impl NativeBridge {
    pub fn resolve() -> Self {
        let func = web::window()
            .and_then(|w| js_sys::Reflect::get(&w, &JsValue::from_str("nativeFunction")).ok())
            .and_then(|v| v.dyn_into::<js_sys::Function>().ok());
        if func.is_none() {
            log::warn!("[bridge] nativeFunction not found; outbound calls disabled");
        }
        Self { func }
    }

    /// Fire-and-forget call carrying `[tag, payload]`, matching the native
    /// layer's dispatch convention.
    pub fn send(&self, msg: Outbound) {
        let Some(func) = &self.func else {
            return;
        };
        let args = js_sys::Array::new();
        args.push(&JsValue::from_str(msg.tag()));
        match msg {
            Outbound::WaveShape(i) => args.push(&JsValue::from_f64(i as f64)),
            Outbound::LfoOn(on) => args.push(&JsValue::from_bool(on)),
        };
        if let Err(e) = func.call1(&JsValue::NULL, &args) {
            log::warn!("[bridge] outbound {} failed: {:?}", msg.tag(), e);
        }
    }
}

/// Listen for the four host notifications, forwarded by the embedding page
/// as CustomEvents on the window, and funnel them through one parser.
pub fn wire_host_events(state: Rc<RefCell<ViewState>>) {
    for name in HostEvent::NAMES {
        let state = state.clone();
        dom::add_window_listener(name, move |ev: web::CustomEvent| {
            let payload = ev.detail().as_f64();
            match HostEvent::parse(name, payload) {
                Some(host_ev) => {
                    log::debug!("[bridge] inbound {name}");
                    state.borrow_mut().apply_host_event(host_ev);
                }
                None => log::warn!("[bridge] dropped {name} with malformed payload"),
            }
        });
    }
}
