use crate::constants::{BACKGROUND_DARKNESS_STEP, BACKGROUND_HUE_STEP};
use crate::dom;
use crate::state::ViewState;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Arrow keys steer the background: up/down darkness, left/right hue.
pub fn wire_background_keys(state: Rc<RefCell<ViewState>>) {
    dom::add_window_listener("keydown", move |ev: web::KeyboardEvent| {
        let mut st = state.borrow_mut();
        match ev.key().as_str() {
            "ArrowUp" => st.background.adjust_darkness(BACKGROUND_DARKNESS_STEP),
            "ArrowDown" => st.background.adjust_darkness(-BACKGROUND_DARKNESS_STEP),
            "ArrowLeft" => st.background.shift_hue(-BACKGROUND_HUE_STEP),
            "ArrowRight" => st.background.shift_hue(BACKGROUND_HUE_STEP),
            _ => return,
        }
        ev.prevent_default();
    });
}
