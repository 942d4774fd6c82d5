use crate::constants::MAX_PIXEL_RATIO;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Keep the canvas backing store at CSS size times device pixel ratio,
/// with the ratio capped so high-DPI screens don't quadruple the fill cost.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(MAX_PIXEL_RATIO);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Attach a window-level listener for `event` and leak the closure, which
/// lives for the lifetime of the view.
pub fn add_window_listener<E, F>(event: &str, mut handler: F)
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    if let Some(window) = web::window() {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(
            move |ev: web::Event| {
                if let Ok(typed) = ev.dyn_into::<E>() {
                    handler(typed);
                }
            },
        ) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Schedule a one-shot callback; returns the timeout id for cancellation.
pub fn set_timeout(handler: impl FnOnce() + 'static, millis: i32) -> Option<i32> {
    let window = web::window()?;
    let closure = wasm_bindgen::closure::Closure::once_into_js(handler);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(closure.unchecked_ref(), millis)
        .ok()
}

pub fn clear_timeout(id: i32) {
    if let Some(window) = web::window() {
        window.clear_timeout_with_handle(id);
    }
}

/// Pointer position in canvas backing-store pixels.
#[inline]
pub fn mouse_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w > 0.0 && h > 0.0 {
        (
            x_css / w * canvas.width() as f32,
            y_css / h * canvas.height() as f32,
        )
    } else {
        (0.0, 0.0)
    }
}
