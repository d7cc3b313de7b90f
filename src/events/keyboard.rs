use super::InputWiring;
use crate::core::{key_to_event, InputEvent};
use crate::overlay;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, w: &InputWiring, document: &web::Document) {
    if ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let key = ev.key();
    if matches!(key.as_str(), "h" | "H") {
        overlay::toggle(document, overlay::TITLE_ID);
        return;
    }
    let count = w.stage.borrow().registry().len();
    let Some(event) = key_to_event(&key, count) else {
        return;
    };
    if matches!(event, InputEvent::Advance) {
        // keep Space and arrows from scrolling the page
        ev.prevent_default();
    }
    log::info!("[keys] {:?}", event);
    let now = w.clock.now_sec();
    w.stage.borrow_mut().handle(event, now);
}

pub fn wire_global_keydown(w: InputWiring, document: &web::Document) {
    let document = document.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &w, &document);
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
