use super::InputWiring;
use crate::core::InputEvent;
use crate::input;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_click(&w);
    wire_secondary(&w);
    wire_wheel(&w);
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        w.drag_state.borrow_mut().press(input::mouse_client_px(&ev));
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let delta = w
            .drag_state
            .borrow_mut()
            .move_to(input::mouse_client_px(&ev));
        if let Some(d) = delta {
            w.stage.borrow_mut().orbit_mut().drag(d.x, d.y);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        let mut ds = w.drag_state.borrow_mut();
        if ds.active && !ds.click_allowed() {
            log::debug!("[mouse] orbit drag {:.0}px", ds.travelled());
        }
        ds.release();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Primary click: raycast into the scene.
fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if !w.drag_state.borrow().click_allowed() {
            return;
        }
        let Some(ndc) = input::mouse_ndc(&ev, &w.canvas) else {
            return;
        };
        let now = w.clock.now_sec();
        w.stage
            .borrow_mut()
            .handle(InputEvent::PrimaryClick { ndc }, now);
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Double click and right click both cycle the carousel.
fn wire_secondary(w: &InputWiring) {
    for event_name in ["dblclick", "contextmenu"] {
        let w = w.clone();
        let canvas_for_listener = w.canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            ev.prevent_default();
            let now = w.clock.now_sec();
            w.stage
                .borrow_mut()
                .handle(InputEvent::SecondaryDoubleAction, now);
        }) as Box<dyn FnMut(_)>);
        _ = canvas_for_listener
            .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        w.stage.borrow_mut().orbit_mut().zoom(ev.delta_y() as f32);
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}
