//! DOM listeners. Each one turns a browser event into an [`InputEvent`]
//! (or a camera nudge) and hands it to the shared stage.
//!
//! [`InputEvent`]: crate::core::InputEvent

pub mod keyboard;
pub mod pointer;

use crate::frame::{Clock, SharedStage};
use crate::input::DragState;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub stage: SharedStage,
    pub drag_state: Rc<RefCell<DragState>>,
    pub clock: Clock,
}

pub fn wire_all(w: InputWiring, document: &web::Document) {
    pointer::wire_input_handlers(w.clone());
    keyboard::wire_global_keydown(w, document);
}
