use crate::constants::DRAG_CLICK_SLOP_PX;
use crate::core::client_to_ndc;
use glam::Vec2;
use web_sys as web;

/// Press/drag bookkeeping for one pointer. A press that travels further
/// than [`DRAG_CLICK_SLOP_PX`] is an orbit drag and swallows the click
/// that the browser fires after release.
#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub active: bool,
    last: Vec2,
    travelled: f32,
}

impl DragState {
    pub fn press(&mut self, at: Vec2) {
        self.active = true;
        self.last = at;
        self.travelled = 0.0;
    }

    /// Pointer motion while pressed; returns the delta to orbit by.
    pub fn move_to(&mut self, at: Vec2) -> Option<Vec2> {
        if !self.active {
            return None;
        }
        let delta = at - self.last;
        self.last = at;
        self.travelled += delta.length();
        Some(delta)
    }

    pub fn release(&mut self) {
        self.active = false;
    }

    /// Whether the most recent press stayed within the click slop.
    #[inline]
    pub fn click_allowed(&self) -> bool {
        self.travelled <= DRAG_CLICK_SLOP_PX
    }

    #[inline]
    pub fn travelled(&self) -> f32 {
        self.travelled
    }
}

#[inline]
pub fn mouse_client_px(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Mouse position as NDC over the canvas' CSS box, `None` for a zero-size
/// canvas.
pub fn mouse_ndc(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    client_to_ndc(x_css, y_css, rect.width() as f32, rect.height() as f32)
}
