use crate::audio::WebAudioSynth;
use crate::core::Stage;
use crate::overlay;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedStage = Rc<RefCell<Stage<WebAudioSynth>>>;

/// Monotonic seconds since start-up; the one time base for input and frames.
#[derive(Clone, Copy, Debug)]
pub struct Clock {
    origin: Instant,
}

impl Clock {
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    #[inline]
    pub fn now_sec(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

pub struct FrameContext<'a> {
    pub stage: SharedStage,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub clock: Clock,
    pub last_active: Option<usize>,
    pub status_visible: bool,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = self.clock.now_sec();
        let (width, height) = (self.canvas.width(), self.canvas.height());

        let (view, active_name, unlocked) = {
            let mut stage = self.stage.borrow_mut();
            stage.resize(width, height, now);
            (stage.frame(now), stage.active_name(), stage.audio().is_unlocked())
        };

        if self.status_visible && unlocked {
            self.status_visible = false;
            overlay::hide(&self.document, overlay::STATUS_ID);
        }

        if self.last_active != Some(view.active) {
            self.last_active = Some(view.active);
            overlay::set_title(&self.document, active_name);
        }

        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        gpu.resize_if_needed(width, height);
        match gpu.render(&view) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[render] surface lost, reconfiguring");
                gpu.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("[render] out of memory, stopping renderer");
                self.gpu = None;
            }
            Err(e) => log::warn!("[render] frame skipped: {:?}", e),
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> anyhow::Result<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas: &'static web::HtmlCanvasElement = Box::leak(Box::new(canvas.clone()));
    render::GpuState::new(leaked_canvas).await
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_next(tick: &Tick) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Tick = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_next(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_next(&tick);
}
