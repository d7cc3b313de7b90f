//! Virtual instrument stage: a carousel of playable 3D instruments rendered
//! with WebGPU and voiced with WebAudio.
//!
//! Everything stateful lives in [`core`], which builds and tests on the host.
//! The browser glue (DOM listeners, audio graph, renderer) is wasm32-only.

pub mod constants;
pub mod core;
pub mod input;

#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
pub use web_entry::start;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::core::{SceneRegistry, Stage, StageParams};
    use crate::{audio, dom, events, frame, input, overlay};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::spawn_local;
    use web_sys as web;

    fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
        dom::sync_canvas_backing_size(canvas);
        let canvas_resize = canvas.clone();
        let resize_closure = Closure::wrap(Box::new(move || {
            let (w, h) = dom::sync_canvas_backing_size(&canvas_resize);
            log::debug!("[resize] {}x{}", w, h);
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
        log::info!("instrument-stage starting");

        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
                if let Some(document) = dom::window_document() {
                    overlay::show_fatal(&document, &e);
                }
            }
        });
        Ok(())
    }

    async fn init() -> anyhow::Result<()> {
        static STARTED: AtomicBool = AtomicBool::new(false);
        if STARTED.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        overlay::set_status(&document, overlay::STATUS_LOADING);

        let canvas: web::HtmlCanvasElement = document
            .get_element_by_id("app-canvas")
            .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

        // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
        wire_canvas_resize(&canvas);

        let clock = frame::Clock::start();
        let synth = audio::WebAudioSynth::new()?;
        log::info!("[audio] context ready at {} Hz", synth.context().sample_rate());
        let registry = SceneRegistry::stage_default();
        log::info!(
            "[scene] {} instruments, {} parts",
            registry.len(),
            registry.total_parts()
        );
        let stage: frame::SharedStage = Rc::new(RefCell::new(Stage::new(
            registry,
            synth,
            StageParams::default(),
        )));
        stage
            .borrow_mut()
            .resize(canvas.width(), canvas.height(), clock.now_sec());

        let gpu = frame::init_gpu(&canvas).await?;

        events::wire_all(
            events::InputWiring {
                canvas: canvas.clone(),
                stage: stage.clone(),
                drag_state: Rc::new(RefCell::new(input::DragState::default())),
                clock,
            },
            &document,
        );

        overlay::set_status(&document, overlay::STATUS_READY);

        let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
            stage,
            document,
            canvas,
            gpu: Some(gpu),
            clock,
            last_active: None,
            status_visible: true,
        }));
        frame::start_loop(frame_ctx);
        Ok(())
    }
}
