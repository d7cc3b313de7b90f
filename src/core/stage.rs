//! The single owner of all interactive state.
//!
//! DOM callbacks turn browser events into [`InputEvent`]s and hand them to
//! [`Stage::handle`]; the animation frame reads [`Stage::frame`]. Nothing else
//! mutates the carousel, highlights or layout.

use super::audio::{AudioTrigger, SynthBackend};
use super::carousel::{Carousel, LayoutUpdate};
use super::constants::{PRESS_DEPTH, PRESS_GLOW};
use super::dispatch::{dispatch, InputEvent, Intent, Intents, SceneView};
use super::highlight::Highlights;
use super::layout::{stage_layout, EntityTransform, Tween};
use super::orbit::OrbitCamera;
use super::pick::Camera;
use super::scene::{InstrumentEntity, PartRef, SceneRegistry};
use crate::constants::{DEFAULT_SEED, HIGHLIGHT_SEC, LAYOUT_TWEEN_SEC, VELOCITY_JITTER};
use glam::{Mat4, Quat, Vec3};

#[derive(Clone, Debug)]
pub struct StageParams {
    pub highlight_sec: f64,
    pub tween_sec: f64,
    pub velocity_jitter: f32,
    pub seed: u64,
}

impl Default for StageParams {
    fn default() -> Self {
        Self {
            highlight_sec: HIGHLIGHT_SEC,
            tween_sec: LAYOUT_TWEEN_SEC,
            velocity_jitter: VELOCITY_JITTER,
            seed: DEFAULT_SEED,
        }
    }
}

/// One box to draw this frame.
#[derive(Clone, Copy, Debug)]
pub struct PartInstance {
    pub part: PartRef,
    pub model: Mat4,
    pub color: Vec3,
    pub glow: f32,
}

#[derive(Clone, Debug)]
pub struct FrameView {
    pub instances: Vec<PartInstance>,
    pub view_proj: Mat4,
    pub eye: Vec3,
    pub active: usize,
}

pub struct Stage<B: SynthBackend> {
    registry: SceneRegistry,
    carousel: Carousel,
    highlights: Highlights,
    tweens: Vec<Tween>,
    orbit: OrbitCamera,
    viewport: (u32, u32),
    audio: AudioTrigger<B>,
    params: StageParams,
}

impl<B: SynthBackend> Stage<B> {
    pub fn new(registry: SceneRegistry, backend: B, params: StageParams) -> Self {
        let carousel = Carousel::new(registry.len());
        let viewport = (1, 1);
        let tweens = stage_layout(carousel.active(), carousel.count(), 1.0)
            .into_iter()
            .map(|xf| Tween::resting(xf, params.tween_sec))
            .collect();
        let mut audio = AudioTrigger::new(backend, params.seed);
        audio.set_velocity_jitter(params.velocity_jitter);
        Self {
            registry,
            carousel,
            highlights: Highlights::new(params.highlight_sec),
            tweens,
            orbit: OrbitCamera::studio(),
            viewport,
            audio,
            params,
        }
    }

    /// Dispatch `event` against the scene as displayed at `now_sec` and apply
    /// the resulting intents. Returns what was applied.
    pub fn handle(&mut self, event: InputEvent, now_sec: f64) -> Intents {
        let transforms = self.current_transforms(now_sec);
        let camera = self.camera();
        let intents = dispatch(
            event,
            &SceneView {
                registry: &self.registry,
                carousel: &self.carousel,
                transforms: &transforms,
                camera: &camera,
            },
        );
        self.apply(&intents, now_sec);
        intents
    }

    pub fn apply(&mut self, intents: &[Intent], now_sec: f64) {
        for intent in intents {
            match *intent {
                Intent::UnlockAudio => self.audio.unlock(),
                Intent::Advance => {
                    let update = self.carousel.advance();
                    self.on_layout_update(update, now_sec);
                }
                Intent::Focus(i) => {
                    match self.carousel.focus(i) {
                        Some(update) => self.on_layout_update(update, now_sec),
                        None => log::debug!("[carousel] focus({}) ignored", i),
                    }
                }
                Intent::PlayNote {
                    part,
                    category,
                    note,
                } => {
                    log::info!("[click] {} {} (part {})", category, note, part.part);
                    self.audio.play(category, note);
                }
                Intent::Highlight(part) => self.highlights.trigger(part, now_sec),
            }
        }
    }

    fn on_layout_update(&mut self, update: LayoutUpdate, now_sec: f64) {
        log::info!(
            "[carousel] active={} ({})",
            update.active,
            self.registry.get(update.active).map(|e| e.name).unwrap_or("?")
        );
        self.retarget(now_sec);
    }

    fn retarget(&mut self, now_sec: f64) {
        let targets = stage_layout(self.carousel.active(), self.carousel.count(), self.aspect());
        for (tween, target) in self.tweens.iter_mut().zip(targets) {
            tween.retarget(target, now_sec);
        }
    }

    /// Viewport changed: re-derive slot targets for the new aspect.
    /// Carousel index and highlights are untouched.
    pub fn resize(&mut self, width: u32, height: u32, now_sec: f64) {
        if width == 0 || height == 0 || (width, height) == self.viewport {
            return;
        }
        self.viewport = (width, height);
        self.retarget(now_sec);
    }

    pub fn current_transforms(&self, now_sec: f64) -> Vec<EntityTransform> {
        self.tweens.iter().map(|t| t.sample(now_sec)).collect()
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.viewport.0 as f32 / self.viewport.1.max(1) as f32
    }

    pub fn camera(&self) -> Camera {
        let mut camera = Camera::studio(self.aspect());
        camera.eye = self.orbit.eye();
        camera.target = self.orbit.target;
        camera
    }

    /// Advance per-frame state and produce the draw list.
    pub fn frame(&mut self, now_sec: f64) -> FrameView {
        self.highlights.prune(now_sec);
        let mut instances = Vec::with_capacity(self.registry.total_parts());
        for (ei, (entity, tween)) in self.registry.iter().zip(self.tweens.iter()).enumerate() {
            let xf = tween.sample(now_sec);
            let entity_m = xf.matrix();
            for (pi, part) in entity.parts.iter().enumerate() {
                let r = PartRef::new(ei, pi);
                let level = self.highlights.level(r, now_sec);
                let center = part.bounds.center() - Vec3::Y * (PRESS_DEPTH * level);
                let local =
                    Mat4::from_scale_rotation_translation(part.bounds.size(), Quat::IDENTITY, center);
                instances.push(PartInstance {
                    part: r,
                    model: entity_m * local,
                    color: Vec3::from(part.color) * xf.emphasis,
                    glow: part.emissive * xf.emphasis + PRESS_GLOW * level,
                });
            }
        }
        let camera = self.camera();
        FrameView {
            instances,
            view_proj: camera.view_proj(),
            eye: camera.eye,
            active: self.carousel.active(),
        }
    }

    pub fn active_entity(&self) -> Option<&InstrumentEntity> {
        self.registry.get(self.carousel.active())
    }

    pub fn active_name(&self) -> &'static str {
        self.active_entity().map(|e| e.name).unwrap_or("")
    }

    #[inline]
    pub fn registry(&self) -> &SceneRegistry {
        &self.registry
    }

    #[inline]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    #[inline]
    pub fn highlights(&self) -> &Highlights {
        &self.highlights
    }

    #[inline]
    pub fn audio(&self) -> &AudioTrigger<B> {
        &self.audio
    }

    #[inline]
    pub fn audio_mut(&mut self) -> &mut AudioTrigger<B> {
        &mut self.audio
    }

    #[inline]
    pub fn orbit_mut(&mut self) -> &mut OrbitCamera {
        &mut self.orbit
    }

    #[inline]
    pub fn params(&self) -> &StageParams {
        &self.params
    }
}
