//! Interaction dispatcher: typed input events in, state-transition intents out.
//!
//! Dispatch never mutates anything. The stage applies the returned intents
//! in order.

use super::carousel::Carousel;
use super::layout::EntityTransform;
use super::notes::NoteId;
use super::pick::{hit_test, ndc_in_viewport, Camera};
use super::scene::{InstrumentCategory, PartRef, SceneRegistry};
use glam::Vec2;
use smallvec::{smallvec, SmallVec};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Click/tap at a viewport position in normalized device coordinates.
    PrimaryClick { ndc: Vec2 },
    /// Double-click or context action anywhere: cycle the carousel.
    SecondaryDoubleAction,
    /// Keyboard: cycle the carousel.
    Advance,
    /// Keyboard: bring an entity to centre stage.
    Focus(usize),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intent {
    UnlockAudio,
    Advance,
    Focus(usize),
    PlayNote {
        part: PartRef,
        category: InstrumentCategory,
        note: NoteId,
    },
    Highlight(PartRef),
}

pub type Intents = SmallVec<[Intent; 4]>;

/// Read-only view of the state dispatch needs.
pub struct SceneView<'a> {
    pub registry: &'a SceneRegistry,
    pub carousel: &'a Carousel,
    /// Transforms as currently displayed (mid-transition included).
    pub transforms: &'a [EntityTransform],
    pub camera: &'a Camera,
}

pub fn dispatch(event: InputEvent, view: &SceneView<'_>) -> Intents {
    // any interaction is a user gesture, so it may unlock audio first
    let mut intents: Intents = smallvec![Intent::UnlockAudio];
    match event {
        InputEvent::SecondaryDoubleAction | InputEvent::Advance => intents.push(Intent::Advance),
        InputEvent::Focus(i) => intents.push(Intent::Focus(i)),
        InputEvent::PrimaryClick { ndc } => {
            if !ndc_in_viewport(ndc) {
                return intents;
            }
            let ray = view.camera.ray_from_ndc(ndc);
            let Some(hit) = hit_test(view.registry, view.transforms, &ray) else {
                return intents;
            };
            let entity = hit.part.entity;
            if !view.carousel.is_active(entity) {
                intents.push(Intent::Focus(entity));
                return intents;
            }
            let Some(ent) = view.registry.get(entity) else {
                return intents;
            };
            if let Some(note) = ent.parts.get(hit.part.part).and_then(|p| p.note) {
                intents.push(Intent::PlayNote {
                    part: hit.part,
                    category: ent.category,
                    note,
                });
                intents.push(Intent::Highlight(hit.part));
            }
        }
    }
    intents
}

/// Keyboard shortcut mapping; digits are 1-based entity slots.
pub fn key_to_event(key: &str, entity_count: usize) -> Option<InputEvent> {
    match key {
        "ArrowRight" | " " | "n" | "N" => Some(InputEvent::Advance),
        _ => {
            let digit = key.parse::<usize>().ok()?;
            (1..=entity_count)
                .contains(&digit)
                .then_some(InputEvent::Focus(digit - 1))
        }
    }
}
