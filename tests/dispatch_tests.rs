mod common;

use common::{ndc_of, note, piano_key, stage};
use glam::Vec2;
use instrument_stage::core::{
    dispatch, key_to_event, InputEvent, InstrumentCategory, Intent, PartKind, PartRef,
    SceneView,
};

fn view_dispatch(s: &instrument_stage::core::Stage<common::RecordingSynth>, event: InputEvent, now: f64) -> Vec<Intent> {
    let transforms = s.current_transforms(now);
    let camera = s.camera();
    dispatch(
        event,
        &SceneView {
            registry: s.registry(),
            carousel: s.carousel(),
            transforms: &transforms,
            camera: &camera,
        },
    )
    .into_vec()
}

#[test]
fn click_on_active_key_plays_and_highlights() {
    let s = stage();
    let key = piano_key(&s, "C4");
    let ndc = ndc_of(&s, key, 0.0);
    let intents = view_dispatch(&s, InputEvent::PrimaryClick { ndc }, 0.0);
    assert_eq!(
        intents,
        vec![
            Intent::UnlockAudio,
            Intent::PlayNote {
                part: key,
                category: InstrumentCategory::Piano,
                note: note("C4"),
            },
            Intent::Highlight(key),
        ]
    );
}

#[test]
fn click_on_background_entity_focuses_without_sound() {
    let s = stage();
    let guitar = s.registry().get(1).unwrap();
    let string = guitar
        .parts
        .iter()
        .position(|p| p.kind == PartKind::String)
        .unwrap()
        + 3;
    let ndc = ndc_of(&s, PartRef::new(1, string), 0.0);
    let intents = view_dispatch(&s, InputEvent::PrimaryClick { ndc }, 0.0);
    assert_eq!(intents, vec![Intent::UnlockAudio, Intent::Focus(1)]);
}

#[test]
fn click_on_decoration_does_nothing() {
    let s = stage();
    let piano = s.registry().get(0).unwrap();
    let panel = piano
        .parts
        .iter()
        .position(|p| p.label == "control panel")
        .unwrap();
    let ndc = ndc_of(&s, PartRef::new(0, panel), 0.0);
    let intents = view_dispatch(&s, InputEvent::PrimaryClick { ndc }, 0.0);
    assert_eq!(intents, vec![Intent::UnlockAudio]);
}

#[test]
fn click_on_empty_sky_does_nothing() {
    let s = stage();
    let intents = view_dispatch(
        &s,
        InputEvent::PrimaryClick {
            ndc: Vec2::new(0.0, 0.98),
        },
        0.0,
    );
    assert_eq!(intents, vec![Intent::UnlockAudio]);
}

#[test]
fn click_outside_viewport_is_ignored() {
    let s = stage();
    for ndc in [Vec2::new(1.5, 0.0), Vec2::new(0.0, -1.01), Vec2::splat(f32::NAN)] {
        let intents = view_dispatch(&s, InputEvent::PrimaryClick { ndc }, 0.0);
        assert_eq!(intents, vec![Intent::UnlockAudio]);
    }
}

#[test]
fn secondary_action_and_keys_advance() {
    let s = stage();
    assert_eq!(
        view_dispatch(&s, InputEvent::SecondaryDoubleAction, 0.0),
        vec![Intent::UnlockAudio, Intent::Advance]
    );
    assert_eq!(
        view_dispatch(&s, InputEvent::Focus(2), 0.0),
        vec![Intent::UnlockAudio, Intent::Focus(2)]
    );
}

#[test]
fn keys_map_to_events() {
    assert_eq!(key_to_event("ArrowRight", 3), Some(InputEvent::Advance));
    assert_eq!(key_to_event(" ", 3), Some(InputEvent::Advance));
    assert_eq!(key_to_event("n", 3), Some(InputEvent::Advance));
    assert_eq!(key_to_event("1", 3), Some(InputEvent::Focus(0)));
    assert_eq!(key_to_event("3", 3), Some(InputEvent::Focus(2)));
    assert_eq!(key_to_event("4", 3), None);
    assert_eq!(key_to_event("0", 3), None);
    assert_eq!(key_to_event("x", 3), None);
    assert_eq!(key_to_event("ArrowLeft", 3), None);
}
