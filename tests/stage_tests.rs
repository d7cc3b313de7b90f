mod common;

use common::{ndc_of, note, piano_key, stage};
use instrument_stage::core::{
    InputEvent, Intent, PartKind, PartRef, Waveform, PRESS_DEPTH,
};
use instrument_stage::constants::HIGHLIGHT_SEC;

#[test]
fn carousel_scenario() {
    let mut s = stage();
    assert_eq!(s.carousel().active(), 0);

    s.handle(InputEvent::SecondaryDoubleAction, 0.0);
    assert_eq!(s.carousel().active(), 1);
    assert_eq!(s.active_name(), "Acoustic Guitar");

    s.handle(InputEvent::Focus(0), 1.0);
    assert_eq!(s.carousel().active(), 0);

    // let the transition settle so the guitar sits in its background slot
    let now = 5.0;
    let guitar = s.registry().get(1).unwrap();
    let string = guitar
        .parts
        .iter()
        .position(|p| p.kind == PartKind::String)
        .unwrap();
    let ndc = ndc_of(&s, PartRef::new(1, string), now);
    s.handle(InputEvent::PrimaryClick { ndc }, now);
    assert_eq!(s.carousel().active(), 1);
    assert!(s.audio().backend().played.is_empty());

    // back to the piano and strike middle C
    s.handle(InputEvent::Focus(0), 6.0);
    let key = piano_key(&s, "C4");
    let now = 10.0;
    let ndc = ndc_of(&s, key, now);
    s.handle(InputEvent::PrimaryClick { ndc }, now);
    let played = &s.audio().backend().played;
    assert_eq!(played.len(), 1);
    assert_eq!(played[0].note, note("C4"));
    assert_eq!(played[0].waveform, Waveform::Triangle);
}

#[test]
fn first_interaction_unlocks_once() {
    let mut s = stage();
    assert!(!s.audio().is_unlocked());
    s.handle(InputEvent::Advance, 0.0);
    assert!(s.audio().is_unlocked());
    s.handle(InputEvent::Advance, 0.1);
    s.handle(InputEvent::SecondaryDoubleAction, 0.2);
    assert_eq!(s.audio().backend().unlock_calls, 1);
}

#[test]
fn failed_unlock_drops_notes_and_retries() {
    let mut s = stage();
    s.audio_mut().backend_mut().fail_unlock = true;
    let key = piano_key(&s, "A4");
    let ndc = ndc_of(&s, key, 0.0);
    let applied = s.handle(InputEvent::PrimaryClick { ndc }, 0.0);
    assert!(applied.contains(&Intent::Highlight(key)));
    assert!(s.audio().backend().played.is_empty());
    // the press still shows
    assert!(s.highlights().is_active(key, 0.05));

    s.audio_mut().backend_mut().fail_unlock = false;
    s.handle(InputEvent::PrimaryClick { ndc }, 1.0);
    assert_eq!(s.audio().backend().unlock_calls, 2);
    assert_eq!(s.audio().backend().played.len(), 1);
}

#[test]
fn synth_errors_are_swallowed() {
    let mut s = stage();
    s.audio_mut().backend_mut().fail_trigger = true;
    let key = piano_key(&s, "E4");
    let ndc = ndc_of(&s, key, 0.0);
    s.handle(InputEvent::PrimaryClick { ndc }, 0.0);
    assert!(s.highlights().is_active(key, 0.0));
    assert_eq!(s.carousel().active(), 0);
}

#[test]
fn retrigger_extends_highlight() {
    let mut s = stage();
    let key = piano_key(&s, "C4");
    let ndc = ndc_of(&s, key, 0.0);
    s.handle(InputEvent::PrimaryClick { ndc }, 1.0);
    s.handle(InputEvent::PrimaryClick { ndc }, 1.1);
    assert_eq!(s.highlights().active_until(key), Some(1.1 + HIGHLIGHT_SEC));
    // past the first expiry, still lit by the second
    assert!(s.highlights().is_active(key, 1.0 + HIGHLIGHT_SEC + 0.01));
    assert!(!s.highlights().is_active(key, 1.1 + HIGHLIGHT_SEC));
    assert_eq!(s.audio().backend().played.len(), 2);
}

#[test]
fn resize_keeps_index_and_highlights() {
    let mut s = stage();
    s.handle(InputEvent::Focus(2), 0.0);
    s.handle(InputEvent::Focus(0), 0.1);
    let key = piano_key(&s, "G4");
    let ndc = ndc_of(&s, key, 2.0);
    s.handle(InputEvent::PrimaryClick { ndc }, 2.0);
    let until = s.highlights().active_until(key);
    assert!(until.is_some());

    let wide = s.current_transforms(10.0);
    s.resize(600, 1000, 2.01);
    assert_eq!(s.carousel().active(), 0);
    assert_eq!(s.highlights().active_until(key), until);
    // side slots re-derived for the narrow viewport
    let narrow = s.current_transforms(10.0);
    assert_eq!(narrow[0], wide[0]);
    assert!(narrow[1].position.x < wide[1].position.x);
    assert!(narrow[2].position.x > wide[2].position.x);
}

#[test]
fn degenerate_resize_is_ignored() {
    let mut s = stage();
    s.resize(1280, 720, 0.0);
    let before = s.current_transforms(5.0);
    s.resize(0, 720, 1.0);
    s.resize(1280, 0, 1.0);
    assert_eq!(s.current_transforms(5.0), before);
    assert!((s.aspect() - 1280.0 / 720.0).abs() < 1e-6);
}

#[test]
fn frame_shows_pressed_part_then_restores() {
    let mut s = stage();
    let key = piano_key(&s, "D4");
    let rest = s.frame(0.0);
    let idx = rest.instances.iter().position(|i| i.part == key).unwrap();
    let rest_y = rest.instances[idx].model.w_axis.y;

    let ndc = ndc_of(&s, key, 0.0);
    s.handle(InputEvent::PrimaryClick { ndc }, 0.0);
    let pressed = s.frame(0.0);
    assert!((rest_y - pressed.instances[idx].model.w_axis.y - PRESS_DEPTH).abs() < 1e-4);
    assert!(pressed.instances[idx].glow > rest.instances[idx].glow);

    let later = s.frame(1.0);
    assert_eq!(later.instances[idx].model.w_axis.y, rest_y);
    assert!(s.highlights().is_empty());
    assert_eq!(later.instances.len(), s.registry().total_parts());
}

#[test]
fn background_entities_are_dimmed() {
    let mut s = stage();
    let view = s.frame(0.0);
    assert_eq!(view.active, 0);
    let bright = |e: usize| {
        view.instances
            .iter()
            .filter(|i| i.part.entity == e)
            .map(|i| i.color.length())
            .fold(0.0_f32, f32::max)
    };
    // the sax's pearl keys are near-white but demoted
    assert!(bright(2) < 1.0);
    assert!(bright(0) > bright(2));
}
