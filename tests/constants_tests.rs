// Host-side tests for constants and their mathematical relationships.
// The constant files are plain Rust, so we include them directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_constants_are_positive() {
    assert!(HIGHLIGHT_SEC > 0.0);
    assert!(LAYOUT_TWEEN_SEC > 0.0);
    assert!(NOTE_START_LEAD_SEC > 0.0);
    assert!(NOTE_STOP_PAD_SEC > 0.0);
    assert!(REVERB_DECAY_SEC > 0.0);

    // The press flash is short feedback, well under a carousel transition
    assert!(HIGHLIGHT_SEC < LAYOUT_TWEEN_SEC);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn mix_levels_are_unit_range() {
    assert!(MASTER_GAIN > 0.0 && MASTER_GAIN <= 1.0);
    assert!(REVERB_WET >= 0.0 && REVERB_WET <= 1.0);
    assert!(VELOCITY_JITTER >= 0.0 && VELOCITY_JITTER < 0.5);
    assert!(BLOOM_THRESHOLD > 0.0 && BLOOM_THRESHOLD <= 1.0);
    assert!(AMBIENT_LIGHT >= 0.0 && AMBIENT_LIGHT <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_constants_have_logical_relationships() {
    assert!(CAMERA_ZNEAR > 0.0);
    assert!(CAMERA_ZFAR > CAMERA_ZNEAR);
    assert!(CAMERA_FOVY_RADIANS > 0.0 && CAMERA_FOVY_RADIANS < std::f32::consts::PI);

    // The default framing must fit inside the orbit zoom limits
    let d = (CAMERA_EYE - CAMERA_TARGET).length();
    assert!(d >= ORBIT_DISTANCE_MIN && d <= ORBIT_DISTANCE_MAX);
    assert!(ORBIT_PITCH_MIN < ORBIT_PITCH_MAX);
    assert!(ORBIT_PITCH_MAX < std::f32::consts::FRAC_PI_2);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn background_slots_are_demoted() {
    assert!(BACKGROUND_EMPHASIS < ACTIVE_EMPHASIS);
    assert!(SIDE_SLOT_SCALE < 1.0);
    assert!(FAR_SLOT_SCALE_FALLOFF > 0.0 && FAR_SLOT_SCALE_FALLOFF < 1.0);
    // further slots recede
    assert!(SIDE_SLOT_Z < 0.0 && FAR_SLOT_STEP_Z < 0.0);
    assert!(NARROW_ASPECT_MIN > 0.0 && NARROW_ASPECT_MIN <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pointer_slop_is_small() {
    assert!(DRAG_CLICK_SLOP_PX > 0.0 && DRAG_CLICK_SLOP_PX < 16.0);
}
