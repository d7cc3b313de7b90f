use instrument_stage::core::{Highlights, PartRef};

const KEY: PartRef = PartRef::new(0, 30);
const OTHER: PartRef = PartRef::new(1, 8);

#[test]
fn expires_after_duration() {
    let mut h = Highlights::new(0.15);
    h.trigger(KEY, 2.0);
    assert!(h.is_active(KEY, 2.0));
    assert!(h.is_active(KEY, 2.149));
    assert!(!h.is_active(KEY, 2.16));
    assert!(!h.is_active(OTHER, 2.0));
}

#[test]
fn level_fades_linearly() {
    let mut h = Highlights::new(0.2);
    h.trigger(KEY, 0.0);
    assert_eq!(h.level(KEY, 0.0), 1.0);
    assert!((h.level(KEY, 0.1) - 0.5).abs() < 1e-5);
    assert_eq!(h.level(KEY, 0.2), 0.0);
    assert_eq!(h.level(OTHER, 0.1), 0.0);
}

#[test]
fn last_write_wins() {
    let mut h = Highlights::new(0.15);
    h.trigger(KEY, 1.0);
    h.trigger(KEY, 1.1);
    assert_eq!(h.active_until(KEY), Some(1.1 + 0.15));
    assert_eq!(h.level(KEY, 1.1), 1.0);
    assert_eq!(h.len(), 1);
}

#[test]
fn prune_drops_only_expired() {
    let mut h = Highlights::new(0.15);
    h.trigger(KEY, 0.0);
    h.trigger(OTHER, 0.1);
    h.prune(0.2);
    assert_eq!(h.len(), 1);
    assert!(h.active_until(KEY).is_none());
    assert!(h.is_active(OTHER, 0.2));
    h.prune(1.0);
    assert!(h.is_empty());
}
