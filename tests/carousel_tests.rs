use instrument_stage::core::{Carousel, LayoutUpdate};

#[test]
fn advance_wraps_modulo_count() {
    let mut c = Carousel::new(3);
    assert_eq!(c.active(), 0);
    for k in 1..=10 {
        let update = c.advance();
        assert_eq!(c.active(), k % 3);
        assert_eq!(
            update,
            LayoutUpdate {
                active: k % 3,
                count: 3
            }
        );
    }
}

#[test]
fn focus_on_active_is_a_no_op() {
    let mut c = Carousel::new(3);
    c.advance();
    assert_eq!(c.focus(1), None);
    assert_eq!(c.active(), 1);
}

#[test]
fn focus_jumps_directly() {
    let mut c = Carousel::new(3);
    // no intermediate stop at 1
    let update = c.focus(2).expect("layout update");
    assert_eq!(update.active, 2);
    assert_eq!(c.active(), 2);
    assert_eq!(c.advance().active, 0);
}

#[test]
fn focus_out_of_range_is_ignored() {
    let mut c = Carousel::new(3);
    assert_eq!(c.focus(3), None);
    assert_eq!(c.focus(usize::MAX), None);
    assert_eq!(c.active(), 0);
}

#[test]
fn rank_counts_from_active() {
    let mut c = Carousel::new(3);
    c.focus(1);
    assert_eq!(c.rank_of(1), 0);
    assert_eq!(c.rank_of(2), 1);
    assert_eq!(c.rank_of(0), 2);
}

#[test]
fn single_and_empty_carousels_stay_at_zero() {
    let mut one = Carousel::new(1);
    assert_eq!(one.advance().active, 0);
    assert_eq!(one.focus(0), None);

    let mut empty = Carousel::new(0);
    assert_eq!(empty.count(), 1);
    assert_eq!(empty.advance().active, 0);
}
