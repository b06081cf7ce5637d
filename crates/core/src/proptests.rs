//! Property-based tests for interval soundness and set normalization.

use proptest::prelude::*;

use crate::{Interval, IntervalSet};

// Strategy for a finite interval together with a point inside it.
fn interval_with_point() -> impl Strategy<Value = (Interval, f64)> {
    (-1e3..1e3_f64, 0.0..1e2_f64, 0.0..=1.0_f64).prop_map(|(lo, width, t)| {
        let hi = lo + width;
        let interval = Interval::new(lo, hi).expect("ordered bounds");
        let x = (lo + t * (hi - lo)).clamp(lo, hi);
        (interval, x)
    })
}

// Strategy for quarter-integer intervals, whose small powers are exact.
fn dyadic_interval_with_point() -> impl Strategy<Value = (Interval, f64)> {
    (-40..40_i32, 0..20_i32, 0..=20_i32).prop_map(|(lo, width, offset)| {
        let lo = f64::from(lo) / 4.0;
        let hi = lo + f64::from(width) / 4.0;
        let x = (lo + f64::from(offset.min(width)) / 4.0).min(hi);
        (Interval::new(lo, hi).expect("ordered bounds"), x)
    })
}

fn small_interval() -> impl Strategy<Value = Interval> {
    (-50.0..50.0_f64, 0.0..20.0_f64)
        .prop_map(|(lo, width)| Interval::new(lo, lo + width).expect("ordered bounds"))
}

fn interval_set() -> impl Strategy<Value = IntervalSet> {
    proptest::collection::vec(small_interval(), 0..6).prop_map(IntervalSet::new)
}

fn is_normalized(set: &IntervalSet) -> bool {
    set.parts()
        .windows(2)
        .all(|pair| pair[0].hi() < pair[1].lo())
}

proptest! {
    #[test]
    fn addition_is_sound((a, x) in interval_with_point(), (b, y) in interval_with_point()) {
        prop_assert!((a + b).contains(x + y));
    }

    #[test]
    fn subtraction_is_sound((a, x) in interval_with_point(), (b, y) in interval_with_point()) {
        prop_assert!((a - b).contains(x - y));
    }

    #[test]
    fn multiplication_is_sound((a, x) in interval_with_point(), (b, y) in interval_with_point()) {
        prop_assert!((a * b).contains(x * y));
    }

    #[test]
    fn division_is_sound((a, x) in interval_with_point(), (b, y) in interval_with_point()) {
        prop_assume!(y != 0.0);
        prop_assert!((a / b).contains(x / y));
    }

    #[test]
    fn power_is_sound((a, x) in dyadic_interval_with_point(), n in -4..=6_i32) {
        prop_assume!(n >= 0 || x != 0.0);
        let magnitude = x.powi(n.abs());
        let expected = if n < 0 { 1.0 / magnitude } else { magnitude };
        let power = IntervalSet::from(a).powi(n);
        prop_assert!(power.contains(expected));
    }

    #[test]
    fn sin_and_cos_are_sound((a, x) in interval_with_point()) {
        prop_assert!(a.sin().contains(x.sin()));
        prop_assert!(a.cos().contains(x.cos()));
    }

    #[test]
    fn exp_and_ln_are_sound((a, x) in interval_with_point()) {
        prop_assume!(x < 700.0);
        prop_assert!(a.exp().contains(x.exp()));
        if x > 0.0 {
            prop_assert!(a.ln().expect("positive part").contains(x.ln()));
        }
    }

    #[test]
    fn exp_past_overflow_stays_ordered(lo in 709.8..1e4_f64, width in 0.0..1e3_f64) {
        let y = Interval::new(lo, lo + width).expect("ordered bounds").exp();
        prop_assert!(y.lo().is_finite());
        prop_assert!(y.lo() <= y.hi());
        prop_assert_eq!(y.hi(), f64::INFINITY);
        prop_assert!(Interval::new(y.lo(), y.hi()).is_ok());
    }

    #[test]
    fn normalization_is_idempotent(set in interval_set()) {
        prop_assert!(is_normalized(&set));
        let again = IntervalSet::new(set.parts().to_vec());
        prop_assert_eq!(again, set);
    }

    #[test]
    fn union_is_commutative(a in interval_set(), b in interval_set()) {
        let mut left = a.clone();
        left.union(&b);
        let mut right = b;
        right.union(&a);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn union_is_associative(a in interval_set(), b in interval_set(), c in interval_set()) {
        let mut left = a.clone();
        left.union(&b);
        left.union(&c);
        let mut tail = b;
        tail.union(&c);
        let mut right = a;
        right.union(&tail);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn intersection_keeps_shared_values(
        a in interval_set(),
        b in interval_set(),
        x in -60.0..80.0_f64,
    ) {
        let mut common = a.clone();
        common.intersect(&b);
        prop_assert!(is_normalized(&common));
        prop_assert_eq!(common.contains(x), a.contains(x) && b.contains(x));
    }

    #[test]
    fn containment_is_monotone((inner, x) in interval_with_point(), pad in 0.0..10.0_f64) {
        let outer = Interval::new(inner.lo() - pad, inner.hi() + pad).expect("ordered bounds");
        prop_assert!(inner.is_subset(&outer));
        prop_assert!(outer.contains(x));
    }
}
