//! Property-based tests for the geometric predicates.
//!
//! Run with: cargo test -p drone-spatial -- proptest

use drone_spatial::{
    Aabb, AabbTree, Segment2, do_segments_intersect, point_segment_distance, segment_distance,
};
use nalgebra::{Point2, Point3};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn arb_point2() -> impl Strategy<Value = Point2<f64>> {
    (-50.0..50.0f64, -50.0..50.0f64).prop_map(|(x, y)| Point2::new(x, y))
}

fn arb_segment() -> impl Strategy<Value = Segment2> {
    (arb_point2(), arb_point2()).prop_map(|(a, b)| Segment2::new(a, b))
}

fn arb_aabb() -> impl Strategy<Value = Aabb> {
    (
        prop::array::uniform3(-20.0..20.0f64),
        prop::array::uniform3(0.0..5.0f64),
    )
        .prop_map(|([x, y, z], [w, h, d])| {
            Aabb::new(Point3::new(x, y, z), Point3::new(x + w, y + h, z + d))
        })
}

// =============================================================================
// Segment predicates
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn segment_distance_is_symmetric(a in arb_segment(), b in arb_segment()) {
        let ab = segment_distance(&a, &b);
        let ba = segment_distance(&b, &a);
        prop_assert!((ab - ba).abs() < 1e-9, "{} != {}", ab, ba);
    }

    #[test]
    fn intersection_is_symmetric(a in arb_segment(), b in arb_segment()) {
        prop_assert_eq!(do_segments_intersect(&a, &b), do_segments_intersect(&b, &a));
    }

    #[test]
    fn intersecting_segments_have_zero_distance(a in arb_segment(), b in arb_segment()) {
        if do_segments_intersect(&a, &b) {
            prop_assert_eq!(segment_distance(&a, &b), 0.0);
        }
    }

    #[test]
    fn distances_are_finite_and_non_negative(a in arb_segment(), b in arb_segment(), p in arb_point2()) {
        let d = segment_distance(&a, &b);
        prop_assert!(d.is_finite() && d >= 0.0);

        let d = point_segment_distance(&p, &a);
        prop_assert!(d.is_finite() && d >= 0.0);
    }

    #[test]
    fn point_distance_bounded_by_endpoints(p in arb_point2(), s in arb_segment()) {
        let d = point_segment_distance(&p, &s);
        let to_start = (p - s.start).norm();
        let to_end = (p - s.end).norm();
        prop_assert!(d <= to_start.min(to_end) + 1e-9);
    }

    #[test]
    fn segment_touches_itself(s in arb_segment()) {
        prop_assert!(do_segments_intersect(&s, &s));
        prop_assert_eq!(segment_distance(&s, &s), 0.0);
    }
}

// =============================================================================
// Box index
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn tree_query_matches_linear_scan(
        boxes in prop::collection::vec(arb_aabb(), 0..60),
        probe in arb_aabb(),
    ) {
        let tree = AabbTree::build_with_leaf_size(&boxes, 3);

        let expected: Vec<u32> = (0u32..)
            .zip(&boxes)
            .filter(|(_, b)| b.intersects(&probe))
            .map(|(i, _)| i)
            .collect();

        prop_assert_eq!(tree.intersects_any(&probe), !expected.is_empty());
        prop_assert_eq!(tree.query(&probe), expected);
        prop_assert_eq!(tree.len(), boxes.len());
    }
}
