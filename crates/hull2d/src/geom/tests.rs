use super::*;
use nalgebra::vector;
use std::cmp::Ordering;

#[test]
fn signed_area_signs_follow_y_up_frame() {
    let a = vector![0.0, 0.0];
    let b = vector![1.0, 0.0];
    let c = vector![0.0, 1.0];
    assert!((signed_area(a, b, c) - 0.5).abs() < 1e-15);
    assert!((signed_area(a, c, b) + 0.5).abs() < 1e-15);
    assert_eq!(signed_area(a, b, vector![2.0, 0.0]), 0.0);

    let tol = Tolerance::default();
    assert_eq!(orientation(a, b, c, tol), Orientation::CounterClockwise);
    assert_eq!(orientation(a, c, b, tol), Orientation::Clockwise);
    assert!(is_counter_clockwise(a, b, c, tol));
    assert!(is_clockwise(a, c, b, tol));
    assert!(are_collinear(a, b, vector![-3.0, 0.0], tol));
}

#[test]
fn predicates_partition_outcomes() {
    let tol = Tolerance::MACHINE;
    let a = vector![0.0, 0.0];
    let b = vector![1.0, 0.0];
    for c in [vector![0.5, 1.0], vector![0.5, -1.0], vector![7.0, 0.0]] {
        let hits = [
            is_clockwise(a, b, c, tol),
            is_counter_clockwise(a, b, c, tol),
            are_collinear(a, b, c, tol),
        ];
        assert_eq!(hits.iter().filter(|h| **h).count(), 1, "c = {c:?}");
    }
}

#[test]
fn relative_tolerance_scales_with_coordinates() {
    // Tiny bump on a long baseline far from the origin.
    let a = vector![1e8, 0.0];
    let b = vector![1e8 + 1.0, 0.0];
    let c = vector![1e8 + 2.0, 1e-3];
    assert_eq!(
        orientation(a, b, c, Tolerance::MACHINE),
        Orientation::CounterClockwise
    );
    assert_eq!(
        orientation(a, b, c, Tolerance::default()),
        Orientation::Collinear
    );
    // Same shape near the origin is resolved by the relative policy.
    let shift = vector![1e8, 0.0];
    assert_eq!(
        orientation(a - shift, b - shift, c - shift, Tolerance::default()),
        Orientation::CounterClockwise
    );
    assert_eq!(
        orientation(a, b, c, Tolerance::Absolute(1.0)),
        Orientation::Collinear
    );
}

#[test]
fn intersect_lines_cross_and_parallel() {
    let p = intersect_lines(
        vector![0.0, 0.0],
        vector![2.0, 2.0],
        vector![0.0, 2.0],
        vector![2.0, 0.0],
    )
    .unwrap();
    assert!((p - vector![1.0, 1.0]).norm() < 1e-12);
    assert!(intersect_lines(
        vector![0.0, 0.0],
        vector![1.0, 1.0],
        vector![0.0, 1.0],
        vector![1.0, 2.0],
    )
    .is_none());
}

#[test]
fn fit_line_slope_intercept_and_vertical() {
    match fit_line(vector![1.0, 1.0], vector![3.0, 5.0]) {
        LineFit::Sloped { slope, intercept } => {
            assert!((slope - 2.0).abs() < 1e-12);
            assert!((intercept + 1.0).abs() < 1e-12);
        }
        LineFit::Unconstrained => panic!("expected a sloped line"),
    }
    let vertical = fit_line(vector![2.0, 0.0], vector![2.0, 5.0]);
    assert_eq!(vertical, LineFit::Unconstrained);
    assert_eq!(vertical.eval(2.0), None);
    let flat = fit_line(vector![-1.0, 3.0], vector![4.0, 3.0]);
    assert_eq!(flat.eval(100.0), Some(3.0));
}

#[test]
fn admits_is_non_strict_and_sided() {
    let tol = Tolerance::default();
    let a = vector![0.0, 0.0];
    let b = vector![4.0, 4.0];
    let line = fit_line(a, b);
    let above = vector![1.0, 3.0];
    let below = vector![3.0, 1.0];
    let on = vector![2.0, 2.0];
    assert!(line.admits(a, b, above, Side::Above, tol));
    assert!(!line.admits(a, b, below, Side::Above, tol));
    assert!(line.admits(a, b, below, Side::Below, tol));
    assert!(line.admits(a, b, on, Side::Above, tol));
    assert!(line.admits(a, b, on, Side::Below, tol));
}

#[test]
fn admits_vertical_uses_direction() {
    let tol = Tolerance::default();
    // Upward vertical line: left of it counts as above.
    let a = vector![1.0, 0.0];
    let b = vector![1.0, 5.0];
    let line = fit_line(a, b);
    assert_eq!(line, LineFit::Unconstrained);
    assert!(line.admits(a, b, vector![0.0, 0.0], Side::Above, tol));
    assert!(!line.admits(a, b, vector![2.0, 0.0], Side::Above, tol));
    assert!(line.admits(a, b, vector![2.0, 0.0], Side::Below, tol));
    assert!(line.admits(a, b, vector![1.0, -3.0], Side::Below, tol));
}

#[test]
fn overflowing_fit_is_treated_as_vertical() {
    let a = vector![0.0, 0.0];
    let b = vector![1e-300, 1e300];
    let line = fit_line(a, b);
    assert_eq!(line, LineFit::Unconstrained);
    let left = vector![-1.0, 0.0];
    assert!(line.admits(a, b, left, Side::Above, Tolerance::MACHINE));
    assert!(!line.admits(a, b, left, Side::Below, Tolerance::MACHINE));
}

#[test]
fn lexicographic_order_breaks_ties_by_y() {
    let mut pts = vec![
        vector![1.0, 2.0],
        vector![0.0, 5.0],
        vector![1.0, -1.0],
        vector![-2.0, 0.0],
    ];
    sort_lex(&mut pts);
    assert_eq!(
        pts,
        vec![
            vector![-2.0, 0.0],
            vector![0.0, 5.0],
            vector![1.0, -1.0],
            vector![1.0, 2.0],
        ]
    );
    assert_eq!(
        lex_cmp(&vector![0.0, 0.0], &vector![0.0, 0.0]),
        Ordering::Equal
    );
}

#[test]
fn centroid_of_empty_is_none() {
    assert!(centroid(&[]).is_none());
    let rect = [
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![4.0, 2.0],
        vector![0.0, 2.0],
    ];
    let c = centroid(&rect).unwrap();
    assert!((c - vector![2.0, 1.0]).norm() < 1e-12);
}

#[test]
fn clockwise_sort_orders_by_angle_about_centroid() {
    let mut pts = vec![
        vector![0.0, 0.0],
        vector![4.0, 4.0],
        vector![4.0, 0.0],
        vector![0.0, 4.0],
    ];
    clockwise_sort(&mut pts);
    assert_eq!(
        pts,
        vec![
            vector![4.0, 4.0],
            vector![0.0, 4.0],
            vector![0.0, 0.0],
            vector![4.0, 0.0],
        ]
    );
    let n = pts.len();
    for i in 0..n {
        let area = signed_area(pts[i], pts[(i + 1) % n], pts[(i + 2) % n]);
        assert!(area > 0.0);
    }
    let mut empty: Vec<Point> = Vec::new();
    clockwise_sort(&mut empty);
    assert!(empty.is_empty());
}
