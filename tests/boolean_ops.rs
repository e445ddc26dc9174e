use std::collections::BTreeSet;

use polyclip::{
    boolean_op_64, difference_64, intersect_64, union_64, xor_64, ClipType, Clipper64, FillRule,
    Path64, Paths64, Point64,
};

fn subject_square() -> Path64 {
    vec![
        Point64::new(0, 0),
        Point64::new(10, 0),
        Point64::new(10, 10),
        Point64::new(0, 10),
    ]
}

fn clip_square() -> Path64 {
    vec![
        Point64::new(5, 5),
        Point64::new(15, 5),
        Point64::new(15, 15),
        Point64::new(5, 15),
    ]
}

fn point_set(paths: &Paths64) -> BTreeSet<(i64, i64)> {
    paths
        .iter()
        .flatten()
        .map(|p| (p.x, p.y))
        .collect()
}

#[test]
fn test_intersection_of_overlapping_squares() {
    let result = intersect_64(&vec![subject_square()], &vec![clip_square()], FillRule::NonZero);
    assert_eq!(result.len(), 1);
    let expected: BTreeSet<(i64, i64)> = [(5, 5), (10, 5), (10, 10), (5, 10)].into_iter().collect();
    assert_eq!(point_set(&result), expected);
}

#[test]
fn test_union_of_overlapping_squares() {
    let result = union_64(&vec![subject_square()], &vec![clip_square()], FillRule::NonZero);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].len(), 8);
    let expected: BTreeSet<(i64, i64)> = [
        (0, 0),
        (10, 0),
        (10, 5),
        (15, 5),
        (15, 15),
        (5, 15),
        (5, 10),
        (0, 10),
    ]
    .into_iter()
    .collect();
    assert_eq!(point_set(&result), expected);
}

#[test]
fn test_difference_of_overlapping_squares() {
    let result = difference_64(&vec![subject_square()], &vec![clip_square()], FillRule::NonZero);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].len(), 6);
    let expected: BTreeSet<(i64, i64)> =
        [(0, 0), (10, 0), (10, 5), (5, 5), (5, 10), (0, 10)].into_iter().collect();
    assert_eq!(point_set(&result), expected);
}

#[test]
fn test_xor_of_overlapping_squares_yields_two_l_shapes() {
    let result = xor_64(&vec![subject_square()], &vec![clip_square()], FillRule::NonZero);
    assert_eq!(result.len(), 2);
    for ring in &result {
        assert_eq!(ring.len(), 6);
    }
}

#[test]
fn test_hole_reported_in_polytree() {
    let outer = subject_square();
    let hole = vec![
        Point64::new(3, 3),
        Point64::new(7, 3),
        Point64::new(7, 7),
        Point64::new(3, 7),
    ];

    let mut clipper = Clipper64::new();
    clipper.add_subject(&vec![outer, hole]);
    let mut tree = polyclip::PolyTree64::new();
    let mut open = Paths64::new();
    let ok = clipper.execute_tree(ClipType::Union, FillRule::EvenOdd, &mut tree, &mut open);
    assert!(ok);

    let root = tree.root();
    assert_eq!(root.children().len(), 1);
    let outer_idx = root.children()[0];
    let outer_node = &tree.nodes[outer_idx];
    assert_eq!(outer_node.children().len(), 1);
    let hole_idx = outer_node.children()[0];
    assert!(tree.is_hole(hole_idx));
    assert!(!tree.is_hole(outer_idx));
}

#[test]
fn test_open_polyline_clipped_against_square() {
    let mut clipper = Clipper64::new();
    clipper.add_open_subject(&vec![vec![Point64::new(-5, 5), Point64::new(15, 5)]]);
    clipper.add_clip(&vec![subject_square()]);

    let mut closed = Paths64::new();
    let mut open = Paths64::new();
    let ok = clipper.execute(ClipType::Intersection, FillRule::NonZero, &mut closed, Some(&mut open));
    assert!(ok);
    assert_eq!(open.len(), 1);
    assert_eq!(open[0], vec![Point64::new(0, 5), Point64::new(10, 5)]);
}

#[test]
fn test_disjoint_squares_produce_empty_intersection() {
    let a = vec![Point64::new(0, 0), Point64::new(1, 0), Point64::new(1, 1), Point64::new(0, 1)];
    let b = vec![Point64::new(5, 5), Point64::new(6, 5), Point64::new(6, 6), Point64::new(5, 6)];
    let result = intersect_64(&vec![a], &vec![b], FillRule::NonZero);
    assert!(result.is_empty());
}

fn signed_area(path: &Path64) -> f64 {
    let mut area = 0.0;
    for i in 0..path.len() {
        let p1 = path[i];
        let p2 = path[(i + 1) % path.len()];
        area += (p1.x * p2.y - p2.x * p1.y) as f64;
    }
    area / 2.0
}

#[test]
fn test_union_of_edge_adjacent_squares_merges_cleanly() {
    // Two squares sharing a full vertical edge: both have a local minimum whose
    // bottom point sits at the shared corner (10, 0), forcing the AEL insertion
    // order tie-break for two coincident bottoms at the same scanline.
    let left = vec![
        Point64::new(0, 0),
        Point64::new(10, 0),
        Point64::new(10, 10),
        Point64::new(0, 10),
    ];
    let right = vec![
        Point64::new(10, 0),
        Point64::new(20, 0),
        Point64::new(20, 10),
        Point64::new(10, 10),
    ];
    let result = union_64(&vec![left, right], &Paths64::new(), FillRule::NonZero);
    assert_eq!(result.len(), 1);
    assert_eq!(signed_area(&result[0]).abs(), 200.0);
    let produced = point_set(&result);
    for corner in [(0, 0), (20, 0), (20, 10), (0, 10)] {
        assert!(produced.contains(&corner), "missing corner {corner:?}");
    }
}

#[test]
fn test_union_with_self_is_identity() {
    let square = subject_square();
    let result = union_64(&vec![square.clone()], &Paths64::new(), FillRule::NonZero);
    assert_eq!(result.len(), 1);
    assert_eq!(point_set(&result), point_set(&vec![square]));
}

#[test]
fn test_intersection_is_commutative() {
    let s = vec![subject_square()];
    let c = vec![clip_square()];
    let forward = intersect_64(&s, &c, FillRule::NonZero);
    let backward = intersect_64(&c, &s, FillRule::NonZero);
    assert_eq!(point_set(&forward), point_set(&backward));
}

#[test]
fn test_difference_with_self_is_empty_under_nonzero() {
    let square = subject_square();
    let result = difference_64(&vec![square.clone()], &vec![square], FillRule::NonZero);
    assert!(result.is_empty());
}

#[test]
fn test_xor_equals_union_minus_intersection() {
    let s = vec![subject_square()];
    let c = vec![clip_square()];
    let xor = xor_64(&s, &c, FillRule::NonZero);
    let u = union_64(&s, &c, FillRule::NonZero);
    let diff_of_union_and_intersection = difference_64(&u, &intersect_64(&s, &c, FillRule::NonZero), FillRule::NonZero);
    assert_eq!(point_set(&xor), point_set(&diff_of_union_and_intersection));
}

#[test]
fn test_repeated_execute_is_deterministic() {
    let mut clipper = Clipper64::new();
    clipper.add_subject(&vec![subject_square()]);
    clipper.add_clip(&vec![clip_square()]);

    let mut first = Paths64::new();
    clipper.execute(ClipType::Union, FillRule::NonZero, &mut first, None);
    let mut second = Paths64::new();
    clipper.execute(ClipType::Union, FillRule::NonZero, &mut second, None);

    assert_eq!(point_set(&first), point_set(&second));
}

#[test]
fn test_closed_path_with_repeated_first_point_matches_deduped() {
    let mut square_with_repeat = subject_square();
    square_with_repeat.push(Point64::new(0, 0));
    let result_a = intersect_64(&vec![square_with_repeat], &vec![clip_square()], FillRule::NonZero);
    let result_b = intersect_64(&vec![subject_square()], &vec![clip_square()], FillRule::NonZero);
    assert_eq!(point_set(&result_a), point_set(&result_b));
}

#[test]
fn test_nonzero_vs_evenodd_self_overlapping_path() {
    // a figure-eight-like self-overlapping square pair via two identical overlapping
    // squares in one subject path set: NonZero keeps the doubled region filled,
    // EvenOdd cancels it out.
    let square = subject_square();
    let doubled = vec![square.clone(), square];

    let nonzero = boolean_op_64(ClipType::Union, FillRule::NonZero, &doubled, &Paths64::new());
    assert!(!nonzero.is_empty());

    let evenodd = boolean_op_64(ClipType::Union, FillRule::EvenOdd, &doubled, &Paths64::new());
    assert!(evenodd.is_empty());
}
