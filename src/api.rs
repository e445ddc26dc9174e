//! Free-function convenience wrappers over [`Clipper64`]/[`ClipperD`] for the four
//! boolean operations, mirroring the shape of a typical computational-geometry
//! crate's top-level API: construct, add paths, execute, done.

use crate::core::{FillRule, Paths64, PathsD};
use crate::engine::ClipType;
use crate::engine_public::{Clipper64, ClipperD, PolyTree64, PolyTreeD};

/// Run a boolean operation between `subjects` and `clips`, returning closed paths only.
pub fn boolean_op_64(
    clip_type: ClipType,
    fill_rule: FillRule,
    subjects: &Paths64,
    clips: &Paths64,
) -> Paths64 {
    let mut clipper = Clipper64::new();
    clipper.add_subject(subjects);
    clipper.add_clip(clips);
    let mut solution = Paths64::new();
    clipper.execute(clip_type, fill_rule, &mut solution, None);
    solution
}

/// Run a boolean operation, returning the result as a [`PolyTree64`] so outer/hole
/// nesting is preserved.
pub fn boolean_op_tree_64(
    clip_type: ClipType,
    fill_rule: FillRule,
    subjects: &Paths64,
    clips: &Paths64,
) -> PolyTree64 {
    let mut clipper = Clipper64::new();
    clipper.add_subject(subjects);
    clipper.add_clip(clips);
    let mut tree = PolyTree64::new();
    let mut open_paths = Paths64::new();
    clipper.execute_tree(clip_type, fill_rule, &mut tree, &mut open_paths);
    tree
}

/// Double-precision counterpart of [`boolean_op_64`]; `precision` is the number of
/// decimal digits retained when scaling to the integer coordinate space internally.
pub fn boolean_op_d(
    clip_type: ClipType,
    fill_rule: FillRule,
    subjects: &PathsD,
    clips: &PathsD,
    precision: i32,
) -> PathsD {
    let mut clipper = ClipperD::new(precision);
    clipper.add_subject(subjects);
    clipper.add_clip(clips);
    let mut solution = PathsD::new();
    clipper.execute(clip_type, fill_rule, &mut solution, None);
    solution
}

/// Double-precision counterpart of [`boolean_op_tree_64`].
pub fn boolean_op_tree_d(
    clip_type: ClipType,
    fill_rule: FillRule,
    subjects: &PathsD,
    clips: &PathsD,
    precision: i32,
) -> PolyTreeD {
    let mut clipper = ClipperD::new(precision);
    clipper.add_subject(subjects);
    clipper.add_clip(clips);
    let mut tree = PolyTreeD::new();
    let mut open_paths = PathsD::new();
    clipper.execute_tree(clip_type, fill_rule, &mut tree, &mut open_paths);
    tree
}

/// Intersection of `subjects` and `clips`
pub fn intersect_64(subjects: &Paths64, clips: &Paths64, fill_rule: FillRule) -> Paths64 {
    boolean_op_64(ClipType::Intersection, fill_rule, subjects, clips)
}

/// Union of `subjects` and `clips`
pub fn union_64(subjects: &Paths64, clips: &Paths64, fill_rule: FillRule) -> Paths64 {
    boolean_op_64(ClipType::Union, fill_rule, subjects, clips)
}

/// Union of `subjects` alone (self-union), resolving any self-intersections
pub fn union_subjects_64(subjects: &Paths64, fill_rule: FillRule) -> Paths64 {
    boolean_op_64(ClipType::Union, fill_rule, subjects, &Paths64::new())
}

/// Subjects minus clips
pub fn difference_64(subjects: &Paths64, clips: &Paths64, fill_rule: FillRule) -> Paths64 {
    boolean_op_64(ClipType::Difference, fill_rule, subjects, clips)
}

/// Symmetric difference of `subjects` and `clips`
pub fn xor_64(subjects: &Paths64, clips: &Paths64, fill_rule: FillRule) -> Paths64 {
    boolean_op_64(ClipType::Xor, fill_rule, subjects, clips)
}

/// Double-precision intersection
pub fn intersect_d(
    subjects: &PathsD,
    clips: &PathsD,
    fill_rule: FillRule,
    precision: i32,
) -> PathsD {
    boolean_op_d(ClipType::Intersection, fill_rule, subjects, clips, precision)
}

/// Double-precision union
pub fn union_d(subjects: &PathsD, clips: &PathsD, fill_rule: FillRule, precision: i32) -> PathsD {
    boolean_op_d(ClipType::Union, fill_rule, subjects, clips, precision)
}

/// Double-precision difference
pub fn difference_d(
    subjects: &PathsD,
    clips: &PathsD,
    fill_rule: FillRule,
    precision: i32,
) -> PathsD {
    boolean_op_d(ClipType::Difference, fill_rule, subjects, clips, precision)
}

/// Double-precision symmetric difference
pub fn xor_d(subjects: &PathsD, clips: &PathsD, fill_rule: FillRule, precision: i32) -> PathsD {
    boolean_op_d(ClipType::Xor, fill_rule, subjects, clips, precision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Point64;

    fn square(x: i64, y: i64, side: i64) -> Vec<Point64> {
        vec![
            Point64::new(x, y),
            Point64::new(x + side, y),
            Point64::new(x + side, y + side),
            Point64::new(x, y + side),
        ]
    }

    #[test]
    fn test_intersect_overlapping_squares() {
        let subjects = vec![square(0, 0, 10)];
        let clips = vec![square(5, 5, 10)];
        let result = intersect_64(&subjects, &clips, FillRule::NonZero);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].len(), 4);
    }

    #[test]
    fn test_union_overlapping_squares() {
        let subjects = vec![square(0, 0, 10)];
        let clips = vec![square(5, 5, 10)];
        let result = union_64(&subjects, &clips, FillRule::NonZero);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_difference_overlapping_squares() {
        let subjects = vec![square(0, 0, 10)];
        let clips = vec![square(5, 5, 10)];
        let result = difference_64(&subjects, &clips, FillRule::NonZero);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_xor_overlapping_squares() {
        let subjects = vec![square(0, 0, 10)];
        let clips = vec![square(5, 5, 10)];
        let result = xor_64(&subjects, &clips, FillRule::NonZero);
        // xor of two overlapping squares leaves two disjoint L-shaped pieces
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_disjoint_squares_intersection_is_empty() {
        let subjects = vec![square(0, 0, 10)];
        let clips = vec![square(100, 100, 10)];
        let result = intersect_64(&subjects, &clips, FillRule::NonZero);
        assert!(result.is_empty());
    }

    #[test]
    fn test_boolean_op_tree_reports_hole() {
        let outer = square(0, 0, 20);
        let hole = vec![
            Point64::new(15, 5),
            Point64::new(5, 5),
            Point64::new(5, 15),
            Point64::new(15, 15),
        ];
        let tree = boolean_op_tree_64(
            ClipType::Difference,
            FillRule::NonZero,
            &vec![outer],
            &vec![hole],
        );
        assert_eq!(tree.root().children().len(), 1);
    }
}
