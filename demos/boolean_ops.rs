//! Runs the four boolean operations over two overlapping squares and prints the
//! resulting paths, then repeats the difference as a PolyTree to show hole nesting.

use polyclip::{
    boolean_op_tree_64, difference_64, intersect_64, union_64, xor_64, FillRule, Path64, Paths64,
    Point64,
};

fn square(x: i64, y: i64, side: i64) -> Path64 {
    vec![
        Point64::new(x, y),
        Point64::new(x + side, y),
        Point64::new(x + side, y + side),
        Point64::new(x, y + side),
    ]
}

fn print_paths(label: &str, paths: &Paths64) {
    println!("{label}:");
    for path in paths {
        let pts: Vec<String> = path.iter().map(|p| format!("({}, {})", p.x, p.y)).collect();
        println!("  [{}]", pts.join(", "));
    }
}

fn main() {
    let subjects: Paths64 = vec![square(0, 0, 10)];
    let clips: Paths64 = vec![square(5, 5, 10)];

    print_paths("intersection", &intersect_64(&subjects, &clips, FillRule::NonZero));
    print_paths("union", &union_64(&subjects, &clips, FillRule::NonZero));
    print_paths("difference", &difference_64(&subjects, &clips, FillRule::NonZero));
    print_paths("xor", &xor_64(&subjects, &clips, FillRule::NonZero));

    let outer = square(0, 0, 20);
    let hole = vec![
        Point64::new(15, 5),
        Point64::new(5, 5),
        Point64::new(5, 15),
        Point64::new(15, 15),
    ];
    let tree = boolean_op_tree_64(
        polyclip::ClipType::Difference,
        FillRule::NonZero,
        &vec![outer],
        &vec![hole],
    );
    println!(
        "difference as polytree: root has {} child ring(s)",
        tree.root().children().len()
    );
}
