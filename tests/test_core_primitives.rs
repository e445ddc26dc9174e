use polyclip::{is_collinear, multiply_u64, Point64, Rect64};

#[test]
fn test_hi_calculation() {
    let cases: &[(u64, u64)] = &[
        (0, 0),
        (1, 1),
        (10, 20),
        (u64::MAX, 2),
        (u64::MAX, u64::MAX),
        (0xFFFF_FFFF, 0xFFFF_FFFF),
        (1_000_000_000, 1_000_000_000),
        (1u64 << 32, 1u64 << 32),
        (0xDEAD_BEEF, 0xCAFE_BABE),
        (1, u64::MAX),
        (u64::MAX, 0),
        (3_000_000_000, 3_000_000_000),
        (1u64 << 63, 2),
    ];

    for &(a, b) in cases {
        let expected = a as u128 * b as u128;
        let expected_hi = (expected >> 64) as u64;
        let expected_lo = expected as u64;

        let result = multiply_u64(a, b);
        assert_eq!(result.hi, expected_hi, "hi mismatch for {a} * {b}");
        assert_eq!(result.lo, expected_lo, "lo mismatch for {a} * {b}");
    }
}

#[test]
fn test_is_collinear_large_integers() {
    let big = 4_611_686_018_427_387_903i64; // i64::MAX >> 2, the MAX_COORD boundary
    let p1 = Point64::new(-big, -big);
    let p2 = Point64::new(0, 0);
    let p3 = Point64::new(big, big);
    assert!(is_collinear(p1, p2, p3));

    let p4 = Point64::new(big, big - 1);
    assert!(!is_collinear(p1, p2, p4));
}

#[test]
fn test_is_collinear_tiny_nudge() {
    // points differing by a single unit must not be misreported as collinear
    let p1 = Point64::new(0, 0);
    let p2 = Point64::new(1_000_000, 1_000_000);
    let p3 = Point64::new(2_000_000, 2_000_000 - 1);
    assert!(!is_collinear(p1, p2, p3));
}

#[test]
fn test_rect_op_plus() {
    let lhs = Rect64::new(0, 0, 10, 10);
    let rhs = Rect64::new(5, 5, 20, 20);
    let sum = lhs + rhs;
    assert_eq!(sum, Rect64::new(0, 0, 20, 20));

    let mut acc = lhs;
    acc += rhs;
    assert_eq!(acc, sum);
}

#[test]
fn test_rect_invalid_is_not_valid() {
    assert!(!Rect64::invalid().is_valid());
}
