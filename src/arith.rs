//! Integer arithmetic primitives: gcd, lcm, and power-of-two tests.
//!
//! Everything here is total over `i64` and runs in time logarithmic in the
//! input magnitude.

/// Greatest common divisor, Euclidean algorithm on absolute values.
///
/// `gcd(a, 0) == |a|` and `gcd(0, 0) == 0`.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a as i64
}

/// Least common multiple. Returns 0 when either operand is 0.
pub fn lcm(a: i64, b: i64) -> i64 {
    if a == 0 || b == 0 {
        return 0;
    }
    // |a·b| / gcd, with the division first so the product stays small.
    (a / gcd(a, b) * b).abs()
}

/// Whether `n` is a positive integer power of two.
pub fn is_power_of_two(n: i64) -> bool {
    n > 0 && (n & (n - 1)) == 0
}
