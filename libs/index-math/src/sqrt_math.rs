/// Integer square root by Newton's method.
///
/// Returns the largest `r` with `r * r <= x`, so that
/// `r^2 <= x < (r + 1)^2`. Monotonic in `x`.
pub fn sqrt(x: u128) -> u128 {
    if x < 2 {
        return x;
    }

    // Start above the root so the iteration decreases monotonically
    let shift = (128 - x.leading_zeros() + 1) / 2;
    let mut r = 1u128 << shift;
    loop {
        let next = (r + x / r) >> 1;
        if next >= r {
            return r;
        }
        r = next;
    }
}
