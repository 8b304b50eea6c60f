//! Capacity policy for [`IntVec`](crate::IntVec)
//!
//! Kept free of allocation so the numbers can be checked on their own.

/// Smallest capacity a vector is ever created with
pub const MIN_CAPACITY: usize = 1;

/// Capacity used when a caller asks for `requested` slots
pub fn initial_capacity(requested: usize) -> usize {
    requested.max(MIN_CAPACITY)
}

/// Capacity a full buffer grows to
///
/// Tiny buffers jump straight to two slots, everything else grows by half
/// (rounded down). Returns `None` if the new capacity does not fit in `usize`.
///
/// # Example
///
/// ```rust
/// use intvec::growth::grown_capacity;
///
/// assert_eq!(grown_capacity(1), Some(2));
/// assert_eq!(grown_capacity(10), Some(15));
/// ```
pub fn grown_capacity(current: usize) -> Option<usize> {
    if current <= 1 {
        return Some(2);
    }

    current.checked_add(current / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_capacity_floor() {
        assert_eq!(initial_capacity(0), 1);
        assert_eq!(initial_capacity(1), 1);
        assert_eq!(initial_capacity(10), 10);
    }

    #[test]
    fn test_small_capacities_double() {
        assert_eq!(grown_capacity(0), Some(2));
        assert_eq!(grown_capacity(1), Some(2));
    }

    #[test]
    fn test_growth_rounds_down() {
        assert_eq!(grown_capacity(2), Some(3));
        assert_eq!(grown_capacity(3), Some(4));
        assert_eq!(grown_capacity(10), Some(15));
        assert_eq!(grown_capacity(15), Some(22));
    }

    #[test]
    fn test_growth_always_increases() {
        let mut cap = initial_capacity(0);
        for _ in 0..40 {
            let next = grown_capacity(cap).unwrap();
            assert!(next > cap);
            cap = next;
        }
    }

    #[test]
    fn test_growth_overflow() {
        assert_eq!(grown_capacity(usize::MAX), None);
        assert_eq!(grown_capacity(usize::MAX / 3 * 2 + 2), None);
    }
}
