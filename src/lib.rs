//! Intvec - a growable vector of integers
//!
//! A single contiguous buffer of `i32` with an explicit capacity and a
//! fixed growth policy: full buffers of one slot grow to two, larger ones
//! grow by half.
//!
//! ```rust
//! use intvec::IntVec;
//!
//! let mut v = IntVec::with_capacity(0).unwrap();
//! for i in 0..10 {
//!     v.push(i).unwrap();
//! }
//! let doubled = v.slice(0, 5).unwrap().map(|x| x * 2).unwrap();
//! assert_eq!(doubled.to_string(), "0 2 4 6 8");
//! ```

pub mod growth;
pub mod handle;
pub mod vector;

pub use vector::IntVec;

/// Error type for vector operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    AllocationFailed { requested: usize },
    IndexOutOfRange { index: usize, len: usize },
    EmptyRange { left: usize, right: usize },
}

impl std::fmt::Display for VectorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VectorError::AllocationFailed { requested } => {
                write!(f, "Allocation failed: could not reserve {} slots", requested)
            }
            VectorError::IndexOutOfRange { index, len } => {
                write!(f, "Index out of range: index {} but length is {}", index, len)
            }
            VectorError::EmptyRange { left, right } => {
                write!(f, "Empty range: left {} is not below right {}", left, right)
            }
        }
    }
}

impl std::error::Error for VectorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = VectorError::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(
            err.to_string(),
            "Index out of range: index 4 but length is 2"
        );

        let err = VectorError::EmptyRange { left: 3, right: 3 };
        assert!(err.to_string().contains("left 3"));
    }

    #[test]
    fn test_end_to_end() {
        let floor = IntVec::with_capacity(0).unwrap();
        assert_eq!(floor.capacity(), 1);

        let mut v = IntVec::with_capacity(10).unwrap();
        for i in 0..10 {
            v.push(i).unwrap();
        }
        assert_eq!(v.len(), 10);
        assert_eq!(v.capacity(), 10);

        v.push(11).unwrap();
        assert_eq!(v.len(), 11);
        assert_eq!(v.capacity(), 15);

        let slice = v.slice(0, 5).unwrap();
        assert_eq!(slice.as_slice(), &[0, 1, 2, 3, 4]);
        assert_eq!(slice.capacity(), 5);

        let mapped = slice.map(|x| x * 2).unwrap();
        assert_eq!(mapped.as_slice(), &[0, 2, 4, 6, 8]);
    }
}
