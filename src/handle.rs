//! Nullable-handle API
//!
//! Thin wrappers for callers that carry an `Option<IntVec>` around and want
//! the flag-and-sentinel contract: an absent vector or a rejected argument
//! yields `false`, `None`, or a failed [`PopResult`] instead of an error.

use crate::IntVec;

/// Value reported by a failed [`pop`]
pub const POP_SENTINEL: i32 = -1;

/// Outcome of [`pop`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopResult {
    pub success: bool,
    pub value: i32,
}

impl From<Option<i32>> for PopResult {
    fn from(popped: Option<i32>) -> Self {
        match popped {
            Some(value) => PopResult {
                success: true,
                value,
            },
            None => PopResult {
                success: false,
                value: POP_SENTINEL,
            },
        }
    }
}

impl From<PopResult> for Option<i32> {
    fn from(result: PopResult) -> Self {
        result.success.then_some(result.value)
    }
}

/// `None` if the buffer cannot be allocated
pub fn construct(capacity: usize) -> Option<IntVec> {
    IntVec::with_capacity(capacity).ok()
}

/// Release a vector. Passing `None` does nothing.
pub fn destroy(vector: Option<IntVec>) {
    drop(vector);
}

pub fn push(vector: Option<&mut IntVec>, value: i32) -> bool {
    match vector {
        Some(v) => v.push(value).is_ok(),
        None => false,
    }
}

pub fn pop(vector: Option<&mut IntVec>) -> PopResult {
    vector.and_then(IntVec::pop).into()
}

pub fn slice(vector: Option<&IntVec>, left: usize, right: usize) -> Option<IntVec> {
    vector?.slice(left, right).ok()
}

/// Absent source maps to an absent result
pub fn map<F>(vector: Option<&IntVec>, transform: F) -> Option<IntVec>
where
    F: FnMut(i32) -> i32,
{
    vector?.map(transform).ok()
}

pub fn render(vector: Option<&IntVec>) -> Option<String> {
    vector.map(|v| v.to_string())
}
