//! The growable integer vector
//!
//! `IntVec` keeps its live elements in `items` and tracks its capacity in
//! `cap`. The backing allocation is reserved for at least `cap` slots but
//! never touched beyond `len`, so growth only ever reserves memory.

use crate::VectorError;
use crate::growth::{MIN_CAPACITY, grown_capacity, initial_capacity};
use std::fmt;

/// A growable array of `i32` with an explicit capacity
pub struct IntVec {
    items: Vec<i32>,
    cap: usize,
}

/// Reserve room for `slots` elements, reporting failure instead of aborting
fn allocate(slots: usize) -> Result<Vec<i32>, VectorError> {
    let mut items = Vec::new();
    items
        .try_reserve_exact(slots)
        .map_err(|_| VectorError::AllocationFailed { requested: slots })?;
    Ok(items)
}

impl IntVec {
    /// Create an empty vector with room for `capacity` elements
    ///
    /// A capacity of zero is raised to one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use intvec::IntVec;
    ///
    /// let v = IntVec::with_capacity(0).unwrap();
    /// assert_eq!(v.capacity(), 1);
    /// assert!(v.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self, VectorError> {
        let cap = initial_capacity(capacity);
        let items = allocate(cap)?;
        Ok(Self { items, cap })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of allocated slots
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// The live elements, in order
    pub fn as_slice(&self) -> &[i32] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.items.iter()
    }

    fn check_index(&self, index: usize) -> Result<(), VectorError> {
        if index >= self.items.len() {
            return Err(VectorError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<i32, VectorError> {
        self.check_index(index)?;
        Ok(self.items[index])
    }

    /// Overwrite the element at `index`. Never changes length or capacity.
    pub fn set(&mut self, index: usize, value: i32) -> Result<(), VectorError> {
        self.check_index(index)?;
        self.items[index] = value;
        Ok(())
    }

    /// Append `value`, growing the buffer first if it is full
    ///
    /// If the larger buffer cannot be reserved the vector is left exactly as
    /// it was and `AllocationFailed` is returned.
    pub fn push(&mut self, value: i32) -> Result<(), VectorError> {
        if self.items.len() == self.cap {
            self.grow()?;
        }

        // Within the reserved allocation, so this never reallocates.
        self.items.push(value);
        Ok(())
    }

    fn grow(&mut self) -> Result<(), VectorError> {
        let target = grown_capacity(self.cap).ok_or(VectorError::AllocationFailed {
            requested: usize::MAX,
        })?;
        self.grow_to(target)
    }

    fn grow_to(&mut self, target: usize) -> Result<(), VectorError> {
        self.items
            .try_reserve_exact(target.saturating_sub(self.items.len()))
            .map_err(|_| VectorError::AllocationFailed { requested: target })?;
        self.cap = target;
        Ok(())
    }

    /// Remove the last element and return it
    ///
    /// Only the length shrinks; capacity is kept.
    pub fn pop(&mut self) -> Option<i32> {
        self.items.pop()
    }

    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), VectorError> {
        self.check_index(i)?;
        self.check_index(j)?;
        self.items.swap(i, j);
        Ok(())
    }

    /// Copy the elements in `left..right` into a new, independent vector
    ///
    /// The copy is sized exactly: its length and capacity are both
    /// `right - left`. Empty and inverted ranges are rejected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use intvec::IntVec;
    ///
    /// let values: &[i32] = &[0, 1, 2, 3, 4];
    /// let v = IntVec::try_from(values).unwrap();
    /// let s = v.slice(1, 3).unwrap();
    /// assert_eq!(s.as_slice(), &[1, 2]);
    /// assert_eq!(s.capacity(), 2);
    /// assert!(v.slice(2, 2).is_err());
    /// ```
    pub fn slice(&self, left: usize, right: usize) -> Result<Self, VectorError> {
        if left >= right {
            return Err(VectorError::EmptyRange { left, right });
        }
        if right > self.items.len() {
            return Err(VectorError::IndexOutOfRange {
                index: right - 1,
                len: self.items.len(),
            });
        }

        let cap = right - left;
        let mut items = allocate(cap)?;
        items.extend_from_slice(&self.items[left..right]);

        Ok(Self { items, cap })
    }

    /// Build a new vector by applying `transform` to each element in order
    ///
    /// The source is left untouched. The result is sized to its length (at
    /// least one slot).
    pub fn map<F>(&self, transform: F) -> Result<Self, VectorError>
    where
        F: FnMut(i32) -> i32,
    {
        let cap = initial_capacity(self.items.len());
        let mut items = allocate(cap)?;
        items.extend(self.items.iter().copied().map(transform));

        Ok(Self { items, cap })
    }
}

impl Default for IntVec {
    fn default() -> Self {
        Self {
            items: Vec::with_capacity(MIN_CAPACITY),
            cap: MIN_CAPACITY,
        }
    }
}

// Keeps the full reservation so pushes on the copy stay within `cap`.
impl Clone for IntVec {
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.cap);
        items.extend_from_slice(&self.items);

        Self {
            items,
            cap: self.cap,
        }
    }
}

impl TryFrom<&[i32]> for IntVec {
    type Error = VectorError;

    fn try_from(values: &[i32]) -> Result<Self, Self::Error> {
        let cap = initial_capacity(values.len());
        let mut items = allocate(cap)?;
        items.extend_from_slice(values);

        Ok(Self { items, cap })
    }
}

impl<'a> IntoIterator for &'a IntVec {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Capacity doesn't take part in equality.
impl PartialEq for IntVec {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl Eq for IntVec {}

impl fmt::Debug for IntVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntVec")
            .field("items", &self.items)
            .field("len", &self.items.len())
            .field("capacity", &self.cap)
            .finish()
    }
}

/// Space-separated listing of the elements, no trailing separator
impl fmt::Display for IntVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}
