use std::slice;

use crate::{Value, ValueError, ValueRepr, ValueResult};

/// Capacity of the first allocation.
pub const MIN_CAPACITY: usize = 8;

/// Next capacity for an array that is full at `capacity`.
#[inline]
pub fn grow_capacity(capacity: usize) -> usize {
    if capacity < MIN_CAPACITY {
        MIN_CAPACITY
    } else {
        capacity * 2
    }
}

/// Owning, growable sequence of values, used for constant pools and stacks.
///
/// `capacity` is tracked here rather than read back from the `Vec`, so
/// growth follows `grow_capacity` exactly no matter how the allocator rounds.
#[derive(Debug)]
pub struct ValueArray<V: ValueRepr = Value> {
    values: Vec<V>,
    capacity: usize,
}

// a derived clone would only allocate `len` slots, the copy has to own the
// full logical capacity so later appends keep going through `grow`
impl<V: ValueRepr> Clone for ValueArray<V> {
    fn clone(&self) -> Self {
        let mut values = Vec::new();
        if let Err(err) = values.try_reserve_exact(self.capacity) {
            log::error!("value array clone failed: {err}");
            panic!(
                "{}",
                ValueError::ResourceExhausted {
                    requested: self.capacity
                }
            );
        }
        values.extend_from_slice(&self.values);
        Self {
            values,
            capacity: self.capacity,
        }
    }
}

impl<V: ValueRepr> Default for ValueArray<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: ValueRepr> ValueArray<V> {
    /// Empty array, does not allocate.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: Vec::new(),
            capacity: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends `value`, growing the storage if the array is full.
    ///
    /// Running out of memory is fatal for the runtime, the process does not
    /// continue with a half grown array.
    pub fn append(&mut self, value: V) {
        if let Err(err) = self.try_append(value) {
            log::error!("value array growth failed: {err}");
            panic!("{err}");
        }
    }

    /// Appends `value`, reporting allocation failure instead of aborting.
    /// On error the array is left exactly as it was.
    pub fn try_append(&mut self, value: V) -> ValueResult<()> {
        if self.values.len() == self.capacity {
            self.grow()?;
        }
        self.values.push(value);
        Ok(())
    }

    /// Appends `value` and returns its index, as constant pools want.
    pub fn add_constant(&mut self, value: V) -> usize {
        self.append(value);
        self.values.len() - 1
    }

    fn grow(&mut self) -> ValueResult<()> {
        let old = self.capacity;
        let new = grow_capacity(old);
        // try_reserve_exact is a no-op if the Vec already holds enough
        self.values
            .try_reserve_exact(new - self.values.len())
            .map_err(|_| ValueError::ResourceExhausted { requested: new })?;
        log::trace!("value array grown {old} -> {new}");
        self.capacity = new;
        Ok(())
    }

    pub fn get(&self, index: usize) -> ValueResult<V> {
        self.values
            .get(index)
            .copied()
            .ok_or_else(|| self.out_of_bounds(index))
    }

    pub fn set(&mut self, index: usize, value: V) -> ValueResult<()> {
        let count = self.values.len();
        match self.values.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(ValueError::IndexOutOfBounds { index, count }),
        }
    }

    /// # Safety
    /// caller must make sure that `index < len()`
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> V {
        // SAFETY: caller guarantees index is in [0, count)
        unsafe { *self.values.get_unchecked(index) }
    }

    #[must_use]
    pub fn last(&self) -> Option<V> {
        self.values.last().copied()
    }

    /// Removes the last value. Capacity is kept.
    pub fn pop(&mut self) -> Option<V> {
        self.values.pop()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[V] {
        &self.values
    }

    pub fn iter(&self) -> slice::Iter<'_, V> {
        self.values.iter()
    }

    /// Frees the storage. The array is empty afterwards and every read fails
    /// with `IndexOutOfBounds`.
    pub fn release(&mut self) {
        log::trace!(
            "releasing value array (count {}, capacity {})",
            self.values.len(),
            self.capacity
        );
        self.values = Vec::new();
        self.capacity = 0;
    }

    #[inline]
    fn out_of_bounds(&self, index: usize) -> ValueError {
        ValueError::IndexOutOfBounds {
            index,
            count: self.values.len(),
        }
    }
}

impl<V: ValueRepr> Extend<V> for ValueArray<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<V: ValueRepr> FromIterator<V> for ValueArray<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<'a, V: ValueRepr> IntoIterator for &'a ValueArray<V> {
    type Item = &'a V;
    type IntoIter = slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
