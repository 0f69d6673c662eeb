use std::any::type_name;
use std::fmt;
use std::num::NonZero;

use rand::{Rng, rng};
use tracing::{debug, warn};

use crate::{ArrayBagBuilder, Error, Result, search};

/// A multiset of items stored in one contiguous buffer of unbounded size.
///
/// The bag keeps no ordering promises and allows any number of equal items. Items are stored
/// packed at the start of the buffer. When an insertion finds every slot occupied, the buffer
/// is replaced by one with twice the capacity and the existing items are moved over in order.
///
/// # Removal reorders items
///
/// Removing an item does not shift the items after it. Instead, the last item in the bag is
/// moved into the vacated slot. This makes removal O(1) after the item is found but means the
/// order seen by [`as_slice()`][1] and [`to_vec()`][2] changes as items are removed.
///
/// ```rust
/// use array_bag::ArrayBag;
///
/// let mut bag = ArrayBag::new();
/// bag.add('a');
/// bag.add('b');
/// bag.add('c');
///
/// bag.remove(&'a');
///
/// assert_eq!(bag.as_slice(), &['c', 'b']);
/// ```
///
/// # Resource usage
///
/// Capacity only ever grows. Neither removal nor [`clear()`][3] releases buffer memory; it
/// remains reserved for future insertions until the bag is dropped.
///
/// [1]: Self::as_slice
/// [2]: Self::to_vec
/// [3]: Self::clear
pub struct ArrayBag<T> {
    /// The live items, in slot order. The buffer behind this always has room for at
    /// least `capacity` items.
    items: Vec<T>,

    /// The logical capacity. We track this ourselves because the allocator is free to hand
    /// out more than we ask for, while the growth policy is defined in terms of what we asked.
    capacity: usize,
}

impl<T> ArrayBag<T> {
    pub(crate) fn new_inner(initial_capacity: NonZero<usize>) -> Self {
        Self {
            items: Vec::with_capacity(initial_capacity.get()),
            capacity: initial_capacity.get(),
        }
    }

    /// Creates a new empty [`ArrayBag`] with the default capacity of 10 items.
    ///
    /// # Example
    ///
    /// ```rust
    /// use array_bag::ArrayBag;
    ///
    /// let bag = ArrayBag::<u32>::new();
    ///
    /// assert!(bag.is_empty());
    /// assert_eq!(bag.capacity(), 10);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts building a new [`ArrayBag`].
    ///
    /// Use this when you want to customize the bag configuration beyond the defaults.
    pub fn builder() -> ArrayBagBuilder<T> {
        ArrayBagBuilder::new()
    }

    /// The number of items in the bag.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the bag holds no items.
    ///
    /// An empty bag may still be holding unused capacity.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The number of items the bag can hold before it needs to grow.
    ///
    /// This is the initial capacity multiplied by a power of two.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The items in the bag, in their current slot order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Adds an item to the bag, doubling the capacity first if the bag is full.
    ///
    /// Always returns `true`; growth means a bag is never too full to accept an item.
    ///
    /// # Panics
    ///
    /// Panics if doubling the capacity overflows `usize`. Allocation failure aborts the process
    /// like it does for standard library collections. Use [`try_add()`][1] to receive these
    /// conditions as errors instead.
    ///
    /// # Example
    ///
    /// ```rust
    /// use array_bag::ArrayBag;
    ///
    /// let mut bag = ArrayBag::new();
    ///
    /// for item in 0..11 {
    ///     assert!(bag.add(item));
    /// }
    ///
    /// assert_eq!(bag.len(), 11);
    /// assert_eq!(bag.capacity(), 20);
    /// ```
    ///
    /// [1]: Self::try_add
    pub fn add(&mut self, value: T) -> bool {
        if self.is_full() {
            let new_capacity = self.doubled_capacity().expect(
                "a buffer of this capacity already exists, so for any non-zero-sized item the doubled capacity fits in usize, and zero-sized items would need more insertions than could ever happen",
            );

            // The bag is full, so the room we need on top of the live items is the
            // current capacity once more.
            self.items.reserve_exact(self.capacity);
            self.record_growth(new_capacity);
        }

        self.items.push(value);
        true
    }

    /// Adds an item to the bag, returning an error instead of panicking or aborting if the
    /// bag is full and cannot grow.
    ///
    /// On error the item is dropped and the bag is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityOverflow`] if the doubled capacity does not fit in `usize` and
    /// [`Error::AllocationFailed`] if the allocator refuses the larger buffer.
    ///
    /// # Example
    ///
    /// ```rust
    /// use array_bag::ArrayBag;
    ///
    /// let mut bag = ArrayBag::new();
    /// bag.try_add("hello").unwrap();
    ///
    /// assert!(bag.contains(&"hello"));
    /// ```
    pub fn try_add(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            let new_capacity = self.doubled_capacity().ok_or(Error::CapacityOverflow {
                current_capacity: self.capacity,
            })?;

            self.items
                .try_reserve_exact(self.capacity)
                .map_err(|source| Error::AllocationFailed {
                    requested_capacity: new_capacity,
                    source,
                })?;

            self.record_growth(new_capacity);
        }

        self.items.push(value);
        Ok(())
    }

    /// Removes all items from the bag.
    ///
    /// The capacity is retained for reuse.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    fn doubled_capacity(&self) -> Option<usize> {
        self.capacity.checked_mul(2)
    }

    fn record_growth(&mut self, new_capacity: usize) {
        debug!(
            item_type = type_name::<T>(),
            old_capacity = self.capacity,
            new_capacity,
            "growing bag buffer"
        );

        self.capacity = new_capacity;
    }
}

impl<T: PartialEq> ArrayBag<T> {
    /// Removes one item equal to `value` from the bag.
    ///
    /// The first matching slot is vacated and the last item in the bag is moved into it.
    /// Returns `false` and leaves the bag untouched if no item is equal to `value`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use array_bag::ArrayBag;
    ///
    /// let mut bag = ArrayBag::new();
    /// bag.add(7);
    /// bag.add(7);
    ///
    /// assert!(bag.remove(&7));
    /// assert_eq!(bag.frequency_of(&7), 1);
    ///
    /// assert!(!bag.remove(&8));
    /// assert_eq!(bag.len(), 1);
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        let Some(index) = search::index_of(&self.items, value, 0) else {
            debug!(
                item_type = type_name::<T>(),
                len = self.items.len(),
                "cannot remove item: no equal item in bag"
            );
            return false;
        };

        drop(self.items.swap_remove(index));
        true
    }

    /// Whether at least one item in the bag is equal to `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        search::index_of(&self.items, value, 0).is_some()
    }

    /// The number of items in the bag that are equal to `value`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use array_bag::ArrayBag;
    ///
    /// let mut bag = ArrayBag::new();
    /// bag.add("x");
    /// bag.add("y");
    /// bag.add("x");
    ///
    /// assert_eq!(bag.frequency_of(&"x"), 2);
    /// assert_eq!(bag.frequency_of(&"z"), 0);
    /// ```
    #[must_use]
    pub fn frequency_of(&self, value: &T) -> usize {
        search::count_frequency(&self.items, value, 0)
    }
}

impl<T: Clone> ArrayBag<T> {
    /// Copies the items of the bag into a new `Vec`, in their current slot order.
    ///
    /// The result is a snapshot; later changes to the bag do not affect it.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T: Clone + PartialEq> ArrayBag<T> {
    /// Removes and returns a randomly chosen item, or `None` if the bag is empty.
    ///
    /// A slot is chosen uniformly at random and its value read. Then one item equal to that
    /// value is removed the same way [`remove()`][1] does it. When the bag holds several equal
    /// items, the slot that is vacated is therefore the first equal one, which may not be the
    /// slot that was drawn. For a multiset this is indistinguishable, but it matters for items
    /// that compare equal while still being distinguishable in other ways.
    ///
    /// # Example
    ///
    /// ```rust
    /// use array_bag::ArrayBag;
    ///
    /// let mut bag = ArrayBag::new();
    /// bag.add(1);
    /// bag.add(2);
    ///
    /// let grabbed = bag.try_grab_with(&mut rand::rng()).unwrap();
    ///
    /// assert!(grabbed == 1 || grabbed == 2);
    /// assert_eq!(bag.len(), 1);
    /// assert!(!bag.contains(&grabbed));
    /// ```
    ///
    /// [1]: Self::remove
    pub fn try_grab_with<R>(&mut self, rng: &mut R) -> Option<T>
    where
        R: Rng + ?Sized,
    {
        if self.is_empty() {
            return None;
        }

        let index = rng.random_range(0..self.items.len());

        let grabbed = self
            .items
            .get(index)
            .cloned()
            .expect("index was drawn from 0..len so it refers to a live item");

        let removed = self.remove(&grabbed);
        debug_assert!(removed, "the grabbed value was just read from the bag");

        Some(grabbed)
    }
}

impl<T: Clone + Default + PartialEq> ArrayBag<T> {
    /// Removes and returns a randomly chosen item, drawing randomness from the thread-local
    /// random number generator.
    ///
    /// If the bag is empty, a warning is logged and `T::default()` is returned. See
    /// [`try_grab_with()`][1] for how the item is chosen and removed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use array_bag::ArrayBag;
    ///
    /// let mut bag = ArrayBag::new();
    /// bag.add(5_u32);
    ///
    /// assert_eq!(bag.grab(), 5);
    ///
    /// // The bag is now empty, so we get the default value.
    /// assert_eq!(bag.grab(), 0);
    /// assert!(bag.is_empty());
    /// ```
    ///
    /// [1]: Self::try_grab_with
    pub fn grab(&mut self) -> T {
        self.grab_with(&mut rng())
    }

    /// Removes and returns a randomly chosen item, drawing randomness from `rng`.
    ///
    /// If the bag is empty, a warning is logged and `T::default()` is returned.
    pub fn grab_with<R>(&mut self, rng: &mut R) -> T
    where
        R: Rng + ?Sized,
    {
        self.try_grab_with(rng).unwrap_or_else(|| {
            warn!(
                item_type = type_name::<T>(),
                "cannot grab from an empty bag, returning the default value"
            );
            T::default()
        })
    }
}

impl<T> Default for ArrayBag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayBag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(type_name::<Self>())
            .field("len", &self.items.len())
            .field("capacity", &self.capacity)
            .field("items", &self.items)
            .finish()
    }
}
