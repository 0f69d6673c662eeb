use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;
use std::num::NonZero;

use new_zealand::nz;

use crate::ArrayBag;

/// The capacity a bag starts with unless configured otherwise.
pub const DEFAULT_CAPACITY: NonZero<usize> = nz!(10);

/// Builder for creating an instance of [`ArrayBag`].
///
/// You only need to use this builder if you want to customize the bag configuration.
/// The default configuration used by [`ArrayBag::new()`][1] is sufficient for most use cases.
///
/// # Examples
///
/// ```
/// use new_zealand::nz;
/// use array_bag::ArrayBag;
///
/// let bag = ArrayBag::<u32>::builder().initial_capacity(nz!(64)).build();
///
/// assert_eq!(bag.capacity(), 64);
/// assert!(bag.is_empty());
/// ```
///
/// [1]: ArrayBag::new
#[must_use]
pub struct ArrayBagBuilder<T> {
    initial_capacity: NonZero<usize>,

    _item: PhantomData<T>,
}

impl<T> fmt::Debug for ArrayBagBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(type_name::<Self>())
            .field("item_type", &format_args!("{}", type_name::<T>()))
            .field("initial_capacity", &self.initial_capacity)
            .finish()
    }
}

impl<T> ArrayBagBuilder<T> {
    pub(crate) fn new() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            _item: PhantomData,
        }
    }

    /// Sets the number of slots the bag starts with.
    ///
    /// The bag doubles its capacity whenever an insertion finds every slot occupied, so the
    /// capacity is always this value multiplied by a power of two.
    ///
    /// # Examples
    ///
    /// ```
    /// use new_zealand::nz;
    /// use array_bag::ArrayBag;
    ///
    /// let mut bag = ArrayBag::<u32>::builder().initial_capacity(nz!(3)).build();
    ///
    /// for item in 0..4 {
    ///     bag.add(item);
    /// }
    ///
    /// assert_eq!(bag.capacity(), 6);
    /// ```
    pub fn initial_capacity(mut self, capacity: NonZero<usize>) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Builds the bag with the specified configuration.
    ///
    /// The buffer for the initial capacity is allocated immediately.
    #[must_use]
    pub fn build(self) -> ArrayBag<T> {
        ArrayBag::new_inner(self.initial_capacity)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn default_capacity_is_ten() {
        let bag = ArrayBagBuilder::<u32>::new().build();

        assert_eq!(bag.capacity(), 10);
        assert_eq!(DEFAULT_CAPACITY.get(), 10);
    }

    #[test]
    fn custom_capacity() {
        let bag = ArrayBagBuilder::<String>::new()
            .initial_capacity(nz!(1))
            .build();

        assert_eq!(bag.capacity(), 1);
        assert!(bag.is_empty());
    }

    #[test]
    fn last_capacity_wins() {
        let bag = ArrayBagBuilder::<u8>::new()
            .initial_capacity(nz!(5))
            .initial_capacity(nz!(7))
            .build();

        assert_eq!(bag.capacity(), 7);
    }

    #[test]
    fn debug_names_item_type() {
        let builder = ArrayBagBuilder::<u64>::new();

        let debug = format!("{builder:?}");

        assert!(debug.contains("u64"));
        assert!(debug.contains("10"));
    }
}
