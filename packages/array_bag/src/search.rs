//! Search and counting over the live slots of a bag.
//!
//! Both algorithms are defined recursively on `from_index`: a base case once `from_index`
//! walks off the end of the live slots, otherwise a look at one slot followed by the same
//! question for `from_index + 1`. The recursive call is always in tail position, so it is
//! written here as a loop that advances `from_index`. Rust does not promise to eliminate tail
//! calls and a bag can hold far more items than a thread stack has frames for, so the loop
//! keeps stack usage constant while producing exactly the same answers.

/// Returns the index of the first slot at or after `from_index` that equals `value`.
///
/// Returns `None` if `from_index` is at or past the end of `slots` or no later slot matches.
pub(crate) fn index_of<T: PartialEq>(slots: &[T], value: &T, from_index: usize) -> Option<usize> {
    let mut from_index = from_index;

    loop {
        // Base case: nothing left to look at.
        let slot = slots.get(from_index)?;

        if slot == value {
            return Some(from_index);
        }

        from_index = from_index
            .checked_add(1)
            .expect("from_index is a valid slot index so it is below isize::MAX and cannot overflow");
    }
}

/// Counts how many slots at or after `from_index` equal `value`.
///
/// Returns zero if `from_index` is at or past the end of `slots`.
pub(crate) fn count_frequency<T: PartialEq>(slots: &[T], value: &T, from_index: usize) -> usize {
    let mut remaining = slots.get(from_index..).unwrap_or_default();
    let mut frequency: usize = 0;

    while let [slot, rest @ ..] = remaining {
        if slot == value {
            frequency = frequency
                .checked_add(1)
                .expect("frequency is bounded by the slot count so it cannot overflow");
        }

        remaining = rest;
    }

    frequency
}
