//! Walks through the bag operations on a bag of integers, printing what happens.
//!
//! Logging is enabled at debug level so the buffer growth events and the empty-bag warning
//! emitted by the bag show up in the output.

use array_bag::ArrayBag;
use tracing::Level;

/// How many items of a bag to print before eliding the rest.
const DISPLAY_LIMIT: usize = 40;

fn display_bag(bag: &ArrayBag<u32>) {
    println!("The bag contains {} items:", bag.len());

    let shown = bag
        .as_slice()
        .iter()
        .take(DISPLAY_LIMIT)
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    println!("{shown}");

    let hidden = bag.len().saturating_sub(DISPLAY_LIMIT);
    if hidden > 0 {
        println!("... ({hidden} more items not shown)");
    }

    println!();
}

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    let mut bag = ArrayBag::new();
    println!("is_empty: {}", bag.is_empty());

    for item in 1..=45 {
        bag.add(item);
    }
    display_bag(&bag);
    println!("capacity: {}", bag.capacity());

    println!("contains(30): {}", bag.contains(&30));
    println!("frequency_of(1): {}", bag.frequency_of(&1));
    println!("remove(1): {}", bag.remove(&1));
    println!("frequency_of(1): {}", bag.frequency_of(&1));
    println!("remove(1) again: {}", bag.remove(&1));

    for _ in 0..2 {
        println!("Randomly grabbed item: {}", bag.grab());
    }
    display_bag(&bag);

    let snapshot = bag.to_vec();

    bag.clear();
    println!("After clear, is_empty: {}", bag.is_empty());
    println!("Snapshot taken before clear still holds {} items", snapshot.len());

    println!("Grabbing from the empty bag: {}", bag.grab());
}
