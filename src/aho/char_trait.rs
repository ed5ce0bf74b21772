use std::fmt::Debug;

/// Trait for types that can serve as alphabet symbols of an automaton.
///
/// This trait is automatically implemented for any type satisfying all the
/// required bounds (`char`, `u8`, `u16`, `u32`, etc.).
///
/// - `Copy`: edges and text symbols are passed by value
/// - `Eq + Ord`: children are kept sorted by symbol
/// - `Debug`: debug printing of nodes
pub trait AhoChar: Copy + Eq + Ord + Debug {}

impl<T: Copy + Eq + Ord + Debug> AhoChar for T {}
