//! Small recursive algorithms and searches over slices

mod backtracking;
mod binary_search;

pub use backtracking::{Move, move_tower, palindrome, possible_comb, quick_sort};
pub use binary_search::{binary_search_with_loop, search};
