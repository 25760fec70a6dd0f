pub mod expression;
pub mod hashmap;
pub mod linked_list;
mod macros;
pub mod stack;
pub mod vector;

use thiserror::Error;

pub use hashmap::{HashTable, ProbeKey};
pub use linked_list::{DoublyLinkedList, List, Sequence};
pub use stack::{MinStack, Stack};
pub use vector::Vector;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Tried to read or remove from a container that holds nothing
    #[error("{op} on an empty container")]
    EmptyContainer { op: &'static str },

    /// Positional access outside of `1..=len` for lists, `0..len` for vectors
    #[error("Index out of range, got: {index}, len: {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Fixed capacity container is full
    #[error("Capacity of {capacity} reached")]
    CapacityExceeded { capacity: usize },

    /// Token in a postfix expression is neither an operator nor an integer
    #[error("Invalid token: {0}")]
    InvalidToken(String),
}
