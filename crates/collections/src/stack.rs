use crate::{Error, Result};

/// LIFO container backed by a `Vec`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Creates a new, empty stack
    ///
    /// # Note
    ///
    /// This is a `const` function since it does not allocate
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Returns the most recently pushed item
    pub fn peek(&self) -> Result<&T> {
        self.items
            .last()
            .ok_or(Error::EmptyContainer { op: "peek" })
    }

    /// Removes and returns the most recently pushed item
    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(Error::EmptyContainer { op: "pop" })
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterates from the bottom of the stack to the top
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Consumes the stack, bottom item first
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// Stack that answers "what is the smallest item held" in O(1)
///
/// Every push also records the running minimum on `min_bucket`, so
/// `min_bucket[i]` is the minimum of `items[0..=i]`.
///
/// Unlike [`Stack`], reading or popping an empty `MinStack` is not an error,
/// it simply yields `None`.
#[derive(Debug, Clone)]
pub struct MinStack<T> {
    items: Stack<T>,
    min_bucket: Stack<T>,
}

impl<T: PartialOrd + Clone> Default for MinStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialOrd + Clone> MinStack<T> {
    pub const fn new() -> Self {
        Self {
            items: Stack::new(),
            min_bucket: Stack::new(),
        }
    }

    pub fn push(&mut self, item: T) {
        let min = match self.min_bucket.peek() {
            Ok(top) if *top < item => top.clone(),
            _ => item.clone(),
        };
        self.items.push(item);
        self.min_bucket.push(min);
    }

    /// Pops the top item, doing nothing on an empty stack
    pub fn pop(&mut self) -> Option<T> {
        let item = self.items.pop().ok();
        // both stacks always have the same depth, this only keeps them in lockstep
        let _ = self.min_bucket.pop();
        item
    }

    pub fn get_min(&self) -> Option<&T> {
        self.min_bucket.peek().ok()
    }

    pub fn top(&self) -> Option<&T> {
        self.items.peek().ok()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
