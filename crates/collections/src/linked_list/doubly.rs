//! Doubly linked list stored in an index addressed slab
//!
//! Nodes live in `nodes` and refer to their neighbours by slot index, so
//! `previous` never owns anything and the structure has no reference cycles.
//! Freed slots are recycled through `free_list`.

use std::fmt;
use std::iter::FusedIterator;

use super::{Sequence, check_index};
use crate::{Error, Result};

type NodeSlot<T> = Option<Node<T>>;

#[derive(Debug)]
struct Node<T> {
    data: T,
    previous: Option<usize>,
    next: Option<usize>,
}

impl<T> Node<T> {
    fn new(data: T) -> Self {
        Self {
            data,
            previous: None,
            next: None,
        }
    }
}

pub struct DoublyLinkedList<T> {
    nodes: Vec<NodeSlot<T>>,
    free_list: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DoublyLinkedList<T> {
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free_list: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Front to back
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Walks the chain from `head` and checks every back-reference
    ///
    /// Holds when `head` has no predecessor, `tail` has no successor,
    /// every `next.previous` points back at its node and the walk
    /// visits exactly `len` nodes ending on `tail`.
    pub fn check_links(&self) -> bool {
        if self.head.and_then(|h| self.node(h)).is_some_and(|n| n.previous.is_some()) {
            return false;
        }

        let mut visited = 0;
        let mut last = None;
        let mut current = self.head;
        while let Some(index) = current {
            let Some(node) = self.node(index) else {
                return false;
            };
            if let Some(next) = node.next {
                match self.node(next) {
                    Some(next_node) if next_node.previous == Some(index) => {}
                    _ => return false,
                }
            }
            visited += 1;
            if visited > self.len {
                return false;
            }
            last = Some(index);
            current = node.next;
        }

        visited == self.len && last == self.tail
    }

    // [private]

    fn node(&self, index: usize) -> Option<&Node<T>> {
        self.nodes.get(index).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        self.nodes.get_mut(index).and_then(Option::as_mut)
    }

    fn allocate_slot(&mut self, data: T) -> usize {
        if let Some(index) = self.free_list.pop() {
            self.nodes[index] = Some(Node::new(data));
            index
        } else {
            self.nodes.push(Some(Node::new(data)));
            self.nodes.len() - 1
        }
    }

    /// Slot index of the node at 1-based `index`,
    /// walking from whichever end is closer
    fn slot_at(&self, index: usize) -> Option<usize> {
        if index == 0 || index > self.len {
            return None;
        }

        if index <= self.len / 2 + 1 {
            let mut current = self.head;
            for _ in 1..index {
                current = self.node(current?)?.next;
            }
            current
        } else {
            let mut current = self.tail;
            for _ in index..self.len {
                current = self.node(current?)?.previous;
            }
            current
        }
    }

    /// Unlinks the node in slot `index` and releases the slot
    fn detach(&mut self, index: usize) -> Option<T> {
        let (previous, next) = match self.node(index) {
            Some(node) => (node.previous, node.next),
            None => return None,
        };

        match previous {
            Some(previous_index) => {
                if let Some(previous_node) = self.node_mut(previous_index) {
                    previous_node.next = next;
                }
            }
            None => self.head = next,
        }

        match next {
            Some(next_index) => {
                if let Some(next_node) = self.node_mut(next_index) {
                    next_node.previous = previous;
                }
            }
            None => self.tail = previous,
        }

        let node = self.nodes.get_mut(index)?.take()?;
        self.free_list.push(index);
        self.len -= 1;
        Some(node.data)
    }

    /// Links slot `index` in front of slot `before`, or at the back when `before` is `None`
    fn attach_before(&mut self, index: usize, before: Option<usize>) {
        let previous = match before {
            Some(b) => self.node(b).and_then(|n| n.previous),
            None => self.tail,
        };

        if let Some(node) = self.node_mut(index) {
            node.previous = previous;
            node.next = before;
        }

        match previous {
            Some(p) => {
                if let Some(previous_node) = self.node_mut(p) {
                    previous_node.next = Some(index);
                }
            }
            None => self.head = Some(index),
        }

        match before {
            Some(b) => {
                if let Some(before_node) = self.node_mut(b) {
                    before_node.previous = Some(index);
                }
            }
            None => self.tail = Some(index),
        }

        self.len += 1;
    }
}

impl<T> Sequence<T> for DoublyLinkedList<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn push_front(&mut self, data: T) {
        let index = self.allocate_slot(data);
        self.attach_before(index, self.head);
    }

    fn push_back(&mut self, data: T) {
        let index = self.allocate_slot(data);
        self.attach_before(index, None);
    }

    fn pop_front(&mut self) -> Option<T> {
        self.detach(self.head?)
    }

    fn pop_back(&mut self) -> Option<T> {
        self.detach(self.tail?)
    }

    fn front(&self) -> Option<&T> {
        self.node(self.head?).map(|n| &n.data)
    }

    fn back(&self) -> Option<&T> {
        self.node(self.tail?).map(|n| &n.data)
    }

    fn insert(&mut self, data: T, index: usize) -> Result<()> {
        check_index(index, self.len)?;

        let before = self.slot_at(index);
        let slot = self.allocate_slot(data);
        self.attach_before(slot, before);
        Ok(())
    }

    fn erase(&mut self, index: usize) -> Result<T> {
        check_index(index, self.len)?;

        let len = self.len;
        self.slot_at(index)
            .and_then(|slot| self.detach(slot))
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    fn value_at(&self, index: usize) -> Option<&T> {
        self.node(self.slot_at(index)?).map(|n| &n.data)
    }

    fn value_n_from_end(&self, n: usize) -> Option<&T> {
        self.iter().rev().nth(n.checked_sub(1)?)
    }

    /// Swaps the two links of every node, then the two ends
    fn reverse(&mut self) {
        for node in self.nodes.iter_mut().flatten() {
            std::mem::swap(&mut node.previous, &mut node.next);
        }
        std::mem::swap(&mut self.head, &mut self.tail);
    }

    fn remove_value(&mut self, data: &T) -> bool
    where
        T: PartialEq,
    {
        let mut current = self.head;
        while let Some(index) = current {
            let Some(node) = self.node(index) else {
                return false;
            };
            if node.data == *data {
                return self.detach(index).is_some();
            }
            current = node.next;
        }
        false
    }

    fn traverse<F: FnMut(usize, &mut T)>(&mut self, mut visitor: F) {
        let mut position = 1;
        let mut current = self.head;
        while let Some(node) = current.and_then(|index| self.node_mut(index)) {
            visitor(position, &mut node.data);
            current = node.next;
            position += 1;
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for item in iter {
            list.push_back(item);
        }
        list
    }
}

// [iterators]

pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back?)?;
        self.back = node.previous;
        self.remaining -= 1;
        Some(&node.data)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
