mod doubly;

pub use doubly::DoublyLinkedList;

use log::trace;

use crate::{Error, Result, macros::boxnode};

/// Positional list operations shared by [`List`] and [`DoublyLinkedList`]
///
/// Positions are 1-based: `1` is the front, `len()` the back.
pub trait Sequence<T> {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push_front(&mut self, data: T);
    fn push_back(&mut self, data: T);
    fn pop_front(&mut self) -> Option<T>;
    fn pop_back(&mut self) -> Option<T>;
    fn front(&self) -> Option<&T>;
    fn back(&self) -> Option<&T>;

    /// Inserts `data` so that it ends up at `index`,
    /// shifting the node previously there one position back
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] unless `1 <= index <= len()`
    fn insert(&mut self, data: T, index: usize) -> Result<()>;

    /// Removes and returns the value at `index`
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] unless `1 <= index <= len()`
    fn erase(&mut self, index: usize) -> Result<T>;

    fn value_at(&self, index: usize) -> Option<&T>;

    /// `n == 1` is the back of the list
    fn value_n_from_end(&self, n: usize) -> Option<&T> {
        if n == 0 || n > self.len() {
            return None;
        }
        self.value_at(self.len() - n + 1)
    }

    fn reverse(&mut self);

    /// Removes the first value equal to `data`, returning whether there was one
    fn remove_value(&mut self, data: &T) -> bool
    where
        T: PartialEq;

    /// Calls `visitor` with the position and value of every node, front to back
    fn traverse<F: FnMut(usize, &mut T)>(&mut self, visitor: F);
}

pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index == 0 || index > len {
        trace!(target: "linked_list", "index {index} outside of 1..={len}");
        return Err(Error::IndexOutOfRange { index, len });
    }
    Ok(())
}

type Link<T> = Option<Box<Node<T>>>;

/// Singly linked list, each node owns the next one
pub struct List<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> List<T> {
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    // [adapters]

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            current: self.head.as_deref_mut(),
        }
    }

    // [private]

    /// The link that owns the node at 0-based `offset`,
    /// or the trailing `None` when `offset >= len`
    fn link_mut(&mut self, offset: usize) -> &mut Link<T> {
        let mut link = &mut self.head;
        for _ in 0..offset {
            match link {
                Some(node) => link = &mut node.next,
                None => break,
            }
        }
        link
    }
}

impl<T> Sequence<T> for List<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn push_front(&mut self, data: T) {
        self.head = Some(boxnode!(data, self.head.take()));
        self.len += 1;
    }

    fn push_back(&mut self, data: T) {
        let len = self.len;
        *self.link_mut(len) = Some(boxnode!(data));
        self.len += 1;
    }

    #[inline]
    fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|mut node| {
            self.head = node.next.take();
            self.len -= 1;
            node.data
        })
    }

    fn pop_back(&mut self) -> Option<T> {
        self.erase(self.len).ok()
    }

    fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.data)
    }

    fn back(&self) -> Option<&T> {
        self.iter().last()
    }

    fn insert(&mut self, data: T, index: usize) -> Result<()> {
        check_index(index, self.len)?;

        let link = self.link_mut(index - 1);
        *link = Some(boxnode!(data, link.take()));
        self.len += 1;
        Ok(())
    }

    fn erase(&mut self, index: usize) -> Result<T> {
        check_index(index, self.len)?;

        let link = self.link_mut(index - 1);
        let Some(mut node) = link.take() else {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        };
        *link = node.next.take();
        self.len -= 1;
        Ok(node.data)
    }

    fn value_at(&self, index: usize) -> Option<&T> {
        self.iter().nth(index.checked_sub(1)?)
    }

    fn reverse(&mut self) {
        let mut reversed = None;
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }
        self.head = reversed;
    }

    fn remove_value(&mut self, data: &T) -> bool
    where
        T: PartialEq,
    {
        match self.iter().position(|d| d == data) {
            Some(i) => self.erase(i + 1).is_ok(),
            None => false,
        }
    }

    fn traverse<F: FnMut(usize, &mut T)>(&mut self, mut visitor: F) {
        for (i, data) in self.iter_mut().enumerate() {
            visitor(i + 1, data);
        }
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
            // node goes out of scope here, calling drop
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for List<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        let mut list = List::new();
        for item in items.into_iter().rev() {
            list.push_front(item);
        }
        list
    }
}

impl<T> IntoIterator for List<T> {
    type Item = <IterOwn<T> as Iterator>::Item;
    type IntoIter = IterOwn<T>;

    fn into_iter(self) -> Self::IntoIter {
        IterOwn::new(self)
    }
}

pub struct Node<T> {
    pub(crate) data: T,
    pub(crate) next: Link<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{:?}>", self.data)
    }
}

// [iterators]

pub struct Iter<'a, T> {
    current: Option<&'a Node<T>>,
    len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        match self.current.take() {
            None => None,
            Some(node) => {
                self.current = node.next.as_deref();
                self.len -= 1;
                Some(&node.data)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> Iter<'a, T> {
    pub fn new(list: &'a List<T>) -> Self {
        Self {
            current: list.head.as_deref(),
            len: list.len,
        }
    }
}

pub struct IterMut<'a, T> {
    current: Option<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;
    fn next(&mut self) -> Option<Self::Item> {
        self.current.take().map(|node| {
            self.current = node.next.as_deref_mut();
            &mut node.data
        })
    }
}

pub struct IterOwn<T>(List<T>);

impl<T> Iterator for IterOwn<T> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> IterOwn<T> {
    pub fn new(list: List<T>) -> Self {
        Self(list)
    }
}

#[cfg(test)]
mod tests {
    use super::{DoublyLinkedList, List, Sequence};
    use crate::Error;

    fn collect<S: Sequence<i32>>(list: &mut S) -> Vec<i32> {
        let mut out = Vec::new();
        list.traverse(|_, data| out.push(*data));
        out
    }

    fn push<S: Sequence<i32> + Default>() {
        let mut list = S::default();
        list.push_back(2);
        assert_eq!(list.len(), 1);

        list.push_back(3);
        assert_eq!(list.len(), 2);
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.front(), Some(&2));

        list.push_front(4);
        assert_eq!(list.front(), Some(&4));
        assert_eq!(list.len(), 3);

        assert_eq!(list.pop_front(), Some(4));
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_back(), Some(2));
        assert!(list.is_empty());
    }

    fn empty<S: Sequence<i32> + Default>() {
        let mut list = S::default();
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.value_at(1), None);
        assert_eq!(list.value_n_from_end(1), None);
        assert!(!list.remove_value(&1));
        assert_eq!(list.insert(1, 1), Err(Error::IndexOutOfRange { index: 1, len: 0 }));
        assert_eq!(list.erase(1), Err(Error::IndexOutOfRange { index: 1, len: 0 }));
        list.reverse();
        assert_eq!(collect(&mut list), vec![]);
    }

    fn positional<S: Sequence<i32> + Default>() {
        let mut list = S::default();
        for i in 0..10 {
            list.push_back(i);
        }

        assert_eq!(list.value_at(1), Some(&0));
        assert_eq!(list.value_at(10), Some(&9));
        assert_eq!(list.value_at(0), None);
        assert_eq!(list.value_at(11), None);
        assert_eq!(list.value_n_from_end(1), Some(&9));
        assert_eq!(list.value_n_from_end(3), Some(&7));
        assert_eq!(list.value_n_from_end(10), Some(&0));
        assert_eq!(list.value_n_from_end(11), None);

        list.insert(100, 1).unwrap();
        list.insert(200, 5).unwrap();
        list.insert(300, 12).unwrap();
        assert_eq!(
            collect(&mut list),
            vec![100, 0, 1, 2, 200, 3, 4, 5, 6, 7, 8, 300, 9]
        );
        assert_eq!(
            list.insert(1, 14),
            Err(Error::IndexOutOfRange { index: 14, len: 13 })
        );
        assert!(list.insert(1, 0).is_err());

        assert_eq!(list.erase(13), Ok(9));
        assert_eq!(list.erase(1), Ok(100));
        assert_eq!(list.erase(4), Ok(200));
        assert_eq!(list.back(), Some(&300));
        assert_eq!(collect(&mut list), vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 300]);
        assert!(list.erase(11).is_err());
        assert_eq!(list.len(), 10);
    }

    fn remove_value<S: Sequence<i32> + Default>() {
        let mut list = S::default();
        list.push_back(2);
        list.insert(10, 1).unwrap();
        assert_eq!(list.front(), Some(&10));
        assert_eq!(list.back(), Some(&2));

        list.push_front(3);
        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Some(&3));

        assert!(list.remove_value(&10));
        assert_eq!(list.len(), 2);
        assert_eq!(list.value_at(2), Some(&2));
        assert_eq!(list.front(), Some(&3));

        list.push_back(3);
        assert!(list.remove_value(&3));
        assert_eq!(collect(&mut list), vec![2, 3]);
        assert!(list.remove_value(&3));
        assert!(!list.remove_value(&3));
        assert_eq!(list.back(), Some(&2));
        assert!(list.remove_value(&2));
        assert!(list.is_empty());
    }

    fn reverse<S: Sequence<i32> + Default>() {
        let mut list = S::default();
        for i in 0..10 {
            list.push_back(i);
        }
        assert_eq!(list.front(), Some(&0));
        assert_eq!(list.back(), Some(&9));

        list.reverse();
        assert_eq!(collect(&mut list), (0..10).rev().collect::<Vec<_>>());
        assert_eq!(list.front(), Some(&9));
        assert_eq!(list.back(), Some(&0));

        // mutations keep working on the reversed chain
        list.push_back(-1);
        list.push_front(10);
        assert_eq!(list.erase(2), Ok(9));
        assert_eq!(list.pop_back(), Some(-1));
        assert_eq!(list.len(), 10);
        assert_eq!(list.value_n_from_end(1), Some(&0));
    }

    fn traverse<S: Sequence<i32> + Default>() {
        let mut list = S::default();
        for i in 1..=5 {
            list.push_back(i * 10);
        }

        let mut positions = Vec::new();
        list.traverse(|i, data| {
            positions.push(i);
            *data += 1;
        });
        assert_eq!(positions, vec![1, 2, 3, 4, 5]);
        assert_eq!(collect(&mut list), vec![11, 21, 31, 41, 51]);
    }

    macro_rules! sequence_tests {
        ( $( $name: ident ),* ) => {
            mod singly {
                $(
                    #[test]
                    fn $name() {
                        super::$name::<super::List<i32>>();
                    }
                )*
            }

            mod doubly {
                $(
                    #[test]
                    fn $name() {
                        super::$name::<super::DoublyLinkedList<i32>>();
                    }
                )*
            }
        };
    }

    sequence_tests!(push, empty, positional, remove_value, reverse, traverse);

    #[test]
    fn iter() {
        let list: List<String> = (0..10).map(|i| format!("value{i}")).collect();

        for (i, e) in list.iter().enumerate() {
            assert_eq!(e, &format!("value{i}"));
        }

        assert_eq!(list.iter().len(), 10);

        for (i, e) in list.into_iter().enumerate() {
            assert_eq!(e, format!("value{i}"));
        }
    }

    #[test]
    fn long_list_drops() {
        let mut list = List::new();
        for i in 0..200_000 {
            list.push_front(i);
        }
        assert_eq!(list.len(), 200_000);
        dbg!(list.front());
    }
}
