use crate::{Error, Result};

/// Array with a fixed, resizable capacity
///
/// Pushing past `capacity` is an error rather than a reallocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vector<T> {
    data: Vec<T>,
    capacity: usize,
}

impl<T> Vector<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn at(&self, index: usize) -> Result<&T> {
        self.data.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    pub fn push(&mut self, item: T) -> Result<()> {
        self.ensure_room()?;
        self.data.push(item);
        Ok(())
    }

    /// Inserts before the element currently at `index`
    pub fn insert(&mut self, index: usize, item: T) -> Result<()> {
        self.check_index(index)?;
        self.ensure_room()?;
        self.data.insert(index, item);
        Ok(())
    }

    pub fn prepend(&mut self, item: T) -> Result<()> {
        self.ensure_room()?;
        self.data.insert(0, item);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T> {
        self.data.pop().ok_or(Error::EmptyContainer { op: "pop" })
    }

    pub fn delete(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        Ok(self.data.remove(index))
    }

    /// Removes every element equal to `item`, returning how many went
    pub fn remove(&mut self, item: &T) -> usize
    where
        T: PartialEq,
    {
        let before = self.len();
        self.data.retain(|x| x != item);
        before - self.len()
    }

    pub fn find(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.data.iter().position(|x| x == item)
    }

    /// Changes the capacity, dropping trailing elements that no longer fit
    pub fn resize(&mut self, new_capacity: usize) {
        self.data.truncate(new_capacity);
        self.capacity = new_capacity;
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    // [private]

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(())
    }

    fn ensure_room(&self) -> Result<()> {
        if self.len() >= self.capacity {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::Vector;
    use crate::Error;

    fn vector() -> Vector<i32> {
        let mut v = Vector::new(5);
        v.push(2).unwrap();
        v
    }

    #[test]
    fn is_empty() {
        let mut v = vector();
        assert_eq!(v.len(), 1);
        assert_eq!(v.capacity(), 5);
        assert_eq!(v.pop(), Ok(2));
        assert!(v.is_empty());
        assert_eq!(v.pop(), Err(Error::EmptyContainer { op: "pop" }));
        v.push(2).unwrap();
        assert!(!v.is_empty());
    }

    #[test]
    fn at() {
        let v = vector();
        assert_eq!(v.at(0), Ok(&2));
        assert_eq!(v.at(10), Err(Error::IndexOutOfRange { index: 10, len: 1 }));
    }

    #[test]
    fn insert() {
        let mut v = vector();
        v.insert(0, 10).unwrap();
        assert_eq!(v.at(0), Ok(&10));
        v.insert(0, 2).unwrap();
        assert_eq!(v.len(), 3);
        assert_eq!(v.iter().copied().collect::<Vec<_>>(), vec![2, 10, 2]);
        assert!(matches!(v.insert(10, 7), Err(Error::IndexOutOfRange { .. })));
    }

    #[test]
    fn prepend_and_delete() {
        let mut v = vector();
        v.prepend(50).unwrap();
        assert_eq!(v.at(0), Ok(&50));
        assert_eq!(v.len(), 2);
        assert_eq!(v.delete(0), Ok(50));
        assert_eq!(v.len(), 1);
        assert_eq!(v.at(0), Ok(&2));
        assert!(v.delete(1).is_err());
    }

    #[test]
    fn remove_all() {
        let mut v = vector();
        v.push(10).unwrap();
        v.push(10).unwrap();
        assert_eq!(v.len(), 3);
        assert_eq!(v.at(1), Ok(&10));
        assert_eq!(v.remove(&10), 2);
        assert_eq!(v.len(), 1);
        assert_eq!(v.remove(&10), 0);
    }

    #[test]
    fn find() {
        let v = vector();
        assert_eq!(v.find(&2), Some(0));
        assert_eq!(v.find(&10), None);
    }

    #[test]
    fn resize() {
        let mut v = vector();
        v.resize(10);
        assert_eq!(v.capacity(), 10);

        for i in 0..9 {
            v.push(i).unwrap();
        }
        assert_eq!(v.len(), 10);
        assert_eq!(v.push(10), Err(Error::CapacityExceeded { capacity: 10 }));
        assert_eq!(v.prepend(10), Err(Error::CapacityExceeded { capacity: 10 }));
        assert!(v.insert(0, 10).is_err());

        v.resize(1);
        assert_eq!(v.capacity(), 1);
        assert_eq!(v.len(), 1);
        v.resize(5);
        assert_eq!(v.capacity(), 5);
        assert_eq!(v.len(), 1);
        assert_eq!(v.at(0), Ok(&2));
    }
}
