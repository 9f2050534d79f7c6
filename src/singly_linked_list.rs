//! Singly-linked list backed by a slotmap arena.
//!
//! Same arena ownership model as [`LinkedList`](crate::LinkedList), but
//! nodes carry only a `next` link, so every indexed operation walks from
//! the head: `get`/`set`/`insert`/`remove_at` are O(index). Appends stay
//! O(1) through the tail key. Useful where the per-node `prev` link is
//! not worth paying for, e.g. write-once chains.

use core::fmt;
use slotmap::{DefaultKey, SlotMap};

use crate::linked_list::ListError;

#[derive(Debug)]
struct Node<T> {
    value: T,
    next: Option<DefaultKey>,
}

/// Singly-linked list; indexed access always walks from the head.
pub struct SinglyLinkedList<T> {
    arena: SlotMap<DefaultKey, Node<T>>,
    head: Option<DefaultKey>,
    tail: Option<DefaultKey>,
    len: usize,
}

impl<T> SinglyLinkedList<T> {
    pub fn new() -> Self {
        SinglyLinkedList {
            arena: SlotMap::with_key(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends `value` at the tail. O(1).
    pub fn push(&mut self, value: T) {
        let key = self.arena.insert(Node { value, next: None });
        match self.tail {
            Some(tail) => self.arena[tail].next = Some(key),
            None => self.head = Some(key),
        }
        self.tail = Some(key);
        self.len += 1;
    }

    /// Inserts `value` before `index`; `index == len` appends.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        if index > self.len {
            return Err(ListError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        if index == self.len {
            self.push(value);
            return Ok(());
        }
        if index == 0 {
            let key = self.arena.insert(Node {
                value,
                next: self.head,
            });
            self.head = Some(key);
            self.len += 1;
            return Ok(());
        }

        let before = self.key_at(index - 1);
        let key = self.arena.insert(Node {
            value,
            next: self.arena[before].next,
        });
        self.arena[before].next = Some(key);
        self.len += 1;
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        self.check_element_index(index)?;
        Ok(&self.arena[self.key_at(index)].value)
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        self.check_element_index(index)?;
        let key = self.key_at(index);
        Ok(&mut self.arena[key].value)
    }

    /// Replaces the element at `index`, returning the previous value.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        let slot = self.get_mut(index)?;
        Ok(core::mem::replace(slot, value))
    }

    /// Removes and returns the element at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        self.check_element_index(index)?;
        let key;
        if index == 0 {
            key = self.key_at(0);
            self.head = self.arena[key].next;
            if self.head.is_none() {
                self.tail = None;
            }
        } else {
            let before = self.key_at(index - 1);
            key = self.arena[before]
                .next
                .expect("list invariant: every index below len reaches a node");
            self.arena[before].next = self.arena[key].next;
            if self.arena[key].next.is_none() {
                self.tail = Some(before);
            }
        }
        let node = self
            .arena
            .remove(key)
            .expect("list invariant: unlinked key is live");
        self.len -= 1;
        Ok(node.value)
    }

    pub fn front(&self) -> Option<&T> {
        self.head.map(|key| &self.arena[key].value)
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.map(|key| &self.arena[key].value)
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            next: self.head,
            remaining: self.len,
        }
    }

    fn key_at(&self, index: usize) -> DefaultKey {
        debug_assert!(index < self.len);
        let mut key = self.head;
        for _ in 0..index {
            key = key.and_then(|k| self.arena[k].next);
        }
        key.expect("list invariant: every index below len reaches a node")
    }

    fn check_element_index(&self, index: usize) -> Result<(), ListError> {
        if index >= self.len {
            return Err(ListError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        Ok(())
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        for value in iter {
            list.push(value);
        }
        list
    }
}

/// Head-to-tail iterator over list elements.
pub struct Iter<'a, T> {
    arena: &'a SlotMap<DefaultKey, Node<T>>,
    next: Option<DefaultKey>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.next?;
        let node = &self.arena[key];
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_tracking_across_removals() {
        let mut list: SinglyLinkedList<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(list.remove_at(2), Ok(3));
        assert_eq!(list.back(), Some(&2));
        list.push(4);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 4]);
        assert_eq!(list.remove_at(0), Ok(1));
        assert_eq!(list.front(), Some(&2));
    }

    #[test]
    fn out_of_range_is_an_error_not_a_clamp() {
        let mut list: SinglyLinkedList<i32> = [1].into_iter().collect();
        assert_eq!(
            list.get(1),
            Err(ListError::IndexOutOfBounds { index: 1, len: 1 })
        );
        assert_eq!(
            list.remove_at(1),
            Err(ListError::IndexOutOfBounds { index: 1, len: 1 })
        );
        assert_eq!(
            list.insert(2, 0),
            Err(ListError::IndexOutOfBounds { index: 2, len: 1 })
        );
        assert_eq!(list.len(), 1);
    }
}
