//! Doubly-linked list backed by a slotmap arena.
//!
//! Nodes live in a `SlotMap` owned exclusively by the list; links are
//! generational keys into that arena, never references. This sidesteps
//! the cycle-breaking a prev/next pointer web would otherwise require:
//! `clear()` is a single arena drop. Indexed access walks from whichever
//! end is numerically closer, so `get`/`set`/`insert`/`remove_at` cost
//! O(min(index, len - index)); the boundary indices are O(1).

use core::fmt;
use slotmap::{DefaultKey, SlotMap};

/// Error returned by indexed list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// The index lies outside `[0, len)` for element access or
    /// `[0, len]` for insertion. Never clamped.
    IndexOutOfBounds { index: usize, len: usize },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for list of length {len}")
            }
        }
    }
}

impl std::error::Error for ListError {}

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<DefaultKey>,
    next: Option<DefaultKey>,
}

/// Doubly-linked list with indexed access from the nearer end.
pub struct LinkedList<T> {
    arena: SlotMap<DefaultKey, Node<T>>, // exclusive node storage
    head: Option<DefaultKey>,
    tail: Option<DefaultKey>,
    len: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList {
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
        let key = self.arena.insert(Node {
            value,
            prev: self.tail,
            next: None,
        });
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
                prev: None,
                next: self.head,
            });
            if let Some(head) = self.head {
                self.arena[head].prev = Some(key);
            } else {
                self.tail = Some(key);
            }
            self.head = Some(key);
            self.len += 1;
            return Ok(());
        }

        // Interior: splice before the node currently at `index`.
        let current = self.key_at(index);
        let before = self.arena[current].prev;
        let key = self.arena.insert(Node {
            value,
            prev: before,
            next: Some(current),
        });
        if let Some(before) = before {
            self.arena[before].next = Some(key);
        }
        self.arena[current].prev = Some(key);
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
        let key = self.key_at(index);
        let node = self
            .arena
            .remove(key)
            .expect("list invariant: key_at returns a live key");
        match node.prev {
            Some(prev) => self.arena[prev].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.arena[next].prev = node.prev,
            None => self.tail = node.prev,
        }
        self.len -= 1;
        Ok(node.value)
    }

    pub fn front(&self) -> Option<&T> {
        self.head.map(|key| &self.arena[key].value)
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.map(|key| &self.arena[key].value)
    }

    /// Drops every node. The arena owns them all, so no per-node
    /// unlinking is needed.
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

    /// Walks to the arena key of the node at `index`, from the closer
    /// end. Callers have already bounds-checked `index`, so the walk
    /// always lands on a live node.
    fn key_at(&self, index: usize) -> DefaultKey {
        debug_assert!(index < self.len);
        let key = if index <= self.len / 2 {
            let mut key = self.head;
            for _ in 0..index {
                key = key.and_then(|k| self.arena[k].next);
            }
            key
        } else {
            let mut key = self.tail;
            for _ in index + 1..self.len {
                key = key.and_then(|k| self.arena[k].prev);
            }
            key
        };
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

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
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

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
