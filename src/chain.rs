use std::cell::OnceCell;
use std::fmt;
use std::iter::FusedIterator;
use std::ptr;
use std::rc::{Rc, Weak};

type Link<T> = Option<Rc<Node<T>>>;

/// One link of the chain.
///
/// The chain is handed out by its tail, so `prev` is the owning direction and
/// `next` is a weak back-reference that the builder fills in once.
pub struct Node<T> {
    value: T,
    prev: Link<T>,
    next: OnceCell<Weak<Node<T>>>,
}

pub struct Iter<'a, T> {
    pub(crate) next: Option<&'a Node<T>>,
}

/// Links `values` in order and returns the node built from the last one.
///
/// Returns `None` for an empty input.
pub fn build<T, I>(values: I) -> Option<Rc<Node<T>>>
where
    I: IntoIterator<Item = T>,
{
    let mut prev: Link<T> = None;

    for value in values {
        let node = Rc::new(Node {
            value,
            prev: prev.take(),
            next: OnceCell::new(),
        });

        if let Some(ref before) = node.prev {
            let patched = before.next.set(Rc::downgrade(&node));
            debug_assert!(patched.is_ok());
        }

        prev = Some(node);
    }

    prev
}

/// Walks from `start` towards the head. An absent start is already exhausted.
pub fn iter_back<T>(start: Option<&Node<T>>) -> Iter<'_, T> {
    Iter::new(start)
}

impl<T> Node<T> {
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn prev(&self) -> Option<&Node<T>> {
        self.prev.as_deref()
    }

    /// The node built right after this one, if it is still alive.
    ///
    /// Successors are owned by whoever holds the later part of the chain, so
    /// this is `None` for the tail and for a node whose successors have all
    /// been released.
    pub fn next(&self) -> Option<Rc<Node<T>>> {
        self.next.get().and_then(Weak::upgrade)
    }

    pub fn is_head(&self) -> bool {
        self.prev.is_none()
    }

    pub fn is_tail(&self) -> bool {
        self.next.get().is_none()
    }

    /// Identity, not value equality.
    pub fn ptr_eq(a: &Node<T>, b: &Node<T>) -> bool {
        ptr::eq(a, b)
    }

    pub fn iter_back(&self) -> Iter<'_, T> {
        Iter::new(Some(self))
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut cur_link = self.prev.take();
        while let Some(node) = cur_link {
            // Stop at a predecessor someone else still holds.
            cur_link = match Rc::try_unwrap(node) {
                Ok(mut node) => node.prev.take(),
                Err(_) => None,
            };
        }
    }
}

impl<'a, T> Iter<'a, T> {
    pub fn new(start: Option<&'a Node<T>>) -> Self {
        Iter { next: start }
    }
}

impl<'a, T> Default for Iter<'a, T> {
    fn default() -> Self {
        Iter { next: None }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.prev();
            &node.value
        })
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}


// proptest doesn't run under miri with default config
#[cfg(all(not(miri), test))]
mod proptests {
    use proptest::prelude::*;

    use super::{build, iter_back};

    proptest! {
        #[test]
        fn back_iter_is_reverse(values in prop::collection::vec(any::<i32>(), 0..64)) {
            let tail = build(values.iter().copied());
            let walked: Vec<i32> = iter_back(tail.as_deref()).copied().collect();

            let mut expected = values.clone();
            expected.reverse();
            prop_assert_eq!(walked, expected);
        }

        #[test]
        fn length_matches(values in prop::collection::vec(any::<u8>(), 0..64)) {
            let tail = build(values.clone());
            prop_assert_eq!(tail.is_none(), values.is_empty());
            prop_assert_eq!(iter_back(tail.as_deref()).count(), values.len());
        }

        #[test]
        fn ends_are_unlinked(values in prop::collection::vec(any::<i64>(), 1..32)) {
            let tail = build(values.clone()).unwrap();
            prop_assert!(tail.is_tail());
            prop_assert_eq!(tail.value(), values.last().unwrap());

            let mut head = &*tail;
            while let Some(before) = head.prev() {
                head = before;
            }
            prop_assert_eq!(head.value(), &values[0]);
        }
    }
}
