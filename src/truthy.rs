use std::iter::FusedIterator;

use crate::chain::Iter;

/// Loose "is there something here" test: zero, NaN, empty text, `false` and
/// `None` are all falsy.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

macro_rules! int_truthy {
    ($($t:ty),*) => {
        $(impl Truthy for $t {
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        })*
    };
}

int_truthy!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_truthy {
    ($($t:ty),*) => {
        $(impl Truthy for $t {
            fn is_truthy(&self) -> bool {
                *self != 0.0 && !self.is_nan()
            }
        })*
    };
}

float_truthy!(f32, f64);

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

/// Backward walk that treats a falsy value as the end of the chain.
///
/// Everything from the first falsy value (counting from the start node) onward
/// is never yielded, even though those nodes exist.
pub struct UntilFalsy<'a, T> {
    inner: Iter<'a, T>,
}

impl<'a, T: Truthy> Iter<'a, T> {
    pub fn until_falsy(self) -> UntilFalsy<'a, T> {
        UntilFalsy { inner: self }
    }
}

impl<'a, T: Truthy> Iterator for UntilFalsy<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.inner.next()?;
        if value.is_truthy() {
            Some(value)
        } else {
            self.inner.next = None;
            None
        }
    }
}

impl<'a, T: Truthy> FusedIterator for UntilFalsy<'a, T> {}


#[cfg(all(not(miri), test))]
mod proptests {
    use proptest::prelude::*;

    use crate::chain::{build, iter_back};

    proptest! {
        #[test]
        fn stops_at_first_zero_from_tail(values in prop::collection::vec(0u8..4, 0..48)) {
            let tail = build(values.clone());
            let walked: Vec<u8> = iter_back(tail.as_deref()).until_falsy().copied().collect();

            let expected: Vec<u8> = values.iter().rev().take_while(|v| **v != 0).copied().collect();
            prop_assert_eq!(walked, expected);
        }
    }
}
