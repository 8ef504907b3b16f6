//! Indexable sequences that can be rebuilt with one element replaced.
//!
//! [`Sequence`] is the capability behind [`Lens::index`](crate::Lens::index)
//! and [`Optional::index`](crate::Optional::index): index access exists only
//! on lenses whose focus implements it.
//!
//! Replacing an element copies the storage of the sequence once and clones
//! every other element. Elements held behind `Arc` are therefore shared with
//! the original sequence.

use std::collections::VecDeque;
use std::sync::Arc;

/// A sequence with positional read access and copy-on-write replacement.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use lenspath::Sequence;
///
/// let items: Arc<[i32]> = Arc::from(vec![1, 2, 3]);
/// assert_eq!(items.element(1), Some(&2));
///
/// let replaced = items.with_element(1, 20).unwrap();
/// assert_eq!(&*replaced, &[1, 20, 3]);
/// assert_eq!(&*items, &[1, 2, 3]);
///
/// assert_eq!(items.with_element(3, 0), None);
/// ```
pub trait Sequence: Sized {
    /// The element type.
    type Element;

    /// Number of elements.
    fn length(&self) -> usize;

    /// Returns `true` if the sequence holds no element.
    fn is_empty_sequence(&self) -> bool {
        self.length() == 0
    }

    /// The element at `index`, or `None` when out of range.
    fn element(&self, index: usize) -> Option<&Self::Element>;

    /// A copy of this sequence with the element at `index` replaced, or
    /// `None` when `index` is out of range.
    fn with_element(&self, index: usize, value: Self::Element) -> Option<Self>;
}

fn replaced<E: Clone>(elements: &[E], index: usize, value: E) -> Option<Vec<E>> {
    if index >= elements.len() {
        return None;
    }
    let mut copy = Vec::with_capacity(elements.len());
    copy.extend_from_slice(&elements[..index]);
    copy.push(value);
    copy.extend_from_slice(&elements[index + 1..]);
    Some(copy)
}

impl<E: Clone> Sequence for Vec<E> {
    type Element = E;

    fn length(&self) -> usize {
        self.as_slice().len()
    }

    fn element(&self, index: usize) -> Option<&E> {
        self.as_slice().get(index)
    }

    fn with_element(&self, index: usize, value: E) -> Option<Self> {
        replaced(self, index, value)
    }
}

impl<E: Clone, const N: usize> Sequence for [E; N] {
    type Element = E;

    fn length(&self) -> usize {
        N
    }

    fn element(&self, index: usize) -> Option<&E> {
        self.as_slice().get(index)
    }

    fn with_element(&self, index: usize, value: E) -> Option<Self> {
        if index >= N {
            return None;
        }
        let mut copy = self.clone();
        copy[index] = value;
        Some(copy)
    }
}

impl<E: Clone> Sequence for Arc<[E]> {
    type Element = E;

    fn length(&self) -> usize {
        self.len()
    }

    fn element(&self, index: usize) -> Option<&E> {
        self.get(index)
    }

    fn with_element(&self, index: usize, value: E) -> Option<Self> {
        replaced(self, index, value).map(Self::from)
    }
}

impl<E: Clone> Sequence for Arc<Vec<E>> {
    type Element = E;

    fn length(&self) -> usize {
        self.as_slice().len()
    }

    fn element(&self, index: usize) -> Option<&E> {
        self.as_slice().get(index)
    }

    fn with_element(&self, index: usize, value: E) -> Option<Self> {
        replaced(self, index, value).map(Self::new)
    }
}

impl<E: Clone> Sequence for VecDeque<E> {
    type Element = E;

    fn length(&self) -> usize {
        VecDeque::len(self)
    }

    fn element(&self, index: usize) -> Option<&E> {
        VecDeque::get(self, index)
    }

    fn with_element(&self, index: usize, value: E) -> Option<Self> {
        if index >= VecDeque::len(self) {
            return None;
        }
        Some(
            self.iter()
                .enumerate()
                .map(|(position, element)| {
                    if position == index {
                        value.clone()
                    } else {
                        element.clone()
                    }
                })
                .collect(),
        )
    }
}
