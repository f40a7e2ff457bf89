/*!
 * Sequence Shapes
 * `Sequence` and friends for the std sequence collections
 */

use super::{Container, DoubleEnded, RandomAccess, Reservable, Sequence};
use std::cmp::Ordering;
use std::collections::{LinkedList, VecDeque};

// =============================================================================
// Vec
// =============================================================================

impl<T> Container for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        Vec::clear(self)
    }
}

impl<T> Sequence for Vec<T> {
    type Element = T;

    fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    fn push_back(&mut self, element: T) {
        self.push(element);
    }

    fn pop_back(&mut self) -> Option<T> {
        self.pop()
    }

    fn visit<F: FnMut(&T)>(&self, f: F) {
        self.iter().for_each(f);
    }

    fn position<F: FnMut(&T) -> bool>(&self, pred: F) -> Option<usize> {
        self.iter().position(pred)
    }

    fn insert_all_at<I: IntoIterator<Item = T>>(&mut self, index: usize, elements: I) {
        let incoming: Vec<T> = elements.into_iter().collect();
        self.splice(index..index, incoming);
    }

    fn remove_at(&mut self, index: usize) -> Option<T> {
        (index < Vec::len(self)).then(|| self.remove(index))
    }

    fn remove_where<F: FnMut(&T) -> bool>(&mut self, mut pred: F) -> usize {
        let before = Vec::len(self);
        self.retain(|element| !pred(element));
        before - Vec::len(self)
    }

    fn resize_with<F: FnMut() -> T>(&mut self, len: usize, fill: F) {
        Vec::resize_with(self, len, fill);
    }

    fn sort_by<F: FnMut(&T, &T) -> Ordering>(&mut self, compare: F) {
        self.sort_unstable_by(compare);
    }
}

impl<T> RandomAccess for Vec<T> {
    #[inline]
    fn element(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    #[inline]
    fn element_mut(&mut self, index: usize) -> Option<&mut T> {
        self.get_mut(index)
    }
}

impl<T> Reservable for Vec<T> {
    fn capacity(&self) -> usize {
        Vec::capacity(self)
    }

    fn reserve(&mut self, additional: usize) {
        Vec::reserve(self, additional);
    }

    fn shrink_to_fit(&mut self) {
        Vec::shrink_to_fit(self);
    }
}

// =============================================================================
// VecDeque
// =============================================================================

impl<T> Container for VecDeque<T> {
    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        VecDeque::clear(self)
    }
}

impl<T> Sequence for VecDeque<T> {
    type Element = T;

    fn first(&self) -> Option<&T> {
        self.front()
    }

    fn last(&self) -> Option<&T> {
        self.back()
    }

    fn push_back(&mut self, element: T) {
        VecDeque::push_back(self, element);
    }

    fn pop_back(&mut self) -> Option<T> {
        VecDeque::pop_back(self)
    }

    fn visit<F: FnMut(&T)>(&self, f: F) {
        self.iter().for_each(f);
    }

    fn position<F: FnMut(&T) -> bool>(&self, pred: F) -> Option<usize> {
        self.iter().position(pred)
    }

    fn insert_all_at<I: IntoIterator<Item = T>>(&mut self, index: usize, elements: I) {
        let mut incoming: VecDeque<T> = elements.into_iter().collect();
        let mut tail = self.split_off(index);
        self.append(&mut incoming);
        self.append(&mut tail);
    }

    fn remove_at(&mut self, index: usize) -> Option<T> {
        self.remove(index)
    }

    fn remove_where<F: FnMut(&T) -> bool>(&mut self, mut pred: F) -> usize {
        let before = VecDeque::len(self);
        self.retain(|element| !pred(element));
        before - VecDeque::len(self)
    }

    fn resize_with<F: FnMut() -> T>(&mut self, len: usize, fill: F) {
        VecDeque::resize_with(self, len, fill);
    }

    fn sort_by<F: FnMut(&T, &T) -> Ordering>(&mut self, compare: F) {
        self.make_contiguous().sort_unstable_by(compare);
    }
}

impl<T> DoubleEnded for VecDeque<T> {
    fn push_front(&mut self, element: T) {
        VecDeque::push_front(self, element);
    }

    fn pop_front(&mut self) -> Option<T> {
        VecDeque::pop_front(self)
    }
}

impl<T> RandomAccess for VecDeque<T> {
    #[inline]
    fn element(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    #[inline]
    fn element_mut(&mut self, index: usize) -> Option<&mut T> {
        self.get_mut(index)
    }
}

impl<T> Reservable for VecDeque<T> {
    fn capacity(&self) -> usize {
        VecDeque::capacity(self)
    }

    fn reserve(&mut self, additional: usize) {
        VecDeque::reserve(self, additional);
    }

    fn shrink_to_fit(&mut self) {
        VecDeque::shrink_to_fit(self);
    }
}

// =============================================================================
// LinkedList
// =============================================================================
//
// Positional edits split the list and splice it back together; stable std
// offers no cursor API.

impl<T> Container for LinkedList<T> {
    #[inline]
    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        LinkedList::clear(self)
    }
}

impl<T> Sequence for LinkedList<T> {
    type Element = T;

    fn first(&self) -> Option<&T> {
        self.front()
    }

    fn last(&self) -> Option<&T> {
        self.back()
    }

    fn push_back(&mut self, element: T) {
        LinkedList::push_back(self, element);
    }

    fn pop_back(&mut self) -> Option<T> {
        LinkedList::pop_back(self)
    }

    fn visit<F: FnMut(&T)>(&self, f: F) {
        self.iter().for_each(f);
    }

    fn position<F: FnMut(&T) -> bool>(&self, pred: F) -> Option<usize> {
        self.iter().position(pred)
    }

    fn insert_all_at<I: IntoIterator<Item = T>>(&mut self, index: usize, elements: I) {
        let mut incoming: LinkedList<T> = elements.into_iter().collect();
        let mut tail = self.split_off(index);
        self.append(&mut incoming);
        self.append(&mut tail);
    }

    fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= LinkedList::len(self) {
            return None;
        }
        let mut tail = self.split_off(index);
        let removed = LinkedList::pop_front(&mut tail);
        self.append(&mut tail);
        removed
    }

    fn remove_where<F: FnMut(&T) -> bool>(&mut self, mut pred: F) -> usize {
        let before = LinkedList::len(self);
        let mut scan = Rejoin {
            kept: LinkedList::new(),
            rest: &mut *self,
        };
        while let Some(front) = scan.rest.front() {
            let matched = pred(front);
            if let Some(element) = LinkedList::pop_front(&mut *scan.rest) {
                if !matched {
                    LinkedList::push_back(&mut scan.kept, element);
                }
            }
        }
        drop(scan);
        before - LinkedList::len(self)
    }

    fn resize_with<F: FnMut() -> T>(&mut self, len: usize, mut fill: F) {
        while LinkedList::len(self) > len {
            LinkedList::pop_back(self);
        }
        while LinkedList::len(self) < len {
            LinkedList::push_back(self, fill());
        }
    }

    fn sort_by<F: FnMut(&T, &T) -> Ordering>(&mut self, compare: F) {
        let elements: Vec<T> = std::mem::take(self).into_iter().collect();
        let mut scratch = Refill {
            elements,
            list: &mut *self,
        };
        scratch.elements.sort_unstable_by(compare);
    }
}

/// Scanned prefix of a list being filtered
///
/// Dropping it, on completion or unwind, puts `kept` back in front of the
/// unscanned remainder.
struct Rejoin<'a, T> {
    kept: LinkedList<T>,
    rest: &'a mut LinkedList<T>,
}

impl<T> Drop for Rejoin<'_, T> {
    fn drop(&mut self) {
        self.kept.append(&mut *self.rest);
        std::mem::swap(&mut *self.rest, &mut self.kept);
    }
}

/// Elements moved out of a list for sorting; always moved back on drop
struct Refill<'a, T> {
    elements: Vec<T>,
    list: &'a mut LinkedList<T>,
}

impl<T> Drop for Refill<'_, T> {
    fn drop(&mut self) {
        self.list.extend(self.elements.drain(..));
    }
}

impl<T> DoubleEnded for LinkedList<T> {
    fn push_front(&mut self, element: T) {
        LinkedList::push_front(self, element);
    }

    fn pop_front(&mut self) -> Option<T> {
        LinkedList::pop_front(self)
    }
}
