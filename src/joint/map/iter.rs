//! Module that contains the implementation for the iterators

use crate::joint::JointInterval;

use super::JointIntervalMap;

/// An iterator over entries of a [`JointIntervalMap`]. Entries of the first family are yielded
/// before those of the second.
pub struct Iter<'a, K: JointInterval, T> {
    pub(crate) i1: Option<crate::map::Iter<'a, K::P1, T>>,
    pub(crate) i2: Option<crate::map::Iter<'a, K::P2, T>>,
}

impl<K: JointInterval, T> Default for Iter<'_, K, T> {
    fn default() -> Self {
        Self { i1: None, i2: None }
    }
}

impl<K: JointInterval, T> Clone for Iter<'_, K, T> {
    fn clone(&self) -> Self {
        Self {
            i1: self.i1.clone(),
            i2: self.i2.clone(),
        }
    }
}

impl<'a, K: JointInterval, T> Iterator for Iter<'a, K, T> {
    type Item = (K, &'a T);

    fn next(&mut self) -> Option<(K, &'a T)> {
        if let Some(i1) = self.i1.as_mut() {
            if let Some((k, t)) = i1.next() {
                return Some((K::from_p1(k), t));
            }
            self.i1 = None;
        }
        if let Some(i2) = self.i2.as_mut() {
            if let Some((k, t)) = i2.next() {
                return Some((K::from_p2(k), t));
            }
            self.i2 = None;
        }
        None
    }
}

/// An iterator over all ranges of a [`JointIntervalMap`].
pub struct Keys<'a, K: JointInterval, T> {
    pub(crate) inner: Iter<'a, K, T>,
}

impl<K: JointInterval, T> Iterator for Keys<'_, K, T> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.inner.next().map(|(k, _)| k)
    }
}

/// An iterator over all values of a [`JointIntervalMap`], in the order of their ranges.
pub struct Values<'a, K: JointInterval, T> {
    pub(crate) inner: Iter<'a, K, T>,
}

impl<'a, K: JointInterval, T> Iterator for Values<'a, K, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().map(|(_, v)| v)
    }
}

impl<'a, K: JointInterval, T> IntoIterator for &'a JointIntervalMap<K, T> {
    type Item = (K, &'a T);

    type IntoIter = Iter<'a, K, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            i1: Some(self.t1.iter()),
            i2: Some(self.t2.iter()),
        }
    }
}
