//! Module that contains the implementation for the iterators

use crate::*;

/// An iterator over entries of an [`IntervalMap`], ordered by the start of the range. A range is
/// always yielded before the ranges it contains.
pub struct Iter<'a, K, T> {
    pub(crate) map: &'a IntervalMap<K, T>,
    /// Stack of nodes to visit, and whether they are fully inside the query.
    pub(crate) nodes: Vec<(usize, bool)>,
    pub(crate) query: Option<K>,
}

impl<K: Clone, T> Clone for Iter<'_, K, T> {
    fn clone(&self) -> Self {
        Self {
            map: self.map,
            nodes: self.nodes.clone(),
            query: self.query.clone(),
        }
    }
}

impl<'a, K: Interval, T> Iterator for Iter<'a, K, T> {
    type Item = (&'a K, &'a T);

    fn next(&mut self) -> Option<(&'a K, &'a T)> {
        while let Some((cur, covered)) = self.nodes.pop() {
            let map = self.map;
            let node = &map.table[cur];
            match (covered, self.query.as_ref()) {
                (false, Some(query)) => {
                    let (lo, hi) = map.child_run(cur, query);
                    self.nodes.extend(
                        node.children[lo..hi]
                            .iter()
                            .rev()
                            .map(|c| (*c, query.contains(&map.table[*c].range))),
                    );
                }
                _ => {
                    self.nodes
                        .extend(node.children.iter().rev().map(|c| (*c, true)));
                    if let Some(v) = &node.value {
                        return Some((&node.range, v));
                    }
                }
            }
        }
        None
    }
}

/// An iterator over all ranges of an [`IntervalMap`].
pub struct Keys<'a, K, T> {
    pub(crate) inner: Iter<'a, K, T>,
}

impl<K: Clone, T> Clone for Keys<'_, K, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K: Interval, T> Iterator for Keys<'a, K, T> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(k, _)| k)
    }
}

/// An iterator over all values of an [`IntervalMap`], in the order of their ranges.
pub struct Values<'a, K, T> {
    pub(crate) inner: Iter<'a, K, T>,
}

impl<K: Clone, T> Clone for Values<'_, K, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K: Interval, T> Iterator for Values<'a, K, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().map(|(_, v)| v)
    }
}

/// An iterator over all owned entries of an [`IntervalMap`].
pub struct IntoIter<K, T> {
    map: IntervalMap<K, T>,
    nodes: Vec<usize>,
}

impl<K: Interval, T> Iterator for IntoIter<K, T> {
    type Item = (K, T);

    fn next(&mut self) -> Option<(K, T)> {
        while let Some(cur) = self.nodes.pop() {
            let node = &mut self.map.table[cur];
            self.nodes.extend(node.children.iter().rev());
            if let Some(v) = node.value.take() {
                return Some((node.range.clone(), v));
            }
        }
        None
    }
}

impl<K: Interval, T> IntoIterator for IntervalMap<K, T> {
    type Item = (K, T);

    type IntoIter = IntoIter<K, T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            map: self,
            nodes: vec![0],
        }
    }
}

impl<'a, K: Interval, T> IntoIterator for &'a IntervalMap<K, T> {
    type Item = (&'a K, &'a T);

    type IntoIter = Iter<'a, K, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Interval, T> IntervalMap<K, T> {
    /// An iterator visiting all entries, ordered by the start of their range. Ranges come before
    /// the ranges they contain.
    ///
    /// ```
    /// # use nested_interval_map::*;
    /// # use ipnet::Ipv4Net;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut map: IntervalMap<Ipv4Net, _> = IntervalMap::new();
    /// map.insert("192.168.1.0/24".parse()?, 3)?;
    /// map.insert("192.168.0.0/24".parse()?, 2)?;
    /// map.insert("192.168.0.0/22".parse()?, 1)?;
    /// assert_eq!(
    ///     map.iter().map(|(k, v)| (k.to_string(), *v)).collect::<Vec<_>>(),
    ///     vec![
    ///         ("192.168.0.0/22".to_string(), 1),
    ///         ("192.168.0.0/24".to_string(), 2),
    ///         ("192.168.1.0/24".to_string(), 3),
    ///     ]
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub fn iter(&self) -> Iter<'_, K, T> {
        Iter {
            map: self,
            nodes: vec![(0, true)],
            query: None,
        }
    }

    /// An iterator visiting all ranges, in the order of [`Self::iter`].
    pub fn keys(&self) -> Keys<'_, K, T> {
        Keys { inner: self.iter() }
    }

    /// An iterator visiting all values, in the order of [`Self::iter`].
    pub fn values(&self) -> Values<'_, K, T> {
        Values { inner: self.iter() }
    }
}
