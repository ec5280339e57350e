//! Implementation of the nested interval map.

use crate::{Error, Interval};

mod iter;

pub use iter::*;

/// Map from intervals to values, implemented as a tree of nested intervals. Every node in the
/// tree contains all of its descendants, and the children of a node are pairwise disjoint and
/// sorted by their start. The root is always [`Interval::universe`].
///
/// Two intervals that partially overlap (without one containing the other) can never be stored in
/// the same map. [`IntervalMap::insert`] rejects such an interval with
/// [`Error::ConflictingRange`].
#[derive(Clone)]
pub struct IntervalMap<K, T> {
    pub(crate) table: Vec<Node<K, T>>,
    free: Vec<usize>,
    count: usize,
}

impl<K, T> Default for IntervalMap<K, T>
where
    K: Interval,
{
    fn default() -> Self {
        Self {
            table: vec![Node::new(K::universe(), None, Vec::new())],
            free: Vec::new(),
            count: 0,
        }
    }
}

impl<K, T> IntervalMap<K, T>
where
    K: Interval,
{
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a map from an iterator of entries. Fails on the first entry that conflicts with an
    /// earlier one. Later entries with the same bounds replace earlier ones.
    ///
    /// ```
    /// # use nested_interval_map::*;
    /// # use ipnet::Ipv4Net;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let nets: Vec<(Ipv4Net, _)> = vec![
    ///     ("10.0.0.0/8".parse()?, 1),
    ///     ("10.0.0.0/16".parse()?, 2),
    /// ];
    /// let map = IntervalMap::try_from_iter(nets)?;
    /// assert_eq!(map.len(), 2);
    ///
    /// let bad: Vec<((u32, u32), _)> = vec![((0, 10), 1), ((5, 15), 2)];
    /// assert!(IntervalMap::try_from_iter(bad).is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn try_from_iter<I>(iter: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (K, T)>,
    {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v)?;
        }
        Ok(map)
    }

    /// Returns the number of entries stored in the map.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Get the value stored for exactly `range`. Returns `None` if the range is not present, or if
    /// it is only present as a node without a value.
    ///
    /// ```
    /// # use nested_interval_map::*;
    /// # use ipnet::Ipv4Net;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut map: IntervalMap<Ipv4Net, _> = IntervalMap::new();
    /// map.insert("192.168.1.0/24".parse()?, 1)?;
    /// assert_eq!(map.find_exact(&"192.168.1.0/24".parse()?), Some(&1));
    /// assert_eq!(map.find_exact(&"192.168.2.0/24".parse()?), None);
    /// assert_eq!(map.find_exact(&"192.168.0.0/23".parse()?), None);
    /// assert_eq!(map.find_exact(&"192.168.1.128/25".parse()?), None);
    /// # Ok(())
    /// # }
    /// ```
    pub fn find_exact(&self, range: &K) -> Option<&T> {
        let mut idx = 0;
        loop {
            match self.get_direction(idx, range) {
                Direction::Reached => return self.table[idx].value.as_ref(),
                Direction::Enter { next, .. } => idx = next,
                Direction::Missing => return None,
            }
        }
    }

    /// Get a mutable reference to the value stored for exactly `range`.
    ///
    /// ```
    /// # use nested_interval_map::*;
    /// # use ipnet::Ipv4Net;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut map: IntervalMap<Ipv4Net, _> = IntervalMap::new();
    /// let net = "192.168.1.0/24".parse()?;
    /// map.insert(net, 1)?;
    /// *map.find_exact_mut(&net).unwrap() += 1;
    /// assert_eq!(map.find_exact(&net), Some(&2));
    /// # Ok(())
    /// # }
    /// ```
    pub fn find_exact_mut(&mut self, range: &K) -> Option<&mut T> {
        let mut idx = 0;
        loop {
            match self.get_direction(idx, range) {
                Direction::Reached => return self.table[idx].value.as_mut(),
                Direction::Enter { next, .. } => idx = next,
                Direction::Missing => return None,
            }
        }
    }

    /// Check if a value is stored for exactly `range`.
    pub fn contains_key(&self, range: &K) -> bool {
        self.find_exact(range).is_some()
    }

    /// Get the value of `range` itself if it is present, or otherwise the value of the smallest
    /// range in the map that contains `range`.
    ///
    /// ```
    /// # use nested_interval_map::*;
    /// # use ipnet::Ipv4Net;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut map: IntervalMap<Ipv4Net, _> = IntervalMap::new();
    /// map.insert("10.0.0.0/16".parse()?, "a")?;
    /// map.insert("10.0.0.0/24".parse()?, "b")?;
    /// assert_eq!(map.find_exact_or_first_less_specific(&"10.0.0.0/19".parse()?), Some(&"a"));
    /// assert_eq!(map.find_exact_or_first_less_specific(&"10.0.0.0/24".parse()?), Some(&"b"));
    /// assert_eq!(map.find_exact_or_first_less_specific(&"10.0.0.7/32".parse()?), Some(&"b"));
    /// assert_eq!(map.find_exact_or_first_less_specific(&"10.0.0.0/8".parse()?), None);
    /// # Ok(())
    /// # }
    /// ```
    pub fn find_exact_or_first_less_specific(&self, range: &K) -> Option<&T> {
        let mut idx = 0;
        let mut best_match: Option<&T> = None;
        loop {
            best_match = self.table[idx].value.as_ref().or(best_match);
            match self.get_direction(idx, range) {
                Direction::Enter { next, .. } => idx = next,
                _ => return best_match,
            }
        }
    }

    /// Get the value of the smallest range in the map that properly contains `range`. The value of
    /// `range` itself is never returned.
    ///
    /// ```
    /// # use nested_interval_map::*;
    /// # use ipnet::Ipv4Net;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut map: IntervalMap<Ipv4Net, _> = IntervalMap::new();
    /// map.insert("10.0.0.0/16".parse()?, "a")?;
    /// map.insert("10.0.0.0/24".parse()?, "b")?;
    /// assert_eq!(map.find_first_less_specific(&"10.0.0.0/24".parse()?), Some(&"a"));
    /// assert_eq!(map.find_first_less_specific(&"10.0.0.0/25".parse()?), Some(&"b"));
    /// assert_eq!(map.find_first_less_specific(&"10.0.0.0/16".parse()?), None);
    /// # Ok(())
    /// # }
    /// ```
    pub fn find_first_less_specific(&self, range: &K) -> Option<&T> {
        let (ancestors, _) = self.path(range);
        ancestors
            .into_iter()
            .rev()
            .find_map(|idx| self.table[idx].value.as_ref())
    }

    /// Get the values of all ranges in the map that properly contain `range`, starting with the
    /// broadest one. The value of `range` itself is not included.
    ///
    /// ```
    /// # use nested_interval_map::*;
    /// # use ipnet::Ipv4Net;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut map: IntervalMap<Ipv4Net, _> = IntervalMap::new();
    /// map.insert("10.0.0.0/8".parse()?, "a")?;
    /// map.insert("10.0.0.0/16".parse()?, "b")?;
    /// map.insert("10.0.0.0/20".parse()?, "c")?;
    /// map.insert("10.1.0.0/16".parse()?, "d")?;
    /// assert_eq!(map.find_all_less_specific(&"10.0.0.0/20".parse()?), vec![&"a", &"b"]);
    /// assert_eq!(map.find_all_less_specific(&"10.0.0.0/24".parse()?), vec![&"a", &"b", &"c"]);
    /// assert!(map.find_all_less_specific(&"11.0.0.0/24".parse()?).is_empty());
    /// # Ok(())
    /// # }
    /// ```
    pub fn find_all_less_specific(&self, range: &K) -> Vec<&T> {
        let (ancestors, _) = self.path(range);
        ancestors
            .into_iter()
            .filter_map(|idx| self.table[idx].value.as_ref())
            .collect()
    }

    /// Same as [`Self::find_all_less_specific`], but the value of `range` itself (if present) is
    /// appended at the end.
    pub fn find_exact_and_all_less_specific(&self, range: &K) -> Vec<&T> {
        let (ancestors, exact) = self.path(range);
        ancestors
            .into_iter()
            .chain(exact)
            .filter_map(|idx| self.table[idx].value.as_ref())
            .collect()
    }

    /// Get the values of all ranges in the map that are contained in `range`, including `range`
    /// itself. Values are ordered by the start of their range, and a range always comes before
    /// the ranges it contains.
    ///
    /// `range` does not need to be present in the map, and may even partially overlap ranges in
    /// the map; those are skipped, but their descendants inside `range` are returned.
    ///
    /// ```
    /// # use nested_interval_map::*;
    /// # use ipnet::Ipv4Net;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut map: IntervalMap<Ipv4Net, _> = IntervalMap::new();
    /// map.insert("10.0.0.0/8".parse()?, 1)?;
    /// map.insert("10.0.0.0/16".parse()?, 2)?;
    /// map.insert("10.1.0.0/16".parse()?, 3)?;
    /// map.insert("10.1.1.0/24".parse()?, 4)?;
    /// map.insert("11.0.0.0/8".parse()?, 5)?;
    /// assert_eq!(map.find_all_more_specific(&"0.0.0.0/0".parse()?), vec![&1, &2, &3, &4, &5]);
    /// assert_eq!(map.find_all_more_specific(&"10.0.0.0/8".parse()?), vec![&1, &2, &3, &4]);
    /// assert_eq!(map.find_all_more_specific(&"10.0.0.0/15".parse()?), vec![&2, &3, &4]);
    /// assert_eq!(map.find_all_more_specific(&"10.1.1.0/25".parse()?), Vec::<&i32>::new());
    /// # Ok(())
    /// # }
    /// ```
    pub fn find_all_more_specific(&self, range: &K) -> Vec<&T> {
        self.more_specific(range).map(|(_, v)| v).collect()
    }

    /// Iterate over all entries whose range is contained in `range` (including `range` itself), in
    /// the same order as [`Self::find_all_more_specific`].
    ///
    /// ```
    /// # use nested_interval_map::*;
    /// # use ipnet::Ipv4Net;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut map: IntervalMap<Ipv4Net, _> = IntervalMap::new();
    /// map.insert("10.0.0.0/16".parse()?, 1)?;
    /// map.insert("10.1.0.0/16".parse()?, 2)?;
    /// map.insert("10.2.0.0/16".parse()?, 3)?;
    /// let nets: Vec<String> = map
    ///     .more_specific(&"10.0.0.0/15".parse()?)
    ///     .map(|(k, _)| k.to_string())
    ///     .collect();
    /// assert_eq!(nets, vec!["10.0.0.0/16", "10.1.0.0/16"]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn more_specific(&self, range: &K) -> Iter<'_, K, T> {
        let (idx, reached) = self.descend(range);
        Iter {
            map: self,
            nodes: vec![(idx, reached)],
            query: Some(range.clone()),
        }
    }

    /// Get the values of the largest ranges in the map that are properly contained in `range`.
    /// A value is returned if no other range between it and `range` carries a value. The value of
    /// `range` itself is never returned.
    ///
    /// ```
    /// # use nested_interval_map::*;
    /// # use ipnet::Ipv4Net;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut map: IntervalMap<Ipv4Net, _> = IntervalMap::new();
    /// map.insert("10.0.0.0/8".parse()?, 1)?;
    /// map.insert("10.0.0.0/16".parse()?, 2)?;
    /// map.insert("10.0.0.0/24".parse()?, 3)?;
    /// map.insert("10.1.0.0/24".parse()?, 4)?;
    /// assert_eq!(map.find_first_more_specific(&"10.0.0.0/8".parse()?), vec![&2, &4]);
    /// assert_eq!(map.find_first_more_specific(&"0.0.0.0/0".parse()?), vec![&1]);
    /// assert_eq!(map.find_first_more_specific(&"10.0.0.0/12".parse()?), vec![&2, &4]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn find_first_more_specific(&self, range: &K) -> Vec<&T> {
        let mut result = Vec::new();
        let mut stack: Vec<(usize, bool)> = match self.descend(range) {
            (idx, true) => self.table[idx]
                .children
                .iter()
                .rev()
                .map(|c| (*c, true))
                .collect(),
            (idx, false) => vec![(idx, false)],
        };
        while let Some((cur, covered)) = stack.pop() {
            let node = &self.table[cur];
            if covered {
                if let Some(v) = node.value.as_ref() {
                    result.push(v);
                    continue;
                }
                stack.extend(node.children.iter().rev().map(|c| (*c, true)));
            } else {
                let (lo, hi) = self.child_run(cur, range);
                stack.extend(
                    node.children[lo..hi]
                        .iter()
                        .rev()
                        .map(|c| (*c, range.contains(&self.table[*c].range))),
                );
            }
        }
        result
    }

    /// Insert a new entry into the map. If a range with the same bounds already exists, its value
    /// is replaced and the old value is returned. All ranges in the map that are contained in
    /// `range` become descendants of `range`.
    ///
    /// If `range` partially overlaps any range in the map, the map is left unchanged and
    /// [`Error::ConflictingRange`] is returned.
    ///
    /// ```
    /// # use nested_interval_map::*;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut map: IntervalMap<(u32, u32), _> = IntervalMap::new();
    /// assert_eq!(map.insert((10, 20), 1)?, None);
    /// assert_eq!(map.insert((0, 100), 2)?, None);
    /// assert_eq!(map.insert((10, 20), 3)?, Some(1));
    /// assert!(matches!(map.insert((15, 25), 4), Err(Error::ConflictingRange { .. })));
    /// assert_eq!(map.len(), 2);
    /// # Ok(())
    /// # }
    /// ```
    pub fn insert(&mut self, range: K, value: T) -> Result<Option<T>, Error> {
        self.try_insert(range, value)
            .map_err(|e| e.into_error(|k| format!("{k:?}")))
    }

    /// Remove `range` from the map and return its value. All children of the removed node are
    /// moved to its parent, such that the structure of the remaining tree is the same as if
    /// `range` was never inserted.
    ///
    /// ```
    /// # use nested_interval_map::*;
    /// # use ipnet::Ipv4Net;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut map: IntervalMap<Ipv4Net, _> = IntervalMap::new();
    /// map.insert("10.0.0.0/8".parse()?, 1)?;
    /// map.insert("10.0.0.0/16".parse()?, 2)?;
    /// map.insert("10.0.0.0/24".parse()?, 3)?;
    /// assert_eq!(map.remove(&"10.0.0.0/16".parse()?), Some(2));
    /// assert_eq!(map.remove(&"10.0.0.0/16".parse()?), None);
    /// assert_eq!(map.find_first_less_specific(&"10.0.0.0/24".parse()?), Some(&1));
    /// # Ok(())
    /// # }
    /// ```
    pub fn remove(&mut self, range: &K) -> Option<T> {
        let mut idx = 0;
        let mut parent = None;
        loop {
            match self.get_direction(idx, range) {
                Direction::Reached => break,
                Direction::Enter { next, pos } => {
                    parent = Some((idx, pos));
                    idx = next;
                }
                Direction::Missing => return None,
            }
        }
        let value = self.table[idx].value.take();
        if value.is_some() {
            self.count -= 1;
        }
        // the root is never removed, it only loses its value.
        if let Some((parent, pos)) = parent {
            let children = std::mem::take(&mut self.table[idx].children);
            log::trace!(
                "remove {:?}: move {} children to {:?}",
                range,
                children.len(),
                self.table[parent].range
            );
            self.table[parent].children.splice(pos..=pos, children);
            self.free.push(idx);
        }
        value
    }

    /// Remove the value of `range`, but keep its node in the tree as a placeholder. Re-inserting
    /// the same range later does not need to restructure the tree.
    ///
    /// ```
    /// # use nested_interval_map::*;
    /// # use ipnet::Ipv4Net;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut map: IntervalMap<Ipv4Net, _> = IntervalMap::new();
    /// let net = "192.168.1.0/24".parse()?;
    /// map.insert(net, 1)?;
    /// assert_eq!(map.remove_keep_tree(&net), Some(1));
    /// assert_eq!(map.find_exact(&net), None);
    /// assert!(map.is_empty());
    /// # Ok(())
    /// # }
    /// ```
    pub fn remove_keep_tree(&mut self, range: &K) -> Option<T> {
        let mut idx = 0;
        loop {
            match self.get_direction(idx, range) {
                Direction::Reached => {
                    let value = self.table[idx].value.take();
                    if value.is_some() {
                        self.count -= 1;
                    }
                    return value;
                }
                Direction::Enter { next, .. } => idx = next,
                Direction::Missing => return None,
            }
        }
    }

    /// Remove all entries, but keep the allocated memory.
    pub fn clear(&mut self) {
        self.table.clear();
        self.free.clear();
        self.count = 0;
        self.table.push(Node::new(K::universe(), None, Vec::new()));
    }
}

/// Private function implementations
impl<K, T> IntervalMap<K, T>
where
    K: Interval,
{
    /// Insert an entry, returning the reason of a failure without formatting it.
    pub(crate) fn try_insert(&mut self, range: K, value: T) -> Result<Option<T>, Rejected<K>> {
        if range.start() > range.end() {
            return Err(Rejected::Reversed(range));
        }
        let mut idx = 0;
        loop {
            match self.get_direction_for_insert(idx, &range) {
                DirectionForInsert::Enter { next } => idx = next,
                DirectionForInsert::Reached => {
                    let old = self.table[idx].value.replace(value);
                    if old.is_none() {
                        self.count += 1;
                    }
                    return Ok(old);
                }
                DirectionForInsert::NewLeaf { pos } => {
                    let new = self.new_node(range, Some(value), Vec::new());
                    self.table[idx].children.insert(pos, new);
                    self.count += 1;
                    return Ok(None);
                }
                DirectionForInsert::NewParent { lo, hi } => {
                    let children: Vec<usize> = self.table[idx].children.drain(lo..hi).collect();
                    log::trace!(
                        "insert {:?}: relink {} children of {:?}",
                        range,
                        children.len(),
                        self.table[idx].range
                    );
                    let new = self.new_node(range, Some(value), children);
                    self.table[idx].children.insert(lo, new);
                    self.count += 1;
                    return Ok(None);
                }
                DirectionForInsert::Conflict { existing } => {
                    let existing = self.table[existing].range.clone();
                    log::debug!("reject {:?}: conflicts with {:?}", range, existing);
                    return Err(Rejected::Conflict { range, existing });
                }
            }
        }
    }

    /// Walk towards `range`. Returns every visited node that properly contains `range` (starting
    /// at the root), and the node with the same bounds as `range`, if it exists.
    fn path(&self, range: &K) -> (Vec<usize>, Option<usize>) {
        let mut idx = 0;
        let mut ancestors = Vec::new();
        loop {
            match self.get_direction(idx, range) {
                Direction::Reached => return (ancestors, Some(idx)),
                Direction::Enter { next, .. } => {
                    ancestors.push(idx);
                    idx = next;
                }
                Direction::Missing => {
                    ancestors.push(idx);
                    return (ancestors, None);
                }
            }
        }
    }

    /// Find the deepest node that contains `range`. The flag is `true` if that node has the same
    /// bounds as `range`.
    fn descend(&self, range: &K) -> (usize, bool) {
        let mut idx = 0;
        loop {
            match self.get_direction(idx, range) {
                Direction::Reached => return (idx, true),
                Direction::Enter { next, .. } => idx = next,
                Direction::Missing => return (idx, false),
            }
        }
    }

    /// Insert a new node into the table and return its index.
    #[inline(always)]
    fn new_node(&mut self, range: K, value: Option<T>, children: Vec<usize>) -> usize {
        if let Some(idx) = self.free.pop() {
            self.table[idx] = Node::new(range, value, children);
            idx
        } else {
            self.table.push(Node::new(range, value, children));
            self.table.len() - 1
        }
    }

    /// Positions `lo..hi` of the children of `cur` that overlap `range`. Since the children are
    /// disjoint and sorted by their start, they are also sorted by their end.
    #[inline(always)]
    pub(crate) fn child_run(&self, cur: usize, range: &K) -> (usize, usize) {
        let children = &self.table[cur].children;
        let lo = children.partition_point(|c| self.table[*c].range.end() < range.start());
        let hi = children.partition_point(|c| self.table[*c].range.start() <= range.end());
        (lo, hi.max(lo))
    }

    /// Get the direction from node `cur` to get to `range`.
    #[inline(always)]
    fn get_direction(&self, cur: usize, range: &K) -> Direction {
        if self.table[cur].range.same_bounds(range) {
            return Direction::Reached;
        }
        let (lo, hi) = self.child_run(cur, range);
        if hi == lo + 1 {
            let child = self.table[cur].children[lo];
            if self.table[child].range.contains(range) {
                return Direction::Enter {
                    next: child,
                    pos: lo,
                };
            }
        }
        Direction::Missing
    }

    /// Get the direction from node `cur` to insert `range`.
    #[inline(always)]
    fn get_direction_for_insert(&self, cur: usize, range: &K) -> DirectionForInsert {
        if self.table[cur].range.same_bounds(range) {
            return DirectionForInsert::Reached;
        }
        let (lo, hi) = self.child_run(cur, range);
        if lo == hi {
            return DirectionForInsert::NewLeaf { pos: lo };
        }
        let run = &self.table[cur].children[lo..hi];
        if let [child] = run {
            if self.table[*child].range.contains(range) {
                return DirectionForInsert::Enter { next: *child };
            }
        }
        match run
            .iter()
            .find(|c| !range.contains(&self.table[**c].range))
        {
            Some(existing) => DirectionForInsert::Conflict {
                existing: *existing,
            },
            None => DirectionForInsert::NewParent { lo, hi },
        }
    }
}

impl<K, T> PartialEq for IntervalMap<K, T>
where
    K: Interval,
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|((k1, v1), (k2, v2))| k1.same_bounds(k2) && v1 == v2)
    }
}

impl<K, T> Eq for IntervalMap<K, T>
where
    K: Interval,
    T: Eq,
{
}

/// A node of the tree. Nodes without a value are placeholders.
#[derive(Clone)]
pub(crate) struct Node<K, T> {
    pub(crate) range: K,
    pub(crate) value: Option<T>,
    pub(crate) children: Vec<usize>,
}

impl<K, T> Node<K, T> {
    fn new(range: K, value: Option<T>, children: Vec<usize>) -> Self {
        Self {
            range,
            value,
            children,
        }
    }
}

/// Reason why an interval was not inserted.
#[derive(Debug)]
pub(crate) enum Rejected<K> {
    /// The start of the interval is larger than its end.
    Reversed(K),
    /// The interval partially overlaps `existing`.
    Conflict { range: K, existing: K },
}

impl<K> Rejected<K> {
    /// Turn the rejection into an error, formatting intervals with `fmt`.
    pub(crate) fn into_error<F>(self, fmt: F) -> Error
    where
        F: Fn(&K) -> String,
    {
        match self {
            Rejected::Reversed(range) => Error::InvalidRangeFormat(fmt(&range)),
            Rejected::Conflict { range, existing } => Error::ConflictingRange {
                range: fmt(&range),
                existing: fmt(&existing),
            },
        }
    }
}

enum Direction {
    /// The range is already reached.
    Reached,
    /// Enter the child `next`, stored at position `pos` of the current node.
    Enter { next: usize, pos: usize },
    /// The range is not present.
    Missing,
}

enum DirectionForInsert {
    /// The range is already reached.
    Reached,
    /// Enter the next index and search again.
    Enter { next: usize },
    /// Insert a new leaf at position `pos` of the current node.
    NewLeaf { pos: usize },
    /// Insert a new node at position `lo`, and move the children `lo..hi` below it.
    NewParent { lo: usize, hi: usize },
    /// The range partially overlaps the node `existing`.
    Conflict { existing: usize },
}
