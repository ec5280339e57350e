//! Module that defines the JointIntervalMap

use either::{Left, Right};

use super::JointInterval;
use crate::{Error, IntervalMap};

/// A joint interval map, implemented as two separate trees, one for each address family. Queries
/// only ever look at the tree of the family of the queried interval.
#[derive(Clone)]
pub struct JointIntervalMap<K, T>
where
    K: JointInterval,
{
    /// IntervalMap that corresponds to the first interval type
    pub t1: IntervalMap<K::P1, T>,
    /// IntervalMap that corresponds to the second interval type
    pub t2: IntervalMap<K::P2, T>,
}

impl<K, T> Default for JointIntervalMap<K, T>
where
    K: JointInterval,
{
    fn default() -> Self {
        Self {
            t1: Default::default(),
            t2: Default::default(),
        }
    }
}

impl<K: JointInterval, T> JointIntervalMap<K, T> {
    /// Create an empty map
    pub fn new() -> Self {
        Self {
            t1: IntervalMap::new(),
            t2: IntervalMap::new(),
        }
    }

    /// Create a map from an iterator of entries. Fails on the first entry that conflicts with an
    /// earlier one.
    ///
    /// ```
    /// # use nested_interval_map::*;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let map: IpRangeMap<_> = IpRangeMap::try_from_iter([
    ///     ("10.0.0.0/8".parse()?, 1),
    ///     ("2001:db8::/32".parse()?, 2),
    /// ])?;
    /// assert_eq!(map.len(), 2);
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

    /// Returns the number of elements stored in `self`.
    ///
    /// ```
    /// # use nested_interval_map::*;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut map: IpRangeMap<_> = IpRangeMap::new();
    /// map.insert("192.168.1.0/24".parse()?, 1u32)?;
    /// map.insert("192.168.1.0/25".parse()?, 2u32)?;
    /// map.insert("2001::1:0:0/96".parse()?, 3u32)?;
    /// assert_eq!(map.len(), 3);
    /// # Ok(())
    /// # }
    /// ```
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.t1.len() + self.t2.len()
    }

    /// Returns `true` if the map contains no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the value stored for exactly `range`.
    ///
    /// ```
    /// # use nested_interval_map::*;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut map: IpRangeMap<_> = IpRangeMap::new();
    /// map.insert("10.0.0.0/16".parse()?, "v4")?;
    /// map.insert("2001:db8::/48".parse()?, "v6")?;
    /// assert_eq!(map.find_exact(&"10.0.0.0/16".parse()?), Some(&"v4"));
    /// assert_eq!(map.find_exact(&"2001:db8::/48".parse()?), Some(&"v6"));
    /// assert_eq!(map.find_exact(&"10.0.0.0/17".parse()?), None);
    /// # Ok(())
    /// # }
    /// ```
    pub fn find_exact(&self, range: &K) -> Option<&T> {
        fork!(self, range, find_exact)
    }

    /// Get a mutable reference to the value stored for exactly `range`.
    pub fn find_exact_mut(&mut self, range: &K) -> Option<&mut T> {
        fork!(self, range, find_exact_mut)
    }

    /// Check if a value is stored for exactly `range`.
    pub fn contains_key(&self, range: &K) -> bool {
        fork!(self, range, contains_key)
    }

    /// Get the value of `range` itself, or otherwise the value of the smallest range in the map
    /// that contains `range`.
    ///
    /// ```
    /// # use nested_interval_map::*;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut map: IpRangeMap<_> = IpRangeMap::new();
    /// map.insert("10.0.0.0/24".parse()?, "net10")?;
    /// map.insert("20.0.0.0/24".parse()?, "net20")?;
    /// assert_eq!(map.find_exact_or_first_less_specific(&"10.0.0.0/32".parse()?), Some(&"net10"));
    /// assert_eq!(map.find_exact_or_first_less_specific(&"20.0.0.0/32".parse()?), Some(&"net20"));
    /// assert_eq!(map.find_exact_or_first_less_specific(&"30.0.0.0/32".parse()?), None);
    /// # Ok(())
    /// # }
    /// ```
    pub fn find_exact_or_first_less_specific(&self, range: &K) -> Option<&T> {
        fork!(self, range, find_exact_or_first_less_specific)
    }

    /// Get the value of the smallest range in the map that properly contains `range`.
    pub fn find_first_less_specific(&self, range: &K) -> Option<&T> {
        fork!(self, range, find_first_less_specific)
    }

    /// Get the values of all ranges in the map that properly contain `range`, broadest first.
    ///
    /// ```
    /// # use nested_interval_map::*;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut map: IpRangeMap<_> = IpRangeMap::new();
    /// map.insert("10.0.0.0/8".parse()?, "a")?;
    /// map.insert("10.0.0.0/16".parse()?, "b")?;
    /// map.insert("::/0".parse()?, "v6")?;
    /// assert_eq!(map.find_all_less_specific(&"10.0.0.0/20".parse()?), vec![&"a", &"b"]);
    /// assert_eq!(map.find_all_less_specific(&"10.0.0.0/8".parse()?), Vec::<&&str>::new());
    /// # Ok(())
    /// # }
    /// ```
    pub fn find_all_less_specific(&self, range: &K) -> Vec<&T> {
        fork!(self, range, find_all_less_specific)
    }

    /// Same as [`Self::find_all_less_specific`], with the value of `range` itself appended.
    pub fn find_exact_and_all_less_specific(&self, range: &K) -> Vec<&T> {
        fork!(self, range, find_exact_and_all_less_specific)
    }

    /// Get the values of all ranges in the map that are contained in `range` (including `range`
    /// itself). Values are ordered by the start of their range, and a range always comes before
    /// the ranges it contains.
    ///
    /// ```
    /// # use nested_interval_map::*;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut map: IpRangeMap<_> = IpRangeMap::new();
    /// map.insert("10.0.0.0/8".parse()?, 1)?;
    /// map.insert("10.0.0.0/16".parse()?, 2)?;
    /// map.insert("192.168.0.0-192.168.0.10".parse()?, 3)?;
    /// map.insert("2001:db8::/32".parse()?, 4)?;
    /// assert_eq!(map.find_all_more_specific(&"0.0.0.0/0".parse()?), vec![&1, &2, &3]);
    /// assert_eq!(map.find_all_more_specific(&"::/0".parse()?), vec![&4]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn find_all_more_specific(&self, range: &K) -> Vec<&T> {
        fork!(self, range, find_all_more_specific)
    }

    /// Get the values of the largest ranges in the map that are properly contained in `range`.
    pub fn find_first_more_specific(&self, range: &K) -> Vec<&T> {
        fork!(self, range, find_first_more_specific)
    }

    /// Iterate over all entries whose range is contained in `range`, in the order of
    /// [`Self::find_all_more_specific`].
    pub fn more_specific(&self, range: &K) -> Iter<'_, K, T> {
        match range.p1_or_p2() {
            Left(r) => Iter {
                i1: Some(self.t1.more_specific(&r)),
                i2: None,
            },
            Right(r) => Iter {
                i1: None,
                i2: Some(self.t2.more_specific(&r)),
            },
        }
    }

    /// Insert a new entry into the map. If the range already exists, its value is replaced and the
    /// old value is returned. Fails with [`Error::ConflictingRange`] if `range` partially overlaps
    /// a range of the map, in which case the map is not modified.
    ///
    /// ```
    /// # use nested_interval_map::*;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut map: IpRangeMap<_> = IpRangeMap::new();
    /// assert_eq!(map.insert("192.168.0.0/23".parse()?, 1)?, None);
    /// assert_eq!(map.insert("192.168.1.0/24".parse()?, 2)?, None);
    /// assert_eq!(map.insert("192.168.1.0/24".parse()?, 3)?, Some(2));
    /// let err = map.insert("192.168.1.128-192.168.2.0".parse()?, 4).unwrap_err();
    /// assert_eq!(
    ///     err.to_string(),
    ///     "range 192.168.1.128-192.168.2.0 conflicts with existing range 192.168.0.0/23"
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub fn insert(&mut self, range: K, value: T) -> Result<Option<T>, Error> {
        match range.p1_or_p2() {
            Left(r) => self
                .t1
                .try_insert(r, value)
                .map_err(|e| e.into_error(|r| format!("{:?}", K::from_p1(r)))),
            Right(r) => self
                .t2
                .try_insert(r, value)
                .map_err(|e| e.into_error(|r| format!("{:?}", K::from_p2(r)))),
        }
    }

    /// Remove `range` from the map and return its value. Its children are moved to its parent.
    ///
    /// ```
    /// # use nested_interval_map::*;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut map: IpRangeMap<_> = IpRangeMap::new();
    /// let net = "2001:db8::/32".parse()?;
    /// map.insert(net, 1)?;
    /// assert_eq!(map.remove(&net), Some(1));
    /// assert_eq!(map.find_exact(&net), None);
    /// # Ok(())
    /// # }
    /// ```
    pub fn remove(&mut self, range: &K) -> Option<T> {
        fork!(self, range, remove)
    }

    /// Remove the value of `range`, but keep its node in the tree.
    pub fn remove_keep_tree(&mut self, range: &K) -> Option<T> {
        fork!(self, range, remove_keep_tree)
    }

    /// Clear both trees, keeping the allocated memory.
    pub fn clear(&mut self) {
        self.t1.clear();
        self.t2.clear();
    }

    /// An iterator over all entries. All entries of the first family come before those of the
    /// second. Within one family, entries are ordered as in [`IntervalMap::iter`].
    ///
    /// ```
    /// # use nested_interval_map::*;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut map: IpRangeMap<_> = IpRangeMap::new();
    /// map.insert("2001:db8::/32".parse()?, 3)?;
    /// map.insert("10.0.0.0/16".parse()?, 2)?;
    /// map.insert("10.0.0.0/8".parse()?, 1)?;
    /// let keys: Vec<String> = map.keys().map(|k| k.to_string()).collect();
    /// assert_eq!(keys, vec!["10.0.0.0/8", "10.0.0.0/16", "2001:db8::/32"]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn iter(&self) -> Iter<'_, K, T> {
        self.into_iter()
    }

    /// An iterator over all ranges, in the order of [`Self::iter`].
    pub fn keys(&self) -> Keys<'_, K, T> {
        Keys { inner: self.iter() }
    }

    /// An iterator over all values, in the order of [`Self::iter`].
    pub fn values(&self) -> Values<'_, K, T> {
        Values { inner: self.iter() }
    }
}

impl<K, T> PartialEq for JointIntervalMap<K, T>
where
    K: JointInterval,
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.t1 == other.t1 && self.t2 == other.t2
    }
}

impl<K, T> Eq for JointIntervalMap<K, T>
where
    K: JointInterval,
    T: Eq,
{
}

mod iter;

pub use iter::*;
