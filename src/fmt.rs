//! Formatting implementation for the IntervalMap

use std::fmt::{Debug, Formatter, Result};

use super::*;

impl<K: Debug, T: Debug> Debug for IntervalMap<K, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        DebugIntervalMap(self, 0).fmt(f)
    }
}

impl<K, T> Debug for JointIntervalMap<K, T>
where
    K: JointInterval,
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_list().entry(&self.t1).entry(&self.t2).finish()
    }
}

/// Prints a node as `{range: value}`, `{range: [children]}` or `{range: (value, [children])}`.
/// Placeholder leaves are printed as their range only.
struct DebugIntervalMap<'a, K, T>(&'a IntervalMap<K, T>, usize);

struct DebugChildren<'a, K, T>(&'a IntervalMap<K, T>, usize);

impl<K: Debug, T: Debug> Debug for DebugIntervalMap<'_, K, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let map = self.0;
        let node = &map.table[self.1];
        let children = DebugChildren(map, self.1);
        match (node.value.as_ref(), node.children.is_empty()) {
            (None, true) => node.range.fmt(f),
            (Some(v), true) => f.debug_map().entry(&node.range, v).finish(),
            (None, false) => f.debug_map().entry(&node.range, &children).finish(),
            (Some(v), false) => f
                .debug_map()
                .entry(&node.range, &(v, children))
                .finish(),
        }
    }
}

impl<K: Debug, T: Debug> Debug for DebugChildren<'_, K, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let map = self.0;
        f.debug_list()
            .entries(
                map.table[self.1]
                    .children
                    .iter()
                    .map(|c| DebugIntervalMap(map, *c)),
            )
            .finish()
    }
}
