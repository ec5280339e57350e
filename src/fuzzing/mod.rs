//! Module for testing using fuzzing (quickcheck)
#![allow(clippy::type_complexity)]

use std::fmt::Debug;

use crate::*;
use itertools::Itertools;
use quickcheck::Arbitrary;

mod basic;
mod queries;

#[derive(Debug, PartialEq, Clone, Copy)]
enum Operation<K, T> {
    Add(K, T),
    Remove(K),
    RemoveKeepTree(K),
}

#[cfg(miri)]
const DEFAULT_NUM_TESTS: usize = 10;
#[cfg(not(miri))]
const DEFAULT_NUM_TESTS: usize = 10000;
const DEFAULT_GEN_SIZE: usize = 100;

fn proptest_runner<A: Arbitrary + Debug + PartialEq, F: Fn(A) -> bool>(f: F) {
    let num_tests: usize = std::env::var("QUICKCHECK_TESTS")
        .ok()
        .and_then(|x| x.parse::<usize>().ok())
        .unwrap_or(DEFAULT_NUM_TESTS);

    let gen_size: usize = std::env::var("QUICKCHECK_GENERATOR_SIZE")
        .ok()
        .and_then(|x| x.parse::<usize>().ok())
        .unwrap_or(DEFAULT_GEN_SIZE);

    let mut gen = quickcheck::Gen::new(gen_size);

    // sample all inputs
    for _ in 0..num_tests {
        let input = A::arbitrary(&mut gen);
        let input_c = input.clone();
        let success = f(input_c);
        if !success {
            shrink_failure(f, input)
        }
    }
}

fn shrink_failure<A: Arbitrary + Debug + PartialEq, F: Fn(A) -> bool>(f: F, input: A) -> ! {
    for i in input.shrink() {
        let i_c = i.clone();
        let success = f(i_c);
        if !success {
            shrink_failure(f, i)
        }
    }
    // if we reach this point, then all shrunken inputs work. Therefore, `inputs` is the minimal
    // input
    panic!(
        "[QUICKCHECK] Test case failed!\n  Minimal input:\n    {:?}",
        input
    );
}

#[allow(missing_docs)]
#[macro_export]
macro_rules! qc {
    ($name:ident, $f:ident) => {
        #[test]
        fn $name() {
            proptest_runner($f)
        }
    };
}

/// Reference implementation: an unordered list of nodes, where every query is a linear scan.
/// Nodes without a value are placeholders left by `remove_keep_tree`.
#[derive(Debug, Clone, Default)]
struct Model {
    nodes: Vec<(TestRange, Option<i32>)>,
}

impl Model {
    fn insert(&mut self, range: TestRange, value: i32) -> Option<Option<i32>> {
        if self.nodes.iter().any(|(r, _)| r.conflicts_with(&range)) {
            return None;
        }
        match self.nodes.iter_mut().find(|(r, _)| *r == range) {
            Some((_, v)) => Some(v.replace(value)),
            None => {
                self.nodes.push((range, Some(value)));
                Some(None)
            }
        }
    }

    fn remove(&mut self, range: &TestRange) -> Option<i32> {
        let pos = self.nodes.iter().position(|(r, _)| r == range)?;
        self.nodes.remove(pos).1
    }

    fn remove_keep_tree(&mut self, range: &TestRange) -> Option<i32> {
        self.nodes
            .iter_mut()
            .find(|(r, _)| r == range)
            .and_then(|(_, v)| v.take())
    }

    fn get(&self, range: &TestRange) -> Option<&i32> {
        self.nodes
            .iter()
            .find(|(r, _)| r == range)
            .and_then(|(_, v)| v.as_ref())
    }

    fn len(&self) -> usize {
        self.nodes.iter().filter(|(_, v)| v.is_some()).count()
    }

    /// Entries with a value whose range matches `f`, sorted by their start and broadest first.
    fn select<F: Fn(&TestRange) -> bool>(&self, f: F) -> Vec<(TestRange, i32)> {
        self.nodes
            .iter()
            .filter(|(r, _)| f(r))
            .filter_map(|(r, v)| v.map(|v| (*r, v)))
            .sorted_by_key(|(r, _)| (r.0, std::cmp::Reverse(r.1)))
            .collect()
    }

    fn select_values<F: Fn(&TestRange) -> bool>(&self, f: F) -> Vec<i32> {
        self.select(f).into_iter().map(|(_, v)| v).collect()
    }
}

/// Apply all operations on both an `IntervalMap` and the model. Returns `None` as soon as both
/// disagree on the result of an operation.
fn apply(ops: Vec<Operation<TestRange, i32>>) -> Option<(IntervalMap<TestRange, i32>, Model)> {
    let mut map = IntervalMap::new();
    let mut model = Model::default();
    for op in ops {
        let same = match op {
            Operation::Add(r, t) => map.insert(r, t).ok() == model.insert(r, t),
            Operation::Remove(r) => map.remove(&r) == model.remove(&r),
            Operation::RemoveKeepTree(r) => map.remove_keep_tree(&r) == model.remove_keep_tree(&r),
        };
        if !same {
            return None;
        }
    }
    Some((map, model))
}

impl<K: Arbitrary, T: Arbitrary> Arbitrary for Operation<K, T> {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let k = K::arbitrary(g);
        match g
            .choose(&[0u8, 0, 0, 0, 0, 0, 0, 1, 1, 2])
            .copied()
            .unwrap_or_default()
        {
            0 => Self::Add(k, T::arbitrary(g)),
            1 => Self::Remove(k),
            _ => Self::RemoveKeepTree(k),
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            Operation::Add(k, t) => {
                let t = t.clone();
                Box::new(
                    k.clone()
                        .shrink()
                        .map(move |k| Operation::Add(k, t.clone())),
                )
            }
            Operation::Remove(k) => Box::new(k.clone().shrink().map(|k| Operation::Remove(k))),
            Operation::RemoveKeepTree(k) => {
                Box::new(k.clone().shrink().map(|k| Operation::RemoveKeepTree(k)))
            }
        }
    }
}

/// Width of the space from which test ranges are drawn. It is small enough that random ranges
/// frequently nest or conflict.
const SPACE: u32 = 64;

/// Inclusive interval `[.0, .1]` within `0..SPACE`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
struct TestRange(u32, u32);

impl Debug for TestRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.0, self.1)
    }
}

impl Interval for TestRange {
    type R = u32;

    fn start(&self) -> u32 {
        self.0
    }

    fn end(&self) -> u32 {
        self.1
    }

    fn universe() -> Self {
        Self(0, u32::MAX)
    }
}

impl Arbitrary for TestRange {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        if bool::arbitrary(g) {
            // an aligned block, like a CIDR prefix
            #[rustfmt::skip]
            let size: u32 = *g
                .choose(&[
                    1, 1, 1,
                    2, 2, 2, 2,
                    4, 4, 4, 4,
                    8, 8, 8,
                    16, 16,
                    32,
                ])
                .unwrap();
            let start = (u32::arbitrary(g) % SPACE) & !(size - 1);
            Self(start, start + size - 1)
        } else {
            let a = u32::arbitrary(g) % SPACE;
            let b = u32::arbitrary(g) % SPACE;
            Self(a.min(b), a.max(b))
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let Self(start, end) = *self;
        let mut smaller = Vec::new();
        if start < end {
            smaller.push(Self(start + 1, end));
            smaller.push(Self(start, end - 1));
        }
        if start > 0 {
            smaller.push(Self(start - 1, end - 1));
        }
        Box::new(smaller.into_iter())
    }
}
