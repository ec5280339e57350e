//! This crate provides a map from IP address ranges to values, organized as a tree of nested
//! intervals. Besides exact lookups, it answers *specificity* queries: the smallest or all ranges
//! that contain a given range (less specific), and all ranges contained in a given range (more
//! specific). Ranges can be CIDR networks (`10.0.0.0/8`) or arbitrary inclusive address ranges
//! (`10.0.0.0-10.0.0.2`), both for IPv4 and IPv6.
//!
//! ```
//! # use nested_interval_map::*;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut map: IpRangeMap<&str> = IpRangeMap::new();
//! map.insert("10.0.0.0/8".parse()?, "private")?;
//! map.insert("10.1.0.0/16".parse()?, "office")?;
//! map.insert("10.1.0.0-10.1.0.99".parse()?, "servers")?;
//! map.insert("2001:db8::/32".parse()?, "documentation")?;
//!
//! let host: IpRange = "10.1.0.7/32".parse()?;
//! assert_eq!(map.find_exact_or_first_less_specific(&host), Some(&"servers"));
//! assert_eq!(map.find_all_less_specific(&host), vec![&"private", &"office", &"servers"]);
//! assert_eq!(
//!     map.find_all_more_specific(&"10.0.0.0/8".parse()?),
//!     vec![&"private", &"office", &"servers"],
//! );
//!
//! // partially overlapping ranges are rejected
//! assert!(map.insert("10.1.0.50-10.1.0.200".parse()?, "conflict").is_err());
//! # Ok(())
//! # }
//! ```
//!
//! # Description of the Tree
//!
//! [`IntervalMap`] holds the tree of a single address family. Each node consists of an interval,
//! a container for a potential value (`Option`), and a list of children. The root is the interval
//! covering the entire space ([`Interval::universe`]). Every node contains all of its
//! descendants, and the children of a node are disjoint and sorted by their start. Lookups
//! therefore descend from the root, using binary search on the children of each node to find the
//! unique child that contains the query.
//!
//! Since two intervals in the tree are either disjoint or nested, an interval that partially
//! overlaps another one cannot be inserted. [`IntervalMap::insert`] returns
//! [`Error::ConflictingRange`] in that case, and leaves the map untouched. Inserting an interval
//! that contains existing intervals moves them below the new node.
//!
//! [`JointIntervalMap`] combines two trees, one for each address family, and [`IpRangeMap`] is a
//! joint map keyed by [`IpRange`]. A query only ever looks at the tree of its own family.
//!
//! Keys can be [`IpRange`], tuples `(R, R)` of any unsigned primitive integer `R`, or the network
//! types of [ipnet](https://docs.rs/ipnet) (default feature `ipnet`),
//! [ipnetwork](https://crates.io/crates/ipnetwork) (feature `ipnetwork`) and
//! [cidr](https://crates.io/crates/cidr) (feature `cidr`).
//!
//! # Traversals
//!
//! Any iteration over elements in the tree yields them in order of their start. A range is always
//! yielded before the ranges it contains. Queries for less specific ranges return the broadest
//! range first.
//!
//! # Operations on the tree
//!
//! The following are the computational complexities of the functions, where `n` is the number of
//! elements in the tree, `d` the depth of the tree, and `k` the number of returned elements.
//!
//! | Operation                                      | Complexity         |
//! |------------------------------------------------|--------------------|
//! | `find_exact`, `find_*_less_specific`           | `O(d log n)`       |
//! | `find_all_more_specific`, `more_specific`      | `O(d log n + k)`   |
//! | `insert` (calling `drop` on the old value)     | `O(d log n + n)`   |
//! | `remove`                                       | `O(d log n + n)`   |
//! | `remove_keep_tree`                             | `O(d log n)`       |
//! | `clear` (calling `drop` on `T`)                | `O(n)`             |
//! | `len` and `is_empty`                           | `O(1)`             |
//!
//! There are two kinds of removals you can do:
//!
//! - [`IntervalMap::remove`] will remove a node from the tree, moving its children to its parent.
//!   The resulting tree is the same as if the range was never inserted.
//! - [`IntervalMap::remove_keep_tree`] will only take the value out of a node, and keep the node
//!   as a placeholder in the tree.
//!
//! # Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade: structural changes of the tree
//! on `trace`, and rejected inserts on `debug`.

#![deny(missing_docs)]

mod address;
mod error;
mod fmt;
mod interval;
mod range;
#[cfg(feature = "serde")]
mod serde;
#[cfg(test)]
mod fuzzing;

pub mod joint;
pub mod map;

pub use address::{parse_address, Address, IpVersion};
pub use error::Error;
pub use interval::Interval;
pub use joint::{JointInterval, JointIntervalMap};
pub use map::IntervalMap;
pub use range::{parse_range, IpRange};

/// Map from [`IpRange`] to values, with one tree for IPv4 and one for IPv6.
pub type IpRangeMap<T> = JointIntervalMap<IpRange, T>;
