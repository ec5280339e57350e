//! Errors returned while parsing addresses and ranges, or while inserting into a map.

use crate::IpVersion;

/// Error type of this crate. All variants are local validation failures: nothing is retried and
/// a failed operation never leaves a map partially modified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The text is neither a dotted-quad IPv4 address nor a colon-hex IPv6 address.
    #[error("invalid IP address: {0:?}")]
    InvalidAddressFormat(String),
    /// The text is not of the form `<address>/<len>` or `<address>-<address>`, or the two ends of
    /// a range are of different versions or out of order.
    #[error("invalid IP range: {0:?}")]
    InvalidRangeFormat(String),
    /// The prefix length exceeds the width of the address.
    #[error("invalid prefix length {len} for {version}")]
    InvalidPrefixLength {
        /// The prefix length that was requested.
        len: u32,
        /// The version of the base address.
        version: IpVersion,
    },
    /// The range partially overlaps a range that is already present in the map.
    #[error("range {range} conflicts with existing range {existing}")]
    ConflictingRange {
        /// The range that was rejected.
        range: String,
        /// The range in the map that it overlaps.
        existing: String,
    },
}
