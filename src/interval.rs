//! Description of the generic type `Interval`.

use std::fmt::Debug;

use num_traits::{PrimInt, Unsigned};

/// Trait for defining inclusive intervals over an ordered representation. Every key of an
/// [`IntervalMap`](crate::IntervalMap) implements this trait.
///
/// Implementors must guarantee `start() <= end()`. Two intervals are considered the same key if
/// both bounds are equal, even if the types carry additional data (like the host part of an
/// `Ipv4Net`).
pub trait Interval: Clone + Debug {
    /// How the bounds are represented, for instance `u32` for IPv4.
    type R: Ord + Copy;

    /// The first element of the interval (inclusive).
    fn start(&self) -> Self::R;

    /// The last element of the interval (inclusive).
    fn end(&self) -> Self::R;

    /// The interval that covers every possible value. This is the root of the tree.
    fn universe() -> Self;

    /// Check if `self` contains `other`. This function also returns `true` if both have the same
    /// bounds.
    fn contains(&self, other: &Self) -> bool {
        self.start() <= other.start() && other.end() <= self.end()
    }

    /// Check if `self` and `other` share at least one element.
    fn overlaps(&self, other: &Self) -> bool {
        self.start() <= other.end() && other.start() <= self.end()
    }

    /// Check if `self` and `other` overlap without one containing the other.
    fn conflicts_with(&self, other: &Self) -> bool {
        self.overlaps(other) && !self.contains(other) && !other.contains(self)
    }

    /// Compare the bounds of both intervals.
    fn same_bounds(&self, other: &Self) -> bool {
        self.start() == other.start() && self.end() == other.end()
    }
}

/// Network mask of a prefix of length `len`, for a representation of `R::BITS` bits.
pub(crate) fn mask_from_prefix_len<R>(len: u8) -> R
where
    R: PrimInt,
{
    if len as u32 >= R::zero().count_zeros() {
        !R::zero()
    } else if len == 0 {
        R::zero()
    } else {
        !((!R::zero()) >> len as usize)
    }
}

/// Bounds of the prefix of length `len` that contains `addr`.
pub(crate) fn prefix_bounds<R>(addr: R, len: u8) -> (R, R)
where
    R: PrimInt,
{
    let mask = mask_from_prefix_len::<R>(len);
    (addr & mask, addr | !mask)
}

/// Return the prefix length if `[start, end]` is exactly one CIDR block.
pub(crate) fn prefix_len_of<R>(start: R, end: R) -> Option<u8>
where
    R: PrimInt + Unsigned,
{
    if start > end {
        return None;
    }
    let host = end - start;
    let is_block = host == R::max_value() || (host & (host + R::one())).is_zero();
    if is_block && (start & host).is_zero() {
        Some((R::zero().count_zeros() - host.count_ones()) as u8)
    } else {
        None
    }
}

impl<R> Interval for (R, R)
where
    R: Unsigned + PrimInt + Debug,
{
    type R = R;

    fn start(&self) -> R {
        self.0
    }

    fn end(&self) -> R {
        self.1
    }

    fn universe() -> Self {
        (R::zero(), R::max_value())
    }
}

#[cfg(feature = "ipnet")]
impl Interval for ipnet::Ipv4Net {
    type R = u32;

    fn start(&self) -> u32 {
        self.network().into()
    }

    fn end(&self) -> u32 {
        self.broadcast().into()
    }

    fn universe() -> Self {
        Default::default()
    }
}

#[cfg(feature = "ipnet")]
impl Interval for ipnet::Ipv6Net {
    type R = u128;

    fn start(&self) -> u128 {
        self.network().into()
    }

    fn end(&self) -> u128 {
        self.broadcast().into()
    }

    fn universe() -> Self {
        Default::default()
    }
}

#[cfg(feature = "ipnetwork")]
impl Interval for ipnetwork::Ipv4Network {
    type R = u32;

    fn start(&self) -> u32 {
        self.network().into()
    }

    fn end(&self) -> u32 {
        u32::from(self.network()) | !u32::from(self.mask())
    }

    fn universe() -> Self {
        ipnetwork::Ipv4Network::new(std::net::Ipv4Addr::UNSPECIFIED, 0)
            .expect("a prefix length of 0 is always valid")
    }
}

#[cfg(feature = "ipnetwork")]
impl Interval for ipnetwork::Ipv6Network {
    type R = u128;

    fn start(&self) -> u128 {
        self.network().into()
    }

    fn end(&self) -> u128 {
        u128::from(self.network()) | !u128::from(self.mask())
    }

    fn universe() -> Self {
        ipnetwork::Ipv6Network::new(std::net::Ipv6Addr::UNSPECIFIED, 0)
            .expect("a prefix length of 0 is always valid")
    }
}

#[cfg(feature = "cidr")]
impl Interval for cidr::Ipv4Cidr {
    type R = u32;

    fn start(&self) -> u32 {
        self.first_address().into()
    }

    fn end(&self) -> u32 {
        self.last_address().into()
    }

    fn universe() -> Self {
        cidr::Ipv4Cidr::new(std::net::Ipv4Addr::UNSPECIFIED, 0)
            .expect("a prefix length of 0 is always valid")
    }
}

#[cfg(feature = "cidr")]
impl Interval for cidr::Ipv6Cidr {
    type R = u128;

    fn start(&self) -> u128 {
        self.first_address().into()
    }

    fn end(&self) -> u128 {
        self.last_address().into()
    }

    fn universe() -> Self {
        cidr::Ipv6Cidr::new(std::net::Ipv6Addr::UNSPECIFIED, 0)
            .expect("a prefix length of 0 is always valid")
    }
}
