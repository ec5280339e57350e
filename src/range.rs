//! Inclusive ranges of IP addresses, either written as CIDR networks or as explicit ranges.

use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use either::Either;

use crate::interval::{prefix_bounds, prefix_len_of};
use crate::joint::JointInterval;
use crate::{Address, Error, IpVersion};

/// An inclusive range of addresses of a single IP version. A CIDR network is a special case of a
/// range whose size is a power of two and whose start is aligned to that size.
///
/// ```
/// # use nested_interval_map::*;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let net: IpRange = "10.0.0.0/24".parse()?;
/// assert_eq!(net.start(), "10.0.0.0".parse()?);
/// assert_eq!(net.end(), "10.0.0.255".parse()?);
/// assert_eq!(net.prefix_len(), Some(24));
///
/// let range: IpRange = "10.0.0.0-10.255.255.255".parse()?;
/// assert_eq!(range, "10.0.0.0/8".parse()?);
///
/// let range: IpRange = "10.0.0.0-10.0.0.2".parse()?;
/// assert_eq!(range.prefix_len(), None);
/// assert_eq!(range.to_string(), "10.0.0.0-10.0.0.2");
///
/// assert!("10.0.0.0".parse::<IpRange>().is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IpRange {
    start: Address,
    end: Address,
}

impl IpRange {
    /// Create a range from its two (inclusive) ends. Both must be of the same version, and
    /// `start` must not be larger than `end`.
    pub fn new(start: Address, end: Address) -> Result<Self, Error> {
        if start.version() != end.version() || start > end {
            return Err(Error::InvalidRangeFormat(format!("{start}-{end}")));
        }
        Ok(Self { start, end })
    }

    /// Create the CIDR network of length `len` that contains `address`. The host bits of
    /// `address` are ignored.
    ///
    /// ```
    /// # use nested_interval_map::*;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let net = IpRange::from_prefix("10.1.2.3".parse()?, 16)?;
    /// assert_eq!(net, "10.1.0.0/16".parse()?);
    /// assert!(IpRange::from_prefix("10.1.2.3".parse()?, 33).is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_prefix(address: Address, len: u8) -> Result<Self, Error> {
        let version = address.version();
        if len > version.width() {
            return Err(Error::InvalidPrefixLength {
                len: len as u32,
                version,
            });
        }
        Ok(match version {
            IpVersion::V4 => {
                let (start, end) = prefix_bounds(address.value() as u32, len);
                Self {
                    start: Address::v4(start),
                    end: Address::v4(end),
                }
            }
            IpVersion::V6 => {
                let (start, end) = prefix_bounds(address.value(), len);
                Self {
                    start: Address::v6(start),
                    end: Address::v6(end),
                }
            }
        })
    }

    /// The range that covers every address of `version`.
    pub fn universe(version: IpVersion) -> Self {
        match version {
            IpVersion::V4 => Self {
                start: Address::v4(0),
                end: Address::v4(u32::MAX),
            },
            IpVersion::V6 => Self {
                start: Address::v6(0),
                end: Address::v6(u128::MAX),
            },
        }
    }

    /// Create a range containing a single address.
    pub fn single(address: Address) -> Self {
        Self {
            start: address,
            end: address,
        }
    }

    /// The first address of the range.
    pub fn start(&self) -> Address {
        self.start
    }

    /// The last address of the range.
    pub fn end(&self) -> Address {
        self.end
    }

    /// The version of both ends.
    pub fn version(&self) -> IpVersion {
        self.start.version()
    }

    /// The prefix length if this range is exactly one CIDR network, `None` otherwise.
    pub fn prefix_len(&self) -> Option<u8> {
        match self.version() {
            IpVersion::V4 => prefix_len_of(self.start.value() as u32, self.end.value() as u32),
            IpVersion::V6 => prefix_len_of(self.start.value(), self.end.value()),
        }
    }

    /// Check if `self` contains `other`. Ranges of different versions never contain each other.
    /// A range contains itself.
    pub fn contains(&self, other: &Self) -> bool {
        self.version() == other.version() && self.start <= other.start && other.end <= self.end
    }

    /// Check if both ranges share at least one address.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.version() == other.version() && self.start <= other.end && other.start <= self.end
    }

    /// Check if both ranges overlap without one containing the other. Such ranges can never be
    /// present in the same map.
    pub fn conflicts_with(&self, other: &Self) -> bool {
        self.overlaps(other) && !self.contains(other) && !other.contains(self)
    }
}

/// Parse a range written either as `<address>/<prefix-length>` or as `<address>-<address>`. A
/// single address without suffix is not a range.
pub fn parse_range(s: &str) -> Result<IpRange, Error> {
    let s = s.trim();
    if let Some((addr, len)) = s.split_once('/') {
        let address: Address = addr.parse()?;
        let len = len.trim();
        if len.is_empty() || !len.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidRangeFormat(s.to_string()));
        }
        // more digits than any prefix length can have
        let len: u32 = len
            .parse()
            .map_err(|_| Error::InvalidRangeFormat(s.to_string()))?;
        if len > address.version().width() as u32 {
            return Err(Error::InvalidPrefixLength {
                len,
                version: address.version(),
            });
        }
        IpRange::from_prefix(address, len as u8)
    } else if let Some((start, end)) = s.split_once('-') {
        let start: Address = start.parse()?;
        let end: Address = end.parse()?;
        IpRange::new(start, end).map_err(|_| Error::InvalidRangeFormat(s.to_string()))
    } else {
        Err(Error::InvalidRangeFormat(s.to_string()))
    }
}

impl FromStr for IpRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_range(s)
    }
}

impl Display for IpRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.prefix_len() {
            Some(len) => write!(f, "{}/{}", self.start, len),
            None => write!(f, "{}-{}", self.start, self.end),
        }
    }
}

impl Debug for IpRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl From<Address> for IpRange {
    fn from(address: Address) -> Self {
        Self::single(address)
    }
}

impl JointInterval for IpRange {
    type P1 = (u32, u32);
    type P2 = (u128, u128);

    fn p1_or_p2(&self) -> Either<(u32, u32), (u128, u128)> {
        match self.version() {
            IpVersion::V4 => Either::Left((self.start.value() as u32, self.end.value() as u32)),
            IpVersion::V6 => Either::Right((self.start.value(), self.end.value())),
        }
    }

    fn from_p1(p: &(u32, u32)) -> Self {
        Self {
            start: Address::v4(p.0),
            end: Address::v4(p.1),
        }
    }

    fn from_p2(p: &(u128, u128)) -> Self {
        Self {
            start: Address::v6(p.0),
            end: Address::v6(p.1),
        }
    }
}

#[cfg(feature = "ipnet")]
impl From<ipnet::Ipv4Net> for IpRange {
    fn from(net: ipnet::Ipv4Net) -> Self {
        Self {
            start: net.network().into(),
            end: net.broadcast().into(),
        }
    }
}

#[cfg(feature = "ipnet")]
impl From<ipnet::Ipv6Net> for IpRange {
    fn from(net: ipnet::Ipv6Net) -> Self {
        Self {
            start: net.network().into(),
            end: net.broadcast().into(),
        }
    }
}

#[cfg(feature = "ipnet")]
impl From<ipnet::IpNet> for IpRange {
    fn from(net: ipnet::IpNet) -> Self {
        match net {
            ipnet::IpNet::V4(n) => n.into(),
            ipnet::IpNet::V6(n) => n.into(),
        }
    }
}

#[cfg(feature = "ipnet")]
impl TryFrom<IpRange> for ipnet::IpNet {
    type Error = Error;

    fn try_from(range: IpRange) -> Result<Self, Error> {
        let len = range
            .prefix_len()
            .ok_or_else(|| Error::InvalidRangeFormat(range.to_string()))?;
        ipnet::IpNet::new(range.start.to_ip_addr(), len)
            .map_err(|_| Error::InvalidPrefixLength {
                len: len as u32,
                version: range.version(),
            })
    }
}
