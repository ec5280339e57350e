//! Single IP addresses, tagged with their version.

use std::fmt::{Debug, Display, Formatter};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::Error;

/// Version of an IP address.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum IpVersion {
    /// 32-bit addresses.
    V4,
    /// 128-bit addresses.
    V6,
}

impl IpVersion {
    /// Number of bits of an address of this version.
    pub const fn width(self) -> u8 {
        match self {
            IpVersion::V4 => 32,
            IpVersion::V6 => 128,
        }
    }

    /// The largest address value of this version.
    pub const fn max_value(self) -> u128 {
        match self {
            IpVersion::V4 => u32::MAX as u128,
            IpVersion::V6 => u128::MAX,
        }
    }
}

impl Display for IpVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            IpVersion::V4 => f.write_str("IPv4"),
            IpVersion::V6 => f.write_str("IPv6"),
        }
    }
}

/// An IPv4 or IPv6 address, stored as an unsigned integer. IPv4 addresses only use the lower 32
/// bits of the value.
///
/// Addresses are ordered first by version (all IPv4 addresses are smaller than any IPv6
/// address), and then by value.
///
/// ```
/// # use nested_interval_map::*;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let addr: Address = "010.000.000.001".parse()?;
/// assert_eq!(addr, Address::v4(0x0a000001));
/// assert_eq!(addr.to_string(), "10.0.0.1");
/// let addr: Address = "2001:DB8:0:0:0:0:0:1".parse()?;
/// assert_eq!(addr.version(), IpVersion::V6);
/// assert_eq!(addr.to_string(), "2001:db8::1");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address {
    version: IpVersion,
    value: u128,
}

impl Address {
    /// Create an IPv4 address from its integer representation.
    pub const fn v4(value: u32) -> Self {
        Self {
            version: IpVersion::V4,
            value: value as u128,
        }
    }

    /// Create an IPv6 address from its integer representation.
    pub const fn v6(value: u128) -> Self {
        Self {
            version: IpVersion::V6,
            value,
        }
    }

    /// Create an address of the given version. Returns `None` if `value` does not fit into the
    /// width of `version`.
    pub fn new(version: IpVersion, value: u128) -> Option<Self> {
        (value <= version.max_value()).then_some(Self { version, value })
    }

    /// The version of the address.
    pub fn version(&self) -> IpVersion {
        self.version
    }

    /// The integer representation of the address.
    pub fn value(&self) -> u128 {
        self.value
    }

    /// Convert the address into the standard library representation.
    pub fn to_ip_addr(&self) -> IpAddr {
        match self.version {
            IpVersion::V4 => IpAddr::V4(Ipv4Addr::from(self.value as u32)),
            IpVersion::V6 => IpAddr::V6(Ipv6Addr::from(self.value)),
        }
    }
}

/// Parse an address. IPv4 addresses are written as dotted quads. Each octet is read as a decimal
/// number, even if it carries leading zeros (`010.0.0.1` is `10.0.0.1`). IPv6 addresses are
/// written in colon-hex notation, with optional `::` compression and an optional embedded IPv4
/// tail (`::ffff:192.0.2.128`).
pub fn parse_address(s: &str) -> Result<Address, Error> {
    let s = s.trim();
    let invalid = || Error::InvalidAddressFormat(s.to_string());
    if s.contains(':') {
        parse_colon_hex(s).map(Address::v6).ok_or_else(invalid)
    } else {
        parse_dotted_quad(s).map(Address::v4).ok_or_else(invalid)
    }
}

/// Parse the colon-hex notation. An embedded IPv4 tail is read with [`parse_dotted_quad`], so it
/// accepts leading zeros like a plain IPv4 address does.
fn parse_colon_hex(s: &str) -> Option<u128> {
    match s.rsplit_once(':') {
        Some((head, tail)) if tail.contains('.') => {
            let v4 = parse_dotted_quad(tail)?;
            let groups = format!("{head}:{:x}:{:x}", v4 >> 16, v4 & 0xffff);
            Ipv6Addr::from_str(&groups).ok().map(u128::from)
        }
        _ => Ipv6Addr::from_str(s).ok().map(u128::from),
    }
}

/// Parse the dotted-quad notation without treating leading zeros as octal.
fn parse_dotted_quad(s: &str) -> Option<u32> {
    let mut value: u32 = 0;
    let mut octets = 0;
    for part in s.split('.') {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let digits = part.trim_start_matches('0');
        let octet: u8 = if digits.is_empty() {
            0
        } else {
            digits.parse().ok()?
        };
        value = (value << 8) | octet as u32;
        octets += 1;
        if octets > 4 {
            return None;
        }
    }
    (octets == 4).then_some(value)
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_address(s)
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.to_ip_addr(), f)
    }
}

impl Debug for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Self {
        Address::v4(addr.into())
    }
}

impl From<Ipv6Addr> for Address {
    fn from(addr: Ipv6Addr) -> Self {
        Address::v6(addr.into())
    }
}

impl From<IpAddr> for Address {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(a) => a.into(),
            IpAddr::V6(a) => a.into(),
        }
    }
}

impl From<Address> for IpAddr {
    fn from(addr: Address) -> Self {
        addr.to_ip_addr()
    }
}
