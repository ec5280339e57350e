use std::fmt::Debug;

use either::Either;

use crate::Interval;

/// Trait that defines a joint interval, for instance, one that describes either an IPv4 or an IPv6
/// range.
pub trait JointInterval: Clone + Debug {
    /// The first interval type, e.g., IPv4
    type P1: Interval;
    /// The second interval type, e.g., IPv6
    type P2: Interval;

    /// Get either `Left(P1)` or `Right(P2)`.
    fn p1_or_p2(&self) -> Either<Self::P1, Self::P2>;

    /// Construct an interval from a reference to the first variant.
    fn from_p1(p: &Self::P1) -> Self;

    /// Construct an interval from a reference to the second variant.
    fn from_p2(p: &Self::P2) -> Self;
}

#[cfg(feature = "ipnet")]
impl JointInterval for ipnet::IpNet {
    type P1 = ipnet::Ipv4Net;
    type P2 = ipnet::Ipv6Net;

    fn p1_or_p2(&self) -> Either<ipnet::Ipv4Net, ipnet::Ipv6Net> {
        match self {
            ipnet::IpNet::V4(p) => Either::Left(*p),
            ipnet::IpNet::V6(p) => Either::Right(*p),
        }
    }

    fn from_p1(p: &Self::P1) -> Self {
        ipnet::IpNet::V4(*p)
    }

    fn from_p2(p: &Self::P2) -> Self {
        ipnet::IpNet::V6(*p)
    }
}

#[cfg(feature = "ipnetwork")]
impl JointInterval for ipnetwork::IpNetwork {
    type P1 = ipnetwork::Ipv4Network;
    type P2 = ipnetwork::Ipv6Network;

    fn p1_or_p2(&self) -> Either<ipnetwork::Ipv4Network, ipnetwork::Ipv6Network> {
        match self {
            ipnetwork::IpNetwork::V4(p) => Either::Left(*p),
            ipnetwork::IpNetwork::V6(p) => Either::Right(*p),
        }
    }

    fn from_p1(p: &Self::P1) -> Self {
        ipnetwork::IpNetwork::V4(*p)
    }

    fn from_p2(p: &Self::P2) -> Self {
        ipnetwork::IpNetwork::V6(*p)
    }
}

#[cfg(feature = "cidr")]
impl JointInterval for cidr::IpCidr {
    type P1 = cidr::Ipv4Cidr;
    type P2 = cidr::Ipv6Cidr;

    fn p1_or_p2(&self) -> Either<cidr::Ipv4Cidr, cidr::Ipv6Cidr> {
        match self {
            cidr::IpCidr::V4(p) => Either::Left(*p),
            cidr::IpCidr::V6(p) => Either::Right(*p),
        }
    }

    fn from_p1(p: &Self::P1) -> Self {
        cidr::IpCidr::V4(*p)
    }

    fn from_p2(p: &Self::P2) -> Self {
        cidr::IpCidr::V6(*p)
    }
}
