//! Module that defines the joint version of an interval map, holding one tree per address family.
//! You can access each individual tree of the joint map to operate on one family only.
//!
//! A joint map always returns owned instances of the (joint) interval, and thus creates copies of
//! the keys. This is no problem for [`crate::IpRange`] and the network types of `ipnet`,
//! `ipnetwork` and `cidr`, which all implement `Copy`.

macro_rules! fork {
    ($self:ident, $range:ident, $func:ident $(, $args:expr)*) => {
        match $range.p1_or_p2() {
            ::either::Either::Left(r) => $self.t1.$func(&r $(, $args)*),
            ::either::Either::Right(r) => $self.t2.$func(&r $(, $args)*),
        }
    };
}

mod interval;
pub mod map;

pub use interval::JointInterval;
pub use map::JointIntervalMap;
