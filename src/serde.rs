//! Serialization and Deserialization implementation

use std::fmt::Formatter;
use std::marker::PhantomData;

use ::serde::de::{Error as _, MapAccess, Visitor};
use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::*;

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

impl Serialize for IpRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for IpRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

impl<K: Interval + Serialize, T: Serialize> Serialize for IntervalMap<K, T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self)
    }
}

impl<K: JointInterval + Serialize, T: Serialize> Serialize for JointIntervalMap<K, T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self)
    }
}

/// Builds a map by inserting the entries one by one, so conflicts surface as errors.
struct InsertVisitor<M, K, T>(PhantomData<(M, K, T)>);

/// Maps that can be filled by [`InsertVisitor`].
trait InsertInto<K, T>: Default {
    fn insert_entry(&mut self, key: K, value: T) -> Result<(), Error>;
}

impl<K: Interval, T> InsertInto<K, T> for IntervalMap<K, T> {
    fn insert_entry(&mut self, key: K, value: T) -> Result<(), Error> {
        self.insert(key, value).map(|_| ())
    }
}

impl<K: JointInterval, T> InsertInto<K, T> for JointIntervalMap<K, T> {
    fn insert_entry(&mut self, key: K, value: T) -> Result<(), Error> {
        self.insert(key, value).map(|_| ())
    }
}

impl<'de, M, K, T> Visitor<'de> for InsertVisitor<M, K, T>
where
    M: InsertInto<K, T>,
    K: Deserialize<'de>,
    T: Deserialize<'de>,
{
    type Value = M;

    fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("a map from ranges to values")
    }

    fn visit_map<A>(self, mut access: A) -> Result<M, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = M::default();
        while let Some((key, value)) = access.next_entry::<K, T>()? {
            map.insert_entry(key, value).map_err(A::Error::custom)?;
        }
        Ok(map)
    }
}

impl<'de, K, T> Deserialize<'de> for IntervalMap<K, T>
where
    K: Interval + Deserialize<'de>,
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(InsertVisitor::<Self, K, T>(PhantomData))
    }
}

impl<'de, K, T> Deserialize<'de> for JointIntervalMap<K, T>
where
    K: JointInterval + Deserialize<'de>,
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(InsertVisitor::<Self, K, T>(PhantomData))
    }
}
