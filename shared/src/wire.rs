//! # Wire Encoding Helpers
//!
//! The backend encodes 64-bit numbers as JSON strings (identifiers would
//! lose precision in JavaScript clients otherwise), and timestamps and
//! fractional hours follow the same convention. This module holds the
//! `Uuid` newtype and the serde adapters for those string-encoded fields.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Unique identifier for users, groups, messages and login tokens.
///
/// Transmitted as a decimal string on the wire. `0` is the invalid
/// sentinel; the backend never issues it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Uuid(pub u64);

pub const INVALID_UUID: Uuid = Uuid(0);

impl Uuid {
    pub fn is_valid(&self) -> bool {
        self.0 != 0
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Uuid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

struct UuidVisitor;

impl<'de> Visitor<'de> for UuidVisitor {
    type Value = Uuid;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a u64 or a decimal string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Uuid, E> {
        v.parse::<u64>().map(Uuid).map_err(de::Error::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Uuid, E> {
        Ok(Uuid(v))
    }
}

impl<'de> Deserialize<'de> for Uuid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Uuid, D::Error> {
        deserializer.deserialize_any(UuidVisitor)
    }
}

/// Serde adapter for `i64` fields carried as decimal strings.
pub mod i64_string {
    use super::*;

    pub fn serialize<S: Serializer>(v: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(v)
    }

    struct I64Visitor;

    impl<'de> Visitor<'de> for I64Visitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an i64 or a decimal string")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
            v.parse().map_err(de::Error::custom)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            i64::try_from(v).map_err(de::Error::custom)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        deserializer.deserialize_any(I64Visitor)
    }
}

/// Serde adapter for `f64` fields carried as decimal strings.
pub mod f64_string {
    use super::*;

    pub fn serialize<S: Serializer>(v: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(v)
    }

    struct F64Visitor;

    impl<'de> Visitor<'de> for F64Visitor {
        type Value = f64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an f64 or a decimal string")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            v.parse().map_err(de::Error::custom)
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        deserializer.deserialize_any(F64Visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_round_trips_as_string() {
        let uuid = Uuid(18446744073709551615);
        let json = serde_json::to_string(&uuid).unwrap();
        assert_eq!(json, "\"18446744073709551615\"");
        let back: Uuid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, uuid);
    }

    #[test]
    fn uuid_accepts_bare_numbers() {
        let uuid: Uuid = serde_json::from_str("42").unwrap();
        assert_eq!(uuid, Uuid(42));
    }

    #[test]
    fn invalid_uuid_sentinel() {
        assert!(!INVALID_UUID.is_valid());
        assert!(Uuid(1).is_valid());
    }

    #[derive(Serialize, Deserialize)]
    struct Stamp {
        #[serde(with = "i64_string")]
        at: i64,
        #[serde(with = "f64_string")]
        hour: f64,
    }

    #[test]
    fn string_encoded_numbers_round_trip() {
        let json = r#"{"at":"1650000000","hour":"13.5"}"#;
        let stamp: Stamp = serde_json::from_str(json).unwrap();
        assert_eq!(stamp.at, 1650000000);
        assert_eq!(stamp.hour, 13.5);
        let out = serde_json::to_string(&stamp).unwrap();
        assert_eq!(out, json);
    }
}
