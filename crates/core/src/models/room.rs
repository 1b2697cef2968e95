//! Canonical room identifier

use std::fmt;

use serde::{Deserialize, Serialize};

/// Room number normalized to one string form.
///
/// Integers and strings address the same room: `RoomNumber::from(101)` equals
/// `RoomNumber::from("101")`. Strings are kept as given, so `"101 "` is a
/// different room from `"101"`. Ordering is string ordering, never numeric.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct RoomNumber(String);

impl RoomNumber {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RoomNumber {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for RoomNumber {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<&RoomNumber> for RoomNumber {
    fn from(room: &RoomNumber) -> Self {
        room.clone()
    }
}

impl From<RoomNumber> for String {
    fn from(room: RoomNumber) -> Self {
        room.0
    }
}

macro_rules! room_number_from_int {
    ($($int:ty),*) => {
        $(
            impl From<$int> for RoomNumber {
                fn from(number: $int) -> Self {
                    Self(number.to_string())
                }
            }
        )*
    };
}

room_number_from_int!(u16, u32, u64, usize, i32, i64);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_integer_and_string_address_same_room() {
        assert_eq!(RoomNumber::from(101u32), RoomNumber::from("101"));
        assert_eq!(RoomNumber::from(101i64), RoomNumber::from("101".to_string()));
    }

    #[test]
    fn test_strings_kept_verbatim() {
        let room = RoomNumber::from("  231 ");
        assert_eq!(room.as_str(), "  231 ");
        assert_ne!(room, RoomNumber::from(231u32));
    }

    #[test]
    fn test_serializes_as_plain_map_key() {
        let mut rooms = BTreeMap::new();
        rooms.insert(RoomNumber::from(101u32), true);
        let json = serde_json::to_string(&rooms).unwrap();
        assert_eq!(json, r#"{"101":true}"#);

        let parsed: BTreeMap<RoomNumber, bool> = serde_json::from_str(r#"{"7":false}"#).unwrap();
        assert!(parsed.contains_key(&RoomNumber::from(7u16)));
    }

    #[test]
    fn test_keys_differing_by_whitespace_stay_apart() {
        let parsed: BTreeMap<RoomNumber, &str> =
            serde_json::from_str(r#"{"101":"c1","101 ":"c2"}"#).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[&RoomNumber::from(101u32)], "c1");
        assert_eq!(parsed[&RoomNumber::from("101 ")], "c2");
    }
}
