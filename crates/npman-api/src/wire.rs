// Serde helpers for the NPM wire format's quirks.
//
// Several endpoints (proxy hosts, redirection hosts, dead hosts) transmit
// boolean fields as JSON integers 0/1; others (streams, access lists) use
// native booleans. `int_bool` serializes as 0/1 and accepts either shape
// on the way in, so wire structs stay tolerant of API version drift.

/// `bool` encoded as JSON 0/1, decoded from either an integer or a
/// native boolean. Apply with `#[serde(with = "wire::int_bool")]`.
pub mod int_bool {
    use serde::de::{self, Deserializer, Visitor};
    use serde::ser::Serializer;

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        struct IntBoolVisitor;

        impl Visitor<'_> for IntBoolVisitor {
            type Value = bool;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a boolean or a 0/1 integer")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
                Ok(v)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<bool, E> {
                Ok(v != 0)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<bool, E> {
                Ok(v != 0)
            }
        }

        deserializer.deserialize_any(IntBoolVisitor)
    }
}

/// Default for wire fields the API reports as enabled when omitted.
pub(crate) fn enabled_default() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Flag {
        #[serde(with = "super::int_bool")]
        on: bool,
    }

    #[test]
    fn int_bool_decodes_integers() {
        let f: Flag = serde_json::from_str(r#"{"on": 1}"#).expect("decode 1");
        assert!(f.on);
        let f: Flag = serde_json::from_str(r#"{"on": 0}"#).expect("decode 0");
        assert!(!f.on);
    }

    #[test]
    fn int_bool_decodes_native_booleans() {
        let f: Flag = serde_json::from_str(r#"{"on": true}"#).expect("decode true");
        assert!(f.on);
        let f: Flag = serde_json::from_str(r#"{"on": false}"#).expect("decode false");
        assert!(!f.on);
    }

    #[test]
    fn int_bool_encodes_as_integer() {
        let json = serde_json::to_string(&Flag { on: true }).expect("encode");
        assert_eq!(json, r#"{"on":1}"#);
        let json = serde_json::to_string(&Flag { on: false }).expect("encode");
        assert_eq!(json, r#"{"on":0}"#);
    }
}
