//! Move view functions return 64-bit integers as decimal strings; these
//! helpers accept either shape and always write strings back.

/// `#[serde(with = "u64_string")]` for `u64` fields.
pub mod u64_string {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Str(String),
            Num(u64),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Str(s) => s.parse().map_err(D::Error::custom),
            Repr::Num(n) => Ok(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        #[serde(with = "super::u64_string")]
        value: u64,
    }

    #[test]
    fn test_accepts_string_and_number() {
        let a: Record = serde_json::from_str(r#"{"value":"1700000000"}"#).unwrap();
        let b: Record = serde_json::from_str(r#"{"value":1700000000}"#).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            r#"{"value":"1700000000"}"#
        );
    }

    #[test]
    fn test_rejects_non_numeric_string() {
        assert!(serde_json::from_str::<Record>(r#"{"value":"soon"}"#).is_err());
        assert!(serde_json::from_str::<Record>(r#"{"value":"-1"}"#).is_err());
    }
}
