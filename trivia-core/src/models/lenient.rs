//! Integer fields that the frontend sends either as numbers or as strings

use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

/// Accept `1` or `"1"` for an `i32` field.
pub fn int<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(n) => n,
        IntOrString::Str(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| de::Error::custom(format!("invalid integer string '{}'", s)))?,
    };

    i32::try_from(value).map_err(|_| de::Error::custom(format!("integer {} out of range", value)))
}
