//! Encode adapter: [`Value`] into any serde serializer.
//!
//! Encoding is total — every variant has exactly one wire shape and no
//! variant can fail to encode. Null is emitted as an explicit null marker
//! (serde unit), never as absence.
//!
//! One text-level caveat: JSON has no token for NaN or the infinities, so
//! serde_json writes non-finite numbers as `null`. A `Number(NAN)` tree
//! therefore comes back as `Null` after a trip through JSON text. This is
//! the format's limitation, not the adapter's — a format with non-finite
//! number tokens receives the payload unchanged through `serialize_f64`.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::error::Result;
use crate::Value;

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
            Value::Null => serializer.serialize_unit(),
        }
    }
}

/// Serialize a [`Value`] tree to compact JSON text.
///
/// Object member order follows `HashMap` iteration and is not
/// deterministic across runs. Non-finite numbers are written as `null`
/// (JSON text cannot represent them), so they do not survive a text
/// round trip as numbers.
pub fn to_json(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}
