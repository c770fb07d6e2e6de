//! # dyn-json
//!
//! A self-contained, dynamically-typed JSON value tree for application code
//! that builds, inspects, and traverses JSON without binding to a fixed
//! schema.
//!
//! The whole crate revolves around one type: [`Value`], a closed union of
//! the six JSON variants (number, string, bool, array, object, null). It
//! serializes to and from any serde-compatible format, offers structural
//! accessors with explicit fail-fast vs. recovering variants, constructs
//! from native literals via [`value!`], and pretty-prints for debugging.
//!
//! ## Quick start
//!
//! ```rust
//! use dyn_json::{from_json, value, Value};
//!
//! let mut v = from_json(r#"{"name":"Alice","scores":[95,87]}"#).unwrap();
//! assert_eq!(v.get("name").and_then(Value::as_str), Some("Alice"));
//! assert_eq!(v.get("scores").map(|s| s[0].clone()), Some(value!(95)));
//!
//! v.set("active", true);
//! assert_eq!(v.get("active").and_then(Value::as_bool), Some(true));
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the `Value` union, predicates, typed getters, accessors
//! - [`ser`] — serde `Serialize` impl + [`to_json`]
//! - [`de`] — serde `Deserialize` impl + [`from_json`]
//! - [`render`] — indented debug rendering (NOT re-parseable JSON)
//! - [`error`] — error type for the text helpers

pub mod de;
pub mod error;
mod macros;
pub mod render;
pub mod ser;
pub mod value;

pub use de::from_json;
pub use error::JsonError;
pub use render::render;
pub use ser::to_json;
pub use value::Value;
