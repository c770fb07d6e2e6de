//! Error types for the JSON text helpers.

use thiserror::Error;

/// Errors surfaced by [`crate::from_json`] and [`crate::to_json`].
///
/// Decoding a [`crate::Value`] from a well-formed payload never fails —
/// unclassifiable shapes degrade to `Null` — so in practice the only
/// error source is the underlying text parser. The encode path shares
/// this type because `serde_json::to_string` is fallible by signature,
/// but a `Value` tree gives it nothing to fail on (string keys only, no
/// custom `Serialize` impls underneath).
#[derive(Error, Debug)]
pub enum JsonError {
    /// The underlying JSON text layer reported a failure; for `from_json`
    /// this means the input text was not valid JSON.
    #[error("JSON syntax error: {0}")]
    Syntax(#[from] serde_json::Error),
}

/// Convenience alias used throughout dyn-json.
pub type Result<T> = std::result::Result<T, JsonError>;
