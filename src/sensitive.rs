//! Wrapper that keeps credentials out of logs.

use std::fmt;

/// Marker printed in place of a sensitive value.
pub const REDACTED: &str = "***";

/// Holds a secret (an API key) and redacts it in `Debug` and `Display`.
///
/// The only way to read the value is [`Sensitive::expose`], which keeps the
/// call sites that put the key on the wire easy to find.
#[derive(Clone, PartialEq, Eq)]
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    pub fn expose(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for Sensitive<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}
