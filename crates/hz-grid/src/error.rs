// SPDX-License-Identifier: MIT
//
// Errors raised by the pattern core. There is exactly one kind: the caller
// handed us something malformed. No I/O happens here, so nothing transient
// can fail.

/// Error raised at the entry of a failing build or render.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Empty sequences, a zero cell size, declared dimensions that do not
    /// match the sequences, or a render cell size that does not match the
    /// grid.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }
}

/// Result alias used throughout the pattern crates.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_reason() {
        let err = Error::invalid("horizontal sequence is empty");
        assert_eq!(err.to_string(), "invalid input: horizontal sequence is empty");
    }
}
