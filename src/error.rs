//! This module implements `DurationError`.

use core::fmt;

/// `DurationError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Error.
    #[default]
    Generic,
    /// RangeError.
    Range,
    /// Implementation error.
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => "Error",
            Self::Range => "RangeError",
            Self::Assert => "ImplementationError",
        }
        .fmt(f)
    }
}

/// The error type for `human_duration`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationError {
    kind: ErrorKind,
    msg: ErrorMessageInner,
}

impl DurationError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: ErrorMessageInner::Empty,
        }
    }

    /// Create a generic error
    #[inline]
    #[must_use]
    pub const fn general(msg: &'static str) -> Self {
        Self::new(ErrorKind::Generic).with_message(msg)
    }

    /// Create a range error.
    #[inline]
    #[must_use]
    pub const fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Create an assertion error, used for internal invariants that did
    /// not hold.
    #[inline]
    #[must_use]
    pub const fn assert() -> Self {
        Self::new(ErrorKind::Assert)
    }

    /// Add a message to the error.
    #[inline]
    #[must_use]
    pub const fn with_message(mut self, msg: &'static str) -> Self {
        self.msg = ErrorMessageInner::Static(msg);
        self
    }

    /// Add a known message to the error.
    #[inline]
    #[must_use]
    pub const fn with_enum(mut self, msg: ErrorMessage) -> Self {
        self.msg = ErrorMessageInner::Enum(msg);
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &'static str {
        self.msg.to_str()
    }
}

impl fmt::Display for DurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.message();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

impl core::error::Error for DurationError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorMessageInner {
    Empty,
    Static(&'static str),
    Enum(ErrorMessage),
}

impl ErrorMessageInner {
    fn to_str(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::Static(s) => s,
            Self::Enum(e) => e.to_str(),
        }
    }
}

/// Known error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorMessage {
    ZeroGranularity,
    NegativeGranularity,
    RoundingOverflow,
}

impl ErrorMessage {
    /// Returns the message as a static string.
    #[must_use]
    pub fn to_str(self) -> &'static str {
        match self {
            Self::ZeroGranularity => "Rounding granularity must not be zero.",
            Self::NegativeGranularity => "Rounding granularity must be positive.",
            Self::RoundingOverflow => "Rounded duration is out of range.",
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{DurationError, ErrorKind, ErrorMessage};

    #[test]
    fn error_display() {
        let err = DurationError::range().with_enum(ErrorMessage::ZeroGranularity);
        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(
            err.to_string(),
            "RangeError: Rounding granularity must not be zero."
        );

        let err = DurationError::general("something went wrong");
        assert_eq!(err.to_string(), "Error: something went wrong");

        assert_eq!(DurationError::assert().to_string(), "ImplementationError");
    }
}
