//! Error types for strict protocol parsing.
//!
//! The widget pipeline itself never fails: unknown wire values collapse to
//! their defaults inside [`Snapshot::from_entries`](crate::Snapshot::from_entries).
//! These errors are only produced by the strict [`FromStr`](std::str::FromStr)
//! implementations, which are meant for operator input such as CLI arguments.

/// Errors produced when a string does not name a known protocol value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    /// The string is not one of `EMPTY`, `ACTIVE` or `URGENT`.
    #[error("unknown widget state: {0:?}")]
    UnknownState(String),

    /// The string is not one of `GREEN`, `YELLOW` or `RED`.
    #[error("unknown urgency level: {0:?}")]
    UnknownUrgency(String),

    /// The string is not a known action identifier.
    #[error("unknown widget action: {0:?}")]
    UnknownAction(String),

    /// The string is not one of `small`, `medium` or `lock-screen`.
    #[error("unknown form factor: {0:?}")]
    UnknownFormFactor(String),
}

/// A specialized Result type for protocol parsing.
pub type Result<T> = std::result::Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_quotes_input() {
        let err = ProtocolError::UnknownState("SLEEPING".to_string());
        assert_eq!(err.to_string(), r#"unknown widget state: "SLEEPING""#);
    }

    #[test]
    fn error_display_form_factor() {
        let err = ProtocolError::UnknownFormFactor("large".to_string());
        assert_eq!(err.to_string(), r#"unknown form factor: "large""#);
    }
}
