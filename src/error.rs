//! Error type for load-option construction and decode planning.

/// Errors raised when building load options or planning a decode.
///
/// Every variant is a caller-contract violation; nothing here is retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum LoadError {
    /// A width or height of zero was supplied where a positive size is required.
    #[error("invalid {what} dimensions {width}x{height}: both must be positive")]
    InvalidDimension {
        what: &'static str,
        width: u32,
        height: u32,
    },
    /// A textual value (size, request level) could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
}

impl LoadError {
    pub(crate) fn invalid_dimension(what: &'static str, width: u32, height: u32) -> Self {
        LoadError::InvalidDimension {
            what,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimension_message() {
        let err = LoadError::invalid_dimension("max size", 0, 20);
        assert_eq!(
            err.to_string(),
            "invalid max size dimensions 0x20: both must be positive"
        );
    }

    #[test]
    fn parse_message() {
        let err = LoadError::Parse("expected WIDTHxHEIGHT".into());
        assert_eq!(err.to_string(), "parse error: expected WIDTHxHEIGHT");
    }
}
