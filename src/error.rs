use thiserror::Error;

pub const SHAPE_ERROR_MESSAGE: &str =
    "Invalid schema structure. Must include formTitle, formDescription, and fields array.";

/// Why the editor buffer could not be turned into a form schema.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    /// Malformed JSON; carries the parser's own message.
    #[error("{0}")]
    Parse(String),

    /// Well-formed JSON missing one of the required top-level keys.
    #[error("{}", SHAPE_ERROR_MESSAGE)]
    Shape,
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        SchemaError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_message_is_fixed() {
        assert_eq!(SchemaError::Shape.to_string(), SHAPE_ERROR_MESSAGE);
    }

    #[test]
    fn test_parse_message_passes_through() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let expected = err.to_string();
        assert_eq!(SchemaError::from(err).to_string(), expected);
    }
}
