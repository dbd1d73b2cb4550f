use ledgerlink::errors::{LedgerlinkError, Result};
use std::error::Error;

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_storage_operation_error() {
        let error = LedgerlinkError::storage_operation("写入失败");

        assert!(matches!(error, LedgerlinkError::StorageOperation(_)));
        assert!(error.to_string().contains("Storage Operation Error"));
        assert!(error.to_string().contains("写入失败"));
    }

    #[test]
    fn test_missing_context_error() {
        let error = LedgerlinkError::missing_context("no sender");

        assert!(matches!(error, LedgerlinkError::MissingContext(_)));
        assert_eq!(error.message(), "no sender");
    }

    #[test]
    fn test_codes_are_unique() {
        let errors = [
            LedgerlinkError::storage_operation(""),
            LedgerlinkError::storage_plugin_not_found(""),
            LedgerlinkError::file_operation(""),
            LedgerlinkError::serialization(""),
            LedgerlinkError::config(""),
            LedgerlinkError::invalid_identity(""),
            LedgerlinkError::invalid_argument(""),
            LedgerlinkError::missing_context(""),
        ];
        let mut codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_format_simple() {
        let error = LedgerlinkError::invalid_argument("bad arg");
        assert_eq!(error.format_simple(), "Invalid Argument: bad arg");
    }
}

#[cfg(test)]
mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error: LedgerlinkError = io.into();
        assert!(matches!(error, LedgerlinkError::FileOperation(_)));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let error: LedgerlinkError = json_err.into();
        assert!(matches!(error, LedgerlinkError::Serialization(_)));
    }

    #[test]
    fn test_from_hex_error() {
        let hex_err = hex::decode("zz").unwrap_err();
        let error: LedgerlinkError = hex_err.into();
        assert!(matches!(error, LedgerlinkError::InvalidIdentity(_)));
    }

    #[test]
    fn test_question_mark_propagation() {
        fn parse() -> Result<u32> {
            let value: u32 = serde_json::from_str("\"x\"")?;
            Ok(value)
        }
        assert!(parse().is_err());
    }

    #[test]
    fn test_is_std_error() {
        let error = LedgerlinkError::config("x");
        let dyn_err: &dyn Error = &error;
        assert!(dyn_err.source().is_none());
    }
}
