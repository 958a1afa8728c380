use crate::domain::model::SourceFormat;
use crate::utils::error::{ConvertError, Result};

/// Whitespace as JavaScript-style `trim` sees it, which includes the byte-order mark
/// some export tools prepend.
pub fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

pub fn trim_blank(content: &str) -> &str {
    content.trim_matches(is_blank)
}

/// A leading `[` means one JSON array literal; anything else is read as JSONL.
pub fn detect_format(content: &str) -> Result<SourceFormat> {
    match trim_blank(content).chars().next() {
        None => Err(ConvertError::EmptyInput),
        Some('[') => Ok(SourceFormat::JsonArray),
        Some(_) => Ok(SourceFormat::JsonLines),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_detected_after_whitespace() {
        assert_eq!(detect_format("[]").unwrap(), SourceFormat::JsonArray);
        assert_eq!(
            detect_format("\n\t  [{\"a\":1}]\n").unwrap(),
            SourceFormat::JsonArray
        );
        assert_eq!(detect_format("\u{feff}[1]").unwrap(), SourceFormat::JsonArray);
    }

    #[test]
    fn test_everything_else_is_jsonl() {
        assert_eq!(
            detect_format("{\"a\":1}\n{\"a\":2}").unwrap(),
            SourceFormat::JsonLines
        );
        // single bare object
        assert_eq!(
            detect_format("  {\"total_claims\":\"100\"}  ").unwrap(),
            SourceFormat::JsonLines
        );
        assert_eq!(detect_format("not json").unwrap(), SourceFormat::JsonLines);
    }

    #[test]
    fn test_empty_content_is_an_error() {
        assert!(matches!(detect_format(""), Err(ConvertError::EmptyInput)));
        assert!(matches!(
            detect_format(" \r\n\t \n"),
            Err(ConvertError::EmptyInput)
        ));
        assert!(matches!(
            detect_format("\u{feff}\n"),
            Err(ConvertError::EmptyInput)
        ));
    }
}
