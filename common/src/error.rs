//! エラー型定義

use thiserror::Error;

use crate::form::FormField;

/// フォーム確定時の入力エラー
///
/// 確定はブロックされ、カートとフォームはそのまま残る。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("{} is required", .0.label())]
    MissingField(FormField),

    #[error("Item Price must be a positive number (got \"{0}\")")]
    InvalidPrice(String),

    #[error("Quantity must be a positive whole number (got \"{0}\")")]
    InvalidQuantity(String),
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error(transparent)]
    Form(#[from] FormError),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        let display = format!("{}", error);
        assert!(display.contains("JSON error"));
    }

    #[test]
    fn test_error_display_storage() {
        let error = Error::Storage("quota exceeded".to_string());
        assert_eq!(format!("{}", error), "Storage error: quota exceeded");
    }

    #[test]
    fn test_form_error_uses_field_label() {
        let error = FormError::MissingField(FormField::Quantity);
        assert_eq!(format!("{}", error), "Quantity is required");

        let error = FormError::MissingField(FormField::Name);
        assert_eq!(format!("{}", error), "Item Name is required");
    }

    #[test]
    fn test_form_error_keeps_raw_text() {
        let error = FormError::InvalidPrice("abc".to_string());
        assert!(format!("{}", error).contains("\"abc\""));
    }

    #[test]
    fn test_error_from_form_is_transparent() {
        let error: Error = FormError::InvalidQuantity("0".to_string()).into();
        assert!(matches!(error, Error::Form(_)));
        assert!(format!("{}", error).starts_with("Quantity"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }
}
