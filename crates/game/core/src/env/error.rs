//! Oracle access errors.
//!
//! Errors related to text and item-template lookups. Effects never handle
//! these themselves; they propagate to whoever registered or rendered.

use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when accessing oracle data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// Localized text entry was not found.
    #[error("text '{category}/{key}' not found")]
    TextNotFound { category: String, key: String },

    /// Text-resource record was not found by numeric code.
    #[error("text record {0} not found")]
    TextRecordNotFound(u16),

    /// Item template was not found by id.
    #[error("item template {0} not found")]
    ItemTemplateNotFound(i32),
}

impl OracleError {
    pub fn text_not_found(category: impl Into<String>, key: impl Into<String>) -> Self {
        Self::TextNotFound {
            category: category.into(),
            key: key.into(),
        }
    }
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        // Not found errors are validation errors - invalid references
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            TextNotFound { .. } => "ORACLE_TEXT_NOT_FOUND",
            TextRecordNotFound(_) => "ORACLE_TEXT_RECORD_NOT_FOUND",
            ItemTemplateNotFound(_) => "ORACLE_ITEM_TEMPLATE_NOT_FOUND",
        }
    }
}
