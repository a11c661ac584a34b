//! Error types for document structuring.
//!
//! This module defines all error types that can occur while turning page
//! content into a structural document model.

/// Result type alias for document structuring operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document structuring.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The page content provider failed for a page.
    ///
    /// The core has no fallback data source, so provider failures are
    /// propagated to the caller as hard failures for that page.
    #[error("Content provider failed on page {page}: {reason}")]
    Provider {
        /// Zero-based page index where the failure occurred
        page: usize,
        /// Reason for the failure
        reason: String,
    },

    /// The OCR provider failed for a scan page.
    #[error("OCR failed on page {page}: {reason}")]
    Ocr {
        /// Zero-based page index where the failure occurred
        page: usize,
        /// Reason for the failure
        reason: String,
    },

    /// A serialized page dump could not be interpreted.
    #[error("Invalid page dump: {0}")]
    InvalidDump(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error() {
        let err = Error::Provider {
            page: 3,
            reason: "extraction backend crashed".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("page 3"));
        assert!(msg.contains("extraction backend crashed"));
    }

    #[test]
    fn test_ocr_error() {
        let err = Error::Ocr {
            page: 0,
            reason: "engine unavailable".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("OCR failed"));
        assert!(msg.contains("page 0"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
