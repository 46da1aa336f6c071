//! Error types for draw checking and ticket notification

use thiserror::Error;

/// Errors that can occur while building or delivering a notification
#[derive(Error, Debug)]
pub enum LotteryError {
    /// Player combination has the wrong shape
    #[error("Invalid combination: {0}")]
    InvalidCombination(String),

    /// Neither coupon strategy located a fragment
    #[error("Coupon section not found in email HTML")]
    CouponNotFound,

    /// Draw feed was empty
    #[error("No draws available")]
    NoDraws,

    /// Draw feed was not the expected JSON
    #[error("Failed to decode draw feed: {0}")]
    DrawFeed(#[from] serde_json::Error),

    /// Failed to parse the email structure
    #[error("Failed to parse email structure: {0}")]
    Structure(String),

    /// Email has no text/html part
    #[error("No HTML content found in email")]
    NoHtml,

    /// A configured marker produced an unusable pattern
    #[error("Invalid extraction pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// An external collaborator failed
    #[error("{collaborator} failed: {details}")]
    Collaborator {
        collaborator: &'static str,
        details: String,
    },
}

impl LotteryError {
    pub fn collaborator(collaborator: &'static str, details: impl Into<String>) -> Self {
        Self::Collaborator {
            collaborator,
            details: details.into(),
        }
    }
}

/// Result type for lottery notification operations
pub type Result<T> = std::result::Result<T, LotteryError>;
