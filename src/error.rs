//! Error types for the portfolio page
//!
//! Every expected-but-absent condition (an unknown tab name, a missing DOM
//! element) is a recoverable error: callers log it and continue. Nothing in
//! this crate is fatal to the hosting page.

use thiserror::Error;

/// Errors that can occur while driving the page
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UiError {
    /// A tab switch named a section outside the tab set
    #[error("unknown tab: {0}")]
    UnknownTab(String),

    /// A tab set was constructed with no sections
    #[error("tab set has no sections")]
    EmptyTabSet,

    /// A by-id DOM lookup found nothing
    #[error("missing expected element: #{0}")]
    MissingElement(String),

    /// A by-id DOM lookup found an element of the wrong type
    #[error("element #{0} is not a text input")]
    NotAnInput(String),

    /// No window or document is available (not running in a browser)
    #[error("document is not available")]
    DocumentUnavailable,
}

/// Result type alias for page operations
pub type Result<T> = std::result::Result<T, UiError>;
