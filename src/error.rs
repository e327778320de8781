//! Error types for page behaviors and their browser bindings.

/// Failures while binding behaviors to the live document.
///
/// None of these reach the user: the composition root logs them and moves on
/// to the next behavior.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PageError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("selector query failed for {selector}: {message}")]
    Query { selector: String, message: String },
    #[error("failed to attach {event} listener: {message}")]
    Listener { event: String, message: String },
    #[error("cannot read the local time: {0}")]
    Clock(String),
    #[error("navigation to {url} failed: {message}")]
    Navigation { url: String, message: String },
}
