//! Element capabilities the page behaviors depend on.
//!
//! Behaviors receive handles implementing these traits instead of querying the
//! global document, so each one runs against in-memory fakes in unit tests.
//! With the `hydrate` feature, [`crate::browser`] implements them for the
//! matching `web_sys` types.
//!
//! All methods take `&self`: DOM nodes are shared handles and mutation goes
//! through the browser, not through Rust ownership.

use crate::error::PageError;

/// An element with a writable form value, e.g. `<input>`.
pub trait ValueSlot {
    fn set_value(&self, value: &str);
}

/// An element whose rendered text is read and replaced.
pub trait TextSlot {
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
}

/// The document's current text selection.
pub trait SelectionSource {
    /// Selected text, or `None` when the browser exposes no selection object.
    fn selected_text(&self) -> Option<String>;
}

/// The browser location.
pub trait Location {
    /// Navigate to `url` with a full page load.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Navigation`] if the browser rejects the URL.
    fn assign(&self, url: &str) -> Result<(), PageError>;
}

/// Attribute access on a single element.
pub trait AttributeSource {
    fn attribute(&self, name: &str) -> Option<String>;
}
