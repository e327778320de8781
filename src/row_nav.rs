//! Clickable list rows.
//!
//! A click on a row navigates to the row's `data-href` unless the user is
//! selecting text. Drag-selecting a cell to copy it produces a click event as
//! well, and the non-empty selection is what tells the two apart.

#[cfg(test)]
#[path = "row_nav_test.rs"]
mod row_nav_test;

use crate::consts::ROW_TARGET_ATTR;
use crate::dom::{AttributeSource, Location, SelectionSource};
use crate::error::PageError;

/// What a single row click resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowClick {
    /// No selection; the browser was sent to the target.
    Navigate(String),
    /// The user was selecting text; navigation suppressed.
    SelectionActive,
    /// The row has no usable target.
    MissingTarget,
}

/// The row's navigation target, ignoring blank values.
pub fn row_target<R: AttributeSource + ?Sized>(row: &R) -> Option<String> {
    row.attribute(ROW_TARGET_ATTR).filter(|href| !href.trim().is_empty())
}

/// Decide what a click does without performing it.
///
/// A missing selection object counts as an empty selection.
pub fn resolve_click<S: SelectionSource + ?Sized>(target: Option<String>, selection: &S) -> RowClick {
    let selecting = selection
        .selected_text()
        .is_some_and(|text| !text.is_empty());
    if selecting {
        return RowClick::SelectionActive;
    }
    match target {
        Some(url) => RowClick::Navigate(url),
        None => RowClick::MissingTarget,
    }
}

/// Handle one click on `row`, navigating through `location` when appropriate.
///
/// # Errors
///
/// Returns [`PageError::Navigation`] if the location rejects the target.
pub fn handle_click<R, S, L>(row: &R, selection: &S, location: &L) -> Result<RowClick, PageError>
where
    R: AttributeSource + ?Sized,
    S: SelectionSource + ?Sized,
    L: Location + ?Sized,
{
    let outcome = resolve_click(row_target(row), selection);
    match &outcome {
        RowClick::Navigate(url) => location.assign(url)?,
        RowClick::SelectionActive => log::debug!("row click ignored: text selection active"),
        RowClick::MissingTarget => log::warn!("clickable row has no {ROW_TARGET_ATTR}"),
    }
    Ok(outcome)
}

/// Attach a click handler to every row via `bind`.
///
/// Rows are independent: a row that fails to bind is logged and skipped.
/// Returns the number of handlers attached.
pub fn bind_rows<R, I, B>(rows: I, mut bind: B) -> usize
where
    I: IntoIterator<Item = R>,
    B: FnMut(R) -> Result<(), PageError>,
{
    let mut bound = 0;
    for row in rows {
        match bind(row) {
            Ok(()) => bound += 1,
            Err(e) => log::error!("clickable row not bound: {e}"),
        }
    }
    log::debug!("bound {bound} clickable rows");
    bound
}
