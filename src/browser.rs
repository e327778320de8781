//! `web_sys` bindings for the element traits and the per-behavior DOM lookups.
//!
//! This is the only module that touches the live document. Each `run_*`
//! function finds the elements one behavior needs and hands them to the
//! browser-independent logic in [`crate::date_default`], [`crate::row_nav`]
//! and [`crate::money_summary`].

use time::{PrimitiveDateTime, UtcOffset};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Window};

use crate::consts::{CLICKABLE_ROW_SELECTOR, DATE_INPUT_ID, GROSS_SELECTOR, NET_SELECTOR, TAX_SELECTOR};
use crate::date_default;
use crate::dom::{AttributeSource, Location, SelectionSource, TextSlot, ValueSlot};
use crate::error::PageError;
use crate::money::MoneyFormat;
use crate::money_summary::{self, MoneySummary};
use crate::row_nav;

// --- Trait impls ---

impl ValueSlot for HtmlInputElement {
    fn set_value(&self, value: &str) {
        HtmlInputElement::set_value(self, value);
    }
}

impl TextSlot for HtmlElement {
    fn text(&self) -> String {
        self.inner_text()
    }

    fn set_text(&self, text: &str) {
        self.set_inner_text(text);
    }
}

impl AttributeSource for Element {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }
}

/// Current selection of a window.
pub struct WindowSelection<'a>(pub &'a Window);

impl SelectionSource for WindowSelection<'_> {
    fn selected_text(&self) -> Option<String> {
        match self.0.get_selection() {
            Ok(Some(selection)) => Some(String::from(selection.to_string())),
            Ok(None) | Err(_) => None,
        }
    }
}

impl Location for web_sys::Location {
    fn assign(&self, url: &str) -> Result<(), PageError> {
        self.set_href(url).map_err(|e| PageError::Navigation { url: url.to_owned(), message: js_message(&e) })
    }
}

// --- Lookups ---

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// The global window.
///
/// # Errors
///
/// Returns [`PageError::NoWindow`] outside a browser context.
pub fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::NoWindow)
}

/// The window's document.
///
/// # Errors
///
/// Returns [`PageError::NoDocument`] if the window has none.
pub fn document(window: &Window) -> Result<Document, PageError> {
    window.document().ok_or(PageError::NoDocument)
}

/// An attribute of `<body>`.
///
/// # Errors
///
/// Returns [`PageError::NoBody`] before the body is parsed.
pub fn body_attribute(document: &Document, name: &str) -> Result<Option<String>, PageError> {
    let body = document.body().ok_or(PageError::NoBody)?;
    Ok(body.get_attribute(name))
}

fn query_html(document: &Document, selector: &str) -> Result<Option<HtmlElement>, PageError> {
    let found = document
        .query_selector(selector)
        .map_err(|e| PageError::Query { selector: selector.to_owned(), message: js_message(&e) })?;
    Ok(found.and_then(|el| cast::<HtmlElement>(el, selector)))
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, PageError> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|e| PageError::Query { selector: selector.to_owned(), message: js_message(&e) })?;
    Ok((0..nodes.length())
        .filter_map(|idx| nodes.get(idx))
        .filter_map(|node| cast::<Element>(node, selector))
        .collect())
}

/// `value` as a `T`, or `None` (logged) when it is some other node type.
fn cast<T: JsCast>(value: impl JsCast, what: &str) -> Option<T> {
    match value.dyn_into::<T>() {
        Ok(cast) => Some(cast),
        Err(_) => {
            log::debug!("{what} matched a node of an unexpected type");
            None
        }
    }
}

fn clock_error(e: &time::error::ComponentRange) -> PageError {
    PageError::Clock(e.to_string())
}

/// The local wall-clock time, to the second.
///
/// # Errors
///
/// Returns [`PageError::Clock`] if the browser clock yields an unrepresentable time.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn now_local() -> Result<PrimitiveDateTime, PageError> {
    let now = js_sys::Date::new_0();
    let month = time::Month::try_from((now.get_month() + 1) as u8).map_err(|e| clock_error(&e))?;
    let date = time::Date::from_calendar_date(now.get_full_year() as i32, month, now.get_date() as u8)
        .map_err(|e| clock_error(&e))?;
    let time = time::Time::from_hms(now.get_hours() as u8, now.get_minutes() as u8, now.get_seconds() as u8)
        .map_err(|e| clock_error(&e))?;
    Ok(PrimitiveDateTime::new(date, time))
}

/// The zone offset the browser applies at local wall-clock time `at`.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn local_offset_at(at: PrimitiveDateTime) -> Option<UtcOffset> {
    let Ok(year) = u32::try_from(at.year()) else {
        return None;
    };
    let local = js_sys::Date::new_with_year_month_day_hr_min_sec(
        year,
        i32::from(u8::from(at.month())) - 1,
        i32::from(at.day()),
        i32::from(at.hour()),
        i32::from(at.minute()),
        i32::from(at.second()),
    );
    // Minutes to add to local time to reach UTC.
    let minutes = local.get_timezone_offset();
    if !minutes.is_finite() {
        return None;
    }
    match UtcOffset::from_whole_seconds(-(minutes as i32) * 60) {
        Ok(offset) => Some(offset),
        Err(e) => {
            log::warn!("browser zone offset {minutes} min unsupported: {e}");
            None
        }
    }
}

// --- Behaviors ---

/// Default the invoice date input, if the page has one.
///
/// # Errors
///
/// Returns [`PageError::Clock`] if the local time cannot be read.
pub fn run_date_default(document: &Document) -> Result<Option<String>, PageError> {
    let field = document
        .get_element_by_id(DATE_INPUT_ID)
        .and_then(|el| cast::<HtmlInputElement>(el, DATE_INPUT_ID));
    let Some(field) = field else {
        log::debug!("no #{DATE_INPUT_ID} on page");
        return Ok(None);
    };
    let now = now_local()?;
    Ok(date_default::apply_default_date(Some(&field), now, local_offset_at))
}

/// Attach click navigation to every clickable row. Returns the number bound.
///
/// Handlers live for the rest of the page, so their closures are leaked to JS.
///
/// # Errors
///
/// Returns [`PageError::Query`] if the row selector cannot be evaluated.
pub fn run_row_navigation(window: &Window, document: &Document) -> Result<usize, PageError> {
    let rows = query_all(document, CLICKABLE_ROW_SELECTOR)?;
    Ok(row_nav::bind_rows(rows, |row| bind_row(window, row)))
}

fn bind_row(window: &Window, row: Element) -> Result<(), PageError> {
    let window = window.clone();
    let target = row.clone();
    let handler = Closure::wrap(Box::new(move || {
        let location = window.location();
        if let Err(e) = row_nav::handle_click(&target, &WindowSelection(&window), &location) {
            log::error!("row navigation failed: {e}");
        }
    }) as Box<dyn FnMut()>);

    row.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
        .map_err(|e| PageError::Listener { event: "click".into(), message: js_message(&e) })?;
    handler.forget();
    Ok(())
}

/// Format the net / tax / gross amounts on the invoice detail page.
///
/// # Errors
///
/// Returns [`PageError::Query`] if a selector cannot be evaluated.
pub fn run_money_summary(document: &Document, format: &MoneyFormat) -> Result<Option<MoneySummary>, PageError> {
    let net = query_html(document, NET_SELECTOR)?;
    let tax = query_html(document, TAX_SELECTOR)?;
    let gross = query_html(document, GROSS_SELECTOR)?;
    Ok(money_summary::format_money_summary(net.as_ref(), tax.as_ref(), gross.as_ref(), format))
}
