//! Composition root: which behaviors run on which page.
//!
//! The server templates mark `<body>` with `data-page` and either call
//! [`boot`] or the page-specific export directly once the document is parsed.
//! Behaviors run one after another and each one's failure is logged and
//! contained; a broken row binding never stops the date default, and so on.

#[cfg(test)]
#[path = "pages_test.rs"]
mod pages_test;

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(feature = "hydrate")]
use crate::browser;
#[cfg(feature = "hydrate")]
use crate::config::{DEFAULT_LOG_LEVEL, PageConfig};
#[cfg(feature = "hydrate")]
use crate::consts::{PAGE_CONFIG_ATTR, PAGE_KIND_ATTR};
#[cfg(feature = "hydrate")]
use crate::error::PageError;
#[cfg(feature = "hydrate")]
use crate::logging;

/// Server-rendered page types that carry client behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// Invoice creation form.
    AddInvoice,
    /// Home page invoice table.
    InvoiceList,
    /// JPK file table.
    JpkList,
    /// Single invoice detail.
    ViewInvoice,
}

/// One self-contained page behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    DateDefault,
    RowNavigation,
    MoneySummary,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown page kind: {0}")]
pub struct PageKindError(pub String);

impl PageKind {
    pub const ALL: [PageKind; 4] = [Self::AddInvoice, Self::InvoiceList, Self::JpkList, Self::ViewInvoice];

    /// The `data-page` value naming this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AddInvoice => "add-invoice",
            Self::InvoiceList => "invoice-list",
            Self::JpkList => "jpk-list",
            Self::ViewInvoice => "view-invoice",
        }
    }

    #[must_use]
    pub fn behaviors(self) -> &'static [Behavior] {
        match self {
            Self::AddInvoice => &[Behavior::DateDefault],
            Self::InvoiceList | Self::JpkList => &[Behavior::RowNavigation],
            Self::ViewInvoice => &[Behavior::MoneySummary],
        }
    }
}

impl FromStr for PageKind {
    type Err = PageKindError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == trimmed)
            .ok_or_else(|| PageKindError(trimmed.to_owned()))
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Browser entry points ---

/// Run every behavior of `kind` against the live document.
///
/// Returns how many behaviors completed without error.
#[cfg(feature = "hydrate")]
pub fn init(kind: PageKind) -> usize {
    let (window, document) = match browser::window().and_then(|w| browser::document(&w).map(|d| (w, d))) {
        Ok(pair) => pair,
        Err(e) => {
            log::error!("{kind} page not initialized: {e}");
            return 0;
        }
    };
    let config = load_config(&document);
    logging::init(config.log_level);

    let mut completed = 0;
    for &behavior in kind.behaviors() {
        match run_behavior(behavior, &window, &document, &config) {
            Ok(()) => completed += 1,
            Err(e) => log::error!("{kind}: {behavior:?} failed: {e}"),
        }
    }
    log::debug!("{kind} page initialized ({completed}/{} behaviors)", kind.behaviors().len());
    completed
}

#[cfg(feature = "hydrate")]
fn run_behavior(
    behavior: Behavior,
    window: &web_sys::Window,
    document: &web_sys::Document,
    config: &PageConfig,
) -> Result<(), PageError> {
    match behavior {
        Behavior::DateDefault => browser::run_date_default(document).map(|_| ()),
        Behavior::RowNavigation => browser::run_row_navigation(window, document).map(|_| ()),
        Behavior::MoneySummary => browser::run_money_summary(document, &config.money).map(|_| ()),
    }
}

#[cfg(feature = "hydrate")]
fn load_config(document: &web_sys::Document) -> PageConfig {
    match browser::body_attribute(document, PAGE_CONFIG_ATTR) {
        Ok(raw) => PageConfig::from_attribute(raw.as_deref()),
        Err(e) => {
            log::warn!("page config unavailable: {e}");
            PageConfig::default()
        }
    }
}

/// Panic hook and console logger; runs when the WASM module is instantiated.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    logging::install_panic_hook();
    logging::init(DEFAULT_LOG_LEVEL);
}

/// Initialize the page named by `<body data-page>`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn boot() {
    let raw = browser::window()
        .and_then(|w| browser::document(&w))
        .and_then(|d| browser::body_attribute(&d, PAGE_KIND_ATTR));
    match raw {
        Ok(Some(raw)) => match raw.parse::<PageKind>() {
            Ok(kind) => {
                init(kind);
            }
            Err(e) => log::warn!("{e}"),
        },
        Ok(None) => log::warn!("<body> has no {PAGE_KIND_ATTR}; nothing to initialize"),
        Err(e) => log::error!("boot failed: {e}"),
    }
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn init_add_invoice() {
    init(PageKind::AddInvoice);
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn init_invoice_list() {
    init(PageKind::InvoiceList);
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn init_jpk_list() {
    init(PageKind::JpkList);
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn init_view_invoice() {
    init(PageKind::ViewInvoice);
}
