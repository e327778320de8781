//! Client-side page behaviors for the invoicing web application.
//!
//! This crate is compiled to WebAssembly and loaded by the server-rendered
//! pages. It owns three small behaviors, each bound to the page that needs it:
//! defaulting the new-invoice date, clickable list rows, and the net / tax /
//! gross summary on the invoice detail view. The behaviors themselves are
//! written against the traits in [`dom`], so everything except [`browser`]
//! runs and is tested on the host without a browser.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`pages`] | Page kinds, per-page init, JS exports |
//! | [`date_default`] | One-month-back default for the invoice date |
//! | [`row_nav`] | Click-to-navigate rows that respect text selection |
//! | [`money_summary`] | Net / tax / gross rewrite |
//! | [`money`] | Amount parsing and fixed-precision formatting |
//! | [`config`] | `data-page-config` parsing |
//! | [`dom`] | Element capability traits |
//! | [`browser`] | `web_sys` implementations (`hydrate` only) |
//! | [`logging`] | Console logger setup |
//! | [`consts`] | Selectors, attribute names, formatting defaults |

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod config;
pub mod consts;
pub mod date_default;
pub mod dom;
pub mod error;
pub mod logging;
pub mod money;
pub mod money_summary;
pub mod pages;
pub mod row_nav;

#[cfg(test)]
mod testing;
