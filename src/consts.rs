//! Document contract shared between the server-rendered templates and this crate.

// ── Page selection ──────────────────────────────────────────────

/// `<body>` attribute naming the page kind for [`crate::pages::boot`].
pub const PAGE_KIND_ATTR: &str = "data-page";

/// `<body>` attribute carrying optional JSON configuration overrides.
pub const PAGE_CONFIG_ATTR: &str = "data-page-config";

// ── Invoice creation ────────────────────────────────────────────

/// Element id of the invoice date input.
pub const DATE_INPUT_ID: &str = "dateInput";

// ── Lists ───────────────────────────────────────────────────────

/// Selector for rows that navigate on click.
pub const CLICKABLE_ROW_SELECTOR: &str = "tr.clickable-row";

/// Row attribute holding the navigation target.
pub const ROW_TARGET_ATTR: &str = "data-href";

// ── Invoice detail ──────────────────────────────────────────────

/// Selector for the net amount.
pub const NET_SELECTOR: &str = ".val-netto";

/// Selector for the tax amount.
pub const TAX_SELECTOR: &str = ".val-podatek";

/// Selector for the gross amount.
pub const GROSS_SELECTOR: &str = ".val-brutto";

// ── Money formatting ────────────────────────────────────────────

/// Fractional digits shown for monetary values.
pub const DEFAULT_MONEY_PRECISION: usize = 2;

/// Text placed between the amount and the currency suffix.
pub const DEFAULT_MONEY_SEPARATOR: &str = " ";

/// Currency suffix appended to every amount.
pub const DEFAULT_MONEY_SUFFIX: &str = "PLN";

/// Largest accepted precision.
pub const MAX_MONEY_PRECISION: usize = 20;
