//! Default value for the invoice date field: one calendar month before now.
//!
//! The month component is decremented and the day kept. A day the target
//! month does not have spills over into the following month, so 31 March
//! becomes 3 March (2 March in a leap year) rather than clamping to the last
//! day of February.
//!
//! The shift happens on the local wall clock, time of day included, and the
//! field receives the UTC calendar date of the shifted instant. Shortly after
//! local midnight east of UTC that is the day before the local one.

#[cfg(test)]
#[path = "date_default_test.rs"]
mod date_default_test;

use time::error::ComponentRange;
use time::{Date, Duration, Month, PrimitiveDateTime, UtcOffset};

use crate::dom::ValueSlot;

/// The date one calendar month before `date`.
///
/// # Errors
///
/// Returns [`ComponentRange`] when the result falls outside the supported
/// date range (only possible in January of the earliest supported year).
pub fn month_before(date: Date) -> Result<Date, ComponentRange> {
    let (year, month) = match date.month() {
        Month::January => (date.year() - 1, Month::December),
        current => (date.year(), current.previous()),
    };
    let day = date.day();
    let last = month.length(year);
    if day <= last {
        Date::from_calendar_date(year, month, day)
    } else {
        // Surplus days land in the month we started from.
        Date::from_calendar_date(date.year(), date.month(), day - last)
    }
}

/// `YYYY-MM-DD`.
#[must_use]
pub fn iso_date(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

/// UTC calendar date of the local time one month before `now`.
///
/// `offset_at` gives the zone offset in force at a local wall-clock time; it
/// is asked about the shifted time, not `now`, since the two can fall on
/// opposite sides of a daylight saving change.
pub fn default_invoice_date<O>(now: PrimitiveDateTime, offset_at: O) -> Option<Date>
where
    O: FnOnce(PrimitiveDateTime) -> Option<UtcOffset>,
{
    let shifted = match month_before(now.date()) {
        Ok(date) => PrimitiveDateTime::new(date, now.time()),
        Err(e) => {
            log::warn!("no default invoice date for {now}: {e}");
            return None;
        }
    };
    let Some(offset) = offset_at(shifted) else {
        log::warn!("no zone offset for local time {shifted}");
        return None;
    };
    let utc = shifted.checked_sub(Duration::seconds(i64::from(offset.whole_seconds())));
    if utc.is_none() {
        log::warn!("{shifted} at {offset} is out of range in UTC");
    }
    utc.map(PrimitiveDateTime::date)
}

/// Write the default date into `field`, if the page has one.
///
/// Returns the value written.
pub fn apply_default_date<F, O>(field: Option<&F>, now: PrimitiveDateTime, offset_at: O) -> Option<String>
where
    F: ValueSlot + ?Sized,
    O: FnOnce(PrimitiveDateTime) -> Option<UtcOffset>,
{
    let field = field?;
    let value = iso_date(default_invoice_date(now, offset_at)?);
    field.set_value(&value);
    log::debug!("invoice date defaulted to {value}");
    Some(value)
}
