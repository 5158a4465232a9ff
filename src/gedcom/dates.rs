//! GEDCOM date codec
//!
//! Dates travel as `DD MON YYYY` with a 3-letter uppercase English
//! month abbreviation, e.g. `01 JAN 1899`. This is the only supported
//! form; anything else is an unparseable-date error for the caller to
//! soften or propagate.

use chrono::NaiveDate;

use crate::error::{Error, Result};

const GEDCOM_DATE_FORMAT: &str = "%d %b %Y";

/// Format a date as `DD MON YYYY`
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(GEDCOM_DATE_FORMAT).to_string().to_uppercase()
}

/// Parse a `DD MON YYYY` date value.
///
/// Single-digit days are accepted on read; months match
/// case-insensitively.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), GEDCOM_DATE_FORMAT)
        .map_err(|_| Error::UnparseableDate(value.to_string()))
}
