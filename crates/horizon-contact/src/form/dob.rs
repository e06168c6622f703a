//! Date of birth input bounds.

use chrono::{Datelike, NaiveDate, Utc};
use horizon_contact_core::Element;

const ISO_FORMAT: &str = "%Y-%m-%d";

/// Earliest and latest selectable date of birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DobBounds {
    min: NaiveDate,
    max: NaiveDate,
}

impl DobBounds {
    /// Bounds relative to today's UTC date.
    pub fn today(max_age_years: u32) -> Option<Self> {
        Self::for_date(Utc::now().date_naive(), max_age_years)
    }

    /// Bounds relative to a given date: from the same day `max_age_years`
    /// earlier up to the date itself.
    ///
    /// A February 29 with no counterpart in the earlier year rolls over to
    /// March 1. Returns `None` if the earlier year is out of range.
    pub fn for_date(today: NaiveDate, max_age_years: u32) -> Option<Self> {
        let year = today.year().checked_sub(i32::try_from(max_age_years).ok()?)?;
        let min = today
            .with_year(year)
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))?;
        Some(Self { min, max: today })
    }

    pub fn min(&self) -> NaiveDate {
        self.min
    }

    pub fn max(&self) -> NaiveDate {
        self.max
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.min..=self.max).contains(&date)
    }

    /// Write the bounds to the input's `min` and `max` attributes.
    pub fn apply(&self, input: &Element) {
        input.set_attribute("min", self.min.format(ISO_FORMAT).to_string());
        input.set_attribute("max", self.max.format(ISO_FORMAT).to_string());
    }
}
