// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Date field validation: date of birth and cinema visit date.

use crate::error::ValidationError;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// The wire format for date fields (HTML date inputs).
const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Minimum age in whole years required to register.
const MINIMUM_AGE: u8 = 13;

/// Oldest plausible age in whole years; anything above is a typo.
const MAXIMUM_AGE: u8 = 120;

/// Validates a date of birth given as `YYYY-MM-DD`.
///
/// # Arguments
///
/// * `raw` - The raw field value
/// * `today` - Today's date, the reference point for age
///
/// # Errors
///
/// Returns an error if the value is empty, unparseable, not strictly in the
/// past, or yields an age below 13 or above 120 whole years.
pub fn validate_date_of_birth(raw: &str, today: Date) -> Result<(), ValidationError> {
    let trimmed: &str = raw.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Required {
            field: "Date of birth",
        });
    }

    let birth_date: Date = Date::parse(trimmed, DATE_FORMAT).map_err(|_| {
        ValidationError::DateUnparseable {
            field: "date of birth",
        }
    })?;

    // Rule: today itself does not count as "in the past".
    if birth_date >= today {
        return Err(ValidationError::BirthDateNotInPast);
    }

    let age: i32 = whole_years_between(birth_date, today);
    if age < i32::from(MINIMUM_AGE) {
        return Err(ValidationError::TooYoung { min: MINIMUM_AGE });
    }
    if age > i32::from(MAXIMUM_AGE) {
        return Err(ValidationError::AgeUnrealistic);
    }

    Ok(())
}

/// Validates a cinema visit date given as `YYYY-MM-DD`.
///
/// Feedback describes a visit that already happened, so today is accepted
/// and any later date is not.
///
/// # Errors
///
/// Returns an error if the value is empty, unparseable, or strictly after
/// `today`.
pub fn validate_visit_date(raw: &str, today: Date) -> Result<(), ValidationError> {
    let trimmed: &str = raw.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Required {
            field: "Visit date",
        });
    }

    let visit_date: Date = Date::parse(trimmed, DATE_FORMAT).map_err(|_| {
        ValidationError::DateUnparseable {
            field: "visit date",
        }
    })?;

    if visit_date > today {
        return Err(ValidationError::VisitDateInFuture);
    }

    Ok(())
}

/// Computes the number of whole years elapsed from `earlier` to `later`.
///
/// The year difference is decremented when the anniversary has not yet
/// arrived in `later`'s year.
fn whole_years_between(earlier: Date, later: Date) -> i32 {
    let mut years: i32 = later.year() - earlier.year();
    if (u8::from(later.month()), later.day()) < (u8::from(earlier.month()), earlier.day()) {
        years -= 1;
    }
    years
}
