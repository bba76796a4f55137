//! This module contains the chemistry calculators.
//!
//! Each submodule implements one family of formulas as plain functions over numbers and text.
//! `Calculator` ties them to named form fields so a front end can drive any of them the same
//! way: read the form, evaluate, and present the outcome.

mod catalog;
pub mod conversions;
pub mod dilution;
pub mod empirical;
pub mod ideal_gas;
pub mod limiting;

pub use catalog::Calculator;

use crate::error::CalcError;

/// Returns the index of the single `None` in `values`.
///
/// # Errors
///
/// Returns `CalcError::WrongBlankCount` when zero or more than one value is `None`.
pub(crate) fn single_unknown(values: &[Option<f64>]) -> Result<usize, CalcError> {
    let mut missing = values
        .iter()
        .enumerate()
        .filter(|(_, value)| value.is_none())
        .map(|(index, _)| index);

    match (missing.next(), missing.next()) {
        (Some(index), None) => Ok(index),
        _ => Err(CalcError::WrongBlankCount),
    }
}
