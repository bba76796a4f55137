//! Limiting reagent between two reactants.
//!
//! Stoichiometric coefficients are read from the leading integer of each reactant label
//! (`"2H2"` has coefficient 2). The balanced equation is required but not parsed, so a label
//! without a leading integer, such as `"H2O"`, always counts with coefficient 1.

use crate::error::CalcError;
use crate::math::numeric::parse_int;
use crate::types::{LimitingReagentReport, Reactant};

/// The stoichiometric coefficient of a reactant label, defaulting to 1.
///
/// A missing or zero leading integer yields 1.
pub fn coefficient(label: &str) -> f64 {
    parse_int(label).filter(|c| *c != 0.0).unwrap_or(1.0)
}

/// Determines which of two reactants is consumed first.
///
/// Reactant 1 is limiting when the amount of reactant 2 it needs does not exceed the amount of
/// reactant 2 available; otherwise reactant 2 is limiting.
///
/// # Errors
///
/// Returns `CalcError::MissingFields` when the equation or a label is empty, or an amount is
/// zero or not a number. Returns `CalcError::EquationParse` when the required amounts cannot be
/// compared.
pub fn limiting_reagent(
    equation: &str,
    reactant1: &str,
    amount1: f64,
    reactant2: &str,
    amount2: f64,
) -> Result<LimitingReagentReport, CalcError> {
    let is_blank_amount = |amount: f64| amount.is_nan() || amount == 0.0;
    if equation.is_empty()
        || reactant1.is_empty()
        || is_blank_amount(amount1)
        || reactant2.is_empty()
        || is_blank_amount(amount2)
    {
        return Err(CalcError::MissingFields);
    }

    let coeff1 = coefficient(reactant1);
    let coeff2 = coefficient(reactant2);

    let required2 = (amount1 * coeff2) / coeff1;
    let required1 = (amount2 * coeff1) / coeff2;
    if required1.is_nan() || required2.is_nan() {
        return Err(CalcError::EquationParse);
    }
    log::debug!(
        "Coefficients {} : {}, required amounts {} and {}",
        coeff1,
        coeff2,
        required1,
        required2
    );

    let (limiting, required) = if required2 <= amount2 {
        (Reactant::First, required2)
    } else {
        (Reactant::Second, required1)
    };

    Ok(LimitingReagentReport {
        limiting,
        labels: [reactant1.to_string(), reactant2.to_string()],
        amounts: [amount1, amount2],
        coefficients: [coeff1, coeff2],
        required,
    })
}
