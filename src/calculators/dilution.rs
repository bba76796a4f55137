//! Dilution solver: given three of M1, V1, M2 and V2, finds the fourth from M1V1 = M2V2.

use super::single_unknown;
use crate::error::CalcError;
use crate::types::Measurement;

/// One of the four quantities of a dilution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DilutionVariable {
    /// Concentration of the stock solution.
    M1,
    /// Volume of the stock solution.
    V1,
    /// Concentration of the diluted solution.
    M2,
    /// Volume of the diluted solution.
    V2,
}

impl DilutionVariable {
    pub const ALL: [DilutionVariable; 4] = [
        DilutionVariable::M1,
        DilutionVariable::V1,
        DilutionVariable::M2,
        DilutionVariable::V2,
    ];

    pub fn unit(self) -> &'static str {
        match self {
            DilutionVariable::M1 | DilutionVariable::M2 => "M",
            DilutionVariable::V1 | DilutionVariable::V2 => "L",
        }
    }
}

/// Solves M1V1 = M2V2 for the single `None` among the four quantities.
///
/// Known values are used as given, without a positivity check.
///
/// # Errors
///
/// Returns `CalcError::WrongBlankCount` unless exactly one quantity is `None`.
pub fn solve(
    m1: Option<f64>,
    v1: Option<f64>,
    m2: Option<f64>,
    v2: Option<f64>,
) -> Result<(DilutionVariable, Measurement), CalcError> {
    let values = [m1, v1, m2, v2];
    let missing = single_unknown(&values)?;
    let [m1, v1, m2, v2] = values.map(|value| value.unwrap_or(f64::NAN));

    let variable = DilutionVariable::ALL[missing];
    let value = match variable {
        DilutionVariable::M1 => (m2 * v2) / v1,
        DilutionVariable::V1 => (m2 * v2) / m1,
        DilutionVariable::M2 => (m1 * v1) / v2,
        DilutionVariable::V2 => (m1 * v1) / m2,
    };
    log::debug!("Dilution solved for {:?}: {}", variable, value);

    Ok((variable, Measurement::new(value, variable.unit())))
}
