//! Ideal gas law solver: given three of P, V, n and T, finds the fourth from PV = nRT.

use super::single_unknown;
use crate::config::Constants;
use crate::error::CalcError;
use crate::types::Measurement;

/// One of the four state variables of an ideal gas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GasVariable {
    Pressure,
    Volume,
    Moles,
    Temperature,
}

impl GasVariable {
    pub const ALL: [GasVariable; 4] = [
        GasVariable::Pressure,
        GasVariable::Volume,
        GasVariable::Moles,
        GasVariable::Temperature,
    ];

    pub fn unit(self) -> &'static str {
        match self {
            GasVariable::Pressure => "atm",
            GasVariable::Volume => "L",
            GasVariable::Moles => "moles",
            GasVariable::Temperature => "K",
        }
    }
}

/// The known and unknown state of a gas sample; `None` marks the variable to solve for.
///
/// Known values are used as given: zero or negative values are not rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GasState {
    /// Pressure in atm.
    pub pressure: Option<f64>,
    /// Volume in liters.
    pub volume: Option<f64>,
    /// Amount in moles.
    pub moles: Option<f64>,
    /// Temperature in kelvin.
    pub temperature: Option<f64>,
}

impl GasState {
    /// Builds a state from parsed field values, treating `NaN` as unknown.
    pub fn from_parsed(pressure: f64, volume: f64, moles: f64, temperature: f64) -> Self {
        let known = |v: f64| (!v.is_nan()).then_some(v);
        Self {
            pressure: known(pressure),
            volume: known(volume),
            moles: known(moles),
            temperature: known(temperature),
        }
    }
}

/// Solves PV = nRT for the single unknown variable of `state`.
///
/// # Errors
///
/// Returns `CalcError::WrongBlankCount` unless exactly one variable is unknown.
pub fn solve(
    state: &GasState,
    constants: &Constants,
) -> Result<(GasVariable, Measurement), CalcError> {
    let values = [state.pressure, state.volume, state.moles, state.temperature];
    let missing = single_unknown(&values)?;
    let [p, v, n, t] = values.map(|value| value.unwrap_or(f64::NAN));
    let r = constants.gas_constant;

    let variable = GasVariable::ALL[missing];
    let value = match variable {
        GasVariable::Pressure => (n * r * t) / v,
        GasVariable::Volume => (n * r * t) / p,
        GasVariable::Moles => (p * v) / (r * t),
        GasVariable::Temperature => (p * v) / (n * r),
    };
    log::debug!("Ideal gas law solved for {:?}: {}", variable, value);

    Ok((variable, Measurement::new(value, variable.unit())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn state(p: Option<f64>, v: Option<f64>, n: Option<f64>, t: Option<f64>) -> GasState {
        GasState {
            pressure: p,
            volume: v,
            moles: n,
            temperature: t,
        }
    }

    #[test]
    fn solves_for_pressure_at_stp() {
        let (var, m) = solve(
            &state(None, Some(22.4), Some(1.0), Some(273.0)),
            &Constants::default(),
        )
        .unwrap();
        assert_eq!(var, GasVariable::Pressure);
        assert_eq!(m.unit, "atm");
        assert_relative_eq!(m.value, 1.0 * 0.0821 * 273.0 / 22.4);
    }

    #[test]
    fn solves_for_each_variable() {
        let c = Constants::default();
        let (_, v) = solve(&state(Some(2.0), None, Some(1.0), Some(300.0)), &c).unwrap();
        assert_relative_eq!(v.value, 0.0821 * 300.0 / 2.0);
        assert_eq!(v.unit, "L");

        let (_, n) = solve(&state(Some(1.0), Some(24.63), None, Some(300.0)), &c).unwrap();
        assert_relative_eq!(n.value, 24.63 / (0.0821 * 300.0));
        assert_eq!(n.unit, "moles");

        let (_, t) = solve(&state(Some(1.0), Some(22.4), Some(1.0), None), &c).unwrap();
        assert_relative_eq!(t.value, 22.4 / 0.0821);
        assert_eq!(t.unit, "K");
    }

    #[test]
    fn requires_exactly_one_unknown() {
        let c = Constants::default();
        let none_missing = state(Some(1.0), Some(22.4), Some(1.0), Some(273.0));
        assert!(matches!(
            solve(&none_missing, &c),
            Err(CalcError::WrongBlankCount)
        ));
        let two_missing = state(None, None, Some(1.0), Some(273.0));
        assert!(matches!(
            solve(&two_missing, &c),
            Err(CalcError::WrongBlankCount)
        ));
        assert!(matches!(
            solve(&GasState::default(), &c),
            Err(CalcError::WrongBlankCount)
        ));
    }

    #[test]
    fn known_values_are_not_checked_for_sign() {
        let (_, m) = solve(
            &state(None, Some(1.0), Some(-1.0), Some(100.0)),
            &Constants::default(),
        )
        .unwrap();
        assert!(m.value < 0.0);
    }

    #[test]
    fn from_parsed_marks_nan_unknown() {
        let s = GasState::from_parsed(f64::NAN, 22.4, 1.0, 273.0);
        assert_eq!(s.pressure, None);
        assert_eq!(s.volume, Some(22.4));
    }
}
