//! Empirical formula from the masses of each element in a sample.
//!
//! Subscripts come from the mass ratios directly: each mass is divided by the smallest one, the
//! ratios are reduced by their common divisor, and the quotients are rounded. Masses are not
//! converted to moles first, and the common divisor is taken over ratios rounded to two decimal
//! places, so experimental data whose ratios are not clean multiples can produce unexpected
//! subscripts.

use crate::error::CalcError;
use crate::math::numeric::{gcd, number_to_string, parse_float, round_half_up, round_to_hundredths};

/// Computes the subscript of each element from its mass.
///
/// The common divisor is seeded with the first ratio as-is, then folded over every ratio rounded
/// to two decimal places.
pub fn subscripts(masses: &[f64]) -> Vec<f64> {
    let Some(&first) = masses.first() else {
        return Vec::new();
    };

    let min_mass = masses.iter().copied().fold(f64::INFINITY, f64::min);
    let ratios: Vec<f64> = masses.iter().map(|mass| mass / min_mass).collect();

    let seed = first / min_mass;
    let divisor = ratios
        .iter()
        .fold(seed, |acc, &ratio| gcd(acc, round_to_hundredths(ratio)));
    log::trace!("Empirical ratios {:?} reduced by {}", ratios, divisor);

    ratios
        .iter()
        .map(|ratio| round_half_up(ratio / divisor))
        .collect()
}

/// Builds the empirical formula from comma-separated element symbols and masses.
///
/// Symbols and masses are trimmed. A subscript of one (or anything smaller) is left out.
///
/// # Errors
///
/// Returns `CalcError::MismatchedLists` when the two lists differ in length, and
/// `CalcError::InvalidInput` when a mass is not a finite positive number.
///
/// # Examples
///
/// ```
/// use chemxplore::calculators::empirical::empirical_formula;
///
/// assert_eq!(empirical_formula("C, H", "2, 4").unwrap(), "CH2");
/// ```
pub fn empirical_formula(elements: &str, masses: &str) -> Result<String, CalcError> {
    let symbols: Vec<&str> = elements.split(',').map(str::trim).collect();
    let masses: Vec<f64> = masses.split(',').map(|m| parse_float(m.trim())).collect();

    if symbols.len() != masses.len() || symbols.is_empty() {
        return Err(CalcError::MismatchedLists);
    }
    if !masses.iter().all(|m| m.is_finite() && *m > 0.0) {
        return Err(CalcError::InvalidInput(
            "Please enter valid positive numbers for masses.".to_string(),
        ));
    }

    let formula = symbols
        .iter()
        .zip(subscripts(&masses))
        .map(|(symbol, count)| {
            if count > 1.0 {
                format!("{}{}", symbol, number_to_string(count))
            } else {
                symbol.to_string()
            }
        })
        .collect();

    Ok(formula)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_ratios_give_integer_subscripts() {
        assert_eq!(subscripts(&[2.0, 4.0]), vec![1.0, 2.0]);
        assert_eq!(subscripts(&[3.0, 6.0, 3.0]), vec![1.0, 2.0, 1.0]);
    }

    #[test]
    fn half_ratios_are_doubled() {
        assert_eq!(subscripts(&[2.0, 3.0]), vec![2.0, 3.0]);
    }

    #[test]
    fn formula_omits_unit_subscripts() {
        assert_eq!(empirical_formula("C,H", "2,4").unwrap(), "CH2");
        assert_eq!(empirical_formula("C,H,O", "1,2,1").unwrap(), "CH2O");
        assert_eq!(empirical_formula("Fe,O", "2,3").unwrap(), "Fe2O3");
        assert_eq!(empirical_formula("Na", "23").unwrap(), "Na");
    }

    #[test]
    fn whitespace_is_trimmed() {
        assert_eq!(empirical_formula(" N , H ", " 5 , 15 ").unwrap(), "NH3");
    }

    #[test]
    fn list_lengths_must_match() {
        assert!(matches!(
            empirical_formula("C,H,O", "1,2"),
            Err(CalcError::MismatchedLists)
        ));
        assert_eq!(
            empirical_formula("C", "1,2").unwrap_err().to_string(),
            "Please enter equal number of elements and masses."
        );
    }

    #[test]
    fn masses_must_be_positive_numbers() {
        assert!(matches!(
            empirical_formula("C,H", "1,abc"),
            Err(CalcError::InvalidInput(_))
        ));
        assert!(matches!(
            empirical_formula("C,H", "0,2"),
            Err(CalcError::InvalidInput(_))
        ));
        assert!(matches!(
            empirical_formula("C", ""),
            Err(CalcError::InvalidInput(_))
        ));
    }

    #[test]
    fn unclean_ratios_are_deterministic() {
        let first = empirical_formula("C,H", "40.0,6.71").unwrap();
        let second = empirical_formula("C,H", "40.0,6.71").unwrap();
        assert_eq!(first, second);
        assert!(first.starts_with('C'));
    }

    #[test]
    fn empty_input_gives_no_subscripts() {
        assert!(subscripts(&[]).is_empty());
    }
}
