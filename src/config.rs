//! This module provides the physical constants table and utilities for loading it from TOML.
//!
//! The calculators never read the constants in `math::constants` directly; they receive a
//! `Constants` value instead, which defaults to the classroom reference values and can be
//! overridden from a TOML file. Every field is optional in the file, so a table that only sets
//! `gas_constant = 0.08206` keeps the default Avogadro number and molar volume.

use super::error::CalcError;
use super::math::constants::{AVOGADRO, GAS_CONSTANT, MOLAR_VOLUME_STP};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The physical constants a calculation is carried out with.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Constants {
    /// Avogadro's number in entities per mole.
    pub avogadro: f64,
    /// Molar volume of an ideal gas at STP in liters per mole.
    pub molar_volume_stp: f64,
    /// Ideal gas constant in L·atm·mol⁻¹·K⁻¹.
    pub gas_constant: f64,
}

impl Default for Constants {
    fn default() -> Self {
        Self {
            avogadro: AVOGADRO,
            molar_volume_stp: MOLAR_VOLUME_STP,
            gas_constant: GAS_CONSTANT,
        }
    }
}

impl Constants {
    /// Loads a constants table from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `CalcError::IoError` if the file cannot be read, or a
    /// `CalcError::DeserializationError` if the TOML content is invalid or names an unknown
    /// constant.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use chemxplore::Constants;
    /// use std::path::Path;
    ///
    /// let constants = Constants::load_from_file(Path::new("constants.toml")).unwrap();
    /// ```
    pub fn load_from_file(path: &Path) -> Result<Self, CalcError> {
        let content = std::fs::read_to_string(path).map_err(|io_error| CalcError::IoError {
            path: path.to_path_buf(),
            source: io_error,
        })?;

        Self::load_from_str(&content)
    }

    /// Parses a constants table from a TOML string.
    ///
    /// Keys that are absent keep their default value.
    ///
    /// # Examples
    ///
    /// ```
    /// use chemxplore::Constants;
    ///
    /// let constants = Constants::load_from_str("gas_constant = 0.08206").unwrap();
    /// assert_eq!(constants.gas_constant, 0.08206);
    /// assert_eq!(constants.molar_volume_stp, 22.4);
    /// ```
    pub fn load_from_str(toml_str: &str) -> Result<Self, CalcError> {
        let constants = toml::from_str(toml_str)?;
        log::debug!("Loaded constants table: {:?}", constants);
        Ok(constants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_values() {
        let constants = Constants::default();
        assert_eq!(constants.avogadro, 6.022_140_76e23);
        assert_eq!(constants.molar_volume_stp, 22.4);
        assert_eq!(constants.gas_constant, 0.0821);
    }

    #[test]
    fn empty_table_keeps_defaults() {
        let constants = Constants::load_from_str("").unwrap();
        assert_eq!(constants, Constants::default());
    }

    #[test]
    fn partial_table_overrides_only_named_fields() {
        let toml_str = r#"
            molar_volume_stp = 22.71
            gas_constant = 0.08206
        "#;
        let constants = Constants::load_from_str(toml_str).unwrap();
        assert_eq!(constants.avogadro, AVOGADRO);
        assert_eq!(constants.molar_volume_stp, 22.71);
        assert_eq!(constants.gas_constant, 0.08206);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let result = Constants::load_from_str("planck = 6.626e-34");
        assert!(matches!(result, Err(CalcError::DeserializationError(_))));
    }

    #[test]
    fn wrong_value_type_is_rejected() {
        let result = Constants::load_from_str("avogadro = \"many\"");
        assert!(matches!(result, Err(CalcError::DeserializationError(_))));
    }

    #[test]
    fn missing_file_reports_path() {
        let path = Path::new("/nonexistent/chemxplore/constants.toml");
        match Constants::load_from_file(path) {
            Err(CalcError::IoError { path: err_path, .. }) => assert_eq!(err_path, path),
            other => panic!("expected IoError, got {:?}", other),
        }
    }
}
