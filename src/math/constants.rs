//! This module defines the physical constants used by the chemistry calculators.
//!
//! These are the reference values of an introductory chemistry course rather than the most
//! precise CODATA figures: the molar volume and gas constant are the rounded classroom values,
//! and results are expected to agree with hand calculations made from the same numbers.

/// Avogadro's number, the count of elementary entities in one mole.
///
/// This is the exact value fixed by the 2019 SI redefinition, in entities per mole.
pub const AVOGADRO: f64 = 6.022_140_76e23;

/// Volume occupied by one mole of an ideal gas at STP, in liters per mole.
///
/// STP here means 0 °C and 1 atm, the convention under which the classroom value of 22.4 L/mol
/// holds.
pub const MOLAR_VOLUME_STP: f64 = 22.4;

/// The ideal gas constant in L·atm·mol⁻¹·K⁻¹.
pub const GAS_CONSTANT: f64 = 0.0821;
