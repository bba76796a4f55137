//! This module provides numeric utilities and physical constants for the chemxplore library.
//!
//! It contains the reference constants shared by the mole, gas and solution calculators, and the
//! lenient number parsing used to read user-entered form values.

/// Physical constants used throughout the library.
///
/// This module defines Avogadro's number, the molar volume of an ideal gas at STP and the ideal
/// gas constant in the units the calculators present.
pub mod constants;

/// Lenient parsing of user-entered numbers and decimal formatting of results.
///
/// Form values are read by taking the longest numeric prefix of the text, so `"18 g"` reads as
/// `18` while an empty or non-numeric field reads as "not a number". Results are written with
/// ties rounded to the larger magnitude.
pub mod numeric;
