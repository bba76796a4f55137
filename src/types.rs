//! This module defines the core types produced by the chemistry calculators.
//!
//! A calculation yields an `Outcome`: either a `Measurement` (a number with its unit label), an
//! empirical formula, or a `LimitingReagentReport`. Outcomes are plain values with no link to
//! where they will be shown; `presentation` turns them into the text of a result area.

use crate::math::numeric::{number_to_string, to_fixed};
use serde::Serialize;

/// A computed physical quantity together with the unit it is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    /// The numeric value of the quantity.
    pub value: f64,
    /// The unit label shown after the value, for example `"moles"` or `"liters (at STP)"`.
    pub unit: &'static str,
}

impl Measurement {
    pub fn new(value: f64, unit: &'static str) -> Self {
        Self { value, unit }
    }
}

/// Which of the two reactants runs out first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Reactant {
    First,
    Second,
}

/// The result of a limiting reagent comparison.
///
/// The report keeps the labels and amounts it was computed from so that the explanation can be
/// rendered without going back to the form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LimitingReagentReport {
    /// The reactant that is consumed first.
    pub limiting: Reactant,
    /// The labels of reactant 1 and reactant 2 as entered.
    pub labels: [String; 2],
    /// The available amounts of reactant 1 and reactant 2, in moles.
    pub amounts: [f64; 2],
    /// The stoichiometric coefficients read from the labels.
    pub coefficients: [f64; 2],
    /// The amount of the *other* reactant that the limiting reactant would need to be fully
    /// consumed, in moles.
    pub required: f64,
}

impl LimitingReagentReport {
    /// The label of the limiting reactant.
    pub fn limiting_label(&self) -> &str {
        match self.limiting {
            Reactant::First => &self.labels[0],
            Reactant::Second => &self.labels[1],
        }
    }

    /// The label and available amount of the reactant in excess.
    pub fn excess(&self) -> (&str, f64) {
        match self.limiting {
            Reactant::First => (&self.labels[1], self.amounts[1]),
            Reactant::Second => (&self.labels[0], self.amounts[0]),
        }
    }

    /// A one-sentence explanation of why the limiting reactant runs out first.
    pub fn explanation(&self) -> String {
        let (other, available) = self.excess();
        format!(
            "{} is the limiting reagent. It requires {} moles of {}, but we only have {} moles available.",
            self.limiting_label(),
            to_fixed(self.required, 3),
            other,
            number_to_string(available)
        )
    }
}

/// What a successful calculation produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// A single derived quantity.
    Quantity(Measurement),
    /// An empirical formula such as `CH2O`.
    Formula { formula: String },
    /// A limiting reagent comparison.
    LimitingReagent(LimitingReagentReport),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(limiting: Reactant) -> LimitingReagentReport {
        LimitingReagentReport {
            limiting,
            labels: ["2H2".to_string(), "O2".to_string()],
            amounts: [4.0, 1.0],
            coefficients: [2.0, 1.0],
            required: 2.0,
        }
    }

    #[test]
    fn excess_is_the_other_reactant() {
        let first = report(Reactant::First);
        assert_eq!(first.limiting_label(), "2H2");
        assert_eq!(first.excess(), ("O2", 1.0));

        let second = report(Reactant::Second);
        assert_eq!(second.limiting_label(), "O2");
        assert_eq!(second.excess(), ("2H2", 4.0));
    }

    #[test]
    fn explanation_rounds_required_amount_only() {
        let mut r = report(Reactant::Second);
        r.required = 2.0 / 3.0;
        r.amounts = [2.5, 1.0];
        assert_eq!(
            r.explanation(),
            "O2 is the limiting reagent. It requires 0.667 moles of 2H2, but we only have 2.5 moles available."
        );
    }

    #[test]
    fn explanation_rounds_required_ties_up() {
        let mut r = report(Reactant::First);
        r.required = 0.0625;
        assert!(r.explanation().contains("It requires 0.063 moles of O2"));
    }

    #[test]
    fn explanation_writes_extreme_amounts_with_exponents() {
        let mut r = report(Reactant::First);
        r.amounts = [4.0, 1e22];
        assert!(
            r.explanation()
                .ends_with("but we only have 1e+22 moles available.")
        );

        r.amounts = [4.0, 1e-7];
        assert!(
            r.explanation()
                .ends_with("but we only have 1e-7 moles available.")
        );
    }
}
