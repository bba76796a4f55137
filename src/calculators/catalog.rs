use super::{conversions, dilution, empirical, ideal_gas, limiting};
use crate::config::Constants;
use crate::error::CalcError;
use crate::form::FormInputs;
use crate::presentation::{DisplayState, Presentation, ResultDisplay};
use crate::types::Outcome;
use std::fmt;
use std::str::FromStr;

/// Every calculator the library offers, each bound to a fixed set of named form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Calculator {
    MassToMoles,
    MolesToParticles,
    MolesToMass,
    ParticlesToMoles,
    MolesToVolume,
    VolumeToMoles,
    MolesToMolarity,
    MolarityToMoles,
    IdealGas,
    Dilution,
    EmpiricalFormula,
    LimitingReagent,
}

impl Calculator {
    pub const ALL: [Calculator; 12] = [
        Calculator::MassToMoles,
        Calculator::MolesToParticles,
        Calculator::MolesToMass,
        Calculator::ParticlesToMoles,
        Calculator::MolesToVolume,
        Calculator::VolumeToMoles,
        Calculator::MolesToMolarity,
        Calculator::MolarityToMoles,
        Calculator::IdealGas,
        Calculator::Dilution,
        Calculator::EmpiricalFormula,
        Calculator::LimitingReagent,
    ];

    /// The kebab-case name used to select the calculator, e.g. `"mass-to-moles"`.
    pub fn name(self) -> &'static str {
        match self {
            Calculator::MassToMoles => "mass-to-moles",
            Calculator::MolesToParticles => "moles-to-particles",
            Calculator::MolesToMass => "moles-to-mass",
            Calculator::ParticlesToMoles => "particles-to-moles",
            Calculator::MolesToVolume => "moles-to-volume",
            Calculator::VolumeToMoles => "volume-to-moles",
            Calculator::MolesToMolarity => "moles-to-molarity",
            Calculator::MolarityToMoles => "molarity-to-moles",
            Calculator::IdealGas => "ideal-gas",
            Calculator::Dilution => "dilution",
            Calculator::EmpiricalFormula => "empirical-formula",
            Calculator::LimitingReagent => "limiting-reagent",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Calculator::MassToMoles => "Mass to Moles",
            Calculator::MolesToParticles => "Moles to Particles",
            Calculator::MolesToMass => "Moles to Mass",
            Calculator::ParticlesToMoles => "Particles to Moles",
            Calculator::MolesToVolume => "Moles to Volume (STP)",
            Calculator::VolumeToMoles => "Volume to Moles (STP)",
            Calculator::MolesToMolarity => "Moles to Molarity",
            Calculator::MolarityToMoles => "Molarity to Moles",
            Calculator::IdealGas => "Ideal Gas Law",
            Calculator::Dilution => "Dilution",
            Calculator::EmpiricalFormula => "Empirical Formula",
            Calculator::LimitingReagent => "Limiting Reagent",
        }
    }

    /// The names of the form fields the calculator reads, in display order.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            Calculator::MassToMoles => &["mass", "molar_mass"],
            Calculator::MolesToParticles => &["moles"],
            Calculator::MolesToMass => &["moles", "molar_mass"],
            Calculator::ParticlesToMoles => &["particles"],
            Calculator::MolesToVolume => &["moles"],
            Calculator::VolumeToMoles => &["volume"],
            Calculator::MolesToMolarity => &["moles", "volume"],
            Calculator::MolarityToMoles => &["molarity", "volume"],
            Calculator::IdealGas => &["pressure", "volume", "moles", "temperature"],
            Calculator::Dilution => &["m1", "v1", "m2", "v2"],
            Calculator::EmpiricalFormula => &["elements", "masses"],
            Calculator::LimitingReagent => {
                &["equation", "reactant1", "amount1", "reactant2", "amount2"]
            }
        }
    }

    /// Reads the calculator's fields from `form` and computes the outcome.
    ///
    /// # Errors
    ///
    /// Returns the calculator's input error when a field is missing or invalid. Nothing is
    /// computed in that case.
    pub fn evaluate<F: FormInputs + ?Sized>(
        self,
        form: &F,
        constants: &Constants,
    ) -> Result<Outcome, CalcError> {
        log::debug!("Evaluating calculator '{}'", self.name());

        let outcome = match self {
            Calculator::MassToMoles => Outcome::Quantity(conversions::mass_to_moles(
                form.number("mass"),
                form.number("molar_mass"),
            )?),
            Calculator::MolesToParticles => Outcome::Quantity(conversions::moles_to_particles(
                form.number("moles"),
                constants,
            )?),
            Calculator::MolesToMass => Outcome::Quantity(conversions::moles_to_mass(
                form.number("moles"),
                form.number("molar_mass"),
            )?),
            Calculator::ParticlesToMoles => Outcome::Quantity(conversions::particles_to_moles(
                form.number("particles"),
                constants,
            )?),
            Calculator::MolesToVolume => Outcome::Quantity(conversions::moles_to_volume(
                form.number("moles"),
                constants,
            )?),
            Calculator::VolumeToMoles => Outcome::Quantity(conversions::volume_to_moles(
                form.number("volume"),
                constants,
            )?),
            Calculator::MolesToMolarity => Outcome::Quantity(conversions::moles_to_molarity(
                form.number("moles"),
                form.number("volume"),
            )?),
            Calculator::MolarityToMoles => Outcome::Quantity(conversions::molarity_to_moles(
                form.number("molarity"),
                form.number("volume"),
            )?),
            Calculator::IdealGas => {
                let state = ideal_gas::GasState::from_parsed(
                    form.number("pressure"),
                    form.number("volume"),
                    form.number("moles"),
                    form.number("temperature"),
                );
                Outcome::Quantity(ideal_gas::solve(&state, constants)?.1)
            }
            Calculator::Dilution => {
                let known = |name: &str| {
                    let value = form.number(name);
                    (!value.is_nan()).then_some(value)
                };
                Outcome::Quantity(
                    dilution::solve(known("m1"), known("v1"), known("m2"), known("v2"))?.1,
                )
            }
            Calculator::EmpiricalFormula => Outcome::Formula {
                formula: empirical::empirical_formula(
                    form.field("elements"),
                    form.field("masses"),
                )?,
            },
            Calculator::LimitingReagent => {
                Outcome::LimitingReagent(limiting::limiting_reagent(
                    form.field("equation"),
                    form.field("reactant1"),
                    form.number("amount1"),
                    form.field("reactant2"),
                    form.number("amount2"),
                )?)
            }
        };

        Ok(outcome)
    }

    /// Evaluates the calculator and writes the outcome, or its error, to `display`.
    ///
    /// This is the whole observable effect of a calculation: exactly one presentation is written.
    pub fn run<F: FormInputs + ?Sized>(
        self,
        form: &F,
        constants: &Constants,
        display: &mut dyn ResultDisplay,
    ) -> DisplayState {
        let result = self.evaluate(form, constants);
        if let Err(e) = &result {
            log::debug!("Calculator '{}' rejected its input: {}", self.name(), e);
        }
        let presentation = Presentation::from_result(&result);
        let state = presentation.state;
        display.present(presentation);
        state
    }
}

impl fmt::Display for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Calculator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Calculator::ALL
            .into_iter()
            .find(|calculator| calculator.name() == s)
            .ok_or_else(|| CalcError::UnknownCalculator(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Form;
    use crate::presentation::ResultPanel;

    #[test]
    fn names_round_trip_through_from_str() {
        for calculator in Calculator::ALL {
            assert_eq!(calculator.name().parse::<Calculator>().unwrap(), calculator);
        }
        assert!(matches!(
            "molar-mass".parse::<Calculator>(),
            Err(CalcError::UnknownCalculator(_))
        ));
    }

    #[test]
    fn every_calculator_declares_fields() {
        for calculator in Calculator::ALL {
            assert!(!calculator.fields().is_empty(), "{calculator} has no fields");
        }
    }

    #[test]
    fn run_writes_result_to_display() {
        let form = Form::new().with("mass", "18").with("molar_mass", "18");
        let mut panel = ResultPanel::new();
        let state = Calculator::MassToMoles.run(&form, &Constants::default(), &mut panel);
        assert_eq!(state, DisplayState::Success);
        assert_eq!(panel.text(), "Result: 1.000 moles");
    }

    #[test]
    fn run_writes_error_to_display() {
        let form = Form::new().with("mass", "18");
        let mut panel = ResultPanel::new();
        let state = Calculator::MassToMoles.run(&form, &Constants::default(), &mut panel);
        assert_eq!(state, DisplayState::Error);
        assert_eq!(
            panel.text(),
            "Error: Please enter valid positive numbers for mass and molar mass."
        );
    }

    #[test]
    fn dilution_reads_blank_fields_as_unknown() {
        let form = Form::new().with("v1", "2").with("m2", "1").with("v2", "4");
        let outcome = Calculator::Dilution
            .evaluate(&form, &Constants::default())
            .unwrap();
        assert_eq!(
            outcome,
            Outcome::Quantity(crate::types::Measurement::new(2.0, "M"))
        );
    }
}
