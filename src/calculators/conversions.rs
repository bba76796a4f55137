//! Single-formula conversions between mass, moles, particles, gas volume and molarity.
//!
//! Every conversion requires all of its inputs to be strictly positive numbers and refuses to
//! compute anything otherwise.

use crate::config::Constants;
use crate::error::CalcError;
use crate::types::Measurement;
use crate::validation::is_positive;

fn require_positive(values: &[f64], message: &str) -> Result<(), CalcError> {
    if values.iter().all(|&v| is_positive(v)) {
        Ok(())
    } else {
        Err(CalcError::InvalidInput(message.to_string()))
    }
}

/// Moles from a sample mass in grams and the molar mass in g/mol.
pub fn mass_to_moles(mass: f64, molar_mass: f64) -> Result<Measurement, CalcError> {
    require_positive(
        &[mass, molar_mass],
        "Please enter valid positive numbers for mass and molar mass.",
    )?;
    Ok(Measurement::new(mass / molar_mass, "moles"))
}

/// Number of particles in an amount of substance.
pub fn moles_to_particles(moles: f64, constants: &Constants) -> Result<Measurement, CalcError> {
    require_positive(&[moles], "Please enter a valid positive number for moles.")?;
    Ok(Measurement::new(moles * constants.avogadro, "particles"))
}

/// Mass in grams from an amount of substance and its molar mass.
pub fn moles_to_mass(moles: f64, molar_mass: f64) -> Result<Measurement, CalcError> {
    require_positive(
        &[moles, molar_mass],
        "Please enter valid positive numbers for moles and molar mass.",
    )?;
    Ok(Measurement::new(moles * molar_mass, "grams"))
}

/// Amount of substance from a particle count.
pub fn particles_to_moles(particles: f64, constants: &Constants) -> Result<Measurement, CalcError> {
    require_positive(
        &[particles],
        "Please enter a valid positive number for particles.",
    )?;
    Ok(Measurement::new(particles / constants.avogadro, "moles"))
}

/// Volume of an ideal gas at STP.
pub fn moles_to_volume(moles: f64, constants: &Constants) -> Result<Measurement, CalcError> {
    require_positive(&[moles], "Please enter a valid positive number for moles.")?;
    Ok(Measurement::new(
        moles * constants.molar_volume_stp,
        "liters (at STP)",
    ))
}

/// Amount of an ideal gas occupying `volume` liters at STP.
pub fn volume_to_moles(volume: f64, constants: &Constants) -> Result<Measurement, CalcError> {
    require_positive(&[volume], "Please enter a valid positive number for volume.")?;
    Ok(Measurement::new(
        volume / constants.molar_volume_stp,
        "moles (at STP)",
    ))
}

/// Molarity of a solution from moles of solute and liters of solution.
pub fn moles_to_molarity(moles: f64, volume: f64) -> Result<Measurement, CalcError> {
    require_positive(
        &[moles, volume],
        "Please enter valid positive numbers for moles and volume.",
    )?;
    Ok(Measurement::new(moles / volume, "M"))
}

/// Moles of solute from molarity and liters of solution.
pub fn molarity_to_moles(molarity: f64, volume: f64) -> Result<Measurement, CalcError> {
    require_positive(
        &[molarity, volume],
        "Please enter valid positive numbers for molarity and volume.",
    )?;
    Ok(Measurement::new(molarity * volume, "moles"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mass_to_moles_divides_by_molar_mass() {
        let m = mass_to_moles(18.0, 18.0).unwrap();
        assert_eq!(m.value, 1.0);
        assert_eq!(m.unit, "moles");
        assert_relative_eq!(mass_to_moles(36.03, 18.015).unwrap().value, 2.0);
    }

    #[test]
    fn particle_conversions_use_avogadro() {
        let c = Constants::default();
        assert_relative_eq!(
            moles_to_particles(2.0, &c).unwrap().value,
            1.204_428_152e24
        );
        assert_relative_eq!(
            particles_to_moles(3.011_070_38e23, &c).unwrap().value,
            0.5
        );
    }

    #[test]
    fn stp_conversions_use_molar_volume() {
        let c = Constants::default();
        let v = moles_to_volume(2.0, &c).unwrap();
        assert_relative_eq!(v.value, 44.8);
        assert_eq!(v.unit, "liters (at STP)");
        let n = volume_to_moles(11.2, &c).unwrap();
        assert_relative_eq!(n.value, 0.5);
        assert_eq!(n.unit, "moles (at STP)");
    }

    #[test]
    fn solution_conversions() {
        assert_relative_eq!(moles_to_molarity(0.5, 0.25).unwrap().value, 2.0);
        assert_eq!(moles_to_molarity(0.5, 0.25).unwrap().unit, "M");
        assert_relative_eq!(molarity_to_moles(0.1, 2.5).unwrap().value, 0.25);
        assert_relative_eq!(moles_to_mass(0.25, 58.44).unwrap().value, 14.61);
        assert_eq!(moles_to_mass(1.0, 1.0).unwrap().unit, "grams");
    }

    #[test]
    fn custom_constants_are_honoured() {
        let c = Constants {
            molar_volume_stp: 22.71,
            ..Constants::default()
        };
        assert_relative_eq!(moles_to_volume(1.0, &c).unwrap().value, 22.71);
    }

    #[test]
    fn any_invalid_input_rejects_the_whole_calculation() {
        let err = mass_to_moles(18.0, 0.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please enter valid positive numbers for mass and molar mass."
        );
        assert!(mass_to_moles(f64::NAN, 18.0).is_err());
        assert!(moles_to_molarity(-1.0, 1.0).is_err());
        assert_eq!(
            moles_to_particles(0.0, &Constants::default())
                .unwrap_err()
                .to_string(),
            "Please enter a valid positive number for moles."
        );
        assert_eq!(
            volume_to_moles(f64::NAN, &Constants::default())
                .unwrap_err()
                .to_string(),
            "Please enter a valid positive number for volume."
        );
    }
}
