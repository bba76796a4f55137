use super::cli::{Cli, Command};
use super::error::CliError;
use super::io;
use chemxplore::{Calculator, Constants, DisplayState, Form, ResultPanel, default_constants};

pub fn run(args: Cli) -> Result<DisplayState, CliError> {
    let constants = match &args.constants {
        Some(path) => Constants::load_from_file(path)?,
        None => *default_constants(),
    };

    let writer = io::get_writer(&args.output.output)?;

    let Some((calculator, form)) = into_form(args.command) else {
        io::write_catalog(writer, &args.output.format)?;
        return Ok(DisplayState::Success);
    };

    let mut panel = ResultPanel::new();
    let state = calculator.run(&form, &constants, &mut panel);
    log::info!("{} finished in the {:?} state", calculator.title(), state);

    if let Some(presentation) = panel.current() {
        io::write_presentation(writer, calculator, presentation, &args.output.format)?;
    }

    Ok(state)
}

/// Fills the form of the selected calculator from its command-line values.
///
/// Returns `None` for commands that do not run a calculator.
fn into_form(command: Command) -> Option<(Calculator, Form)> {
    let mut form = Form::new();
    let calculator = match command {
        Command::MassToMoles { mass, molar_mass } => {
            form.set_opt("mass", mass);
            form.set_opt("molar_mass", molar_mass);
            Calculator::MassToMoles
        }
        Command::MolesToParticles { moles } => {
            form.set_opt("moles", moles);
            Calculator::MolesToParticles
        }
        Command::MolesToMass { moles, molar_mass } => {
            form.set_opt("moles", moles);
            form.set_opt("molar_mass", molar_mass);
            Calculator::MolesToMass
        }
        Command::ParticlesToMoles { particles } => {
            form.set_opt("particles", particles);
            Calculator::ParticlesToMoles
        }
        Command::MolesToVolume { moles } => {
            form.set_opt("moles", moles);
            Calculator::MolesToVolume
        }
        Command::VolumeToMoles { volume } => {
            form.set_opt("volume", volume);
            Calculator::VolumeToMoles
        }
        Command::MolesToMolarity { moles, volume } => {
            form.set_opt("moles", moles);
            form.set_opt("volume", volume);
            Calculator::MolesToMolarity
        }
        Command::MolarityToMoles { molarity, volume } => {
            form.set_opt("molarity", molarity);
            form.set_opt("volume", volume);
            Calculator::MolarityToMoles
        }
        Command::IdealGas {
            pressure,
            volume,
            moles,
            temperature,
        } => {
            form.set_opt("pressure", pressure);
            form.set_opt("volume", volume);
            form.set_opt("moles", moles);
            form.set_opt("temperature", temperature);
            Calculator::IdealGas
        }
        Command::Dilution { m1, v1, m2, v2 } => {
            form.set_opt("m1", m1);
            form.set_opt("v1", v1);
            form.set_opt("m2", m2);
            form.set_opt("v2", v2);
            Calculator::Dilution
        }
        Command::EmpiricalFormula { elements, masses } => {
            form.set_opt("elements", elements);
            form.set_opt("masses", masses);
            Calculator::EmpiricalFormula
        }
        Command::LimitingReagent {
            equation,
            reactant1,
            amount1,
            reactant2,
            amount2,
        } => {
            form.set_opt("equation", equation);
            form.set_opt("reactant1", reactant1);
            form.set_opt("amount1", amount1);
            form.set_opt("reactant2", reactant2);
            form.set_opt("amount2", amount2);
            Calculator::LimitingReagent
        }
        Command::List => return None,
    };

    Some((calculator, form))
}
