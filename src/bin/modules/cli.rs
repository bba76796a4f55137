use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const ABOUT: &str = "Introductory chemistry calculators: mole conversions, ideal gas law, dilution, empirical formula and limiting reagent.";
const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser)]
#[command(version, about = ABOUT, help_template = HELP_TEMPLATE)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub output: OutputOptions,

    /// Custom constants file in TOML format.
    ///
    /// May set any of `avogadro`, `molar_volume_stp` and `gas_constant`; the rest keep their
    /// reference values.
    #[arg(short = 'C', long, value_name = "FILE", global = true)]
    pub constants: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Options for controlling the output format and destination.
#[derive(Args)]
#[command(next_help_heading = "Output Options")]
pub struct OutputOptions {
    /// Output file path.
    ///
    /// If not specified, results are written to standard output.
    #[arg(short, long, value_name = "FILE", global = true)]
    pub output: Option<PathBuf>,

    /// Output format for the result.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty, global = true)]
    pub format: OutputFormat,
}

/// Every value is taken as text so that blank or malformed input reaches the calculator's own
/// validation, exactly as if it had been typed into a form.
#[derive(Subcommand)]
pub enum Command {
    /// Moles from a mass in grams and a molar mass in g/mol.
    MassToMoles {
        #[arg(long)]
        mass: Option<String>,
        #[arg(long)]
        molar_mass: Option<String>,
    },
    /// Particle count from an amount in moles.
    MolesToParticles {
        #[arg(long)]
        moles: Option<String>,
    },
    /// Mass in grams from moles and a molar mass.
    MolesToMass {
        #[arg(long)]
        moles: Option<String>,
        #[arg(long)]
        molar_mass: Option<String>,
    },
    /// Moles from a particle count.
    ParticlesToMoles {
        #[arg(long)]
        particles: Option<String>,
    },
    /// Gas volume at STP from moles.
    MolesToVolume {
        #[arg(long)]
        moles: Option<String>,
    },
    /// Moles from a gas volume at STP.
    VolumeToMoles {
        #[arg(long)]
        volume: Option<String>,
    },
    /// Molarity from moles of solute and liters of solution.
    MolesToMolarity {
        #[arg(long)]
        moles: Option<String>,
        #[arg(long)]
        volume: Option<String>,
    },
    /// Moles of solute from molarity and liters of solution.
    MolarityToMoles {
        #[arg(long)]
        molarity: Option<String>,
        #[arg(long)]
        volume: Option<String>,
    },
    /// Solve PV = nRT; leave exactly one of the four values out.
    IdealGas {
        /// Pressure in atm.
        #[arg(long)]
        pressure: Option<String>,
        /// Volume in liters.
        #[arg(long)]
        volume: Option<String>,
        /// Amount in moles.
        #[arg(long)]
        moles: Option<String>,
        /// Temperature in kelvin.
        #[arg(long)]
        temperature: Option<String>,
    },
    /// Solve M1V1 = M2V2; leave exactly one of the four values out.
    Dilution {
        #[arg(long)]
        m1: Option<String>,
        #[arg(long)]
        v1: Option<String>,
        #[arg(long)]
        m2: Option<String>,
        #[arg(long)]
        v2: Option<String>,
    },
    /// Empirical formula from element symbols and their masses.
    EmpiricalFormula {
        /// Comma-separated element symbols, e.g. "C,H,O".
        #[arg(long)]
        elements: Option<String>,
        /// Comma-separated masses in grams, in the same order as the elements.
        #[arg(long)]
        masses: Option<String>,
    },
    /// Limiting reagent between two reactants.
    ///
    /// The coefficient of each reactant is read from the leading integer of its label ("2H2").
    LimitingReagent {
        /// The balanced equation, e.g. "2H2 + O2 -> 2H2O".
        #[arg(long)]
        equation: Option<String>,
        #[arg(long)]
        reactant1: Option<String>,
        /// Available amount of reactant 1 in moles.
        #[arg(long)]
        amount1: Option<String>,
        #[arg(long)]
        reactant2: Option<String>,
        /// Available amount of reactant 2 in moles.
        #[arg(long)]
        amount2: Option<String>,
    },
    /// List the available calculators and the fields they read.
    List,
}

/// Output format for the calculation result.
#[derive(Clone, ValueEnum)]
pub enum OutputFormat {
    /// Boxed table with one row per result line.
    Pretty,
    /// The result area text, one `Label: value` line per entry.
    Plain,
    /// JSON object with the calculator, state and entries.
    Json,
}
