pub mod calculators;
pub mod config;
pub mod error;
pub mod form;
pub mod math;
pub mod presentation;
pub mod types;
pub mod validation;

pub use calculators::Calculator;
pub use config::Constants;
pub use error::CalcError;
pub use form::{Form, FormInputs};
pub use presentation::{
    DisplayState, Entry, Presentation, ResultDisplay, ResultPanel, format_scientific, show_error,
    show_result,
};
pub use types::{LimitingReagentReport, Measurement, Outcome, Reactant};
pub use validation::validate_number;

use std::sync::OnceLock;

static DEFAULT_CONSTANTS: OnceLock<Constants> = OnceLock::new();

/// The reference constants, shared by every calculation that does not supply its own.
pub fn default_constants() -> &'static Constants {
    DEFAULT_CONSTANTS.get_or_init(Constants::default)
}
