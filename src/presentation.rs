//! This module turns calculation outcomes into the text of a result area.
//!
//! A result area shows one or more labelled entries (`Result: 1.000 moles`) and is either in the
//! success or the error state. Calculators never write to a concrete surface; they hand a
//! `Presentation` to whatever implements `ResultDisplay`.

use crate::error::CalcError;
use crate::math::numeric::{to_exponential, to_fixed};
use crate::types::{Measurement, Outcome};
use serde::Serialize;
use std::fmt;

/// Magnitude at or above which values switch to exponential notation.
const EXPONENTIAL_UPPER: f64 = 1_000_000.0;
/// Magnitude below which values switch to exponential notation.
const EXPONENTIAL_LOWER: f64 = 0.001;

/// Formats a number with three digits after the decimal point.
///
/// Magnitudes of at least one million or below one thousandth are written in exponential
/// notation with a signed exponent (`1.235e+6`, `1.000e-4`); everything else is written in fixed
/// point (`0.500`). Ties round to the larger magnitude (`0.0625` is `0.063`). Zero falls below
/// the lower bound and is written as `0.000e+0`; non-finite values are `NaN`, `Infinity` and
/// `-Infinity`.
pub fn format_scientific(number: f64) -> String {
    let magnitude = number.abs();
    if magnitude >= EXPONENTIAL_UPPER || magnitude < EXPONENTIAL_LOWER {
        to_exponential(number, 3)
    } else {
        to_fixed(number, 3)
    }
}

/// The visual state of a result area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayState {
    Success,
    Error,
}

/// A single `Label: value` line of a result area.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub label: &'static str,
    pub value: String,
}

/// The complete content of a result area.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Presentation {
    pub state: DisplayState,
    pub entries: Vec<Entry>,
}

impl Presentation {
    /// A success presentation of a measurement: `Result: <formatted> <unit>`.
    pub fn result(measurement: Measurement) -> Self {
        Self::success(vec![Entry {
            label: "Result",
            value: format!("{} {}", format_scientific(measurement.value), measurement.unit),
        }])
    }

    /// An error presentation: `Error: <message>`.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            state: DisplayState::Error,
            entries: vec![Entry {
                label: "Error",
                value: message.into(),
            }],
        }
    }

    /// Builds the presentation of any calculation outcome.
    pub fn from_outcome(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Quantity(measurement) => Self::result(*measurement),
            Outcome::Formula { formula } => Self::success(vec![Entry {
                label: "Empirical Formula",
                value: formula.clone(),
            }]),
            Outcome::LimitingReagent(report) => Self::success(vec![
                Entry {
                    label: "Limiting Reagent",
                    value: report.limiting_label().to_string(),
                },
                Entry {
                    label: "Explanation",
                    value: report.explanation(),
                },
            ]),
        }
    }

    /// Builds the presentation of a finished calculation, successful or not.
    pub fn from_result(result: &Result<Outcome, CalcError>) -> Self {
        match result {
            Ok(outcome) => Self::from_outcome(outcome),
            Err(e) => Self::error(e.to_string()),
        }
    }

    fn success(entries: Vec<Entry>) -> Self {
        Self {
            state: DisplayState::Success,
            entries,
        }
    }
}

impl fmt::Display for Presentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", entry.label, entry.value)?;
        }
        Ok(())
    }
}

/// A surface that can show the result of a calculation.
///
/// Each calculation writes exactly once; a new presentation replaces whatever was shown before.
pub trait ResultDisplay {
    fn present(&mut self, presentation: Presentation);
}

/// An in-memory result area that keeps the last presentation written to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultPanel {
    current: Option<Presentation>,
}

impl ResultPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// The presentation currently shown, if any calculation has run.
    pub fn current(&self) -> Option<&Presentation> {
        self.current.as_ref()
    }

    /// The text currently shown, or an empty string before the first calculation.
    pub fn text(&self) -> String {
        self.current
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    pub fn state(&self) -> Option<DisplayState> {
        self.current.as_ref().map(|p| p.state)
    }
}

impl ResultDisplay for ResultPanel {
    fn present(&mut self, presentation: Presentation) {
        self.current = Some(presentation);
    }
}

/// Writes a successful measurement to `display`.
pub fn show_result(display: &mut dyn ResultDisplay, value: f64, unit: &'static str) {
    display.present(Presentation::result(Measurement::new(value, unit)));
}

/// Writes an error message to `display`.
pub fn show_error(display: &mut dyn ResultDisplay, message: &str) {
    display.present(Presentation::error(message));
}
