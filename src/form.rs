//! Named input fields a calculator reads from.

use crate::math::numeric::parse_float;
use std::collections::HashMap;

/// A source of named text fields, such as the inputs of a calculator form.
///
/// A field that does not exist reads the same as an empty one.
pub trait FormInputs {
    fn field(&self, name: &str) -> &str;

    /// Reads a field as a number, yielding `NaN` when it is blank or not numeric.
    fn number(&self, name: &str) -> f64 {
        parse_float(self.field(name))
    }
}

impl FormInputs for HashMap<String, String> {
    fn field(&self, name: &str) -> &str {
        self.get(name).map(String::as_str).unwrap_or("")
    }
}

impl FormInputs for HashMap<&str, &str> {
    fn field(&self, name: &str) -> &str {
        self.get(name).copied().unwrap_or("")
    }
}

/// An owned set of form fields, built up one value at a time.
///
/// ```
/// use chemxplore::{Form, FormInputs};
///
/// let form = Form::new().with("mass", "18").with("molar_mass", "18.015");
/// assert_eq!(form.number("mass"), 18.0);
/// assert_eq!(form.field("volume"), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    fields: HashMap<String, String>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets a field, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Sets a field only when a value is given; `None` leaves the field blank.
    pub fn set_opt(&mut self, name: impl Into<String>, value: Option<impl Into<String>>) {
        if let Some(value) = value {
            self.set(name, value);
        }
    }
}

impl FormInputs for Form {
    fn field(&self, name: &str) -> &str {
        self.fields.field(name)
    }
}
