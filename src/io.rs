//! Textual boundary between user-facing front ends and the algebra.
//!
//! Front ends hand over each quaternion as four comma-separated numeric
//! fields (e.g. `"1, 0, 0, 0"`) plus an [`Operation`] name selecting what to
//! do with the two parsed values. Everything that can go wrong with that text
//! is a [`ParseError`], surfaced before any [`Quaternion`] is constructed;
//! the algebra itself never sees malformed input.

use crate::float_types::Real;
use crate::quaternion::Quaternion;
use core::str::FromStr;

/// Errors from parsing textual quaternion or operation input.
#[derive(Debug)]
pub enum ParseError {
    /// A component was not a parseable number.
    ParseFloat(std::num::ParseFloatError),
    /// Wrong number of components, or an unknown operation name.
    MalformedInput(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ParseError::*;

        match self {
            ParseFloat(error) => write!(f, "Could not parse float: {error}"),
            MalformedInput(msg) => write!(f, "Input is malformed: {msg}"),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<std::num::ParseFloatError> for ParseError {
    fn from(value: std::num::ParseFloatError) -> Self {
        Self::ParseFloat(value)
    }
}

/// Parse `"w, x, y, z"` into a [`Quaternion`].
///
/// Exactly four comma-separated numeric fields; whitespace around each field
/// is tolerated.
pub fn parse_quaternion(input: &str) -> Result<Quaternion, ParseError> {
    let fields: Vec<&str> = input.split(',').map(str::trim).collect();
    if fields.len() != 4 {
        return Err(ParseError::MalformedInput(format!(
            "expected 4 comma-separated components, got {}",
            fields.len()
        )));
    }

    let mut components = [0.0 as Real; 4];
    for (slot, field) in components.iter_mut().zip(&fields) {
        *slot = Real::from_str(field)?;
    }

    let [w, x, y, z] = components;
    Ok(Quaternion::new(w, x, y, z))
}

impl FromStr for Quaternion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_quaternion(s)
    }
}

/// The operations a front end can select between two parsed quaternions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    /// Apply the selected operation, left operand first.
    pub fn apply(&self, a: &Quaternion, b: &Quaternion) -> Quaternion {
        match self {
            Operation::Add => *a + *b,
            Operation::Subtract => *a - *b,
            Operation::Multiply => *a * *b,
        }
    }
}

impl FromStr for Operation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" => Ok(Operation::Add),
            "subtract" => Ok(Operation::Subtract),
            "multiply" => Ok(Operation::Multiply),
            other => Err(ParseError::MalformedInput(format!(
                "unknown operation: {other}"
            ))),
        }
    }
}
