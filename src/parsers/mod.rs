//! Parsers turning forge output into a [`crate::ResultsTable`].
//!
//! Two formats are understood: the `.gas-snapshot` file written by `forge snapshot` (see [`snapshot`]) and the JSON
//! report printed by `forge test --json` (see [`json`]). Both fail on the first record they cannot make sense of,
//! a measurement is never silently skipped.

use std::num::ParseIntError;

pub mod json;
pub mod snapshot;

/// Errors raised while parsing forge output.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A snapshot line is missing one of the expected parts.
    #[error("could not find {field} in snapshot line `{line}`")]
    MissingField {
        /// Which part of the line was missing.
        field: &'static str,
        /// The offending line.
        line: String,
    },
    /// A contract name does not belong to any compared variant.
    #[error("unknown contract variant `{0}`")]
    UnknownVariant(String),
    /// A gas amount does not fit in a [`crate::Gas`].
    #[error("invalid gas amount `{value}`: {source}")]
    InvalidGas {
        /// The digits that failed to parse.
        value: String,
        /// Underlying integer parsing error.
        source: ParseIntError,
    },
    /// No line of forge's stdout looked like a JSON report.
    #[error("no JSON report found in forge output")]
    MissingPayload,
    /// The JSON report does not have the expected shape.
    #[error("malformed JSON report: {0}")]
    Json(#[from] serde_json::Error),
    /// A test file key is not of the form `<file>:<contract>`.
    #[error("malformed test file identifier `{0}`")]
    MalformedTestFile(String),
    /// A test never logged its gas usage.
    #[error("no `Gas used` log for {test} in {test_file}")]
    MissingGasLog {
        /// Test file identifier.
        test_file: String,
        /// Test name.
        test: String,
    },
    /// A `Gas used` log carries no number.
    #[error("no gas amount in log `{0}`")]
    MissingGasAmount(String),
}
