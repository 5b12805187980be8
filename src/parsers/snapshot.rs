//! Parser for the `.gas-snapshot` file written by `forge snapshot`.
//!
//! Each line has the shape `<Contract>GasTest:<test>(<args>) (gas: <amount>)`, for example:
//!
//! ```text
//! HashMapGasTest:test_writeSingleKey() (gas: 21000)
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    parsers::ParseError,
    results::{Gas, ResultsTable},
    scenarios::{ContractVariant, ScenarioKey},
};

/// File name forge writes snapshots to, relative to the project root.
pub const FILE_NAME: &str = ".gas-snapshot";

static CONTRACT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*)GasTest:").expect("valid contract name pattern"));
static TEST_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":(.*?)\(").expect("valid test name pattern"));
static GAS_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"gas: ([0-9]+)").expect("valid gas amount pattern"));

fn capture<'a>(pattern: &Regex, field: &'static str, line: &'a str) -> Result<&'a str, ParseError> {
    pattern
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| ParseError::MissingField {
            field,
            line: line.to_string(),
        })
}

/// Parses a single snapshot line into its scenario, variant and gas amount.
///
/// # Errors
///
/// Fails if the contract name, test name or gas amount cannot be found, or if the contract is not a known variant.
///
/// # Examples
///
/// ```
/// use gas_report::{parsers::snapshot, ContractVariant, Gas, ScenarioKey};
///
/// let (scenario, variant, gas) =
///     snapshot::parse_line("MappingGasTest:test_write10kKeys() (gas: 1234567)").unwrap();
///
/// assert_eq!(scenario, ScenarioKey::from("test_write10kKeys"));
/// assert_eq!(variant, ContractVariant::Mapping);
/// assert_eq!(gas, Gas(1_234_567));
/// ```
pub fn parse_line(line: &str) -> Result<(ScenarioKey, ContractVariant, Gas), ParseError> {
    let contract = capture(&CONTRACT_NAME, "contract name", line)?;
    let test = capture(&TEST_NAME, "test name", line)?;
    let gas = capture(&GAS_AMOUNT, "gas amount", line)?;

    Ok((test.into(), contract.parse::<ContractVariant>()?, gas.parse::<Gas>()?))
}

/// Parses the full contents of a snapshot file, skipping blank lines.
///
/// # Errors
///
/// Fails on the first line [`parse_line`] rejects.
pub fn parse(contents: &str) -> Result<ResultsTable, ParseError> {
    let mut results = ResultsTable::default();
    for line in contents.lines().filter(|line| !line.trim().is_empty()) {
        let (scenario, variant, gas) = parse_line(line)?;
        results.record(scenario, variant, gas);
    }
    log::info!("parsed {} scenarios from snapshot", results.len());
    Ok(results)
}
