//! Parser for the JSON report printed by `forge test --json`.
//!
//! Forge prints compilation progress and other chatter around a single line holding the report. The report maps
//! `<file>:<Contract>GasTest` to the results of each test in that contract; every gas comparison test logs a line
//! such as `Gas used: 21000` which ends up in its `decoded_logs`.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::Deserialize;

use crate::{
    parsers::ParseError,
    results::{Gas, ResultsTable},
    scenarios::ContractVariant,
};

/// Prefix of the log line carrying the measured gas.
pub const GAS_USED_PREFIX: &str = "Gas used";

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid digits pattern"));

/// Results of all tests in one test contract.
#[derive(Debug, Deserialize)]
pub struct TestSuite {
    /// Results keyed by test signature, e.g. `test_writeSingleKey()`.
    pub test_results: IndexMap<String, TestResult>,
}

/// Result of one test. Only the fields the report needs are kept.
#[derive(Debug, Deserialize)]
pub struct TestResult {
    /// Logs emitted by the test, decoded to text.
    pub decoded_logs: Vec<String>,
}

/// Finds the report line in forge's stdout, the first line starting with `{`.
///
/// # Examples
///
/// ```
/// use gas_report::parsers::json::extract_payload;
///
/// let stdout = "Compiling 3 files with 0.8.21\nSolc finished\n{\"a\":1}\n";
///
/// assert_eq!(extract_payload(stdout), Some("{\"a\":1}"));
/// ```
#[must_use]
pub fn extract_payload(stdout: &str) -> Option<&str> {
    stdout.lines().find(|line| line.starts_with('{'))
}

/// Finds the first `Gas used` line in `logs` and returns the first number in it.
///
/// # Errors
///
/// Returns `Ok(None)` when no log starts with [`GAS_USED_PREFIX`], and [`ParseError::MissingGasAmount`] if the
/// line has no digits.
pub fn gas_used(logs: &[String]) -> Result<Option<&str>, ParseError> {
    let Some(line) = logs.iter().find(|entry| entry.starts_with(GAS_USED_PREFIX)) else {
        return Ok(None);
    };
    DIGITS
        .find(line)
        .map(|m| Some(m.as_str()))
        .ok_or_else(|| ParseError::MissingGasAmount(line.clone()))
}

/// Parses a JSON report into a results table.
///
/// # Errors
///
/// Fails if the payload is not a well-formed report, a test file key has no contract part, a contract is not a
/// known variant, or a test did not log its gas usage.
///
/// # Examples
///
/// ```
/// use gas_report::{parsers::json, ContractVariant, Gas};
///
/// let payload = r#"{"test/gas-comparison/Mapping.t.sol:MappingGasTest":{"test_results":
///     {"test_writeSingleKey()":{"decoded_logs":["Gas used: 22000"]}}}}"#;
///
/// let results = json::parse(payload).unwrap();
/// let measurements = results.get(&"test_writeSingleKey".into()).unwrap();
///
/// assert_eq!(measurements.get(ContractVariant::Mapping), Some(Gas(22_000)));
/// ```
pub fn parse(payload: &str) -> Result<ResultsTable, ParseError> {
    let suites: IndexMap<String, TestSuite> = serde_json::from_str(payload)?;

    let mut results = ResultsTable::default();
    for (test_file, suite) in suites {
        let contract = test_file
            .split(':')
            .nth(1)
            .ok_or_else(|| ParseError::MalformedTestFile(test_file.clone()))?;
        let variant = ContractVariant::from_contract(contract)?;
        log::debug!("parsing {} results from {test_file}...", suite.test_results.len());

        for (test, result) in suite.test_results {
            let gas = gas_used(&result.decoded_logs)?
                .ok_or_else(|| ParseError::MissingGasLog {
                    test_file: test_file.clone(),
                    test: test.clone(),
                })?
                .parse::<Gas>()?;
            let scenario = test.strip_suffix("()").unwrap_or(&test);
            results.record(scenario.into(), variant, gas);
        }
    }
    log::info!("parsed {} scenarios from JSON report", results.len());
    Ok(results)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const STDOUT: &str = r#"Compiling 42 files with Solc 0.8.24
Solc 0.8.24 finished in 3.21s
{"test/gas-comparison/HashMap.t.sol:HashMapGasTest":{"duration":"1s","test_results":{"test_writeSingleKey()":{"status":"Success","reason":null,"decoded_logs":["setup done","Gas used: 21000 (warm)","Gas used: 5"]},"test_remove10kKeys()":{"status":"Success","decoded_logs":["Gas used: 1234567"]}},"warnings":[]},"test/gas-comparison/EnumerableMap.t.sol:EnumerableMapGasTest":{"test_results":{"test_writeSingleKey()":{"decoded_logs":["Gas used: 45120"]}}}}
"#;

    #[test]
    fn payload_skips_other_lines() {
        let payload = extract_payload(STDOUT).unwrap();
        assert!(payload.starts_with("{\"test/gas-comparison/HashMap.t.sol"));
    }

    #[test]
    fn missing_payload() {
        assert_eq!(extract_payload("Compiling...\nNo tests found\n"), None);
    }

    #[test]
    fn parses_report() {
        let results = parse(extract_payload(STDOUT).unwrap()).unwrap();

        let keys: Vec<_> = results.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, ["test_writeSingleKey", "test_remove10kKeys"]);

        let write = results.get(&"test_writeSingleKey".into()).unwrap();
        assert_eq!(write.hash_map, Some(Gas(21_000)));
        assert_eq!(write.enumerable_map, Some(Gas(45_120)));
        assert_eq!(write.mapping, None);

        let remove = results.get(&"test_remove10kKeys".into()).unwrap();
        assert_eq!(remove.hash_map, Some(Gas(1_234_567)));
    }

    #[test]
    fn parsing_is_idempotent() {
        let payload = extract_payload(STDOUT).unwrap();
        assert_eq!(parse(payload).unwrap(), parse(payload).unwrap());
    }

    #[test]
    fn gas_used_takes_first_digit_run() {
        let logs = vec!["Gas used (cold): 300 of 400".to_string()];
        assert_eq!(gas_used(&logs).unwrap(), Some("300"));
    }

    #[test]
    fn missing_gas_log_fails() {
        let payload = r#"{"a.sol:MappingGasTest":{"test_results":{"test_writeSingleKey()":{"decoded_logs":["hello"]}}}}"#;
        let err = parse(payload).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MissingGasLog { ref test, .. } if test == "test_writeSingleKey()"
        ));
    }

    #[test]
    fn gas_used_only_reads_ascii_digits() {
        let logs = vec!["Gas used \u{0663}: 300".to_string()];
        assert_eq!(gas_used(&logs).unwrap(), Some("300"));
    }

    #[test]
    fn gas_log_without_digits_fails() {
        let payload = r#"{"a.sol:MappingGasTest":{"test_results":{"test_writeSingleKey()":{"decoded_logs":["Gas used: n/a"]}}}}"#;
        assert!(matches!(parse(payload).unwrap_err(), ParseError::MissingGasAmount(_)));
    }

    #[test]
    fn missing_decoded_logs_fails() {
        let payload = r#"{"a.sol:MappingGasTest":{"test_results":{"test_writeSingleKey()":{"logs":[]}}}}"#;
        assert!(matches!(parse(payload).unwrap_err(), ParseError::Json(_)));
    }

    #[test]
    fn test_file_without_contract_fails() {
        let payload = r#"{"MappingGasTest":{"test_results":{}}}"#;
        assert!(matches!(parse(payload).unwrap_err(), ParseError::MalformedTestFile(_)));
    }
}
