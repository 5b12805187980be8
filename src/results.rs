//! Collected gas measurements, keyed by scenario and contract variant.

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use indexmap::IndexMap;

use crate::{
    parsers::ParseError,
    scenarios::{ContractVariant, ScenarioKey},
};

/// Amount of gas consumed by a single test.
///
/// Displays with comma thousands separators. Amounts are held exactly up to `u128::MAX`, far beyond any gas a
/// transaction can use; larger amounts fail to parse rather than being truncated.
///
/// # Examples
///
/// ```
/// use gas_report::Gas;
///
/// let gas: Gas = "1234567".parse().unwrap();
///
/// assert_eq!(gas.to_string(), "1,234,567");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Gas(pub u128);

impl Display for Gas {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }
        f.pad(&grouped)
    }
}

impl FromStr for Gas {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse()
            .map(Gas)
            .map_err(|source| ParseError::InvalidGas {
                value: s.to_string(),
                source,
            })
    }
}

/// Gas measurements of one scenario, one optional slot per [`ContractVariant`].
///
/// A slot stays `None` until a measurement for that variant is recorded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Measurements {
    /// Measurement for [`ContractVariant::HashMap`].
    pub hash_map: Option<Gas>,
    /// Measurement for [`ContractVariant::EnumerableMap`].
    pub enumerable_map: Option<Gas>,
    /// Measurement for [`ContractVariant::Mapping`].
    pub mapping: Option<Gas>,
}

impl Measurements {
    /// Measurement recorded for `variant`, if any.
    #[must_use]
    pub fn get(&self, variant: ContractVariant) -> Option<Gas> {
        match variant {
            ContractVariant::HashMap => self.hash_map,
            ContractVariant::EnumerableMap => self.enumerable_map,
            ContractVariant::Mapping => self.mapping,
        }
    }

    fn slot(&mut self, variant: ContractVariant) -> &mut Option<Gas> {
        match variant {
            ContractVariant::HashMap => &mut self.hash_map,
            ContractVariant::EnumerableMap => &mut self.enumerable_map,
            ContractVariant::Mapping => &mut self.mapping,
        }
    }
}

/// Gas measurements of every scenario seen, in first-seen order.
///
/// # Examples
///
/// ```
/// use gas_report::{ContractVariant, Gas, ResultsTable, ScenarioKey};
///
/// let mut results = ResultsTable::default();
/// results.record(ScenarioKey::from("test_writeSingleKey"), ContractVariant::Mapping, Gas(22_000));
///
/// let measurements = results.get(&ScenarioKey::from("test_writeSingleKey")).unwrap();
/// assert_eq!(measurements.get(ContractVariant::Mapping), Some(Gas(22_000)));
/// assert_eq!(measurements.get(ContractVariant::HashMap), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultsTable(IndexMap<ScenarioKey, Measurements>);

impl ResultsTable {
    /// Records the gas used by `variant` in `scenario`, replacing any earlier measurement for the same pair.
    pub fn record(&mut self, scenario: ScenarioKey, variant: ContractVariant, gas: Gas) {
        log::debug!("recorded {scenario} on {variant}: {gas}");
        if let Some(previous) = self.0.entry(scenario).or_default().slot(variant).replace(gas) {
            log::warn!("replaced earlier {variant} measurement ({previous})");
        }
    }

    /// Measurements for `scenario`, if it was seen.
    #[must_use]
    pub fn get(&self, scenario: &ScenarioKey) -> Option<&Measurements> {
        self.0.get(scenario)
    }

    /// Iterates scenarios in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&ScenarioKey, &Measurements)> {
        self.0.iter()
    }

    /// Number of distinct scenarios seen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no scenario has been seen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
