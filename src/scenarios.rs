//! Fixed scenario and contract variant vocabulary shared by both report flavours.
//!
//! Every gas comparison test exercises one of a handful of [`ScenarioKey`]s against each of the
//! [`ContractVariant`]s. The descriptions and display order here are compiled-in and never change at runtime.

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use crate::parsers::ParseError;

/// Suffix every gas comparison contract name carries, e.g. `HashMapGasTest`.
pub const CONTRACT_SUFFIX: &str = "GasTest";

/// Known scenarios and their human-readable descriptions.
pub const DESCRIPTIONS: [(&str, &str); 7] = [
    ("test_findKeyIn10kMap", "Find a key in a 10k map"),
    ("test_findKeySingleKeyMap", "Find a key in a single key map"),
    ("test_iterate10kKeys", "Iterate over 10k keys"),
    ("test_remove10kKeys", "Remove 10k keys"),
    ("test_write10kKeys", "Write 10k keys to map"),
    ("test_write100kKeys", "Write 100k keys to map"),
    ("test_writeSingleKey", "Write a single key"),
];

/// Row order used by the JSON report: writes, then lookups, then iteration, then removal.
pub const DISPLAY_ORDER: [&str; 7] = [
    "test_writeSingleKey",
    "test_write10kKeys",
    "test_write100kKeys",
    "test_findKeyIn10kMap",
    "test_findKeySingleKeyMap",
    "test_iterate10kKeys",
    "test_remove10kKeys",
];

/// Name of a gas comparison test, e.g. `test_writeSingleKey`.
///
/// # Examples
///
/// ```
/// use gas_report::ScenarioKey;
///
/// let key = ScenarioKey::from("test_writeSingleKey");
///
/// assert_eq!(key.to_string(), "test_writeSingleKey");
/// assert_eq!(key.description(), Some("Write a single key"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScenarioKey(String);

impl ScenarioKey {
    /// Human-readable description of this scenario, if it is one of the known ones.
    #[must_use]
    pub fn description(&self) -> Option<&'static str> {
        DESCRIPTIONS
            .iter()
            .find(|(key, _)| *key == self.0)
            .map(|(_, description)| *description)
    }

    /// The raw test name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ScenarioKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ScenarioKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ScenarioKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One of the map implementations being compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContractVariant {
    /// The custom hash map implementation.
    HashMap,
    /// OpenZeppelin's `EnumerableMap`.
    EnumerableMap,
    /// A plain Solidity `mapping`.
    Mapping,
}

impl ContractVariant {
    /// All variants, in table column order.
    pub const ALL: [Self; 3] = [Self::HashMap, Self::EnumerableMap, Self::Mapping];

    /// Column name for this variant.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::HashMap => "HashMap",
            Self::EnumerableMap => "EnumerableMap",
            Self::Mapping => "Mapping",
        }
    }

    /// Resolves a contract name such as `HashMapGasTest`, stripping the [`CONTRACT_SUFFIX`] when present.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnknownVariant`] if the remaining name is not one of the compared variants.
    ///
    /// # Examples
    ///
    /// ```
    /// use gas_report::ContractVariant;
    ///
    /// let variant = ContractVariant::from_contract("EnumerableMapGasTest").unwrap();
    ///
    /// assert_eq!(variant, ContractVariant::EnumerableMap);
    /// ```
    pub fn from_contract(contract: &str) -> Result<Self, ParseError> {
        contract
            .strip_suffix(CONTRACT_SUFFIX)
            .unwrap_or(contract)
            .parse()
    }
}

impl Display for ContractVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContractVariant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.name() == s)
            .ok_or_else(|| ParseError::UnknownVariant(s.to_string()))
    }
}
