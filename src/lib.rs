//! Gas usage comparison tables for map implementations in Solidity.
//!
//! gas-report runs the gas comparison tests of a [Foundry](https://book.getfoundry.sh) project, collects how much
//! gas each test used against each contract variant (`HashMap`, `EnumerableMap` and `Mapping`), and prints the
//! result as a markdown table ready to paste into a README.
//!
//! # Usage
//!
//! Two binaries are provided, one per way of getting measurements out of forge:
//!
//! - `gas-report` runs `forge snapshot` and reads the `.gas-snapshot` file it writes. Rows are in the order tests
//!   appear in the snapshot.
//! - `gas-report-json` runs `forge test --json` and reads the `Gas used` lines each test logs. Rows are in a fixed
//!   order: writes, lookups, iteration, removal.
//!
//! Both are meant to be run from the project root without arguments:
//!
//! ```console
//! $ gas-report-json
//! | Test               | HashMap | EnumerableMap | Mapping |
//! |--------------------|---------|---------------|---------|
//! | Write a single key | 21,000  | 45,120        | 22,000  |
//! ...
//! ```
//!
//! Set `RUST_LOG=info` to follow progress on stderr.
//!
//! ## As a library
//!
//! The parsing and rendering steps do not need forge and can be used on captured output:
//!
//! ```
//! use gas_report::{parsers::snapshot, report};
//!
//! let results = snapshot::parse(
//!     "HashMapGasTest:test_writeSingleKey() (gas: 21000)\n\
//!      MappingGasTest:test_writeSingleKey() (gas: 22000)\n",
//! )
//! .unwrap();
//! let rows = report::rows(&results, report::Order::FirstSeen);
//!
//! assert_eq!(rows[1], ["Write a single key", "21,000", "", "22,000"].map(String::from));
//! println!("{}", report::render_markdown(&rows));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]

pub mod forge;
mod generate;
pub mod parsers;
pub mod report;
pub mod results;
pub mod scenarios;

pub use forge::Mode;
pub use generate::{generate, Options};
pub use results::{Gas, Measurements, ResultsTable};
pub use scenarios::{ContractVariant, ScenarioKey};
