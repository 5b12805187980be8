//! Assembly and markdown rendering of the gas comparison table.

use tabled::{builder::Builder, settings::Style};

use crate::{
    results::ResultsTable,
    scenarios::{ContractVariant, ScenarioKey, DISPLAY_ORDER},
};

/// One table row: the scenario description followed by one cell per [`ContractVariant`].
pub type Row = [String; 4];

/// Order in which scenarios are laid out as rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// The order scenarios were first seen in the parsed output.
    FirstSeen,
    /// The fixed [`DISPLAY_ORDER`]. Scenarios outside it follow in first-seen order.
    Display,
}

/// Header row of the table.
#[must_use]
pub fn header() -> Row {
    [
        "Test".to_string(),
        ContractVariant::HashMap.to_string(),
        ContractVariant::EnumerableMap.to_string(),
        ContractVariant::Mapping.to_string(),
    ]
}

/// Lays out `results` as a header row followed by one row per scenario.
///
/// Scenarios without a known description get an empty first cell, variants without a measurement get an empty
/// cell.
///
/// # Examples
///
/// ```
/// use gas_report::{report::{rows, Order}, ContractVariant, Gas, ResultsTable};
///
/// let mut results = ResultsTable::default();
/// results.record("test_writeSingleKey".into(), ContractVariant::HashMap, Gas(21_000));
///
/// let rows = rows(&results, Order::FirstSeen);
///
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[1], ["Write a single key", "21,000", "", ""].map(String::from));
/// ```
#[must_use]
pub fn rows(results: &ResultsTable, order: Order) -> Vec<Row> {
    let scenarios: Vec<&ScenarioKey> = match order {
        Order::FirstSeen => results.iter().map(|(key, _)| key).collect(),
        Order::Display => {
            let mut ordered: Vec<&ScenarioKey> = DISPLAY_ORDER
                .iter()
                .filter_map(|name| {
                    results
                        .iter()
                        .find(|(key, _)| key.as_str() == *name)
                        .map(|(key, _)| key)
                })
                .collect();
            ordered.extend(
                results
                    .iter()
                    .map(|(key, _)| key)
                    .filter(|key| !DISPLAY_ORDER.contains(&key.as_str())),
            );
            ordered
        }
    };

    let mut rows = vec![header()];
    for scenario in scenarios {
        let Some(measurements) = results.get(scenario) else {
            continue;
        };
        if scenario.description().is_none() {
            log::warn!("no description for scenario {scenario}, leaving it blank");
        }
        let cell = |variant| {
            measurements
                .get(variant)
                .map(|gas| gas.to_string())
                .unwrap_or_default()
        };
        rows.push([
            scenario.description().unwrap_or_default().to_string(),
            cell(ContractVariant::HashMap),
            cell(ContractVariant::EnumerableMap),
            cell(ContractVariant::Mapping),
        ]);
    }
    rows
}

/// Renders rows as a GitHub-flavoured markdown table, the first row being the header.
#[must_use]
pub fn render_markdown(rows: &[Row]) -> String {
    let mut builder = Builder::default();
    for row in rows {
        builder.push_record(row.iter().cloned());
    }

    let mut table = builder.build();
    table.with(Style::markdown());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::results::Gas;

    fn cells(line: &str) -> Vec<&str> {
        line.trim()
            .trim_start_matches('|')
            .trim_end_matches('|')
            .split('|')
            .map(str::trim)
            .collect()
    }

    fn results_in(order: &[&str]) -> ResultsTable {
        let mut results = ResultsTable::default();
        for (i, name) in order.iter().enumerate() {
            results.record((*name).into(), ContractVariant::Mapping, Gas(i as u128));
        }
        results
    }

    #[test]
    fn first_seen_order_follows_input() {
        let input = ["test_remove10kKeys", "test_writeSingleKey", "test_iterate10kKeys"];
        let rows = rows(&results_in(&input), Order::FirstSeen);

        let descriptions: Vec<_> = rows.iter().skip(1).map(|row| row[0].as_str()).collect();
        assert_eq!(
            descriptions,
            ["Remove 10k keys", "Write a single key", "Iterate over 10k keys"]
        );
    }

    #[test]
    fn display_order_ignores_input_order() {
        let mut input = DISPLAY_ORDER;
        input.reverse();
        let rows = rows(&results_in(&input), Order::Display);

        let descriptions: Vec<_> = rows.iter().skip(1).map(|row| row[0].as_str()).collect();
        assert_eq!(
            descriptions,
            [
                "Write a single key",
                "Write 10k keys to map",
                "Write 100k keys to map",
                "Find a key in a 10k map",
                "Find a key in a single key map",
                "Iterate over 10k keys",
                "Remove 10k keys",
            ]
        );
    }

    #[test]
    fn display_order_keeps_unknown_scenarios() {
        let rows = rows(
            &results_in(&["test_unlisted", "test_remove10kKeys"]),
            Order::Display,
        );
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1][0], "Remove 10k keys");
        assert_eq!(rows[2][0], "");
    }

    #[test]
    fn rendered_table_shape() {
        let results = results_in(&["test_writeSingleKey", "test_write10kKeys", "test_unlisted"]);
        let markdown = render_markdown(&rows(&results, Order::FirstSeen));
        let lines: Vec<_> = markdown.lines().collect();

        // header, separator, one line per scenario
        assert_eq!(lines.len(), 2 + results.len());
        for line in &lines {
            assert_eq!(cells(line).len(), 4, "{line}");
        }
        assert_eq!(cells(lines[0]), ["Test", "HashMap", "EnumerableMap", "Mapping"]);
        assert!(cells(lines[1]).iter().all(|cell| cell.chars().all(|c| c == '-' || c == ':')));
    }

    #[test]
    fn renders_missing_variant_as_empty_cell() {
        let mut results = ResultsTable::default();
        results.record("test_writeSingleKey".into(), ContractVariant::HashMap, Gas(21_000));
        results.record("test_writeSingleKey".into(), ContractVariant::Mapping, Gas(22_000));

        let markdown = render_markdown(&rows(&results, Order::FirstSeen));
        let row = markdown.lines().nth(2).unwrap();
        assert_eq!(cells(row), ["Write a single key", "21,000", "", "22,000"]);
    }
}
