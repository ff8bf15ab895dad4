use tracing::debug;

use crate::{config::Config, ok_or};

/// One converted value: what was given and what it became.
#[derive(Debug, Eq, PartialEq)]
pub struct Row {
    pub input: String,
    pub output: String,
}

#[derive(Debug, Default)]
pub struct Report {
    pub rows: Vec<Row>,
    pub errors: Vec<anyhow::Error>,
}

/// Converts every configured value, collecting failures rather than stopping
/// at the first one.
pub fn run(config: &Config) -> Report {
    let mut report = Report::default();

    for value in &config.values {
        let output = ok_or!(config.operation.apply(value, &config.options), err => {
            report.errors.push(err);
            continue;
        });

        debug!(input = %value, %output, operation = ?config.operation, "converted");
        report.rows.push(Row {
            input: value.clone(),
            output,
        });
    }

    report
}
