use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use serde::Serialize;
use smj_join::{FnJoin, JoinConfig, SortMergeJoin};
use tracing::{debug, info};

use crate::cli::*;
use crate::input::{records, Record};

/// One row of the joined output. A side is `None` when the key had no
/// counterpart there.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JoinedRow {
    pub left: Option<String>,
    pub key: String,
    pub right: Option<String>,
}

impl JoinedRow {
    fn is_match(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }
}

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Join(args) => cmd_join(args, cli.format),
    }
}

fn cmd_join(args: JoinArgs, format: OutputFormat) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let rows = join_files(&args.left, &args.right, args.delimiter, config)?;

    match format {
        OutputFormat::Text => print_text(&rows),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<JoinConfig> {
    let Some(path) = path else {
        return Ok(JoinConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: JoinConfig = toml::from_str(&text)
        .with_context(|| format!("invalid config {}", path.display()))?;
    debug!(path = %path.display(), ?config, "loaded join config");
    Ok(config)
}

fn record_join(
    config: JoinConfig,
) -> impl SortMergeJoin<Record, Record, Output = JoinedRow> {
    FnJoin::new(
        |l: &Record, r: &Record| l.key.cmp(&r.key),
        |m: Option<JoinedRow>, l: Record| match m {
            Some(row) => JoinedRow {
                left: Some(l.value),
                ..row
            },
            None => JoinedRow {
                left: Some(l.value),
                key: l.key,
                right: None,
            },
        },
        |m: Option<JoinedRow>, r: Record| match m {
            Some(row) => JoinedRow {
                right: Some(r.value),
                ..row
            },
            None => JoinedRow {
                left: None,
                key: r.key,
                right: Some(r.value),
            },
        },
        |a: &Record, b: &Record| a.key.cmp(&b.key),
        |a: &Record, b: &Record| a.key.cmp(&b.key),
    )
    .with_config(config)
}

/// Full outer join of two record files by key.
pub fn join_files(
    left: &Path,
    right: &Path,
    delimiter: char,
    config: JoinConfig,
) -> anyhow::Result<Vec<JoinedRow>> {
    let left = records(left, delimiter)?;
    let right = records(right, delimiter)?;

    let join = record_join(config);
    let rows: Vec<JoinedRow> = join.try_merge(left, right)?.collect();

    info!(
        rows = rows.len(),
        matched = rows.iter().filter(|r| r.is_match()).count(),
        "join complete"
    );
    Ok(rows)
}

fn print_text(rows: &[JoinedRow]) {
    let side = |value: &Option<String>| match value {
        Some(v) => v.clone(),
        None => "-".dimmed().to_string(),
    };
    for row in rows {
        println!("{}\t{}\t{}", side(&row.left), row.key.bold(), side(&row.right));
    }
    let matched = rows.iter().filter(|r| r.is_match()).count();
    eprintln!(
        "{} {} rows, {} matched",
        "✓".green().bold(),
        rows.len(),
        matched
    );
}
