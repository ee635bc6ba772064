use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::{anyhow, bail, Context};
use clap::ValueEnum;
use rmi::prelude::*;
use rmi::{BinarySearch, IndexSummary, LinearSearch, OptimalSearch};
use serde::Serialize;
use strum_macros::AsRefStr;

pub const DEFAULT_FILE: &str = "data/people.csv";
pub const DEFAULT_COLUMN: &str = "age";

/// Line number of the first record, after the header and counting from 1
pub const FIRST_LINE_OF_DATA: usize = 2;

/// How the window around the model's guess is searched
#[derive(ValueEnum, Clone, Copy, Debug, AsRefStr, Default, PartialEq, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    #[default]
    Binary,
    Linear,
    Optimal,
}

/// Everything printed by `--json`
#[derive(Serialize, Debug)]
pub struct Report {
    pub file: String,
    pub column: String,
    pub key: f64,
    pub search: SearchKind,
    pub index: IndexSummary<LinearModel>,
    pub lines: Vec<usize>,
}

/// Read the values of `column` from CSV data. The first line is the header, the
/// column is matched case-insensitively and every other non-empty line must hold
/// a number in that column.
///
/// Fields are split on commas, quoted fields containing commas are not supported.
pub fn extract_column<R: BufRead>(reader: R, column: &str) -> anyhow::Result<Vec<f64>> {
    let mut lines = reader.lines();

    let header = lines
        .next()
        .ok_or_else(|| anyhow!("missing header line"))?
        .context("failed to read the header line")?;
    let column_id = split_fields(&header)
        .position(|name| name.eq_ignore_ascii_case(column))
        .ok_or_else(|| anyhow!("no column named `{}` in header `{}`", column, header))?;

    let mut values = Vec::new();
    for (i, line) in lines.enumerate() {
        let line_number = i + FIRST_LINE_OF_DATA;
        let line = line.with_context(|| format!("failed to read line {}", line_number))?;
        if line.trim().is_empty() {
            continue;
        }

        let field = split_fields(&line).nth(column_id).ok_or_else(|| {
            anyhow!("line {} has no field for column `{}`", line_number, column)
        })?;
        let value = field.parse::<f64>().with_context(|| {
            format!("line {}: `{}` is not a number", line_number, field)
        })?;
        values.push(value);
    }

    Ok(values)
}

fn split_fields(line: &str) -> impl Iterator<Item = &str> {
    line.split(',').map(|field| field.trim().trim_matches('"'))
}

/// Same as [`extract_column`], reading from a file
pub fn load_column<P: AsRef<Path>>(path: P, column: &str) -> anyhow::Result<Vec<f64>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    extract_column(BufReader::new(file), column)
        .with_context(|| format!("failed to load column `{}` from {}", column, path.display()))
}

/// Offsets of `key` in the indexed column: only the first match found, or all of
/// them with `all`.
pub fn find(
    index: &LearnedIndex,
    key: f64,
    search: SearchKind,
    all: bool,
) -> rmi::Result<Vec<usize>> {
    if all {
        return index.lookup_all(key);
    }

    let offset = match search {
        SearchKind::Binary => index.lookup_with::<BinarySearch>(key),
        SearchKind::Linear => index.lookup_with::<LinearSearch>(key),
        SearchKind::Optimal => index.lookup_with::<OptimalSearch>(key),
    }?;
    Ok(vec![offset])
}

/// Convert dataset offsets to line numbers in the CSV file
pub fn to_lines(offsets: &[usize]) -> Vec<usize> {
    offsets
        .iter()
        .map(|offset| offset + FIRST_LINE_OF_DATA)
        .collect()
}

/// Fail with the file and key when nothing matched
pub fn ensure_found(
    offsets: rmi::Result<Vec<usize>>,
    file: &Path,
    key: f64,
) -> anyhow::Result<Vec<usize>> {
    match offsets {
        Ok(offsets) => Ok(offsets),
        Err(rmi::Error::KeyNotFound(_)) => {
            bail!("there is no entry found for {} inside {}", key, file.display())
        }
        Err(err) => Err(err.into()),
    }
}
