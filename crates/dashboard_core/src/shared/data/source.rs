//! Record sources for list screens
//!
//! The list engine only sees already-loaded records; these types are the
//! loading side that screens call before running a query.

use std::path::PathBuf;

use anyhow::Context;
use contracts::shared::list_query::{FieldValue, Record};

pub trait RecordSource {
    fn load_records(&self) -> anyhow::Result<Vec<Record>>;
}

/// Records held in memory (fixtures, sample data)
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<Record>,
}

impl StaticSource {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl RecordSource for StaticSource {
    fn load_records(&self) -> anyhow::Result<Vec<Record>> {
        Ok(self.records.clone())
    }
}

/// JSON file holding an array of flat objects
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for JsonFileSource {
    fn load_records(&self) -> anyhow::Result<Vec<Record>> {
        let contents = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let records = parse_records(&contents)
            .with_context(|| format!("Invalid records file {}", self.path.display()))?;
        tracing::info!("Loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }
}

/// Parse a JSON array of objects into records
pub fn parse_records(json: &str) -> anyhow::Result<Vec<Record>> {
    let rows: Vec<serde_json::Value> = serde_json::from_str(json)?;
    rows.into_iter()
        .enumerate()
        .map(|(idx, row)| match row {
            serde_json::Value::Object(map) => Ok(map
                .into_iter()
                .map(|(k, v)| (k, FieldValue::from(v)))
                .collect::<Record>()),
            other => anyhow::bail!("row {} is not an object: {}", idx, other),
        })
        .collect()
}
