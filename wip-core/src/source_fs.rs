use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{Result, WipError};
use crate::page::{WipPage, build_page};
use crate::policy::Thresholds;
use crate::query::WipQuery;
use crate::source::WipSource;

/// Serves pages out of a JSON file holding either a bare array of client
/// records or an object with a `data` array.
pub struct FsWipSource {
    path: PathBuf,
    records: Vec<Value>,
    thresholds: Thresholds,
}

impl FsWipSource {
    pub fn open(path: &Path, thresholds: Thresholds) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let doc: Value = serde_json::from_slice(&bytes)?;
        let records = load_records(doc).map_err(|e| match e {
            WipError::Config(msg) => WipError::Config(format!("{}: {msg}", path.display())),
            other => other,
        })?;
        tracing::debug!(path = %path.display(), records = records.len(), "loaded WIP dataset");
        Ok(Self {
            path: path.to_path_buf(),
            records,
            thresholds,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[Value] {
        &self.records
    }
}

pub fn load_records(doc: Value) -> Result<Vec<Value>> {
    match doc {
        Value::Array(items) => Ok(items),
        Value::Object(mut obj) => match obj.remove("data") {
            Some(Value::Array(items)) => Ok(items),
            _ => Err(WipError::Config("expected a `data` array".into())),
        },
        _ => Err(WipError::Config(
            "expected an array of clients or an object with `data`".into(),
        )),
    }
}

impl WipSource for FsWipSource {
    fn fetch_page(&self, query: &WipQuery) -> Result<WipPage> {
        query.validate()?;
        Ok(build_page(&self.records, query, &self.thresholds))
    }
}
