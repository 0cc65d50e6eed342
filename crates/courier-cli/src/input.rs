//! JSON inputs for the CLI: payload batches, scan-event trails and
//! reconciliation options.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use courier_core::{CarrierPayload, ReconcileOptions};
use courier_model::ScanEvent;

/// A payload file holds either one payload or an array of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum PayloadFile {
    Many(Vec<CarrierPayload>),
    One(Box<CarrierPayload>),
}

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read {what} file: {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("parse {what} file: {}", path.display()))
}

pub fn load_payloads(path: &Path) -> Result<Vec<CarrierPayload>> {
    let payloads = match read_json::<PayloadFile>(path, "payload")? {
        PayloadFile::Many(payloads) => payloads,
        PayloadFile::One(payload) => vec![*payload],
    };
    debug!(path = %path.display(), count = payloads.len(), "loaded payloads");
    Ok(payloads)
}

pub fn load_events(path: &Path) -> Result<Vec<ScanEvent>> {
    read_json(path, "scan event")
}

/// Options from `--config`, or defaults when no file is given.
pub fn load_options(path: Option<&Path>) -> Result<ReconcileOptions> {
    match path {
        Some(path) => read_json(path, "config"),
        None => Ok(ReconcileOptions::default()),
    }
}
