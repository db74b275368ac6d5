//! JSON helpers for analysis summaries and other serde types.

use crate::error::{IoError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub fn to_json<T>(data: &T) -> Result<String>
where
    T: Serialize,
{
    Ok(serde_json::to_string(data)?)
}

pub fn to_json_pretty<T>(data: &T) -> Result<String>
where
    T: Serialize,
{
    Ok(serde_json::to_string_pretty(data)?)
}

/// Deserializes from JSON, rejecting blank input up front.
pub fn from_json<T>(json: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    if json.trim().is_empty() {
        return Err(IoError::validation("Empty JSON string"));
    }

    Ok(serde_json::from_str(json)?)
}

/// Writes pretty-printed JSON to `path`.
pub fn write_json_file<T, P>(data: &T, path: P) -> Result<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let json = to_json_pretty(data)?;
    std::fs::write(&path, json).map_err(|e| {
        IoError::FileSystem(e).with_context(format!("writing JSON to {:?}", path.as_ref()))
    })?;
    Ok(())
}

pub fn read_json_file<T, P>(path: P) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let json = std::fs::read_to_string(&path).map_err(|e| {
        IoError::FileSystem(e).with_context(format!("reading JSON from {:?}", path.as_ref()))
    })?;
    from_json(&json)
}
