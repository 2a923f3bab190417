//! Counting metadata loader (strict parsing).

pub mod schema;

use std::fs;

use counted_core::error::{CountedError, Result};

pub use schema::{MemberEntry, MetadataConfig, TypeEntry};

pub fn load_from_file(path: &str) -> Result<MetadataConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| CountedError::Internal(format!("read metadata failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<MetadataConfig> {
    let cfg: MetadataConfig = serde_yaml::from_str(s)
        .map_err(|e| CountedError::InvalidMetadata(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
