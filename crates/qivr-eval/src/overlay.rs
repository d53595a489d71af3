//! Catalog overlays: JSON documents that add conditions to, or replace data
//! in, the built-in catalog.
//!
//! ```json
//! { "overlay_version": 1, "benchmarks": { "frozen_shoulder": { ... } } }
//! ```
//!
//! Callers own reading the document; this module only parses and applies it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::benchmarks::{Catalog, RecoveryBenchmark};
use crate::error::EvalError;

/// Current overlay format version. Bump when the document shape changes.
pub const CURRENT_OVERLAY_VERSION: u32 = 1;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogOverlay {
    /// Missing or 0 = pre-versioned overlay.
    #[serde(default)]
    pub overlay_version: u32,
    #[serde(default)]
    pub benchmarks: BTreeMap<String, RecoveryBenchmark>,
}

impl CatalogOverlay {
    pub fn from_json(json: &str) -> Result<Self, EvalError> {
        // Check the version on the raw value so a newer shape is reported as
        // such rather than as a field error.
        let raw: serde_json::Value = serde_json::from_str(json)?;
        let found = raw
            .get("overlay_version")
            .and_then(|v| v.as_u64())
            .unwrap_or(0);
        if found > u64::from(CURRENT_OVERLAY_VERSION) {
            return Err(EvalError::UnsupportedOverlayVersion {
                found,
                supported: CURRENT_OVERLAY_VERSION,
            });
        }

        Ok(serde_json::from_value(raw)?)
    }

    /// Validate every entry, then insert them all. A rejected entry leaves
    /// `catalog` untouched.
    pub fn apply(self, catalog: &mut Catalog) -> Result<(), EvalError> {
        for (key, benchmark) in &self.benchmarks {
            benchmark.validate(key)?;
        }

        let mut added = 0usize;
        let mut replaced = 0usize;
        for (key, benchmark) in self.benchmarks {
            match catalog.insert(key, benchmark)? {
                Some(_) => replaced += 1,
                None => added += 1,
            }
        }

        info!(added, replaced, "catalog overlay applied");
        Ok(())
    }
}

impl Catalog {
    /// The built-in catalog with an overlay document applied.
    pub fn with_overlay(json: &str) -> Result<Self, EvalError> {
        let mut catalog = Catalog::builtin();
        CatalogOverlay::from_json(json)?.apply(&mut catalog)?;
        Ok(catalog)
    }
}
