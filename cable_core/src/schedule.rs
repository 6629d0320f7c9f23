//! # Cable Schedule
//!
//! The `CableSchedule` struct is the root container for a job's cable
//! entries. It mirrors how a sizing sheet is organized: job metadata at the
//! top, one row per cable, results recomputed on demand.
//!
//! ## Structure
//!
//! ```text
//! CableSchedule
//! ├── meta: ScheduleMetadata (version, engineer, job info, timestamps)
//! └── items: HashMap<Uuid, CableSizingInput> (all cable rows)
//! ```
//!
//! The schedule is an in-memory container; it serializes to human-readable
//! JSON for whatever layer owns storage or transport.
//!
//! ## Example
//!
//! ```rust
//! use cable_core::schedule::CableSchedule;
//!
//! let schedule = CableSchedule::new("Jane Engineer", "25-042", "ACME Corp");
//! let json = serde_json::to_string_pretty(&schedule).unwrap();
//! assert!(json.contains("25-042"));
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalogue::Catalogue;
use crate::errors::SizingResult;
use crate::sizing::{calculate, CableSizingInput, CableSizingResult};

/// Current schema version for serialized schedules
pub const SCHEMA_VERSION: &str = "0.2.0";

/// Root schedule container.
///
/// Rows are stored in a flat UUID-keyed map: O(1) lookup, no duplicate-id
/// issues, stable references when rows are reordered in a UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CableSchedule {
    /// Schedule metadata (version, engineer, job info)
    pub meta: ScheduleMetadata,

    /// All cable rows, keyed by UUID
    pub items: HashMap<Uuid, CableSizingInput>,
}

impl CableSchedule {
    /// Create a new empty schedule.
    pub fn new(
        engineer: impl Into<String>,
        job_id: impl Into<String>,
        client: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        CableSchedule {
            meta: ScheduleMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            items: HashMap::new(),
        }
    }

    /// Add a cable row. Returns the UUID assigned to it.
    pub fn add_item(&mut self, item: CableSizingInput) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(id, item);
        self.touch();
        id
    }

    /// Remove a cable row by UUID. Returns the removed row if it existed.
    pub fn remove_item(&mut self, id: &Uuid) -> Option<CableSizingInput> {
        let item = self.items.remove(id);
        if item.is_some() {
            self.touch();
        }
        item
    }

    /// Get a cable row by UUID.
    pub fn get_item(&self, id: &Uuid) -> Option<&CableSizingInput> {
        self.items.get(id)
    }

    /// Number of cable rows
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the schedule has no rows
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Recompute every row against the given catalogue.
    ///
    /// Results are keyed by the row's UUID; the first malformed row aborts
    /// the batch with its error, matching the engine's propagation contract.
    pub fn calculate_all(
        &self,
        catalogue: &Catalogue,
    ) -> SizingResult<HashMap<Uuid, CableSizingResult>> {
        let mut results = HashMap::with_capacity(self.items.len());
        for (id, input) in &self.items {
            results.insert(*id, calculate(input, catalogue)?);
        }
        Ok(results)
    }

    /// Update the modified timestamp
    fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }
}

/// Schedule metadata: who, which job, when.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleMetadata {
    /// Schema version of the serialized form
    pub version: String,
    /// Responsible engineer
    pub engineer: String,
    /// Job/project number (e.g., "25-001")
    pub job_id: String,
    /// Client name
    pub client: String,
    /// Creation timestamp (UTC)
    pub created: DateTime<Utc>,
    /// Last modification timestamp (UTC)
    pub modified: DateTime<Utc>,
}
