//! Registration counters and statistics snapshots.

use std::collections::BTreeMap;

use serde::Serialize;

/// Outcome counts of one `register_all` run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RegistrationReport {
    pub registered: usize,
    pub skipped: usize,
    pub failed: usize,
    pub total: usize,
}

impl RegistrationReport {
    /// True when no route failed validation or binding.
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// Read-only view of the registry for startup logs and health payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegistryStatistics {
    pub total_routers: usize,
    pub registered: usize,
    pub skipped: usize,
    pub failed: usize,
    /// Pending routes per category flag. Combined categories count once per flag.
    pub by_category: BTreeMap<String, usize>,
}
