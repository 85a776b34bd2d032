//! First-seen index of simulation states for one run

use ahash::AHashMap;

use crate::core::error::{Result, SimError};
use crate::core::types::StepIndex;
use crate::platform::Grid;
use crate::simulation::fingerprint::Fingerprint;

#[derive(Debug, Clone)]
struct HistoryEntry {
    step: StepIndex,
    snapshot: Option<Grid>,
}

/// Fingerprint -> step at which that state was first reached
///
/// Owned by a single accelerator run. Entries are only ever added, and each
/// fingerprint is recorded once.
#[derive(Debug)]
pub struct History {
    entries: AHashMap<Fingerprint, HistoryEntry>,
    keep_snapshots: bool,
}

impl History {
    pub fn new(keep_snapshots: bool) -> Self {
        Self {
            entries: AHashMap::new(),
            keep_snapshots,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record `grid` as reached at `step` unless its fingerprint is known
    pub fn record(&mut self, fingerprint: Fingerprint, step: StepIndex, grid: &Grid) {
        let keep = self.keep_snapshots;
        self.entries.entry(fingerprint).or_insert_with(|| HistoryEntry {
            step,
            snapshot: keep.then(|| grid.clone()),
        });
    }

    /// Step at which `grid`'s state was first seen, if it was
    ///
    /// With snapshots kept, a fingerprint hit whose stored grid differs from
    /// `grid` is a collision and reported as an invariant violation.
    pub fn first_seen(&self, fingerprint: Fingerprint, grid: &Grid) -> Result<Option<StepIndex>> {
        let Some(entry) = self.entries.get(&fingerprint) else {
            return Ok(None);
        };

        if let Some(snapshot) = &entry.snapshot {
            if snapshot != grid {
                return Err(SimError::InvariantViolation(format!(
                    "fingerprint {:#018x} from step {} matches a different grid",
                    fingerprint.0, entry.step
                )));
            }
        }

        Ok(Some(entry.step))
    }
}
