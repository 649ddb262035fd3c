//! Origin/focus resolution: expressing positions relative to a chosen body.
//!
//! Focus index 0 is the world origin; k > 0 selects body k - 1. Changing
//! the focus never mutates stored positions, only what is subtracted at
//! read time. Cached trajectories derived from offsets are
//! therefore rebuilt over the whole history whenever the focus changes.

use crate::simulation::states::Snapshot;
use crate::simulation::timeline::Timeline;
use crate::simulation::units::NVec3;

/// The coordinate offset of the focused body in base units, or zero for
/// the world origin.
pub fn focus_offset(snapshot: &Snapshot, focus: usize) -> NVec3 {
    if focus == 0 {
        NVec3::zeros()
    } else {
        snapshot.bodies[focus - 1].position.base_value()
    }
}

/// The focus choices a host can present: "None" followed by body names,
/// index-aligned with the focus convention.
pub fn focus_labels(snapshot: &Snapshot) -> Vec<String> {
    let mut labels = vec!["None".to_string()];
    labels.extend(snapshot.bodies.iter().map(|b| b.name.clone()));
    labels
}

/// Render-ready per-body trajectories: base-unit position minus the focus
/// offset, one point per snapshot.
#[derive(Debug, Default)]
pub struct PathCache {
    paths: Vec<Vec<NVec3>>,
}

impl PathCache {
    pub fn new() -> Self {
        Self { paths: Vec::new() }
    }

    /// One polyline per body, index-aligned with the snapshot body order.
    pub fn paths(&self) -> &[Vec<NVec3>] {
        &self.paths
    }

    /// Recompute every trajectory from the full history. Needed when the
    /// focus changes (every historical offset changes with it) and when
    /// the history itself is replaced.
    pub fn rebuild(&mut self, timeline: &Timeline) {
        self.paths.clear();
        let mut snapshots = timeline.snapshots().iter();
        if let Some(first) = snapshots.next() {
            let offset = focus_offset(first, timeline.focus());
            self.paths = first
                .bodies
                .iter()
                .map(|b| vec![b.position.base_value() - offset])
                .collect();
        }
        for snapshot in snapshots {
            self.extend(snapshot, timeline.focus());
        }
    }

    /// Append one point per body for a freshly computed snapshot.
    pub fn extend(&mut self, snapshot: &Snapshot, focus: usize) {
        let offset = focus_offset(snapshot, focus);
        for (path, body) in self.paths.iter_mut().zip(&snapshot.bodies) {
            path.push(body.position.base_value() - offset);
        }
    }
}
