use super::{
    compare_with, fingerprint_map, Error, ExcludeList, FingerprintMap, Flags, Label, MapLookup,
    Mode, Report, Snapshot,
};

use abst_fs::{AbstPath, ObjectType};
use tracing::{debug, info};

pub enum MonitorState {
    /// Nothing captured yet
    Priming,
    /// Snapshot and fingerprints captured at the end of the last cycle
    Steady {
        snapshot: Snapshot,
        fingerprints: FingerprintMap,
    },
}

pub enum CycleOutcome {
    /// First capture taken, nothing to compare against yet
    Primed,
    /// Differences between the previous capture and the current one
    Compared(Report),
    /// The watched root doesn't exist anymore
    RootVanished,
}

/// Repeatedly compares a tree against its own previous capture.
///
/// Every cycle captures the tree once and fingerprints every file once; the
/// capture of a cycle is reused as the starting point of the next one. Changes
/// among the files present in both captures are decided by comparing the two
/// fingerprint maps, since both captures share the same paths on disk
pub struct Monitor {
    root: AbstPath,
    flags: Flags,
    mode: Mode,
    exclude_list: ExcludeList,
    state: MonitorState,
}

impl Monitor {
    pub fn new(root: AbstPath, flags: Flags, mode: Mode, exclude_list: ExcludeList) -> Monitor {
        Monitor {
            root,
            flags,
            mode,
            exclude_list,
            state: MonitorState::Priming,
        }
    }

    pub fn root(&self) -> &AbstPath {
        &self.root
    }
    pub fn state(&self) -> &MonitorState {
        &self.state
    }

    pub fn cycle(&mut self) -> Result<CycleOutcome, Error> {
        // A link whose target is gone counts as gone
        if let None | Some(ObjectType::BrokenLink) = self.root.object_type() {
            info!(root = %self.root, "watched root vanished");
            return Ok(CycleOutcome::RootVanished);
        }

        let snapshot = Snapshot::capture(&self.root, &self.exclude_list)?;
        let fingerprints = fingerprint_map(&snapshot, self.mode)?;

        let outcome = match &self.state {
            MonitorState::Priming => {
                debug!(root = %self.root, "monitor primed");
                CycleOutcome::Primed
            }
            MonitorState::Steady {
                snapshot: previous,
                fingerprints: previous_fingerprints,
            } => {
                // Shared is the pool the changes are picked from, whether it
                //	was asked for or not. It is never part of the output
                let flags = self.flags.with(Label::Shared);
                let detector = MapLookup::new(previous_fingerprints, &fingerprints);
                let mut report = compare_with(&flags, previous, &snapshot, &detector)?;
                report.remove(Label::Shared);
                CycleOutcome::Compared(report)
            }
        };

        self.state = MonitorState::Steady {
            snapshot,
            fingerprints,
        };
        Ok(outcome)
    }
}
