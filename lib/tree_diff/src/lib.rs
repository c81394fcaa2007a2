mod classify;
mod compare;
mod detect;
mod display;
mod error;
mod exclude;
mod fingerprint;
mod group;
mod monitor;
mod normalize;
mod snapshot;
pub use classify::{classify, Classification};
pub use compare::{compare, compare_with};
pub use detect::{Cascade, ChangeDetector, MapLookup};
pub use display::{render_full, render_summary};
pub use error::Error;
pub use exclude::{ExcludeList, ExcludeListError};
pub use fingerprint::{
    checksum_map, fingerprint, fingerprint_map, Fingerprint, FingerprintMap, Mode,
};
pub use group::{Flags, Group, Label, Report};
pub use monitor::{CycleOutcome, Monitor, MonitorState};
pub use normalize::{flatten, strip_root, ListedPath, RelPath};
pub use snapshot::Snapshot;

#[cfg(test)]
mod testing;
