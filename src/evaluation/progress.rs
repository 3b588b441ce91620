/// Periodic, non-fatal notice of how far a run has advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub instances_seen: u64,
}
