//! Domain entities for block template assembly.

use crate::domain::compact::CompactTarget;
use serde::{Deserialize, Serialize};
use shared_types::Algo;

/// The slice of a candidate block header this subsystem may touch while
/// a miner assembles a template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockCandidate {
    /// Candidate timestamp (Unix epoch seconds).
    pub time: i64,
    /// Compact difficulty the candidate will be mined against.
    pub bits: CompactTarget,
    /// Algorithm the candidate will be mined with.
    pub algo: Algo,
}
