use kernel::AggregateRoot;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One worker attached to one ticket.
///
/// Ranks of a worker's live allocations always form a contiguous `1..=N`;
/// removing one closes the gap it leaves.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub id: Uuid,
    pub worker_id: Uuid,
    pub ticket_id: Uuid,
    /// 1 = the worker's primary assignment.
    pub activity_rank: u32,
}

impl AggregateRoot for Allocation {
    fn id(&self) -> Uuid {
        self.id
    }
}
