use async_trait::async_trait;

use crate::exception::MaintenanceResult;
use crate::model::vo::{ReleaseCommand, ReleaseOutcome};

#[async_trait]
pub trait ReleaseService: Send + Sync {
    /// Close a ticket: validate the checklist, classify the outcome, write
    /// the history logs and the release record, propagate to the weekly
    /// schedule, and clear the ticket's allocations.
    async fn release(&self, command: ReleaseCommand) -> MaintenanceResult<ReleaseOutcome>;
}
