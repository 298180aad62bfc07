use async_trait::async_trait;
use chrono::NaiveDate;

use crate::model::vo::ReconciledScheduleDay;

#[async_trait]
pub trait ReconcileService: Send + Sync {
    /// The reconciled board for one asset's schedule week.
    async fn asset_week(
        &self,
        asset_tag: &str,
        week_start: NaiveDate,
    ) -> anyhow::Result<Vec<ReconciledScheduleDay>>;
}
