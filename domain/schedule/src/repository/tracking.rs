use async_trait::async_trait;
use chrono::NaiveDate;
use kernel::DBRepository;

use crate::model::entity::OrderTrackingRecord;

#[async_trait]
pub trait OrderTrackingRepo: DBRepository<OrderTrackingRecord> + Send + Sync {
    /// Tracking records for one asset's schedule week.
    async fn get_by_asset_week(
        &self,
        asset_tag: &str,
        week_start: NaiveDate,
    ) -> anyhow::Result<Vec<OrderTrackingRecord>>;
}
