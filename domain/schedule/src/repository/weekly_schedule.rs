use async_trait::async_trait;
use chrono::NaiveDate;
use kernel::DBRepository;
use uuid::Uuid;

use crate::model::entity::WeeklyScheduleEntry;

#[async_trait]
pub trait WeeklyScheduleRepo: DBRepository<WeeklyScheduleEntry> + Send + Sync {
    /// Lookup that tolerates a concurrently removed entry.
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<WeeklyScheduleEntry>>;

    /// Schedule entries are keyed by (asset tag, day).
    async fn get_by_asset_and_day(
        &self,
        asset_tag: &str,
        day: NaiveDate,
    ) -> anyhow::Result<Option<WeeklyScheduleEntry>>;

    /// Entries for one asset inside [week_start, week_start + 7 days).
    async fn get_asset_week(
        &self,
        asset_tag: &str,
        week_start: NaiveDate,
    ) -> anyhow::Result<Vec<WeeklyScheduleEntry>>;
}
