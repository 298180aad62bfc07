use async_trait::async_trait;
use chrono::NaiveDate;
use kernel::{DBRepository, MutableRepository, ReadOnlyRepository};
use mockall::mock;
use uuid::Uuid;

use crate::model::entity::{OrderTrackingRecord, WeeklyScheduleEntry};
use crate::repository::{OrderTrackingRepo, WeeklyScheduleRepo};

mock! {
    pub WeeklyScheduleRepo {}
    #[async_trait]
    impl WeeklyScheduleRepo for WeeklyScheduleRepo {
        async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<WeeklyScheduleEntry>>;
        async fn get_by_asset_and_day(
            &self,
            asset_tag: &str,
            day: NaiveDate,
        ) -> anyhow::Result<Option<WeeklyScheduleEntry>>;
        async fn get_asset_week(
            &self,
            asset_tag: &str,
            week_start: NaiveDate,
        ) -> anyhow::Result<Vec<WeeklyScheduleEntry>>;
    }
    #[async_trait]
    impl ReadOnlyRepository<WeeklyScheduleEntry> for WeeklyScheduleRepo {
        async fn get_by_id(&self, id: Uuid) -> anyhow::Result<WeeklyScheduleEntry>;
    }
    #[async_trait]
    impl MutableRepository<WeeklyScheduleEntry> for WeeklyScheduleRepo {
        async fn insert(&self, entity: &WeeklyScheduleEntry) -> anyhow::Result<Uuid>;
        async fn update(&self, entity: &WeeklyScheduleEntry) -> anyhow::Result<()>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<WeeklyScheduleEntry> for WeeklyScheduleRepo {}
}

mock! {
    pub OrderTrackingRepo {}
    #[async_trait]
    impl OrderTrackingRepo for OrderTrackingRepo {
        async fn get_by_asset_week(
            &self,
            asset_tag: &str,
            week_start: NaiveDate,
        ) -> anyhow::Result<Vec<OrderTrackingRecord>>;
    }
    #[async_trait]
    impl ReadOnlyRepository<OrderTrackingRecord> for OrderTrackingRepo {
        async fn get_by_id(&self, id: Uuid) -> anyhow::Result<OrderTrackingRecord>;
    }
    #[async_trait]
    impl MutableRepository<OrderTrackingRecord> for OrderTrackingRepo {
        async fn insert(&self, entity: &OrderTrackingRecord) -> anyhow::Result<Uuid>;
        async fn update(&self, entity: &OrderTrackingRecord) -> anyhow::Result<()>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<OrderTrackingRecord> for OrderTrackingRepo {}
}
