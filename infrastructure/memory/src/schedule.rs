use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use domain_schedule::model::entity::{OrderTrackingRecord, WeeklyScheduleEntry};
use domain_schedule::repository::{OrderTrackingRepo, WeeklyScheduleRepo};
use kernel::{DBRepository, MutableRepository, ReadOnlyRepository};
use uuid::Uuid;

use crate::MemoryDb;

pub struct MemoryWeeklyScheduleRepo {
    db: Arc<MemoryDb>,
}

impl MemoryWeeklyScheduleRepo {
    pub fn new(db: Arc<MemoryDb>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReadOnlyRepository<WeeklyScheduleEntry> for MemoryWeeklyScheduleRepo {
    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<WeeklyScheduleEntry> {
        self.db
            .schedule_entries
            .get(&id)
            .map(|el| el.clone())
            .with_context(|| format!("No such schedule entry: {id}"))
    }

    async fn get_all(&self) -> anyhow::Result<Vec<WeeklyScheduleEntry>> {
        Ok(self.db.schedule_entries.iter().map(|el| el.value().clone()).collect())
    }
}

#[async_trait]
impl MutableRepository<WeeklyScheduleEntry> for MemoryWeeklyScheduleRepo {
    async fn insert(&self, entity: &WeeklyScheduleEntry) -> anyhow::Result<Uuid> {
        self.db.schedule_entries.insert(entity.id, entity.clone());
        Ok(entity.id)
    }

    async fn update(&self, entity: &WeeklyScheduleEntry) -> anyhow::Result<()> {
        if !self.db.schedule_entries.contains_key(&entity.id) {
            anyhow::bail!("No such schedule entry: {}", entity.id);
        }
        self.db.schedule_entries.insert(entity.id, entity.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<()> {
        self.db.schedule_entries.remove(&id);
        Ok(())
    }
}

impl DBRepository<WeeklyScheduleEntry> for MemoryWeeklyScheduleRepo {}

#[async_trait]
impl WeeklyScheduleRepo for MemoryWeeklyScheduleRepo {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<WeeklyScheduleEntry>> {
        Ok(self.db.schedule_entries.get(&id).map(|el| el.clone()))
    }

    async fn get_by_asset_and_day(
        &self,
        asset_tag: &str,
        day: NaiveDate,
    ) -> anyhow::Result<Option<WeeklyScheduleEntry>> {
        Ok(self
            .db
            .schedule_entries
            .iter()
            .find(|el| el.asset_tag == asset_tag && el.day == day)
            .map(|el| el.value().clone()))
    }

    async fn get_asset_week(
        &self,
        asset_tag: &str,
        week_start: NaiveDate,
    ) -> anyhow::Result<Vec<WeeklyScheduleEntry>> {
        let week_end = week_start
            .checked_add_days(Days::new(7))
            .context("Schedule week end overflows the calendar")?;
        let mut entries: Vec<_> = self
            .db
            .schedule_entries
            .iter()
            .filter(|el| el.asset_tag == asset_tag && el.day >= week_start && el.day < week_end)
            .map(|el| el.value().clone())
            .collect();
        entries.sort_by_key(|el| el.day);
        Ok(entries)
    }
}

pub struct MemoryOrderTrackingRepo {
    db: Arc<MemoryDb>,
}

impl MemoryOrderTrackingRepo {
    pub fn new(db: Arc<MemoryDb>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReadOnlyRepository<OrderTrackingRecord> for MemoryOrderTrackingRepo {
    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<OrderTrackingRecord> {
        self.db
            .tracking_records
            .get(&id)
            .map(|el| el.clone())
            .with_context(|| format!("No such tracking record: {id}"))
    }

    async fn get_all(&self) -> anyhow::Result<Vec<OrderTrackingRecord>> {
        Ok(self.db.tracking_records.iter().map(|el| el.value().clone()).collect())
    }
}

#[async_trait]
impl MutableRepository<OrderTrackingRecord> for MemoryOrderTrackingRepo {
    async fn insert(&self, entity: &OrderTrackingRecord) -> anyhow::Result<Uuid> {
        self.db.tracking_records.insert(entity.id, entity.clone());
        Ok(entity.id)
    }

    async fn update(&self, entity: &OrderTrackingRecord) -> anyhow::Result<()> {
        if !self.db.tracking_records.contains_key(&entity.id) {
            anyhow::bail!("No such tracking record: {}", entity.id);
        }
        self.db.tracking_records.insert(entity.id, entity.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<()> {
        self.db.tracking_records.remove(&id);
        Ok(())
    }
}

impl DBRepository<OrderTrackingRecord> for MemoryOrderTrackingRepo {}

#[async_trait]
impl OrderTrackingRepo for MemoryOrderTrackingRepo {
    async fn get_by_asset_week(
        &self,
        asset_tag: &str,
        week_start: NaiveDate,
    ) -> anyhow::Result<Vec<OrderTrackingRecord>> {
        Ok(self
            .db
            .tracking_records
            .iter()
            .filter(|el| el.asset_tag == asset_tag && el.week_start == week_start)
            .map(|el| el.value().clone())
            .collect())
    }
}
