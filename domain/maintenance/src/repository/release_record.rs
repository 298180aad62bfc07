use async_trait::async_trait;
use kernel::DBRepository;
use uuid::Uuid;

use crate::model::entity::ReleaseRecord;

#[async_trait]
pub trait ReleaseRecordRepo: DBRepository<ReleaseRecord> + Send + Sync {
    /// The record closing one ticket, if the ticket was ever released.
    async fn get_by_ticket_id(&self, ticket_id: Uuid) -> anyhow::Result<Option<ReleaseRecord>>;

    /// Release history of one asset.
    async fn get_by_asset(&self, asset_tag: &str) -> anyhow::Result<Vec<ReleaseRecord>>;
}
