use async_trait::async_trait;
use kernel::DBRepository;

use crate::model::entity::EquipmentTicket;

#[async_trait]
pub trait TicketRepo: DBRepository<EquipmentTicket> + Send + Sync {
    /// Non-completed tickets for one asset, any maintenance type.
    async fn get_open_by_asset(&self, asset_tag: &str) -> anyhow::Result<Vec<EquipmentTicket>>;

    /// All non-completed tickets.
    async fn get_all_open(&self) -> anyhow::Result<Vec<EquipmentTicket>>;
}
